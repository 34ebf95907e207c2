use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "featgrep",
    version,
    about = "Search the feature catalog by exact name or prefix"
)]
pub struct Cli {
    /// Load the catalog from a TOML file instead of the built-in one
    #[arg(long, global = true, env = "FEATGREP_CATALOG")]
    pub catalog: Option<PathBuf>,

    /// Emit results as JSON instead of formatted blocks
    #[arg(long, global = true)]
    pub json: bool,

    /// Disable colored output
    #[arg(long = "no-color", global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Find every feature whose name starts with the query
    Search(SearchArgs),
    /// Look up a single feature by exact name
    Lookup(LookupArgs),
    /// List the whole catalog in name order
    List,
    /// Interactive search prompt (the default)
    Interactive,
}

#[derive(Debug, Args)]
pub struct SearchArgs {
    /// Name prefix to search for (at least 2 characters)
    pub query: String,
}

#[derive(Debug, Args)]
pub struct LookupArgs {
    /// Exact feature name, matched case-insensitively
    pub name: String,
}
