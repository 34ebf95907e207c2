use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use featgrep::cli::CliApp;
use featgrep::cli_types::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("featgrep=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let app = CliApp::new(&cli)?;
    app.run(cli.command)
}
