use anyhow::{Context, Result};
use std::io::{self, BufRead, Write};
use tracing::info;

use crate::cli_types::{Cli, Command};
use crate::errors::FeatgrepError;
use crate::service::SearchService;
use crate::ui;

pub struct CliApp {
    service: SearchService,
    json: bool,
}

impl CliApp {
    pub fn new(cli: &Cli) -> Result<Self> {
        if cli.no_color {
            colored::control::set_override(false);
        }

        let service = match &cli.catalog {
            Some(path) => SearchService::from_catalog_path(path)
                .with_context(|| format!("failed to load catalog from {}", path.display()))?,
            None => SearchService::with_builtin_catalog(),
        };
        info!(features = service.len(), "featgrep ready");

        Ok(Self {
            service,
            json: cli.json,
        })
    }

    pub fn run(&self, command: Option<Command>) -> Result<()> {
        match command.unwrap_or(Command::Interactive) {
            Command::Search(args) => self.search(&args.query),
            Command::Lookup(args) => self.lookup(&args.name),
            Command::List => self.list(),
            Command::Interactive => self.interactive(),
        }
    }

    fn search(&self, query: &str) -> Result<()> {
        match self.service.search(query) {
            Ok(results) if results.is_empty() => ui::print_no_matches(query.trim()),
            Ok(results) => self.render(&results)?,
            Err(FeatgrepError::QueryTooShort { min }) => ui::print_query_too_short(min),
            Err(err) => return Err(err.into()),
        }
        Ok(())
    }

    fn lookup(&self, name: &str) -> Result<()> {
        match self.service.lookup(name) {
            Some(record) => self.render(std::slice::from_ref(&record))?,
            None => ui::print_not_found(name.trim()),
        }
        Ok(())
    }

    fn list(&self) -> Result<()> {
        self.render(&self.service.all())
    }

    /// Prompt loop: each line is a prefix query, 'back' leaves.
    fn interactive(&self) -> Result<()> {
        ui::print_interactive_header();
        let stdin = io::stdin();

        loop {
            print!("\nsearch> ");
            io::stdout().flush()?;

            let mut line = String::new();
            if stdin.lock().read_line(&mut line)? == 0 {
                break; // EOF
            }

            let query = line.trim();
            if query.is_empty() {
                continue;
            }
            if query.eq_ignore_ascii_case("back") || query.eq_ignore_ascii_case("exit") {
                break;
            }

            self.search(query)?;
        }

        Ok(())
    }

    fn render(&self, results: &[crate::types::FeatureRecord]) -> Result<()> {
        if self.json {
            let rendered = serde_json::to_string_pretty(results)
                .context("failed to serialize results to JSON")?;
            println!("{rendered}");
        } else {
            ui::print_results(results);
        }
        Ok(())
    }
}
