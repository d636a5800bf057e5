//! Command line front end for TOML dispatch tables.
//!
//! ```text
//! switch-dispatch --table routes.toml lookup users/list orders/42
//! switch-dispatch --table routes.toml inspect
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use serde_json::json;

use switch_dispatch::config::load_config;
use switch_dispatch::observability::init_logging;

#[derive(Parser)]
#[command(name = "switch-dispatch")]
#[command(about = "Compile a dispatch table and look up key sequences", long_about = None)]
struct Cli {
    /// Dispatch table (TOML).
    #[arg(short, long)]
    table: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Dispatch each path and print the value or NOT_FOUND
    Lookup {
        #[arg(required = true)]
        paths: Vec<String>,
    },
    /// Print the compiled trie's shape as JSON
    Inspect,
}

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // The table carries the logging settings, so the load is reported once
    // the subscriber is installed.
    let config = load_config(&cli.table)?;
    init_logging(&config.logging);
    tracing::info!(
        path = %cli.table.display(),
        entries = config.entries.len(),
        "Dispatch table loaded"
    );

    let dispatcher = config.to_builder().build();

    match cli.command {
        Commands::Lookup { paths } => {
            let mut missed = false;
            for path in &paths {
                match dispatcher.dispatch(&config.split_path(path)) {
                    Some(value) => println!("{path}\t{value}"),
                    None => {
                        tracing::debug!(path = %path, "No matching entry");
                        println!("{path}\tNOT_FOUND");
                        missed = true;
                    }
                }
            }
            if missed {
                return Ok(ExitCode::FAILURE);
            }
        }
        Commands::Inspect => {
            let report = json!({
                "table": cli.table.display().to_string(),
                "keys": config.keys,
                "entries": config.entries.len(),
                "stats": dispatcher.stats(),
            });
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    Ok(ExitCode::SUCCESS)
}
