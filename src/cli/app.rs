//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use super::commands;

/// repo-catalog - In-memory catalog of software repositories
#[derive(Parser, Debug)]
#[command(
    name = "repo-catalog",
    version,
    about = "In-memory catalog of software repositories",
    long_about = "Serve a JSON API for registering, updating, listing, deleting and liking\n\
                  software repositories.\n\n\
                  Everything is kept in memory and lost when the process stops."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the HTTP server
    Serve {
        /// Path to a TOML config file (default: ./repo-catalog.toml if present)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Interface to bind, overriding the config file
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on, overriding the config file
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Show version
    Version,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Command::Serve { config, host, port }) => {
            let config = commands::load_config(config.as_deref(), host, port)?;
            init_logger(cli.verbose, &config.log.level);
            commands::serve(&config)
        },
        Some(Command::Version) => {
            commands::version(cli.json);
            Ok(())
        },
        None => {
            commands::version(cli.json);
            if !cli.json {
                println!("\nRun 'repo-catalog --help' for usage");
                println!("Run 'repo-catalog serve' to start the server");
            }
            Ok(())
        },
    }
}

fn init_logger(verbose: bool, level: &str) {
    let level = if verbose { "debug" } else { level };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}
