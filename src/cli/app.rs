//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use super::commands::{self, ServeOverrides};
use wellatlas::config::ReferenceDate;

/// wellatlas - Operations dashboard for customers, sites and jobs
#[derive(Parser, Debug)]
#[command(
    name = "wellatlas",
    version,
    about = "Operations dashboard for customers, sites and jobs",
    long_about = "Serve a read-only dashboard over a WellAtlas SQLite database.\n\n\
                  Pages show a map of job sites, customers, site and job details,\n\
                  job timelines and a calendar of scheduled work."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file (default: ./wellatlas.toml, then the user config dir)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Serve the dashboard over HTTP
    Serve {
        /// Interface to bind
        #[arg(long)]
        host: Option<String>,

        /// Port to bind
        #[arg(short, long)]
        port: Option<u16>,

        /// SQLite database file
        #[arg(long)]
        db: Option<PathBuf>,

        /// Date the home page lists jobs for (YYYY-MM-DD or "today")
        #[arg(long)]
        reference_date: Option<ReferenceDate>,
    },

    /// Print the effective configuration
    Config,

    /// Show version
    Version,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    match cli.command {
        Some(Command::Serve {
            host,
            port,
            db,
            reference_date,
        }) => commands::serve(
            cli.config.as_deref(),
            ServeOverrides {
                host,
                port,
                db,
                reference_date,
            },
        ),
        Some(Command::Config) => commands::show_config(cli.config),
        Some(Command::Version) => {
            println!("wellatlas v{}", wellatlas::VERSION);
            Ok(())
        },
        None => {
            println!("wellatlas v{}", wellatlas::VERSION);
            println!("\nRun 'wellatlas --help' for usage");
            println!("Run 'wellatlas serve' to start the dashboard");
            Ok(())
        },
    }
}
