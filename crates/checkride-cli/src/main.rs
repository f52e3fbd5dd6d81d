//! checkride CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "checkride", version, about = "Flight-training evaluation recorder")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP server
    Serve {
        /// Address to bind
        #[arg(long)]
        host: Option<String>,

        /// Port to bind
        #[arg(long)]
        port: Option<u16>,

        /// Config file path (TOML)
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Print the observable-behavior catalog
    Catalog {
        /// Restrict to one competency code (e.g. "KNO")
        #[arg(long)]
        competence: Option<String>,
    },

    /// Grade a session JSON file offline and print the report
    Report {
        /// Path to a serialized session
        #[arg(long)]
        session: PathBuf,

        /// Safety scores as a JSON map, e.g. '{"Student A": 4}'
        #[arg(long)]
        safety_scores: Option<String>,
    },
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("checkride=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Serve { host, port, config } => commands::serve::execute(host, port, config).await,
        Commands::Catalog { competence } => commands::catalog::execute(competence),
        Commands::Report {
            session,
            safety_scores,
        } => commands::report::execute(session, safety_scores),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
