use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "emotioncurve", version, about = "EmotionCurve CLI")]
struct Cli {
    /// Curve file to operate on (defaults to `curve.default_file` from config)
    #[arg(long, global = true)]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Beat management
    Beat {
        #[command(subcommand)]
        action: commands::beat::BeatAction,
    },
    /// Whole-curve operations: chart, export, import
    Curve {
        #[command(subcommand)]
        action: commands::curve::CurveAction,
    },
    /// Ask the language model for pacing feedback
    Analyze {
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// API key management
    Auth {
        #[command(subcommand)]
        action: commands::auth::AuthAction,
    },
}

fn init_logging() {
    let filter = EnvFilter::try_from_env("EMOTIONCURVE_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_logging();

    let cli = Cli::parse();
    let file = cli.file;
    let result = match cli.command {
        Commands::Beat { action } => commands::beat::run(action, file),
        Commands::Curve { action } => commands::curve::run(action, file),
        Commands::Analyze { json } => commands::analyze::run(json, file),
        Commands::Config { action } => commands::config::run(action),
        Commands::Auth { action } => commands::auth::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
