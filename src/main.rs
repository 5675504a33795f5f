//! Main entry point for the Urdu Translator CLI

#![forbid(unsafe_code)]

use clap::Parser;
use dotenvy::dotenv;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use urdu_translator::cli::commands::{self, Commands};
use urdu_translator::core::config::{DEFAULT_ENDPOINT, DEFAULT_ENV_FILE};

/// Urdu Translator - translate Urdu text to English
#[derive(Parser, Debug)]
#[command(name = "urdu-translator", version, about, long_about = None)]
struct Args {
    /// Credentials file holding TRANSLATOR_API_KEY and TRANSLATOR_API_REGION
    #[arg(long, global = true, default_value = DEFAULT_ENV_FILE)]
    env_file: PathBuf,

    /// Translator API host
    #[arg(long, global = true, default_value = DEFAULT_ENDPOINT)]
    endpoint: String,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenv().ok();

    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose { "debug" } else { "info" };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("urdu_translator={}", log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Execute command
    match args.command {
        Some(Commands::Translate { text }) => {
            commands::handle_translate(args.env_file, args.endpoint, text).await?;
        }
        Some(Commands::Server { host, port }) => {
            commands::handle_server(args.env_file, args.endpoint, host, port).await?;
        }
        None => {
            println!("Please specify a command. Use --help for more information.");
        }
    }

    Ok(())
}
