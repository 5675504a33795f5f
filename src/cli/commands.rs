//! CLI command definitions and handlers

use clap::Subcommand;
use std::path::PathBuf;
use tracing::info;

use crate::core::client::translate_text_via;
use crate::server::api::{run_server, AppState};

/// Commands for the Urdu translator
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Translate Urdu text to English
    Translate {
        /// Text to translate
        text: String,
    },

    /// Start the local translation endpoint
    Server {
        /// Bind address (default: 127.0.0.1)
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Listen port (default: 3000)
        #[arg(short, long, default_value_t = 3000)]
        port: u16,
    },
}

/// Handle translate command
pub async fn handle_translate(
    env_file: PathBuf,
    endpoint: String,
    text: String,
) -> anyhow::Result<()> {
    info!("Translating {} characters", text.chars().count());

    let translation = translate_text_via(&env_file, &endpoint, &text).await?;
    println!("{}", translation);

    Ok(())
}

/// Handle server command
pub async fn handle_server(
    env_file: PathBuf,
    endpoint: String,
    host: String,
    port: u16,
) -> anyhow::Result<()> {
    info!("Starting HTTP server on {}:{}", host, port);
    println!("🚀 Server starting on http://{}:{}", host, port);
    println!("📄 Credentials file: {}", env_file.display());

    run_server(host, port, AppState { env_file, endpoint }).await?;

    Ok(())
}
