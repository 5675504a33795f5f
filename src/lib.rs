//! Urdu Translator - Urdu to English translation via the Microsoft Translator API
//!
//! This library reads credentials from a local `.env.local` file and exposes an
//! asynchronous translate operation, a CLI, and a small HTTP endpoint.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod core;
pub mod server;
pub mod cli;

// Re-export key types for convenience
pub use crate::core::{
    client::{translate_text, translate_text_via, Translator},
    config::{EnvFile, TranslatorConfig},
    models::{TranslationOutcome, TRANSLATION_NOT_FOUND},
    errors::TranslationError,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
