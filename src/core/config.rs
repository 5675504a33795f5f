//! Configuration management

use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, warn};

use crate::core::errors::{Result, TranslationError};

/// Name of the credentials file
pub const ENV_FILE_NAME: &str = ".env.local";

/// Default location of the credentials file: the project root, independent
/// of the working directory
pub const DEFAULT_ENV_FILE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/.env.local");

/// Key holding the translator subscription key
pub const API_KEY_VAR: &str = "TRANSLATOR_API_KEY";

/// Key holding the translator resource region
pub const API_REGION_VAR: &str = "TRANSLATOR_API_REGION";

/// Value shipped in the template credentials file
pub const PLACEHOLDER_API_KEY: &str = "your_actual_api_key_here";

/// Region used when the credentials file does not name one
pub const DEFAULT_REGION: &str = "uksouth";

/// Microsoft Translator host
pub const DEFAULT_ENDPOINT: &str = "https://api.cognitive.microsofttranslator.com";

/// Parsed `KEY=VALUE` credentials file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvFile {
    vars: HashMap<String, String>,
}

impl EnvFile {
    /// Read and parse the file at `path`.
    ///
    /// An unreadable file yields an empty mapping; the failure is only logged.
    pub fn load<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(content) => {
                let env = Self::parse(&content);
                debug!("Loaded {} entries from {}", env.len(), path.display());
                env
            }
            Err(e) => {
                warn!("Could not load {} file: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Parse file contents, skipping comments and malformed lines
    pub fn parse(content: &str) -> Self {
        let vars = content
            .lines()
            .filter_map(|line| {
                let (key, value) = line.split_once('=')?;
                let (key, value) = (key.trim(), value.trim());
                if key.is_empty() || value.is_empty() || key.starts_with('#') {
                    return None;
                }
                Some((key.to_string(), value.to_string()))
            })
            .collect();

        Self { vars }
    }

    /// Look up a value by name
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    /// Number of recorded entries
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    /// Whether no entries were recorded
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// Borrow the underlying mapping
    pub fn vars(&self) -> &HashMap<String, String> {
        &self.vars
    }
}

/// Configuration for translator
#[derive(Debug, Clone)]
pub struct TranslatorConfig {
    /// Subscription key sent as `Ocp-Apim-Subscription-Key`
    pub api_key: String,
    /// Resource region sent as `Ocp-Apim-Subscription-Region`
    pub region: String,
    /// Scheme and host of the Translator API
    pub endpoint: String,
}

impl TranslatorConfig {
    /// Build a validated configuration from a parsed credentials file
    pub fn from_env_map(env: &EnvFile) -> Result<Self> {
        let api_key = env.get(API_KEY_VAR).unwrap_or_default().to_string();
        let region = env.get(API_REGION_VAR).unwrap_or(DEFAULT_REGION).to_string();

        let config = Self {
            api_key,
            region,
            endpoint: DEFAULT_ENDPOINT.to_string(),
        };
        config.validate()?;

        Ok(config)
    }

    /// Load configuration from a credentials file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::from_env_map(&EnvFile::load(path))
    }

    /// Point the client at a different host
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.api_key.is_empty() || self.api_key == PLACEHOLDER_API_KEY {
            return Err(TranslationError::config(format!(
                "Please set your actual API key ({}) in {} file",
                API_KEY_VAR, ENV_FILE_NAME
            )));
        }

        Ok(())
    }
}
