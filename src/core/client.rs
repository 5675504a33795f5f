//! Async client for the Microsoft Translator text API

use reqwest::header::{CONTENT_LENGTH, CONTENT_TYPE};
use std::path::Path;
use tracing::{debug, warn};

use crate::core::config::{TranslatorConfig, DEFAULT_ENDPOINT};
use crate::core::errors::Result;
use crate::core::models::{TranslateItem, TranslationOutcome};

/// Path and query of the translate call; direction is fixed to Urdu -> English
pub const TRANSLATE_PATH: &str = "/translate?api-version=3.0&from=ur&to=en";

const SUBSCRIPTION_KEY_HEADER: &str = "Ocp-Apim-Subscription-Key";
const SUBSCRIPTION_REGION_HEADER: &str = "Ocp-Apim-Subscription-Region";

/// Translation client bound to one validated configuration
#[derive(Debug, Clone)]
pub struct Translator {
    client: reqwest::Client,
    config: TranslatorConfig,
}

impl Translator {
    /// Create a new translator
    pub fn new(config: TranslatorConfig) -> Result<Self> {
        config.validate()?;

        let client = reqwest::Client::builder().build()?;

        Ok(Self { client, config })
    }

    /// Translate `text`, substituting the fallback string when the
    /// response carries no translation
    pub async fn translate(&self, text: &str) -> Result<String> {
        Ok(self.translate_outcome(text).await?.into_text())
    }

    /// Translate `text`, keeping "no translation in response" distinct
    pub async fn translate_outcome(&self, text: &str) -> Result<TranslationOutcome> {
        let body = serde_json::to_vec(&[TranslateItem::new(text)])?;
        let url = self.url();

        debug!("POST {} ({} bytes)", url, body.len());

        let response = self
            .client
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .header(SUBSCRIPTION_KEY_HEADER, &self.config.api_key)
            .header(SUBSCRIPTION_REGION_HEADER, &self.config.region)
            .header(CONTENT_LENGTH, body.len())
            .body(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            warn!("Translator API responded with status {}", status);
        }

        let bytes = response.bytes().await?;
        let json: serde_json::Value = serde_json::from_slice(&bytes)?;

        let outcome = TranslationOutcome::from_response(&json);
        if !outcome.is_found() {
            warn!("No translation in response: {}", json);
        }

        Ok(outcome)
    }

    fn url(&self) -> String {
        format!(
            "{}{}",
            self.config.endpoint.trim_end_matches('/'),
            TRANSLATE_PATH
        )
    }

    /// Configuration this client was built with
    pub fn config(&self) -> &TranslatorConfig {
        &self.config
    }
}

/// Translate `text` using credentials read fresh from `env_file`
pub async fn translate_text<P: AsRef<Path>>(env_file: P, text: &str) -> Result<String> {
    translate_text_via(env_file, DEFAULT_ENDPOINT, text).await
}

/// Same as [`translate_text`], against an explicit host
pub async fn translate_text_via<P: AsRef<Path>>(
    env_file: P,
    endpoint: &str,
    text: &str,
) -> Result<String> {
    let config = TranslatorConfig::load(env_file)?.with_endpoint(endpoint);
    Translator::new(config)?.translate(text).await
}
