//! Core data models for translation

use serde::{Deserialize, Serialize};
use std::fmt;

/// Returned in place of a translation when the response lacks one
pub const TRANSLATION_NOT_FOUND: &str = "Translation not found";

/// One element of the request body array
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslateItem {
    /// Text to translate
    pub text: String,
}

impl TranslateItem {
    /// Wrap `text` for the request body
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Result of a single translation call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranslationOutcome {
    /// `[0].translations[0].text` was present and non-empty
    Translated(String),
    /// The response parsed but did not have the expected shape
    NotFound,
}

impl TranslationOutcome {
    /// Pull the first translation out of a Translator API response
    pub fn from_response(json: &serde_json::Value) -> Self {
        json.get(0)
            .and_then(|item| item.get("translations"))
            .and_then(|translations| translations.get(0))
            .and_then(|translation| translation.get("text"))
            .and_then(|text| text.as_str())
            .filter(|text| !text.is_empty())
            .map(|text| TranslationOutcome::Translated(text.to_string()))
            .unwrap_or(TranslationOutcome::NotFound)
    }

    /// Whether the response carried a translation
    pub fn is_found(&self) -> bool {
        matches!(self, TranslationOutcome::Translated(_))
    }

    /// Collapse to a string, substituting the fallback text
    pub fn into_text(self) -> String {
        match self {
            TranslationOutcome::Translated(text) => text,
            TranslationOutcome::NotFound => TRANSLATION_NOT_FOUND.to_string(),
        }
    }
}

impl fmt::Display for TranslationOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TranslationOutcome::Translated(text) => write!(f, "{}", text),
            TranslationOutcome::NotFound => write!(f, "{}", TRANSLATION_NOT_FOUND),
        }
    }
}
