//! I18n Runtime Configuration
//!
//! Policy knobs for the template runtime. Loaded from JSON
//! (`{ "fallback": "untranslated" }`) or built in code.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{I18nError, Result};

/// What to do when a translation cannot be applied to a view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[repr(u8)]
pub enum TranslationFallbackStrategy {
    /// Abort the view creation pass and return the error.
    #[default]
    Error = 0,
    /// Log a warning and keep the untranslated structure.
    Untranslated = 1,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct I18nConfig {
    pub fallback: TranslationFallbackStrategy,
}

impl I18nConfig {
    pub fn new(fallback: TranslationFallbackStrategy) -> Self {
        I18nConfig { fallback }
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        serde_json::from_str(content).map_err(|e| I18nError::InvalidConfig(e.to_string()))
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            I18nError::InvalidConfig(format!("cannot read {}: {}", path.display(), e))
        })?;
        Self::from_json_str(&content)
    }

    pub fn falls_back_to_untranslated(&self) -> bool {
        self.fallback == TranslationFallbackStrategy::Untranslated
    }
}
