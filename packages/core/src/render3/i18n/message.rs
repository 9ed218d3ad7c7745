//! I18n Message
//!
//! A translated message as handed over by the translation loader: the raw
//! token list and both placeholder maps. Immutable once built.

use serde::{Deserialize, Serialize};
use xxhash_rust::xxh3::Xxh3;

use super::tokens::{ElementPlaceholders, ExpressionPlaceholders, TokenStream};
use super::translation::{compute_translation, Translation};
use crate::error::Result;

/// Identity of a translated message, used as the translation cache key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct TranslationKey(pub u64);

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct I18nMessage {
    pub tokens: Vec<String>,
    pub element_placeholders: ElementPlaceholders,
    pub expression_placeholders: ExpressionPlaceholders,
}

impl I18nMessage {
    pub fn new<S: Into<String>>(
        tokens: impl IntoIterator<Item = S>,
        element_placeholders: ElementPlaceholders,
        expression_placeholders: ExpressionPlaceholders,
    ) -> Self {
        I18nMessage {
            tokens: tokens.into_iter().map(Into::into).collect(),
            element_placeholders,
            expression_placeholders,
        }
    }

    pub fn token_stream(&self) -> TokenStream {
        TokenStream::classify(
            self.tokens.as_slice(),
            &self.element_placeholders,
            &self.expression_placeholders,
        )
    }

    /// Builds the translation from a copy of the element placeholders, so
    /// the message itself is never drained.
    pub fn compute_translation(&self) -> Result<Translation> {
        let mut elements = self.element_placeholders.clone();
        compute_translation(
            &self.token_stream(),
            &mut elements,
            &self.expression_placeholders,
        )
    }

    /// Digest of the tokens and both placeholder maps.
    pub fn key(&self) -> TranslationKey {
        let mut hasher = Xxh3::new();
        for token in &self.tokens {
            write_str(&mut hasher, token);
        }
        hasher.update(&[0xff]);
        for (name, indices) in self.element_placeholders.iter() {
            write_str(&mut hasher, name);
            for index in indices {
                hasher.update(&(*index as u64).to_le_bytes());
            }
            hasher.update(&[0xfe]);
        }
        hasher.update(&[0xff]);
        for (name, slot) in self.expression_placeholders.iter() {
            write_str(&mut hasher, name);
            hasher.update(&(slot as u64).to_le_bytes());
        }
        TranslationKey(hasher.digest())
    }
}

fn write_str(hasher: &mut Xxh3, value: &str) {
    hasher.update(&(value.len() as u64).to_le_bytes());
    hasher.update(value.as_bytes());
}
