//! Translation Cache
//!
//! Translations are computed once per message and shared by every view that
//! renders it. The cache is owned by the caller; entries are never
//! invalidated since parsed messages do not change.

use std::collections::HashMap;
use std::rc::Rc;

use super::message::{I18nMessage, TranslationKey};
use super::translation::Translation;
use crate::error::Result;

#[derive(Debug)]
struct CacheEntry {
    message: I18nMessage,
    translation: Rc<Translation>,
}

/// Entries are bucketed by [`TranslationKey`] and matched on the full
/// message, so two messages with the same digest never share a translation.
#[derive(Debug, Default)]
pub struct TranslationCache {
    entries: HashMap<TranslationKey, Vec<CacheEntry>>,
}

impl TranslationCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached translation of `message`, computing it on first use. Errors
    /// are not cached.
    pub fn get_or_compute(&mut self, message: &I18nMessage) -> Result<Rc<Translation>> {
        let key = message.key();
        if let Some(translation) = self.lookup(key, message) {
            return Ok(translation);
        }
        tracing::debug!(key = key.0, "i18n translation cache miss");
        let translation = Rc::new(message.compute_translation()?);
        self.entries.entry(key).or_default().push(CacheEntry {
            message: message.clone(),
            translation: Rc::clone(&translation),
        });
        Ok(translation)
    }

    pub fn get(&self, message: &I18nMessage) -> Option<Rc<Translation>> {
        self.lookup(message.key(), message)
    }

    pub fn contains(&self, message: &I18nMessage) -> bool {
        self.get(message).is_some()
    }

    fn lookup(&self, key: TranslationKey, message: &I18nMessage) -> Option<Rc<Translation>> {
        self.entries
            .get(&key)?
            .iter()
            .find(|entry| entry.message == *message)
            .map(|entry| Rc::clone(&entry.translation))
    }

    pub fn len(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
