//! Angular Core - render3 i18n runtime
//!
//! Translation structure computation and DOM re-materialization for
//! index-addressed view nodes.

#![deny(clippy::all)]

pub mod config;
pub mod error;
pub mod render3;

// Re-exports
pub use config::{I18nConfig, TranslationFallbackStrategy};
pub use error::{I18nError, Result};
