//! Error Types
//!
//! Failures surfaced by the i18n translation engine and the node table.
//! None of them is recoverable inside a single view creation pass.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, I18nError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum I18nError {
    /// The token stream does not describe a well-formed tree: an element
    /// placeholder with no remaining index, a closing tag with no open
    /// ancestor, an element left open, or a token in the wrong position.
    #[error("Structural mismatch{}: {reason}", fmt_position(.position))]
    StructuralMismatch {
        position: Option<usize>,
        reason: String,
    },

    /// A logical index has no node in the view's node table.
    #[error("No node found at logical index {0}")]
    MissingNode(usize),

    /// The same logical index was created twice.
    #[error("A node already exists at logical index {0}")]
    DuplicateNode(usize),

    #[error("Invalid i18n configuration: {0}")]
    InvalidConfig(String),
}

impl I18nError {
    pub fn mismatch_at(position: usize, reason: impl Into<String>) -> Self {
        I18nError::StructuralMismatch {
            position: Some(position),
            reason: reason.into(),
        }
    }

    pub fn mismatch(reason: impl Into<String>) -> Self {
        I18nError::StructuralMismatch {
            position: None,
            reason: reason.into(),
        }
    }

    pub fn is_structural_mismatch(&self) -> bool {
        matches!(self, I18nError::StructuralMismatch { .. })
    }
}

fn fmt_position(position: &Option<usize>) -> String {
    match position {
        Some(pos) => format!(" at token {}", pos),
        None => String::new(),
    }
}
