//! Creation Instructions
//!
//! The template-order node creation a view runs before any translation is
//! applied: `text(0)`, `element_start(3, "p")`, `element_end()`.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::render3::node_table::NodeTable;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "camelCase")]
pub enum CreateInstruction {
    Text { index: usize },
    ElementStart { index: usize, tag: String },
    ElementEnd,
}

pub fn text(index: usize) -> CreateInstruction {
    CreateInstruction::Text { index }
}

pub fn element_start(index: usize, tag: &str) -> CreateInstruction {
    CreateInstruction::ElementStart {
        index,
        tag: tag.to_string(),
    }
}

pub fn element_end() -> CreateInstruction {
    CreateInstruction::ElementEnd
}

/// `count` text nodes at indices `0..count`.
pub fn texts(count: usize) -> impl Iterator<Item = CreateInstruction> {
    (0..count).map(text)
}

pub fn apply_instructions(instructions: &[CreateInstruction], table: &mut NodeTable) -> Result<()> {
    for instruction in instructions {
        match instruction {
            CreateInstruction::Text { index } => {
                table.text(*index)?;
            }
            CreateInstruction::ElementStart { index, tag } => {
                table.element_start(*index, tag)?;
            }
            CreateInstruction::ElementEnd => table.element_end()?,
        }
    }
    Ok(())
}
