//! Render3 Module
//!
//! Index-addressed view nodes and the i18n runtime working on them.

pub mod i18n;
pub mod instructions;
pub mod interfaces;
pub mod node_table;

// Re-exports
pub use interfaces::{NodeGraph, ParentIndex};
pub use node_table::{NodeId, NodeKind, NodeTable};
