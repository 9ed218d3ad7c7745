//! Render3 I18n Module
//!
//! Runtime side of i18n: computes the structure of a translated message and
//! re-materializes a view's nodes to match it.

pub mod cache;
pub mod dom_tree;
pub mod message;
pub mod template;
pub mod text_binding;
pub mod tokens;
pub mod translation;

// Re-exports
pub use cache::TranslationCache;
pub use dom_tree::{translate_dom_tree, translate_dom_tree_parts};
pub use message::{I18nMessage, TranslationKey};
pub use template::{I18nTemplate, TemplateView};
pub use text_binding::{dynamic_text_binding, render_text_node, BindingSlots, BindingValue, NO_CHANGE};
pub use tokens::{ElementPlaceholders, ExpressionPlaceholders, I18nToken, TokenStream};
pub use translation::{compute_translation, TextNodeDef, TextPart, Translation};
