//! Translation Tokens
//!
//! A translated message arrives as a flat list of strings: static text at
//! even positions, placeholder names at odd positions. The stream is tagged
//! once here so the builder never has to guess whether a placeholder opens
//! an element, closes one, or stands for an expression.

use std::collections::VecDeque;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{I18nError, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "camelCase")]
pub enum I18nToken {
    Text(String),
    OpenTag(String),
    CloseTag(String),
    Expression(String),
}

impl I18nToken {
    pub fn is_text(&self) -> bool {
        matches!(self, I18nToken::Text(_))
    }

    /// Raw string form: the text content or the placeholder name.
    pub fn as_str(&self) -> &str {
        match self {
            I18nToken::Text(s)
            | I18nToken::OpenTag(s)
            | I18nToken::CloseTag(s)
            | I18nToken::Expression(s) => s,
        }
    }
}

/// Placeholder name to the queue of logical element indices it opens.
///
/// The same name can be used several times in a message; each opening
/// occurrence consumes the next index in FIFO order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementPlaceholders {
    queues: IndexMap<String, VecDeque<usize>>,
}

impl ElementPlaceholders {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, indices: impl IntoIterator<Item = usize>) {
        self.queues
            .insert(name.into(), indices.into_iter().collect());
    }

    pub fn push(&mut self, name: impl Into<String>, index: usize) {
        self.queues.entry(name.into()).or_default().push_back(index);
    }

    pub fn contains(&self, name: &str) -> bool {
        self.queues.contains_key(name)
    }

    /// Pops the next index for `name`. `None` when the name is unknown or
    /// its queue is exhausted.
    pub fn take_next(&mut self, name: &str) -> Option<usize> {
        self.queues.get_mut(name).and_then(VecDeque::pop_front)
    }

    pub fn remaining(&self, name: &str) -> usize {
        self.queues.get(name).map_or(0, VecDeque::len)
    }

    /// Every index still queued, in map order.
    pub fn all_indices(&self) -> Vec<usize> {
        self.queues.values().flatten().copied().collect()
    }

    pub fn is_drained(&self) -> bool {
        self.queues.values().all(VecDeque::is_empty)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &VecDeque<usize>)> {
        self.queues.iter().map(|(name, queue)| (name.as_str(), queue))
    }
}

impl<S: Into<String>, I: IntoIterator<Item = usize>> FromIterator<(S, I)> for ElementPlaceholders {
    fn from_iter<T: IntoIterator<Item = (S, I)>>(iter: T) -> Self {
        let mut placeholders = ElementPlaceholders::new();
        for (name, indices) in iter {
            placeholders.insert(name, indices);
        }
        placeholders
    }
}

/// Expression placeholder name to binding slot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpressionPlaceholders {
    slots: IndexMap<String, usize>,
}

impl ExpressionPlaceholders {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, slot: usize) {
        self.slots.insert(name.into(), slot);
    }

    pub fn get(&self, name: &str) -> Option<usize> {
        self.slots.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.slots.contains_key(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.slots.iter().map(|(name, slot)| (name.as_str(), *slot))
    }
}

impl<S: Into<String>> FromIterator<(S, usize)> for ExpressionPlaceholders {
    fn from_iter<T: IntoIterator<Item = (S, usize)>>(iter: T) -> Self {
        let mut placeholders = ExpressionPlaceholders::new();
        for (name, slot) in iter {
            placeholders.insert(name, slot);
        }
        placeholders
    }
}

/// Tagged token stream of one translated message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenStream {
    tokens: Vec<I18nToken>,
}

impl TokenStream {
    /// Tags a flat token list.
    ///
    /// Odd positions are expressions when named in `expressions`, opening
    /// tags when named in `elements` (drained queues included), closing tags
    /// otherwise.
    pub fn classify<S: AsRef<str>>(
        raw: &[S],
        elements: &ElementPlaceholders,
        expressions: &ExpressionPlaceholders,
    ) -> Self {
        let tokens = raw
            .iter()
            .enumerate()
            .map(|(pos, token)| {
                let token = token.as_ref();
                if pos % 2 == 0 {
                    I18nToken::Text(token.to_string())
                } else if expressions.contains(token) {
                    I18nToken::Expression(token.to_string())
                } else if elements.contains(token) {
                    I18nToken::OpenTag(token.to_string())
                } else {
                    I18nToken::CloseTag(token.to_string())
                }
            })
            .collect();
        TokenStream { tokens }
    }

    /// Wraps an already tagged stream, checking text/placeholder alternation.
    pub fn from_tokens(tokens: Vec<I18nToken>) -> Result<Self> {
        for (pos, token) in tokens.iter().enumerate() {
            let expects_text = pos % 2 == 0;
            if token.is_text() != expects_text {
                let expected = if expects_text { "text" } else { "placeholder" };
                return Err(I18nError::mismatch_at(
                    pos,
                    format!("expected a {} token, found {:?}", expected, token),
                ));
            }
        }
        Ok(TokenStream { tokens })
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn get(&self, pos: usize) -> Option<&I18nToken> {
        self.tokens.get(pos)
    }

    /// Static text at `pos`, empty when `pos` is not a text token.
    pub fn text_at(&self, pos: usize) -> &str {
        match self.tokens.get(pos) {
            Some(I18nToken::Text(text)) => text,
            _ => "",
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, I18nToken> {
        self.tokens.iter()
    }
}

impl<'a> IntoIterator for &'a TokenStream {
    type Item = &'a I18nToken;
    type IntoIter = std::slice::Iter<'a, I18nToken>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}
