//! Tag list store

use crate::domain::tags::{serialize, tokenize, TagToken};

/// Owns the current ordered tag sequence.
///
/// The only mutation is whole-sequence replacement, so readers never see a
/// half-applied update.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagListStore {
    tokens: Vec<TagToken>,
}

impl TagListStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from prompt text
    pub fn from_text(text: &str) -> Self {
        let mut store = Self::new();
        store.load_text(text);
        store
    }

    /// Replace the whole sequence.
    ///
    /// Every `TagToken` is trimmed and non-empty on construction, so the
    /// sequence needs no further checks here.
    pub fn replace_all(&mut self, tokens: Vec<TagToken>) {
        tracing::debug!(
            previous = self.tokens.len(),
            current = tokens.len(),
            "replacing tag list"
        );
        self.tokens = tokens;
    }

    /// Tokenize `text` and replace the sequence with the result
    pub fn load_text(&mut self, text: &str) {
        self.replace_all(tokenize(text));
    }

    pub fn get(&self) -> &[TagToken] {
        &self.tokens
    }

    /// Number of tokens, newlines included
    pub fn count(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn has_newline(&self) -> bool {
        self.tokens.iter().any(TagToken::is_newline)
    }

    /// Serialize the current sequence back to prompt text
    pub fn to_text(&self) -> String {
        serialize(&self.tokens)
    }
}
