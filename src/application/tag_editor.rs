//! Index-addressed tag editing
//!
//! Callers refer to tags by their position in the list. Every edit builds a
//! new token sequence and hands it to [`TagListStore::replace_all`], so the
//! store never holds a partially edited list.

use crate::domain::tags::weight::{MAX_WEIGHT, MIN_WEIGHT};
use crate::domain::tags::{tokenize, TagOperation, TagToken};
use crate::domain::TagListStore;
use crate::error::{PromptagError, Result};

/// Service for editing single tags inside a tag list
#[derive(Debug)]
pub struct TagEditor {
    store: TagListStore,
    weight_step: f64,
    copied: Option<String>,
}

impl TagEditor {
    /// Create an editor over `store`, using `weight_step` for weight increments
    pub fn new(store: TagListStore, weight_step: f64) -> Self {
        TagEditor {
            store,
            weight_step,
            copied: None,
        }
    }

    pub fn store(&self) -> &TagListStore {
        &self.store
    }

    pub fn into_store(self) -> TagListStore {
        self.store
    }

    /// Apply a weight or bracket operation to the tag at `index`.
    ///
    /// Returns the resulting token, or `None` when the edit left the tag
    /// empty (e.g. removing the brackets from `()`) and it was dropped.
    pub fn apply(&mut self, index: usize, operation: TagOperation) -> Result<Option<TagToken>> {
        let raw = self.text_at(index)?;

        if let TagOperation::SetWeight(value) = operation {
            if !value.is_finite() {
                return Err(PromptagError::InvalidWeight(value.to_string()));
            }
            if !(MIN_WEIGHT..=MAX_WEIGHT).contains(&value) {
                tracing::warn!(value, "weight out of range, clamping");
            }
        }

        let updated = operation.apply(raw, self.weight_step);
        if updated == raw {
            tracing::debug!(index, ?operation, "operation left tag unchanged");
            return Ok(TagToken::new(raw));
        }

        tracing::debug!(index, ?operation, from = raw, to = %updated, "applied tag operation");
        let token = TagToken::new(&updated);
        self.splice(index, token.clone().into_iter().collect());
        Ok(token)
    }

    /// Commit an in-place edit of the tag at `index`.
    ///
    /// The new text is tokenized, so commas split it into several tags and
    /// blank text removes the tag. Returns how many tokens replaced it.
    pub fn edit(&mut self, index: usize, text: &str) -> Result<usize> {
        self.text_at(index)?;

        let replacement = tokenize(text);
        let count = replacement.len();
        tracing::debug!(index, replaced_by = count, "committed tag edit");
        self.splice(index, replacement);
        Ok(count)
    }

    /// Move the token at `from` so that it ends up at position `to`.
    ///
    /// A line break can be moved, but no token can be dropped onto one.
    pub fn move_tag(&mut self, from: usize, to: usize) -> Result<()> {
        self.check_index(from)?;
        self.check_index(to)?;

        if from == to {
            return Ok(());
        }
        if self.store.get()[to].is_newline() {
            return Err(PromptagError::NewlineTag(to));
        }

        let mut tokens = self.store.get().to_vec();
        let token = tokens.remove(from);
        tokens.insert(to, token);

        tracing::debug!(from, to, "moved tag");
        self.store.replace_all(tokens);
        Ok(())
    }

    /// Remove the token at `index` (line breaks included)
    pub fn delete(&mut self, index: usize) -> Result<TagToken> {
        self.check_index(index)?;

        let removed = self.store.get()[index].clone();
        self.splice(index, Vec::new());
        Ok(removed)
    }

    /// Remember the raw text of the tag at `index` for a later paste
    pub fn copy(&mut self, index: usize) -> Result<&str> {
        let raw = self.text_at(index)?.to_string();
        Ok(self.copied.insert(raw).as_str())
    }

    /// Replace the tag at `index` with the copied tag
    pub fn paste(&mut self, index: usize) -> Result<TagToken> {
        self.text_at(index)?;

        let token = self
            .copied
            .as_deref()
            .and_then(TagToken::new)
            .ok_or(PromptagError::EmptyClipboard)?;

        self.splice(index, vec![token.clone()]);
        Ok(token)
    }

    fn check_index(&self, index: usize) -> Result<()> {
        let count = self.store.count();
        if index >= count {
            return Err(PromptagError::TagIndexOutOfRange { index, count });
        }
        Ok(())
    }

    /// Raw text of the tag at `index`; line breaks are not editable
    fn text_at(&self, index: usize) -> Result<&str> {
        self.check_index(index)?;

        self.store.get()[index]
            .text()
            .ok_or(PromptagError::NewlineTag(index))
    }

    fn splice(&mut self, index: usize, replacement: Vec<TagToken>) {
        let current = self.store.get();
        let mut tokens = Vec::with_capacity(current.len() + replacement.len());
        tokens.extend_from_slice(&current[..index]);
        tokens.extend(replacement);
        tokens.extend_from_slice(&current[index + 1..]);
        self.store.replace_all(tokens);
    }
}
