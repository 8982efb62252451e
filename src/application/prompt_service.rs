//! Prompt document use cases: load, normalize, save

use crate::domain::tags::normalize;
use crate::domain::TagListStore;
use crate::error::{PromptagError, Result};
use crate::infrastructure::PromptRepository;

/// Outcome of normalizing a prompt document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatReport {
    pub original: String,
    pub normalized: String,
}

impl FormatReport {
    pub fn changed(&self) -> bool {
        self.original != self.normalized
    }
}

/// Service for reading and writing a prompt document
pub struct PromptService<R: PromptRepository> {
    repository: R,
}

impl<R: PromptRepository> PromptService<R> {
    /// Create a new prompt service
    pub fn new(repository: R) -> Self {
        PromptService { repository }
    }

    /// Read the prompt and tokenize it into a fresh store
    pub fn load(&self) -> Result<TagListStore> {
        let text = self.repository.read_prompt()?;
        let store = TagListStore::from_text(&text);
        tracing::debug!(
            path = %self.repository.path().display(),
            tags = store.count(),
            "loaded prompt"
        );
        Ok(store)
    }

    /// Serialize the store and write it back
    pub fn save(&self, store: &TagListStore) -> Result<()> {
        self.repository.write_prompt(&store.to_text())
    }

    /// Compute the normalized form of the prompt without writing it
    pub fn format(&self) -> Result<FormatReport> {
        let original = self.repository.read_prompt()?;
        let normalized = normalize(&original);
        Ok(FormatReport {
            original,
            normalized,
        })
    }

    /// Normalize the prompt in place. Returns the report; the file is only
    /// rewritten when its content changes.
    pub fn format_in_place(&self) -> Result<FormatReport> {
        let report = self.format()?;
        if report.changed() {
            self.repository.write_prompt(&report.normalized)?;
        }
        Ok(report)
    }

    /// Fail with [`PromptagError::NotNormalized`] if the prompt would change
    pub fn check(&self) -> Result<FormatReport> {
        let report = self.format()?;
        if report.changed() {
            return Err(PromptagError::NotNormalized(
                self.repository.path().to_path_buf(),
            ));
        }
        Ok(report)
    }
}
