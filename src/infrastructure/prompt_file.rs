//! File system prompt storage

use crate::error::{PromptagError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Abstract storage for one prompt document
pub trait PromptRepository {
    /// Location of the prompt, for messages
    fn path(&self) -> &Path;

    /// Read the prompt text
    fn read_prompt(&self) -> Result<String>;

    /// Replace the prompt text
    fn write_prompt(&self, text: &str) -> Result<()>;
}

/// Prompt stored as a plain text file
#[derive(Debug, Clone)]
pub struct FileSystemPrompt {
    pub path: PathBuf,
}

impl FileSystemPrompt {
    pub fn new(path: PathBuf) -> Self {
        FileSystemPrompt { path }
    }
}

impl PromptRepository for FileSystemPrompt {
    fn path(&self) -> &Path {
        &self.path
    }

    fn read_prompt(&self) -> Result<String> {
        fs::read_to_string(&self.path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                PromptagError::PromptNotFound(self.path.clone())
            } else {
                PromptagError::Io(e)
            }
        })
    }

    /// Best-effort atomic replace: write to a temp file in the same
    /// directory, then rename into place.
    ///
    /// On Windows, `rename` does not overwrite existing files, so the
    /// destination is removed first.
    fn write_prompt(&self, text: &str) -> Result<()> {
        let path = &self.path;

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let tmp_name = format!(
            "{}.promptag-tmp-{}",
            path.file_name()
                .and_then(|s| s.to_str())
                .unwrap_or("prompt.txt"),
            std::process::id()
        );
        let tmp_path = path.with_file_name(tmp_name);

        fs::write(&tmp_path, text)?;

        if cfg!(windows) && path.exists() {
            fs::remove_file(path)?;
        }

        fs::rename(&tmp_path, path)?;
        tracing::info!(path = %path.display(), bytes = text.len(), "wrote prompt");
        Ok(())
    }
}
