//! Error types for promptag

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for promptag application
#[derive(Debug, Error)]
pub enum PromptagError {
    #[error("Tag index {index} out of range (prompt has {count} tag(s))")]
    TagIndexOutOfRange { index: usize, count: usize },

    #[error("Tag {0} is a line break and cannot be edited")]
    NewlineTag(usize),

    #[error("Invalid weight: {0}")]
    InvalidWeight(String),

    #[error("Nothing copied to paste")]
    EmptyClipboard,

    #[error("Prompt file not found: {0}")]
    PromptNotFound(PathBuf),

    #[error("Prompt is not normalized: {0}")]
    NotNormalized(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl PromptagError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            PromptagError::TagIndexOutOfRange { .. } => 2,
            PromptagError::NewlineTag(_) => 3,
            PromptagError::NotNormalized(_) => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            PromptagError::TagIndexOutOfRange { index, count } => {
                if *count == 0 {
                    format!("Tag index {} out of range: the prompt has no tags", index)
                } else {
                    format!(
                        "Tag index {} out of range\n\n\
                        Suggestions:\n\
                        • Valid indices are 0 to {}\n\
                        • Run 'promptag tags <FILE>' to see tag indices",
                        index,
                        count - 1
                    )
                }
            }
            PromptagError::NewlineTag(index) => {
                format!(
                    "Tag {} is a line break and cannot be edited\n\n\
                    Suggestions:\n\
                    • Line breaks can only be moved or deleted\n\
                    • Tags cannot be moved onto a line break; pick a neighbouring index\n\
                    • Run 'promptag tags <FILE>' to see which entries are line breaks (↵)",
                    index
                )
            }
            PromptagError::InvalidWeight(value) => {
                format!(
                    "Invalid weight: '{}'\n\n\
                    Weights are decimal numbers between -10.0 and 10.0\n\
                    Example: promptag weight prompt.txt 0 --set 1.2",
                    value
                )
            }
            PromptagError::PromptNotFound(path) => {
                format!(
                    "Prompt file not found: {}\n\n\
                    Suggestions:\n\
                    • Check the file path\n\
                    • Create the file first, e.g. 'echo \"masterpiece, 1girl\" > prompt.txt'",
                    path.display()
                )
            }
            PromptagError::Config(msg) => {
                if msg.contains("weight_step") {
                    format!(
                        "{}\n\n\
                        weight_step must be a number greater than 0 and at most 20\n\
                        Example: promptag config weight_step 0.05",
                        msg
                    )
                } else if msg.contains("Unknown config key") {
                    format!(
                        "{}\n\n\
                        Example: promptag config --list",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using PromptagError
pub type Result<T> = std::result::Result<T, PromptagError>;
