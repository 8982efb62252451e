//! Infrastructure layer - External I/O and persistence

pub mod config;
pub mod logging;
pub mod prompt_file;

pub use config::Config;
pub use prompt_file::{FileSystemPrompt, PromptRepository};
