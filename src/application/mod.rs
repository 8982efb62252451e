//! Application layer - Use cases and orchestration

pub mod manage_config;
pub mod prompt_service;
pub mod tag_editor;

pub use manage_config::ConfigService;
pub use prompt_service::{FormatReport, PromptService};
pub use tag_editor::TagEditor;
