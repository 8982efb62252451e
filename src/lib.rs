//! promptag - Prompt tag editor
//!
//! Keeps a comma-separated prompt (as used by image generation tools) and its
//! list of tags in sync, and edits per-tag weight annotations (`<tag:1.2>`)
//! and emphasis brackets (`(tag)`, `[tag]`).

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::PromptagError;
