//! CLI layer - Command-line interface

pub mod commands;
pub mod output;

pub use commands::{BracketArgs, Cli, Commands, WeightArgs};
pub use output::{format_tag_details, format_tag_list};
