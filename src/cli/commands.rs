//! CLI command definitions

use clap::{ArgGroup, Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "promptag")]
#[command(about = "Edit comma-separated prompt tags", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the tags of a prompt file with their indices
    Tags {
        /// Prompt file
        file: PathBuf,

        /// Print only the number of tags
        #[arg(short, long)]
        count: bool,

        /// Show weight and bracket depth for each tag
        #[arg(short, long, conflicts_with = "count")]
        details: bool,
    },

    /// Normalize separators and whitespace
    Format {
        /// Prompt file
        file: PathBuf,

        /// Exit with an error if the file is not normalized (never writes)
        #[arg(long)]
        check: bool,

        /// Print the normalized prompt instead of writing it
        #[arg(long, conflicts_with = "check")]
        stdout: bool,
    },

    /// Change the weight annotation of a tag
    Weight(WeightArgs),

    /// Add or remove one layer of emphasis brackets
    Bracket(BracketArgs),

    /// Move a tag to another position
    Move {
        /// Prompt file
        file: PathBuf,

        /// Current index of the tag
        from: usize,

        /// Target index
        to: usize,
    },

    /// Replace a tag with new text (commas split it, blank text removes it)
    Edit {
        /// Prompt file
        file: PathBuf,

        /// Index of the tag to edit
        index: usize,

        /// New tag text
        text: String,
    },

    /// Remove a tag or line break
    Delete {
        /// Prompt file
        file: PathBuf,

        /// Index of the tag to remove
        index: usize,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },
}

#[derive(Args, Debug)]
#[command(group(ArgGroup::new("change").required(true).args(["up", "down", "set", "remove"])))]
pub struct WeightArgs {
    /// Prompt file
    pub file: PathBuf,

    /// Index of the tag
    pub index: usize,

    /// Increase the weight by one step
    #[arg(long)]
    pub up: bool,

    /// Decrease the weight by one step
    #[arg(long)]
    pub down: bool,

    /// Set the weight to a value (clamped to -10.0..=10.0)
    #[arg(long, value_name = "WEIGHT", allow_negative_numbers = true)]
    pub set: Option<f64>,

    /// Remove the weight annotation
    #[arg(long)]
    pub remove: bool,

    /// Step size for --up/--down (defaults to the configured weight_step)
    #[arg(long, value_name = "STEP", conflicts_with_all = ["set", "remove"])]
    pub step: Option<f64>,
}

#[derive(Args, Debug)]
#[command(group(ArgGroup::new("kind").required(true).args(["round", "square"])))]
#[command(group(ArgGroup::new("change").required(true).args(["add", "remove"])))]
pub struct BracketArgs {
    /// Prompt file
    pub file: PathBuf,

    /// Index of the tag
    pub index: usize,

    /// Use round brackets ( )
    #[arg(long)]
    pub round: bool,

    /// Use square brackets [ ]
    #[arg(long)]
    pub square: bool,

    /// Add one layer
    #[arg(long)]
    pub add: bool,

    /// Remove one outer layer
    #[arg(long)]
    pub remove: bool,
}
