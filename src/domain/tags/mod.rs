//! Tag system

pub mod bracket;
pub mod operation;
pub mod token;
pub mod tokenizer;
pub mod weight;

// Re-export main types
pub use bracket::{add_brackets, remove_brackets, BracketKind};
pub use operation::TagOperation;
pub use token::{TagToken, NEWLINE, NEWLINE_GLYPH};
pub use tokenizer::{normalize, serialize, tokenize};
pub use weight::{
    get_weight, has_weight, remove_weight, set_weight, step, weight_text, Weight,
};
