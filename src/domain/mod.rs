//! Domain layer - Tag grammar and tag list state

pub mod store;
pub mod tags;

pub use store::TagListStore;
pub use tags::{BracketKind, TagOperation, TagToken};
