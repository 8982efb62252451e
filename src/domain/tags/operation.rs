//! Operation selector for single-tag grammar edits

use super::bracket::BracketKind;
use super::weight;

/// A pure edit applied to one tag's raw text
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TagOperation {
    IncreaseWeight,
    DecreaseWeight,
    SetWeight(f64),
    RemoveWeight,
    AddBracket(BracketKind),
    RemoveBracket(BracketKind),
}

impl TagOperation {
    /// Apply this operation to `raw`, using `weight_step` for increments
    pub fn apply(&self, raw: &str, weight_step: f64) -> String {
        match self {
            TagOperation::IncreaseWeight => weight::step(raw, weight_step, true),
            TagOperation::DecreaseWeight => weight::step(raw, weight_step, false),
            TagOperation::SetWeight(value) => weight::set_weight(raw, *value),
            TagOperation::RemoveWeight => weight::remove_weight(raw),
            TagOperation::AddBracket(kind) => kind.add(raw),
            TagOperation::RemoveBracket(kind) => kind.remove(raw),
        }
    }
}
