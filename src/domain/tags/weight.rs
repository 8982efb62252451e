//! Weight annotation grammar: `<text:weight>`
//!
//! A weighted tag wraps its text in angle brackets and carries a numeric
//! suffix rendered with one fractional digit, e.g. `<blue sky:1.2>`. All
//! functions here are total: text without a well-formed suffix is simply
//! treated as unweighted.

use regex::Regex;
use std::sync::OnceLock;

/// Weight assumed for a tag without an annotation
pub const DEFAULT_WEIGHT: f64 = 1.0;

/// Default increment for [`step`]
pub const DEFAULT_STEP: f64 = 0.1;

pub const MIN_WEIGHT: f64 = -10.0;
pub const MAX_WEIGHT: f64 = 10.0;

/// Matches `<base:number>`; the base is greedy so only the last suffix counts
fn weight_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^<(.*):(-?[0-9]+(?:\.[0-9]+)?)>$").unwrap())
}

/// Weight read from a tag's raw text
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Weight {
    pub value: f64,
    /// False when the text carries no annotation (value is then 1.0)
    pub present: bool,
}

/// Split a weighted raw into its base text and numeric suffix as written
fn split(raw: &str) -> Option<(&str, &str)> {
    let captures = weight_regex().captures(raw)?;
    Some((captures.get(1)?.as_str(), captures.get(2)?.as_str()))
}

/// Split a weighted raw into its base text and numeric value
fn parse(raw: &str) -> Option<(&str, f64)> {
    let (base, number) = split(raw)?;
    let value = number.parse::<f64>().ok()?;
    Some((base, value))
}

fn is_wrapped(raw: &str) -> bool {
    raw.len() >= 2 && raw.starts_with('<') && raw.ends_with('>')
}

/// Round to one decimal and clamp into the allowed range
fn normalize_value(value: f64) -> f64 {
    let value = if value.is_finite() {
        value
    } else {
        DEFAULT_WEIGHT
    };
    let rounded = ((value * 10.0).round() / 10.0).clamp(MIN_WEIGHT, MAX_WEIGHT);
    // Avoid rendering "-0.0"
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

fn format_value(value: f64) -> String {
    format!("{:.1}", normalize_value(value))
}

pub fn has_weight(raw: &str) -> bool {
    parse(raw).is_some()
}

pub fn get_weight(raw: &str) -> Weight {
    match parse(raw) {
        Some((_, value)) => Weight {
            value,
            present: true,
        },
        None => Weight {
            value: DEFAULT_WEIGHT,
            present: false,
        },
    }
}

/// The weight suffix exactly as it appears in the text (`"1.25"` for
/// `<cat:1.25>`), or `None` when unweighted
pub fn weight_text(raw: &str) -> Option<&str> {
    split(raw).map(|(_, number)| number)
}

/// Write `value` as the tag's weight, wrapping the text in `<>` if needed.
///
/// The value is clamped to `[-10.0, 10.0]` and rendered with one decimal.
pub fn set_weight(raw: &str, value: f64) -> String {
    if let Some((base, _)) = parse(raw) {
        return format!("<{}:{}>", base, format_value(value));
    }

    let inner = if is_wrapped(raw) {
        &raw[1..raw.len() - 1]
    } else {
        raw
    };
    format!("<{}:{}>", inner, format_value(value))
}

/// Raise or lower the weight by `delta`.
///
/// An unweighted tag starts from 1.0. The result never leaves
/// `[-10.0, 10.0]`.
pub fn step(raw: &str, delta: f64, increasing: bool) -> String {
    let current = get_weight(raw).value;
    let next = if increasing {
        current + delta
    } else {
        current - delta
    };
    set_weight(raw, next)
}

/// Strip the annotation, returning the bare base text
pub fn remove_weight(raw: &str) -> String {
    match parse(raw) {
        Some((base, _)) => base.to_string(),
        None => raw.to_string(),
    }
}
