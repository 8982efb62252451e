//! Conversion between prompt text and tag tokens

use super::token::{TagToken, NEWLINE};

/// Split prompt text into tag tokens.
///
/// Commas separate tags and every newline becomes a token of its own.
/// Surrounding whitespace is trimmed from each tag and empty pieces are
/// dropped, so `" a ,, b "` yields `["a", "b"]`.
pub fn tokenize(text: &str) -> Vec<TagToken> {
    text.replace(NEWLINE, ",\n,")
        .split(',')
        .filter_map(TagToken::new)
        .collect()
}

/// Join tag tokens back into prompt text.
///
/// A comma follows each tag unless it is the last token or the next token is
/// a newline, which acts as its own separator.
pub fn serialize(tokens: &[TagToken]) -> String {
    let mut output = String::new();

    for (idx, token) in tokens.iter().enumerate() {
        output.push_str(token.raw());

        if token.is_newline() {
            continue;
        }

        match tokens.get(idx + 1) {
            Some(next) if !next.is_newline() => output.push(','),
            _ => {}
        }
    }

    output
}

/// Tokenize then serialize, normalizing whitespace and separators
pub fn normalize(text: &str) -> String {
    serialize(&tokenize(text))
}
