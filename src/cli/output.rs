//! Output formatting utilities

use crate::domain::tags::{weight_text, BracketKind, TagToken};

/// Format a tag list for display, one `index  label` line per token
pub fn format_tag_list(tokens: &[TagToken], newline_glyph: &str) -> String {
    if tokens.is_empty() {
        return "No tags found".to_string();
    }

    let width = (tokens.len() - 1).to_string().len();
    let mut output = String::new();
    for (idx, token) in tokens.iter().enumerate() {
        output.push_str(&format!(
            "{:>width$}  {}\n",
            idx,
            token.display_with(newline_glyph),
            width = width
        ));
    }
    output
}

/// Like [`format_tag_list`], adding weight and bracket depth columns
pub fn format_tag_details(tokens: &[TagToken], newline_glyph: &str) -> String {
    if tokens.is_empty() {
        return "No tags found".to_string();
    }

    let width = (tokens.len() - 1).to_string().len();
    let mut output = String::new();
    for (idx, token) in tokens.iter().enumerate() {
        match token.text() {
            None => {
                output.push_str(&format!("{:>width$}  {}\n", idx, newline_glyph, width = width));
            }
            Some(raw) => {
                output.push_str(&format!(
                    "{:>width$}  {}  weight={} round={} square={}\n",
                    idx,
                    raw,
                    weight_text(raw).unwrap_or("-"),
                    BracketKind::Round.depth(raw),
                    BracketKind::Square.depth(raw),
                    width = width
                ));
            }
        }
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::tags::tokenize;

    #[test]
    fn test_format_empty_list() {
        assert_eq!(format_tag_list(&[], "↵"), "No tags found");
        assert_eq!(format_tag_details(&[], "↵"), "No tags found");
    }

    #[test]
    fn test_format_tag_list() {
        let tokens = tokenize("cat, dog\nbird");
        assert_eq!(format_tag_list(&tokens, "↵"), "0  cat\n1  dog\n2  ↵\n3  bird\n");
    }

    #[test]
    fn test_format_tag_list_aligns_indices() {
        let tokens = tokenize("a,b,c,d,e,f,g,h,i,j,k");
        let output = format_tag_list(&tokens, "↵");
        assert!(output.starts_with(" 0  a\n"));
        assert!(output.ends_with("10  k\n"));
    }

    #[test]
    fn test_format_tag_details() {
        let tokens = tokenize("((cat)), <dog:1.2>\n[bird]");
        let output = format_tag_details(&tokens, "/");
        assert!(output.contains("0  ((cat))  weight=- round=2 square=0"));
        assert!(output.contains("1  <dog:1.2>  weight=1.2 round=0 square=0"));
        assert!(output.contains("2  /\n"));
        assert!(output.contains("3  [bird]  weight=- round=0 square=1"));
    }

    #[test]
    fn test_format_tag_details_shows_weight_as_written() {
        let tokens = tokenize("<dog:1.25>, <cat:10>");
        let output = format_tag_details(&tokens, "↵");
        assert!(output.contains("0  <dog:1.25>  weight=1.25 round=0 square=0"));
        assert!(output.contains("1  <cat:10>  weight=10 round=0 square=0"));
    }
}
