//! Tag token entity

/// Raw text stored for a newline token
pub const NEWLINE: &str = "\n";

/// Glyph shown in place of a newline token
pub const NEWLINE_GLYPH: &str = "↵";

/// One entry of the prompt tag list.
///
/// Tokens are immutable values: changing a tag's weight or brackets produces
/// a new token rather than editing this one. Text tokens can only be built
/// through [`TagToken::new`], so they are always trimmed, non-empty and free
/// of separators.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TagToken(Kind);

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum Kind {
    Text(String),
    Newline,
}

impl TagToken {
    /// Build a token from raw text.
    ///
    /// A raw equal to the newline character yields a newline token. Other
    /// text is trimmed; `None` is returned when nothing is left or when the
    /// text still holds a comma or line break (use `tokenize` to split it).
    pub fn new(raw: &str) -> Option<Self> {
        if raw == NEWLINE {
            return Some(Self::newline());
        }

        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.contains([',', '\n']) {
            None
        } else {
            Some(TagToken(Kind::Text(trimmed.to_string())))
        }
    }

    pub fn newline() -> Self {
        TagToken(Kind::Newline)
    }

    pub fn is_newline(&self) -> bool {
        matches!(self.0, Kind::Newline)
    }

    /// Text stored for this token (`"\n"` for a newline)
    pub fn raw(&self) -> &str {
        match &self.0 {
            Kind::Text(text) => text,
            Kind::Newline => NEWLINE,
        }
    }

    /// Tag text, or `None` for a newline
    pub fn text(&self) -> Option<&str> {
        match &self.0 {
            Kind::Text(text) => Some(text),
            Kind::Newline => None,
        }
    }

    /// Label shown to the user
    pub fn display(&self) -> &str {
        self.display_with(NEWLINE_GLYPH)
    }

    /// Label shown to the user, with a custom glyph for newlines
    pub fn display_with<'a>(&'a self, newline_glyph: &'a str) -> &'a str {
        self.text().unwrap_or(newline_glyph)
    }
}
