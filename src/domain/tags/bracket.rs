//! Emphasis bracket grammar: `(tag)` and `[tag]`

/// Delimiter pair used for one layer of emphasis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BracketKind {
    /// `(` `)`
    Round,
    /// `[` `]`
    Square,
}

impl BracketKind {
    pub fn open(&self) -> &'static str {
        match self {
            BracketKind::Round => "(",
            BracketKind::Square => "[",
        }
    }

    pub fn close(&self) -> &'static str {
        match self {
            BracketKind::Round => ")",
            BracketKind::Square => "]",
        }
    }

    /// Wrap `raw` in one more layer of this bracket
    pub fn add(&self, raw: &str) -> String {
        add_brackets(raw, self.open(), self.close())
    }

    /// Remove one outer layer of this bracket, if present
    pub fn remove(&self, raw: &str) -> String {
        remove_brackets(raw, self.open(), self.close())
    }

    /// Count how many layers of this bracket wrap `raw`
    pub fn depth(&self, raw: &str) -> usize {
        let mut depth = 0;
        let mut current = raw;
        while let Some(inner) = strip_layer(current, self.open(), self.close()) {
            depth += 1;
            current = inner;
        }
        depth
    }
}

fn strip_layer<'a>(raw: &'a str, open: &str, close: &str) -> Option<&'a str> {
    if raw.len() < open.len() + close.len() {
        return None;
    }
    raw.strip_prefix(open)?.strip_suffix(close)
}

pub fn add_brackets(raw: &str, open: &str, close: &str) -> String {
    format!("{}{}{}", open, raw, close)
}

/// Strip exactly one outer `open`/`close` layer; anything else is left as is
pub fn remove_brackets(raw: &str, open: &str, close: &str) -> String {
    strip_layer(raw, open, close).unwrap_or(raw).to_string()
}
