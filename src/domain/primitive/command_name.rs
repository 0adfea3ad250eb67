use std::fmt;

/// Built-in command that wipes the scrollback. Never stored in the registry.
pub const CLEAR_COMMAND: &str = "clear";

/// A submitted command, trimmed and case-folded for lookup.
///
/// The raw text the user typed is kept separately by the session for echo;
/// this type only carries the normalized key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CommandName(String);

impl CommandName {
    /// Normalize raw input. Returns `None` for empty or whitespace-only input.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(Self(trimmed.to_lowercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_clear(&self) -> bool {
        self.0 == CLEAR_COMMAND
    }
}

impl fmt::Display for CommandName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
