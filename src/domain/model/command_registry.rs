use crate::domain::model::Command;
use crate::domain::primitive::CommandName;

/// Immutable table of command name -> canned response text.
///
/// Names are stored normalized (trimmed, lower-case). The set is fixed once
/// built; `clear` is handled by the session and never lives here.
pub struct CommandRegistry {
    entries: Vec<(String, String)>,
}

impl CommandRegistry {
    /// Build from already-validated commands (see `Profile::validate`).
    pub fn new(commands: &[Command]) -> Self {
        let entries = commands
            .iter()
            .map(|c| (c.name.trim().to_lowercase(), c.text()))
            .collect();
        Self { entries }
    }

    /// Case-insensitive, whitespace-trimmed lookup.
    pub fn lookup(&self, name: &str) -> Option<&str> {
        let key = CommandName::parse(name)?;
        self.entries
            .iter()
            .find(|(n, _)| n == key.as_str())
            .map(|(_, body)| body.as_str())
    }

    /// Registered names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
