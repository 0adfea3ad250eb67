use crate::domain::primitive::{CLEAR_COMMAND, PromptIdentity};
use crate::shared::error::AppError;

/// A canned command: a name and its response body as ordered lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    pub name: String,
    pub body: Vec<String>,
}

impl Command {
    pub fn new(name: impl Into<String>, body: &[&str]) -> Self {
        Self {
            name: name.into(),
            body: body.iter().map(|l| l.to_string()).collect(),
        }
    }

    /// Body lines joined with `\n`.
    pub fn text(&self) -> String {
        self.body.join("\n")
    }
}

/// A clickable shortcut bound to one fixed command string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    pub label: String,
    pub command: String,
}

impl NavItem {
    pub fn new(label: impl Into<String>, command: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            command: command.into(),
        }
    }
}

/// Persona data that parameterizes the whole UI.
///
/// Two variants of the portfolio differ only in strings, so they are two
/// `Profile` values rather than two code paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub title: String,
    pub prompt: PromptIdentity,
    pub boot_lines: Vec<String>,
    pub commands: Vec<Command>,
    pub nav: Vec<NavItem>,
    pub card_front: Vec<String>,
    pub card_back: Vec<String>,
}

impl Profile {
    /// Check the invariants the registry and UI rely on.
    pub fn validate(&self) -> Result<(), AppError> {
        let mut seen: Vec<String> = Vec::with_capacity(self.commands.len());
        for command in &self.commands {
            let key = command.name.trim().to_lowercase();
            if key.is_empty() {
                return Err(AppError::InvalidProfile("command name is empty".to_string()));
            }
            if key.chars().any(char::is_whitespace) {
                return Err(AppError::InvalidProfile(format!(
                    "command name contains whitespace: {:?}",
                    command.name
                )));
            }
            if key == CLEAR_COMMAND {
                return Err(AppError::InvalidProfile(format!(
                    "`{CLEAR_COMMAND}` is a built-in command and cannot be redefined"
                )));
            }
            if seen.contains(&key) {
                return Err(AppError::InvalidProfile(format!("duplicate command: {key}")));
            }
            seen.push(key);
        }
        for item in &self.nav {
            if item.command.trim().is_empty() {
                return Err(AppError::InvalidProfile(format!(
                    "nav item {:?} has no command",
                    item.label
                )));
            }
        }
        Ok(())
    }

    pub fn has_card(&self) -> bool {
        !self.card_front.is_empty() || !self.card_back.is_empty()
    }
}
