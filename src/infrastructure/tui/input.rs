use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::domain::primitive::CLEAR_COMMAND;
use crate::interface_adapter::controller::tui_controller::AppAction;

/// Represents the current mode of the input handler.
///
/// - `Booting`: the boot screen is up; only skip and quit keys do anything.
/// - `Prompt`: keys edit the prompt line or scroll the scrollback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Booting,
    Prompt,
}

/// Scroll requests whose size depends on the drawn viewport, resolved by the
/// app runner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollRequest {
    LineUp,
    LineDown,
    PageUp,
    PageDown,
}

/// Result of translating one key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyOutcome {
    Action(AppAction),
    Scroll(ScrollRequest),
}

/// Converts crossterm `KeyEvent`s into actions for the current mode.
pub struct InputHandler {
    mode: InputMode,
}

impl InputHandler {
    pub fn new(mode: InputMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> InputMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: InputMode) {
        self.mode = mode;
    }

    /// Translate a key. Returns `None` when the key is ignored.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<KeyOutcome> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        if ctrl && key.code == KeyCode::Char('c') {
            return Some(KeyOutcome::Action(AppAction::Quit));
        }
        match self.mode {
            InputMode::Booting => self.handle_booting(key),
            InputMode::Prompt => self.handle_prompt(key),
        }
    }

    /// Characters from a bracketed paste that belong on the prompt line.
    pub fn paste_chars(&self, text: &str) -> Vec<AppAction> {
        if self.mode != InputMode::Prompt {
            return Vec::new();
        }
        text.chars()
            .filter(|c| !c.is_control())
            .map(AppAction::InsertChar)
            .collect()
    }

    // =========================================================================
    // Private helpers
    // =========================================================================

    fn handle_booting(&mut self, key: KeyEvent) -> Option<KeyOutcome> {
        match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char(' ') => {
                self.mode = InputMode::Prompt;
                Some(KeyOutcome::Action(AppAction::SkipBoot))
            }
            _ => None,
        }
    }

    fn handle_prompt(&mut self, key: KeyEvent) -> Option<KeyOutcome> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let alt = key.modifiers.contains(KeyModifiers::ALT);
        let shift = key.modifiers.contains(KeyModifiers::SHIFT);
        let action = match key.code {
            KeyCode::Char('f') if ctrl => AppAction::FlipCard,
            KeyCode::Char('l') if ctrl => AppAction::RunCommand(CLEAR_COMMAND.to_string()),
            KeyCode::Char(_) if ctrl || alt => return None,
            KeyCode::Char(c) => AppAction::InsertChar(c),
            KeyCode::Backspace => AppAction::DeleteChar,
            KeyCode::Enter => AppAction::SubmitInput,
            KeyCode::End => AppAction::ScrollToBottom,
            KeyCode::Up if shift => return Some(KeyOutcome::Scroll(ScrollRequest::LineUp)),
            KeyCode::Down if shift => return Some(KeyOutcome::Scroll(ScrollRequest::LineDown)),
            KeyCode::PageUp => return Some(KeyOutcome::Scroll(ScrollRequest::PageUp)),
            KeyCode::PageDown => return Some(KeyOutcome::Scroll(ScrollRequest::PageDown)),
            _ => return None,
        };
        Some(KeyOutcome::Action(action))
    }
}
