use std::time::Duration;

use crate::usecase::session_usecase::SessionUsecase;

/// TUI actions (infrastructure-independent).
///
/// The TUI layer converts key and mouse events into `AppAction`s and
/// `TuiController::dispatch` forwards the session ones to the usecase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppAction {
    InsertChar(char),
    DeleteChar,
    SubmitInput,
    /// Run a fixed command, bypassing the input line (nav shortcuts).
    RunCommand(String),
    ScrollUp { lines: usize, max: usize },
    ScrollDown(usize),
    ScrollToBottom,
    /// Wall-clock time passed since the previous loop iteration.
    Advance(Duration),
    SkipBoot,
    FlipCard,
    Quit,
}

/// Thin controller that translates `AppAction`s into usecase calls.
///
/// Lives in `interface_adapter` so it has no dependency on ratatui or
/// crossterm. The TUI runner owns a `TuiController` and calls `dispatch`
/// on every iteration.
pub struct TuiController {
    usecase: SessionUsecase,
}

impl TuiController {
    pub fn new(usecase: SessionUsecase) -> Self {
        Self { usecase }
    }

    /// Dispatch an action to the session.
    ///
    /// `Quit`, `SkipBoot` and `FlipCard` are no-ops here; the app runner
    /// owns that state and handles them before dispatching.
    pub fn dispatch(&mut self, action: AppAction) {
        match action {
            AppAction::InsertChar(c) => self.usecase.insert_char(c),
            AppAction::DeleteChar => self.usecase.delete_char(),
            AppAction::SubmitInput => self.usecase.submit_input(),
            AppAction::RunCommand(command) => self.usecase.submit(&command),
            AppAction::ScrollUp { lines, max } => self.usecase.scroll_up(lines, max),
            AppAction::ScrollDown(lines) => self.usecase.scroll_down(lines),
            AppAction::ScrollToBottom => self.usecase.scroll_to_bottom(),
            AppAction::Advance(elapsed) => self.usecase.advance(elapsed),
            AppAction::SkipBoot | AppAction::FlipCard | AppAction::Quit => {} // Handled by caller
        }
    }

    /// Read accessor for UI rendering.
    pub fn usecase(&self) -> &SessionUsecase {
        &self.usecase
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{Command, Entry, Profile};
    use crate::domain::primitive::PromptIdentity;

    fn make_controller() -> TuiController {
        let profile = Profile {
            title: "t".to_string(),
            prompt: PromptIdentity::new("u", "@h", ":~$"),
            boot_lines: Vec::new(),
            commands: vec![Command::new("about", &["Hello"])],
            nav: Vec::new(),
            card_front: Vec::new(),
            card_back: Vec::new(),
        };
        TuiController::new(SessionUsecase::new(&profile))
    }

    fn type_text(controller: &mut TuiController, text: &str) {
        for c in text.chars() {
            controller.dispatch(AppAction::InsertChar(c));
        }
    }

    #[test]
    fn typed_chars_land_in_input_buffer() {
        let mut controller = make_controller();
        type_text(&mut controller, "abx");
        controller.dispatch(AppAction::DeleteChar);
        assert_eq!(controller.usecase().input(), "ab");
    }

    #[test]
    fn submit_input_runs_typed_command() {
        let mut controller = make_controller();
        type_text(&mut controller, "About");
        controller.dispatch(AppAction::SubmitInput);

        let entries = controller.usecase().entries();
        assert_eq!(entries.len(), 2);
        assert!(matches!(&entries[0], Entry::Prompt(t) if t == "About"));
        assert!(controller.usecase().is_rendering());
        assert_eq!(controller.usecase().input(), "");
    }

    #[test]
    fn run_command_bypasses_and_clears_input() {
        let mut controller = make_controller();
        type_text(&mut controller, "half-typed");
        controller.dispatch(AppAction::RunCommand("about".to_string()));

        assert_eq!(controller.usecase().input(), "");
        assert!(matches!(&controller.usecase().entries()[0], Entry::Prompt(t) if t == "about"));
    }

    #[test]
    fn advance_drives_the_reveal() {
        let mut controller = make_controller();
        controller.dispatch(AppAction::RunCommand("about".to_string()));
        controller.dispatch(AppAction::Advance(Duration::from_millis(40)));

        assert!(!controller.usecase().is_rendering());
        match &controller.usecase().entries()[1] {
            Entry::Output(reveal) => assert_eq!(reveal.revealed(), "Hello"),
            Entry::Prompt(_) => panic!("expected output"),
        }
    }

    #[test]
    fn scroll_actions_move_viewport() {
        let mut controller = make_controller();
        controller.dispatch(AppAction::ScrollUp { lines: 3, max: 10 });
        assert_eq!(controller.usecase().scroll_offset(), 3);
        controller.dispatch(AppAction::ScrollDown(1));
        assert_eq!(controller.usecase().scroll_offset(), 2);
        controller.dispatch(AppAction::ScrollToBottom);
        assert_eq!(controller.usecase().scroll_offset(), 0);
    }

    #[test]
    fn runner_owned_actions_are_noops() {
        let mut controller = make_controller();
        controller.dispatch(AppAction::Quit);
        controller.dispatch(AppAction::SkipBoot);
        controller.dispatch(AppAction::FlipCard);
        assert!(controller.usecase().entries().is_empty());
    }
}
