/// Progress of a single reveal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealState {
    Idle,
    /// `revealed` characters of the target are visible.
    Revealing { revealed: usize },
    Done,
}

/// Character-by-character "typing" reveal of a target text.
///
/// Driven externally: each `step()` makes exactly one more character
/// visible. `revealed()` is always a prefix of the target, and a target of
/// `N` characters is fully visible after exactly `N` steps.
#[derive(Debug, Clone)]
pub struct Reveal {
    target: String,
    total_chars: usize,
    /// Byte length of the visible prefix.
    visible_bytes: usize,
    state: RevealState,
}

impl Reveal {
    pub fn new(target: impl Into<String>) -> Self {
        let target = target.into();
        let total_chars = target.chars().count();
        Self {
            target,
            total_chars,
            visible_bytes: 0,
            state: RevealState::Idle,
        }
    }

    /// Idle -> Revealing(0). An empty target goes straight to Done.
    /// Calling it again after the reveal started has no effect.
    pub fn start(&mut self) {
        if self.state != RevealState::Idle {
            return;
        }
        self.state = if self.total_chars == 0 {
            RevealState::Done
        } else {
            RevealState::Revealing { revealed: 0 }
        };
    }

    /// Reveal the next character and return it. Returns `None` when idle or done.
    pub fn step(&mut self) -> Option<char> {
        let RevealState::Revealing { revealed } = self.state else {
            return None;
        };
        let c = self.target[self.visible_bytes..].chars().next()?;
        self.visible_bytes += c.len_utf8();
        let revealed = revealed + 1;
        self.state = if revealed == self.total_chars {
            RevealState::Done
        } else {
            RevealState::Revealing { revealed }
        };
        Some(c)
    }

    pub fn is_done(&self) -> bool {
        self.state == RevealState::Done
    }

    pub fn revealed(&self) -> &str {
        &self.target[..self.visible_bytes]
    }

    /// Visible text split into display lines; `\n` becomes a line break.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.revealed().split('\n')
    }
}

#[cfg(test)]
impl Reveal {
    fn state(&self) -> RevealState {
        self.state
    }
}
