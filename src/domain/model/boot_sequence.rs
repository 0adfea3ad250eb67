use std::time::Duration;

use crate::domain::primitive::pacing::{
    BOOT_BLANK_LINE_PAUSE, BOOT_CHAR_DELAY, BOOT_FINISH_DELAY, BOOT_LINE_PAUSE,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BootPhase {
    Typing { line: usize, typed: usize },
    /// Last line typed; closes once the pending wait runs out.
    Finishing,
    Done,
}

/// Fake BIOS boot screen: types each line character by character, pauses
/// between lines, then holds briefly before closing.
///
/// Every character appears first and the delay follows it, so the first
/// character shows on the very first `advance`. Time is fed in with
/// `advance`; the sequence never reads a clock itself.
pub struct BootSequence {
    lines: Vec<String>,
    text: String,
    lines_done: usize,
    phase: BootPhase,
    /// Time still to wait before the next step.
    wait: Duration,
    budget: Duration,
}

impl BootSequence {
    /// A sequence with no lines is finished immediately.
    pub fn new(lines: Vec<String>) -> Self {
        let phase = if lines.is_empty() {
            BootPhase::Done
        } else {
            BootPhase::Typing { line: 0, typed: 0 }
        };
        Self {
            lines,
            text: String::new(),
            lines_done: 0,
            phase,
            wait: Duration::ZERO,
            budget: Duration::ZERO,
        }
    }

    pub fn advance(&mut self, elapsed: Duration) {
        if self.phase == BootPhase::Done {
            return;
        }
        self.budget += elapsed;

        loop {
            if self.budget < self.wait {
                self.wait -= self.budget;
                self.budget = Duration::ZERO;
                return;
            }
            self.budget -= self.wait;
            self.wait = Duration::ZERO;

            match self.phase {
                BootPhase::Typing { line, typed } => {
                    if let Some(c) = self.lines[line].chars().nth(typed) {
                        self.text.push(c);
                        self.phase = BootPhase::Typing { line, typed: typed + 1 };
                        self.wait = BOOT_CHAR_DELAY;
                        continue;
                    }
                    self.text.push('\n');
                    self.lines_done = line + 1;
                    let pause = if self.lines[line].trim().is_empty() {
                        BOOT_BLANK_LINE_PAUSE
                    } else {
                        BOOT_LINE_PAUSE
                    };
                    if line + 1 < self.lines.len() {
                        self.phase = BootPhase::Typing { line: line + 1, typed: 0 };
                        self.wait = pause;
                    } else {
                        self.phase = BootPhase::Finishing;
                        self.wait = pause + BOOT_FINISH_DELAY;
                    }
                }
                BootPhase::Finishing | BootPhase::Done => {
                    self.budget = Duration::ZERO;
                    self.phase = BootPhase::Done;
                    return;
                }
            }
        }
    }

    /// Jump to the end: all lines typed, boot screen closed.
    pub fn skip(&mut self) {
        if self.phase == BootPhase::Done {
            return;
        }
        self.text = self.lines.iter().map(|l| format!("{l}\n")).collect();
        self.lines_done = self.lines.len();
        self.phase = BootPhase::Done;
    }

    pub fn is_finished(&self) -> bool {
        self.phase == BootPhase::Done
    }

    /// Text typed so far, lines separated by `\n`.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Completed lines as a percentage, rounded to the nearest integer.
    pub fn progress(&self) -> u16 {
        if self.lines.is_empty() {
            return 100;
        }
        ((self.lines_done as f64 / self.lines.len() as f64) * 100.0).round() as u16
    }
}
