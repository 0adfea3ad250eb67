use std::collections::VecDeque;
use std::time::Duration;

use tracing::{debug, info, warn};

use crate::domain::model::{CommandRegistry, Entry, Profile, Reveal, ScrollbackLog};
use crate::domain::primitive::pacing::TERMINAL_CHAR_DELAY;
use crate::domain::primitive::{CommandName, Pacer, PromptIdentity};
use crate::interface_adapter::port::ProfilePort;
use crate::shared::error::AppError;

/// Load a profile through the port and check it before anything is built from it.
pub fn load_profile<P: ProfilePort>(port: &P) -> Result<Profile, AppError> {
    let profile = port.load()?;
    profile.validate()?;

    let registry = CommandRegistry::new(&profile.commands);
    info!(
        title = %profile.title,
        commands = registry.len(),
        boot_lines = profile.boot_lines.len(),
        "profile loaded"
    );
    for item in &profile.nav {
        let known = CommandName::parse(&item.command).is_some_and(|name| {
            name.is_clear() || registry.names().any(|n| n == name.as_str())
        });
        if !known {
            warn!(label = %item.label, command = %item.command, "nav shortcut runs an unknown command");
        }
    }
    Ok(profile)
}

/// The fake terminal session: input buffer, scrollback, and the one reveal
/// that may be animating at a time.
///
/// Submissions that arrive while a reveal is still running are queued and
/// run in order once it completes. Their prompt is only echoed when they
/// start, so every prompt stays directly followed by its own output.
pub struct SessionUsecase {
    registry: CommandRegistry,
    prompt: PromptIdentity,
    log: ScrollbackLog,
    input: String,
    active: Option<usize>,
    queue: VecDeque<String>,
    pacer: Pacer,
    scroll_offset: usize,
}

impl SessionUsecase {
    pub fn new(profile: &Profile) -> Self {
        Self {
            registry: CommandRegistry::new(&profile.commands),
            prompt: profile.prompt.clone(),
            log: ScrollbackLog::new(),
            input: String::new(),
            active: None,
            queue: VecDeque::new(),
            pacer: Pacer::new(TERMINAL_CHAR_DELAY),
            scroll_offset: 0,
        }
    }

    // =========================================================================
    // Submission
    // =========================================================================

    /// Run a command as if typed at the prompt.
    ///
    /// Empty or whitespace-only input is ignored entirely. Otherwise the input
    /// buffer is cleared and the command either starts now or, if a reveal is
    /// in flight, waits in the queue.
    pub fn submit(&mut self, raw: &str) {
        let Some(name) = CommandName::parse(raw) else {
            debug!("ignoring empty submission");
            return;
        };
        self.input.clear();

        if self.is_rendering() {
            self.queue.push_back(raw.to_string());
            debug!(command = %name, pending = self.queue.len(), "queued behind active reveal");
            return;
        }
        self.execute(raw, name);
    }

    /// Submit whatever is in the input buffer (Enter).
    pub fn submit_input(&mut self) {
        let raw = self.input.clone();
        self.submit(&raw);
    }

    fn execute(&mut self, raw: &str, name: CommandName) {
        self.log.push_prompt(raw);

        if name.is_clear() {
            self.log.clear();
            self.scroll_to_bottom();
            info!("scrollback cleared");
            return;
        }

        let text = match self.registry.lookup(name.as_str()) {
            Some(body) => {
                info!(command = %name, "running command");
                body.to_string()
            }
            None => {
                info!(command = %name, "command not found");
                format!("Command not found: {name}")
            }
        };

        let mut reveal = Reveal::new(text);
        reveal.start();
        let done = reveal.is_done();
        let index = self.log.push_output(reveal);
        self.scroll_to_bottom();

        if !done {
            self.active = Some(index);
            self.pacer.reset();
            // The first character shows at once; the pace applies after it.
            self.tick();
        }
    }

    fn start_queued(&mut self) {
        while !self.is_rendering() {
            let Some(raw) = self.queue.pop_front() else {
                break;
            };
            if let Some(name) = CommandName::parse(&raw) {
                self.execute(&raw, name);
            }
        }
    }

    // =========================================================================
    // Reveal driving
    // =========================================================================

    /// Reveal exactly one character of the active output.
    ///
    /// Returns `false` when nothing was animating. Finishing a reveal starts
    /// the next queued submission.
    pub fn tick(&mut self) -> bool {
        let Some(index) = self.active else {
            return false;
        };
        let Some(reveal) = self.log.output_mut(index) else {
            self.active = None;
            return false;
        };

        reveal.step();
        let done = reveal.is_done();
        self.scroll_to_bottom();

        if done {
            self.active = None;
            debug!(entries = self.log.len(), "reveal finished");
            self.start_queued();
        }
        true
    }

    /// Reveal as many characters as `elapsed` covers at the output pace.
    pub fn advance(&mut self, elapsed: Duration) {
        if !self.is_rendering() {
            self.pacer.reset();
            return;
        }
        for _ in 0..self.pacer.due(elapsed) {
            if !self.tick() {
                break;
            }
        }
    }

    /// Step until the active reveal and everything queued behind it is done.
    #[cfg(test)]
    pub fn finish_all(&mut self) {
        while self.tick() {}
    }

    pub fn is_rendering(&self) -> bool {
        self.active.is_some()
    }

    /// Submissions waiting for the active reveal.
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    // =========================================================================
    // Input buffer
    // =========================================================================

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn insert_char(&mut self, c: char) {
        self.input.push(c);
    }

    pub fn delete_char(&mut self) {
        self.input.pop();
    }

    // =========================================================================
    // Viewport
    // =========================================================================

    /// Lines scrolled up from the bottom; 0 = following the newest output.
    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    pub fn scroll_up(&mut self, lines: usize, max: usize) {
        self.scroll_offset = (self.scroll_offset + lines).min(max);
    }

    pub fn scroll_down(&mut self, lines: usize) {
        self.scroll_offset = self.scroll_offset.saturating_sub(lines);
    }

    pub fn scroll_to_bottom(&mut self) {
        self.scroll_offset = 0;
    }

    // =========================================================================
    // Read accessors
    // =========================================================================

    pub fn entries(&self) -> &[Entry] {
        self.log.entries()
    }

    pub fn prompt(&self) -> &PromptIdentity {
        &self.prompt
    }
}
