use crate::domain::model::Reveal;

/// One line-group of the terminal history.
#[derive(Debug, Clone)]
pub enum Entry {
    /// Verbatim submitted text, decorated with the prompt identity when drawn.
    Prompt(String),
    /// Command response (or not-found message), revealed over time.
    Output(Reveal),
}

/// Ordered, append-only history. `clear` is the only removal.
#[derive(Debug, Default)]
pub struct ScrollbackLog {
    entries: Vec<Entry>,
}

impl ScrollbackLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_prompt(&mut self, text: impl Into<String>) {
        self.entries.push(Entry::Prompt(text.into()));
    }

    /// Append an output entry and return its index.
    pub fn push_output(&mut self, reveal: Reveal) -> usize {
        self.entries.push(Entry::Output(reveal));
        self.entries.len() - 1
    }

    pub fn output_mut(&mut self, index: usize) -> Option<&mut Reveal> {
        match self.entries.get_mut(index) {
            Some(Entry::Output(reveal)) => Some(reveal),
            _ => None,
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
