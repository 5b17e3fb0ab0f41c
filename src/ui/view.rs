use crate::comparator::CharacterCell;
use crate::controller::Presenter;
use crate::session::Metrics;
use crate::timer::SESSION_WINDOW;

/// Everything the terminal draws, as last pushed by the controller.
///
/// `input` is the text field's contents. It is owned here, like a browser
/// input element, and cleared whenever a new text is rendered.
#[derive(Debug, Clone, PartialEq)]
pub struct TerminalView {
    pub text: String,
    pub input: String,
    pub cells: Vec<CharacterCell>,
    pub metrics: Metrics,
    pub remaining: u32,
    pub locked: bool,
}

impl Default for TerminalView {
    fn default() -> Self {
        Self {
            text: String::new(),
            input: String::new(),
            cells: Vec::new(),
            metrics: Metrics::RESET,
            remaining: SESSION_WINDOW,
            locked: false,
        }
    }
}

impl TerminalView {
    /// Index of the next cell to type, if any remain
    pub fn cursor(&self) -> Option<usize> {
        let typed = self.input.chars().count();
        (typed < self.cells.len()).then_some(typed)
    }
}

impl Presenter for TerminalView {
    fn on_render_text(&mut self, text: &str) {
        self.text = text.to_string();
        self.input.clear();
    }

    fn on_cells_updated(&mut self, cells: &[CharacterCell]) {
        self.cells.clear();
        self.cells.extend_from_slice(cells);
    }

    fn on_metrics_updated(&mut self, wpm: u32, accuracy: u32, errors: usize) {
        self.metrics = Metrics {
            wpm,
            accuracy,
            errors,
        };
    }

    fn on_time_updated(&mut self, remaining: u32) {
        self.remaining = remaining;
    }

    fn on_input_locked(&mut self, locked: bool) {
        self.locked = locked;
    }
}
