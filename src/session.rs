use crate::comparator::{evaluate, untyped_cells, CharacterCell, Evaluation};

/// The three numbers shown to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Metrics {
    pub wpm: u32,
    pub accuracy: u32,
    pub errors: usize,
}

impl Metrics {
    /// What a fresh session shows before any input
    pub const RESET: Metrics = Metrics {
        wpm: 0,
        accuracy: 100,
        errors: 0,
    };
}

impl Default for Metrics {
    fn default() -> Self {
        Self::RESET
    }
}

/// One attempt at typing a single drawn text.
///
/// The evaluation is recomputed from scratch whenever the buffer changes, and
/// metrics are derived on demand from it plus the elapsed time.
#[derive(Debug, Clone)]
pub struct Session {
    target: String,
    input: String,
    evaluation: Evaluation,
}

impl Session {
    pub fn new(target: String) -> Self {
        let evaluation = Evaluation {
            cells: untyped_cells(&target),
            ..Evaluation::default()
        };
        Self {
            target,
            input: String::new(),
            evaluation,
        }
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn cells(&self) -> &[CharacterCell] {
        &self.evaluation.cells
    }

    pub fn evaluation(&self) -> &Evaluation {
        &self.evaluation
    }

    pub fn set_input(&mut self, buffer: &str) {
        self.input.clear();
        self.input.push_str(buffer);
        self.evaluation = evaluate(&self.target, &self.input);
    }

    pub fn metrics(&self, elapsed_units: u32) -> Metrics {
        Metrics {
            wpm: self.evaluation.words_per_minute(elapsed_units),
            accuracy: self.evaluation.accuracy(),
            errors: self.evaluation.error_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comparator::CellState;

    #[test]
    fn test_new_session_is_untyped() {
        let session = Session::new("hello".to_string());
        assert_eq!(session.target(), "hello");
        assert_eq!(session.input(), "");
        assert_eq!(session.cells().len(), 5);
        assert!(session
            .cells()
            .iter()
            .all(|c| c.state == CellState::Untyped));
        assert_eq!(session.metrics(0), Metrics::RESET);
    }

    #[test]
    fn test_set_input_recomputes_from_scratch() {
        let mut session = Session::new("cat".to_string());
        session.set_input("cx");
        assert_eq!(session.evaluation().error_count, 1);

        // backspace and retype: no leftover error from the earlier buffer
        session.set_input("ca");
        assert_eq!(session.evaluation().error_count, 0);
        assert_eq!(session.evaluation().correct_count, 2);
        assert_eq!(session.cells()[2].state, CellState::Untyped);
    }

    #[test]
    fn test_metrics_follow_elapsed_time() {
        let mut session = Session::new("a".repeat(30));
        session.set_input(&"a".repeat(25));
        assert_eq!(session.metrics(0).wpm, 0);
        assert_eq!(session.metrics(30).wpm, 10);
        assert_eq!(session.metrics(30).accuracy, 100);
        assert_eq!(session.metrics(30).errors, 0);
    }

    #[test]
    fn test_metrics_default_is_reset_value() {
        assert_eq!(Metrics::default(), Metrics::RESET);
        assert_eq!(Metrics::RESET.accuracy, 100);
    }
}
