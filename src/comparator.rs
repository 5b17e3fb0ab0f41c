/// Characters counted as one word for speed purposes
pub const CHARS_PER_WORD: f64 = 5.0;

#[derive(Clone, Debug, Copy, PartialEq, Eq)]
pub enum CellState {
    Untyped,
    Correct,
    Incorrect,
}

/// One position of the target text and how the input at that position compares
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CharacterCell {
    pub expected: char,
    pub state: CellState,
}

/// Result of comparing an input buffer against a target text
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Evaluation {
    pub cells: Vec<CharacterCell>,
    pub correct_count: usize,
    pub error_count: usize,
    /// Length of the whole buffer in chars, including anything past the target
    pub typed_len: usize,
}

impl Evaluation {
    pub fn untyped_count(&self) -> usize {
        self.cells
            .iter()
            .filter(|c| c.state == CellState::Untyped)
            .count()
    }

    pub fn accuracy(&self) -> u32 {
        accuracy(self.correct_count, self.typed_len)
    }

    pub fn words_per_minute(&self, elapsed_units: u32) -> u32 {
        words_per_minute(self.correct_count, elapsed_units)
    }
}

/// Classify every target position against `typed`.
///
/// Positions past the end of `typed` stay untyped. Input past the end of
/// `target` is not compared, but still counts toward `typed_len`.
pub fn evaluate(target: &str, typed: &str) -> Evaluation {
    let mut typed_chars = typed.chars();
    let mut correct_count = 0;
    let mut error_count = 0;

    let cells = target
        .chars()
        .map(|expected| {
            let state = match typed_chars.next() {
                None => CellState::Untyped,
                Some(c) if c == expected => {
                    correct_count += 1;
                    CellState::Correct
                }
                Some(_) => {
                    error_count += 1;
                    CellState::Incorrect
                }
            };
            CharacterCell { expected, state }
        })
        .collect();

    Evaluation {
        cells,
        correct_count,
        error_count,
        typed_len: typed.chars().count(),
    }
}

/// Cells for a freshly presented text
pub fn untyped_cells(target: &str) -> Vec<CharacterCell> {
    target
        .chars()
        .map(|expected| CharacterCell {
            expected,
            state: CellState::Untyped,
        })
        .collect()
}

/// Percentage of typed chars that were correct, 100 for an empty buffer
pub fn accuracy(correct_count: usize, typed_len: usize) -> u32 {
    if typed_len == 0 {
        return 100;
    }
    let pct = (correct_count as f64 / typed_len as f64) * 100.0;
    pct.round().clamp(0.0, 100.0) as u32
}

/// Correct chars per five, per minute of elapsed time. Zero before any time has passed.
pub fn words_per_minute(correct_count: usize, elapsed_units: u32) -> u32 {
    if elapsed_units == 0 {
        return 0;
    }
    let words = correct_count as f64 / CHARS_PER_WORD;
    let minutes = elapsed_units as f64 / 60.0;
    (words / minutes).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use CellState::{Correct, Incorrect, Untyped};

    fn states(eval: &Evaluation) -> Vec<CellState> {
        eval.cells.iter().map(|c| c.state).collect()
    }

    #[test]
    fn test_exact_match_is_all_correct() {
        let eval = evaluate("cat", "cat");
        assert_eq!(states(&eval), vec![Correct, Correct, Correct]);
        assert_eq!(eval.correct_count, 3);
        assert_eq!(eval.error_count, 0);
        assert_eq!(eval.accuracy(), 100);
    }

    #[test]
    fn test_single_substitution() {
        let eval = evaluate("cat", "cot");
        assert_eq!(states(&eval), vec![Correct, Incorrect, Correct]);
        assert_eq!(eval.correct_count, 2);
        assert_eq!(eval.error_count, 1);
        assert_eq!(eval.accuracy(), 67);
    }

    #[test]
    fn test_partial_input_leaves_rest_untyped() {
        let eval = evaluate("hello", "he");
        assert_eq!(
            states(&eval),
            vec![Correct, Correct, Untyped, Untyped, Untyped]
        );
        assert_eq!(eval.correct_count, 2);
        assert_eq!(eval.error_count, 0);
        assert_eq!(eval.accuracy(), 100);
        assert_eq!(eval.untyped_count(), 3);
    }

    #[test]
    fn test_empty_input() {
        let eval = evaluate("abc", "");
        assert_eq!(states(&eval), vec![Untyped, Untyped, Untyped]);
        assert_eq!(eval.typed_len, 0);
        assert_eq!(eval.accuracy(), 100);
    }

    #[test]
    fn test_overflow_is_ignored_but_counted_as_typed() {
        let eval = evaluate("ab", "abcd");
        assert_eq!(states(&eval), vec![Correct, Correct]);
        assert_eq!(eval.correct_count, 2);
        assert_eq!(eval.error_count, 0);
        assert_eq!(eval.typed_len, 4);
        assert_eq!(eval.accuracy(), 50);
    }

    #[test]
    fn test_cells_carry_expected_chars() {
        let eval = evaluate("a\nb", "ax");
        let expected: Vec<char> = eval.cells.iter().map(|c| c.expected).collect();
        assert_eq!(expected, vec!['a', '\n', 'b']);
        assert_eq!(states(&eval), vec![Correct, Incorrect, Untyped]);
    }

    #[test]
    fn test_multibyte_chars_compare_by_char() {
        let eval = evaluate("héllo", "hél");
        assert_eq!(eval.correct_count, 3);
        assert_eq!(eval.typed_len, 3);
        assert_eq!(eval.cells.len(), 5);
    }

    #[test]
    fn test_evaluate_is_deterministic() {
        let pairs = [
            ("cat", "cot"),
            ("hello world", "helo wrld"),
            ("", "abc"),
            ("const x = 1;", "const x = 1;;;"),
        ];
        for (target, typed) in pairs {
            assert_eq!(evaluate(target, typed), evaluate(target, typed));
        }
    }

    #[test]
    fn test_counts_partition_target_length() {
        let pairs = [
            ("cat", "cot"),
            ("hello", "he"),
            ("hello", "xxxxxxxx"),
            ("", ""),
            ("fn main() {}", "fn mian("),
        ];
        for (target, typed) in pairs {
            let eval = evaluate(target, typed);
            assert_eq!(
                eval.correct_count + eval.error_count + eval.untyped_count(),
                target.chars().count(),
                "partition failed for {target:?} / {typed:?}"
            );
            assert!(eval.correct_count + eval.error_count <= typed.chars().count());
            assert!(eval.accuracy() <= 100);
        }
    }

    #[test]
    fn test_untyped_cells() {
        let cells = untyped_cells("ok");
        assert_eq!(cells.len(), 2);
        assert!(cells.iter().all(|c| c.state == Untyped));
    }

    #[test]
    fn test_accuracy_rounding() {
        assert_eq!(accuracy(2, 3), 67);
        assert_eq!(accuracy(1, 3), 33);
        assert_eq!(accuracy(1, 8), 13);
        assert_eq!(accuracy(0, 5), 0);
        assert_eq!(accuracy(0, 0), 100);
    }

    #[test]
    fn test_words_per_minute() {
        assert_eq!(words_per_minute(25, 30), 10);
        assert_eq!(words_per_minute(50, 60), 10);
        assert_eq!(words_per_minute(7, 1), 84);
    }

    #[test]
    fn test_words_per_minute_zero_elapsed() {
        assert_eq!(words_per_minute(0, 0), 0);
        assert_eq!(words_per_minute(500, 0), 0);
    }
}
