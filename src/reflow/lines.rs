//! Grouping of words into visual text lines.

use crate::model::{Line, Word};

/// Assemble words into lines in a single greedy pass.
///
/// The open line absorbs every word it accepts as its next word; the first
/// rejected word closes the line and opens a new one. Word order within a
/// line is the arrival order, which is left-to-right for well-formed
/// extraction output.
pub fn assemble_lines(words: Vec<Word>) -> Vec<Line> {
    let mut lines = Vec::new();
    let mut current: Option<Line> = None;
    for word in words {
        match current.as_mut() {
            Some(line) if line.accepts(&word) => line.push_word(word),
            Some(line) => {
                let closed = std::mem::replace(line, Line::from_word(word));
                lines.push(closed);
            }
            None => current = Some(Line::from_word(word)),
        }
    }
    lines.extend(current);
    lines
}
