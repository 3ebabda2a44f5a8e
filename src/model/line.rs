//! Line-level types.

use serde::{Deserialize, Serialize};

use super::Word;
use crate::geometry::BoundingBox;

/// A horizontally-adjacent run of words on the same visual text line.
///
/// A line owns its words exclusively; its bounding box is the union of
/// their boxes and is kept current as words are pushed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Line {
    words: Vec<Word>,
    bounds: BoundingBox,
}

impl Line {
    /// Start a line from its first word.
    pub fn from_word(word: Word) -> Self {
        let bounds = word.bounds;
        Self {
            words: vec![word],
            bounds,
        }
    }

    /// The words of the line, left to right as assembled.
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Union box of the line's words.
    pub fn bounds(&self) -> &BoundingBox {
        &self.bounds
    }

    /// Height of the line box, a proxy for font size.
    pub fn height(&self) -> f32 {
        self.bounds.height()
    }

    /// Append a word and grow the line box over it.
    pub fn push_word(&mut self, word: Word) {
        self.bounds.expand(&word.bounds);
        self.words.push(word);
    }

    /// Whether `word` reads as the next word of this line.
    ///
    /// The word must continue in the same column: a positive horizontal
    /// gap under half the line height. Vertically it must fall within the
    /// line's extent, first tried with a 20% error margin and then with a
    /// margin of one word height to tolerate slightly angled text.
    pub fn accepts(&self, word: &Word) -> bool {
        let h_space = word.bounds.x_min - self.bounds.x_max;
        if h_space <= 0.0 || h_space >= 0.5 * self.height() {
            return false;
        }
        let strict = 0.2 * self.height();
        let lenient = self.height().min(word.height());
        self.fits_vertically(word, strict) || self.fits_vertically(word, lenient)
    }

    fn fits_vertically(&self, word: &Word, margin: f32) -> bool {
        word.bounds.y_min > self.bounds.y_min - margin
            && word.bounds.y_max < self.bounds.y_max + margin
    }

    /// The line's text: word texts joined with single spaces.
    pub fn text(&self) -> String {
        self.words
            .iter()
            .map(|w| w.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub(crate) fn last_word_mut(&mut self) -> Option<&mut Word> {
        self.words.last_mut()
    }

    pub(crate) fn remove_first_word(&mut self) -> Option<Word> {
        if self.words.is_empty() {
            None
        } else {
            Some(self.words.remove(0))
        }
    }
}
