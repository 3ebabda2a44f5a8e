//! Regrouping of words the extractor split apart.

use crate::model::Word;

const SOFT_HYPHEN: char = '\u{AD}';

/// Rejoin word fragments that extraction emitted as separate words.
///
/// A fragment folds into its predecessor when both sit at the same height
/// and the horizontal gap is a sliver of the font height: near zero, or
/// slightly wider when both fragments share the exact same height. A
/// negative gap combined with a trailing soft hyphen (U+00AD) is the
/// extractor's hyphen artifact, so the hyphen is dropped before joining.
/// Purely numeric predecessors never absorb a fragment, which keeps
/// numbered-list markers separate from the text that follows them.
/// Empty-text words are dropped. Single left-to-right pass; joined words
/// are not re-examined.
pub fn regroup_split_words(words: Vec<Word>) -> Vec<Word> {
    let mut iter = words.into_iter();
    let Some(first) = iter.next() else {
        return Vec::new();
    };

    let mut regrouped = Vec::new();
    let mut previous = first;
    for word in iter {
        if word.text.is_empty() {
            continue;
        }
        if should_join(&previous, &word) {
            join(&mut previous, word);
        } else {
            regrouped.push(std::mem::replace(&mut previous, word));
        }
    }
    regrouped.push(previous);
    regrouped
}

fn should_join(previous: &Word, word: &Word) -> bool {
    let gap = word.bounds.x_min - previous.bounds.x_max;
    let height = word.height();
    let same_row = (word.bounds.center_y() - previous.bounds.center_y()).abs() < height;
    let sliver =
        gap < 0.02 * height || (gap < 0.1 * height && word.height() == previous.height());

    same_row && sliver && gap > -0.5 * height && previous.text.parse::<i64>().is_err()
}

fn join(previous: &mut Word, word: Word) {
    let gap = word.bounds.x_min - previous.bounds.x_max;
    if gap < 0.0 && previous.text.ends_with(SOFT_HYPHEN) {
        previous.text.pop();
    }
    previous.text.push_str(&word.text);
    previous.bounds.expand(&word.bounds);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str, x_min: f32, x_max: f32, y_min: f32, y_max: f32) -> Word {
        Word::new(text, x_min, x_max, y_min, y_max).unwrap()
    }

    fn texts(words: &[Word]) -> Vec<&str> {
        words.iter().map(|w| w.text.as_str()).collect()
    }

    #[test]
    fn test_joins_tightly_spaced_fragments() {
        let words = vec![
            word("Hel", 10.0, 40.0, 100.0, 112.0),
            word("lo", 40.1, 55.0, 100.0, 112.0),
            word("world", 60.0, 95.0, 100.0, 112.0),
        ];
        let regrouped = regroup_split_words(words);

        assert_eq!(texts(&regrouped), vec!["Hello", "world"]);
        assert_eq!(regrouped[0].bounds.x_max, 55.0);
    }

    #[test]
    fn test_joins_small_gap_only_at_equal_height() {
        // Gap of 1 point against height 12: over the 2% threshold, under
        // the 10% one. Joins only when both fragments are the same height.
        let equal = regroup_split_words(vec![
            word("off", 10.0, 40.0, 100.0, 112.0),
            word("set", 41.0, 60.0, 100.0, 112.0),
        ]);
        assert_eq!(texts(&equal), vec!["offset"]);

        let unequal = regroup_split_words(vec![
            word("off", 10.0, 40.0, 100.0, 112.0),
            word("set", 41.0, 60.0, 100.0, 113.0),
        ]);
        assert_eq!(texts(&unequal), vec!["off", "set"]);
    }

    #[test]
    fn test_soft_hyphen_dropped_on_negative_gap() {
        let words = vec![
            word("voor\u{AD}", 10.0, 40.0, 100.0, 112.0),
            word("beeld", 39.0, 70.0, 100.0, 112.0),
        ];
        let regrouped = regroup_split_words(words);
        assert_eq!(texts(&regrouped), vec!["voorbeeld"]);
    }

    #[test]
    fn test_true_overlap_not_joined() {
        // A large negative gap is two unrelated words, not a split one.
        let words = vec![
            word("under", 10.0, 60.0, 100.0, 112.0),
            word("laid", 20.0, 50.0, 100.0, 112.0),
        ];
        let regrouped = regroup_split_words(words);
        assert_eq!(regrouped.len(), 2);
    }

    #[test]
    fn test_numeric_marker_not_joined() {
        let words = vec![
            word("12", 10.0, 22.0, 100.0, 112.0),
            word("apples", 22.1, 60.0, 100.0, 112.0),
        ];
        let regrouped = regroup_split_words(words);
        assert_eq!(texts(&regrouped), vec!["12", "apples"]);
    }

    #[test]
    fn test_different_rows_not_joined() {
        let words = vec![
            word("top", 10.0, 40.0, 100.0, 112.0),
            word("below", 40.1, 70.0, 120.0, 132.0),
        ];
        let regrouped = regroup_split_words(words);
        assert_eq!(regrouped.len(), 2);
    }

    #[test]
    fn test_empty_words_skipped() {
        let words = vec![
            word("keep", 10.0, 40.0, 100.0, 112.0),
            word("", 40.1, 41.0, 100.0, 112.0),
            word("these", 44.0, 70.0, 100.0, 112.0),
        ];
        let regrouped = regroup_split_words(words);
        assert_eq!(texts(&regrouped), vec!["keep", "these"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(regroup_split_words(Vec::new()).is_empty());
    }
}
