//! Upside-down page detection and correction.

use log::debug;

use crate::model::Word;

/// Decide whether the extracted words read bottom-up.
///
/// For every consecutive word pair the vertical offset is normalized by
/// the larger of the two word heights and classified as increasing
/// (> 0.5), decreasing (< -0.5) or same-level. Text extracted in content
/// order steps downward at line breaks; on a page rendered upside down it
/// steps upward instead, so a strong majority of decreasing offsets with
/// an average magnitude of at least one line marks the page as rotated.
/// Pages with fewer than `min_samples` decreasing offsets are left alone
/// and only logged: too few lines to trust the statistics.
pub fn is_upside_down(words: &[Word], page_number: u32, min_samples: usize) -> bool {
    let mut increasing = 0usize;
    let mut decreasing = 0usize;
    let mut same_level = 0usize;
    let mut decreasing_sum = 0.0f32;

    for pair in words.windows(2) {
        let offset = (pair[1].bounds.y_min - pair[0].bounds.y_min)
            / pair[1].height().max(pair[0].height());
        if offset > 0.5 {
            increasing += 1;
        } else if offset < -0.5 {
            decreasing += 1;
            decreasing_sum += offset;
        } else {
            same_level += 1;
        }
    }

    if 2 * increasing >= decreasing || same_level <= decreasing {
        return false;
    }
    let decreasing_avg = if decreasing > 0 {
        (decreasing_sum / decreasing as f32).abs()
    } else {
        0.0
    };
    if decreasing_avg < 1.0 {
        return false;
    }
    if decreasing <= min_samples {
        debug!(
            "page {}: upside-down signal from only {} offsets, not enough lines to rotate",
            page_number, decreasing
        );
        return false;
    }
    true
}

/// Rotate every word 180 degrees about the page center.
pub fn rotate_words(words: &mut [Word], page_width: f32, page_height: f32) {
    for word in words {
        let bounds = &mut word.bounds;
        let (old_x_min, old_x_max) = (bounds.x_min, bounds.x_max);
        bounds.x_min = page_width - old_x_max;
        bounds.x_max = page_width - old_x_min;
        let (old_y_min, old_y_max) = (bounds.y_min, bounds.y_max);
        bounds.y_min = page_height - old_y_max;
        bounds.y_max = page_height - old_y_min;
    }
}
