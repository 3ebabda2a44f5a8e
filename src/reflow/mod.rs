//! The page reflow pipeline and its configuration.
//!
//! Stages run in a fixed order (see [`crate::model::Page::reflow`]):
//! orientation correction, split-word regrouping, line assembly, block
//! assembly, hyphenation repair, constrained block merging, reading order
//! and header classification. Each stage is a pure function over the data
//! the previous stage produced.

mod blocks;
mod lines;
mod merge;
mod orientation;
mod regroup;

pub use blocks::assemble_blocks;
pub use lines::assemble_lines;
pub use merge::merge_blocks;
pub use orientation::{is_upside_down, rotate_words};
pub use regroup::regroup_split_words;

/// Tunable heuristics for the reflow pipeline.
///
/// The defaults are the reference tuning. None of the values are
/// load-bearing contracts; they can be adjusted per corpus without
/// changing the shape of the pipeline.
#[derive(Debug, Clone)]
pub struct ReflowOptions {
    /// Maximum left-edge misalignment, in points, for a line to join an
    /// existing block
    pub alignment_tolerance: f32,

    /// Quantization bucket, in points, for top-to-bottom, left-to-right
    /// ordering
    pub ordering_bucket: f32,

    /// A line below this fraction of the running average line height
    /// closes the current run and tags it as a header
    pub header_shrink_ratio: f32,

    /// A line above this fraction of the running average line height
    /// closes the current run as a font-size break
    pub header_growth_ratio: f32,

    /// Decreasing-offset samples required before a page is judged upside
    /// down and rotated
    pub min_rotation_samples: usize,

    /// Whether document-level reflow runs pages in parallel
    pub parallel: bool,
}

impl ReflowOptions {
    /// Create options with the default tuning.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the block left-edge alignment tolerance in points.
    pub fn with_alignment_tolerance(mut self, points: f32) -> Self {
        self.alignment_tolerance = points;
        self
    }

    /// Set the reading-order quantization bucket in points.
    pub fn with_ordering_bucket(mut self, points: f32) -> Self {
        self.ordering_bucket = points;
        self
    }

    /// Set the header classification ratios.
    pub fn with_header_ratios(mut self, shrink: f32, growth: f32) -> Self {
        self.header_shrink_ratio = shrink;
        self.header_growth_ratio = growth;
        self
    }

    /// Set the rotation sample floor.
    pub fn with_min_rotation_samples(mut self, samples: usize) -> Self {
        self.min_rotation_samples = samples;
        self
    }

    /// Enable or disable parallel page reflow.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Disable parallel page reflow.
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }
}

impl Default for ReflowOptions {
    fn default() -> Self {
        Self {
            alignment_tolerance: 10.0,
            ordering_bucket: 20.0,
            header_shrink_ratio: 0.95,
            header_growth_ratio: 1.1,
            min_rotation_samples: 10,
            parallel: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_builder() {
        let options = ReflowOptions::new()
            .with_alignment_tolerance(6.0)
            .with_ordering_bucket(16.0)
            .with_header_ratios(0.9, 1.2)
            .with_min_rotation_samples(20)
            .sequential();

        assert_eq!(options.alignment_tolerance, 6.0);
        assert_eq!(options.ordering_bucket, 16.0);
        assert_eq!(options.header_shrink_ratio, 0.9);
        assert_eq!(options.header_growth_ratio, 1.2);
        assert_eq!(options.min_rotation_samples, 20);
        assert!(!options.parallel);
    }

    #[test]
    fn test_default_options() {
        let options = ReflowOptions::default();
        assert_eq!(options.alignment_tolerance, 10.0);
        assert_eq!(options.ordering_bucket, 20.0);
        assert!(options.parallel);
    }
}
