//! Page-level state and reflow orchestration.

use log::debug;

use super::block::reading_order_key;
use super::{TextBlock, Word};
use crate::error::{Error, Result};
use crate::geometry::BoundingBox;
use crate::reflow::{self, ReflowOptions};

/// A single page: extracted words in, reading-ordered blocks out.
///
/// The page is a one-way state machine. Words accumulate through
/// [`Page::add_word`]; [`Page::reflow`] consumes them exactly once and
/// replaces them with the final block tree, which is then read through
/// [`Page::blocks`] and [`Page::text`]. Reflowing again, or adding words
/// after reflow, is an error.
#[derive(Debug, Clone)]
pub struct Page {
    /// Page number (1-indexed)
    pub number: u32,

    /// Physical page width in points
    pub width: f32,

    /// Physical page height in points
    pub height: f32,

    /// Union box of all words on the page
    bounds: Option<BoundingBox>,

    content: PageContent,
}

#[derive(Debug, Clone)]
enum PageContent {
    /// Words as delivered by the extractor, before reflow
    Raw(Vec<Word>),
    /// The final ordered block tree
    Reflowed(Vec<TextBlock>),
}

impl Page {
    /// Create an empty page with the given number and dimensions.
    pub fn new(number: u32, width: f32, height: f32) -> Self {
        Self {
            number,
            width,
            height,
            bounds: None,
            content: PageContent::Raw(Vec::new()),
        }
    }

    /// Add an extracted word to the page.
    pub fn add_word(&mut self, word: Word) -> Result<()> {
        let PageContent::Raw(words) = &mut self.content else {
            return Err(Error::AlreadyReflowed(self.number));
        };
        match self.bounds.as_mut() {
            Some(bounds) => bounds.expand(&word.bounds),
            None => self.bounds = Some(word.bounds),
        }
        words.push(word);
        Ok(())
    }

    /// Run the reflow pipeline once, consuming the word list.
    ///
    /// Orientation correction runs first because it rewrites the word
    /// coordinates every later stage depends on. After it: split-word
    /// regrouping, line assembly, block assembly, hyphenation repair,
    /// constrained block merging, reading order, header classification.
    pub fn reflow(&mut self, options: &ReflowOptions) -> Result<()> {
        let PageContent::Raw(words) = &mut self.content else {
            return Err(Error::AlreadyReflowed(self.number));
        };
        let mut words = std::mem::take(words);

        if reflow::is_upside_down(&words, self.number, options.min_rotation_samples) {
            debug!("page {}: rotating upside-down content", self.number);
            reflow::rotate_words(&mut words, self.width, self.height);
            self.bounds = union_of(&words);
        }

        let words = reflow::regroup_split_words(words);
        let lines = reflow::assemble_lines(words);
        let mut blocks = reflow::assemble_blocks(lines, options.alignment_tolerance);
        for block in &mut blocks {
            block.dehyphenate();
        }
        reflow::merge_blocks(&mut blocks);
        order_blocks(&mut blocks, options.ordering_bucket);
        for block in &mut blocks {
            block.classify_headers(options.header_shrink_ratio, options.header_growth_ratio);
        }
        debug!(
            "page {}: reflowed into {} top-level blocks",
            self.number,
            blocks.len()
        );

        self.content = PageContent::Reflowed(blocks);
        Ok(())
    }

    /// The reflowed block tree, or `None` before [`Page::reflow`] has run.
    pub fn blocks(&self) -> Option<&[TextBlock]> {
        match &self.content {
            PageContent::Reflowed(blocks) => Some(blocks.as_slice()),
            PageContent::Raw(_) => None,
        }
    }

    /// Whether the page has been reflowed.
    pub fn is_reflowed(&self) -> bool {
        matches!(self.content, PageContent::Reflowed(_))
    }

    /// Number of top-level blocks (0 before reflow).
    pub fn block_count(&self) -> usize {
        self.blocks().map_or(0, <[TextBlock]>::len)
    }

    /// Whether the page holds no content in its current phase.
    pub fn is_empty(&self) -> bool {
        match &self.content {
            PageContent::Raw(words) => words.is_empty(),
            PageContent::Reflowed(blocks) => blocks.is_empty(),
        }
    }

    /// Union box of the page's words, `None` while the page is empty.
    pub fn bounds(&self) -> Option<&BoundingBox> {
        self.bounds.as_ref()
    }

    /// Page dimensions as (width, height).
    pub fn dimensions(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    /// Whether the page is wider than tall.
    pub fn is_landscape(&self) -> bool {
        self.width > self.height
    }

    /// Flattened, reading-ordered, header-marked text of the page.
    ///
    /// Empty before [`Page::reflow`] has run.
    pub fn text(&self) -> String {
        let mut out = String::new();
        if let PageContent::Reflowed(blocks) = &self.content {
            for block in blocks {
                block.write_text(&mut out);
            }
        }
        out
    }
}

/// Order top-level blocks the same way block children are ordered:
/// quantized vertical bucket first, then horizontal.
fn order_blocks(blocks: &mut [TextBlock], bucket_size: f32) {
    blocks.sort_by_key(|block| reading_order_key(block.bounds(), bucket_size));
    for block in blocks {
        block.order_children(bucket_size);
    }
}

fn union_of(words: &[Word]) -> Option<BoundingBox> {
    let mut iter = words.iter();
    let mut bounds = iter.next()?.bounds;
    for word in iter {
        bounds.expand(&word.bounds);
    }
    Some(bounds)
}
