//! Block-level types: the tree of paragraphs and headings.

use serde::{Deserialize, Serialize};

use super::Line;
use crate::geometry::BoundingBox;

/// Classification of a text block.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockType {
    /// Body text
    #[default]
    Paragraph,
    /// A heading line or run of heading lines
    Header,
}

/// A child of a text block: a leaf line, or a nested block produced by
/// merging.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BlockChild {
    /// A single text line
    Line(Line),
    /// A nested sub-block
    Block(TextBlock),
}

impl BlockChild {
    /// Bounding box of the child, whichever variant it is.
    pub fn bounds(&self) -> &BoundingBox {
        match self {
            BlockChild::Line(line) => line.bounds(),
            BlockChild::Block(block) => block.bounds(),
        }
    }

    /// Whether this child is a leaf line.
    pub fn is_line(&self) -> bool {
        matches!(self, BlockChild::Line(_))
    }
}

/// A vertically-stacked run of lines (or nested blocks) judged to form one
/// paragraph, column fragment or heading.
///
/// Merging never flattens: fusing two blocks wraps both as children of a
/// new block, so the structure is a tree. A block owns its children
/// exclusively, and its bounding box is the union of all descendant boxes,
/// maintained on every insertion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextBlock {
    bounds: BoundingBox,
    block_type: BlockType,
    children: Vec<BlockChild>,
    /// Running sum of directly-owned line heights, for `avg_line_height`
    line_height_sum: f32,
    line_count: usize,
}

impl TextBlock {
    /// Start a block from its first line.
    pub fn from_line(line: Line) -> Self {
        let bounds = *line.bounds();
        let line_height = line.height();
        Self {
            bounds,
            block_type: BlockType::Paragraph,
            children: vec![BlockChild::Line(line)],
            line_height_sum: line_height,
            line_count: 1,
        }
    }

    /// Wrap two blocks as the children of a new parent block, first on top.
    ///
    /// The children keep their internal structure untouched; only the
    /// parent box is computed fresh as the union of both.
    pub fn from_pair(first: TextBlock, second: TextBlock) -> Self {
        let mut bounds = first.bounds;
        bounds.expand(&second.bounds);
        Self {
            bounds,
            block_type: BlockType::Paragraph,
            children: vec![BlockChild::Block(first), BlockChild::Block(second)],
            line_height_sum: 0.0,
            line_count: 0,
        }
    }

    /// Union box of all descendants.
    pub fn bounds(&self) -> &BoundingBox {
        &self.bounds
    }

    /// The block's classification.
    pub fn block_type(&self) -> BlockType {
        self.block_type
    }

    /// Whether the block was classified as a header.
    pub fn is_header(&self) -> bool {
        self.block_type == BlockType::Header
    }

    /// The block's children in document order.
    pub fn children(&self) -> &[BlockChild] {
        &self.children
    }

    /// Average height of the directly-owned lines, 0.0 when there are none.
    pub fn avg_line_height(&self) -> f32 {
        if self.line_count == 0 {
            0.0
        } else {
            self.line_height_sum / self.line_count as f32
        }
    }

    /// Append a line, growing the box and the line-height accumulator.
    pub fn push_line(&mut self, line: Line) {
        self.bounds.expand(line.bounds());
        self.line_height_sum += line.height();
        self.line_count += 1;
        self.children.push(BlockChild::Line(line));
    }

    /// Append a nested block, growing the box over it.
    pub fn push_block(&mut self, block: TextBlock) {
        self.bounds.expand(&block.bounds);
        self.children.push(BlockChild::Block(block));
    }

    /// Whether `line` reads as the next line of this block.
    ///
    /// The line's left edge must align with the block's within
    /// `alignment_tolerance` points, and the line must either start just
    /// below the block (within one line height) or overlap the block's
    /// vertical extent, which covers text on a slight angle.
    pub fn accepts_line(&self, line: &Line, alignment_tolerance: f32) -> bool {
        if (line.bounds().x_min - self.bounds.x_min).abs() >= alignment_tolerance {
            return false;
        }
        let line_box = line.bounds();
        if line_box.y_min > self.bounds.y_max
            && line_box.y_min - self.bounds.y_max < line.height()
        {
            return true;
        }
        line_box.y_min < self.bounds.y_max && line_box.y_min > self.bounds.y_min
    }

    /// Rejoin words split across a line break by a trailing hyphen.
    ///
    /// Terms split over two lines in the same block are recombined
    /// ("multi-" + "ple" -> "multiple"). The hyphen is kept when the next
    /// word is the conjunction "en" ("peper- en zoutstelletje") or starts
    /// with an uppercase letter ("Amsterdam-Rijnkanaal"). Recurses into
    /// nested blocks; joins never cross a nested-block boundary.
    pub fn dehyphenate(&mut self) {
        let mut prev_line: Option<usize> = None;
        for idx in 0..self.children.len() {
            if let BlockChild::Block(block) = &mut self.children[idx] {
                block.dehyphenate();
                prev_line = None;
                continue;
            }
            if let Some(prev_idx) = prev_line {
                self.join_hyphenated(prev_idx, idx);
            }
            prev_line = Some(idx);
        }
    }

    fn join_hyphenated(&mut self, prev_idx: usize, curr_idx: usize) {
        let (head, tail) = self.children.split_at_mut(curr_idx);
        let (BlockChild::Line(previous), BlockChild::Line(current)) =
            (&mut head[prev_idx], &mut tail[0])
        else {
            return;
        };
        let Some(last) = previous.last_word_mut() else {
            return;
        };
        if !last.text.ends_with('-') {
            return;
        }
        let continues = current.words().first().is_some_and(|w| {
            !w.text.eq_ignore_ascii_case("en")
                && w.text.chars().next().is_some_and(char::is_lowercase)
        });
        if !continues {
            return;
        }
        if let Some(next) = current.remove_first_word() {
            last.text.pop();
            last.text.push_str(&next.text);
        }
    }

    /// Split the direct line sequence into header/paragraph runs on line
    /// height discontinuities.
    ///
    /// Lines join the current run while their height stays near the run's
    /// average. A line under `shrink_ratio` of the average closes the run
    /// and tags it as a header (smaller body text follows a taller
    /// heading); a line over `growth_ratio` closes the run as a plain
    /// font-size break. Nested blocks are classified on their own and
    /// reset the running average.
    pub fn classify_headers(&mut self, shrink_ratio: f32, growth_ratio: f32) {
        let children = std::mem::take(&mut self.children);
        let mut classified = Vec::with_capacity(children.len());
        let mut run: Option<TextBlock> = None;

        for child in children {
            match child {
                BlockChild::Line(line) => match run.as_mut() {
                    None => run = Some(TextBlock::from_line(line)),
                    Some(current) => {
                        let avg = current.avg_line_height();
                        if line.height() < shrink_ratio * avg {
                            current.block_type = BlockType::Header;
                            let closed = std::mem::replace(current, TextBlock::from_line(line));
                            classified.push(BlockChild::Block(closed));
                        } else if line.height() > growth_ratio * avg {
                            let closed = std::mem::replace(current, TextBlock::from_line(line));
                            classified.push(BlockChild::Block(closed));
                        } else {
                            current.push_line(line);
                        }
                    }
                },
                BlockChild::Block(mut block) => {
                    if let Some(closed) = run.take() {
                        classified.push(BlockChild::Block(closed));
                    }
                    block.classify_headers(shrink_ratio, growth_ratio);
                    classified.push(BlockChild::Block(block));
                }
            }
        }
        if let Some(closed) = run.take() {
            classified.push(BlockChild::Block(closed));
        }

        // Direct lines all moved into run blocks.
        self.line_height_sum = 0.0;
        self.line_count = 0;
        self.children = classified;
    }

    /// Order children top-to-bottom, left-to-right on quantized position
    /// buckets, recursively.
    pub fn order_children(&mut self, bucket_size: f32) {
        self.children
            .sort_by_key(|child| reading_order_key(child.bounds(), bucket_size));
        for child in &mut self.children {
            if let BlockChild::Block(block) = child {
                block.order_children(bucket_size);
            }
        }
    }

    /// Append the block's text to `out`.
    ///
    /// One output line per text line, a `#` marker ahead of each line of a
    /// header block, and a blank separator line after any block that
    /// directly contains text (purely structural blocks emit none, to
    /// avoid piling up blank lines across nesting levels).
    pub fn write_text(&self, out: &mut String) {
        for child in &self.children {
            match child {
                BlockChild::Block(block) => block.write_text(out),
                BlockChild::Line(line) => {
                    if self.block_type == BlockType::Header {
                        out.push('#');
                    }
                    out.push_str(&line.text());
                    out.push('\n');
                }
            }
        }
        if self.children.iter().any(BlockChild::is_line) {
            out.push('\n');
        }
    }

    /// The block's rendered text.
    pub fn text(&self) -> String {
        let mut out = String::new();
        self.write_text(&mut out);
        out
    }
}

/// Sort key approximating "top row first, left-to-right within a row":
/// vertical bucket first, then horizontal bucket, tolerating small
/// misalignments within a bucket.
pub(crate) fn reading_order_key(bounds: &BoundingBox, bucket_size: f32) -> (i64, i64) {
    (
        (bounds.y_min / bucket_size).floor() as i64,
        (bounds.x_min / bucket_size).floor() as i64,
    )
}
