//! Grouping of lines into candidate text blocks.

use crate::model::{Line, TextBlock};

/// Assemble lines into blocks in a single greedy pass.
///
/// Each line joins the first existing block, in block creation order, that
/// accepts it as its next line; a line no block accepts seeds a new
/// single-line block. Considering all blocks rather than just the newest
/// lets interleaved columns keep collecting their own lines.
pub fn assemble_blocks(lines: Vec<Line>, alignment_tolerance: f32) -> Vec<TextBlock> {
    let mut blocks: Vec<TextBlock> = Vec::new();
    for line in lines {
        let target = blocks
            .iter()
            .position(|block| block.accepts_line(&line, alignment_tolerance));
        match target {
            Some(idx) => blocks[idx].push_line(line),
            None => blocks.push(TextBlock::from_line(line)),
        }
    }
    blocks
}
