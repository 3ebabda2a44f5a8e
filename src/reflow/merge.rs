//! Iterative constrained merging of block fragments.
//!
//! Line and block assembly sometimes split one logical paragraph into
//! several blocks: a stray gap, a misdetected column edge. This stage
//! fuses such fragments back together, nearest pair first, but only when
//! the union of the pair's boxes overlaps no third block on the page, so a
//! merge can never capture unrelated text in between.

use crate::model::TextBlock;

/// Repeatedly merge the closest valid pair of blocks until none remains.
///
/// Each merge removes the pair from the list, wraps both blocks as
/// children of a new block (their internal structure untouched, top block
/// first) and inserts it at the lower of the two indices. Candidates are
/// recomputed from scratch after every merge. Every iteration shrinks the
/// list by one block, so the loop runs at most `n - 1` times.
pub fn merge_blocks(blocks: &mut Vec<TextBlock>) {
    while let Some(pair) = closest_valid_pair(blocks) {
        let second = blocks.remove(pair.second);
        let first = blocks.remove(pair.first);
        blocks.insert(pair.first, TextBlock::from_pair(first, second));
    }
}

/// An unordered block pair by list index, `first < second`.
struct MergePair {
    first: usize,
    second: usize,
}

/// Scan all pairs for the closest one that is valid to merge.
///
/// The validity test is the expensive step, so it only runs for pairs
/// strictly closer than the best valid pair found so far: a pair at or
/// past that distance cannot win the selection whether it is valid or not.
/// Ties on distance therefore resolve to the earliest pair in
/// (first, second) index order, keeping the choice deterministic.
fn closest_valid_pair(blocks: &[TextBlock]) -> Option<MergePair> {
    let mut best: Option<(f32, MergePair)> = None;
    for first in 0..blocks.len() {
        for second in first + 1..blocks.len() {
            let distance = blocks[first].bounds().gap(blocks[second].bounds());
            if let Some((best_distance, _)) = &best {
                if distance >= *best_distance {
                    continue;
                }
            }
            if is_valid_merge(blocks, first, second) {
                best = Some((distance, MergePair { first, second }));
            }
        }
    }
    best.map(|(_, pair)| pair)
}

/// A merge is valid iff no block besides the pair itself intersects the
/// pair's union box.
fn is_valid_merge(blocks: &[TextBlock], first: usize, second: usize) -> bool {
    let merged = blocks[first].bounds().union(blocks[second].bounds());
    !blocks
        .iter()
        .enumerate()
        .any(|(idx, other)| idx != first && idx != second && other.bounds().overlaps(&merged))
}
