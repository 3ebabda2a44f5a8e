//! # pdf-reflow
//!
//! Reading-order text reconstruction from positioned word fragments.
//!
//! PDF-to-text tools often emit words with bounding boxes but no
//! structure. This library rebuilds the structure geometrically: words are
//! grouped into lines, lines into candidate blocks, block fragments are
//! merged back together under a strict non-overlap constraint, and the
//! result is ordered top-to-bottom, left-to-right with header lines tagged
//! by relative height — repairing split words, line-break hyphenation and
//! upside-down pages along the way.
//!
//! ## Quick Start
//!
//! ```
//! use pdf_reflow::{Page, ReflowOptions, Word};
//!
//! fn main() -> pdf_reflow::Result<()> {
//!     let mut page = Page::new(1, 595.0, 842.0);
//!     page.add_word(Word::new("Hello", 72.0, 110.0, 100.0, 112.0)?)?;
//!     page.add_word(Word::new("world", 114.0, 150.0, 100.0, 112.0)?)?;
//!     page.reflow(&ReflowOptions::default())?;
//!
//!     assert_eq!(page.text(), "Hello world\n\n");
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Line and paragraph recovery**: proximity and alignment rules over
//!   word boxes, no markup or font information required
//! - **Constrained block merging**: paragraph fragments fuse only when no
//!   third block intersects the merged area
//! - **Extraction repair**: split-word regrouping, hyphenation repair,
//!   upside-down page detection
//! - **Header tagging**: line-height discontinuity analysis
//! - **Parallel documents**: pages reflow independently via Rayon

pub mod error;
pub mod geometry;
pub mod model;
pub mod reflow;
pub mod render;

// Re-export commonly used types
pub use error::{Error, Result};
pub use geometry::BoundingBox;
pub use model::{BlockChild, BlockType, Document, Line, Page, TextBlock, Word};
pub use reflow::ReflowOptions;
pub use render::to_text;

/// Build a page from extracted words and reflow it in one call.
///
/// # Example
///
/// ```
/// use pdf_reflow::{reflow_words, ReflowOptions, Word};
///
/// let words = vec![
///     Word::new("One", 72.0, 100.0, 100.0, 112.0).unwrap(),
///     Word::new("line", 104.0, 130.0, 100.0, 112.0).unwrap(),
/// ];
/// let page = reflow_words(1, 595.0, 842.0, words, &ReflowOptions::default()).unwrap();
/// assert_eq!(page.text(), "One line\n\n");
/// ```
pub fn reflow_words(
    number: u32,
    width: f32,
    height: f32,
    words: Vec<Word>,
    options: &ReflowOptions,
) -> Result<Page> {
    let mut page = Page::new(number, width, height);
    for word in words {
        page.add_word(word)?;
    }
    page.reflow(options)?;
    Ok(page)
}
