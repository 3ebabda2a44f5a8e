//! Document-level container types.

use rayon::prelude::*;

use super::Page;
use crate::error::Result;
use crate::reflow::ReflowOptions;

/// An ordered collection of pages with a document title.
///
/// Purely a container: the reflow algorithm itself is page-local. Pages
/// share no state, so document-level reflow fans them out in parallel.
#[derive(Debug, Clone, Default)]
pub struct Document {
    /// Document title, when the source provided one
    pub title: Option<String>,

    /// Pages in document order
    pub pages: Vec<Page>,
}

impl Document {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new empty document with a title.
    pub fn with_title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            pages: Vec::new(),
        }
    }

    /// Add a page to the document.
    pub fn add_page(&mut self, page: Page) {
        self.pages.push(page);
    }

    /// Number of pages in the document.
    pub fn page_count(&self) -> u32 {
        self.pages.len() as u32
    }

    /// Get a page by number (1-indexed).
    pub fn get_page(&self, number: u32) -> Option<&Page> {
        if number == 0 {
            return None;
        }
        self.pages.get((number - 1) as usize)
    }

    /// Whether the document has any pages.
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Reflow every page.
    ///
    /// Pages run in parallel unless the options say otherwise; each page
    /// is an independent unit of work.
    pub fn reflow(&mut self, options: &ReflowOptions) -> Result<()> {
        if options.parallel {
            self.pages
                .par_iter_mut()
                .try_for_each(|page| page.reflow(options))
        } else {
            self.pages
                .iter_mut()
                .try_for_each(|page| page.reflow(options))
        }
    }

    /// Plain text of all reflowed pages in document order.
    pub fn plain_text(&self) -> String {
        self.pages.iter().map(Page::text).collect()
    }
}
