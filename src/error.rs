//! Error types for the pdf-reflow library.

use thiserror::Error;

/// Result type alias for reflow operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while building and reflowing pages.
#[derive(Error, Debug)]
pub enum Error {
    /// Word coordinates were non-finite or inverted.
    ///
    /// The upstream extractor is responsible for delivering well-formed
    /// boxes; anything else is rejected at the boundary instead of being
    /// carried into the geometry.
    #[error("invalid bounds for word {text:?}: coordinates must be finite with min <= max")]
    InvalidWordBounds {
        /// Text of the offending word
        text: String,
    },

    /// The page was already reflowed.
    ///
    /// Reflow consumes the page's word list destructively, so it can run
    /// only once, and no further words can be added afterwards.
    #[error("page {0} has already been reflowed")]
    AlreadyReflowed(u32),
}
