//! Word-level types.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::geometry::BoundingBox;

/// A single word or token with its position on the page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Word {
    /// The text of the word as extracted
    pub text: String,

    /// Extent of the word on the page
    pub bounds: BoundingBox,
}

impl Word {
    /// Create a word from its text and bounding box edges.
    ///
    /// Coordinates are in points from the top-left page corner. Non-finite
    /// or inverted bounds are a precondition violation by the upstream
    /// extractor and are rejected here rather than propagated into the
    /// geometry.
    pub fn new(
        text: impl Into<String>,
        x_min: f32,
        x_max: f32,
        y_min: f32,
        y_max: f32,
    ) -> Result<Self> {
        let text = text.into();
        let finite = [x_min, x_max, y_min, y_max].iter().all(|c| c.is_finite());
        if !finite || x_min > x_max || y_min > y_max {
            return Err(Error::InvalidWordBounds { text });
        }
        Ok(Self {
            text,
            bounds: BoundingBox::new(x_min, x_max, y_min, y_max),
        })
    }

    /// Height of the word's box, a proxy for its font size.
    pub fn height(&self) -> f32 {
        self.bounds.height()
    }
}
