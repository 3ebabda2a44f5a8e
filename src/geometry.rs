//! Axis-aligned bounding-box math used by every pipeline stage.

use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle describing an element's extent on a page.
///
/// Coordinates are in points from the top-left corner of the page, so
/// `y_min` is the top edge and `y_max` the bottom edge. Invariant:
/// `x_min <= x_max` and `y_min <= y_max`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    /// Leftmost position in points
    pub x_min: f32,

    /// Rightmost position in points
    pub x_max: f32,

    /// Topmost position in points
    pub y_min: f32,

    /// Bottommost position in points
    pub y_max: f32,
}

impl BoundingBox {
    /// Create a bounding box from its four edges.
    pub fn new(x_min: f32, x_max: f32, y_min: f32, y_max: f32) -> Self {
        Self {
            x_min,
            x_max,
            y_min,
            y_max,
        }
    }

    /// Width of the box.
    pub fn width(&self) -> f32 {
        self.x_max - self.x_min
    }

    /// Height of the box.
    pub fn height(&self) -> f32 {
        self.y_max - self.y_min
    }

    /// Vertical center of the box.
    pub fn center_y(&self) -> f32 {
        (self.y_min + self.y_max) / 2.0
    }

    /// Whether the two boxes intersect on both axes. Touching edges count.
    pub fn overlaps(&self, other: &BoundingBox) -> bool {
        self.x_min <= other.x_max
            && self.x_max >= other.x_min
            && self.y_min <= other.y_max
            && self.y_max >= other.y_min
    }

    /// Grow this box in place to cover `other`.
    pub fn expand(&mut self, other: &BoundingBox) {
        self.x_min = self.x_min.min(other.x_min);
        self.x_max = self.x_max.max(other.x_max);
        self.y_min = self.y_min.min(other.y_min);
        self.y_max = self.y_max.max(other.y_max);
    }

    /// The smallest box covering both boxes.
    pub fn union(&self, other: &BoundingBox) -> BoundingBox {
        let mut merged = *self;
        merged.expand(other);
        merged
    }

    /// Straight-line distance between the nearest edges of the two boxes.
    ///
    /// Zero when the boxes overlap or touch on both axes. This is the
    /// distance metric the block merge engine ranks candidate pairs by.
    pub fn gap(&self, other: &BoundingBox) -> f32 {
        let h = gap_1d(self.x_min, self.x_max, other.x_min, other.x_max);
        let v = gap_1d(self.y_min, self.y_max, other.y_min, other.y_max);
        (h * h + v * v).sqrt()
    }
}

/// Gap between two intervals: zero when they overlap or touch, otherwise
/// the distance between the nearer edges. Order-independent.
fn gap_1d(a_min: f32, a_max: f32, b_min: f32, b_max: f32) -> f32 {
    if a_min <= b_min {
        if b_min >= a_max {
            b_min - a_max
        } else {
            0.0
        }
    } else {
        gap_1d(b_min, b_max, a_min, a_max)
    }
}
