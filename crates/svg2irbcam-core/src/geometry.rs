//! Data models for toolpath points, poses, and drawing bounds
//!
//! This module provides:
//! - Tool-space points with the pen state encoded as a height
//! - Output pose records with position, orientation, and move type
//! - Axis-aligned bounding boxes with min/max reduction

use serde::{Deserialize, Serialize};
use std::fmt;

/// A point in tool space.
///
/// `z` is not a free coordinate: it carries the pen state as one of the two
/// configured heights (draw or lift) and passes through the sheet transform
/// unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ToolPoint {
    /// X-axis position in drawing units
    pub x: f64,
    /// Y-axis position in drawing units
    pub y: f64,
    /// Tool height (mm)
    pub z: f64,
}

impl ToolPoint {
    /// Create a new tool point
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Copy of this point at a different height
    pub fn at_height(&self, z: f64) -> Self {
        Self { z, ..*self }
    }
}

impl fmt::Display for ToolPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "X:{:.3} Y:{:.3} Z:{:.3}", self.x, self.y, self.z)
    }
}

/// One emitted tool pose: sheet position, fixed orientation, and a move
/// type tag.
///
/// Orientation never varies in this converter; the fields exist because the
/// target document carries one column per axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    /// X position on the sheet (mm)
    pub x: f64,
    /// Y position on the sheet (mm)
    pub y: f64,
    /// Tool height (mm)
    pub z: f64,
    /// Rotation about the Z axis (radians)
    pub rz: f64,
    /// Tool pitch (radians); π points the tool at the sheet
    pub ry: f64,
    /// Secondary rotation about the Z axis (radians)
    pub rz2: f64,
    /// Move type tag, serialized as the `type` column
    pub move_type: i32,
}

/// Axis-aligned bounding box of the input drawing, in drawing units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    /// Minimum X coordinate
    pub min_x: f64,
    /// Minimum Y coordinate
    pub min_y: f64,
    /// Maximum X coordinate
    pub max_x: f64,
    /// Maximum Y coordinate
    pub max_y: f64,
}

impl Bounds {
    /// Create a bounding box from explicit extents
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// The empty box: identity element for [`Bounds::union`]
    pub fn empty() -> Self {
        Self {
            min_x: f64::INFINITY,
            min_y: f64::INFINITY,
            max_x: f64::NEG_INFINITY,
            max_y: f64::NEG_INFINITY,
        }
    }

    /// Smallest box containing both boxes
    pub fn union(&self, other: &Bounds) -> Self {
        Self {
            min_x: self.min_x.min(other.min_x),
            min_y: self.min_y.min(other.min_y),
            max_x: self.max_x.max(other.max_x),
            max_y: self.max_y.max(other.max_y),
        }
    }

    /// Horizontal extent
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    /// Vertical extent
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// True when the box has no usable area.
    ///
    /// Written so that zero, negative, and non-finite extents all count as
    /// degenerate; a degenerate box must never reach the scale division.
    pub fn is_degenerate(&self) -> bool {
        !(self.width() > 0.0 && self.height() > 0.0)
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{:.3}, {:.3}] x [{:.3}, {:.3}]",
            self.min_x, self.max_x, self.min_y, self.max_y
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tool_point_at_height() {
        let p = ToolPoint::new(3.0, 4.0, 0.0);
        let lifted = p.at_height(100.0);
        assert_eq!(lifted.x, 3.0);
        assert_eq!(lifted.y, 4.0);
        assert_eq!(lifted.z, 100.0);
        // original is untouched
        assert_eq!(p.z, 0.0);
    }

    #[test]
    fn test_bounds_union() {
        let a = Bounds::new(0.0, 0.0, 10.0, 5.0);
        let b = Bounds::new(-2.0, 3.0, 4.0, 20.0);
        let u = a.union(&b);
        assert_eq!(u, Bounds::new(-2.0, 0.0, 10.0, 20.0));
    }

    #[test]
    fn test_empty_is_union_identity() {
        let a = Bounds::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(Bounds::empty().union(&a), a);
        assert_eq!(a.union(&Bounds::empty()), a);
    }

    #[test]
    fn test_degenerate_bounds() {
        assert!(Bounds::empty().is_degenerate());
        // zero width
        assert!(Bounds::new(5.0, 0.0, 5.0, 10.0).is_degenerate());
        // zero height
        assert!(Bounds::new(0.0, 5.0, 10.0, 5.0).is_degenerate());
        // inverted
        assert!(Bounds::new(10.0, 0.0, 0.0, 10.0).is_degenerate());
        assert!(!Bounds::new(0.0, 0.0, 10.0, 10.0).is_degenerate());
    }

    #[test]
    fn test_bounds_extent() {
        let b = Bounds::new(-5.0, 10.0, 15.0, 40.0);
        assert_eq!(b.width(), 20.0);
        assert_eq!(b.height(), 30.0);
    }
}
