//! Physical sheet geometry
//!
//! The drawing is scaled onto a fixed sheet with a uniform margin on all
//! sides; only the area inside the margins is printable. All dimensions are
//! millimeters.

use serde::{Deserialize, Serialize};
use std::fmt;

/// ISO A4 sheet width in millimeters
pub const A4_WIDTH: f64 = 210.0;

/// ISO A4 sheet height in millimeters
pub const A4_HEIGHT: f64 = 297.0;

/// A physical sheet with a uniform margin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sheet {
    /// Sheet width (mm)
    pub width: f64,
    /// Sheet height (mm)
    pub height: f64,
    /// Margin kept clear on every side (mm)
    pub margin: f64,
}

impl Sheet {
    /// Create a sheet from explicit dimensions
    pub fn new(width: f64, height: f64, margin: f64) -> Self {
        Self {
            width,
            height,
            margin,
        }
    }

    /// A4 portrait with the given margin
    pub fn a4(margin: f64) -> Self {
        Self::new(A4_WIDTH, A4_HEIGHT, margin)
    }

    /// Width of the printable area inside the margins
    pub fn printable_width(&self) -> f64 {
        self.width - 2.0 * self.margin
    }

    /// Height of the printable area inside the margins
    pub fn printable_height(&self) -> f64 {
        self.height - 2.0 * self.margin
    }
}

impl Default for Sheet {
    fn default() -> Self {
        Self::a4(10.0)
    }
}

impl fmt::Display for Sheet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.0}x{:.0}mm ({:.0}mm margin)",
            self.width, self.height, self.margin
        )
    }
}
