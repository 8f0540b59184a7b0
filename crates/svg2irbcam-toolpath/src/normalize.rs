//! Sheet-fit normalization of drawing coordinates.

use svg2irbcam_core::Bounds;

use crate::error::{ToolpathError, ToolpathResult};
use crate::params::ConversionParameters;

/// Mapping from drawing space onto the printable sheet area.
///
/// The scale is uniform (aspect preserving) and chosen so the drawing's
/// bounding box fills the printable area in its tighter dimension. The Y
/// axis is flipped: SVG documents grow Y downward while the sheet origin is
/// bottom-left.
#[derive(Debug, Clone, Copy)]
pub struct SheetTransform {
    scale: f64,
    min_x: f64,
    max_y: f64,
    margin: f64,
}

impl SheetTransform {
    /// Compute the transform that fits `bounds` into the printable area.
    ///
    /// Fails with [`ToolpathError::DegenerateBounds`] when the drawing has
    /// no extent in either axis; the scale division is never reached with a
    /// zero or non-finite extent.
    pub fn fit(bounds: &Bounds, params: &ConversionParameters) -> ToolpathResult<Self> {
        if bounds.is_degenerate() {
            return Err(ToolpathError::DegenerateBounds {
                width: bounds.width(),
                height: bounds.height(),
            });
        }

        let scale = (params.sheet.printable_width() / bounds.width())
            .min(params.sheet.printable_height() / bounds.height());

        Ok(Self {
            scale,
            min_x: bounds.min_x,
            max_y: bounds.max_y,
            margin: params.sheet.margin,
        })
    }

    /// Scale factor applied to drawing coordinates.
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Map a drawing-space position onto the sheet.
    ///
    /// Heights are not part of this mapping; they pass through the pipeline
    /// unchanged.
    pub fn map(&self, x: f64, y: f64) -> (f64, f64) {
        (
            self.scale * (x - self.min_x) + self.margin,
            self.scale * (self.max_y - y) + self.margin,
        )
    }
}
