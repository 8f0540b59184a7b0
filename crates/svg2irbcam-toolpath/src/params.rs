//! Conversion parameters.

use std::f64::consts::PI;

use svg2irbcam_core::Sheet;

use crate::error::ParameterError;

/// Parameters controlling SVG to toolpath conversion.
///
/// The defaults reproduce the established machine setup: A4 sheet with a
/// 10 mm margin, pen drawing at height 0 and travelling at height 100, and
/// the fixed velocity/tool/spindle values applied once at the start of the
/// program.
#[derive(Debug, Clone)]
pub struct ConversionParameters {
    /// Output sheet geometry.
    pub sheet: Sheet,
    /// Tool height while drawing (mm).
    pub draw_height: f64,
    /// Tool height for travel moves (mm).
    pub lift_height: f64,
    /// Per-axis threshold under which two points count as connected
    /// (drawing units).
    pub tolerance: f64,
    /// Arc-length interval between sampled points (drawing units).
    pub spacing: f64,
    /// Velocity applied at the first target and held for the whole run.
    pub velocity: f64,
    /// Tool number selected at the first target.
    pub tool: u32,
    /// Spindle speed applied at the first target.
    pub spindle: u32,
    /// Fixed rotation about the Z axis (radians).
    pub rz: f64,
    /// Fixed tool pitch (radians); π points the tool straight down at the
    /// sheet.
    pub ry: f64,
    /// Fixed secondary rotation about the Z axis (radians).
    pub rz2: f64,
}

impl Default for ConversionParameters {
    fn default() -> Self {
        Self {
            sheet: Sheet::default(),
            draw_height: 0.0,
            lift_height: 100.0,
            tolerance: 1e-2,
            spacing: 10.0,
            velocity: 100.0,
            tool: 1,
            spindle: 796,
            rz: 0.0,
            ry: PI,
            rz2: 0.0,
        }
    }
}

impl ConversionParameters {
    /// Validate the parameter set.
    ///
    /// Sampling spacing and adjacency tolerance must be strictly positive,
    /// and the margins must leave a positive printable area on the sheet.
    pub fn validate(&self) -> Result<(), ParameterError> {
        if !(self.spacing > 0.0) {
            return Err(ParameterError::NotPositive {
                name: "spacing",
                value: self.spacing,
            });
        }
        if !(self.tolerance > 0.0) {
            return Err(ParameterError::NotPositive {
                name: "tolerance",
                value: self.tolerance,
            });
        }
        if !(self.sheet.width > 0.0) {
            return Err(ParameterError::NotPositive {
                name: "sheet.width",
                value: self.sheet.width,
            });
        }
        if !(self.sheet.height > 0.0) {
            return Err(ParameterError::NotPositive {
                name: "sheet.height",
                value: self.sheet.height,
            });
        }
        if self.sheet.printable_width() <= 0.0 || self.sheet.printable_height() <= 0.0 {
            return Err(ParameterError::MarginTooLarge {
                width: self.sheet.width,
                height: self.sheet.height,
                margin: self.sheet.margin,
            });
        }
        Ok(())
    }
}
