//! Error types for the toolpath conversion crate.
//!
//! This module provides structured error types for SVG import, parameter
//! validation, and toolpath generation.

use std::io;
use thiserror::Error;

/// Errors that can occur during toolpath conversion.
#[derive(Error, Debug)]
pub enum ToolpathError {
    /// The input SVG could not be imported.
    #[error("SVG import failed: {0}")]
    Import(#[from] SvgImportError),

    /// A parameter validation error occurred.
    #[error("Parameter error: {0}")]
    Parameter(#[from] ParameterError),

    /// The drawing has no extent in at least one axis, so a fit scale
    /// cannot be computed.
    #[error("Degenerate drawing bounds: width {width}, height {height}")]
    DegenerateBounds {
        /// Horizontal extent of the combined bounding box.
        width: f64,
        /// Vertical extent of the combined bounding box.
        height: f64,
    },

    /// No path produced any sampled point.
    #[error("Drawing produced no toolpath points")]
    EmptyDrawing,

    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Errors related to conversion parameter validation.
#[derive(Error, Debug)]
pub enum ParameterError {
    /// A parameter that must be strictly positive is not.
    #[error("Parameter '{name}' must be positive, got {value}")]
    NotPositive {
        /// The parameter name.
        name: &'static str,
        /// The offending value.
        value: f64,
    },

    /// The margins consume the whole sheet.
    #[error("Margin {margin} leaves no printable area on a {width}x{height} sheet")]
    MarginTooLarge {
        /// Sheet width in millimeters.
        width: f64,
        /// Sheet height in millimeters.
        height: f64,
        /// Margin in millimeters.
        margin: f64,
    },
}

/// Errors raised while importing an SVG document.
#[derive(Error, Debug)]
pub enum SvgImportError {
    /// The file does not contain an `<svg>` element.
    #[error("Not an SVG document")]
    NotSvg,

    /// Path data could not be parsed.
    #[error("SVG path parse error: {0}")]
    PathData(String),

    /// I/O error during file reading.
    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),
}

/// Result type alias for toolpath conversion.
pub type ToolpathResult<T> = Result<T, ToolpathError>;

/// Result type alias for SVG import.
pub type SvgImportResult<T> = Result<T, SvgImportError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toolpath_error_display() {
        let err = ToolpathError::DegenerateBounds {
            width: 0.0,
            height: 42.0,
        };
        assert_eq!(err.to_string(), "Degenerate drawing bounds: width 0, height 42");

        let err = ToolpathError::EmptyDrawing;
        assert_eq!(err.to_string(), "Drawing produced no toolpath points");
    }

    #[test]
    fn test_parameter_error_display() {
        let err = ParameterError::NotPositive {
            name: "spacing",
            value: -1.0,
        };
        assert_eq!(err.to_string(), "Parameter 'spacing' must be positive, got -1");

        let err = ParameterError::MarginTooLarge {
            width: 210.0,
            height: 297.0,
            margin: 150.0,
        };
        assert_eq!(
            err.to_string(),
            "Margin 150 leaves no printable area on a 210x297 sheet"
        );
    }

    #[test]
    fn test_import_error_display() {
        let err = SvgImportError::PathData("bad command".to_string());
        assert_eq!(err.to_string(), "SVG path parse error: bad command");
    }

    #[test]
    fn test_error_conversion() {
        let param_err = ParameterError::NotPositive {
            name: "tolerance",
            value: 0.0,
        };
        let err: ToolpathError = param_err.into();
        assert!(matches!(err, ToolpathError::Parameter(_)));

        let import_err = SvgImportError::NotSvg;
        let err: ToolpathError = import_err.into();
        assert!(matches!(err, ToolpathError::Import(_)));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: ToolpathError = io_err.into();
        assert!(matches!(err, ToolpathError::Io(_)));

        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "access denied");
        let err: SvgImportError = io_err.into();
        assert!(matches!(err, SvgImportError::IoError(_)));
    }
}
