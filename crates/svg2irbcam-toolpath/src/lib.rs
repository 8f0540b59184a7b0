//! # svg2irbcam Toolpath
//!
//! SVG import and toolpath generation for the svg2irbcam converter.
//!
//! The pipeline is a single forward pass over immutable input:
//!
//! 1. **SVG import** ([`svg_import`]) - drawable elements extracted as
//!    `kurbo` Bezier paths
//! 2. **Segment sampling** ([`interpolate`]) - arc-length-spaced points per
//!    curve segment
//! 3. **Drawing assembly** ([`drawing`]) - strokes of tool points with
//!    pen-lift insertion at discontinuities, plus the combined bounds
//! 4. **Sheet fit** ([`normalize`]) - uniform scale and margin offset onto
//!    the physical sheet, with the SVG-to-sheet Y-flip
//! 5. **Pose sequencing** ([`targets`]) - the ordered pose table bracketed
//!    by safe lift poses, packaged with the machine parameter tracks

pub mod convert;
pub mod drawing;
pub mod error;
pub mod interpolate;
pub mod normalize;
pub mod params;
pub mod svg_import;
pub mod targets;

pub use convert::{convert_file, convert_paths};
pub use drawing::{assemble_drawing, Drawing};
pub use error::{
    ParameterError, SvgImportError, SvgImportResult, ToolpathError, ToolpathResult,
};
pub use interpolate::sample_segment;
pub use normalize::SheetTransform;
pub use params::ConversionParameters;
pub use svg_import::{load_svg, parse_svg};
pub use targets::{sequence_poses, ParameterTrack, PathProgram, TargetTable};
