//! End-to-end conversion pipeline.
//!
//! One synchronous forward pass: import, assemble, fit, sequence, emit.
//! Any failure aborts the whole conversion; nothing is retried.

use std::fs;
use std::path::Path as StdPath;

use kurbo::BezPath;
use tracing::info;

use crate::drawing::assemble_drawing;
use crate::error::{ToolpathError, ToolpathResult};
use crate::normalize::SheetTransform;
use crate::params::ConversionParameters;
use crate::svg_import::load_svg;
use crate::targets::{sequence_poses, PathProgram};

/// Convert imported paths into a path program.
pub fn convert_paths(
    paths: &[BezPath],
    params: &ConversionParameters,
) -> ToolpathResult<PathProgram> {
    params.validate()?;

    let drawing = assemble_drawing(paths, params);
    if drawing.strokes.is_empty() {
        // checked before the sheet fit so an input with no drawable content
        // reports the precise cause instead of degenerate bounds
        return Err(ToolpathError::EmptyDrawing);
    }

    let transform = SheetTransform::fit(&drawing.bounds, params)?;
    let poses = sequence_poses(&drawing, &transform, params)?;
    info!(
        strokes = drawing.strokes.len(),
        targets = poses.len(),
        scale = transform.scale(),
        "assembled toolpath"
    );

    Ok(PathProgram::from_poses(&poses, params))
}

/// Convert an SVG file and write the resulting path program as JSON.
///
/// The document is fully assembled in memory before the output file is
/// created, so a failed conversion leaves no partial output behind.
pub fn convert_file<P: AsRef<StdPath>, Q: AsRef<StdPath>>(
    input: P,
    output: Q,
    params: &ConversionParameters,
) -> ToolpathResult<PathProgram> {
    let paths = load_svg(input)?;
    let program = convert_paths(&paths, params)?;

    let json = program.to_json()?;
    fs::write(output.as_ref(), json)?;
    info!(
        file = %output.as_ref().display(),
        targets = program.len(),
        "wrote path program"
    );

    Ok(program)
}
