//! Drawing assembly: sampled strokes with pen-lift insertion.
//!
//! Walks the imported paths in order, samples every curve segment, and
//! turns the result into strokes of tool points. Wherever two consecutive
//! pieces of geometry do not join within the adjacency tolerance, a
//! lift/travel pair is inserted so the pen is raised across the gap.

use kurbo::{BezPath, Shape};
use svg2irbcam_core::{Bounds, ToolPoint};
use tracing::debug;

use crate::interpolate::sample_segment;
use crate::params::ConversionParameters;

/// The assembled drawing: ordered strokes of tool points plus the combined
/// bounding box of the contributing paths.
#[derive(Debug, Clone)]
pub struct Drawing {
    /// Ordered strokes; every stroke is non-empty.
    pub strokes: Vec<Vec<ToolPoint>>,
    /// Combined bounding box in drawing units.
    pub bounds: Bounds,
}

impl Drawing {
    /// Total number of points across all strokes.
    pub fn point_count(&self) -> usize {
        self.strokes.iter().map(Vec::len).sum()
    }
}

/// Per-axis adjacency test between the last appended point and the next
/// piece of geometry.
///
/// The tolerance window is rectangular: each axis delta is checked
/// independently, so two points can be "far" on one axis alone. Heights are
/// ignored.
pub(crate) fn points_connected(last: &ToolPoint, x: f64, y: f64, tolerance: f64) -> bool {
    (last.x - x).abs() < tolerance && (last.y - y).abs() < tolerance
}

/// Assemble the drawing from imported paths.
///
/// Paths that yield no sampled points are skipped entirely: they contribute
/// no stroke, no bounding box, and do not update the travel tracking.
pub fn assemble_drawing(paths: &[BezPath], params: &ConversionParameters) -> Drawing {
    let mut strokes: Vec<Vec<ToolPoint>> = Vec::new();
    let mut bounds = Bounds::empty();
    let mut previous_end: Option<ToolPoint> = None;

    for (index, path) in paths.iter().enumerate() {
        let stroke = assemble_stroke(path, params);
        if stroke.is_empty() {
            debug!(path = index, "skipping path with no sampled points");
            continue;
        }

        let rect = path.bounding_box();
        bounds = bounds.union(&Bounds::new(rect.x0, rect.y0, rect.x1, rect.y1));

        if let Some(prev) = previous_end {
            let first = stroke[0];
            if !points_connected(&prev, first.x, first.y, params.tolerance) {
                // Travel between paths is recorded as two standalone
                // single-point strokes at lift height: pen up where the last
                // path ended, pen still up where the next one starts.
                strokes.push(vec![prev.at_height(params.lift_height)]);
                strokes.push(vec![first.at_height(params.lift_height)]);
            }
        }

        previous_end = stroke.last().copied();
        strokes.push(stroke);
    }

    debug!(strokes = strokes.len(), bounds = %bounds, "assembled drawing");
    Drawing { strokes, bounds }
}

/// Sample one path into a single stroke, inserting lift pairs at segment
/// discontinuities (subpath breaks within the path).
fn assemble_stroke(path: &BezPath, params: &ConversionParameters) -> Vec<ToolPoint> {
    let mut stroke: Vec<ToolPoint> = Vec::new();

    for seg in path.segments() {
        let samples = sample_segment(&seg, params.spacing);

        if let Some(last) = stroke.last().copied() {
            let first = samples[0];
            if !points_connected(&last, first.x, first.y, params.tolerance) {
                stroke.push(last.at_height(params.lift_height));
                stroke.push(ToolPoint::new(first.x, first.y, params.lift_height));
            }
        }

        stroke.extend(
            samples
                .iter()
                .map(|p| ToolPoint::new(p.x, p.y, params.draw_height)),
        );
    }

    stroke
}
