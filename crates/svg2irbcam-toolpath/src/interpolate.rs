//! Arc-length sampling of curve segments.

use kurbo::{ParamCurve, ParamCurveArclen, PathSeg, Point};

/// Accuracy for arc-length evaluation and inversion, in drawing units.
const ARCLEN_ACCURACY: f64 = 1e-4;

/// Sample a segment at fixed arc-length intervals.
///
/// The result always starts at the segment start and ends at the segment
/// end; between them one point is placed at every whole multiple of
/// `spacing` along the curve, located via inverse arc-length lookup. For a
/// segment of length L this yields floor(L / spacing) + 2 points. Points
/// are never deduplicated, so a zero-length segment still yields its two
/// (coincident) endpoints, and an exact-multiple length repeats the end
/// point.
pub fn sample_segment(seg: &PathSeg, spacing: f64) -> Vec<Point> {
    let length = seg.arclen(ARCLEN_ACCURACY);
    let count = (length / spacing) as usize;

    let mut points = Vec::with_capacity(count + 2);
    points.push(seg.start());
    for i in 1..=count {
        let t = seg.inv_arclen(i as f64 * spacing, ARCLEN_ACCURACY);
        points.push(seg.eval(t));
    }
    points.push(seg.end());
    points
}
