//! SVG import: extract drawable elements as Bezier paths.
//!
//! This is a deliberately small importer rather than a full XML parser:
//! elements are located with regular expressions and their geometry is
//! handed to `kurbo`. Covers the element set produced by common drawing
//! tools:
//! - `<path>` via the full SVG path grammar (`BezPath::from_svg`)
//! - `<line>`, `<rect>`, `<circle>`, `<ellipse>`, `<polyline>`, `<polygon>`
//!   converted to paths
//! - a `matrix`/`translate`/`scale` transform on the outermost group
//!
//! Coordinates are imported unmodified; the sheet transform later owns the
//! Y-flip between SVG and sheet conventions.

use std::fs;
use std::path::Path as StdPath;

use kurbo::{Affine, BezPath, Circle, Ellipse, Rect, Shape};
use regex::Regex;
use tracing::{debug, info};

use crate::error::{SvgImportError, SvgImportResult};

/// Flattening tolerance when converting circles and ellipses to Beziers.
const SHAPE_TOLERANCE: f64 = 1e-3;

/// Load all drawable elements of an SVG file as Bezier paths.
///
/// Paths appear in document order within each element class: `<path>`
/// elements first, then the basic shapes.
pub fn load_svg<P: AsRef<StdPath>>(path: P) -> SvgImportResult<Vec<BezPath>> {
    let content = fs::read_to_string(path.as_ref())?;
    info!(file = %path.as_ref().display(), "importing SVG");
    parse_svg(&content)
}

/// Parse SVG content into Bezier paths.
pub fn parse_svg(content: &str) -> SvgImportResult<Vec<BezPath>> {
    if !content.contains("<svg") {
        return Err(SvgImportError::NotSvg);
    }

    let mut paths = Vec::new();
    collect_path_elements(content, &mut paths)?;
    collect_lines(content, &mut paths);
    collect_rects(content, &mut paths);
    collect_circles(content, &mut paths);
    collect_ellipses(content, &mut paths);
    collect_polylines(content, &mut paths, "<polyline", false);
    collect_polylines(content, &mut paths, "<polygon", true);

    if let Some(affine) = parse_group_transform(content) {
        for path in &mut paths {
            path.apply_affine(affine);
        }
    }

    debug!(paths = paths.len(), "parsed SVG elements");
    Ok(paths)
}

/// Extract `<path d="...">` elements.
///
/// Malformed path data is fatal: the underlying geometry-library error is
/// surfaced instead of silently dropping the element.
fn collect_path_elements(content: &str, out: &mut Vec<BezPath>) -> SvgImportResult<()> {
    let re_path = Regex::new(r"<path\s[^>]*>").expect("invalid path regex");
    let re_d = Regex::new(r#"\bd\s*=\s*["']([^"']+)["']"#).expect("invalid d regex");

    for tag in re_path.find_iter(content) {
        if let Some(caps) = re_d.captures(tag.as_str()) {
            let path = BezPath::from_svg(&caps[1])
                .map_err(|e| SvgImportError::PathData(e.to_string()))?;
            out.push(path);
        }
    }
    Ok(())
}

fn collect_lines(content: &str, out: &mut Vec<BezPath>) {
    for tag in element_tags(content, "<line") {
        let x1 = attr_f64(&tag, "x1").unwrap_or(0.0);
        let y1 = attr_f64(&tag, "y1").unwrap_or(0.0);
        let x2 = attr_f64(&tag, "x2").unwrap_or(0.0);
        let y2 = attr_f64(&tag, "y2").unwrap_or(0.0);

        let mut path = BezPath::new();
        path.move_to((x1, y1));
        path.line_to((x2, y2));
        out.push(path);
    }
}

fn collect_rects(content: &str, out: &mut Vec<BezPath>) {
    for tag in element_tags(content, "<rect") {
        let x = attr_f64(&tag, "x").unwrap_or(0.0);
        let y = attr_f64(&tag, "y").unwrap_or(0.0);
        let width = attr_f64(&tag, "width").unwrap_or(0.0);
        let height = attr_f64(&tag, "height").unwrap_or(0.0);

        if width > 0.0 && height > 0.0 {
            out.push(Rect::new(x, y, x + width, y + height).into_path(SHAPE_TOLERANCE));
        }
    }
}

fn collect_circles(content: &str, out: &mut Vec<BezPath>) {
    for tag in element_tags(content, "<circle") {
        let cx = attr_f64(&tag, "cx").unwrap_or(0.0);
        let cy = attr_f64(&tag, "cy").unwrap_or(0.0);
        let r = attr_f64(&tag, "r").unwrap_or(0.0);

        if r > 0.0 {
            out.push(Circle::new((cx, cy), r).into_path(SHAPE_TOLERANCE));
        }
    }
}

fn collect_ellipses(content: &str, out: &mut Vec<BezPath>) {
    for tag in element_tags(content, "<ellipse") {
        let cx = attr_f64(&tag, "cx").unwrap_or(0.0);
        let cy = attr_f64(&tag, "cy").unwrap_or(0.0);
        let rx = attr_f64(&tag, "rx").unwrap_or(0.0);
        let ry = attr_f64(&tag, "ry").unwrap_or(0.0);

        if rx > 0.0 && ry > 0.0 {
            out.push(Ellipse::new((cx, cy), (rx, ry), 0.0).into_path(SHAPE_TOLERANCE));
        }
    }
}

fn collect_polylines(content: &str, out: &mut Vec<BezPath>, opener: &str, close: bool) {
    for tag in element_tags(content, opener) {
        let Some(points_str) = attr_str(&tag, "points") else {
            continue;
        };

        let coords: Vec<f64> = points_str
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|s| !s.is_empty())
            .filter_map(|s| s.parse().ok())
            .collect();

        let mut path = BezPath::new();
        for pair in coords.chunks_exact(2) {
            if path.elements().is_empty() {
                path.move_to((pair[0], pair[1]));
            } else {
                path.line_to((pair[0], pair[1]));
            }
        }
        if path.elements().is_empty() {
            continue;
        }
        if close {
            path.close_path();
        }
        out.push(path);
    }
}

/// All opening tags for one element name, e.g. `<circle ... >`.
///
/// The opener must be followed by a tag-name boundary so `<line` does not
/// also pick up `<linearGradient>`.
fn element_tags<'a>(content: &'a str, opener: &str) -> Vec<&'a str> {
    let mut tags = Vec::new();
    let mut search_pos = 0;
    while let Some(start) = content[search_pos..].find(opener) {
        let abs_start = search_pos + start;
        let name_end = abs_start + opener.len();
        if content[name_end..]
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_alphanumeric() || c == '-')
        {
            search_pos = name_end;
            continue;
        }
        match content[abs_start..].find('>') {
            Some(end) => {
                tags.push(&content[abs_start..abs_start + end]);
                search_pos = abs_start + end + 1;
            }
            None => break,
        }
    }
    tags
}

fn attr_str(tag: &str, name: &str) -> Option<String> {
    let re = Regex::new(&format!(r#"\b{name}\s*=\s*["']([^"']*)["']"#)).ok()?;
    re.captures(tag).map(|caps| caps[1].to_string())
}

fn attr_f64(tag: &str, name: &str) -> Option<f64> {
    attr_str(tag, name).and_then(|value| value.trim().parse().ok())
}

/// Transform on the first `<g>` group, if present.
fn parse_group_transform(content: &str) -> Option<Affine> {
    let tag = element_tags(content, "<g").into_iter().next()?;
    let value = attr_str(tag, "transform")?;
    parse_transform(&value)
}

/// Parse a single `matrix(...)`, `translate(...)` or `scale(...)` value.
fn parse_transform(value: &str) -> Option<Affine> {
    let trimmed = value.trim();
    let (kind, rest) = trimmed.split_once('(')?;
    let args: Vec<f64> = rest
        .strip_suffix(')')?
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty())
        .map(str::parse)
        .collect::<Result<_, _>>()
        .ok()?;

    match (kind.trim(), args.as_slice()) {
        ("matrix", [a, b, c, d, e, f]) => Some(Affine::new([*a, *b, *c, *d, *e, *f])),
        ("translate", [tx]) => Some(Affine::translate((*tx, 0.0))),
        ("translate", [tx, ty]) => Some(Affine::translate((*tx, *ty))),
        ("scale", [s]) => Some(Affine::scale(*s)),
        ("scale", [sx, sy]) => Some(Affine::scale_non_uniform(*sx, *sy)),
        _ => None,
    }
}
