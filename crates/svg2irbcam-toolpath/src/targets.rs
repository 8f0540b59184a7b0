//! Pose sequencing and the IRBCAM path program document.
//!
//! The pipeline works on structured [`Pose`] records; the parallel-array
//! document shape exists only here, at the serialization boundary.

use serde::Serialize;
use svg2irbcam_core::Pose;

use crate::drawing::Drawing;
use crate::error::{ToolpathError, ToolpathResult};
use crate::normalize::SheetTransform;
use crate::params::ConversionParameters;

/// Build the ordered pose sequence for the drawing.
///
/// The sequence is bracketed by safe poses: it opens with the drawing's
/// first point forced to lift height and closes with the last point forced
/// to lift height, so the tool approaches and leaves the sheet raised no
/// matter what heights the points themselves carry. Every point in between
/// keeps its own height.
pub fn sequence_poses(
    drawing: &Drawing,
    transform: &SheetTransform,
    params: &ConversionParameters,
) -> ToolpathResult<Vec<Pose>> {
    let first = drawing
        .strokes
        .first()
        .and_then(|stroke| stroke.first())
        .ok_or(ToolpathError::EmptyDrawing)?;
    let last = drawing
        .strokes
        .last()
        .and_then(|stroke| stroke.last())
        .ok_or(ToolpathError::EmptyDrawing)?;

    let mut poses = Vec::with_capacity(drawing.point_count() + 2);
    poses.push(pose_at(transform, params, first.x, first.y, params.lift_height));
    for stroke in &drawing.strokes {
        for point in stroke {
            poses.push(pose_at(transform, params, point.x, point.y, point.z));
        }
    }
    poses.push(pose_at(transform, params, last.x, last.y, params.lift_height));

    Ok(poses)
}

fn pose_at(
    transform: &SheetTransform,
    params: &ConversionParameters,
    x: f64,
    y: f64,
    z: f64,
) -> Pose {
    let (sheet_x, sheet_y) = transform.map(x, y);
    Pose {
        x: sheet_x,
        y: sheet_y,
        z,
        rz: params.rz,
        ry: params.ry,
        rz2: params.rz2,
        move_type: 0,
    }
}

/// Column-oriented pose table, serialized with the IRBCAM field names.
///
/// All seven arrays have identical length; row `i` across them describes
/// one pose.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TargetTable {
    /// X positions (mm)
    #[serde(rename = "pX")]
    pub p_x: Vec<f64>,
    /// Y positions (mm)
    #[serde(rename = "pY")]
    pub p_y: Vec<f64>,
    /// Tool heights (mm)
    #[serde(rename = "pZ")]
    pub p_z: Vec<f64>,
    /// Rotations about Z (radians)
    #[serde(rename = "rZ")]
    pub r_z: Vec<f64>,
    /// Tool pitches (radians)
    #[serde(rename = "rY")]
    pub r_y: Vec<f64>,
    /// Secondary rotations about Z (radians)
    pub rz2: Vec<f64>,
    /// Move type tags
    #[serde(rename = "type")]
    pub move_type: Vec<i32>,
}

/// A sparse machine parameter track.
///
/// `value[k]` takes effect at target index `i[k]` and holds until the next
/// entry. This converter always emits a single entry at index 0.
#[derive(Debug, Clone, Serialize)]
pub struct ParameterTrack<T> {
    /// Target indices at which the value changes
    pub i: Vec<usize>,
    /// The values taking effect at those indices
    pub value: Vec<T>,
}

impl<T> ParameterTrack<T> {
    /// A track with a single value applied at the first target.
    pub fn constant(value: T) -> Self {
        Self {
            i: vec![0],
            value: vec![value],
        }
    }
}

/// The complete path program: the pose table plus the machine parameter
/// tracks.
#[derive(Debug, Clone, Serialize)]
pub struct PathProgram {
    /// Index-aligned pose columns
    pub targets: TargetTable,
    /// Velocity track
    pub velocity: ParameterTrack<f64>,
    /// Tool selection track
    pub tool: ParameterTrack<u32>,
    /// Spindle speed track
    pub spindle: ParameterTrack<u32>,
}

impl PathProgram {
    /// Assemble the document from the pose sequence and machine parameters.
    pub fn from_poses(poses: &[Pose], params: &ConversionParameters) -> Self {
        let mut targets = TargetTable::default();
        for pose in poses {
            targets.p_x.push(pose.x);
            targets.p_y.push(pose.y);
            targets.p_z.push(pose.z);
            targets.r_z.push(pose.rz);
            targets.r_y.push(pose.ry);
            targets.rz2.push(pose.rz2);
            targets.move_type.push(pose.move_type);
        }

        Self {
            targets,
            velocity: ParameterTrack::constant(params.velocity),
            tool: ParameterTrack::constant(params.tool),
            spindle: ParameterTrack::constant(params.spindle),
        }
    }

    /// Number of targets in the program.
    pub fn len(&self) -> usize {
        self.targets.p_x.len()
    }

    /// True when the program holds no targets.
    pub fn is_empty(&self) -> bool {
        self.targets.p_x.is_empty()
    }

    /// Serialize the document as indented JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut buf = Vec::new();
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut ser)?;
        Ok(String::from_utf8(buf).expect("serde_json emits valid UTF-8"))
    }
}
