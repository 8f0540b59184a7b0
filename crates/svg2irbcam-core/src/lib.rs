//! # svg2irbcam Core
//!
//! Core data model for the SVG to IRBCAM toolpath converter:
//! - Tool-space points where the Z coordinate carries the pen state
//! - Output pose records (position + fixed orientation + move type)
//! - Drawing bounding boxes
//! - Physical sheet geometry (dimensions, margin, printable area)

pub mod geometry;
pub mod sheet;

pub use geometry::{Bounds, Pose, ToolPoint};
pub use sheet::{Sheet, A4_HEIGHT, A4_WIDTH};
