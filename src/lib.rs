//! # svg2irbcam
//!
//! Convert SVG drawings into IRBCAM-compatible robot toolpath programs.
//!
//! ## Architecture
//!
//! The project is organized as a workspace:
//!
//! 1. **svg2irbcam-core** - core data model: tool points, poses, bounds,
//!    sheet geometry
//! 2. **svg2irbcam-toolpath** - SVG import and the conversion pipeline
//! 3. **svg2irbcam** - the command-line binary
//!
//! The conversion samples every curve at a fixed arc-length spacing,
//! inserts pen-lift moves wherever the geometry is discontinuous, scales
//! the drawing onto an A4 sheet with margin, and emits the pose table plus
//! the fixed velocity/tool/spindle tracks as indented JSON.

pub use svg2irbcam_core::{Bounds, Pose, Sheet, ToolPoint};
pub use svg2irbcam_toolpath::{
    convert_file, convert_paths, ConversionParameters, ParameterTrack, PathProgram,
    SheetTransform, ToolpathError,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output on stderr, keeping stdout for the program's own output
/// - RUST_LOG environment variable support
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();

    Ok(())
}
