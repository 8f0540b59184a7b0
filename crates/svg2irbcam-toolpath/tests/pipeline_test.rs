//! End-to-end pipeline tests: SVG text in, path program out.

use svg2irbcam_toolpath::{
    convert_file, convert_paths, parse_svg, ConversionParameters, SvgImportError, ToolpathError,
};

fn params() -> ConversionParameters {
    ConversionParameters::default()
}

#[test]
fn test_two_disjoint_lines_scenario() {
    // two short strokes with a gap far beyond the tolerance; each stroke is
    // shorter than the sampling spacing so it contributes exactly its
    // endpoints
    let svg = r#"<svg>
        <path d="M 0 0 L 5 5"/>
        <path d="M 50 50 L 55 55"/>
    </svg>"#;
    let paths = parse_svg(svg).unwrap();
    let p = params();
    let program = convert_paths(&paths, &p).unwrap();

    // lead + 2 draw + gap lift pair + 2 draw + trail
    assert_eq!(program.len(), 8);

    let expected_z = [100.0, 0.0, 0.0, 100.0, 100.0, 0.0, 0.0, 100.0];
    assert_eq!(program.targets.p_z, expected_z);

    // bounds are 55x55; the width ratio is the tighter fit
    let scale = 190.0 / 55.0;
    let map = |x: f64, y: f64| (scale * x + 10.0, scale * (55.0 - y) + 10.0);

    // leading pose sits at the first path's start, raised
    let (x0, y0) = map(0.0, 0.0);
    assert!((program.targets.p_x[0] - x0).abs() < 1e-9);
    assert!((program.targets.p_y[0] - y0).abs() < 1e-9);

    // gap poses: pen up at path 1's end, pen up at path 2's start
    let (gx1, gy1) = map(5.0, 5.0);
    let (gx2, gy2) = map(50.0, 50.0);
    assert!((program.targets.p_x[3] - gx1).abs() < 1e-9);
    assert!((program.targets.p_y[3] - gy1).abs() < 1e-9);
    assert!((program.targets.p_x[4] - gx2).abs() < 1e-9);
    assert!((program.targets.p_y[4] - gy2).abs() < 1e-9);

    // trailing pose sits at the last path's end, raised
    let (xn, yn) = map(55.0, 55.0);
    assert!((program.targets.p_x[7] - xn).abs() < 1e-9);
    assert!((program.targets.p_y[7] - yn).abs() < 1e-9);

    // fixed machine parameters, applied once at the first target
    assert_eq!(program.velocity.i, vec![0]);
    assert_eq!(program.velocity.value, vec![100.0]);
    assert_eq!(program.tool.value, vec![1]);
    assert_eq!(program.spindle.value, vec![796]);
}

#[test]
fn test_connected_strokes_emit_no_gap_poses() {
    let svg = r#"<svg>
        <path d="M 0 0 L 5 5"/>
        <path d="M 5 5 L 0 9"/>
    </svg>"#;
    let paths = parse_svg(svg).unwrap();
    let program = convert_paths(&paths, &params()).unwrap();

    // lead + 4 draw + trail
    assert_eq!(program.len(), 6);
    assert_eq!(program.targets.p_z, [100.0, 0.0, 0.0, 0.0, 0.0, 100.0]);
}

#[test]
fn test_output_columns_are_aligned() {
    let svg = r#"<svg><circle cx="50" cy="50" r="20"/></svg>"#;
    let paths = parse_svg(svg).unwrap();
    let program = convert_paths(&paths, &params()).unwrap();

    let n = program.len();
    assert!(n > 2);
    assert_eq!(program.targets.p_x.len(), n);
    assert_eq!(program.targets.p_y.len(), n);
    assert_eq!(program.targets.p_z.len(), n);
    assert_eq!(program.targets.r_z.len(), n);
    assert_eq!(program.targets.r_y.len(), n);
    assert_eq!(program.targets.rz2.len(), n);
    assert_eq!(program.targets.move_type.len(), n);

    // endpoints raised, everything in between drawing
    assert_eq!(program.targets.p_z[0], 100.0);
    assert_eq!(program.targets.p_z[n - 1], 100.0);
    assert!(program.targets.p_z[1..n - 1].iter().all(|&z| z == 0.0));

    // every pose inside the printable area
    for i in 0..n {
        assert!(program.targets.p_x[i] >= 10.0 - 1e-6);
        assert!(program.targets.p_x[i] <= 200.0 + 1e-6);
        assert!(program.targets.p_y[i] >= 10.0 - 1e-6);
        assert!(program.targets.p_y[i] <= 287.0 + 1e-6);
    }
}

#[test]
fn test_degenerate_drawing_is_fatal() {
    // a single horizontal line has zero height
    let svg = r#"<svg><path d="M 0 0 L 100 0"/></svg>"#;
    let paths = parse_svg(svg).unwrap();
    let err = convert_paths(&paths, &params()).unwrap_err();
    assert!(matches!(err, ToolpathError::DegenerateBounds { .. }));
}

#[test]
fn test_empty_svg_is_fatal() {
    let paths = parse_svg("<svg></svg>").unwrap();
    let err = convert_paths(&paths, &params()).unwrap_err();
    assert!(matches!(err, ToolpathError::EmptyDrawing));
}

#[test]
fn test_file_conversion_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let svg_path = dir.path().join("drawing.svg");
    let json_path = dir.path().join("drawing.json");
    std::fs::write(
        &svg_path,
        r#"<svg><path d="M 0 0 L 40 0 L 40 30 L 0 30 Z"/></svg>"#,
    )
    .unwrap();

    let program = convert_file(&svg_path, &json_path, &params()).unwrap();

    let text = std::fs::read_to_string(&json_path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(
        value["targets"]["pX"].as_array().unwrap().len(),
        program.len()
    );
    assert_eq!(value["velocity"]["i"][0], 0);
    assert_eq!(value["tool"]["value"][0], 1);
    assert_eq!(value["spindle"]["value"][0], 796);
}

#[test]
fn test_failed_conversion_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let svg_path = dir.path().join("flat.svg");
    let json_path = dir.path().join("flat.json");
    std::fs::write(&svg_path, r#"<svg><path d="M 0 0 L 100 0"/></svg>"#).unwrap();

    assert!(convert_file(&svg_path, &json_path, &params()).is_err());
    assert!(!json_path.exists());
}

#[test]
fn test_missing_input_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = convert_file(
        dir.path().join("absent.svg"),
        dir.path().join("out.json"),
        &params(),
    )
    .unwrap_err();
    assert!(matches!(
        err,
        ToolpathError::Import(SvgImportError::IoError(_))
    ));
}
