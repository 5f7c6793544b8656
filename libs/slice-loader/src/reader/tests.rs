//! Tests for the slice file parser.

use super::*;
use slice_stitch::StitchError;

const PRISM: &str = "\
2
3
0 0 0
1 0 0
0 1 0
3
0 0 1
1 0 1
0 1 1
";

// =============================================================================
// WELL-FORMED INPUT
// =============================================================================

#[test]
fn reverses_to_top_first() {
    let slices = load_slices(PRISM).unwrap();
    assert_eq!(slices.len(), 2);
    assert_eq!(slices[0].position(0), Vec3::new(0.0, 0.0, 1.0));
    assert_eq!(slices[1].position(0), Vec3::ZERO);
    assert_eq!(slices[0].id(), 0);
    assert_eq!(slices[1].id(), 1);
}

#[test]
fn file_order_keeps_disk_order() {
    let slices = load_slices_with(PRISM, LoadOptions::file_order()).unwrap();
    assert_eq!(slices[0].position(0), Vec3::ZERO);
    assert_eq!(slices[1].position(2), Vec3::new(0.0, 1.0, 1.0));
    assert_eq!(slices[0].id(), 0);
}

#[test]
fn vertices_keep_file_order_within_a_slice() {
    let slices = load_slices(PRISM).unwrap();
    let xs: Vec<f64> = slices[1].vertices().iter().map(|v| v.position.x).collect();
    assert_eq!(xs, vec![0.0, 1.0, 0.0]);
    assert_eq!(slices[1].vertices()[1].index, 1);
}

#[test]
fn tolerates_surrounding_whitespace_and_crlf() {
    let text = "  1 \r\n 3\r\n\t0.5   -1e-3  2\r\n1 1 1 \r\n-2 0 0\r\n";
    let slices = load_slices(text).unwrap();
    assert_eq!(slices[0].len(), 3);
    assert_eq!(slices[0].position(0), Vec3::new(0.5, -1e-3, 2.0));
}

#[test]
fn ignores_content_after_last_slice() {
    let text = format!("{PRISM}trailing words\n\n");
    assert_eq!(load_slices(&text).unwrap().len(), 2);
}

#[test]
fn zero_slices_is_empty_stack() {
    assert!(load_slices("0\n").unwrap().is_empty());
}

#[test]
fn reader_and_text_agree() {
    let from_reader = load_slices_from_reader(PRISM.as_bytes(), LoadOptions::default()).unwrap();
    assert_eq!(from_reader, load_slices(PRISM).unwrap());
}

// =============================================================================
// MALFORMED INPUT
// =============================================================================

#[test]
fn empty_input_has_no_header() {
    assert!(matches!(load_slices(""), Err(LoadError::MissingHeader)));
}

#[test]
fn non_integer_header() {
    match load_slices("two\n") {
        Err(LoadError::InvalidCount { line: 1, text }) => assert_eq!(text, "two"),
        other => panic!("unexpected {other:?}"),
    }
    assert!(matches!(
        load_slices("-1\n"),
        Err(LoadError::InvalidCount { line: 1, .. })
    ));
}

#[test]
fn missing_point_count() {
    let text = "2\n3\n0 0 0\n1 0 0\n0 1 0\n";
    assert!(matches!(
        load_slices(text),
        Err(LoadError::MissingPointCount { line: 6, slice: 2 })
    ));
}

#[test]
fn blank_line_is_not_skipped() {
    let text = "1\n\n3\n0 0 0\n1 0 0\n0 1 0\n";
    match load_slices(text) {
        Err(LoadError::InvalidCount { line: 2, text }) => assert!(text.is_empty()),
        other => panic!("unexpected {other:?}"),
    }

    let text = "1\n3\n0 0 0\n\n1 0 0\n0 1 0\n";
    assert!(matches!(
        load_slices(text),
        Err(LoadError::WrongArity { line: 4, found: 0 })
    ));
}

#[test]
fn declared_points_exceed_lines() {
    let text = "1\n4\n0 0 0\n1 0 0\n";
    assert!(matches!(
        load_slices(text),
        Err(LoadError::TruncatedSlice {
            slice: 1,
            line: 2,
            declared: 4,
            available: 2
        })
    ));
}

#[test]
fn point_line_with_wrong_token_count() {
    let text = "1\n3\n0 0 0\n1 0\n0 1 0\n";
    assert!(matches!(
        load_slices(text),
        Err(LoadError::WrongArity { line: 4, found: 2 })
    ));

    let text = "1\n3\n0 0 0 1\n1 0 0\n0 1 0\n";
    assert!(matches!(
        load_slices(text),
        Err(LoadError::WrongArity { line: 3, found: 4 })
    ));
}

#[test]
fn non_numeric_and_non_finite_coordinates() {
    let text = "1\n3\n0 0 0\n1 x 0\n0 1 0\n";
    match load_slices(text) {
        Err(LoadError::InvalidCoordinate { line: 4, text }) => assert_eq!(text, "x"),
        other => panic!("unexpected {other:?}"),
    }

    for bad in ["nan", "inf", "-inf"] {
        let text = format!("1\n3\n0 0 0\n1 0 {bad}\n0 1 0\n");
        assert!(matches!(
            load_slices(&text),
            Err(LoadError::InvalidCoordinate { line: 4, .. })
        ));
    }
}

#[test]
fn slice_with_too_few_points() {
    let text = "2\n3\n0 0 0\n1 0 0\n0 1 0\n2\n0 0 1\n1 0 1\n";
    assert!(matches!(
        load_slices(text),
        Err(LoadError::TooFewPoints {
            slice: 2,
            line: 6,
            count: 2,
            min: 3
        })
    ));
}

#[test]
fn slice_count_above_limit() {
    let text = format!("{}\n", MAX_SLICES + 1);
    assert!(matches!(
        load_slices(&text),
        Err(LoadError::TooManySlices { .. })
    ));
}

#[test]
fn point_count_above_limit() {
    let text = format!("1\n{}\n", MAX_SLICE_VERTICES + 1);
    assert!(matches!(
        load_slices(&text),
        Err(LoadError::TooManyPoints { slice: 1, line: 2, .. })
    ));
}

#[test]
fn missing_file_is_io_error() {
    let err = load_slices_from_path("/nonexistent/slices.txt", LoadOptions::default()).unwrap_err();
    assert!(matches!(err, LoadError::Io(_)));
}

#[test]
fn stitch_errors_convert() {
    let err = LoadError::from(StitchError::TooFewVertices {
        slice: 0,
        count: 0,
        min: 3,
    });
    assert!(matches!(err, LoadError::Slice(StitchError::TooFewVertices { .. })));
}
