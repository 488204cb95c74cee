use printtrace_core::{Position, ToolpathParser};

#[test]
fn test_movements_count_matches_edges_plus_one() {
    let source = "G1 X0 Y0 Z0 E1\nG1 X10 Y0 Z0 E1\nG1 X10 Y10 Z0 E1\n";
    let movements = ToolpathParser::new().parse(source).unwrap();
    let mesh = printtrace_core::generate_mesh(&movements);

    assert_eq!(movements.len(), 3);
    assert_eq!(mesh.vertices.len(), movements.len());
    assert_eq!(mesh.edges.len(), movements.len() - 1);
    assert_eq!(mesh.edges, vec![(0, 1), (1, 2)]);
}

#[test]
fn test_unset_axes_inherit_previous_values() {
    let source = "G1 X1 Y2 Z3\nG1 X9\nG1 Z7\n";
    let movements = ToolpathParser::new().parse(source).unwrap();

    assert_eq!(movements[0], Position::new(1.0, 2.0, 3.0));
    assert_eq!(movements[1], Position::new(9.0, 2.0, 3.0));
    assert_eq!(movements[2], Position::new(9.0, 2.0, 7.0));
}

#[test]
fn test_extrusion_only_line_records_movement_in_place() {
    let source = "G1 X5 Y5 Z1\nG1 E0.8\n";
    let movements = ToolpathParser::new().parse(source).unwrap();

    assert_eq!(movements.len(), 2);
    assert_eq!(movements[1], movements[0]);
}

#[test]
fn test_zero_extrusion_without_axes_is_not_recorded() {
    let source = "G1 X5\nG1 E0\nG1 E-1.2\n";
    let movements = ToolpathParser::new().parse(source).unwrap();

    // Retractions (E < 0) and zero extrusion with no axis change are skipped.
    assert_eq!(movements.len(), 1);
}

#[test]
fn test_travel_moves_are_recorded() {
    // An axis word with no extrusion is still part of the trace.
    let movements = ToolpathParser::new().parse("G1 X3 Y4\n").unwrap();
    assert_eq!(movements, vec![Position::new(3.0, 4.0, 0.0)]);
}

#[test]
fn test_unrecognized_lines_are_ignored() {
    let source = "M104 S200\nG28\nG1 X1 E1\nG0 X99\n; comment only\nG92 E0\n";
    let movements = ToolpathParser::new().parse(source).unwrap();

    assert_eq!(movements, vec![Position::new(1.0, 0.0, 0.0)]);
}

#[test]
fn test_ignored_lines_do_not_advance_position() {
    // G0 is not a controlled linear move; its axis words must not leak into
    // the running position.
    let source = "G0 X50 Y50\nG1 Z1\n";
    let movements = ToolpathParser::new().parse(source).unwrap();

    assert_eq!(movements, vec![Position::new(0.0, 0.0, 1.0)]);
}

#[test]
fn test_malformed_axis_word_is_fatal() {
    let mut parser = ToolpathParser::new();
    let err = parser.parse("G1 X1\nG1 Y1..5\n").unwrap_err();

    assert!(err.is_parse_error());
    let message = err.to_string();
    assert!(message.contains("Y1..5"), "unexpected message: {message}");
    assert!(message.contains("line 2"), "unexpected message: {message}");
}

#[test]
fn test_bare_axis_letter_is_malformed() {
    let err = ToolpathParser::new().parse("G1 X\n").unwrap_err();
    assert!(err.is_parse_error());
}

#[test]
fn test_compact_words_without_spaces_are_recorded() {
    let movements = ToolpathParser::new().parse("G1X10Y20E5\n").unwrap();
    assert_eq!(movements, vec![Position::new(10.0, 20.0, 0.0)]);
}

#[test]
fn test_adjacent_words_split_cleanly() {
    // A missing space between two well-formed words is not an error.
    let movements = ToolpathParser::new().parse("G1 X10Y20 E1\n").unwrap();
    assert_eq!(movements, vec![Position::new(10.0, 20.0, 0.0)]);
}

#[test]
fn test_non_numeric_values_are_malformed() {
    for line in ["G1 Xnan E1\n", "G1 Y- E1\n", "G1 Z. E1\n"] {
        let err = ToolpathParser::new().parse(line).unwrap_err();
        assert!(err.is_parse_error(), "expected parse error for {line:?}");
    }
}

#[test]
fn test_empty_input_yields_empty_trace() {
    let movements = ToolpathParser::new().parse("").unwrap();
    assert!(movements.is_empty());
}

#[test]
fn test_negative_and_fractional_values() {
    let movements = ToolpathParser::new().parse("G1 X-1.5 Y0.25 Z-0.1 E1\n").unwrap();
    assert_eq!(movements, vec![Position::new(-1.5, 0.25, -0.1)]);
}

#[test]
fn test_parse_reader_matches_parse() {
    let source = "G1 X1 E1\nG1 Y2 E1\n";
    let from_str = ToolpathParser::new().parse(source).unwrap();
    let from_reader = ToolpathParser::new()
        .parse_reader(std::io::Cursor::new(source))
        .unwrap();
    assert_eq!(from_str, from_reader);
}

#[test]
fn test_parse_reader_from_file() {
    use std::io::{BufReader, Write};

    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "G28\nG1 X1 Y2 Z3 E1\nG1 X4\n").unwrap();

    let reader = BufReader::new(std::fs::File::open(file.path()).unwrap());
    let movements = ToolpathParser::new().parse_reader(reader).unwrap();
    assert_eq!(
        movements,
        vec![Position::new(1.0, 2.0, 3.0), Position::new(4.0, 2.0, 3.0)]
    );
}
