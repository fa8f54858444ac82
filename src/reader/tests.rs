use super::*;

const CHI_STYLE: &str = "\
Cyclic Voltammetry
Init E (V): -0.2
High E (V): 0.6
Low E (V): -0.2

Potential/V, Current/A
-0.2, -1.2e-6
0.0, 0.8e-6
0.2, 2.4e-6
0.4, 1.1e-6
0.6, 0.9e-6
";

fn lines_of(text: &str) -> Vec<&str> {
    text.lines().collect()
}

#[test]
fn locates_header_row() {
    let lines = lines_of(CHI_STYLE);
    assert_eq!(find_header_row(&lines), Some(5));
}

#[test]
fn header_requires_both_markers() {
    let lines = lines_of("Potential sweep setup\nCurrent range: 1e-3\nPotential/V, Current/A\n");
    assert_eq!(find_header_row(&lines), Some(2));
}

#[test]
fn no_header_row_is_none() {
    let lines = lines_of("Voltage/V, Amps/A\n0.1, 0.2\n");
    assert_eq!(find_header_row(&lines), None);
}

#[test]
fn marker_match_is_case_sensitive() {
    let lines = lines_of("potential/V, current/A\n0.1, 0.2\n");
    assert_eq!(find_header_row(&lines), None);
}

#[test]
fn reads_table_and_trims_column_names() {
    let block = "Potential/V ,  Current/A\n0.1, 1.0\n0.2, 2.0\n0.3, 3.0\n0.4, 4.0\n0.5, 5.0\n";
    let series = read_table(block, 5).unwrap();

    assert_eq!(series.len(), 5);
    assert_eq!(series.samples()[0].potential, 0.1);
    assert_eq!(series.samples()[4].current, 5.0);
}

#[test]
fn drops_rows_with_missing_or_non_finite_values() {
    let block = "Potential/V, Current/A\n\
                 0.1, 1.0\n\
                 bad, 2.0\n\
                 0.3, NaN\n\
                 0.4, inf\n\
                 0.5,\n\
                 0.6, 6.0\n\
                 0.7, 7.0\n\
                 0.8, 8.0\n\
                 0.9, 9.0\n";
    let series = read_table(block, 5).unwrap();

    assert_eq!(series.len(), 5);
    let potentials: Vec<f64> = series.potentials().collect();
    assert_eq!(potentials, vec![0.1, 0.6, 0.7, 0.8, 0.9]);
}

#[test]
fn unrecognized_columns_are_fatal() {
    let block = "Potential/V, Amps\n0.1, 1.0\n";
    let err = read_table(block, 5).unwrap_err();
    match err {
        ParseError::ColumnNotRecognized { marker } => assert_eq!(marker, "Current"),
        other => panic!("expected ColumnNotRecognized, got {other:?}"),
    }
}

#[test]
fn too_few_valid_rows_is_insufficient_data() {
    let block = "Potential/V, Current/A\n0.1, 1.0\n0.2, 2.0\n0.3, 3.0\n";
    let err = read_table(block, 5).unwrap_err();
    match err {
        ParseError::InsufficientData { found, required } => {
            assert_eq!(found, 3);
            assert_eq!(required, 5);
        }
        other => panic!("expected InsufficientData, got {other:?}"),
    }
}

#[test]
fn ragged_rows_are_tolerated() {
    let block = "Potential/V, Current/A, Extra\n\
                 0.1, 1.0\n\
                 0.2, 2.0, 99, 99\n\
                 0.3, 3.0, 1\n\
                 0.4, 4.0\n\
                 0.5, 5.0\n";
    let series = read_table(block, 5).unwrap();
    assert_eq!(series.len(), 5);
}
