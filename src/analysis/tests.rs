use super::*;
use crate::metadata::SweepSettings;
use crate::series::{Sample, SampleSeries};

fn series_of(potentials: &[f64]) -> SampleSeries {
    SampleSeries::new(
        potentials
            .iter()
            .map(|&p| Sample {
                potential: p,
                current: 0.0,
            })
            .collect(),
    )
}

fn series_with_currents(potentials: &[f64], currents: &[f64]) -> SampleSeries {
    SampleSeries::new(
        potentials
            .iter()
            .zip(currents)
            .map(|(&potential, &current)| Sample { potential, current })
            .collect(),
    )
}

#[test]
fn triangular_wave_with_three_reversals_gives_four_segments() {
    // up, down, up, down: reversals at the three apexes
    let series = series_of(&[0.0, 0.1, 0.2, 0.1, 0.0, 0.1, 0.2, 0.1, 0.0]);
    let segments = segment_by_direction(&series);

    assert_eq!(segments.len(), 4);
    assert_eq!(assemble(&segments).len(), 2);
}

#[test]
fn monotonic_series_is_one_segment_zero_cycles() {
    let series = series_of(&[0.0, 0.1, 0.2, 0.3, 0.4]);
    let segments = segment_by_direction(&series);

    assert_eq!(segments, vec![Segment { start: 0, end: 5 }]);
    assert!(assemble(&segments).is_empty());
}

#[test]
fn segments_partition_the_series() {
    let series = series_of(&[0.0, 0.1, 0.2, 0.1, 0.0, 0.1]);
    let segments = segment_by_direction(&series);

    assert_eq!(segments[0].start, 0);
    assert_eq!(segments.last().map(|s| s.end), Some(series.len()));
    for pair in segments.windows(2) {
        assert_eq!(pair[0].end, pair[1].start);
    }
    for segment in &segments {
        assert!(segment.end > segment.start);
    }
}

#[test]
fn flat_runs_do_not_create_boundaries() {
    // One genuine reversal; the plateau around the apex is not a boundary.
    let series = series_of(&[0.0, 0.1, 0.2, 0.2, 0.2, 0.1, 0.0]);
    let segments = segment_by_direction(&series);

    assert_eq!(segments.len(), 2);
}

#[test]
fn flat_run_stays_with_the_preceding_segment() {
    let series = series_of(&[0.0, 0.1, 0.1, 0.0]);
    let segments = segment_by_direction(&series);

    // The reversal is detected at the sample the descent moves away from.
    assert_eq!(
        segments,
        vec![Segment { start: 0, end: 2 }, Segment { start: 2, end: 4 }]
    );
}

#[test]
fn constant_series_is_a_single_segment() {
    let series = series_of(&[0.5, 0.5, 0.5, 0.5]);
    let segments = segment_by_direction(&series);

    assert_eq!(segments, vec![Segment { start: 0, end: 4 }]);
}

#[test]
fn single_sample_series_is_a_single_segment() {
    let series = series_of(&[0.5]);
    assert_eq!(
        segment_by_direction(&series),
        vec![Segment { start: 0, end: 1 }]
    );
}

#[test]
fn odd_trailing_segment_is_dropped() {
    let segments = vec![
        Segment { start: 0, end: 4 },
        Segment { start: 4, end: 8 },
        Segment { start: 8, end: 10 },
    ];
    let cycles = assemble(&segments);

    assert_eq!(cycles, vec![Cycle { start: 0, end: 8 }]);
}

#[test]
fn declared_mode_needs_all_four_parameters() {
    let series = series_of(&[0.0, 0.1, 0.2, 0.3, 0.4, 0.5]);
    let sweep = SweepSettings {
        high_potential: Some(0.5),
        low_potential: Some(0.0),
        ..Default::default()
    };

    let err = segment_by_declared(&series, &sweep, 3).unwrap_err();
    let reason = err.to_string();
    assert!(reason.contains("sample interval"));
    assert!(reason.contains("sweep segment count"));
}

#[test]
fn declared_mode_chunks_the_series() {
    let series = series_of(&[0.0, 0.1, 0.2, 0.3, 0.4, 0.5, 0.4, 0.3, 0.2, 0.1, 0.0, 0.1]);
    let sweep = SweepSettings {
        init_potential: Some(0.0),
        high_potential: Some(0.5),
        low_potential: Some(0.0),
        sample_interval: Some(0.1),
        sweep_segments: Some(2),
    };

    // chunk = (0.5 - 0.0) / 0.1 = 5; the final declared chunk absorbs the
    // remainder.
    let segments = segment_by_declared(&series, &sweep, 3).unwrap();
    assert_eq!(
        segments,
        vec![Segment { start: 0, end: 5 }, Segment { start: 5, end: 12 }]
    );
}

#[test]
fn implausible_chunk_is_rejected() {
    let series = series_of(&[0.0, 0.1, 0.2, 0.3, 0.4, 0.5]);
    let sweep = SweepSettings {
        init_potential: Some(0.0),
        high_potential: Some(0.5),
        low_potential: Some(0.0),
        sample_interval: Some(0.25),
        sweep_segments: Some(2),
    };

    match segment_by_declared(&series, &sweep, 3) {
        Err(DeclaredRejection::ImplausibleChunk { chunk, min }) => {
            assert_eq!(chunk, 2);
            assert_eq!(min, 3);
        }
        other => panic!("expected ImplausibleChunk, got {other:?}"),
    }
}

#[test]
fn segment_prefers_declared_and_records_nothing_rejected() {
    let series = series_of(&[0.0, 0.1, 0.2, 0.3, 0.4, 0.5, 0.4, 0.3, 0.2, 0.1]);
    let sweep = SweepSettings {
        init_potential: Some(0.0),
        high_potential: Some(0.5),
        low_potential: Some(0.0),
        sample_interval: Some(0.1),
        sweep_segments: Some(2),
    };

    let (segments, outcome) = segment(&series, &sweep, 3);
    assert_eq!(outcome.mode, SegmentationMode::DeclaredParameters);
    assert!(outcome.rejected.is_empty());
    assert_eq!(segments.len(), 2);
}

#[test]
fn segment_falls_back_and_retains_the_reason() {
    let series = series_of(&[0.0, 0.1, 0.2, 0.1, 0.0]);
    let sweep = SweepSettings::default();

    let (segments, outcome) = segment(&series, &sweep, 3);
    assert_eq!(outcome.mode, SegmentationMode::SignalDirection);
    assert_eq!(outcome.rejected.len(), 1);
    assert!(outcome.rejected[0].contains("missing"));
    assert_eq!(segments.len(), 2);
}

#[test]
fn peaks_report_extrema_with_first_occurrence_ties() {
    let series = series_with_currents(
        &[0.0, 0.1, 0.2, 0.3, 0.4],
        &[1.0, 5.0, -3.0, 5.0, -3.0],
    );
    let cycle = Cycle { start: 0, end: 5 };
    let peaks = extract(&cycle, &series).unwrap();

    assert_eq!(peaks.oxidation.index, 1);
    assert_eq!(peaks.oxidation.current, 5.0);
    assert_eq!(peaks.oxidation.potential, 0.1);
    assert_eq!(peaks.reduction.index, 2);
    assert_eq!(peaks.reduction.current, -3.0);
    assert_eq!(peaks.reduction.potential, 0.2);
}

#[test]
fn peaks_respect_cycle_bounds() {
    let series = series_with_currents(
        &[0.0, 0.1, 0.2, 0.3, 0.4, 0.5],
        &[9.0, 1.0, 2.0, 3.0, 1.0, -9.0],
    );
    let cycle = Cycle { start: 1, end: 5 };
    let peaks = extract(&cycle, &series).unwrap();

    // The extremes at indices 0 and 5 are outside the cycle.
    assert_eq!(peaks.oxidation.index, 3);
    assert_eq!(peaks.oxidation.current, 3.0);
    assert_eq!(peaks.reduction.index, 1);
    assert_eq!(peaks.reduction.current, 1.0);
}

#[test]
fn empty_cycle_range_yields_none() {
    let series = series_of(&[0.0, 0.1]);
    assert!(extract(&Cycle { start: 1, end: 1 }, &series).is_none());
    assert!(extract(&Cycle { start: 0, end: 9 }, &series).is_none());
}
