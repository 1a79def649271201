mod common;

use histeq_core::error::EqualizeError;
use histeq_core::frame::GrayFrame;
use histeq_core::histogram::{analyze, CumulativeTable, FrequencyTable};
use ndarray::Array2;

use common::{banded_frame, ramp_frame, small_frame, uniform_frame};

// ---------------------------------------------------------------------------
// analyze
// ---------------------------------------------------------------------------

#[test]
fn test_analyze_small_frame() {
    let table = analyze(&small_frame()).unwrap();
    assert_eq!(table.values(), &[10, 20, 30]);
    assert_eq!(table.counts(), &[2, 1, 1]);
    assert_eq!(table.levels(), 3);
    assert_eq!(table.total(), 4);
}

#[test]
fn test_analyze_sorted_and_unique() {
    let frame = GrayFrame::new(ndarray::array![[200u8, 3, 77], [3, 200, 0], [77, 77, 255]]);
    let table = analyze(&frame).unwrap();
    assert_eq!(table.values(), &[0, 3, 77, 200, 255]);
    assert!(table.values().windows(2).all(|w| w[0] < w[1]));
    assert_eq!(table.count_of(77), Some(3));
    assert_eq!(table.count_of(4), None);
}

#[test]
fn test_counts_sum_to_pixel_count() {
    for (h, w) in [(1, 1), (3, 5), (17, 31), (64, 64)] {
        let frame = ramp_frame(h, w);
        let table = analyze(&frame).unwrap();
        assert_eq!(table.total(), h * w, "{h}x{w}");
        assert!(table.counts().iter().all(|&c| c > 0));
    }
}

#[test]
fn test_single_intensity_frame() {
    let table = analyze(&uniform_frame(6, 9, 42)).unwrap();
    assert_eq!(table.levels(), 1);
    assert_eq!(table.values(), &[42]);
    assert_eq!(table.counts(), &[54]);
}

#[test]
fn test_empty_frame_rejected() {
    let frame = GrayFrame::new(Array2::<u8>::zeros((0, 4)));
    assert!(matches!(analyze(&frame), Err(EqualizeError::EmptyBuffer)));
}

#[test]
fn test_large_frame_counts() {
    // 512x512 uses the parallel reduction; each of the 256 levels appears
    // exactly 1024 times.
    let table = analyze(&ramp_frame(512, 512)).unwrap();
    assert_eq!(table.levels(), 256);
    assert!(table.counts().iter().all(|&c| c == 1024));
    assert_eq!(table.total(), 512 * 512);
}

#[test]
fn test_non_contiguous_view_counts() {
    // Transposed data is not in standard layout but is still counted fully.
    let frame = GrayFrame::new(banded_frame(300, 300, 7).data.reversed_axes());
    let table = analyze(&frame).unwrap();
    assert_eq!(table.total(), 90_000);
    assert_eq!(table.levels(), 7);
}

#[test]
fn test_min_max() {
    let table = analyze(&banded_frame(4, 4, 5)).unwrap();
    assert_eq!(table.min_value(), Some(100));
    assert_eq!(table.max_value(), Some(104));
}

#[test]
fn test_normalized_sums_to_one() {
    let table = analyze(&small_frame()).unwrap();
    let normalized = table.normalized();
    assert_eq!(normalized.len(), 3);
    approx::assert_relative_eq!(normalized[0].1, 0.5);
    let sum: f64 = normalized.iter().map(|(_, p)| p).sum();
    approx::assert_relative_eq!(sum, 1.0, epsilon = 1e-12);
}

// ---------------------------------------------------------------------------
// FrequencyTable::from_pairs
// ---------------------------------------------------------------------------

#[test]
fn test_from_pairs_matches_analyze() {
    let built = FrequencyTable::from_pairs(&[(10, 2), (20, 1), (30, 1)]).unwrap();
    assert_eq!(built, analyze(&small_frame()).unwrap());
}

#[test]
fn test_from_pairs_rejects_unsorted() {
    let err = FrequencyTable::from_pairs(&[(20, 1), (10, 2)]).unwrap_err();
    assert!(matches!(err, EqualizeError::InvalidShape(_)));
}

#[test]
fn test_from_pairs_rejects_duplicates_and_zero_counts() {
    assert!(FrequencyTable::from_pairs(&[(10, 1), (10, 1)]).is_err());
    assert!(FrequencyTable::from_pairs(&[(10, 0)]).is_err());
    assert!(matches!(
        FrequencyTable::from_pairs(&[]),
        Err(EqualizeError::EmptyBuffer)
    ));
}

// ---------------------------------------------------------------------------
// CumulativeTable
// ---------------------------------------------------------------------------

#[test]
fn test_cumulative_small_frame() {
    let cum = analyze(&small_frame()).unwrap().cumulative();
    assert_eq!(cum.values(), &[10, 20, 30]);
    assert_eq!(cum.cumulative(), &[2, 3, 4]);
    assert_eq!(cum.total(), 4);
}

#[test]
fn test_cumulative_monotonic_and_ends_at_total() {
    for frame in [ramp_frame(13, 29), banded_frame(40, 11, 9), uniform_frame(3, 3, 0)] {
        let table = analyze(&frame).unwrap();
        let cum = table.cumulative();
        assert!(cum.is_monotonic());
        assert!(cum.cumulative().windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(cum.total(), frame.pixel_count());
        assert_eq!(cum.levels(), table.levels());
    }
}

#[test]
fn test_cumulative_normalized_ends_at_one() {
    let cum = analyze(&banded_frame(8, 8, 4)).unwrap().cumulative();
    let cdf = cum.normalized();
    approx::assert_relative_eq!(cdf[0].1, 0.25);
    approx::assert_relative_eq!(cdf.last().unwrap().1, 1.0);
}

#[test]
fn test_reference_line_spans_min_to_max() {
    let cum = analyze(&small_frame()).unwrap().cumulative();
    let [start, end] = cum.reference_line().unwrap();
    assert_eq!(start, (10.0, 0.0));
    assert_eq!(end, (30.0, 1.0));
}

#[test]
fn test_cumulative_from_pairs_validates() {
    let cum = CumulativeTable::from_pairs(&[(10, 2), (20, 3), (30, 4)]).unwrap();
    assert_eq!(cum, analyze(&small_frame()).unwrap().cumulative());

    let err = CumulativeTable::from_pairs(&[(10, 3), (20, 2)]).unwrap_err();
    assert!(matches!(err, EqualizeError::InvalidShape(_)));
    assert!(CumulativeTable::from_pairs(&[(20, 1), (10, 2)]).is_err());
}

#[test]
fn test_tables_serialize_for_plotting() {
    let table = analyze(&small_frame()).unwrap();
    let json = serde_json::to_value(&table).unwrap();
    assert_eq!(json["values"], serde_json::json!([10, 20, 30]));
    assert_eq!(json["counts"], serde_json::json!([2, 1, 1]));

    let cum = serde_json::to_value(table.cumulative()).unwrap();
    assert_eq!(cum["cumulative"], serde_json::json!([2, 3, 4]));
}
