mod common;

use coloc_core::channel::{Channel, ThresholdPair};
use coloc_core::error::ColocError;
use coloc_core::stats::accumulate;
use ndarray::Array2;

use common::{noise_channel, row_channel, row_stack};

#[test]
fn test_mean_and_max_are_taken_over_roi_only() {
    let a = row_channel("a", &[5, 100, 200]);
    let b = row_channel("b", &[5, 10, 30]);
    let (s1, s2) = accumulate(&a, &b, 50.0, 50.0).unwrap();

    assert_eq!(s1.count, 2);
    assert_eq!(s1.mean, 150.0);
    assert_eq!(s1.max, 200.0);
    // Channel 2 is accumulated over the same locations even though it is below its threshold.
    assert_eq!(s2.count, 2);
    assert_eq!(s2.mean, 20.0);
    assert_eq!(s2.max, 30.0);
}

#[test]
fn test_roi_is_union_of_channels() {
    let a = row_channel("a", &[100, 0, 0]);
    let b = row_channel("b", &[0, 100, 0]);
    let (s1, s2) = accumulate(&a, &b, 50.0, 50.0).unwrap();
    assert_eq!(s1.count, 2);
    assert_eq!(s1.mean, 50.0);
    assert_eq!(s2.mean, 50.0);
}

#[test]
fn test_threshold_equality_is_inside_roi() {
    let a = row_channel("a", &[10, 20]);
    let b = row_channel("b", &[0, 0]);
    let (s1, _) = accumulate(&a, &b, 20.0, 50.0).unwrap();
    assert_eq!(s1.count, 1);
    assert_eq!(s1.max, 20.0);

    let pair = ThresholdPair {
        threshold1: 20.0,
        threshold2: 50.0,
    };
    assert!(pair.in_roi(20, 0));
    assert!(!pair.in_roi(19, 49));
    assert!(pair.in_roi(0, 50));
}

#[test]
fn test_counts_are_equal_for_both_channels() {
    let a = noise_channel("a", 16, 16, 3, 1);
    let b = noise_channel("b", 16, 16, 3, 2);
    let (s1, s2) = accumulate(&a, &b, 128.0, 200.0).unwrap();
    assert_eq!(s1.count, s2.count);
}

#[test]
fn test_accumulates_across_planes() {
    let a = row_stack("a", &[&[0, 200], &[100, 50]]);
    let b = row_stack("b", &[&[0, 200], &[100, 50]]);
    let (s1, _) = accumulate(&a, &b, 0.0, 0.0).unwrap();
    assert_eq!(s1.count, 4);
    assert_eq!(s1.mean, 87.5);
    assert_eq!(s1.max, 200.0);
}

#[test]
fn test_empty_roi() {
    let a = row_channel("a", &[10, 20, 30]);
    let b = row_channel("b", &[10, 20, 30]);
    assert!(matches!(
        accumulate(&a, &b, 300.0, 300.0),
        Err(ColocError::EmptyRoi)
    ));
}

#[test]
fn test_shape_mismatch() {
    let a = row_channel("a", &[10, 20, 30]);
    let b = row_channel("b", &[10, 20]);
    assert!(matches!(
        accumulate(&a, &b, 0.0, 0.0),
        Err(ColocError::ShapeMismatch { .. })
    ));
}

#[test]
fn test_plane_count_mismatch() {
    let a = row_stack("a", &[&[1, 2], &[3, 4]]);
    let b = row_channel("b", &[1, 2]);
    assert!(matches!(
        accumulate(&a, &b, 0.0, 0.0),
        Err(ColocError::ShapeMismatch { .. })
    ));
}

#[test]
fn test_bit_depth_mismatch() {
    let a = row_channel("a", &[10, 20]);
    let b = Channel::from_plane("b", Array2::from_elem((1, 2), 1000u16), 16).unwrap();
    assert!(matches!(
        accumulate(&a, &b, 0.0, 0.0),
        Err(ColocError::BitDepthMismatch { left: 8, right: 16 })
    ));
}

#[test]
fn test_stats_range_and_degeneracy() {
    let a = row_channel("a", &[200, 200]);
    let b = row_channel("b", &[0, 100]);
    let (s1, s2) = accumulate(&a, &b, 50.0, 50.0).unwrap();
    assert!(s1.is_degenerate());
    assert!(!s2.is_degenerate());
    assert_eq!(s2.range(), 50.0);
}
