mod common;

use std::sync::Mutex;

use coloc_core::correlation::aggregate;
use coloc_core::error::ColocError;
use coloc_core::pipeline::{
    analyze, analyze_reported, AnalysisConfig, AnalysisStage, ProgressReporter,
};
use coloc_core::threshold::{AutoMethod, ThresholdPolicy};

use common::{flat_channel, noise_channel, row_channel};

// ---------------------------------------------------------------------------
// aggregate
// ---------------------------------------------------------------------------

#[test]
fn test_aggregate_fraction() {
    assert_eq!(aggregate(4, 5).unwrap(), 0.8);
    assert_eq!(aggregate(0, 5).unwrap(), 0.0);
    assert_eq!(aggregate(5, 5).unwrap(), 1.0);
}

#[test]
fn test_aggregate_empty() {
    assert!(matches!(aggregate(0, 0), Err(ColocError::EmptyRoi)));
}

// ---------------------------------------------------------------------------
// Scenarios
// ---------------------------------------------------------------------------

#[test]
fn test_constant_channels_are_degenerate() {
    let a = flat_channel("a", 4, 4, 1, 200);
    let b = flat_channel("b", 4, 4, 1, 100);
    let err = analyze(&a, &b, &AnalysisConfig::manual(50.0, 50.0)).unwrap_err();
    assert!(matches!(
        err,
        ColocError::DegenerateStatistics { channel: 1, value } if value == 200.0
    ));
}

#[test]
fn test_identical_intensity_everywhere_is_degenerate() {
    let a = flat_channel("a", 3, 3, 4, 77);
    let b = flat_channel("b", 3, 3, 4, 77);
    let err = analyze(&a, &b, &AnalysisConfig::manual(0.0, 0.0)).unwrap_err();
    assert!(matches!(err, ColocError::DegenerateStatistics { .. }));
}

#[test]
fn test_symmetric_deviation_scenario() {
    let a = row_channel("a", &[0, 50, 100, 150, 200]);
    let b = row_channel("b", &[0, 50, 100, 150, 200]);
    let config = AnalysisConfig::manual(0.0, 0.0).with_samples(true);
    let result = analyze(&a, &b, &config).unwrap();

    assert_eq!(result.stats1.mean, 100.0);
    assert_eq!(result.stats1.max, 200.0);
    assert_eq!(result.total, 5);
    assert_eq!(result.icorr, 0.8);
    assert_eq!(result.samples.unwrap()[0], 1.0);
}

#[test]
fn test_threshold_above_every_pixel_is_empty_roi() {
    let a = row_channel("a", &[10, 20, 30]);
    let b = row_channel("b", &[40, 50, 60]);
    let err = analyze(&a, &b, &AnalysisConfig::manual(100.0, 100.0)).unwrap_err();
    assert!(matches!(err, ColocError::EmptyRoi));
}

#[test]
fn test_invalid_manual_threshold() {
    let a = row_channel("a", &[10, 20, 30]);
    let b = row_channel("b", &[40, 50, 60]);
    let err = analyze(&a, &b, &AnalysisConfig::manual(f64::NAN, 1.0)).unwrap_err();
    assert!(matches!(err, ColocError::InvalidParameter(_)));
}

#[test]
fn test_shape_mismatch_aborts_before_thresholds() {
    let a = row_channel("a", &[10, 20, 30]);
    let b = row_channel("b", &[40, 50]);
    let err = analyze(&a, &b, &AnalysisConfig::manual(f64::NAN, 1.0)).unwrap_err();
    assert!(matches!(err, ColocError::ShapeMismatch { .. }));
}

// ---------------------------------------------------------------------------
// Icorr properties
// ---------------------------------------------------------------------------

#[test]
fn test_icorr_one_when_all_positive() {
    let a = row_channel("a", &[0, 200]);
    let b = row_channel("b", &[0, 200]);
    let result = analyze(&a, &b, &AnalysisConfig::manual(0.0, 0.0)).unwrap();
    assert_eq!(result.icorr, 1.0);
}

#[test]
fn test_icorr_zero_when_none_positive() {
    let a = row_channel("a", &[0, 100, 200]);
    let b = row_channel("b", &[200, 100, 0]);
    let result = analyze(&a, &b, &AnalysisConfig::manual(0.0, 0.0)).unwrap();
    assert_eq!(result.icorr, 0.0);
}

#[test]
fn test_icorr_matches_samples() {
    let a = noise_channel("a", 32, 32, 2, 3);
    let b = noise_channel("b", 32, 32, 2, 5);
    let config = AnalysisConfig::manual(90.0, 90.0).with_samples(true);
    let result = analyze(&a, &b, &config).unwrap();
    let samples = result.samples.unwrap();

    assert_eq!(samples.len() as u64, result.total);
    assert_eq!(result.total, result.stats1.count);
    let positive = samples.iter().filter(|&&v| v > 0.0).count() as u64;
    assert_eq!(positive, result.positive);
    assert!((0.0..=1.0).contains(&result.icorr));
}

#[test]
fn test_analysis_is_idempotent() {
    let a = noise_channel("a", 20, 20, 5, 17);
    let b = noise_channel("b", 20, 20, 5, 19);
    let config = AnalysisConfig {
        threshold: ThresholdPolicy::Auto {
            method: AutoMethod::IsoData,
        },
        keep_samples: true,
    };
    let first = analyze(&a, &b, &config).unwrap();
    let second = analyze(&a, &b, &config).unwrap();

    assert_eq!(first.icorr.to_bits(), second.icorr.to_bits());
    assert_eq!(first.thresholds, second.thresholds);
    for (p, q) in first.colormap.planes.iter().zip(&second.colormap.planes) {
        assert_eq!(p.as_raw(), q.as_raw());
    }
    assert_eq!(first.samples, second.samples);
}

// ---------------------------------------------------------------------------
// Progress reporting
// ---------------------------------------------------------------------------

#[derive(Default)]
struct RecordingReporter {
    stages: Mutex<Vec<AnalysisStage>>,
}

impl ProgressReporter for RecordingReporter {
    fn begin_stage(&self, stage: AnalysisStage, _total_items: Option<usize>) {
        self.stages.lock().unwrap().push(stage);
    }
}

#[test]
fn test_reporter_sees_stages_in_order() {
    let a = row_channel("a", &[0, 200]);
    let b = row_channel("b", &[0, 200]);
    let reporter = RecordingReporter::default();
    analyze_reported(&a, &b, &AnalysisConfig::manual(0.0, 0.0), &reporter).unwrap();
    assert_eq!(
        *reporter.stages.lock().unwrap(),
        vec![
            AnalysisStage::Thresholds,
            AnalysisStage::Statistics,
            AnalysisStage::Rendering
        ]
    );
}

#[test]
fn test_auto_nan_sigma_fails_analysis() {
    let a = row_channel("a", &[0, 50, 100, 200]);
    let b = row_channel("b", &[0, 50, 100, 200]);
    let config = AnalysisConfig {
        threshold: ThresholdPolicy::Auto {
            method: AutoMethod::MeanPlusSigma(f32::NAN),
        },
        keep_samples: false,
    };
    assert!(matches!(
        analyze(&a, &b, &config),
        Err(ColocError::InvalidParameter(_))
    ));
}

#[test]
fn test_stage_display() {
    assert_eq!(
        AnalysisStage::Thresholds.to_string(),
        "Calculating thresholds"
    );
    assert_eq!(AnalysisStage::Batch.to_string(), "Processing file pairs");
}
