use std::path::PathBuf;

use coloc_core::pipeline::{AnalysisConfig, BatchConfig};
use coloc_core::threshold::{AutoMethod, ThresholdPolicy};

// ---------------------------------------------------------------------------
// Defaults
// ---------------------------------------------------------------------------

#[test]
fn test_default_policy_is_isodata_auto() {
    let config = AnalysisConfig::default();
    assert_eq!(
        config.threshold,
        ThresholdPolicy::Auto {
            method: AutoMethod::IsoData
        }
    );
    assert!(!config.keep_samples);
}

#[test]
fn test_batch_default_keeps_samples() {
    assert!(BatchConfig::default().analysis.keep_samples);
    assert!(!BatchConfig::default().clear_output);
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

#[test]
fn test_policy_display() {
    assert_eq!(
        AnalysisConfig::manual(10.0, 20.5).threshold.to_string(),
        "Manual (10, 20.5)"
    );
    assert_eq!(ThresholdPolicy::default().to_string(), "Auto (IsoData)");
    assert_eq!(AutoMethod::MeanPlusSigma(2.5).to_string(), "Mean + 2.5 sigma");
}

// ---------------------------------------------------------------------------
// Serialization
// ---------------------------------------------------------------------------

#[test]
fn test_analysis_config_json_roundtrip() {
    let config = AnalysisConfig::manual(12.0, 34.0).with_samples(true);
    let json = serde_json::to_string(&config).unwrap();
    let back: AnalysisConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(back, config);
}

#[test]
fn test_analysis_config_from_toml_manual() {
    let src = r#"
keep_samples = true

[threshold.Manual]
threshold1 = 10.0
threshold2 = 20.0
"#;
    let config: AnalysisConfig = toml::from_str(src).unwrap();
    assert_eq!(config, AnalysisConfig::manual(10.0, 20.0).with_samples(true));
}

#[test]
fn test_analysis_config_from_toml_auto_method() {
    let src = r#"
[threshold.Auto]
method = "Otsu"
"#;
    let config: AnalysisConfig = toml::from_str(src).unwrap();
    assert_eq!(
        config.threshold,
        ThresholdPolicy::Auto {
            method: AutoMethod::Otsu
        }
    );
    assert!(!config.keep_samples);
}

#[test]
fn test_empty_toml_gives_defaults() {
    let config: AnalysisConfig = toml::from_str("").unwrap();
    assert_eq!(config, AnalysisConfig::default());
}

#[test]
fn test_batch_config_from_toml() {
    let src = r#"
input1 = "red"
input2 = "green"
output = "maps"
clear_output = true
"#;
    let config: BatchConfig = toml::from_str(src).unwrap();
    assert_eq!(config.input1, PathBuf::from("red"));
    assert_eq!(config.output, PathBuf::from("maps"));
    assert!(config.clear_output);
    assert!(config.analysis.keep_samples);
}

#[test]
fn test_batch_config_toml_roundtrip() {
    let config = BatchConfig::default();
    let text = toml::to_string_pretty(&config).unwrap();
    let back: BatchConfig = toml::from_str(&text).unwrap();
    assert_eq!(back, config);
}
