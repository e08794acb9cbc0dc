use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::threshold::ThresholdPolicy;

/// Caller-owned settings for one analysis.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    #[serde(default)]
    pub threshold: ThresholdPolicy,
    /// Keep the per-pixel nMDP list in the result.
    #[serde(default)]
    pub keep_samples: bool,
}

impl AnalysisConfig {
    pub fn manual(threshold1: f64, threshold2: f64) -> Self {
        Self {
            threshold: ThresholdPolicy::Manual {
                threshold1,
                threshold2,
            },
            ..Self::default()
        }
    }

    pub fn with_samples(mut self, keep: bool) -> Self {
        self.keep_samples = keep;
        self
    }
}

/// Settings for processing every file pair of two folders.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BatchConfig {
    pub input1: PathBuf,
    pub input2: PathBuf,
    pub output: PathBuf,
    /// Remove files already present in the output folder before starting.
    #[serde(default)]
    pub clear_output: bool,
    #[serde(default = "default_batch_analysis")]
    pub analysis: AnalysisConfig,
}

/// Batch runs always persist the nMDP list next to the colormap.
fn default_batch_analysis() -> AnalysisConfig {
    AnalysisConfig::default().with_samples(true)
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            input1: PathBuf::from("channel1"),
            input2: PathBuf::from("channel2"),
            output: PathBuf::from("output"),
            clear_output: false,
            analysis: default_batch_analysis(),
        }
    }
}
