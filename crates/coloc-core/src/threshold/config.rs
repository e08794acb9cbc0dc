use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ColocError, Result};

/// Histogram-based method used to pick a per-plane threshold.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub enum AutoMethod {
    /// Iterative intermeans (ImageJ "Default" on a dark background).
    #[default]
    IsoData,
    /// Otsu's method: maximizes between-class variance.
    Otsu,
    /// Threshold = mean + multiplier * stddev of the plane.
    MeanPlusSigma(f32),
}

impl AutoMethod {
    /// Reject a sigma multiplier that cannot produce a finite threshold.
    pub fn validate(&self) -> Result<()> {
        match self {
            Self::MeanPlusSigma(k) if !k.is_finite() => Err(ColocError::InvalidParameter(
                format!("sigma multiplier is not a finite number: {k}"),
            )),
            _ => Ok(()),
        }
    }
}

impl fmt::Display for AutoMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IsoData => write!(f, "IsoData"),
            Self::Otsu => write!(f, "Otsu"),
            Self::MeanPlusSigma(k) => write!(f, "Mean + {k} sigma"),
        }
    }
}

/// Whether a channel threshold comes from the user or from the image.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ThresholdMode {
    Manual,
    Auto,
}

/// Threshold policy applied to both channels of an analysis.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum ThresholdPolicy {
    /// User-supplied constants, one per channel.
    Manual { threshold1: f64, threshold2: f64 },
    /// Maximum per-plane auto-threshold of each channel.
    Auto {
        #[serde(default)]
        method: AutoMethod,
    },
}

impl ThresholdPolicy {
    pub fn mode(&self) -> ThresholdMode {
        match self {
            Self::Manual { .. } => ThresholdMode::Manual,
            Self::Auto { .. } => ThresholdMode::Auto,
        }
    }

    /// Check the parameters a policy carries before any image is touched.
    pub fn validate(&self) -> Result<()> {
        match self {
            Self::Manual {
                threshold1,
                threshold2,
            } => {
                for (channel, value) in [(1, threshold1), (2, threshold2)] {
                    if !value.is_finite() {
                        return Err(ColocError::InvalidParameter(format!(
                            "threshold for channel {channel} is not a finite number: {value}"
                        )));
                    }
                }
                Ok(())
            }
            Self::Auto { method } => method.validate(),
        }
    }
}

impl Default for ThresholdPolicy {
    fn default() -> Self {
        Self::Auto {
            method: AutoMethod::default(),
        }
    }
}

impl fmt::Display for ThresholdPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Manual {
                threshold1,
                threshold2,
            } => write!(f, "Manual ({threshold1}, {threshold2})"),
            Self::Auto { method } => write!(f, "Auto ({method})"),
        }
    }
}
