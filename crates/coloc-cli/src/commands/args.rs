use anyhow::{bail, Result};
use clap::{Args, ValueEnum};
use coloc_core::consts::DEFAULT_SIGMA_MULTIPLIER;
use coloc_core::threshold::{AutoMethod, ThresholdPolicy};

#[derive(Clone, Copy, ValueEnum)]
pub enum MethodArg {
    Isodata,
    Otsu,
    MeanSigma,
}

/// Auto-threshold method selection shared by every command.
#[derive(Args)]
pub struct MethodArgs {
    /// Auto-threshold method
    #[arg(long, value_enum, default_value = "isodata")]
    pub method: MethodArg,

    /// Sigma multiplier for the mean-sigma method
    #[arg(long, default_value_t = DEFAULT_SIGMA_MULTIPLIER)]
    pub sigma: f32,
}

impl MethodArgs {
    pub fn auto_method(&self) -> Result<AutoMethod> {
        let method = match self.method {
            MethodArg::Isodata => AutoMethod::IsoData,
            MethodArg::Otsu => AutoMethod::Otsu,
            MethodArg::MeanSigma => AutoMethod::MeanPlusSigma(self.sigma),
        };
        method.validate()?;
        Ok(method)
    }
}

/// Manual thresholds, or auto-threshold when none are given.
#[derive(Args)]
pub struct ThresholdArgs {
    /// Manual threshold for channel 1
    #[arg(long, requires = "threshold2")]
    pub threshold1: Option<f64>,

    /// Manual threshold for channel 2
    #[arg(long, requires = "threshold1")]
    pub threshold2: Option<f64>,

    /// Use the auto-threshold policy (the default when no manual thresholds are given)
    #[arg(long, conflicts_with_all = ["threshold1", "threshold2"])]
    pub auto: bool,

    #[command(flatten)]
    pub method: MethodArgs,
}

impl ThresholdArgs {
    pub fn policy(&self) -> Result<ThresholdPolicy> {
        let policy = match (self.auto, self.threshold1, self.threshold2) {
            (true, _, _) | (false, None, None) => ThresholdPolicy::Auto {
                method: self.method.auto_method()?,
            },
            (false, Some(threshold1), Some(threshold2)) => ThresholdPolicy::Manual {
                threshold1,
                threshold2,
            },
            _ => bail!("The threshold value for at least one of the images has not been specified"),
        };
        policy.validate()?;
        Ok(policy)
    }
}
