use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use coloc_core::pipeline::AnalysisConfig;
use coloc_core::threshold::ThresholdPolicy;

use super::analyze::execute;
use super::args::MethodArgs;

/// Auto-threshold preset: no manual threshold options.
#[derive(Args)]
pub struct AutoArgs {
    /// Channel 1 image or stack
    pub file1: PathBuf,

    /// Channel 2 image or stack
    pub file2: PathBuf,

    #[command(flatten)]
    pub method: MethodArgs,

    /// Save per-pixel nMDP values to this text file
    #[arg(long)]
    pub save_nmdp: Option<PathBuf>,

    /// Colormap output path (.tif or .png)
    #[arg(short, long, default_value = "colocalization.tif")]
    pub output: PathBuf,
}

pub fn run(args: &AutoArgs) -> Result<()> {
    let config = AnalysisConfig {
        threshold: ThresholdPolicy::Auto {
            method: args.method.auto_method()?,
        },
        keep_samples: false,
    };
    execute(
        &args.file1,
        &args.file2,
        config,
        args.save_nmdp.as_deref(),
        &args.output,
    )
}
