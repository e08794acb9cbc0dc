use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use coloc_core::io::image_io::load_channel;
use coloc_core::io::output::{write_result, OutputPaths};
use coloc_core::pipeline::{analyze_reported, AnalysisConfig};

use super::args::ThresholdArgs;
use crate::progress::BarReporter;
use crate::summary::print_result_summary;

#[derive(Args)]
pub struct AnalyzeArgs {
    /// Channel 1 image or stack (TIFF, PNG, ...)
    pub file1: PathBuf,

    /// Channel 2 image or stack, same size and bit depth as channel 1
    pub file2: PathBuf,

    #[command(flatten)]
    pub threshold: ThresholdArgs,

    /// Analysis config file (TOML); overrides the threshold options
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Save per-pixel nMDP values to this text file
    #[arg(long)]
    pub save_nmdp: Option<PathBuf>,

    /// Colormap output path (.tif or .png)
    #[arg(short, long, default_value = "colocalization.tif")]
    pub output: PathBuf,
}

pub fn run(args: &AnalyzeArgs) -> Result<()> {
    let config = match args.config {
        Some(ref path) => load_analysis_config(path)?,
        None => AnalysisConfig {
            threshold: args.threshold.policy()?,
            keep_samples: false,
        },
    };
    execute(
        &args.file1,
        &args.file2,
        config,
        args.save_nmdp.as_deref(),
        &args.output,
    )
}

pub fn load_analysis_config(path: &Path) -> Result<AnalysisConfig> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    toml::from_str(&contents).context("Invalid analysis config")
}

/// Load both channels, run the analysis and write the requested outputs.
pub fn execute(
    file1: &Path,
    file2: &Path,
    mut config: AnalysisConfig,
    save_nmdp: Option<&Path>,
    output: &Path,
) -> Result<()> {
    let channel1 =
        load_channel(file1).with_context(|| format!("Failed to load {}", file1.display()))?;
    let channel2 =
        load_channel(file2).with_context(|| format!("Failed to load {}", file2.display()))?;

    println!(
        "Loaded {}x{}x{} {}-bit channels",
        channel1.width(),
        channel1.height(),
        channel1.plane_count(),
        channel1.bit_depth
    );

    config.keep_samples |= save_nmdp.is_some();

    let reporter = BarReporter::new()?;
    let result = analyze_reported(&channel1, &channel2, &config, &reporter)
        .context("Colocalization failed")?;

    let paths = OutputPaths {
        colormap: output,
        samples: save_nmdp,
        icorr: None,
    };
    write_result(&result, &paths, &reporter)
        .with_context(|| format!("Failed to write results to {}", output.display()))?;
    reporter.finish();

    print_result_summary(&config, &result, output, save_nmdp);
    Ok(())
}
