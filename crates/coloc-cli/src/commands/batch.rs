use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use coloc_core::io::batch::run_batch;
use coloc_core::pipeline::{AnalysisConfig, BatchConfig};

use super::args::ThresholdArgs;
use crate::progress::BarReporter;
use crate::summary::print_batch_summary;

#[derive(Args)]
pub struct BatchArgs {
    /// Folder with channel 1 files
    #[arg(required_unless_present = "config")]
    pub input1: Option<PathBuf>,

    /// Folder with channel 2 files, paired with channel 1 by sorted name
    #[arg(required_unless_present = "config")]
    pub input2: Option<PathBuf>,

    /// Output folder
    #[arg(required_unless_present = "config")]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub threshold: ThresholdArgs,

    /// Delete files already in the output folder before processing
    #[arg(long)]
    pub clear_output: bool,

    /// Batch config file (TOML); replaces all other options
    #[arg(long)]
    pub config: Option<PathBuf>,
}

pub fn run(args: &BatchArgs) -> Result<()> {
    let config = if let Some(ref config_path) = args.config {
        let contents = std::fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config {}", config_path.display()))?;
        toml::from_str(&contents).context("Invalid batch config")?
    } else {
        build_config_from_args(args)?
    };

    println!("Colocalization batch");
    println!("  Input 1:  {}", config.input1.display());
    println!("  Input 2:  {}", config.input2.display());
    println!("  Output:   {}", config.output.display());
    println!("  Policy:   {}", config.analysis.threshold);
    println!();

    let reporter = BarReporter::new()?;
    let summary = run_batch(&config, &reporter).context("Batch processing failed")?;
    reporter.finish();

    print_batch_summary(&config, &summary);
    Ok(())
}

fn build_config_from_args(args: &BatchArgs) -> Result<BatchConfig> {
    let (Some(input1), Some(input2), Some(output)) = (&args.input1, &args.input2, &args.output)
    else {
        anyhow::bail!("Input folders and output folder are required without --config");
    };
    Ok(BatchConfig {
        input1: input1.clone(),
        input2: input2.clone(),
        output: output.clone(),
        clear_output: args.clear_output,
        analysis: AnalysisConfig {
            threshold: args.threshold.policy()?,
            keep_samples: true,
        },
    })
}
