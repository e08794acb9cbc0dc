use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use coloc_core::pipeline::{AnalysisConfig, BatchConfig};

#[derive(Args)]
pub struct ConfigArgs {
    /// Print a batch config instead of a single-analysis config
    #[arg(long)]
    pub batch: bool,

    /// Write config to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Print or save a default config as TOML.
pub fn run(args: &ConfigArgs) -> Result<()> {
    let toml_str = if args.batch {
        toml::to_string_pretty(&BatchConfig::default())?
    } else {
        toml::to_string_pretty(&AnalysisConfig::default())?
    };

    if let Some(ref path) = args.output {
        std::fs::write(path, &toml_str)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;
        println!("Default config saved to {}", path.display());
    } else {
        print!("{}", toml_str);
    }

    Ok(())
}
