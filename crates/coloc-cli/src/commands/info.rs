use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use coloc_core::io::image_io::load_channel;
use coloc_core::threshold::AutoThreshold;

use super::args::MethodArgs;

#[derive(Args)]
pub struct InfoArgs {
    /// Image or stack file
    pub file: PathBuf,

    #[command(flatten)]
    pub method: MethodArgs,
}

pub fn run(args: &InfoArgs) -> Result<()> {
    let channel = load_channel(&args.file)
        .with_context(|| format!("Failed to load {}", args.file.display()))?;
    let method = args.method.auto_method()?;

    println!("File:        {}", args.file.display());
    println!("Title:       {}", channel.title);
    println!("Dimensions:  {}x{}", channel.width(), channel.height());
    println!("Planes:      {}", channel.plane_count());
    println!("Bit depth:   {}", channel.bit_depth);
    println!();
    println!("Auto thresholds ({})", method);

    let mut highest = f64::NEG_INFINITY;
    for (i, plane) in channel.planes.iter().enumerate() {
        let t = method.threshold_of(plane, channel.bit_depth);
        let max = plane.iter().copied().max().unwrap_or(0);
        highest = highest.max(t);
        println!("  Plane {:>4}:  threshold {:>10.2}   max {:>6}", i + 1, t, max);
    }
    println!("Stack threshold: {:.2}", highest);

    Ok(())
}
