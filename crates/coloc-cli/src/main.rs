mod commands;
mod progress;
mod summary;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "coloc", about = "Colocalization colormap and correlation index")]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show stack metadata and per-plane auto-thresholds
    Info(commands::info::InfoArgs),
    /// Colocalize two channels with manual or auto thresholds
    Analyze(commands::analyze::AnalyzeArgs),
    /// Colocalize two channels with auto-thresholds
    Auto(commands::auto::AutoArgs),
    /// Colocalize every file pair of two folders
    Batch(commands::batch::BatchArgs),
    /// Print a default config as TOML
    Config(commands::config::ConfigArgs),
}

/// Batch task lines stay visible without `--verbose`.
const QUIET_DIRECTIVES: &str = "warn,coloc_core::io::batch=info";

fn log_directives(verbose: bool) -> &'static str {
    if verbose {
        "debug"
    } else {
        QUIET_DIRECTIVES
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(log_directives(cli.verbose)))
        .init();

    match &cli.command {
        Commands::Info(args) => commands::info::run(args),
        Commands::Analyze(args) => commands::analyze::run(args),
        Commands::Auto(args) => commands::auto::run(args),
        Commands::Batch(args) => commands::batch::run(args),
        Commands::Config(args) => commands::config::run(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quiet_filter_keeps_batch_progress() {
        let filter = EnvFilter::try_new(log_directives(false)).unwrap();
        let rendered = filter.to_string().to_lowercase();
        assert!(rendered.contains("coloc_core::io::batch=info"));
        assert!(rendered.contains("warn"));
    }

    #[test]
    fn test_verbose_filter_is_debug() {
        assert_eq!(log_directives(true), "debug");
        assert!(EnvFilter::try_new(log_directives(true)).is_ok());
    }
}
