pub mod config;
mod orchestrator;
mod types;

pub use config::{AnalysisConfig, BatchConfig};
pub use orchestrator::{analyze, analyze_reported};
pub use types::{AnalysisStage, ColocalizationResult, NoOpReporter, ProgressReporter};
