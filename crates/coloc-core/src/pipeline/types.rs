use crate::channel::ThresholdPair;
use crate::colormap::ColormapStack;
use crate::stats::RoiStatistics;

/// Analysis stage, used for progress reporting.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnalysisStage {
    Thresholds,
    Statistics,
    Rendering,
    Writing,
    Batch,
}

impl std::fmt::Display for AnalysisStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Thresholds => write!(f, "Calculating thresholds"),
            Self::Statistics => write!(f, "Calculating mean intensities"),
            Self::Rendering => write!(f, "Calculating Icorr and nMDPs"),
            Self::Writing => write!(f, "Writing output"),
            Self::Batch => write!(f, "Processing file pairs"),
        }
    }
}

/// Everything one analysis produces.
#[derive(Clone, Debug)]
pub struct ColocalizationResult {
    pub thresholds: ThresholdPair,
    pub stats1: RoiStatistics,
    pub stats2: RoiStatistics,
    pub colormap: ColormapStack,
    /// Index of correlation: fraction of ROI pixels with positive nMDP.
    pub icorr: f64,
    /// Per-pixel nMDP values in scan order, if requested.
    pub samples: Option<Vec<f64>>,
    pub positive: u64,
    pub total: u64,
}

/// Thread-safe progress reporting for the analysis.
///
/// Implementors can use this to drive progress bars, logging, or any other
/// UI feedback. All methods have default no-op implementations.
pub trait ProgressReporter: Send + Sync {
    /// A new stage has started. `total_items` is the number of work items in
    /// this stage (e.g., plane or pair count), if known.
    fn begin_stage(&self, _stage: AnalysisStage, _total_items: Option<usize>) {}

    /// One work item within the current stage has completed.
    fn advance(&self, _items_done: usize) {}

    /// The current stage is finished.
    fn finish_stage(&self) {}
}

/// No-op progress reporter, used when `analyze` delegates.
pub struct NoOpReporter;
impl ProgressReporter for NoOpReporter {}
