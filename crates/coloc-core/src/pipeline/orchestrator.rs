use tracing::info;

use crate::channel::Channel;
use crate::correlation::aggregate;
use crate::error::Result;
use crate::render::render;
use crate::stats::accumulate;
use crate::threshold::resolve_pair;

use super::config::AnalysisConfig;
use super::types::{AnalysisStage, ColocalizationResult, NoOpReporter, ProgressReporter};

/// Run the full colocalization analysis with a progress reporter.
///
/// Thresholds are resolved, ROI statistics accumulated, the colormap
/// rendered and Icorr aggregated, in that order. Any failure aborts the
/// analysis without partial output.
pub fn analyze_reported(
    channel1: &Channel,
    channel2: &Channel,
    config: &AnalysisConfig,
    reporter: &dyn ProgressReporter,
) -> Result<ColocalizationResult> {
    channel1.ensure_compatible(channel2)?;
    info!(
        channel1 = %channel1.title,
        channel2 = %channel2.title,
        width = channel1.width(),
        height = channel1.height(),
        planes = channel1.plane_count(),
        bit_depth = channel1.bit_depth,
        "Starting colocalization"
    );

    reporter.begin_stage(AnalysisStage::Thresholds, Some(2));
    let thresholds = resolve_pair(&config.threshold, channel1, channel2)?;
    reporter.advance(2);
    reporter.finish_stage();
    info!(
        policy = %config.threshold,
        threshold1 = thresholds.threshold1,
        threshold2 = thresholds.threshold2,
        "Thresholds resolved"
    );

    reporter.begin_stage(AnalysisStage::Statistics, Some(channel1.plane_count()));
    let (stats1, stats2) = accumulate(
        channel1,
        channel2,
        thresholds.threshold1,
        thresholds.threshold2,
    )?;
    reporter.advance(channel1.plane_count());
    reporter.finish_stage();

    reporter.begin_stage(AnalysisStage::Rendering, Some(channel1.plane_count()));
    let rendered = render(
        channel1,
        channel2,
        thresholds.threshold1,
        thresholds.threshold2,
        &stats1,
        &stats2,
        config.keep_samples,
    )?;
    reporter.advance(channel1.plane_count());
    reporter.finish_stage();

    let icorr = aggregate(rendered.positive, rendered.total)?;
    info!(
        icorr,
        positive = rendered.positive,
        total = rendered.total,
        "Colocalization complete"
    );

    Ok(ColocalizationResult {
        thresholds,
        stats1,
        stats2,
        colormap: rendered.colormap,
        icorr,
        samples: rendered.samples,
        positive: rendered.positive,
        total: rendered.total,
    })
}

/// Run the full colocalization analysis.
pub fn analyze(
    channel1: &Channel,
    channel2: &Channel,
    config: &AnalysisConfig,
) -> Result<ColocalizationResult> {
    analyze_reported(channel1, channel2, config, &NoOpReporter)
}
