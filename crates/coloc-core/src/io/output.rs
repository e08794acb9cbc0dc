use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::Result;
use crate::pipeline::{AnalysisStage, ColocalizationResult, ProgressReporter};

use super::image_io::save_colormap;
use super::samples::write_samples;

/// Where the parts of one result are written. `None` skips that part.
#[derive(Clone, Copy, Debug)]
pub struct OutputPaths<'a> {
    pub colormap: &'a Path,
    pub samples: Option<&'a Path>,
    pub icorr: Option<&'a Path>,
}

/// Persist a result under the `Writing` stage.
///
/// A samples path is ignored when the analysis did not keep its samples.
pub fn write_result(
    result: &ColocalizationResult,
    paths: &OutputPaths<'_>,
    reporter: &dyn ProgressReporter,
) -> Result<()> {
    let samples = paths.samples.zip(result.samples.as_deref());
    let total = 1 + usize::from(samples.is_some()) + usize::from(paths.icorr.is_some());
    reporter.begin_stage(AnalysisStage::Writing, Some(total));

    save_colormap(&result.colormap, paths.colormap)?;
    let mut done = 1;
    reporter.advance(done);

    if let Some((path, values)) = samples {
        write_samples(values, path)?;
        done += 1;
        reporter.advance(done);
    }
    if let Some(path) = paths.icorr {
        fs::write(path, format!("{}\n", result.icorr))?;
        done += 1;
        reporter.advance(done);
    }

    reporter.finish_stage();
    debug!(files = done, colormap = %paths.colormap.display(), "Result written");
    Ok(())
}
