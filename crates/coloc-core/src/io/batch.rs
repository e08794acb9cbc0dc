use std::fs;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::error::{ColocError, Result};
use crate::pipeline::{
    analyze, AnalysisStage, BatchConfig, ColocalizationResult, NoOpReporter, ProgressReporter,
};

use super::image_io::load_channel;
use super::output::{write_result, OutputPaths};

/// Two corresponding input files and the stem their outputs are named from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BatchPair {
    pub input1: PathBuf,
    pub input2: PathBuf,
    pub stem: String,
}

impl BatchPair {
    pub fn colormap_path(&self, output: &Path) -> PathBuf {
        output.join(format!("{}.tif", self.stem))
    }

    pub fn samples_path(&self, output: &Path) -> PathBuf {
        output.join(format!("{}.txt", self.stem))
    }

    pub fn icorr_path(&self, output: &Path) -> PathBuf {
        output.join(format!("{} Icorr.txt", self.stem))
    }
}

/// Outcome of one pair. Failures do not stop the batch.
#[derive(Debug)]
pub struct PairOutcome {
    pub pair: BatchPair,
    pub result: Result<f64>,
}

#[derive(Debug, Default)]
pub struct BatchSummary {
    pub outcomes: Vec<PairOutcome>,
}

impl BatchSummary {
    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.result.is_ok()).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.succeeded()
    }
}

/// File name without its last extension.
pub fn strip_extension(path: &Path) -> String {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    match name.rfind('.') {
        Some(idx) => name[..idx].to_string(),
        None => name,
    }
}

/// Output stem of a pair: `"<stem1> and <stem2>"`.
pub fn output_stem(input1: &Path, input2: &Path) -> String {
    format!("{} and {}", strip_extension(input1), strip_extension(input2))
}

/// Files of one input folder, sorted by name. Sub-folders are rejected.
pub fn list_inputs(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            return Err(ColocError::NestedDirectory(path));
        }
        files.push(path);
    }
    files.sort();
    Ok(files)
}

/// Match the files of two folders by sorted position.
pub fn pair_inputs(dir1: &Path, dir2: &Path) -> Result<Vec<BatchPair>> {
    let files1 = list_inputs(dir1)?;
    let files2 = list_inputs(dir2)?;
    if files1.len() != files2.len() {
        return Err(ColocError::BatchMismatch {
            left: files1.len(),
            right: files2.len(),
        });
    }
    Ok(files1
        .into_iter()
        .zip(files2)
        .map(|(input1, input2)| BatchPair {
            stem: output_stem(&input1, &input2),
            input1,
            input2,
        })
        .collect())
}

/// Remove the files (not sub-folders) of `dir`.
pub fn clear_output_dir(dir: &Path) -> Result<usize> {
    let mut removed = 0;
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() {
            fs::remove_file(&path)?;
            removed += 1;
        }
    }
    Ok(removed)
}

/// Analyse one pair and persist its colormap, samples and Icorr.
pub fn process_pair(pair: &BatchPair, config: &BatchConfig) -> Result<ColocalizationResult> {
    let channel1 = load_channel(&pair.input1)?;
    let channel2 = load_channel(&pair.input2)?;
    let result = analyze(&channel1, &channel2, &config.analysis)?;

    let colormap = pair.colormap_path(&config.output);
    let samples = pair.samples_path(&config.output);
    let icorr = pair.icorr_path(&config.output);
    let paths = OutputPaths {
        colormap: &colormap,
        samples: Some(&samples),
        icorr: Some(&icorr),
    };
    // The batch bar tracks pairs, so per-file progress is not reported.
    write_result(&result, &paths, &NoOpReporter)?;
    Ok(result)
}

/// Process every file pair of the two input folders.
///
/// An invalid threshold policy and folder-level problems (unequal listings,
/// sub-folders, unreadable folders) abort before any pair runs. A failing pair is logged and
/// recorded, and the batch moves on to the next one.
pub fn run_batch(config: &BatchConfig, reporter: &dyn ProgressReporter) -> Result<BatchSummary> {
    config.analysis.threshold.validate()?;
    let pairs = pair_inputs(&config.input1, &config.input2)?;
    fs::create_dir_all(&config.output)?;
    if config.clear_output {
        let removed = clear_output_dir(&config.output)?;
        info!(removed, output = %config.output.display(), "Cleared output folder");
    }

    info!(
        input1 = %config.input1.display(),
        input2 = %config.input2.display(),
        output = %config.output.display(),
        policy = %config.analysis.threshold,
        pairs = pairs.len(),
        "Batch started"
    );

    let total = pairs.len();
    reporter.begin_stage(AnalysisStage::Batch, Some(total));
    let mut summary = BatchSummary::default();
    for (i, pair) in pairs.into_iter().enumerate() {
        info!(
            "Processing files {} and {}. Task {} of {}",
            strip_extension(&pair.input1),
            strip_extension(&pair.input2),
            i + 1,
            total
        );
        let result = process_pair(&pair, config).map(|r| r.icorr);
        if let Err(ref e) = result {
            warn!(pair = %pair.stem, error = %e, "Pair failed, continuing");
        }
        summary.outcomes.push(PairOutcome { pair, result });
        reporter.advance(i + 1);
    }
    reporter.finish_stage();

    info!(
        succeeded = summary.succeeded(),
        failed = summary.failed(),
        "Batch processing has been completed"
    );
    Ok(summary)
}
