use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use crate::error::{ColocError, Result};

/// Write nMDP values, one per line, in the order given.
pub fn write_samples(samples: &[f64], path: &Path) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    for value in samples {
        writeln!(writer, "{value}")?;
    }
    writer.flush()?;
    Ok(())
}

/// Read back a list written by [`write_samples`].
pub fn read_samples(path: &Path) -> Result<Vec<f64>> {
    let reader = BufReader::new(File::open(path)?);
    let mut samples = Vec::new();
    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let value = trimmed.parse::<f64>().map_err(|e| {
            ColocError::InvalidParameter(format!("line {} of {}: {e}", i + 1, path.display()))
        })?;
        samples.push(value);
    }
    Ok(samples)
}
