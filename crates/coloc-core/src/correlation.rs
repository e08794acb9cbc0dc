use crate::error::{ColocError, Result};

/// Fraction of in-ROI pixels with a positive nMDP, in [0, 1].
pub fn aggregate(positive: u64, total: u64) -> Result<f64> {
    if total == 0 {
        return Err(ColocError::EmptyRoi);
    }
    Ok(positive as f64 / total as f64)
}
