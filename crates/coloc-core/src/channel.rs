use ndarray::Array2;

use crate::consts::SUPPORTED_BIT_DEPTHS;
use crate::error::{ColocError, Result};

/// A single grayscale plane, row-major, shape = (height, width).
///
/// Intensities are stored as raw integer values (0..=255 for 8-bit data,
/// 0..=65535 for 16-bit data), never normalized.
pub type Plane = Array2<u16>;

/// One image stack taking part in a colocalization analysis.
#[derive(Clone, Debug)]
pub struct Channel {
    /// Display name, usually the source file stem.
    pub title: String,
    /// Planes in stack order. All planes share one shape.
    pub planes: Vec<Plane>,
    /// Bit depth of the source data (8 or 16).
    pub bit_depth: u8,
}

impl Channel {
    /// Build a channel, checking that it is non-empty, that every plane has
    /// the same shape and that the bit depth is supported.
    pub fn new(title: impl Into<String>, planes: Vec<Plane>, bit_depth: u8) -> Result<Self> {
        let first = planes.first().ok_or(ColocError::EmptyStack)?;
        let dim = first.dim();
        if dim.0 == 0 || dim.1 == 0 {
            return Err(ColocError::EmptyStack);
        }
        if let Some(bad) = planes.iter().find(|p| p.dim() != dim) {
            return Err(ColocError::InvalidParameter(format!(
                "plane of size {}x{} in a stack of {}x{} planes",
                bad.ncols(),
                bad.nrows(),
                dim.1,
                dim.0
            )));
        }
        if !SUPPORTED_BIT_DEPTHS.contains(&bit_depth) {
            return Err(ColocError::UnsupportedPixelFormat(format!(
                "{bit_depth}-bit data"
            )));
        }
        Ok(Self {
            title: title.into(),
            planes,
            bit_depth,
        })
    }

    /// Single-plane convenience constructor.
    pub fn from_plane(title: impl Into<String>, plane: Plane, bit_depth: u8) -> Result<Self> {
        Self::new(title, vec![plane], bit_depth)
    }

    pub fn width(&self) -> usize {
        self.planes[0].ncols()
    }

    pub fn height(&self) -> usize {
        self.planes[0].nrows()
    }

    pub fn plane_count(&self) -> usize {
        self.planes.len()
    }

    /// Intensity at (plane, row, col).
    pub fn value(&self, plane: usize, row: usize, col: usize) -> u16 {
        self.planes[plane][[row, col]]
    }

    /// Check that `other` can be analysed in lockstep with `self`.
    pub fn ensure_compatible(&self, other: &Channel) -> Result<()> {
        if self.width() != other.width()
            || self.height() != other.height()
            || self.plane_count() != other.plane_count()
        {
            return Err(ColocError::ShapeMismatch {
                left_width: self.width(),
                left_height: self.height(),
                left_planes: self.plane_count(),
                right_width: other.width(),
                right_height: other.height(),
                right_planes: other.plane_count(),
            });
        }
        if self.bit_depth != other.bit_depth {
            return Err(ColocError::BitDepthMismatch {
                left: self.bit_depth,
                right: other.bit_depth,
            });
        }
        Ok(())
    }
}

/// Per-channel thresholds resolved once per analysis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ThresholdPair {
    pub threshold1: f64,
    pub threshold2: f64,
}

impl ThresholdPair {
    /// ROI membership: a location is in the ROI when either channel reaches
    /// its threshold.
    #[inline]
    pub fn in_roi(&self, value1: u16, value2: u16) -> bool {
        value1 as f64 >= self.threshold1 || value2 as f64 >= self.threshold2
    }
}
