/// Minimum plane count to use plane-level Rayon parallelism.
pub const PARALLEL_PLANE_THRESHOLD: usize = 2;

/// Number of histogram bins used by the auto-threshold methods.
pub const HISTOGRAM_BINS: usize = 256;

/// Number of entries in the colormap lookup table.
pub const LUT_SIZE: usize = 256;

/// Largest LUT index, as a float for the nMDP -> index mapping.
pub const LUT_MAX_INDEX: f64 = (LUT_SIZE - 1) as f64;

/// Default sigma multiplier for the MeanPlusSigma auto-threshold.
pub const DEFAULT_SIGMA_MULTIPLIER: f32 = 2.0;

/// Bit depths accepted for input channels.
pub const SUPPORTED_BIT_DEPTHS: [u8; 2] = [8, 16];
