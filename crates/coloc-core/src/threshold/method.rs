use crate::channel::Plane;
use crate::consts::HISTOGRAM_BINS;

use super::config::AutoMethod;

/// Computes a threshold for a single plane.
///
/// The returned value is in raw intensity units of the plane. Pixels at or
/// above it count as foreground.
pub trait AutoThreshold: Send + Sync {
    fn name(&self) -> &str;

    fn threshold_of(&self, plane: &Plane, bit_depth: u8) -> f64;
}

impl AutoThreshold for AutoMethod {
    fn name(&self) -> &str {
        match self {
            Self::IsoData => "IsoData",
            Self::Otsu => "Otsu",
            Self::MeanPlusSigma(_) => "MeanPlusSigma",
        }
    }

    fn threshold_of(&self, plane: &Plane, bit_depth: u8) -> f64 {
        match self {
            Self::IsoData => {
                let hist = PlaneHistogram::new(plane, bit_depth);
                hist.lower_bound(isodata_level(&hist.counts))
            }
            Self::Otsu => {
                let hist = PlaneHistogram::new(plane, bit_depth);
                hist.lower_bound(otsu_level(&hist.counts))
            }
            Self::MeanPlusSigma(k) => {
                let (mean, std) = compute_mean_stddev(plane);
                mean + *k as f64 * std
            }
        }
    }
}

/// 256-bin histogram of one plane.
///
/// 8-bit planes map intensities to bins directly. 16-bit planes are binned
/// linearly between the plane's own min and max.
#[derive(Clone, Debug)]
pub struct PlaneHistogram {
    pub counts: Vec<u64>,
    pub min: u16,
    pub max: u16,
    scaled: bool,
}

impl PlaneHistogram {
    pub fn new(plane: &Plane, bit_depth: u8) -> Self {
        let mut counts = vec![0u64; HISTOGRAM_BINS];
        let last = HISTOGRAM_BINS - 1;

        let (min, max) = plane
            .iter()
            .fold((u16::MAX, u16::MIN), |(lo, hi), &v| (lo.min(v), hi.max(v)));

        if bit_depth <= 8 {
            for &v in plane.iter() {
                counts[(v as usize).min(last)] += 1;
            }
            return Self {
                counts,
                min,
                max,
                scaled: false,
            };
        }

        let range = (max - min) as f64;
        for &v in plane.iter() {
            let bin = if range > 0.0 {
                (((v - min) as f64 * HISTOGRAM_BINS as f64 / range) as usize).min(last)
            } else {
                0
            };
            counts[bin] += 1;
        }
        Self {
            counts,
            min,
            max,
            scaled: true,
        }
    }

    /// Convert a bin position back to an intensity.
    pub fn to_intensity(&self, bin: f64) -> f64 {
        if self.scaled {
            let last = (HISTOGRAM_BINS - 1) as f64;
            self.min as f64 + bin / last * (self.max - self.min) as f64
        } else {
            bin
        }
    }

    /// Lower bound of the foreground for a dark background: everything
    /// strictly above `level`.
    pub fn lower_bound(&self, level: usize) -> f64 {
        let bin = (level + 1).min(HISTOGRAM_BINS - 1);
        self.to_intensity(bin as f64)
    }
}

/// Iterative intermeans level, as in ImageJ's "Default" method.
///
/// The first and last bins are ignored so saturated or masked pixels do not
/// pull the level. Returns the middle bin when fewer than two bins are
/// populated.
pub fn isodata_level(histogram: &[u64]) -> usize {
    let n = histogram.len();
    if n < 3 {
        return n / 2;
    }
    let mut data = histogram.to_vec();
    let last = n - 1;
    data[0] = 0;
    data[last] = 0;

    let mut min = 0;
    while data[min] == 0 && min < last {
        min += 1;
    }
    let mut max = last;
    while data[max] == 0 && max > 0 {
        max -= 1;
    }
    if min >= max {
        return n / 2;
    }

    let weighted = |lo: usize, hi: usize| -> (f64, f64) {
        data[lo..=hi]
            .iter()
            .enumerate()
            .fold((0.0, 0.0), |(s, c), (i, &count)| {
                (s + (lo + i) as f64 * count as f64, c + count as f64)
            })
    };

    let mut moving = min;
    loop {
        let (sum_low, count_low) = weighted(min, moving);
        let (sum_high, count_high) = weighted(moving + 1, max);
        let result = (sum_low / count_low + sum_high / count_high) / 2.0;
        moving += 1;
        if (moving + 1) as f64 > result || moving >= max - 1 {
            return result.round() as usize;
        }
    }
}

/// Otsu's level: the bin that maximizes between-class variance.
pub fn otsu_level(histogram: &[u64]) -> usize {
    let total: f64 = histogram.iter().map(|&c| c as f64).sum();
    let sum_all: f64 = histogram
        .iter()
        .enumerate()
        .map(|(i, &c)| i as f64 * c as f64)
        .sum();

    let mut weight_bg: f64 = 0.0;
    let mut sum_bg: f64 = 0.0;
    let mut best_variance = 0.0_f64;
    let mut best_bin = 0usize;

    for (i, &count) in histogram.iter().enumerate() {
        weight_bg += count as f64;
        if weight_bg == 0.0 {
            continue;
        }
        let weight_fg = total - weight_bg;
        if weight_fg == 0.0 {
            break;
        }
        sum_bg += i as f64 * count as f64;
        let mean_bg = sum_bg / weight_bg;
        let mean_fg = (sum_all - sum_bg) / weight_fg;
        let between_variance = weight_bg * weight_fg * (mean_bg - mean_fg).powi(2);

        if between_variance > best_variance {
            best_variance = between_variance;
            best_bin = i;
        }
    }

    best_bin
}

/// Mean and standard deviation of the raw intensities of a plane.
pub fn compute_mean_stddev(plane: &Plane) -> (f64, f64) {
    let n = plane.len() as f64;
    if n == 0.0 {
        return (0.0, 0.0);
    }
    let sum: f64 = plane.iter().map(|&v| v as f64).sum();
    let mean = sum / n;
    let var: f64 = plane.iter().map(|&v| (v as f64 - mean).powi(2)).sum::<f64>() / n;
    (mean, var.sqrt())
}
