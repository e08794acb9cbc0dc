use ndarray::Zip;
use rayon::prelude::*;
use tracing::debug;

use crate::channel::{Channel, Plane, ThresholdPair};
use crate::error::{ColocError, Result};

/// Intensity statistics of one channel over the ROI.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RoiStatistics {
    /// Number of in-ROI pixel locations.
    pub count: u64,
    /// Mean in-ROI intensity.
    pub mean: f64,
    /// Maximum in-ROI intensity.
    pub max: f64,
}

impl RoiStatistics {
    /// Deviation range used as the nMDP denominator.
    pub fn range(&self) -> f64 {
        self.max - self.mean
    }

    pub fn is_degenerate(&self) -> bool {
        self.max == self.mean
    }
}

/// Running sums for one channel.
#[derive(Clone, Copy, Debug, Default)]
struct Accumulator {
    count: u64,
    sum: u64,
    max: u16,
}

impl Accumulator {
    #[inline]
    fn push(&mut self, value: u16) {
        self.count += 1;
        self.sum += value as u64;
        self.max = self.max.max(value);
    }

    fn merge(self, other: Self) -> Self {
        Self {
            count: self.count + other.count,
            sum: self.sum + other.sum,
            max: self.max.max(other.max),
        }
    }

    fn finish(self) -> Result<RoiStatistics> {
        if self.count == 0 {
            return Err(ColocError::EmptyRoi);
        }
        Ok(RoiStatistics {
            count: self.count,
            mean: self.sum as f64 / self.count as f64,
            max: self.max as f64,
        })
    }
}

fn accumulate_plane(
    plane1: &Plane,
    plane2: &Plane,
    thresholds: &ThresholdPair,
) -> (Accumulator, Accumulator) {
    let mut acc1 = Accumulator::default();
    let mut acc2 = Accumulator::default();
    Zip::from(plane1).and(plane2).for_each(|&v1, &v2| {
        if thresholds.in_roi(v1, v2) {
            acc1.push(v1);
            acc2.push(v2);
        }
    });
    (acc1, acc2)
}

/// First pass: ROI count, mean and max of both channels.
///
/// A location belongs to the ROI when either channel reaches its threshold;
/// both channels are accumulated over that same set, so the two counts are
/// always equal.
pub fn accumulate(
    channel1: &Channel,
    channel2: &Channel,
    threshold1: f64,
    threshold2: f64,
) -> Result<(RoiStatistics, RoiStatistics)> {
    channel1.ensure_compatible(channel2)?;
    let thresholds = ThresholdPair {
        threshold1,
        threshold2,
    };

    let (acc1, acc2) = channel1
        .planes
        .par_iter()
        .zip(channel2.planes.par_iter())
        .map(|(p1, p2)| accumulate_plane(p1, p2, &thresholds))
        .reduce(
            || (Accumulator::default(), Accumulator::default()),
            |(a1, a2), (b1, b2)| (a1.merge(b1), a2.merge(b2)),
        );

    let stats1 = acc1.finish()?;
    let stats2 = acc2.finish()?;
    debug!(
        roi_pixels = stats1.count,
        mean1 = stats1.mean,
        max1 = stats1.max,
        mean2 = stats2.mean,
        max2 = stats2.max,
        "ROI statistics accumulated"
    );
    Ok((stats1, stats2))
}
