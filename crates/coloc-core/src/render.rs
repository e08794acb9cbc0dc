use image::RgbImage;
use rayon::prelude::*;
use tracing::debug;

use crate::channel::{Channel, Plane, ThresholdPair};
use crate::colormap::{color_for, ColormapStack, BACKGROUND};
use crate::consts::PARALLEL_PLANE_THRESHOLD;
use crate::error::{ColocError, Result};
use crate::stats::RoiStatistics;

/// Result of the rendering pass.
#[derive(Clone, Debug)]
pub struct RenderOutput {
    pub colormap: ColormapStack,
    /// nMDP of every in-ROI location in scan order (plane, row, column),
    /// when requested.
    pub samples: Option<Vec<f64>>,
    /// In-ROI locations with a positive nMDP.
    pub positive: u64,
    /// All in-ROI locations.
    pub total: u64,
}

/// Normalized mean deviation product of one pixel pair, clamped to [-1, 1].
#[inline]
pub fn nmdp(value1: u16, value2: u16, stats1: &RoiStatistics, stats2: &RoiStatistics) -> f64 {
    let num = (value1 as f64 - stats1.mean) * (value2 as f64 - stats2.mean);
    let den = stats1.range() * stats2.range();
    (num / den).clamp(-1.0, 1.0)
}

struct PlaneOutput {
    image: RgbImage,
    samples: Vec<f64>,
    positive: u64,
    total: u64,
}

fn render_plane(
    plane1: &Plane,
    plane2: &Plane,
    thresholds: &ThresholdPair,
    stats1: &RoiStatistics,
    stats2: &RoiStatistics,
    keep_samples: bool,
) -> PlaneOutput {
    let (h, w) = plane1.dim();
    let mut image = RgbImage::from_pixel(w as u32, h as u32, BACKGROUND);
    let mut samples = Vec::new();
    let mut positive = 0u64;
    let mut total = 0u64;

    for row in 0..h {
        for col in 0..w {
            let v1 = plane1[[row, col]];
            let v2 = plane2[[row, col]];
            if !thresholds.in_roi(v1, v2) {
                continue;
            }
            let value = nmdp(v1, v2, stats1, stats2);
            image.put_pixel(col as u32, row as u32, color_for(value));
            if keep_samples {
                samples.push(value);
            }
            total += 1;
            if value > 0.0 {
                positive += 1;
            }
        }
    }

    PlaneOutput {
        image,
        samples,
        positive,
        total,
    }
}

/// Second pass: per-pixel nMDP, colormap and positive/total counts.
///
/// Every plane depends only on the global statistics, so planes are rendered
/// in parallel and their partial counts summed afterwards. Output planes and
/// samples keep input order.
pub fn render(
    channel1: &Channel,
    channel2: &Channel,
    threshold1: f64,
    threshold2: f64,
    stats1: &RoiStatistics,
    stats2: &RoiStatistics,
    keep_samples: bool,
) -> Result<RenderOutput> {
    channel1.ensure_compatible(channel2)?;
    for (channel, stats) in [(1, stats1), (2, stats2)] {
        if stats.is_degenerate() {
            return Err(ColocError::DegenerateStatistics {
                channel,
                value: stats.mean,
            });
        }
    }

    let thresholds = ThresholdPair {
        threshold1,
        threshold2,
    };
    let work = |(p1, p2): (&Plane, &Plane)| {
        render_plane(p1, p2, &thresholds, stats1, stats2, keep_samples)
    };

    let planes: Vec<PlaneOutput> = if channel1.plane_count() >= PARALLEL_PLANE_THRESHOLD {
        channel1
            .planes
            .par_iter()
            .zip(channel2.planes.par_iter())
            .map(work)
            .collect()
    } else {
        channel1
            .planes
            .iter()
            .zip(channel2.planes.iter())
            .map(work)
            .collect()
    };

    let mut images = Vec::with_capacity(planes.len());
    let mut samples = keep_samples.then(Vec::new);
    let mut positive = 0u64;
    let mut total = 0u64;
    for out in planes {
        images.push(out.image);
        if let Some(all) = samples.as_mut() {
            all.extend(out.samples);
        }
        positive += out.positive;
        total += out.total;
    }

    debug!(positive, total, planes = images.len(), "Colormap rendered");

    Ok(RenderOutput {
        colormap: ColormapStack {
            title: format!("{} and {} colocalization", channel1.title, channel2.title),
            planes: images,
        },
        samples,
        positive,
        total,
    })
}
