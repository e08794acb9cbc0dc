use rayon::prelude::*;
use tracing::debug;

use crate::channel::{Channel, ThresholdPair};
use crate::error::{ColocError, Result};

use super::config::{AutoMethod, ThresholdMode, ThresholdPolicy};
use super::method::AutoThreshold;

/// Resolve the threshold of one channel.
///
/// In manual mode `manual_value` is returned unchanged once it is known to be
/// finite. In auto mode `resolver` runs on every plane and the largest
/// per-plane threshold wins, so one bright plane raises the cutoff for the
/// whole stack. A plane whose threshold is not finite fails the channel.
pub fn resolve_threshold(
    channel: &Channel,
    mode: ThresholdMode,
    manual_value: f64,
    resolver: &dyn AutoThreshold,
) -> Result<f64> {
    match mode {
        ThresholdMode::Manual => {
            if !manual_value.is_finite() {
                return Err(ColocError::InvalidParameter(format!(
                    "threshold for {} is not a finite number: {manual_value}",
                    channel.title
                )));
            }
            Ok(manual_value)
        }
        ThresholdMode::Auto => {
            let per_plane: Vec<f64> = channel
                .planes
                .par_iter()
                .map(|plane| resolver.threshold_of(plane, channel.bit_depth))
                .collect();
            if let Some(plane) = per_plane.iter().position(|t| !t.is_finite()) {
                return Err(ColocError::InvalidParameter(format!(
                    "{} threshold of {} plane {} is not a finite number: {}",
                    resolver.name(),
                    channel.title,
                    plane + 1,
                    per_plane[plane]
                )));
            }
            let threshold = per_plane.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            debug!(
                channel = %channel.title,
                method = resolver.name(),
                planes = per_plane.len(),
                threshold,
                "Auto threshold resolved"
            );
            Ok(threshold)
        }
    }
}

/// Apply one policy to both channels.
pub fn resolve_pair(
    policy: &ThresholdPolicy,
    channel1: &Channel,
    channel2: &Channel,
) -> Result<ThresholdPair> {
    match policy {
        ThresholdPolicy::Manual {
            threshold1,
            threshold2,
        } => {
            // Manual mode never consults the resolver.
            let unused = AutoMethod::default();
            Ok(ThresholdPair {
                threshold1: resolve_threshold(channel1, ThresholdMode::Manual, *threshold1, &unused)?,
                threshold2: resolve_threshold(channel2, ThresholdMode::Manual, *threshold2, &unused)?,
            })
        }
        ThresholdPolicy::Auto { method } => {
            method.validate()?;
            Ok(ThresholdPair {
                threshold1: resolve_threshold(channel1, ThresholdMode::Auto, f64::NAN, method)?,
                threshold2: resolve_threshold(channel2, ThresholdMode::Auto, f64::NAN, method)?,
            })
        }
    }
}
