//! Affine re-centering and re-scaling of LAB channels

use super::FlatChannelPolicy;
use crate::color::{LabChannel, LabImage};
use crate::error::{Result, TransferError};
use crate::stats::{ChannelStats, LabStats};

/// Valid range of every channel in the 8-bit LAB encoding
pub const CLIP_MIN: f32 = 0.0;
pub const CLIP_MAX: f32 = 255.0;

/// Spreads at or below this are flat
///
/// Well under one 8-bit level, and well above the f32 noise (about 1e-5)
/// that sRGB -> LAB leaves on a/b of neutral pixels.
pub const FLAT_STD_THRESHOLD: f32 = 1e-3;

/// Ratio `std_source / std_target` for one channel
///
/// A flat target channel (std at or below `FLAT_STD_THRESHOLD`) yields 1.0 under
/// `UnitScale` and `FlatChannel` under `Error`.
pub fn scale_factor(
    target: ChannelStats,
    source: ChannelStats,
    policy: FlatChannelPolicy,
    channel: LabChannel,
) -> Result<f32> {
    if target.std_dev <= FLAT_STD_THRESHOLD {
        return match policy {
            FlatChannelPolicy::UnitScale => {
                log::warn!("Target {} channel is flat; re-centering without scaling", channel);
                Ok(1.0)
            }
            FlatChannelPolicy::Error => Err(TransferError::FlatChannel { channel }),
        };
    }
    Ok(source.std_dev / target.std_dev)
}

/// Move `values` from the target distribution onto the source distribution
///
/// `v' = (v - mean_t) * (std_s / std_t) + mean_s`, clipped to 0-255.
pub fn normalize_channel(
    values: &mut [f32],
    target: ChannelStats,
    source: ChannelStats,
    policy: FlatChannelPolicy,
    channel: LabChannel,
) -> Result<()> {
    let scale = scale_factor(target, source, policy, channel)?;
    apply_affine(values, target.mean, scale, source.mean);
    Ok(())
}

#[inline]
fn apply_affine(values: &mut [f32], from_mean: f32, scale: f32, to_mean: f32) {
    for v in values.iter_mut() {
        *v = ((*v - from_mean) * scale + to_mean).clamp(CLIP_MIN, CLIP_MAX);
    }
}

/// Normalize all three channels of `image` in place
///
/// Scale factors are resolved for every channel before any sample is touched,
/// so an `Error` policy leaves the image unmodified.
pub fn normalize_lab(
    image: &mut LabImage,
    target: &LabStats,
    source: &LabStats,
    policy: FlatChannelPolicy,
) -> Result<()> {
    let mut scales = [1.0f32; 3];
    for channel in LabChannel::ALL {
        scales[channel.index()] =
            scale_factor(target.channel(channel), source.channel(channel), policy, channel)?;
    }

    for channel in LabChannel::ALL {
        apply_affine(
            image.channel_mut(channel),
            target.channel(channel).mean,
            scales[channel.index()],
            source.channel(channel).mean,
        );
    }
    Ok(())
}
