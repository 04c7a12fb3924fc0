//! Per-channel statistics over LAB images

use serde::{Deserialize, Serialize};

use crate::color::{LabChannel, LabImage};

/// Mean and population standard deviation of one channel
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ChannelStats {
    pub mean: f32,
    pub std_dev: f32,
}

/// Statistics for all three LAB channels
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LabStats {
    pub l: ChannelStats,
    pub a: ChannelStats,
    pub b: ChannelStats,
}

impl LabStats {
    pub fn channel(&self, channel: LabChannel) -> ChannelStats {
        match channel {
            LabChannel::L => self.l,
            LabChannel::A => self.a,
            LabChannel::B => self.b,
        }
    }
}

/// Compute mean and population standard deviation (divide by N)
///
/// Sums are accumulated in f64. An empty slice yields zeros.
pub fn compute_channel_stats(data: &[f32]) -> ChannelStats {
    if data.is_empty() {
        return ChannelStats::default();
    }

    let n = data.len() as f64;
    let mean = data.iter().map(|&v| v as f64).sum::<f64>() / n;
    let variance = data
        .iter()
        .map(|&v| {
            let d = v as f64 - mean;
            d * d
        })
        .sum::<f64>()
        / n;

    ChannelStats {
        mean: mean as f32,
        std_dev: variance.sqrt() as f32,
    }
}

/// Compute statistics for every channel of a LAB image
pub fn compute_lab_stats(image: &LabImage) -> LabStats {
    let stats = LabStats {
        l: compute_channel_stats(image.channel(LabChannel::L)),
        a: compute_channel_stats(image.channel(LabChannel::A)),
        b: compute_channel_stats(image.channel(LabChannel::B)),
    };
    log::debug!(
        "LAB stats: L {:.3}±{:.3}, a {:.3}±{:.3}, b {:.3}±{:.3}",
        stats.l.mean,
        stats.l.std_dev,
        stats.a.mean,
        stats.a.std_dev,
        stats.b.mean,
        stats.b.std_dev
    );
    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::to_lab;
    use crate::models::Rgb8Image;

    #[test]
    fn test_constant_channel() {
        let stats = compute_channel_stats(&[42.0; 100]);
        assert!((stats.mean - 42.0).abs() < 1e-6);
        assert_eq!(stats.std_dev, 0.0);
    }

    #[test]
    fn test_population_std_dev() {
        // Population std of [10, 20, 30] is sqrt(200/3)
        let stats = compute_channel_stats(&[10.0, 20.0, 30.0]);
        assert!((stats.mean - 20.0).abs() < 1e-6);
        assert!((stats.std_dev - 8.164_966).abs() < 1e-4);

        // Sample std would be 1.0 here, population is 0.5
        let stats = compute_channel_stats(&[1.0, 2.0]);
        assert!((stats.std_dev - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_empty_channel() {
        assert_eq!(compute_channel_stats(&[]), ChannelStats::default());
    }

    #[test]
    fn test_constant_image_stats() {
        let image = Rgb8Image::filled(8, 8, [30, 160, 220]).unwrap();
        let lab = to_lab(&image);
        let stats = compute_lab_stats(&lab);

        let expected = lab.sample(0);
        for channel in LabChannel::ALL {
            let s = stats.channel(channel);
            assert!((s.mean - expected[channel.index()]).abs() < 1e-3);
            assert!(s.std_dev < 1e-3, "{} std = {}", channel, s.std_dev);
        }
    }

    #[test]
    fn test_stats_are_deterministic() {
        let image = Rgb8Image::from_fn(32, 16, |x, y| [(x * 8) as u8, (y * 16) as u8, 90]).unwrap();
        let lab = to_lab(&image);
        assert_eq!(compute_lab_stats(&lab), compute_lab_stats(&lab));
    }
}
