//! Statistical color transfer pipeline
//!
//! Sequence for one target:
//! 1. sRGB -> LAB for source and target
//! 2. Per-channel mean / std for both
//! 3. Affine normalization of the target onto the source statistics
//! 4. LAB -> sRGB

mod batch;
mod normalize;


use serde::{Deserialize, Serialize};

use crate::color::{to_lab, to_rgb};
use crate::error::Result;
use crate::models::Rgb8Image;
use crate::stats::{compute_lab_stats, LabStats};

pub use batch::transfer_batch;
pub use normalize::{
    normalize_channel, normalize_lab, scale_factor, CLIP_MAX, CLIP_MIN, FLAT_STD_THRESHOLD,
};

/// Behavior when a target channel has zero standard deviation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FlatChannelPolicy {
    /// Use a scale factor of 1.0 (re-center only)
    #[default]
    UnitScale,
    /// Fail with `TransferError::FlatChannel`
    Error,
}

impl FlatChannelPolicy {
    pub fn as_str(&self) -> &str {
        match self {
            Self::UnitScale => "unit-scale",
            Self::Error => "error",
        }
    }
}

impl std::str::FromStr for FlatChannelPolicy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "unit-scale" | "unit" | "recenter" => Ok(Self::UnitScale),
            "error" | "fail" => Ok(Self::Error),
            _ => Err(format!(
                "Unknown flat channel policy: {} (expected unit-scale or error)",
                s
            )),
        }
    }
}

/// Options for a transfer run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TransferOptions {
    pub flat_channel: FlatChannelPolicy,
}

/// Target statistics before and after a transfer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TransferReport {
    pub source: LabStats,
    pub target_before: LabStats,
    pub target_after: LabStats,
}

/// Transfer engine bound to one source image
///
/// Source statistics are computed once and reused for every target.
#[derive(Debug, Clone)]
pub struct ColorTransfer {
    source_stats: LabStats,
    options: TransferOptions,
}

impl ColorTransfer {
    /// Analyze `source` and prepare a transfer
    pub fn from_source(source: &Rgb8Image, options: TransferOptions) -> Self {
        Self::from_stats(compute_lab_stats(&to_lab(source)), options)
    }

    /// Build from precomputed source statistics
    pub fn from_stats(source_stats: LabStats, options: TransferOptions) -> Self {
        Self {
            source_stats,
            options,
        }
    }

    pub fn source_stats(&self) -> &LabStats {
        &self.source_stats
    }

    pub fn options(&self) -> TransferOptions {
        self.options
    }

    /// Recolor `target` to the source distribution
    pub fn apply(&self, target: &Rgb8Image) -> Result<Rgb8Image> {
        let mut lab = to_lab(target);
        let target_stats = compute_lab_stats(&lab);
        normalize_lab(
            &mut lab,
            &target_stats,
            &self.source_stats,
            self.options.flat_channel,
        )?;
        to_rgb(&lab)
    }

    /// Like [`apply`](Self::apply), also reporting target statistics
    ///
    /// `target_after` is measured on the normalized LAB samples, before
    /// quantization back to 8-bit sRGB.
    pub fn apply_with_report(&self, target: &Rgb8Image) -> Result<(Rgb8Image, TransferReport)> {
        let mut lab = to_lab(target);
        let target_before = compute_lab_stats(&lab);
        normalize_lab(
            &mut lab,
            &target_before,
            &self.source_stats,
            self.options.flat_channel,
        )?;
        let target_after = compute_lab_stats(&lab);
        let report = TransferReport {
            source: self.source_stats,
            target_before,
            target_after,
        };
        Ok((to_rgb(&lab)?, report))
    }
}

/// Recolor `target` so its LAB statistics match `source`
pub fn transfer(
    source: &Rgb8Image,
    target: &Rgb8Image,
    options: &TransferOptions,
) -> Result<Rgb8Image> {
    ColorTransfer::from_source(source, *options).apply(target)
}
