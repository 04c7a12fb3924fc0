//! Planar LAB image and whole-image conversions

use std::fmt;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use super::lab::{lab_to_srgb8, srgb8_to_lab};
use crate::error::Result;
use crate::models::Rgb8Image;

/// Pixel count above which conversions run on the rayon pool
pub const PARALLEL_THRESHOLD: usize = 100_000;

/// One of the three LAB channels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LabChannel {
    L,
    A,
    B,
}

impl LabChannel {
    pub const ALL: [LabChannel; 3] = [LabChannel::L, LabChannel::A, LabChannel::B];

    pub fn index(self) -> usize {
        match self {
            Self::L => 0,
            Self::A => 1,
            Self::B => 2,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::L => "L",
            Self::A => "a",
            Self::B => "b",
        }
    }
}

impl fmt::Display for LabChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Float LAB image in the 8-bit LAB encoding, one plane per channel
#[derive(Debug, Clone, PartialEq)]
pub struct LabImage {
    width: u32,
    height: u32,
    planes: [Vec<f32>; 3],
}

impl LabImage {
    /// Assemble from three planes of `width * height` samples each
    ///
    /// Returns None if any plane has the wrong length.
    pub fn from_planes(width: u32, height: u32, planes: [Vec<f32>; 3]) -> Option<Self> {
        let n = width as usize * height as usize;
        if planes.iter().any(|p| p.len() != n) {
            return None;
        }
        Some(Self {
            width,
            height,
            planes,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixel_count(&self) -> usize {
        self.planes[0].len()
    }

    pub fn channel(&self, channel: LabChannel) -> &[f32] {
        &self.planes[channel.index()]
    }

    pub fn channel_mut(&mut self, channel: LabChannel) -> &mut [f32] {
        &mut self.planes[channel.index()]
    }

    /// Samples of one pixel as [L, a, b]
    pub fn sample(&self, idx: usize) -> [f32; 3] {
        [self.planes[0][idx], self.planes[1][idx], self.planes[2][idx]]
    }
}

/// Convert an 8-bit sRGB image to a LAB image
pub fn to_lab(image: &Rgb8Image) -> LabImage {
    let samples: Vec<[f32; 3]> = if image.pixel_count() >= PARALLEL_THRESHOLD {
        image
            .as_raw()
            .par_chunks_exact(3)
            .map(|p| srgb8_to_lab([p[0], p[1], p[2]]))
            .collect()
    } else {
        image
            .pixels()
            .map(|p| srgb8_to_lab([p[0], p[1], p[2]]))
            .collect()
    };

    let n = samples.len();
    let mut planes = [
        Vec::with_capacity(n),
        Vec::with_capacity(n),
        Vec::with_capacity(n),
    ];
    for s in &samples {
        planes[0].push(s[0]);
        planes[1].push(s[1]);
        planes[2].push(s[2]);
    }

    LabImage {
        width: image.width(),
        height: image.height(),
        planes,
    }
}

/// Convert a LAB image back to 8-bit sRGB, clamping and rounding each channel
pub fn to_rgb(lab: &LabImage) -> Result<Rgb8Image> {
    let n = lab.pixel_count();
    let data: Vec<u8> = if n >= PARALLEL_THRESHOLD {
        (0..n)
            .into_par_iter()
            .flat_map_iter(|i| lab_to_srgb8(lab.sample(i)))
            .collect()
    } else {
        (0..n).flat_map(|i| lab_to_srgb8(lab.sample(i))).collect()
    };

    Rgb8Image::new(lab.width, lab.height, data)
}
