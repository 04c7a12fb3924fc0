//! Default transfer parameters and their sanitization.

use serde::Deserialize;

use crate::decoders::is_supported_extension;
use crate::exporters::DEFAULT_JPEG_QUALITY;
use crate::transfer::FlatChannelPolicy;

/// Prefix given to outputs that have no custom name
pub const DEFAULT_OUTPUT_PREFIX: &str = "filtered_";

/// Values read from `hueshift.yml`; every field is optional in the file.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct TransferDefaults {
    /// What to do with a zero-variance target channel
    pub flat_channel: FlatChannelPolicy,
    /// Prefix for `<target_dir>/<prefix><original_filename>`
    pub output_prefix: String,
    /// JPEG encoder quality (1-100)
    pub jpeg_quality: u8,
    /// Worker threads for batch mode (None = rayon default)
    pub threads: Option<usize>,
    /// Extensions picked up when scanning a target directory
    pub batch_extensions: Vec<String>,
}

impl Default for TransferDefaults {
    fn default() -> Self {
        Self {
            flat_channel: FlatChannelPolicy::UnitScale,
            output_prefix: DEFAULT_OUTPUT_PREFIX.to_string(),
            jpeg_quality: DEFAULT_JPEG_QUALITY,
            threads: None,
            batch_extensions: vec!["png".into(), "jpg".into(), "jpeg".into()],
        }
    }
}

impl TransferDefaults {
    /// Clamp or replace out-of-range values, returning a warning per fix
    pub fn sanitize(&mut self) -> Vec<String> {
        let mut warnings = Vec::new();
        let fallback = Self::default();

        if self.output_prefix.trim().is_empty()
            || self.output_prefix.contains(['/', '\\'])
        {
            warnings.push(format!(
                "output_prefix {:?} is not usable; using {:?}",
                self.output_prefix, fallback.output_prefix
            ));
            self.output_prefix = fallback.output_prefix.clone();
        }

        if !(1..=100).contains(&self.jpeg_quality) {
            let clamped = self.jpeg_quality.clamp(1, 100);
            warnings.push(format!(
                "jpeg_quality {} out of range; using {}",
                self.jpeg_quality, clamped
            ));
            self.jpeg_quality = clamped;
        }

        if self.threads == Some(0) {
            warnings.push("threads = 0 ignored; using rayon default".to_string());
            self.threads = None;
        }

        let requested = std::mem::take(&mut self.batch_extensions);
        for ext in requested {
            let ext = ext.trim_start_matches('.').to_lowercase();
            if !is_supported_extension(&ext) {
                warnings.push(format!("batch extension {:?} is not supported; skipped", ext));
            } else if !self.batch_extensions.contains(&ext) {
                self.batch_extensions.push(ext);
            }
        }
        if self.batch_extensions.is_empty() {
            warnings.push("no usable batch_extensions; using defaults".to_string());
            self.batch_extensions = fallback.batch_extensions;
        }

        warnings
    }
}
