//! Image storage seams
//!
//! The transfer engine only ever sees decoded images. Loading and storing
//! go through these traits so callers can swap the filesystem for something
//! else (an in-memory store in tests, for instance).

use std::path::Path;

use crate::decoders::decode_image;
use crate::error::Result;
use crate::exporters::{export_image, ExportOptions};
use crate::models::Rgb8Image;

/// Something that can produce a decoded image for a path
pub trait ImageSource {
    /// Return the decoded image, or a typed not-found / decode error
    fn load(&self, path: &Path) -> Result<Rgb8Image>;
}

/// Something that can persist an image under a path
pub trait ImageSink {
    /// Store `image`; on error nothing is left at `path`
    fn store(&self, image: &Rgb8Image, path: &Path) -> Result<()>;
}

/// Filesystem-backed source and sink
#[derive(Debug, Clone, Copy, Default)]
pub struct FsImageStore {
    pub export: ExportOptions,
}

impl FsImageStore {
    pub fn new(export: ExportOptions) -> Self {
        Self { export }
    }
}

impl ImageSource for FsImageStore {
    fn load(&self, path: &Path) -> Result<Rgb8Image> {
        decode_image(path)
    }
}

impl ImageSink for FsImageStore {
    fn store(&self, image: &Rgb8Image, path: &Path) -> Result<()> {
        export_image(image, path, &self.export)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TransferError;
    use tempfile::tempdir;

    #[test]
    fn test_fs_store_roundtrip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("img.png");
        let store = FsImageStore::default();
        let image = Rgb8Image::filled(3, 3, [1, 2, 3]).unwrap();

        store.store(&image, &path).unwrap();
        assert_eq!(store.load(&path).unwrap(), image);
    }

    #[test]
    fn test_fs_store_missing_source() {
        let dir = tempdir().unwrap();
        let err = FsImageStore::default()
            .load(&dir.path().join("nope.jpg"))
            .unwrap_err();
        assert!(matches!(err, TransferError::NotFound { .. }));
    }
}
