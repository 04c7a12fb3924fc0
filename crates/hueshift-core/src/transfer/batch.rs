//! One source, many targets

use rayon::prelude::*;

use super::{ColorTransfer, TransferOptions};
use crate::error::Result;
use crate::models::Rgb8Image;

/// Transfer `source` onto every image in `targets` in parallel
///
/// Results keep the order of `targets`. Each target is normalized with its
/// own statistics and its own LAB buffer.
pub fn transfer_batch(
    source: &Rgb8Image,
    targets: &[Rgb8Image],
    options: &TransferOptions,
) -> Vec<Result<Rgb8Image>> {
    let engine = ColorTransfer::from_source(source, *options);
    targets.par_iter().map(|t| engine.apply(t)).collect()
}
