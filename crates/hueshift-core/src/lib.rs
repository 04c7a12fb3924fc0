//! Hueshift Core Library
//!
//! Statistical color transfer: recolors a target image so that the mean and
//! spread of each CIE Lab channel match those of a source image.

pub mod color;
pub mod config;
pub mod decoders;
pub mod error;
pub mod exporters;
pub mod io;
pub mod models;
pub mod stats;
pub mod transfer;

// Re-export commonly used types
pub use color::{Lab, LabChannel, LabImage};
pub use error::{Result, TransferError};
pub use models::Rgb8Image;
pub use stats::{ChannelStats, LabStats};
pub use transfer::{
    transfer, transfer_batch, ColorTransfer, FlatChannelPolicy, TransferOptions, TransferReport,
};
