//! Color management and transformations
//!
//! Provides sRGB <-> CIE LAB conversion for single pixels and whole images.
//! Image-level LAB samples use the 8-bit LAB encoding (L scaled to 0-255,
//! a and b offset by 128) so every channel shares the 0-255 range.

mod lab;
mod lab_image;


// Re-export primary types
pub use lab::Lab;
pub use lab_image::{LabChannel, LabImage};

// Re-export LAB functions
pub use lab::{
    decode_lab8, encode_lab8, lab_to_rgb, lab_to_srgb8, linear_to_srgb, rgb_to_lab, srgb8_to_lab,
    srgb_to_linear,
};
pub use lab_image::{to_lab, to_rgb, PARALLEL_THRESHOLD};
