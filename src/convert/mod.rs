//! Pixel format conversion.
//!
//! 1. **YUV 4:2:0 to RGB** - [`Nv21Converter`] assembles the frame planes
//!    into NV21 and applies the BT.601 transform
//! 2. **Resize** - [`resize_bilinear_into`] scales the RGB frame into the
//!    fixed-size analysis buffer

mod resize;
mod yuv;

use thiserror::Error;

use crate::camera::FrameFormat;

pub use resize::resize_bilinear_into;
pub use yuv::{nv21_to_rgb, yuv_to_rgb, Nv21Converter};

/// The frame is not in the one encoding the converter decodes.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("Unsupported frame format: {0}")]
pub struct UnsupportedFormat(pub FrameFormat);
