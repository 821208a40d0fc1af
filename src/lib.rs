//! color-namer library crate.
//!
//! Samples the center of a camera frame, averages it into one color and
//! names that color. The binary drives it from raw NV21 streams, image
//! files and synthetic sweeps; the modules are public for integration
//! testing and embedding.

pub mod analyzer;
pub mod camera;
pub mod color;
pub mod config;
pub mod convert;
pub mod rgb;
pub mod sampler;
