//! Camera frame model.
//!
//! The camera itself is an external collaborator. This module defines what
//! it hands over:
//! - Frames and their pixel formats via [`Frame`] and [`FrameFormat`]
//! - Layout validation errors via [`FrameError`]
//! - NV21 helpers for raw sources and synthetic frames

mod frame_utils;
mod types;

pub use frame_utils::{nv21_len, rgb_to_nv21, solid_frame, split_nv21};
pub use types::{Frame, FrameError, FrameFormat};
