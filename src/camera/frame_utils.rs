//! Frame construction helpers for semi-planar (NV21) sources.

use super::types::{Frame, FrameError, FrameFormat};
use crate::rgb::RgbBuffer;

/// Number of bytes in an NV21 image of `width x height` luma samples.
pub fn nv21_len(width: u32, height: u32) -> usize {
    let pixels = width as usize * height as usize;
    pixels + pixels / 2
}

/// Present a contiguous NV21 buffer as a three-plane [`Frame`].
///
/// Camera drivers hand out semi-planar chroma as two overlapping plane
/// views over the same interleaved V/U block: plane 1 starts at the first U
/// sample and plane 2 at the first V sample, each one byte shorter than the
/// block. This reproduces that layout.
///
/// # Errors
/// * `FrameError::ZeroDimensions` / `FrameError::OddDimensions` - Bad size
/// * `FrameError::DataSize` - If `nv21` is not exactly [`nv21_len`] bytes
pub fn split_nv21(width: u32, height: u32, nv21: &[u8]) -> Result<Frame, FrameError> {
    check_even(width, height)?;
    let expected = nv21_len(width, height);
    if nv21.len() != expected {
        return Err(FrameError::DataSize {
            expected,
            actual: nv21.len(),
        });
    }

    let luma_len = width as usize * height as usize;
    let (luma, chroma) = nv21.split_at(luma_len);
    let u_view = chroma[1..].to_vec();
    let v_view = chroma[..chroma.len() - 1].to_vec();

    Frame::new(FrameFormat::Yuv420, width, height, vec![luma.to_vec(), u_view, v_view])
}

/// Encode an RGB buffer as NV21 using BT.601 limited-range coefficients.
///
/// Chroma is the average of each 2x2 block. Used to synthesize frames.
///
/// # Errors
/// * `FrameError::ZeroDimensions` / `FrameError::OddDimensions` - Bad size
pub fn rgb_to_nv21(rgb: &RgbBuffer) -> Result<Vec<u8>, FrameError> {
    let width = rgb.cols() as u32;
    let height = rgb.rows() as u32;
    check_even(width, height)?;

    let (rows, cols) = (rgb.rows(), rgb.cols());
    let mut out = vec![0u8; nv21_len(width, height)];

    for row in 0..rows {
        for col in 0..cols {
            let [r, g, b] = rgb.pixel(row, col).map(i32::from);
            let y = ((66 * r + 129 * g + 25 * b + 128) >> 8) + 16;
            out[row * cols + col] = y.clamp(0, 255) as u8;
        }
    }

    let chroma = &mut out[rows * cols..];
    for block_row in 0..rows / 2 {
        for block_col in 0..cols / 2 {
            let mut sum = [0i32; 3];
            for (dr, dc) in [(0, 0), (0, 1), (1, 0), (1, 1)] {
                let px = rgb.pixel(2 * block_row + dr, 2 * block_col + dc);
                for (acc, value) in sum.iter_mut().zip(px) {
                    *acc += i32::from(value);
                }
            }
            let [r, g, b] = sum.map(|s| (s + 2) / 4);
            let u = ((-38 * r - 74 * g + 112 * b + 128) >> 8) + 128;
            let v = ((112 * r - 94 * g - 18 * b + 128) >> 8) + 128;

            let i = 2 * (block_row * (cols / 2) + block_col);
            chroma[i] = v.clamp(0, 255) as u8;
            chroma[i + 1] = u.clamp(0, 255) as u8;
        }
    }

    Ok(out)
}

/// Build a uniformly colored YUV 4:2:0 frame.
pub fn solid_frame(width: u32, height: u32, rgb: [u8; 3]) -> Result<Frame, FrameError> {
    check_even(width, height)?;
    let mut buffer = RgbBuffer::new(height as usize, width as usize);
    buffer.fill(rgb);
    let nv21 = rgb_to_nv21(&buffer)?;
    split_nv21(width, height, &nv21)
}

fn check_even(width: u32, height: u32) -> Result<(), FrameError> {
    if width == 0 || height == 0 {
        return Err(FrameError::ZeroDimensions { width, height });
    }
    if width % 2 != 0 || height % 2 != 0 {
        return Err(FrameError::OddDimensions {
            format: FrameFormat::Yuv420,
            width,
            height,
        });
    }
    Ok(())
}
