//! Semi-planar YUV 4:2:0 (NV21) to RGB conversion.

use super::UnsupportedFormat;
use crate::camera::{nv21_len, Frame, FrameFormat};
use crate::rgb::RgbBuffer;

// BT.601 limited-range coefficients in 20-bit fixed point.
const SHIFT: u32 = 20;
const HALF: i32 = 1 << (SHIFT - 1);
const CY: i32 = 1_220_542;
const CUB: i32 = 2_116_026;
const CUG: i32 = -409_993;
const CVG: i32 = -852_492;
const CVR: i32 = 1_673_527;

/// Converts camera frames into an RGB buffer.
///
/// Holds the scratch buffer the planes are assembled into so repeated
/// conversions do not allocate.
#[derive(Debug, Default)]
pub struct Nv21Converter {
    scratch: Vec<u8>,
}

impl Nv21Converter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Convert `frame` into `dst`, resizing `dst` if the frame size changed.
    ///
    /// The luma plane is followed by the second chroma plane and then the
    /// first: the source delivers V/U interleaved chroma with the plane
    /// views swapped, and only this order yields NV21.
    ///
    /// # Arguments
    /// * `frame` - Camera frame whose planes were validated at construction
    /// * `dst` - Output buffer, reused across calls
    ///
    /// # Example
    /// ```ignore
    /// let mut converter = Nv21Converter::new();
    /// let mut rgb = RgbBuffer::default();
    /// converter.convert(&frame, &mut rgb)?;
    /// assert_eq!((rgb.rows(), rgb.cols()), (480, 640));
    /// ```
    ///
    /// # Errors
    /// * `UnsupportedFormat` - If the frame is not [`FrameFormat::Yuv420`]
    pub fn convert(&mut self, frame: &Frame, dst: &mut RgbBuffer) -> Result<(), UnsupportedFormat> {
        if frame.format() != FrameFormat::Yuv420 {
            return Err(UnsupportedFormat(frame.format()));
        }

        let luma = frame.plane(0);
        let first_chroma = frame.plane(1);
        let second_chroma = frame.plane(2);

        self.scratch.clear();
        self.scratch
            .reserve(luma.len() + first_chroma.len() + second_chroma.len());
        self.scratch.extend_from_slice(luma);
        self.scratch.extend_from_slice(second_chroma);
        self.scratch.extend_from_slice(first_chroma);

        let rows = frame.height() as usize;
        let cols = frame.width() as usize;
        if dst.ensure_dimensions(rows, cols) {
            log::info!("Allocated {}x{} RGB conversion buffer", cols, rows);
        }

        let used = nv21_len(frame.width(), frame.height());
        nv21_to_rgb(&self.scratch[..used], rows, cols, dst.as_bytes_mut());
        Ok(())
    }
}

/// Convert an NV21 image (`rows * 1.5` lines of `cols` bytes) to interleaved RGB.
///
/// `nv21` must hold `rows * cols * 3 / 2` bytes and `out` `rows * cols * 3`.
pub fn nv21_to_rgb(nv21: &[u8], rows: usize, cols: usize, out: &mut [u8]) {
    let (luma, chroma) = nv21.split_at(rows * cols);

    for row in 0..rows {
        let chroma_row = &chroma[(row / 2) * cols..(row / 2) * cols + cols];
        let luma_row = &luma[row * cols..(row + 1) * cols];
        let out_row = &mut out[row * cols * 3..(row + 1) * cols * 3];

        for (col, (&y, px)) in luma_row.iter().zip(out_row.chunks_exact_mut(3)).enumerate() {
            let pair = col & !1;
            let v = chroma_row[pair];
            let u = chroma_row[pair + 1];
            px.copy_from_slice(&yuv_to_rgb(y, u, v));
        }
    }
}

/// Convert one limited-range YUV sample to RGB.
#[inline]
pub fn yuv_to_rgb(y: u8, u: u8, v: u8) -> [u8; 3] {
    let y = (i32::from(y) - 16).max(0) * CY;
    let u = i32::from(u) - 128;
    let v = i32::from(v) - 128;

    let r = (y + CVR * v + HALF) >> SHIFT;
    let g = (y + CVG * v + CUG * u + HALF) >> SHIFT;
    let b = (y + CUB * u + HALF) >> SHIFT;

    [clamp_u8(r), clamp_u8(g), clamp_u8(b)]
}

#[inline]
fn clamp_u8(value: i32) -> u8 {
    value.clamp(0, 255) as u8
}
