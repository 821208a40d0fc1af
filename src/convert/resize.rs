//! Bilinear resizing between RGB buffers.

use crate::rgb::{RgbBuffer, CHANNELS};

/// Resize `src` into `dst` using bilinear interpolation.
///
/// `dst` keeps its current dimensions; size it first with
/// [`RgbBuffer::ensure_dimensions`]. Sample positions use pixel centers, so
/// an identity resize is an exact copy.
pub fn resize_bilinear_into(src: &RgbBuffer, dst: &mut RgbBuffer) {
    if dst.is_empty() || src.is_empty() {
        return;
    }
    if src.rows() == dst.rows() && src.cols() == dst.cols() {
        dst.as_bytes_mut().copy_from_slice(src.as_bytes());
        return;
    }

    let x_taps = taps(src.cols(), dst.cols());
    let y_taps = taps(src.rows(), dst.rows());
    let src_cols = src.cols();
    let src_bytes = src.as_bytes();
    let dst_cols = dst.cols();
    let out = dst.as_bytes_mut();

    for (row, &(y0, y1, wy)) in y_taps.iter().enumerate() {
        let top = &src_bytes[y0 * src_cols * CHANNELS..(y0 + 1) * src_cols * CHANNELS];
        let bottom = &src_bytes[y1 * src_cols * CHANNELS..(y1 + 1) * src_cols * CHANNELS];
        let out_row = &mut out[row * dst_cols * CHANNELS..(row + 1) * dst_cols * CHANNELS];

        for (px, &(x0, x1, wx)) in out_row.chunks_exact_mut(CHANNELS).zip(&x_taps) {
            for c in 0..CHANNELS {
                let tl = f32::from(top[x0 * CHANNELS + c]);
                let tr = f32::from(top[x1 * CHANNELS + c]);
                let bl = f32::from(bottom[x0 * CHANNELS + c]);
                let br = f32::from(bottom[x1 * CHANNELS + c]);
                let upper = tl + (tr - tl) * wx;
                let lower = bl + (br - bl) * wx;
                let value = upper + (lower - upper) * wy;
                px[c] = value.round().clamp(0.0, 255.0) as u8;
            }
        }
    }
}

/// Source indices and weight for each destination coordinate.
fn taps(src_len: usize, dst_len: usize) -> Vec<(usize, usize, f32)> {
    let scale = src_len as f32 / dst_len as f32;
    let last = src_len - 1;
    (0..dst_len)
        .map(|i| {
            let pos = ((i as f32 + 0.5) * scale - 0.5).max(0.0);
            let i0 = (pos.floor() as usize).min(last);
            let i1 = (i0 + 1).min(last);
            let weight = if i1 == i0 { 0.0 } else { pos - i0 as f32 };
            (i0, i1, weight)
        })
        .collect()
}
