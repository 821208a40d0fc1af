//! Interleaved RGB pixel buffer shared by the converter, sampler and sinks.

use image::RgbImage;

/// Bytes per interleaved RGB pixel.
pub const CHANNELS: usize = 3;

/// Row-major buffer of interleaved 8-bit RGB pixels.
///
/// The backing storage always holds exactly `3 * rows * cols` bytes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RgbBuffer {
    data: Vec<u8>,
    rows: usize,
    cols: usize,
}

impl RgbBuffer {
    /// Create a black buffer of the given size.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            data: vec![0; CHANNELS * rows * cols],
            rows,
            cols,
        }
    }

    /// Copy the pixels of a decoded image.
    pub fn from_image(image: &RgbImage) -> Self {
        Self {
            data: image.as_raw().clone(),
            rows: image.height() as usize,
            cols: image.width() as usize,
        }
    }

    /// Copy the pixels into an `image` buffer (e.g. for PNG output).
    pub fn to_image(&self) -> Option<RgbImage> {
        RgbImage::from_raw(self.cols as u32, self.rows as u32, self.data.clone())
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Make the buffer `rows x cols`, reallocating only when the size changes.
    ///
    /// Returns `true` when the storage was reallocated. Pixel contents are
    /// unspecified afterwards; callers overwrite the whole buffer.
    pub fn ensure_dimensions(&mut self, rows: usize, cols: usize) -> bool {
        if self.rows == rows && self.cols == cols {
            return false;
        }
        self.data = vec![0; CHANNELS * rows * cols];
        self.rows = rows;
        self.cols = cols;
        true
    }

    /// Overwrite this buffer with the contents of `other`, resizing if needed.
    pub fn copy_from(&mut self, other: &RgbBuffer) -> bool {
        let reallocated = self.ensure_dimensions(other.rows, other.cols);
        self.data.copy_from_slice(&other.data);
        reallocated
    }

    #[inline]
    fn offset(&self, row: usize, col: usize) -> usize {
        CHANNELS * (row * self.cols + col)
    }

    /// Read one pixel. Panics if out of bounds.
    #[inline]
    pub fn pixel(&self, row: usize, col: usize) -> [u8; 3] {
        let i = self.offset(row, col);
        [self.data[i], self.data[i + 1], self.data[i + 2]]
    }

    /// Write one pixel. Panics if out of bounds.
    #[inline]
    pub fn set_pixel(&mut self, row: usize, col: usize, rgb: [u8; 3]) {
        let i = self.offset(row, col);
        self.data[i..i + CHANNELS].copy_from_slice(&rgb);
    }

    /// Set every pixel to `rgb`.
    pub fn fill(&mut self, rgb: [u8; 3]) {
        for px in self.data.chunks_exact_mut(CHANNELS) {
            px.copy_from_slice(&rgb);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_black_and_sized() {
        let buf = RgbBuffer::new(4, 5);
        assert_eq!(buf.as_bytes().len(), 3 * 4 * 5);
        assert!(buf.as_bytes().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_ensure_dimensions_reallocates_only_on_change() {
        let mut buf = RgbBuffer::default();
        assert!(buf.ensure_dimensions(10, 20));
        assert!(!buf.ensure_dimensions(10, 20));
        assert!(buf.ensure_dimensions(20, 10));
        assert_eq!(buf.as_bytes().len(), 600);
    }

    #[test]
    fn test_pixel_addressing_is_row_major() {
        let mut buf = RgbBuffer::new(2, 3);
        buf.set_pixel(1, 2, [7, 8, 9]);
        assert_eq!(&buf.as_bytes()[15..18], &[7, 8, 9]);
        assert_eq!(buf.pixel(1, 2), [7, 8, 9]);
    }

    #[test]
    fn test_image_round_trip_keeps_dimensions() {
        let mut buf = RgbBuffer::new(3, 4);
        buf.fill([1, 2, 3]);
        let image = buf.to_image().unwrap();
        assert_eq!(image.width(), 4);
        assert_eq!(image.height(), 3);
        assert_eq!(RgbBuffer::from_image(&image), buf);
    }
}
