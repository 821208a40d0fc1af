//! Center-window sampling and marker overlay.
//!
//! Both operations work on the same square window centered on the image:
//! the center is `(rows / 2, cols / 2)` and the top-left corner sits
//! `(size - 1) / 2` pixels up and left of it.

use std::fmt;
use std::ops::Range;

use crate::color::Color;
use crate::rgb::RgbBuffer;

/// Side length of the sampling window. Always odd and non-zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WindowSize(usize);

impl WindowSize {
    /// The window the analyzer uses unless configured otherwise.
    pub const DEFAULT: WindowSize = WindowSize(7);

    /// Returns `None` for zero or even sizes.
    pub fn new(size: usize) -> Option<Self> {
        (size % 2 == 1).then_some(Self(size))
    }

    pub fn get(self) -> usize {
        self.0
    }
}

impl Default for WindowSize {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for WindowSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A square window placed on a concrete image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    top: usize,
    left: usize,
    size: usize,
}

impl Window {
    /// Center a window of `size` on a `rows x cols` image.
    ///
    /// Returns `None` when the window does not fit inside the image.
    pub fn centered(rows: usize, cols: usize, size: WindowSize) -> Option<Self> {
        let size = size.get();
        let half = (size - 1) / 2;
        let top = (rows / 2).checked_sub(half)?;
        let left = (cols / 2).checked_sub(half)?;
        if top + size > rows || left + size > cols {
            return None;
        }
        Some(Self { top, left, size })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn rows(&self) -> Range<usize> {
        self.top..self.top + self.size
    }

    pub fn cols(&self) -> Range<usize> {
        self.left..self.left + self.size
    }

    /// Distance from the nearest window edge: 0 on the outer ring.
    fn ring(&self, row: usize, col: usize) -> usize {
        let last = self.size - 1;
        let (r, c) = (row - self.top, col - self.left);
        r.min(last - r).min(c).min(last - c)
    }
}

/// Average the window into `color`.
///
/// `color` is reset to black before accumulation and ends up holding the
/// per-channel integer mean (remainders are truncated). Sums are 64-bit, so
/// any window that fits in memory is safe.
///
/// # Arguments
/// * `rgb` - Image to sample; the window must lie inside it
/// * `window` - Placement from [`Window::centered`]
/// * `color` - Long-lived accumulator, overwritten
///
/// # Example
/// ```ignore
/// let window = Window::centered(rgb.rows(), rgb.cols(), WindowSize::DEFAULT).unwrap();
/// sample_mean_into(&rgb, &window, &mut color);
/// ```
pub fn sample_mean_into(rgb: &RgbBuffer, window: &Window, color: &mut Color) {
    color.set_black();

    let mut sum = [0u64; 3];
    for row in window.rows() {
        for col in window.cols() {
            for (acc, value) in sum.iter_mut().zip(rgb.pixel(row, col)) {
                *acc += u64::from(value);
            }
        }
    }

    let count = (window.size() as u64) * (window.size() as u64);
    let [r, g, b] = sum.map(|total| (total / count) as u8);
    color.set_rgb(r, g, b);
}

/// Mean color of the window.
pub fn sample_mean(rgb: &RgbBuffer, window: &Window) -> Color {
    let mut color = Color::BLACK;
    sample_mean_into(rgb, window, &mut color);
    color
}

/// Paint the marker square over the window.
///
/// The outer ring is black, the ring inside it white and everything else
/// `fill`. A pixel belongs to the outermost ring it touches, so on windows
/// smaller than 5 the fill disappears and on size 1 only black remains.
///
/// # Arguments
/// * `rgb` - Image to annotate in place
/// * `window` - The window that was sampled
/// * `fill` - Color for the interior, normally the sampled mean
///
/// # Example
/// ```ignore
/// let mean = sample_mean(&rgb, &window);
/// draw_marker(&mut rgb, &window, mean);
/// assert_eq!(rgb.pixel(window.rows().start, window.cols().start), [0, 0, 0]);
/// ```
pub fn draw_marker(rgb: &mut RgbBuffer, window: &Window, fill: Color) {
    for row in window.rows() {
        for col in window.cols() {
            let px = match window.ring(row, col) {
                0 => Color::BLACK,
                1 => Color::WHITE,
                _ => fill,
            };
            rgb.set_pixel(row, col, px.to_array());
        }
    }
}
