//! Camera frame types and data structures.

use std::fmt;
use std::time::Instant;

use thiserror::Error;

/// Pixel format of a frame handed over by the frame source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameFormat {
    /// 4:2:0 luma/chroma: full-resolution Y plane plus two chroma planes
    /// at half horizontal and vertical resolution. The only format the
    /// analyzer accepts.
    Yuv420,
    /// Interleaved RGB (3 bytes per pixel, one plane)
    Rgb,
    /// Packed 4:2:2 YUYV (one plane)
    Yuyv,
    /// Compressed JPEG bitstream (one plane)
    Jpeg,
}

impl FrameFormat {
    /// Number of planes a well-formed frame of this format carries.
    pub fn plane_count(self) -> usize {
        match self {
            FrameFormat::Yuv420 => 3,
            FrameFormat::Rgb | FrameFormat::Yuyv | FrameFormat::Jpeg => 1,
        }
    }
}

impl fmt::Display for FrameFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FrameFormat::Yuv420 => "YUV 4:2:0",
            FrameFormat::Rgb => "RGB",
            FrameFormat::Yuyv => "YUYV",
            FrameFormat::Jpeg => "JPEG",
        };
        f.write_str(name)
    }
}

/// Errors raised when a frame or pixel buffer is built from bad data.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FrameError {
    #[error("Frame dimensions must be non-zero, got {width}x{height}")]
    ZeroDimensions { width: u32, height: u32 },

    #[error("{format} frames need even dimensions, got {width}x{height}")]
    OddDimensions {
        format: FrameFormat,
        width: u32,
        height: u32,
    },

    #[error("{format} frames carry {expected} plane(s), got {actual}")]
    PlaneCount {
        format: FrameFormat,
        expected: usize,
        actual: usize,
    },

    #[error("Plane {index} is {actual} bytes, expected {expected}")]
    PlaneSize {
        index: usize,
        expected: usize,
        actual: usize,
    },

    #[error("Chroma planes hold {actual} bytes, need at least {expected}")]
    ChromaTooShort { expected: usize, actual: usize },

    #[error("Pixel data is {actual} bytes, expected {expected}")]
    DataSize { expected: usize, actual: usize },
}

/// A frame delivered by the camera (or any other frame source).
///
/// Construction validates plane layout so that downstream stages can index
/// planes without re-checking.
#[derive(Debug, Clone)]
pub struct Frame {
    width: u32,
    height: u32,
    format: FrameFormat,
    planes: Vec<Vec<u8>>,
    /// When the source produced the frame
    timestamp: Instant,
}

impl Frame {
    /// Build a frame from its planes.
    ///
    /// For [`FrameFormat::Yuv420`] the planes are, in order: luma (exactly
    /// `width * height` bytes), the first chroma plane and the second chroma
    /// plane. The two chroma planes together must hold at least
    /// `width * height / 2` bytes, which is what a semi-planar chroma block
    /// needs.
    ///
    /// # Errors
    /// Returns a [`FrameError`] describing the first layout violation.
    pub fn new(
        format: FrameFormat,
        width: u32,
        height: u32,
        planes: Vec<Vec<u8>>,
    ) -> Result<Self, FrameError> {
        if width == 0 || height == 0 {
            return Err(FrameError::ZeroDimensions { width, height });
        }
        if planes.len() != format.plane_count() {
            return Err(FrameError::PlaneCount {
                format,
                expected: format.plane_count(),
                actual: planes.len(),
            });
        }

        let pixels = width as usize * height as usize;
        match format {
            FrameFormat::Yuv420 => {
                if width % 2 != 0 || height % 2 != 0 {
                    return Err(FrameError::OddDimensions {
                        format,
                        width,
                        height,
                    });
                }
                if planes[0].len() != pixels {
                    return Err(FrameError::PlaneSize {
                        index: 0,
                        expected: pixels,
                        actual: planes[0].len(),
                    });
                }
                let chroma = planes[1].len() + planes[2].len();
                if chroma < pixels / 2 {
                    return Err(FrameError::ChromaTooShort {
                        expected: pixels / 2,
                        actual: chroma,
                    });
                }
            }
            FrameFormat::Rgb => {
                if planes[0].len() != 3 * pixels {
                    return Err(FrameError::PlaneSize {
                        index: 0,
                        expected: 3 * pixels,
                        actual: planes[0].len(),
                    });
                }
            }
            // Not decoded here; only the plane count is checked.
            FrameFormat::Yuyv | FrameFormat::Jpeg => {}
        }

        Ok(Self {
            width,
            height,
            format,
            planes,
            timestamp: Instant::now(),
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn format(&self) -> FrameFormat {
        self.format
    }

    /// Borrow plane `index`. Panics if the index is out of range.
    pub fn plane(&self, index: usize) -> &[u8] {
        &self.planes[index]
    }

    /// When the frame was produced.
    pub fn timestamp(&self) -> Instant {
        self.timestamp
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn yuv_planes(width: usize, height: usize) -> Vec<Vec<u8>> {
        let chroma = width * height / 2;
        vec![
            vec![16; width * height],
            vec![128; chroma - 1],
            vec![128; chroma - 1],
        ]
    }

    #[test]
    fn test_yuv420_frame_accepts_overlapping_chroma_planes() {
        let frame = Frame::new(FrameFormat::Yuv420, 4, 2, yuv_planes(4, 2)).unwrap();
        assert_eq!(frame.width(), 4);
        assert_eq!(frame.height(), 2);
        assert_eq!(frame.plane(1).len(), 3);
    }

    #[test]
    fn test_timestamp_is_taken_at_construction() {
        let before = Instant::now();
        let frame = Frame::new(FrameFormat::Yuv420, 4, 2, yuv_planes(4, 2)).unwrap();
        assert!(frame.timestamp() >= before);
        assert!(frame.timestamp() <= Instant::now());
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        let err = Frame::new(FrameFormat::Yuv420, 0, 2, yuv_planes(0, 2)).unwrap_err();
        assert_eq!(err, FrameError::ZeroDimensions { width: 0, height: 2 });
    }

    #[test]
    fn test_odd_dimensions_rejected_for_yuv() {
        let planes = vec![vec![0; 9], vec![0; 4], vec![0; 4]];
        let err = Frame::new(FrameFormat::Yuv420, 3, 3, planes).unwrap_err();
        assert!(matches!(err, FrameError::OddDimensions { .. }));
    }

    #[test]
    fn test_wrong_plane_count_rejected() {
        let err = Frame::new(FrameFormat::Yuv420, 2, 2, vec![vec![0; 4]]).unwrap_err();
        assert_eq!(
            err,
            FrameError::PlaneCount {
                format: FrameFormat::Yuv420,
                expected: 3,
                actual: 1
            }
        );
    }

    #[test]
    fn test_luma_size_mismatch_rejected() {
        let planes = vec![vec![0; 7], vec![0; 2], vec![0; 2]];
        let err = Frame::new(FrameFormat::Yuv420, 4, 2, planes).unwrap_err();
        assert!(matches!(err, FrameError::PlaneSize { index: 0, .. }));
    }

    #[test]
    fn test_short_chroma_rejected() {
        let planes = vec![vec![0; 8], vec![0; 1], vec![0; 2]];
        let err = Frame::new(FrameFormat::Yuv420, 4, 2, planes).unwrap_err();
        assert_eq!(
            err,
            FrameError::ChromaTooShort {
                expected: 4,
                actual: 3
            }
        );
    }

    #[test]
    fn test_rgb_frame_size_checked() {
        assert!(Frame::new(FrameFormat::Rgb, 2, 1, vec![vec![0; 6]]).is_ok());
        assert!(Frame::new(FrameFormat::Rgb, 2, 1, vec![vec![0; 5]]).is_err());
    }

    #[test]
    fn test_format_display() {
        assert_eq!(format!("{}", FrameFormat::Yuv420), "YUV 4:2:0");
        assert_eq!(format!("{}", FrameFormat::Jpeg), "JPEG");
    }

    #[test]
    fn test_frame_error_display() {
        let err = FrameError::PlaneSize {
            index: 0,
            expected: 8,
            actual: 7,
        };
        assert_eq!(format!("{}", err), "Plane 0 is 7 bytes, expected 8");
    }
}
