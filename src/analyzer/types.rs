//! Analyzer settings, results and errors.

use thiserror::Error;

use crate::camera::FrameFormat;
use crate::color::{Color, ColorName, NameTable, Readout};
use crate::convert::UnsupportedFormat;
use crate::sampler::WindowSize;

/// Side of the square the frame is resized to before sampling.
pub const DEFAULT_SQUARE_SIZE: usize = 500;

/// Settings for the per-frame analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalyzerSettings {
    /// Side of the sampled (and marked) center window
    pub window: WindowSize,
    /// Resize converted frames to `n x n` before sampling; `None` keeps
    /// the frame's own size
    pub square_size: Option<usize>,
}

impl Default for AnalyzerSettings {
    fn default() -> Self {
        Self {
            window: WindowSize::DEFAULT,
            square_size: Some(DEFAULT_SQUARE_SIZE),
        }
    }
}

/// Why a frame produced no result.
///
/// All of these are per-frame: the next frame is analyzed independently.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    #[error("Unsupported frame format: {0}")]
    UnsupportedFormat(FrameFormat),

    #[error("{rows}x{cols} image is too small for a {window}px sampling window")]
    FrameTooSmall {
        rows: usize,
        cols: usize,
        window: WindowSize,
    },
}

impl From<UnsupportedFormat> for AnalysisError {
    fn from(err: UnsupportedFormat) -> Self {
        AnalysisError::UnsupportedFormat(err.0)
    }
}

impl AnalysisError {
    /// Text for the display collaborator, localized where the table has it.
    pub fn display_message(&self, names: &NameTable) -> String {
        match self {
            AnalysisError::UnsupportedFormat(_) => names.format_error().to_string(),
            other => other.to_string(),
        }
    }
}

/// Result of analyzing one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorReport {
    /// Mean color of the center window
    pub color: Color,
    /// Category of `color`
    pub name: ColorName,
    /// Formatted RGB/HSV strings
    pub readout: Readout,
}

impl ColorReport {
    pub fn new(color: Color) -> Self {
        Self {
            color,
            name: color.name(),
            readout: Readout::of(&color),
        }
    }

    /// One-line description using the localized name.
    pub fn describe(&self, names: &NameTable) -> String {
        format!("{:<8} {}", names.resolve(self.name), self.readout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Locale;

    #[test]
    fn test_default_settings() {
        let settings = AnalyzerSettings::default();
        assert_eq!(settings.window.get(), 7);
        assert_eq!(settings.square_size, Some(500));
    }

    #[test]
    fn test_report_for_pure_green() {
        let report = ColorReport::new(Color::new(0, 255, 0));
        assert_eq!(report.name, ColorName::Green);
        assert_eq!(
            report.describe(&NameTable::default()),
            "Green    RGB 000 255 000  HSV 120 100 100"
        );
        assert_eq!(
            report.describe(&NameTable::for_locale(Locale::French)),
            "Vert     RGB 000 255 000  HSV 120 100 100"
        );
    }

    #[test]
    fn test_unsupported_format_message_is_localized() {
        let err = AnalysisError::UnsupportedFormat(FrameFormat::Jpeg);
        assert_eq!(
            err.display_message(&NameTable::default()),
            "Unsupported image format"
        );
        assert_eq!(err.to_string(), "Unsupported frame format: JPEG");
    }

    #[test]
    fn test_from_unsupported_format() {
        let err: AnalysisError = UnsupportedFormat(FrameFormat::Yuyv).into();
        assert_eq!(err, AnalysisError::UnsupportedFormat(FrameFormat::Yuyv));
    }
}
