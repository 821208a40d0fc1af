//! Per-frame analysis: convert, resize, sample, mark, classify.

use super::types::{AnalysisError, AnalyzerSettings, ColorReport};
use crate::camera::{Frame, FrameFormat};
use crate::color::Color;
use crate::convert::{resize_bilinear_into, Nv21Converter};
use crate::rgb::RgbBuffer;
use crate::sampler::{draw_marker, sample_mean_into, Window};

/// Runs the color pipeline on one frame at a time.
///
/// The analyzer owns every buffer the pipeline writes to and reuses them
/// across frames: buffers are only reallocated when the frame size
/// changes, and the mean color is reset rather than recreated.
#[derive(Debug)]
pub struct Analyzer {
    settings: AnalyzerSettings,
    converter: Nv21Converter,
    /// Full-size RGB conversion of the latest frame
    converted: RgbBuffer,
    /// Square analysis buffer (unused when `square_size` is `None`)
    square: RgbBuffer,
    /// Mean color of the latest frame
    color: Color,
}

impl Analyzer {
    pub fn new(settings: AnalyzerSettings) -> Self {
        Self {
            settings,
            converter: Nv21Converter::new(),
            converted: RgbBuffer::default(),
            square: RgbBuffer::default(),
            color: Color::BLACK,
        }
    }

    pub fn settings(&self) -> &AnalyzerSettings {
        &self.settings
    }

    /// Analyze a camera frame.
    ///
    /// Frames in any format other than [`FrameFormat::Yuv420`] are rejected
    /// before any buffer is touched.
    ///
    /// # Arguments
    /// * `frame` - Camera frame; borrowed only for the duration of the call
    ///
    /// # Returns
    /// The mean color of the center window with its name and readout. The
    /// annotated image is available from [`Analyzer::frame`] afterwards.
    ///
    /// # Example
    /// ```ignore
    /// let mut analyzer = Analyzer::default();
    /// let report = analyzer.analyze(&solid_frame(64, 48, [0, 255, 0])?)?;
    /// assert_eq!(report.name, ColorName::Green);
    /// ```
    ///
    /// # Errors
    /// * `AnalysisError::UnsupportedFormat` - Frame is not YUV 4:2:0
    /// * `AnalysisError::FrameTooSmall` - The sampling window does not fit
    pub fn analyze(&mut self, frame: &Frame) -> Result<ColorReport, AnalysisError> {
        if frame.format() != FrameFormat::Yuv420 {
            log::warn!("Rejecting {} frame", frame.format());
            return Err(AnalysisError::UnsupportedFormat(frame.format()));
        }

        self.converter.convert(frame, &mut self.converted)?;
        self.sample_converted()
    }

    /// Analyze an image that is already RGB, skipping conversion.
    ///
    /// # Errors
    /// * `AnalysisError::FrameTooSmall` - The image is empty or the sampling
    ///   window does not fit
    pub fn analyze_rgb(&mut self, rgb: &RgbBuffer) -> Result<ColorReport, AnalysisError> {
        // Nothing to copy or resize; the previous frame's buffers must not
        // be sampled again
        if rgb.is_empty() {
            log::warn!("Rejecting empty {}x{} image", rgb.cols(), rgb.rows());
            return Err(AnalysisError::FrameTooSmall {
                rows: rgb.rows(),
                cols: rgb.cols(),
                window: self.settings.window,
            });
        }
        if self.converted.copy_from(rgb) {
            log::info!(
                "Allocated {}x{} RGB input buffer",
                rgb.cols(),
                rgb.rows()
            );
        }
        self.sample_converted()
    }

    /// The annotated image of the latest successful analysis.
    pub fn frame(&self) -> &RgbBuffer {
        match self.settings.square_size {
            Some(_) => &self.square,
            None => &self.converted,
        }
    }

    /// Mean color of the latest successful analysis.
    pub fn color(&self) -> Color {
        self.color
    }

    fn sample_converted(&mut self) -> Result<ColorReport, AnalysisError> {
        let target = match self.settings.square_size {
            Some(side) => {
                if self.square.ensure_dimensions(side, side) {
                    log::info!("Allocated {}x{} analysis buffer", side, side);
                }
                resize_bilinear_into(&self.converted, &mut self.square);
                &mut self.square
            }
            None => &mut self.converted,
        };

        let window = Window::centered(target.rows(), target.cols(), self.settings.window).ok_or(
            AnalysisError::FrameTooSmall {
                rows: target.rows(),
                cols: target.cols(),
                window: self.settings.window,
            },
        )?;

        sample_mean_into(target, &window, &mut self.color);
        draw_marker(target, &window, self.color);

        let report = ColorReport::new(self.color);
        log::debug!(
            "Frame {}x{}: mean {} -> {}",
            target.cols(),
            target.rows(),
            self.color,
            report.name
        );
        Ok(report)
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new(AnalyzerSettings::default())
    }
}
