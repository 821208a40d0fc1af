//! Output side of the pipeline: whoever displays frames and results.

use std::io::Write;

use super::types::{AnalysisError, ColorReport};
use crate::color::NameTable;
use crate::rgb::RgbBuffer;

/// Receives the outcome of each analyzed frame.
///
/// For a successful frame `display_frame` is called with the annotated
/// image, then `display_report`. A rejected frame only gets
/// `display_error`.
pub trait FrameSink {
    fn display_frame(&mut self, _frame: &RgbBuffer) {}

    fn display_report(&mut self, report: &ColorReport);

    fn display_error(&mut self, error: &AnalysisError);
}

impl<S: FrameSink + ?Sized> FrameSink for Box<S> {
    fn display_frame(&mut self, frame: &RgbBuffer) {
        (**self).display_frame(frame)
    }

    fn display_report(&mut self, report: &ColorReport) {
        (**self).display_report(report)
    }

    fn display_error(&mut self, error: &AnalysisError) {
        (**self).display_error(error)
    }
}

/// Writes one line per frame to any writer, names resolved per locale.
pub struct TextSink<W: Write> {
    out: W,
    names: NameTable,
}

impl<W: Write> TextSink<W> {
    pub fn new(out: W, names: NameTable) -> Self {
        Self { out, names }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> FrameSink for TextSink<W> {
    fn display_report(&mut self, report: &ColorReport) {
        if let Err(e) = writeln!(self.out, "{}", report.describe(&self.names)) {
            log::warn!("Failed to write report: {}", e);
        }
    }

    fn display_error(&mut self, error: &AnalysisError) {
        if let Err(e) = writeln!(self.out, "{}", error.display_message(&self.names)) {
            log::warn!("Failed to write error: {}", e);
        }
    }
}
