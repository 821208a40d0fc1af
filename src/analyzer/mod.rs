//! Frame analysis pipeline.
//!
//! - [`Analyzer`] runs one frame through conversion, resize, sampling,
//!   marker drawing and classification, reusing its buffers
//! - [`FrameSink`] is the display collaborator that receives results
//! - [`FrameSlot`] and [`AnalysisWorker`] run the analyzer on a background
//!   thread, always on the newest frame

mod pipeline;
mod sink;
mod slot;
mod types;
mod worker;

pub use pipeline::Analyzer;
pub use sink::{FrameSink, TextSink};
pub use slot::FrameSlot;
pub use types::{AnalysisError, AnalyzerSettings, ColorReport, DEFAULT_SQUARE_SIZE};
pub use worker::{AnalysisWorker, WorkerStats};
