//! Background analysis thread.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use super::pipeline::Analyzer;
use super::sink::FrameSink;
use super::slot::FrameSlot;
use crate::camera::Frame;

/// How long the worker waits for a frame before re-checking the stop flag.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Frame counters for a worker.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WorkerStats {
    /// Frames analyzed successfully
    pub analyzed: u64,
    /// Frames rejected (unsupported format, too small)
    pub rejected: u64,
    /// Frames replaced by a newer one before analysis
    pub dropped: u64,
}

#[derive(Debug, Default)]
struct Counters {
    analyzed: AtomicU64,
    rejected: AtomicU64,
}

/// Analysis worker handle.
///
/// Owns a background thread that repeatedly takes the newest frame from
/// its [`FrameSlot`], runs it through an [`Analyzer`] and reports to a
/// [`FrameSink`]. Exactly one frame is in flight at a time; frames offered
/// meanwhile replace each other in the slot.
pub struct AnalysisWorker {
    slot: FrameSlot,
    thread: Option<JoinHandle<()>>,
    stop_signal: Arc<AtomicBool>,
    counters: Arc<Counters>,
}

impl std::fmt::Debug for AnalysisWorker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnalysisWorker")
            .field("is_running", &self.is_running())
            .field("stats", &self.stats())
            .finish_non_exhaustive()
    }
}

impl AnalysisWorker {
    /// Start the worker thread.
    pub fn spawn<S>(analyzer: Analyzer, sink: S) -> Self
    where
        S: FrameSink + Send + 'static,
    {
        let slot = FrameSlot::new();
        let stop_signal = Arc::new(AtomicBool::new(false));
        let counters = Arc::new(Counters::default());

        log::info!(
            "Starting analysis worker ({}px window, resize {:?})",
            analyzer.settings().window,
            analyzer.settings().square_size
        );

        let thread_slot = slot.clone();
        let stop = Arc::clone(&stop_signal);
        let thread_counters = Arc::clone(&counters);
        let handle = thread::spawn(move || {
            run_analysis_loop(analyzer, sink, thread_slot, stop, thread_counters);
        });

        Self {
            slot,
            thread: Some(handle),
            stop_signal,
            counters,
        }
    }

    /// Hand a frame to the worker, replacing any frame still waiting.
    ///
    /// Returns `false` if the worker has been stopped.
    pub fn submit(&self, frame: Frame) -> bool {
        self.slot.offer(frame)
    }

    /// Block until the worker has nothing pending or in progress.
    pub fn wait_idle(&self) {
        self.slot.wait_idle();
    }

    /// The slot frames are delivered through, for sources on other threads.
    pub fn slot(&self) -> FrameSlot {
        self.slot.clone()
    }

    pub fn stats(&self) -> WorkerStats {
        WorkerStats {
            analyzed: self.counters.analyzed.load(Ordering::Relaxed),
            rejected: self.counters.rejected.load(Ordering::Relaxed),
            dropped: self.slot.dropped(),
        }
    }

    pub fn is_running(&self) -> bool {
        self.thread.as_ref().is_some_and(|h| !h.is_finished())
    }

    /// Stop the worker and wait for the thread to exit.
    ///
    /// A frame being analyzed finishes first; a frame still pending is
    /// released unprocessed.
    pub fn stop(&mut self) -> WorkerStats {
        self.stop_signal.store(true, Ordering::SeqCst);
        self.slot.close();
        if let Some(handle) = self.thread.take() {
            if handle.join().is_err() {
                log::warn!("Analysis worker panicked");
            }
            log::info!("Analysis worker stopped");
        }
        self.stats()
    }
}

impl Drop for AnalysisWorker {
    fn drop(&mut self) {
        self.stop();
    }
}

fn run_analysis_loop<S: FrameSink>(
    mut analyzer: Analyzer,
    mut sink: S,
    slot: FrameSlot,
    stop: Arc<AtomicBool>,
    counters: Arc<Counters>,
) {
    while !stop.load(Ordering::Relaxed) {
        let Some(frame) = slot.take_timeout(POLL_INTERVAL) else {
            if slot.is_closed() {
                break;
            }
            continue;
        };

        log::debug!(
            "Analyzing frame captured {}ms ago",
            frame.timestamp().elapsed().as_millis()
        );
        match analyzer.analyze(&frame) {
            Ok(report) => {
                sink.display_frame(analyzer.frame());
                sink.display_report(&report);
                counters.analyzed.fetch_add(1, Ordering::Relaxed);
            }
            Err(e) => {
                sink.display_error(&e);
                counters.rejected.fetch_add(1, Ordering::Relaxed);
            }
        }

        // Release the frame before reporting idle
        drop(frame);
        slot.finish();
    }
}
