//! Single-entry "keep only latest" hand-off between a frame source and
//! the analysis worker.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Condvar, Mutex, MutexGuard};
use std::time::Duration;

use crate::camera::Frame;

#[derive(Debug, Default)]
struct SlotState {
    /// Frame waiting to be analyzed
    pending: Option<Frame>,
    /// The consumer is processing a frame it took
    busy: bool,
    /// No more frames will be accepted or handed out
    closed: bool,
}

#[derive(Debug, Default)]
struct Shared {
    state: Mutex<SlotState>,
    changed: Condvar,
    dropped: AtomicU64,
}

/// Holds at most one pending frame.
///
/// Offering a frame while another is still pending replaces (and drops) the
/// older one, so the consumer always sees the newest frame and nothing
/// queues up behind a slow analysis.
#[derive(Debug, Clone, Default)]
pub struct FrameSlot {
    shared: Arc<Shared>,
}

impl FrameSlot {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, SlotState> {
        self.shared
            .state
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Offer a frame. Returns `false` if the slot is closed (the frame is
    /// released immediately).
    pub fn offer(&self, frame: Frame) -> bool {
        let mut state = self.lock();
        if state.closed {
            return false;
        }
        if state.pending.replace(frame).is_some() {
            self.shared.dropped.fetch_add(1, Ordering::Relaxed);
            log::debug!("Replaced a pending frame with a newer one");
        }
        drop(state);
        self.shared.changed.notify_all();
        true
    }

    /// Take the pending frame, waiting up to `timeout` for one.
    ///
    /// Marks the consumer busy until [`FrameSlot::finish`] is called.
    /// Returns `None` on timeout or once the slot is closed.
    pub fn take_timeout(&self, timeout: Duration) -> Option<Frame> {
        let state = self.lock();
        let (mut state, _) = self
            .shared
            .changed
            .wait_timeout_while(state, timeout, |s| s.pending.is_none() && !s.closed)
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if state.closed {
            return None;
        }
        let frame = state.pending.take();
        if frame.is_some() {
            state.busy = true;
        }
        frame
    }

    /// Signal that the frame returned by the last take is fully processed.
    pub fn finish(&self) {
        self.lock().busy = false;
        self.shared.changed.notify_all();
    }

    /// Block until no frame is pending or being processed.
    pub fn wait_idle(&self) {
        let state = self.lock();
        let _idle = self
            .shared
            .changed
            .wait_while(state, |s| !s.closed && (s.pending.is_some() || s.busy))
            .unwrap_or_else(|poisoned| poisoned.into_inner());
    }

    /// Stop accepting frames and wake every waiter. A pending frame is
    /// released unprocessed.
    pub fn close(&self) {
        let mut state = self.lock();
        state.closed = true;
        state.pending = None;
        drop(state);
        self.shared.changed.notify_all();
    }

    pub fn is_closed(&self) -> bool {
        self.lock().closed
    }

    /// Frames replaced before the consumer got to them.
    pub fn dropped(&self) -> u64 {
        self.shared.dropped.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::solid_frame;

    fn frame(value: u8) -> Frame {
        solid_frame(2, 2, [value, value, value]).unwrap()
    }

    #[test]
    fn test_keeps_only_latest() {
        let slot = FrameSlot::new();
        assert!(slot.offer(frame(10)));
        assert!(slot.offer(frame(20)));
        assert!(slot.offer(frame(30)));
        assert_eq!(slot.dropped(), 2);

        let taken = slot.take_timeout(Duration::from_millis(10)).unwrap();
        let expected = frame(30);
        assert_eq!(taken.plane(0), expected.plane(0));
        assert!(slot.take_timeout(Duration::from_millis(10)).is_none());
    }

    #[test]
    fn test_take_times_out_when_empty() {
        let slot = FrameSlot::new();
        assert!(slot.take_timeout(Duration::from_millis(5)).is_none());
    }

    #[test]
    fn test_closed_slot_rejects_frames() {
        let slot = FrameSlot::new();
        slot.offer(frame(1));
        slot.close();
        assert!(slot.is_closed());
        assert!(!slot.offer(frame(2)));
        assert!(slot.take_timeout(Duration::from_millis(5)).is_none());
    }

    #[test]
    fn test_wait_idle_returns_after_finish() {
        let slot = FrameSlot::new();
        slot.offer(frame(1));

        let consumer = slot.clone();
        let handle = std::thread::spawn(move || {
            let frame = consumer.take_timeout(Duration::from_secs(5));
            assert!(frame.is_some());
            std::thread::sleep(Duration::from_millis(20));
            consumer.finish();
        });

        slot.wait_idle();
        handle.join().unwrap();
        assert!(slot.take_timeout(Duration::from_millis(5)).is_none());
    }

    #[test]
    fn test_take_wakes_on_offer() {
        let slot = FrameSlot::new();
        let producer = slot.clone();
        let handle = std::thread::spawn(move || {
            std::thread::sleep(Duration::from_millis(20));
            producer.offer(frame(5));
        });
        assert!(slot.take_timeout(Duration::from_secs(5)).is_some());
        handle.join().unwrap();
    }
}
