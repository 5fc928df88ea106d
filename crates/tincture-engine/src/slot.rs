//! Single-slot, latest-wins frame handoff.
//!
//! The tick loop publishes each rendered [`Frame`] into a [`FrameSlot`];
//! display threads read whatever is newest. A publish replaces the previous
//! frame outright, so frames never queue and a slow reader only ever misses
//! frames, never stalls the producer.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use tincture_render::Frame;

/// Latest-wins holder of the most recent frame.
///
/// Single-producer: only the tick loop calls [`publish`](Self::publish).
/// Multi-consumer: any thread may call [`latest`](Self::latest). The lock is
/// held only long enough to swap or clone an `Arc`, never while rendering.
#[derive(Debug, Default)]
pub struct FrameSlot {
    latest: Mutex<Option<Arc<Frame>>>,
    published: AtomicU64,
}

// Compile-time assertion: FrameSlot must be Send + Sync.
const _: fn() = || {
    fn assert<T: Send + Sync>() {}
    assert::<FrameSlot>();
};

impl FrameSlot {
    /// An empty slot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the held frame with `fresh`.
    ///
    /// Returns the displaced frame if nobody else still holds it, so the
    /// producer can render into it next time instead of allocating.
    pub fn publish(&self, fresh: Arc<Frame>) -> Option<Frame> {
        let evicted = {
            let mut slot = self.latest.lock().unwrap_or_else(PoisonError::into_inner);
            slot.replace(fresh)
        };
        // Release-store ensures the frame is visible before the count moves.
        self.published.fetch_add(1, Ordering::Release);
        evicted.and_then(|arc| Arc::try_unwrap(arc).ok())
    }

    /// The most recently published frame, or `None` before the first publish.
    pub fn latest(&self) -> Option<Arc<Frame>> {
        self.latest
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .map(Arc::clone)
    }

    /// Number of frames published so far.
    pub fn published(&self) -> u64 {
        self.published.load(Ordering::Acquire)
    }

    /// Whether nothing has been published yet.
    pub fn is_empty(&self) -> bool {
        self.published() == 0
    }
}
