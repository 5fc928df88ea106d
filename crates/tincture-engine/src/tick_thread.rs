//! Background tick loop for the realtime controller.
//!
//! The tick thread owns [`TickEngine`] exclusively (moved in at spawn) and
//! hands it back through its `JoinHandle` on exit. Between ticks it waits on
//! a stop channel for the rest of the interval, so dropping the sender wakes
//! it immediately instead of after a full sleep.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::{Duration, Instant};

use crossbeam_channel::{Receiver, RecvTimeoutError};
use tracing::debug;

use crate::metrics::StepMetrics;
use crate::slot::FrameSlot;
use crate::tick::TickEngine;

/// Counters the tick thread updates and the controller reads.
#[derive(Debug, Default)]
pub(crate) struct TickStats {
    ticks: AtomicU64,
    last: Mutex<StepMetrics>,
}

impl TickStats {
    pub fn record(&self, metrics: &StepMetrics) {
        *self.last.lock().unwrap_or_else(PoisonError::into_inner) = metrics.clone();
        self.ticks.fetch_add(1, Ordering::Release);
    }

    pub fn ticks(&self) -> u64 {
        self.ticks.load(Ordering::Acquire)
    }

    pub fn last_metrics(&self) -> StepMetrics {
        self.last
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

/// State held by the tick thread's main loop.
pub(crate) struct TickThreadState {
    engine: TickEngine,
    slot: Arc<FrameSlot>,
    stats: Arc<TickStats>,
    stop_rx: Receiver<()>,
    tick_budget: Duration,
}

impl TickThreadState {
    pub fn new(
        engine: TickEngine,
        slot: Arc<FrameSlot>,
        stats: Arc<TickStats>,
        stop_rx: Receiver<()>,
        tick_budget: Duration,
    ) -> Self {
        Self {
            engine,
            slot,
            stats,
            stop_rx,
            tick_budget,
        }
    }

    /// Main tick loop. Runs until a stop message arrives or the sender is
    /// dropped.
    ///
    /// Consumes self and returns the `TickEngine` so that the caller can
    /// recover it via `JoinHandle<TickEngine>`.
    pub fn run(mut self) -> TickEngine {
        debug!(interval_ms = self.tick_budget.as_millis() as u64, "tick thread started");
        loop {
            let tick_start = Instant::now();

            // 1. Execute tick and publish its frame.
            self.engine.execute_tick(&self.slot);
            self.stats.record(self.engine.last_metrics());

            // 2. Wait out the remaining budget, or stop.
            let remaining = self.tick_budget.saturating_sub(tick_start.elapsed());
            match self.stop_rx.recv_timeout(remaining) {
                Err(RecvTimeoutError::Timeout) => {}
                Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
            }
        }
        debug!(tick = self.engine.current_tick().0, "tick thread exiting");
        self.engine
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SimConfig;
    use tincture_test_utils::reference_suppliers;

    fn engine() -> TickEngine {
        let config = SimConfig {
            width: 16,
            height: 16,
            seed: Some(9),
            ..SimConfig::default()
        };
        TickEngine::new(&config, &reference_suppliers()[..2]).unwrap()
    }

    #[test]
    fn stats_record_latest_metrics() {
        let stats = TickStats::default();
        let m = StepMetrics {
            total_us: 7,
            ..StepMetrics::default()
        };
        stats.record(&m);
        assert_eq!(stats.ticks(), 1);
        assert_eq!(stats.last_metrics().total_us, 7);
    }

    #[test]
    fn dropping_sender_stops_loop_and_returns_engine() {
        let slot = Arc::new(FrameSlot::new());
        let stats = Arc::new(TickStats::default());
        let (stop_tx, stop_rx) = crossbeam_channel::bounded(1);
        let state = TickThreadState::new(
            engine(),
            Arc::clone(&slot),
            Arc::clone(&stats),
            stop_rx,
            Duration::from_secs(60),
        );
        let handle = std::thread::spawn(move || state.run());

        // The first tick runs immediately; wait for it, then stop during the
        // long budget wait. The join must not take anywhere near 60 s.
        while slot.is_empty() {
            std::thread::yield_now();
        }
        let start = Instant::now();
        drop(stop_tx);
        let engine = handle.join().unwrap();
        assert!(start.elapsed() < Duration::from_secs(5));
        assert_eq!(engine.current_tick().0, stats.ticks());
        assert!(stats.ticks() >= 1);
    }

    #[test]
    fn stop_message_stops_loop() {
        let slot = Arc::new(FrameSlot::new());
        let stats = Arc::new(TickStats::default());
        let (stop_tx, stop_rx) = crossbeam_channel::bounded(1);
        let state = TickThreadState::new(
            engine(),
            slot,
            Arc::clone(&stats),
            stop_rx,
            Duration::from_millis(1),
        );
        let handle = std::thread::spawn(move || state.run());
        stop_tx.send(()).unwrap();
        let engine = handle.join().unwrap();
        assert!(engine.current_tick().0 >= 1);
    }
}
