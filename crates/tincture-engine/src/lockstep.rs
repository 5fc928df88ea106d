//! Lockstep (synchronous) simulation driver.
//!
//! [`LockstepSim`] runs the same tick as the realtime controller, but on the
//! caller's thread and only when asked. Tests, benchmarks, and headless
//! batch runs use it to step a simulation deterministically without a timer.
//!
//! No background threads are involved; dropping the sim frees everything.

use std::sync::Arc;

use tincture_core::{Supplier, TickId};
use tincture_field::{FieldStore, LayerTable};
use tincture_render::Frame;

use crate::config::SimConfig;
use crate::error::ControllerError;
use crate::metrics::StepMetrics;
use crate::slot::FrameSlot;
use crate::tick::TickEngine;

// Compile-time assertion: the sim can be moved to a worker thread.
const _: fn() = || {
    fn assert<T: Send>() {}
    assert::<LockstepSim>();
};

// ── StepResult ──────────────────────────────────────────────────

/// Result of one [`LockstepSim::step()`] call.
#[derive(Clone, Debug)]
pub struct StepResult {
    /// The tick that just completed.
    pub tick: TickId,
    /// The frame rendered for this tick.
    pub frame: Arc<Frame>,
    /// Timings and field mass for this tick.
    pub metrics: StepMetrics,
}

// ── LockstepSim ─────────────────────────────────────────────────

/// Single-threaded simulation driven one tick per call.
///
/// # Example
///
/// ```ignore
/// let mut sim = LockstepSim::new(&SimConfig::default(), &suppliers)?;
/// for _ in 0..100 {
///     let result = sim.step();
///     display(&result.frame);
/// }
/// ```
#[derive(Debug)]
pub struct LockstepSim {
    engine: TickEngine,
    slot: FrameSlot,
}

impl LockstepSim {
    /// Build a seeded simulation for `suppliers`.
    ///
    /// Unlike [`SimulationController`](crate::SimulationController), an
    /// empty supplier list is an error here: there is nothing to step.
    pub fn new(config: &SimConfig, suppliers: &[Supplier]) -> Result<Self, ControllerError> {
        Ok(Self {
            engine: TickEngine::new(config, suppliers)?,
            slot: FrameSlot::new(),
        })
    }

    /// Run one tick: diffuse, compete, render.
    pub fn step(&mut self) -> StepResult {
        let frame = self.engine.execute_tick(&self.slot);
        StepResult {
            tick: self.engine.current_tick(),
            frame,
            metrics: self.engine.last_metrics().clone(),
        }
    }

    /// Run `n` ticks and return the last result, or `None` when `n == 0`.
    pub fn step_n(&mut self, n: usize) -> Option<StepResult> {
        let mut last = None;
        for _ in 0..n {
            last = Some(self.step());
        }
        last
    }

    /// Clear the field and place fresh seeds. Colours are kept.
    pub fn restart(&mut self) -> Result<(), ControllerError> {
        self.engine.restart()
    }

    /// Replace the suppliers. Surviving suppliers keep their colours.
    pub fn reload(&mut self, suppliers: &[Supplier]) -> Result<(), ControllerError> {
        self.engine.reload(suppliers)
    }

    /// The field store, for inspecting intensities directly.
    pub fn store(&self) -> &FieldStore {
        self.engine.store()
    }

    /// Per-layer metadata.
    pub fn layers(&self) -> &LayerTable {
        self.engine.layers()
    }

    /// The most recent frame, if any tick has run.
    pub fn latest_frame(&self) -> Option<Arc<Frame>> {
        self.slot.latest()
    }

    /// Seed centres from the most recent placement.
    pub fn seed_centres(&self) -> &[(u32, u32)] {
        self.engine.seed_centres()
    }

    /// Number of ticks executed.
    pub fn current_tick(&self) -> TickId {
        self.engine.current_tick()
    }
}
