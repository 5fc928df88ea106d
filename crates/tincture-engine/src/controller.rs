//! Realtime simulation lifecycle: start, stop, restart, reload.
//!
//! [`SimulationController`] loads suppliers from a [`SupplierSource`], owns
//! the [`TickEngine`] while idle, and lends it to a dedicated tick thread
//! while running. Frames are published through a [`FrameSlot`] that the
//! display polls via [`latest_frame`](SimulationController::latest_frame).
//!
//! ```text
//!            start()                stop()
//!   Idle ──────────────► Running ──────────► Idle
//!    ▲                                        │
//!    └──────────── restart() / reload() ◄─────┘
//!
//!   Disabled: the source returned no suppliers; start() is a no-op.
//! ```

use std::sync::Arc;
use std::thread::{self, JoinHandle};

use crossbeam_channel::Sender;
use tincture_core::{Rgb, Supplier, SupplierId, SupplierSource};
use tincture_field::LayerTable;
use tincture_render::Frame;
use tracing::{debug, error, info, warn};

use crate::config::SimConfig;
use crate::error::ControllerError;
use crate::metrics::StepMetrics;
use crate::slot::FrameSlot;
use crate::tick::TickEngine;
use crate::tick_thread::{TickStats, TickThreadState};

// ── LegendEntry ──────────────────────────────────────────────────

/// Display data for one layer.
#[derive(Clone, Debug, PartialEq)]
pub struct LegendEntry {
    /// The supplier the layer belongs to.
    pub supplier_id: SupplierId,
    /// Supplier display name.
    pub name: String,
    /// Layer colour.
    pub color: Rgb,
    /// Competition strength in `[0.95, 1.05]`.
    pub strength: f64,
}

fn legend_of(layers: &LayerTable) -> Vec<LegendEntry> {
    layers
        .iter()
        .map(|(_, layer)| LegendEntry {
            supplier_id: layer.supplier_id,
            name: layer.name.clone(),
            color: layer.color,
            strength: layer.strength,
        })
        .collect()
}

// ── ControllerState ──────────────────────────────────────────────

/// Lifecycle state of a [`SimulationController`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControllerState {
    /// Engine held by the controller; no ticks run.
    Idle,
    /// Engine on the tick thread; ticks run at the configured interval.
    Running,
    /// No suppliers were loaded; the simulation never runs.
    Disabled,
}

// ── SimulationController ─────────────────────────────────────────

/// Realtime simulation driver.
///
/// All lifecycle methods take `&mut self`, so they never race each other,
/// and the tick thread is always joined before a new one is spawned.
pub struct SimulationController {
    config: SimConfig,
    source: Arc<dyn SupplierSource>,
    slot: Arc<FrameSlot>,
    stats: Arc<TickStats>,
    /// Present while idle; on the tick thread while running.
    engine: Option<TickEngine>,
    tick_thread: Option<JoinHandle<TickEngine>>,
    stop_tx: Option<Sender<()>>,
    legend: Vec<LegendEntry>,
    state: ControllerState,
}

// Compile-time assertion: the controller can be shared with a UI thread.
const _: fn() = || {
    fn assert<T: Send + Sync>() {}
    assert::<SimulationController>();
};

impl SimulationController {
    /// Validate `config`, fetch up to `config.max_suppliers` suppliers, and
    /// build the engine with its initial seeds. Nothing runs until
    /// [`start`](Self::start).
    ///
    /// An empty source is not an error: the controller is created in the
    /// [`Disabled`](ControllerState::Disabled) state.
    pub fn new<S>(config: SimConfig, source: S) -> Result<Self, ControllerError>
    where
        S: SupplierSource + 'static,
    {
        config.validate()?;
        let source: Arc<dyn SupplierSource> = Arc::new(source);
        let mut controller = Self {
            config,
            source,
            slot: Arc::new(FrameSlot::new()),
            stats: Arc::new(TickStats::default()),
            engine: None,
            tick_thread: None,
            stop_tx: None,
            legend: Vec::new(),
            state: ControllerState::Disabled,
        };
        let suppliers = controller.fetch()?;
        controller.install(&suppliers)?;
        info!(
            suppliers = suppliers.len(),
            width = controller.config.width,
            height = controller.config.height,
            "simulation controller ready"
        );
        Ok(controller)
    }

    fn fetch(&self) -> Result<Vec<Supplier>, ControllerError> {
        let mut suppliers = self.source.fetch(self.config.max_suppliers)?;
        suppliers.truncate(self.config.max_suppliers);
        debug!(count = suppliers.len(), "suppliers fetched");
        Ok(suppliers)
    }

    /// Build or reload the engine for `suppliers`; caller ensures idle.
    fn install(&mut self, suppliers: &[Supplier]) -> Result<(), ControllerError> {
        if suppliers.is_empty() {
            warn!("supplier source is empty, simulation disabled");
            self.engine = None;
            self.legend.clear();
            self.state = ControllerState::Disabled;
            return Ok(());
        }
        match self.engine.as_mut() {
            Some(engine) => engine.reload(suppliers)?,
            None => self.engine = Some(TickEngine::new(&self.config, suppliers)?),
        }
        self.legend = self
            .engine
            .as_ref()
            .map(|engine| legend_of(engine.layers()))
            .unwrap_or_default();
        self.state = ControllerState::Idle;
        Ok(())
    }

    /// Begin ticking at the configured interval.
    ///
    /// No-op when already running or disabled.
    pub fn start(&mut self) -> Result<(), ControllerError> {
        match self.state {
            ControllerState::Running => {
                debug!("start ignored, already running");
                return Ok(());
            }
            ControllerState::Disabled => {
                info!("start ignored, no suppliers loaded");
                return Ok(());
            }
            ControllerState::Idle => {}
        }

        let engine = self
            .engine
            .take()
            .ok_or(ControllerError::EngineRecoveryFailed)?;
        let (stop_tx, stop_rx) = crossbeam_channel::bounded(1);
        let state = TickThreadState::new(
            engine,
            Arc::clone(&self.slot),
            Arc::clone(&self.stats),
            stop_rx,
            self.config.tick_interval,
        );
        let handle = thread::Builder::new()
            .name("tincture-tick".into())
            .spawn(move || state.run())
            .map_err(|e| {
                error!(error = %e, "failed to spawn tick thread");
                ControllerError::ThreadSpawnFailed {
                    reason: e.to_string(),
                }
            })?;

        self.tick_thread = Some(handle);
        self.stop_tx = Some(stop_tx);
        self.state = ControllerState::Running;
        info!(
            interval_ms = self.config.tick_interval.as_millis() as u64,
            "simulation started"
        );
        Ok(())
    }

    /// Stop ticking. An in-flight tick completes first.
    ///
    /// No-op when not running.
    pub fn stop(&mut self) -> Result<(), ControllerError> {
        if self.state != ControllerState::Running {
            return Ok(());
        }
        // Dropping the sender wakes the tick thread out of its budget wait.
        self.stop_tx.take();
        self.state = ControllerState::Idle;

        let handle = self
            .tick_thread
            .take()
            .ok_or(ControllerError::EngineRecoveryFailed)?;
        match handle.join() {
            Ok(engine) => {
                self.engine = Some(engine);
                info!(ticks = self.stats.ticks(), "simulation stopped");
                Ok(())
            }
            Err(_) => {
                error!("tick thread panicked, engine lost");
                Err(ControllerError::EngineRecoveryFailed)
            }
        }
    }

    /// Stop, clear the field, place fresh seeds, and start again.
    ///
    /// Colours and strengths are kept. No-op when disabled.
    pub fn restart(&mut self) -> Result<(), ControllerError> {
        if self.state == ControllerState::Disabled {
            info!("restart ignored, no suppliers loaded");
            return Ok(());
        }
        self.stop()?;
        self.engine
            .as_mut()
            .ok_or(ControllerError::EngineRecoveryFailed)?
            .restart()?;
        self.start()
    }

    /// Re-fetch suppliers, recompute strengths, re-allocate, and reseed.
    ///
    /// Suppliers still present keep their colours. The simulation is
    /// restarted if it was running. An empty fetch disables it; a non-empty
    /// fetch re-enables a disabled controller (left idle). On error the
    /// controller is left idle with its previous layers.
    pub fn reload(&mut self) -> Result<(), ControllerError> {
        let was_running = self.state == ControllerState::Running;
        self.stop()?;
        let suppliers = self.fetch()?;
        self.install(&suppliers)?;
        info!(suppliers = suppliers.len(), "suppliers reloaded");
        if was_running {
            self.start()?;
        }
        Ok(())
    }

    /// The most recently published frame, once at least one tick has run.
    pub fn latest_frame(&self) -> Option<Arc<Frame>> {
        self.slot.latest()
    }

    /// One entry per layer, in layer order. Empty when disabled.
    pub fn legend(&self) -> &[LegendEntry] {
        &self.legend
    }

    /// Ticks completed since construction.
    pub fn ticks(&self) -> u64 {
        self.stats.ticks()
    }

    /// Metrics from the most recent tick.
    pub fn last_metrics(&self) -> StepMetrics {
        self.stats.last_metrics()
    }

    /// Current lifecycle state.
    pub fn state(&self) -> ControllerState {
        self.state
    }

    /// Whether the tick loop is running.
    pub fn is_running(&self) -> bool {
        self.state == ControllerState::Running
    }

    /// Whether suppliers were loaded, so the simulation can run at all.
    pub fn is_enabled(&self) -> bool {
        self.state != ControllerState::Disabled
    }

    /// The validated configuration.
    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// The engine, while idle.
    pub fn engine(&self) -> Option<&TickEngine> {
        self.engine.as_ref()
    }
}

impl Drop for SimulationController {
    fn drop(&mut self) {
        if self.state == ControllerState::Running {
            let _ = self.stop();
        }
    }
}
