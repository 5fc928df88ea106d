//! Tick engine: one simulation step, start to finish.
//!
//! [`TickEngine`] owns the field store, both passes, the renderer, and the
//! seeded RNG. Each [`execute_tick`](TickEngine::execute_tick) runs
//! diffusion → swap → competition → render → publish, sequentially, on the
//! calling thread. The realtime controller moves the engine onto its tick
//! thread; [`LockstepSim`](crate::LockstepSim) drives it directly.

use std::sync::Arc;
use std::time::Instant;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tincture_core::{normalize_strengths, Rgb, Supplier, TickId};
use tincture_field::{FieldStore, LayerTable, SeedPlacer};
use tincture_propagators::{CompetitionResolver, DiffusionStepper};
use tincture_render::{Frame, FrameRenderer, PixelLayout};
use tracing::{debug, trace};

use crate::config::SimConfig;
use crate::error::ControllerError;
use crate::metrics::StepMetrics;
use crate::slot::FrameSlot;

/// Single-threaded simulation step executor.
#[derive(Debug)]
pub struct TickEngine {
    store: FieldStore,
    diffusion: DiffusionStepper,
    competition: CompetitionResolver,
    renderer: FrameRenderer,
    seeder: SeedPlacer,
    layout: PixelLayout,
    rng: ChaCha8Rng,
    /// Frame evicted from the slot on the previous publish, reused when free.
    spare: Option<Frame>,
    seeds: Vec<(u32, u32)>,
    tick: TickId,
    last_metrics: StepMetrics,
}

// Compile-time assertion: the engine moves onto the tick thread.
const _: fn() = || {
    fn assert<T: Send>() {}
    assert::<TickEngine>();
};

impl TickEngine {
    /// Build an engine for `suppliers` and place the initial seeds.
    ///
    /// Colours are drawn from the engine's RNG in supplier order, so a fixed
    /// `config.seed` reproduces both colours and seed positions.
    pub fn new(config: &SimConfig, suppliers: &[Supplier]) -> Result<Self, ControllerError> {
        config.validate()?;
        for supplier in suppliers {
            supplier.validate()?;
        }

        let mut rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_rng(&mut rand::rng()),
        };
        let strengths = normalize_strengths(suppliers);
        let layers = LayerTable::from_suppliers(suppliers, &strengths, |_| Rgb::random(&mut rng))?;
        let store = FieldStore::new(config.shape()?, layers)?;

        let mut engine = Self {
            store,
            diffusion: config.diffusion()?,
            competition: config.competition()?,
            renderer: config.renderer()?,
            seeder: config.seed_placer()?,
            layout: config.pixel_layout()?,
            rng,
            spare: None,
            seeds: Vec::new(),
            tick: TickId::default(),
            last_metrics: StepMetrics::default(),
        };
        engine.reseed()?;
        debug!(
            layers = engine.store.layer_count(),
            width = config.width,
            height = config.height,
            "tick engine built"
        );
        Ok(engine)
    }

    fn reseed(&mut self) -> Result<(), ControllerError> {
        self.seeds = self.seeder.place_seeds(&mut self.store, &mut self.rng)?;
        Ok(())
    }

    /// Run one tick and publish its frame into `slot`.
    ///
    /// Returns the published frame.
    pub fn execute_tick(&mut self, slot: &FrameSlot) -> Arc<Frame> {
        let tick_start = Instant::now();

        let diffusion_start = Instant::now();
        self.diffusion.step_store(&mut self.store);
        let diffusion_us = diffusion_start.elapsed().as_micros() as u64;

        let competition_start = Instant::now();
        self.competition.resolve_store(&mut self.store);
        let competition_us = competition_start.elapsed().as_micros() as u64;

        let render_start = Instant::now();
        let layout = self.layout;
        let mut frame = self.spare.take().unwrap_or_else(|| Frame::new(layout));
        self.renderer.render_store(&self.store, &mut frame);
        let render_us = render_start.elapsed().as_micros() as u64;

        let publish_start = Instant::now();
        let frame = Arc::new(frame);
        self.spare = slot.publish(Arc::clone(&frame));
        let publish_us = publish_start.elapsed().as_micros() as u64;

        self.tick = self.tick.next();
        self.last_metrics = StepMetrics {
            total_us: tick_start.elapsed().as_micros() as u64,
            diffusion_us,
            competition_us,
            render_us,
            publish_us,
            total_mass: self.store.total_mass(),
        };
        trace!(
            tick = self.tick.0,
            total_us = self.last_metrics.total_us,
            total_mass = self.last_metrics.total_mass,
            "tick complete"
        );
        frame
    }

    /// Clear the current field and place fresh seeds.
    ///
    /// Colours, strengths, and the tick counter are kept.
    pub fn restart(&mut self) -> Result<(), ControllerError> {
        self.store.clear();
        self.reseed()?;
        debug!(tick = self.tick.0, "field reseeded");
        Ok(())
    }

    /// Replace the layers with `suppliers`, re-allocate, and reseed.
    ///
    /// Suppliers already present keep their colour; new ones draw a fresh
    /// one. Strengths are recomputed over the new set. On error the engine
    /// is left unchanged.
    pub fn reload(&mut self, suppliers: &[Supplier]) -> Result<(), ControllerError> {
        for supplier in suppliers {
            supplier.validate()?;
        }
        let strengths = normalize_strengths(suppliers);
        let previous = self.store.layers();
        let rng = &mut self.rng;
        let layers = LayerTable::from_suppliers(suppliers, &strengths, |id| {
            previous.color_of(id).unwrap_or_else(|| Rgb::random(rng))
        })?;
        self.store.allocate(layers)?;
        self.reseed()?;
        debug!(layers = self.store.layer_count(), "layers reloaded");
        Ok(())
    }

    /// The field store.
    pub fn store(&self) -> &FieldStore {
        &self.store
    }

    /// Per-layer metadata.
    pub fn layers(&self) -> &LayerTable {
        self.store.layers()
    }

    /// Seed centres from the most recent placement, one per layer.
    pub fn seed_centres(&self) -> &[(u32, u32)] {
        &self.seeds
    }

    /// Number of ticks executed.
    pub fn current_tick(&self) -> TickId {
        self.tick
    }

    /// Metrics from the most recent tick.
    pub fn last_metrics(&self) -> &StepMetrics {
        &self.last_metrics
    }

    /// Geometry of published frames.
    pub fn pixel_layout(&self) -> PixelLayout {
        self.layout
    }
}
