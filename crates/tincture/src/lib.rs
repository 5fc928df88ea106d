//! Tincture: a spatial market-influence simulation.
//!
//! Each supplier becomes a coloured layer of intensity on a 2-D grid. Every
//! tick the layers diffuse outward, compete cell by cell in proportion to
//! their strength, and are blended into a BGRA frame for display.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all Tincture sub-crates.
//!
//! # Quick start
//!
//! ```rust
//! use tincture::prelude::*;
//!
//! let suppliers: Vec<Supplier> = (1..=3)
//!     .map(|i| Supplier {
//!         id: SupplierId(i),
//!         name: format!("Supplier {i}"),
//!         quality: 50.0 + i as f64,
//!         experience_years: 5.0,
//!         reliability: 80.0,
//!         supply_cost: 10.0,
//!         delivery_speed_days: 3.0,
//!     })
//!     .collect();
//!
//! let config = SimConfig {
//!     width: 32,
//!     height: 32,
//!     seed: Some(7),
//!     ..SimConfig::default()
//! };
//! let mut sim = LockstepSim::new(&config, &suppliers).unwrap();
//! let result = sim.step();
//! assert_eq!(result.tick, TickId(1));
//! assert_eq!(result.frame.as_bytes().len(), 32 * 32 * 4);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `tincture-core` | Suppliers, IDs, colours, strength normalization, sources |
//! | [`field`] | `tincture-field` | Double-buffered layer store, grid shape, seed placement |
//! | [`propagators`] | `tincture-propagators` | Diffusion and competition passes |
//! | [`render`] | `tincture-render` | BGRA frames and the frame renderer |
//! | [`engine`] | `tincture-engine` | Tick engine, realtime controller, lockstep driver |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types, traits, and IDs (`tincture-core`).
///
/// Contains the [`types::Supplier`] record, the [`types::SupplierSource`]
/// seam, and [`types::normalize_strengths`].
pub use tincture_core as types;

/// Layered intensity storage (`tincture-field`).
pub use tincture_field as field;

/// Diffusion and competition passes (`tincture-propagators`).
///
/// Most users never call these directly; the engine runs them every tick.
pub use tincture_propagators as propagators;

/// Frame buffers and rendering (`tincture-render`).
pub use tincture_render as render;

/// Simulation engines (`tincture-engine`).
///
/// [`engine::SimulationController`] for realtime ticking on a background
/// thread, [`engine::LockstepSim`] for synchronous stepping.
pub use tincture_engine as engine;

/// Common imports for typical Tincture usage.
///
/// ```rust
/// use tincture::prelude::*;
/// ```
pub mod prelude {
    // Core types and traits
    pub use tincture_core::{InMemorySource, Rgb, Supplier, SupplierId, SupplierSource, TickId};

    // Errors
    pub use tincture_core::SourceError;
    pub use tincture_engine::{ConfigError, ControllerError};

    // Frames
    pub use tincture_render::{Frame, PixelLayout};

    // Engine
    pub use tincture_engine::{
        ControllerState, LegendEntry, LockstepSim, SimConfig, SimulationController, StepMetrics,
        StepResult,
    };
}
