//! Simulation engine driving Tincture market-influence fields.
//!
//! [`TickEngine`] runs one tick: diffusion, competition, render, publish.
//! Two drivers sit on top of it:
//!
//! - [`SimulationController`]: realtime. Owns a tick thread that steps every
//!   `tick_interval` and publishes frames into a latest-wins [`FrameSlot`].
//!   Start, stop, restart, and reload are idempotent and never race.
//! - [`LockstepSim`]: synchronous. The caller steps explicitly; used by
//!   tests, benchmarks, and headless runs.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod controller;
pub mod error;
pub mod lockstep;
pub mod metrics;
pub mod slot;
pub mod tick;
pub(crate) mod tick_thread;

pub use config::{ConfigError, SimConfig};
pub use controller::{ControllerState, LegendEntry, SimulationController};
pub use error::ControllerError;
pub use lockstep::{LockstepSim, StepResult};
pub use metrics::StepMetrics;
pub use slot::FrameSlot;
pub use tick::TickEngine;
