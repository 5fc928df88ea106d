//! Layered intensity fields for Tincture simulations.
//!
//! A simulation holds one 2-D plane of non-negative intensities per supplier
//! ("layer"). [`FieldStore`] owns two same-shaped copies of every plane,
//! current and next, and swaps their roles after each diffusion pass
//! without copying. Per-layer metadata (colour, strength, supplier) lives in
//! a single [`LayerTable`] indexed by [`LayerId`](tincture_core::LayerId).
//!
//! # Buffer layout
//!
//! ```text
//! buffer[layer * W * H + x * H + y]
//! ```
//!
//! Each layer occupies a disjoint contiguous plane, so a pass over one
//! layer never aliases another.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod grid;
pub mod layer;
pub mod seed;
pub mod store;

pub use error::FieldError;
pub use grid::GridShape;
pub use layer::{Layer, LayerTable};
pub use seed::SeedPlacer;
pub use store::FieldStore;
