//! Core types and traits for the Tincture market-influence simulation.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! supplier entity consumed by the simulation, strongly-typed identifiers,
//! layer colours, the attribute-to-strength normalizer, and the
//! [`SupplierSource`] seam through which suppliers are fetched.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod color;
pub mod error;
pub mod id;
pub mod source;
pub mod strength;
pub mod supplier;

pub use color::Rgb;
pub use error::SourceError;
pub use id::{LayerId, SupplierId, TickId};
pub use source::{InMemorySource, SupplierSource};
pub use strength::{normalize_strengths, raw_score, StrengthWeights, MAX_STRENGTH, MIN_STRENGTH};
pub use supplier::Supplier;
