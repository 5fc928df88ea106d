//! Frame rendering for Tincture simulations.
//!
//! [`FrameRenderer`] blends every layer's colour by its intensity, rescales
//! saturated cells, and lifts the result by a brightness floor. Output goes
//! into a caller-owned [`Frame`]: one opaque BGRA pixel per cell, rows
//! `stride` bytes apart.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod frame;
pub mod renderer;

pub use error::RenderError;
pub use frame::{Frame, PixelLayout, BYTES_PER_PIXEL};
pub use renderer::{normalize_color, FrameRenderer};
