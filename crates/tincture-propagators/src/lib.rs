//! Field passes for Tincture simulations.
//!
//! Each tick runs two passes over a [`FieldStore`](tincture_field::FieldStore):
//!
//! 1. [`DiffusionStepper`]: reads current, writes next (caller swaps)
//! 2. [`CompetitionResolver`]: rescales current in place by layer strength
//!    and suppresses weaker layers cell by cell
//!
//! Both passes touch interior cells only. The outermost ring of every plane
//! is left as the buffer last held it.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod competition;
pub mod diffusion;
pub mod kernel;

pub use competition::{CompetitionResolver, CompetitionResolverBuilder};
pub use diffusion::{DiffusionStepper, DiffusionStepperBuilder};
pub use kernel::Kernel3x3;
