//! Error types for field construction and access.

use std::error::Error;
use std::fmt;

use tincture_core::{LayerId, SupplierId};

/// Errors arising from grid, layer table, or field store operations.
///
/// All of these indicate a programmer or configuration error and are
/// reported at construction time, never during a tick.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldError {
    /// A grid dimension is zero.
    EmptyGrid,
    /// A grid dimension exceeds the supported maximum.
    DimensionTooLarge {
        /// Which dimension (`"width"` or `"height"`).
        name: &'static str,
        /// The configured value.
        value: u32,
        /// The largest accepted value.
        max: u32,
    },
    /// `layers × width × height` does not fit in memory addressing.
    CellCountOverflow,
    /// The store was asked to hold zero layers.
    NoLayers,
    /// Two layers were registered for the same supplier.
    DuplicateSupplier {
        /// The repeated supplier id.
        id: SupplierId,
    },
    /// A layer id does not name an allocated layer.
    LayerOutOfRange {
        /// The requested layer.
        layer: LayerId,
        /// Number of allocated layers.
        count: usize,
    },
    /// A coordinate lies outside the grid.
    CoordOutOfBounds {
        /// Column coordinate.
        x: u32,
        /// Row coordinate.
        y: u32,
    },
    /// Seed blocks must cover at least one cell.
    InvalidSeedSize,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid => write!(f, "grid must have at least one cell"),
            Self::DimensionTooLarge { name, value, max } => {
                write!(f, "{name} {value} exceeds maximum {max}")
            }
            Self::CellCountOverflow => write!(f, "layer count times grid size overflows"),
            Self::NoLayers => write!(f, "field store needs at least one layer"),
            Self::DuplicateSupplier { id } => {
                write!(f, "supplier {id} registered for more than one layer")
            }
            Self::LayerOutOfRange { layer, count } => {
                write!(f, "layer {layer} out of range (have {count})")
            }
            Self::CoordOutOfBounds { x, y } => write!(f, "coordinate ({x}, {y}) out of bounds"),
            Self::InvalidSeedSize => write!(f, "seed size must be at least 1"),
        }
    }
}

impl Error for FieldError {}
