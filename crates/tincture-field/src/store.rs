//! Double-buffered field store.
//!
//! [`FieldStore`] owns two equally-sized buffers (A and B) holding every
//! layer plane, plus the [`LayerTable`]. One buffer is "current" (what the
//! competition pass, renderer, and observers see) and the other is "next"
//! (what the diffusion pass writes). [`FieldStore::swap`] exchanges the roles
//! by flipping a flag; no element is copied.
//!
//! The lifecycle per tick is:
//! 1. `split_mut()`: diffusion reads current, writes next
//! 2. `swap()`: next becomes current
//! 3. `competition_mut()`: competition rescales current in place
//! 4. `current()`: renderer reads current

use tincture_core::LayerId;

use crate::error::FieldError;
use crate::grid::GridShape;
use crate::layer::LayerTable;

/// Layered intensity field with ping-pong buffers.
///
/// ```text
/// buffer_a ←─── current when !b_is_current
/// buffer_b ←─── current when  b_is_current
/// ```
#[derive(Clone, Debug)]
pub struct FieldStore {
    shape: GridShape,
    layers: LayerTable,
    buffer_a: Vec<f64>,
    buffer_b: Vec<f64>,
    /// Which buffer is current (false = A current, true = B current).
    b_is_current: bool,
}

impl FieldStore {
    /// Create a store for `layers` on `shape`, both buffers zeroed.
    ///
    /// Returns `Err(FieldError::NoLayers)` for an empty table, or
    /// `Err(FieldError::CellCountOverflow)` if the buffers cannot be sized.
    pub fn new(shape: GridShape, layers: LayerTable) -> Result<Self, FieldError> {
        let len = Self::buffer_len(shape, layers.len())?;
        Ok(Self {
            shape,
            layers,
            buffer_a: vec![0.0; len],
            buffer_b: vec![0.0; len],
            b_is_current: false,
        })
    }

    fn buffer_len(shape: GridShape, layer_count: usize) -> Result<usize, FieldError> {
        if layer_count == 0 {
            return Err(FieldError::NoLayers);
        }
        shape
            .cell_count()
            .checked_mul(layer_count)
            .ok_or(FieldError::CellCountOverflow)
    }

    /// Replace the layer table and resize both buffers to zero.
    ///
    /// Any previous seeding is discarded. The grid shape is unchanged.
    pub fn allocate(&mut self, layers: LayerTable) -> Result<(), FieldError> {
        let len = Self::buffer_len(self.shape, layers.len())?;
        self.buffer_a.clear();
        self.buffer_a.resize(len, 0.0);
        self.buffer_b.clear();
        self.buffer_b.resize(len, 0.0);
        self.b_is_current = false;
        self.layers = layers;
        Ok(())
    }

    /// Exchange the roles of current and next in O(1).
    pub fn swap(&mut self) {
        self.b_is_current = !self.b_is_current;
    }

    /// Zero the current buffer. The next buffer is left as is.
    ///
    /// Its border cells are never rewritten by diffusion, so whatever they
    /// held resurfaces once the buffers swap.
    pub fn clear(&mut self) {
        self.current_mut().fill(0.0);
    }

    /// Grid dimensions of each layer plane.
    pub fn shape(&self) -> GridShape {
        self.shape
    }

    /// Number of layers.
    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    /// Per-layer metadata.
    pub fn layers(&self) -> &LayerTable {
        &self.layers
    }

    /// The current buffer, all layers.
    pub fn current(&self) -> &[f64] {
        if self.b_is_current {
            &self.buffer_b
        } else {
            &self.buffer_a
        }
    }

    /// Mutable access to the current buffer, all layers.
    pub fn current_mut(&mut self) -> &mut [f64] {
        if self.b_is_current {
            &mut self.buffer_b
        } else {
            &mut self.buffer_a
        }
    }

    /// Read the current buffer while writing the next one.
    pub fn split_mut(&mut self) -> (&[f64], &mut [f64]) {
        if self.b_is_current {
            (&self.buffer_b, &mut self.buffer_a)
        } else {
            (&self.buffer_a, &mut self.buffer_b)
        }
    }

    /// The current buffer together with the layer table, for passes that
    /// rescale intensities by per-layer parameters.
    pub fn competition_mut(&mut self) -> (&mut [f64], &LayerTable) {
        let current = if self.b_is_current {
            &mut self.buffer_b
        } else {
            &mut self.buffer_a
        };
        (current, &self.layers)
    }

    fn check_layer(&self, layer: LayerId) -> Result<(), FieldError> {
        if layer.index() >= self.layers.len() {
            return Err(FieldError::LayerOutOfRange {
                layer,
                count: self.layers.len(),
            });
        }
        Ok(())
    }

    fn check_coord(&self, x: u32, y: u32) -> Result<(), FieldError> {
        if !self.shape.contains(i64::from(x), i64::from(y)) {
            return Err(FieldError::CoordOutOfBounds { x, y });
        }
        Ok(())
    }

    /// One layer's plane in the current buffer.
    pub fn plane(&self, layer: LayerId) -> Result<&[f64], FieldError> {
        self.check_layer(layer)?;
        let n = self.shape.cell_count();
        let start = layer.index() * n;
        Ok(&self.current()[start..start + n])
    }

    /// One layer's plane in the current buffer, mutably.
    pub fn plane_mut(&mut self, layer: LayerId) -> Result<&mut [f64], FieldError> {
        self.check_layer(layer)?;
        let n = self.shape.cell_count();
        let start = layer.index() * n;
        Ok(&mut self.current_mut()[start..start + n])
    }

    /// Intensity of `layer` at `(x, y)` in the current buffer.
    pub fn get(&self, layer: LayerId, x: u32, y: u32) -> Result<f64, FieldError> {
        self.check_coord(x, y)?;
        let idx = self.shape.index(x as usize, y as usize);
        Ok(self.plane(layer)?[idx])
    }

    /// Set the intensity of `layer` at `(x, y)` in the current buffer.
    pub fn set(&mut self, layer: LayerId, x: u32, y: u32, value: f64) -> Result<(), FieldError> {
        self.check_coord(x, y)?;
        let idx = self.shape.index(x as usize, y as usize);
        self.plane_mut(layer)?[idx] = value;
        Ok(())
    }

    /// Sum of one layer's intensities in the current buffer.
    pub fn layer_mass(&self, layer: LayerId) -> Result<f64, FieldError> {
        Ok(self.plane(layer)?.iter().sum())
    }

    /// Sum of all intensities in the current buffer.
    pub fn total_mass(&self) -> f64 {
        self.current().iter().sum()
    }
}
