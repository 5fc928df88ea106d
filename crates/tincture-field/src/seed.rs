//! Initial seeding of layer planes.

use rand::Rng;
use tincture_core::LayerId;

use crate::error::FieldError;
use crate::store::FieldStore;

/// Stamps a square block of full intensity onto each layer.
///
/// The block spans `-size/2 ..= size/2` around its centre on both axes
/// (integer division), so an even `size` covers `size + 1` cells per side.
/// Cells falling outside the grid are skipped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SeedPlacer {
    size: u32,
}

impl SeedPlacer {
    /// Intensity written into every seeded cell.
    pub const SEED_VALUE: f64 = 1.0;

    /// Create a placer stamping blocks of side `size`.
    ///
    /// Returns `Err(FieldError::InvalidSeedSize)` for `size == 0`.
    pub fn new(size: u32) -> Result<Self, FieldError> {
        if size == 0 {
            return Err(FieldError::InvalidSeedSize);
        }
        Ok(Self { size })
    }

    /// Configured block side.
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Stamp one block for `layer` centred at `(cx, cy)` in the current buffer.
    ///
    /// The centre itself may lie anywhere in the grid; the block is clipped.
    pub fn stamp_seed(
        &self,
        store: &mut FieldStore,
        layer: LayerId,
        cx: u32,
        cy: u32,
    ) -> Result<(), FieldError> {
        let shape = store.shape();
        if !shape.contains(i64::from(cx), i64::from(cy)) {
            return Err(FieldError::CoordOutOfBounds { x: cx, y: cy });
        }
        let half = i64::from(self.size / 2);
        let plane = store.plane_mut(layer)?;
        for dx in -half..=half {
            for dy in -half..=half {
                let x = i64::from(cx) + dx;
                let y = i64::from(cy) + dy;
                if shape.contains(x, y) {
                    plane[shape.index(x as usize, y as usize)] = Self::SEED_VALUE;
                }
            }
        }
        Ok(())
    }

    /// Pick a uniform random centre for every layer and stamp its block.
    ///
    /// Layers are visited in id order, drawing `x` then `y` from `rng`.
    /// Returns the chosen centres, one per layer. Earlier seeding is not
    /// cleared; call [`FieldStore::clear`] first for a fresh start.
    pub fn place_seeds<R: Rng + ?Sized>(
        &self,
        store: &mut FieldStore,
        rng: &mut R,
    ) -> Result<Vec<(u32, u32)>, FieldError> {
        let shape = store.shape();
        let mut centres = Vec::with_capacity(store.layer_count());
        for layer in 0..store.layer_count() {
            let cx = rng.random_range(0..shape.width());
            let cy = rng.random_range(0..shape.height());
            self.stamp_seed(store, LayerId(layer as u32), cx, cy)?;
            centres.push((cx, cy));
        }
        Ok(centres)
    }
}
