//! Per-layer metadata, stored as one array-of-structs.
//!
//! [`LayerTable`] keeps colour, strength, and supplier identity for every
//! layer in a single insertion-ordered map. The position in the map is the
//! [`LayerId`]; the key is the [`SupplierId`], so a layer can be found from
//! either side without keeping parallel arrays aligned.

use indexmap::IndexMap;
use tincture_core::{LayerId, Rgb, Supplier, SupplierId};

use crate::error::FieldError;

/// Everything the simulation knows about one layer.
#[derive(Clone, Debug, PartialEq)]
pub struct Layer {
    /// The supplier this layer belongs to.
    pub supplier_id: SupplierId,
    /// Supplier display name, for legends.
    pub name: String,
    /// Display colour, fixed for the lifetime of the simulation.
    pub color: Rgb,
    /// Competition multiplier in `[0.95, 1.05]`.
    pub strength: f64,
}

/// Ordered table of layers, indexed densely by [`LayerId`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LayerTable {
    layers: IndexMap<SupplierId, Layer>,
}

impl LayerTable {
    /// An empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from suppliers and their strengths (same order).
    ///
    /// `palette` is asked for one colour per supplier, in order; callers use
    /// it to keep the colours of suppliers that survive a reload.
    ///
    /// Returns `Err(FieldError::DuplicateSupplier)` if two suppliers share an id.
    ///
    /// # Panics
    ///
    /// Panics if `strengths.len() != suppliers.len()`.
    pub fn from_suppliers(
        suppliers: &[Supplier],
        strengths: &[f64],
        mut palette: impl FnMut(SupplierId) -> Rgb,
    ) -> Result<Self, FieldError> {
        assert_eq!(
            suppliers.len(),
            strengths.len(),
            "one strength per supplier required"
        );
        let mut table = Self::new();
        for (supplier, &strength) in suppliers.iter().zip(strengths) {
            table.push(Layer {
                supplier_id: supplier.id,
                name: supplier.name.clone(),
                color: palette(supplier.id),
                strength,
            })?;
        }
        Ok(table)
    }

    /// Append a layer, returning its id.
    pub fn push(&mut self, layer: Layer) -> Result<LayerId, FieldError> {
        let id = layer.supplier_id;
        if self.layers.contains_key(&id) {
            return Err(FieldError::DuplicateSupplier { id });
        }
        let next = LayerId(self.layers.len() as u32);
        self.layers.insert(id, layer);
        Ok(next)
    }

    /// Number of layers.
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    /// Whether the table holds no layers.
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// The layer with the given id.
    pub fn get(&self, id: LayerId) -> Option<&Layer> {
        self.layers.get_index(id.index()).map(|(_, layer)| layer)
    }

    /// Look up a layer by its supplier.
    pub fn by_supplier(&self, supplier: SupplierId) -> Option<(LayerId, &Layer)> {
        self.layers
            .get_full(&supplier)
            .map(|(idx, _, layer)| (LayerId(idx as u32), layer))
    }

    /// Colour previously assigned to `supplier`, if it has a layer.
    pub fn color_of(&self, supplier: SupplierId) -> Option<Rgb> {
        self.layers.get(&supplier).map(|layer| layer.color)
    }

    /// Iterate layers in id order.
    pub fn iter(&self) -> impl Iterator<Item = (LayerId, &Layer)> {
        self.layers
            .values()
            .enumerate()
            .map(|(idx, layer)| (LayerId(idx as u32), layer))
    }

    /// Strength of every layer, in id order.
    pub fn strengths(&self) -> Vec<f64> {
        self.layers.values().map(|layer| layer.strength).collect()
    }

    /// Colour of every layer, in id order.
    pub fn colors(&self) -> Vec<Rgb> {
        self.layers.values().map(|layer| layer.color).collect()
    }
}
