//! Test utilities and fixtures for Tincture development.
//!
//! Provides supplier fixtures and scripted [`SupplierSource`] doubles (in
//! [`fixtures`]), deterministic RNG construction, small field-store
//! builders, and assertion helpers shared by the workspace's tests and
//! benchmarks.
//!
//! [`SupplierSource`]: tincture_core::SupplierSource

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tincture_core::{LayerId, Rgb, SupplierId};
use tincture_field::{FieldStore, GridShape, Layer, LayerTable};

pub use fixtures::{
    degenerate_suppliers, reference_suppliers, supplier, FailingSource, SwappableSource,
};

/// Deterministic RNG for seeding and colour draws.
pub fn fixed_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// A layer table with one grey layer per strength, supplier ids `0..n`.
pub fn layers_with_strengths(strengths: &[f64]) -> LayerTable {
    let mut table = LayerTable::new();
    for (i, &strength) in strengths.iter().enumerate() {
        table
            .push(Layer {
                supplier_id: SupplierId(i as u32),
                name: format!("layer-{i}"),
                color: Rgb::new(128, 128, 128),
                strength,
            })
            .expect("supplier ids are distinct");
    }
    table
}

/// A zeroed `width × height` store with one layer per strength.
pub fn store_with_strengths(width: u32, height: u32, strengths: &[f64]) -> FieldStore {
    let shape = GridShape::new(width, height).expect("test grid dimensions are valid");
    FieldStore::new(shape, layers_with_strengths(strengths)).expect("at least one layer")
}

/// Set a single cell of `layer` in the current buffer.
pub fn poke(store: &mut FieldStore, layer: u32, x: u32, y: u32, value: f64) {
    store
        .set(LayerId(layer), x, y, value)
        .expect("test coordinate in range");
}

/// Panic with the first offending index if any value is negative or non-finite.
pub fn assert_non_negative(values: &[f64]) {
    if let Some((i, v)) = values
        .iter()
        .enumerate()
        .find(|(_, v)| !(**v >= 0.0) || !v.is_finite())
    {
        panic!("value at index {i} is {v}, expected finite and >= 0");
    }
}

/// Assert two floats agree to within `tol`.
pub fn assert_close(actual: f64, expected: f64, tol: f64) {
    assert!(
        (actual - expected).abs() <= tol,
        "expected {expected} ± {tol}, got {actual}"
    );
}
