//! Supplier fixtures and source doubles.
//!
//! - [`reference_suppliers`]: twelve varied suppliers (more than the
//!   reference limit of ten, so bounding is exercised).
//! - [`degenerate_suppliers`]: identical attributes, all raw scores equal.
//! - [`FailingSource`]: every fetch fails.
//! - [`SwappableSource`]: contents can be replaced between fetches.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use tincture_core::{SourceError, Supplier, SupplierId, SupplierSource};

/// Build a supplier from its attributes.
pub fn supplier(
    id: u32,
    quality: f64,
    experience_years: f64,
    reliability: f64,
    supply_cost: f64,
    delivery_speed_days: f64,
) -> Supplier {
    Supplier {
        id: SupplierId(id),
        name: format!("Supplier {id}"),
        quality,
        experience_years,
        reliability,
        supply_cost,
        delivery_speed_days,
    }
}

/// Twelve suppliers with distinct attribute mixes.
pub fn reference_suppliers() -> Vec<Supplier> {
    vec![
        supplier(1, 92.0, 12.0, 88.0, 140.0, 3.0),
        supplier(2, 75.0, 4.0, 70.0, 95.0, 5.0),
        supplier(3, 60.0, 8.0, 95.0, 120.0, 2.0),
        supplier(4, 85.0, 1.5, 60.0, 60.0, 7.0),
        supplier(5, 40.0, 20.0, 55.0, 45.0, 10.0),
        supplier(6, 98.0, 6.0, 91.0, 200.0, 1.0),
        supplier(7, 55.0, 3.0, 40.0, 30.0, 14.0),
        supplier(8, 70.0, 9.5, 80.0, 110.0, 4.0),
        supplier(9, 65.0, 0.5, 75.0, 80.0, 6.0),
        supplier(10, 88.0, 15.0, 85.0, 150.0, 2.5),
        supplier(11, 50.0, 2.0, 65.0, 70.0, 8.0),
        supplier(12, 78.0, 7.0, 72.0, 100.0, 3.5),
    ]
}

/// `n` suppliers whose attributes are all identical.
pub fn degenerate_suppliers(n: u32) -> Vec<Supplier> {
    (0..n)
        .map(|id| supplier(id, 70.0, 5.0, 70.0, 100.0, 5.0))
        .collect()
}

/// A source whose every fetch fails with [`SourceError::Unavailable`].
#[derive(Debug)]
pub struct FailingSource {
    pub reason: String,
}

impl FailingSource {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl SupplierSource for FailingSource {
    fn fetch(&self, _limit: usize) -> Result<Vec<Supplier>, SourceError> {
        Err(SourceError::Unavailable {
            reason: self.reason.clone(),
        })
    }
}

/// A source whose contents can be replaced while shared, counting fetches.
#[derive(Debug, Default)]
pub struct SwappableSource {
    suppliers: Mutex<Vec<Supplier>>,
    fetches: AtomicUsize,
}

impl SwappableSource {
    pub fn new(suppliers: Vec<Supplier>) -> Self {
        Self {
            suppliers: Mutex::new(suppliers),
            fetches: AtomicUsize::new(0),
        }
    }

    /// Replace the records returned by later fetches.
    pub fn replace(&self, suppliers: Vec<Supplier>) {
        *self.suppliers.lock().unwrap() = suppliers;
    }

    /// Number of fetches served so far.
    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::Relaxed)
    }
}

impl SupplierSource for SwappableSource {
    fn fetch(&self, limit: usize) -> Result<Vec<Supplier>, SourceError> {
        self.fetches.fetch_add(1, Ordering::Relaxed);
        let suppliers = self.suppliers.lock().unwrap();
        Ok(suppliers.iter().take(limit).cloned().collect())
    }
}
