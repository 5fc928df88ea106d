//! The entity source seam.
//!
//! The simulation reads suppliers through [`SupplierSource`] once per run
//! (and again on an explicit reload). It never writes back.

use crate::error::SourceError;
use crate::supplier::Supplier;

/// Read-only provider of supplier records.
///
/// Implementations return at most `limit` records, in a stable order; the
/// simulation assigns layers in that order.
pub trait SupplierSource: Send + Sync {
    /// Fetch up to `limit` supplier records.
    fn fetch(&self, limit: usize) -> Result<Vec<Supplier>, SourceError>;
}

/// A [`SupplierSource`] backed by an in-memory list.
#[derive(Clone, Debug, Default)]
pub struct InMemorySource {
    suppliers: Vec<Supplier>,
}

impl InMemorySource {
    /// Wrap an existing list of suppliers.
    pub fn new(suppliers: Vec<Supplier>) -> Self {
        Self { suppliers }
    }

    /// Number of records held.
    pub fn len(&self) -> usize {
        self.suppliers.len()
    }

    /// Whether the source holds no records.
    pub fn is_empty(&self) -> bool {
        self.suppliers.is_empty()
    }
}

impl SupplierSource for InMemorySource {
    fn fetch(&self, limit: usize) -> Result<Vec<Supplier>, SourceError> {
        Ok(self.suppliers.iter().take(limit).cloned().collect())
    }
}

impl<S: SupplierSource + ?Sized> SupplierSource for std::sync::Arc<S> {
    fn fetch(&self, limit: usize) -> Result<Vec<Supplier>, SourceError> {
        (**self).fetch(limit)
    }
}
