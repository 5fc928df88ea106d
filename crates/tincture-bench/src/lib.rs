//! Benchmark profiles for the Tincture simulation.
//!
//! - [`reference_profile`]: 200x200 grid, 10 suppliers, the display defaults
//! - [`stress_profile`]: 500x500 grid, 32 suppliers
//! - [`bench_suppliers`]: deterministic supplier records with spread-out attributes

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use tincture_core::{Supplier, SupplierId};
use tincture_engine::SimConfig;

/// Build the reference profile: 200x200 grid, up to 10 suppliers.
pub fn reference_profile(seed: u64) -> SimConfig {
    SimConfig {
        seed: Some(seed),
        ..SimConfig::default()
    }
}

/// Build the stress profile: 500x500 grid, up to 32 suppliers.
pub fn stress_profile(seed: u64) -> SimConfig {
    SimConfig {
        width: 500,
        height: 500,
        max_suppliers: 32,
        seed: Some(seed),
        ..SimConfig::default()
    }
}

/// Generate `n` suppliers whose attributes vary with their index.
///
/// Values stay inside every attribute's domain, so the records always
/// validate.
pub fn bench_suppliers(n: u32) -> Vec<Supplier> {
    (0..n)
        .map(|i| {
            let t = f64::from(i % 17) / 16.0;
            Supplier {
                id: SupplierId(i + 1),
                name: format!("Bench {}", i + 1),
                quality: 40.0 + 60.0 * t,
                experience_years: f64::from(i % 30),
                reliability: 100.0 - 50.0 * t,
                supply_cost: 5.0 + f64::from(i % 7) * 3.0,
                delivery_speed_days: 1.0 + f64::from(i % 5),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profiles_validate() {
        assert!(reference_profile(1).validate().is_ok());
        assert!(stress_profile(1).validate().is_ok());
    }

    #[test]
    fn bench_suppliers_validate() {
        let suppliers = bench_suppliers(40);
        assert_eq!(suppliers.len(), 40);
        assert!(suppliers.iter().all(|s| s.validate().is_ok()));
    }
}
