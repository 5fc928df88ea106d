//! The supplier entity consumed by the simulation.

use crate::error::SourceError;
use crate::id::SupplierId;

/// One supplier record as supplied by the external entity source.
///
/// Only the five business attributes feed the simulation; `id` and `name`
/// key the layer table and label the legend.
#[derive(Clone, Debug, PartialEq)]
pub struct Supplier {
    /// Stable identifier from the entity source.
    pub id: SupplierId,
    /// Display name.
    pub name: String,
    /// Product quality score in `[0, 100]`.
    pub quality: f64,
    /// Years in business, fractional, `>= 0`.
    pub experience_years: f64,
    /// Percentage of on-time deliveries in `[0, 100]`.
    pub reliability: f64,
    /// Unit supply cost, `> 0`.
    pub supply_cost: f64,
    /// Delivery lead time in days, `> 0`.
    pub delivery_speed_days: f64,
}

impl Supplier {
    /// Check that every attribute lies in its documented domain.
    ///
    /// The strength normalizer divides by the largest cost and delivery time
    /// in the batch, so both must be strictly positive and finite.
    pub fn validate(&self) -> Result<(), SourceError> {
        let invalid = |reason: String| SourceError::InvalidSupplier {
            id: self.id,
            reason,
        };
        if !(0.0..=100.0).contains(&self.quality) {
            return Err(invalid(format!(
                "quality must be in [0, 100], got {}",
                self.quality
            )));
        }
        if !(0.0..=100.0).contains(&self.reliability) {
            return Err(invalid(format!(
                "reliability must be in [0, 100], got {}",
                self.reliability
            )));
        }
        if !self.experience_years.is_finite() || self.experience_years < 0.0 {
            return Err(invalid(format!(
                "experience_years must be finite and >= 0, got {}",
                self.experience_years
            )));
        }
        if !self.supply_cost.is_finite() || self.supply_cost <= 0.0 {
            return Err(invalid(format!(
                "supply_cost must be finite and > 0, got {}",
                self.supply_cost
            )));
        }
        if !self.delivery_speed_days.is_finite() || self.delivery_speed_days <= 0.0 {
            return Err(invalid(format!(
                "delivery_speed_days must be finite and > 0, got {}",
                self.delivery_speed_days
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Supplier {
        Supplier {
            id: SupplierId(1),
            name: "Northwind".into(),
            quality: 80.0,
            experience_years: 4.5,
            reliability: 92.0,
            supply_cost: 1200.0,
            delivery_speed_days: 3.0,
        }
    }

    #[test]
    fn valid_supplier_passes() {
        assert!(sample().validate().is_ok());
    }

    #[test]
    fn quality_out_of_range_rejected() {
        let mut s = sample();
        s.quality = 101.0;
        match s.validate() {
            Err(SourceError::InvalidSupplier { id, reason }) => {
                assert_eq!(id, SupplierId(1));
                assert!(reason.contains("quality"));
            }
            other => panic!("expected InvalidSupplier, got {other:?}"),
        }
    }

    #[test]
    fn zero_cost_rejected() {
        let mut s = sample();
        s.supply_cost = 0.0;
        assert!(s.validate().is_err());
    }

    #[test]
    fn nan_delivery_rejected() {
        let mut s = sample();
        s.delivery_speed_days = f64::NAN;
        assert!(s.validate().is_err());
    }

    #[test]
    fn negative_experience_rejected() {
        let mut s = sample();
        s.experience_years = -1.0;
        assert!(s.validate().is_err());
    }
}
