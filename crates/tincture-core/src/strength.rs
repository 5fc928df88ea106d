//! Attribute normalizer: business attributes → per-layer diffusion strength.
//!
//! Each supplier gets a raw score from a weighted sum of its attributes,
//! with cost and delivery time inverted against the batch maximum so that
//! cheaper and faster suppliers score higher. Raw scores are then rescaled
//! linearly into `[MIN_STRENGTH, MAX_STRENGTH]`.

use crate::supplier::Supplier;

/// Strength assigned to the weakest supplier in a batch.
pub const MIN_STRENGTH: f64 = 0.95;

/// Upper bound of the strength range (never reached exactly).
pub const MAX_STRENGTH: f64 = 1.05;

/// Guards the rescale against a zero raw-score spread.
const SPREAD_EPSILON: f64 = 1e-6;

/// Experience beyond this many years earns no extra score.
const EXPERIENCE_CAP_YEARS: f64 = 10.0;

/// Weights of the five attributes in the raw score.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StrengthWeights {
    /// Weight of `quality / 100`. Default: 0.30.
    pub quality: f64,
    /// Weight of `reliability / 100`. Default: 0.25.
    pub reliability: f64,
    /// Weight of `min(experience / 10, 1)`. Default: 0.15.
    pub experience: f64,
    /// Weight of `1 - cost / max_cost`. Default: 0.15.
    pub cost_advantage: f64,
    /// Weight of `1 - days / max_days`. Default: 0.15.
    pub speed_advantage: f64,
}

impl Default for StrengthWeights {
    fn default() -> Self {
        Self {
            quality: 0.30,
            reliability: 0.25,
            experience: 0.15,
            cost_advantage: 0.15,
            speed_advantage: 0.15,
        }
    }
}

impl StrengthWeights {
    /// Raw (unnormalized) score of one supplier.
    ///
    /// `max_cost` and `max_speed` are the batch maxima of `supply_cost` and
    /// `delivery_speed_days`; both must be positive.
    pub fn raw_score(&self, supplier: &Supplier, max_cost: f64, max_speed: f64) -> f64 {
        let quality = supplier.quality / 100.0;
        let reliability = supplier.reliability / 100.0;
        let experience = (supplier.experience_years / EXPERIENCE_CAP_YEARS).min(1.0);
        let cost_factor = 1.0 - (supplier.supply_cost / max_cost).min(1.0);
        let speed_factor = 1.0 - (supplier.delivery_speed_days / max_speed).min(1.0);

        self.quality * quality
            + self.reliability * reliability
            + self.experience * experience
            + self.cost_advantage * cost_factor
            + self.speed_advantage * speed_factor
    }

    /// Strength table for `suppliers`, one value per supplier in input order.
    ///
    /// Returns an empty table for an empty batch. When every raw score is
    /// equal, every strength is exactly [`MIN_STRENGTH`].
    pub fn normalize(&self, suppliers: &[Supplier]) -> Vec<f64> {
        if suppliers.is_empty() {
            return Vec::new();
        }

        let max_cost = suppliers
            .iter()
            .map(|s| s.supply_cost)
            .fold(f64::NEG_INFINITY, f64::max);
        let max_speed = suppliers
            .iter()
            .map(|s| s.delivery_speed_days)
            .fold(f64::NEG_INFINITY, f64::max);

        let raw: Vec<f64> = suppliers
            .iter()
            .map(|s| self.raw_score(s, max_cost, max_speed))
            .collect();

        let min_raw = raw.iter().copied().fold(f64::INFINITY, f64::min);
        let max_raw = raw.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let spread = max_raw - min_raw + SPREAD_EPSILON;

        raw.into_iter()
            .map(|v| MIN_STRENGTH + (v - min_raw) / spread * (MAX_STRENGTH - MIN_STRENGTH))
            .collect()
    }
}

/// Raw score with the default weights.
pub fn raw_score(supplier: &Supplier, max_cost: f64, max_speed: f64) -> f64 {
    StrengthWeights::default().raw_score(supplier, max_cost, max_speed)
}

/// Strength table with the default weights.
pub fn normalize_strengths(suppliers: &[Supplier]) -> Vec<f64> {
    StrengthWeights::default().normalize(suppliers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id::SupplierId;
    use proptest::prelude::*;

    fn supplier(id: u32, quality: f64, exp: f64, rel: f64, cost: f64, days: f64) -> Supplier {
        Supplier {
            id: SupplierId(id),
            name: format!("s{id}"),
            quality,
            experience_years: exp,
            reliability: rel,
            supply_cost: cost,
            delivery_speed_days: days,
        }
    }

    #[test]
    fn empty_batch_yields_empty_table() {
        assert!(normalize_strengths(&[]).is_empty());
    }

    #[test]
    fn single_supplier_is_min_strength() {
        let s = [supplier(0, 90.0, 12.0, 99.0, 10.0, 1.0)];
        assert_eq!(normalize_strengths(&s), vec![MIN_STRENGTH]);
    }

    #[test]
    fn identical_suppliers_all_min_strength() {
        let batch: Vec<_> = (0..5)
            .map(|i| supplier(i, 70.0, 3.0, 80.0, 500.0, 4.0))
            .collect();
        let strengths = normalize_strengths(&batch);
        assert_eq!(strengths.len(), 5);
        assert!(strengths.iter().all(|&s| s == MIN_STRENGTH));
    }

    #[test]
    fn best_supplier_gets_near_max() {
        let batch = [
            supplier(0, 100.0, 10.0, 100.0, 1.0, 1.0),
            supplier(1, 0.0, 0.0, 0.0, 100.0, 10.0),
        ];
        let strengths = normalize_strengths(&batch);
        assert_eq!(strengths[1], MIN_STRENGTH);
        assert!(strengths[0] < MAX_STRENGTH);
        assert!(MAX_STRENGTH - strengths[0] < 1e-6);
    }

    #[test]
    fn experience_is_capped_at_ten_years() {
        let a = supplier(0, 50.0, 10.0, 50.0, 5.0, 5.0);
        let b = supplier(1, 50.0, 40.0, 50.0, 5.0, 5.0);
        assert_eq!(raw_score(&a, 10.0, 10.0), raw_score(&b, 10.0, 10.0));
    }

    #[test]
    fn cheaper_and_faster_scores_higher() {
        let cheap = supplier(0, 50.0, 1.0, 50.0, 100.0, 2.0);
        let dear = supplier(1, 50.0, 1.0, 50.0, 400.0, 8.0);
        assert!(raw_score(&cheap, 400.0, 8.0) > raw_score(&dear, 400.0, 8.0));
    }

    #[test]
    fn raw_score_matches_weighted_sum() {
        let s = supplier(0, 80.0, 5.0, 60.0, 50.0, 2.0);
        // 0.3*0.8 + 0.25*0.6 + 0.15*0.5 + 0.15*(1-0.5) + 0.15*(1-0.5)
        let expected = 0.24 + 0.15 + 0.075 + 0.075 + 0.075;
        assert!((raw_score(&s, 100.0, 4.0) - expected).abs() < 1e-12);
    }

    fn arb_supplier() -> impl Strategy<Value = Supplier> {
        (
            0.0f64..=100.0,
            0.0f64..30.0,
            0.0f64..=100.0,
            0.01f64..10_000.0,
            0.1f64..60.0,
        )
            .prop_map(|(q, e, r, c, d)| supplier(0, q, e, r, c, d))
    }

    proptest! {
        #[test]
        fn strengths_stay_in_range(batch in prop::collection::vec(arb_supplier(), 1..12)) {
            let strengths = normalize_strengths(&batch);
            prop_assert_eq!(strengths.len(), batch.len());
            for s in strengths {
                prop_assert!(s.is_finite());
                prop_assert!((MIN_STRENGTH..=MAX_STRENGTH).contains(&s), "strength {} out of range", s);
            }
        }

        #[test]
        fn normalization_preserves_order(batch in prop::collection::vec(arb_supplier(), 2..12)) {
            let max_cost = batch.iter().map(|s| s.supply_cost).fold(f64::NEG_INFINITY, f64::max);
            let max_speed = batch.iter().map(|s| s.delivery_speed_days).fold(f64::NEG_INFINITY, f64::max);
            let raw: Vec<f64> = batch.iter().map(|s| raw_score(s, max_cost, max_speed)).collect();
            let strengths = normalize_strengths(&batch);
            for i in 0..batch.len() {
                for j in 0..batch.len() {
                    if raw[i] > raw[j] {
                        prop_assert!(strengths[i] >= strengths[j]);
                    }
                }
            }
        }
    }
}
