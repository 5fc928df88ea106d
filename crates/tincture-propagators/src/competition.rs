//! Per-cell competition between layers.
//!
//! Constructed via the builder pattern: [`CompetitionResolver::builder`].

use smallvec::SmallVec;
use tincture_field::{FieldStore, GridShape};

/// Per-cell scratch; ten layers is the reference load.
type CellValues = SmallVec<[f64; 16]>;

/// Rescales layers by strength and lets stronger layers suppress weaker ones.
///
/// For every interior cell, with `v[s] = intensity[s] * strength[s]`:
///
/// 1. if `Σ v < threshold`, every layer at the cell becomes zero;
/// 2. otherwise each layer becomes
///    `max(0, v[s] - factor * Σ_{t : v[t] > v[s]} (v[t] - v[s]))`.
///
/// Every reduction is measured against the scaled snapshot `v`, so the
/// result does not depend on the order in which layer pairs are visited.
/// The strongest layer at a cell is never reduced.
#[derive(Clone, Debug)]
pub struct CompetitionResolver {
    factor: f64,
    threshold: f64,
}

/// Builder for [`CompetitionResolver`].
///
/// Defaults: factor `0.1`, threshold `0.001`.
pub struct CompetitionResolverBuilder {
    factor: f64,
    threshold: f64,
}

impl CompetitionResolver {
    /// Reference competition factor.
    pub const DEFAULT_FACTOR: f64 = 0.1;
    /// Reference total-intensity threshold below which a cell is cleared.
    pub const DEFAULT_THRESHOLD: f64 = 0.001;

    /// Create a new builder.
    pub fn builder() -> CompetitionResolverBuilder {
        CompetitionResolverBuilder {
            factor: Self::DEFAULT_FACTOR,
            threshold: Self::DEFAULT_THRESHOLD,
        }
    }

    /// Configured competition factor.
    pub fn factor(&self) -> f64 {
        self.factor
    }

    /// Configured clearing threshold.
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Resolve one cell given each layer's raw intensity, in place.
    ///
    /// `values[s]` is layer `s`'s intensity on entry and its resolved
    /// intensity on return.
    ///
    /// # Panics
    ///
    /// Panics if `values` and `strengths` differ in length.
    pub fn resolve_cell(&self, values: &mut [f64], strengths: &[f64]) {
        assert_eq!(values.len(), strengths.len(), "one strength per layer");
        let mut scaled: CellValues = values
            .iter()
            .zip(strengths)
            .map(|(&v, &s)| v * s)
            .collect();
        self.resolve_scaled(&mut scaled);
        values.copy_from_slice(&scaled);
    }

    fn resolve_scaled(&self, v: &mut CellValues) {
        let total: f64 = v.iter().sum();
        if total < self.threshold {
            v.iter_mut().for_each(|x| *x = 0.0);
            return;
        }
        let snapshot = v.clone();
        for (out, &mine) in v.iter_mut().zip(&snapshot) {
            let gap: f64 = snapshot
                .iter()
                .filter(|&&other| other > mine)
                .map(|&other| other - mine)
                .sum();
            *out = (mine - self.factor * gap).max(0.0);
        }
    }

    /// Resolve every interior cell of `field` in place.
    ///
    /// `field` holds `strengths.len()` whole planes of `shape`, laid out as
    /// [`FieldStore`] lays them out. Border cells are not touched.
    ///
    /// # Panics
    ///
    /// Panics if `field.len() != shape.cell_count() * strengths.len()`.
    pub fn resolve(&self, field: &mut [f64], shape: GridShape, strengths: &[f64]) {
        let plane = shape.cell_count();
        assert_eq!(
            field.len(),
            plane * strengths.len(),
            "field is not one plane per strength"
        );
        let w = shape.width() as usize;
        let h = shape.height() as usize;
        if w < 3 || h < 3 || strengths.is_empty() {
            return;
        }

        let mut cell = CellValues::with_capacity(strengths.len());
        for x in 1..w - 1 {
            for y in 1..h - 1 {
                let i = shape.index(x, y);
                cell.clear();
                cell.extend(
                    strengths
                        .iter()
                        .enumerate()
                        .map(|(layer, &s)| field[layer * plane + i] * s),
                );
                self.resolve_scaled(&mut cell);
                for (layer, &v) in cell.iter().enumerate() {
                    field[layer * plane + i] = v;
                }
            }
        }
    }

    /// Resolve the current buffer of `store` using its layer strengths.
    pub fn resolve_store(&self, store: &mut FieldStore) {
        let shape = store.shape();
        let (field, layers) = store.competition_mut();
        let strengths: CellValues = layers.iter().map(|(_, layer)| layer.strength).collect();
        self.resolve(field, shape, &strengths);
    }
}

impl CompetitionResolverBuilder {
    /// Set the competition factor (default 0.1). Must be finite and >= 0.
    pub fn factor(mut self, factor: f64) -> Self {
        self.factor = factor;
        self
    }

    /// Set the clearing threshold (default 0.001). Must be finite and >= 0.
    pub fn threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Build the resolver, validating the configuration.
    ///
    /// # Errors
    ///
    /// Returns `Err` if `factor` or `threshold` is negative or non-finite.
    pub fn build(self) -> Result<CompetitionResolver, String> {
        if !(self.factor >= 0.0) || !self.factor.is_finite() {
            return Err(format!(
                "factor must be finite and >= 0, got {}",
                self.factor
            ));
        }
        if !(self.threshold >= 0.0) || !self.threshold.is_finite() {
            return Err(format!(
                "threshold must be finite and >= 0, got {}",
                self.threshold
            ));
        }
        Ok(CompetitionResolver {
            factor: self.factor,
            threshold: self.threshold,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference() -> CompetitionResolver {
        CompetitionResolver::builder().build().unwrap()
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-12
    }

    #[test]
    fn builder_defaults() {
        let r = reference();
        assert_eq!(r.factor(), 0.1);
        assert_eq!(r.threshold(), 0.001);
    }

    #[test]
    fn builder_rejects_negative_factor() {
        let result = CompetitionResolver::builder().factor(-1.0).build();
        assert!(result.unwrap_err().contains("factor"));
    }

    #[test]
    fn builder_rejects_infinite_threshold() {
        let result = CompetitionResolver::builder()
            .threshold(f64::INFINITY)
            .build();
        assert!(result.unwrap_err().contains("threshold"));
    }

    #[test]
    fn weaker_layer_suppressed_stronger_unchanged() {
        let mut v = [0.8, 0.2];
        reference().resolve_cell(&mut v, &[1.0, 1.0]);
        assert!(close(v[0], 0.8));
        assert!(close(v[1], 0.2 - 0.1 * 0.6));
    }

    #[test]
    fn strength_scaling_applied_first() {
        let mut v = [0.5, 0.5];
        reference().resolve_cell(&mut v, &[1.05, 0.95]);
        let (a, b) = (0.5 * 1.05, 0.5 * 0.95);
        assert!(close(v[0], a));
        assert!(close(v[1], b - 0.1 * (a - b)));
    }

    #[test]
    fn reduction_clamped_at_zero() {
        let mut v = [10.0, 0.1];
        CompetitionResolver::builder()
            .factor(0.5)
            .build()
            .unwrap()
            .resolve_cell(&mut v, &[1.0, 1.0]);
        assert_eq!(v[1], 0.0);
        assert_eq!(v[0], 10.0);
    }

    #[test]
    fn below_threshold_cleared() {
        let mut v = [0.0004, 0.0005];
        reference().resolve_cell(&mut v, &[1.0, 1.0]);
        assert_eq!(v, [0.0, 0.0]);
    }

    #[test]
    fn reductions_accumulate_against_snapshot() {
        let mut v = [0.9, 0.5, 0.3];
        reference().resolve_cell(&mut v, &[1.0, 1.0, 1.0]);
        assert!(close(v[0], 0.9));
        assert!(close(v[1], 0.5 - 0.1 * 0.4));
        // measured against the original 0.5, not the already-reduced 0.46
        assert!(close(v[2], 0.3 - 0.1 * (0.6 + 0.2)));
    }

    #[test]
    fn equal_layers_do_not_compete() {
        let mut v = [0.3, 0.3];
        reference().resolve_cell(&mut v, &[1.0, 1.0]);
        assert_eq!(v, [0.3, 0.3]);
    }

    #[test]
    fn resolve_skips_border() {
        let g = GridShape::new(3, 3).unwrap();
        let mut field = vec![0.0002; 18];
        field[g.index(1, 1)] = 0.5;
        reference().resolve(&mut field, g, &[1.0, 1.0]);
        // interior (1,1): total 0.5002 above threshold, layer 1 suppressed
        assert!(close(field[g.index(1, 1)], 0.5));
        let b: f64 = 0.0002 - 0.1 * (0.5 - 0.0002);
        assert!(close(field[9 + g.index(1, 1)], b.max(0.0)));
        // border cells below threshold but untouched
        assert_eq!(field[g.index(0, 0)], 0.0002);
        assert_eq!(field[9 + g.index(2, 1)], 0.0002);
    }
}
