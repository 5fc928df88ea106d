//! 3×3 convolution kernels.

/// Weights of a 3×3 stencil, indexed `[dx + 1][dy + 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Kernel3x3 {
    weights: [[f64; 3]; 3],
}

impl Kernel3x3 {
    /// Kernel with explicit weights, indexed `[dx + 1][dy + 1]`.
    pub const fn new(weights: [[f64; 3]; 3]) -> Self {
        Self { weights }
    }

    /// Five-point Laplacian scaled by 0.7: neighbours `0.7`, centre `-2.8`,
    /// corners `0`.
    ///
    /// ```text
    ///  0    0.7   0
    ///  0.7 -2.8   0.7
    ///  0    0.7   0
    /// ```
    pub const fn laplacian() -> Self {
        Self::new([[0.0, 0.7, 0.0], [0.7, -2.8, 0.7], [0.0, 0.7, 0.0]])
    }

    /// Weight applied to the neighbour at offset `(dx, dy)`, each in `-1..=1`.
    ///
    /// # Panics
    ///
    /// Panics if either offset is outside `-1..=1`.
    pub fn weight(&self, dx: i32, dy: i32) -> f64 {
        self.weights[(dx + 1) as usize][(dy + 1) as usize]
    }

    /// All nine weights.
    pub fn weights(&self) -> &[[f64; 3]; 3] {
        &self.weights
    }

    /// Sum of all weights. Zero for a mass-preserving stencil.
    pub fn sum(&self) -> f64 {
        self.weights.iter().flatten().sum()
    }

    /// Whether every weight is finite.
    pub fn is_finite(&self) -> bool {
        self.weights.iter().flatten().all(|w| w.is_finite())
    }
}

impl Default for Kernel3x3 {
    fn default() -> Self {
        Self::laplacian()
    }
}
