//! Explicit-Euler diffusion over every layer plane.
//!
//! Constructed via the builder pattern: [`DiffusionStepper::builder`].

use tincture_field::{FieldStore, GridShape};

use crate::kernel::Kernel3x3;

/// Applies one 3×3 stencil step to every layer.
///
/// For every interior cell of every layer:
/// ```text
/// next[x][y] = max(0, cur[x][y] + rate * Σ kernel[dx][dy] * cur[x+dx][y+dy])
/// ```
/// Border cells of `next` are never written; they keep whatever that buffer
/// held before the pass.
///
/// ```
/// use tincture_propagators::DiffusionStepper;
///
/// let stepper = DiffusionStepper::builder().rate(0.28).build().unwrap();
/// assert_eq!(stepper.rate(), 0.28);
/// ```
#[derive(Clone, Debug)]
pub struct DiffusionStepper {
    rate: f64,
    kernel: Kernel3x3,
}

/// Builder for [`DiffusionStepper`].
///
/// Defaults: rate `0.28`, [`Kernel3x3::laplacian`].
pub struct DiffusionStepperBuilder {
    rate: f64,
    kernel: Kernel3x3,
}

impl DiffusionStepper {
    /// Reference diffusion rate.
    pub const DEFAULT_RATE: f64 = 0.28;

    /// Create a new builder.
    pub fn builder() -> DiffusionStepperBuilder {
        DiffusionStepperBuilder {
            rate: Self::DEFAULT_RATE,
            kernel: Kernel3x3::laplacian(),
        }
    }

    /// Configured diffusion rate.
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Configured stencil.
    pub fn kernel(&self) -> &Kernel3x3 {
        &self.kernel
    }

    /// Diffuse every layer of `current` into `next`.
    ///
    /// Both slices hold whole layer planes back to back, laid out as
    /// [`FieldStore`] lays them out. Grids narrower than 3 cells on either
    /// axis have no interior and are left untouched.
    ///
    /// # Panics
    ///
    /// Panics if the slices differ in length or are not a whole number of
    /// planes of `shape`.
    pub fn step(&self, current: &[f64], next: &mut [f64], shape: GridShape) {
        let plane = shape.cell_count();
        assert_eq!(current.len(), next.len(), "buffers differ in length");
        assert_eq!(current.len() % plane, 0, "buffer is not whole planes");

        let w = shape.width() as usize;
        let h = shape.height() as usize;
        if w < 3 || h < 3 {
            return;
        }

        let weights = self.kernel.weights();
        for (cur, out) in current.chunks_exact(plane).zip(next.chunks_exact_mut(plane)) {
            for x in 1..w - 1 {
                for y in 1..h - 1 {
                    let mut sum = 0.0;
                    for (dx, col) in weights.iter().enumerate() {
                        let row = (x + dx - 1) * h;
                        for (dy, &k) in col.iter().enumerate() {
                            sum += k * cur[row + y + dy - 1];
                        }
                    }
                    let i = x * h + y;
                    out[i] = (cur[i] + self.rate * sum).max(0.0);
                }
            }
        }
    }

    /// Run one pass on `store` and swap, so the result becomes current.
    pub fn step_store(&self, store: &mut FieldStore) {
        let shape = store.shape();
        let (current, next) = store.split_mut();
        self.step(current, next, shape);
        store.swap();
    }
}

impl DiffusionStepperBuilder {
    /// Set the diffusion rate (default 0.28). Must be finite and >= 0.
    pub fn rate(mut self, rate: f64) -> Self {
        self.rate = rate;
        self
    }

    /// Set the stencil (default [`Kernel3x3::laplacian`]).
    pub fn kernel(mut self, kernel: Kernel3x3) -> Self {
        self.kernel = kernel;
        self
    }

    /// Build the stepper, validating the configuration.
    ///
    /// # Errors
    ///
    /// Returns `Err` if `rate` is negative or non-finite, or if any kernel
    /// weight is non-finite.
    pub fn build(self) -> Result<DiffusionStepper, String> {
        if !(self.rate >= 0.0) || !self.rate.is_finite() {
            return Err(format!("rate must be finite and >= 0, got {}", self.rate));
        }
        if !self.kernel.is_finite() {
            return Err("kernel weights must be finite".to_string());
        }
        Ok(DiffusionStepper {
            rate: self.rate,
            kernel: self.kernel,
        })
    }
}
