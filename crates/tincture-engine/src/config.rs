//! Simulation configuration, validation, and error types.
//!
//! [`SimConfig`] carries every tunable of a run with the reference values as
//! its `Default`. [`validate()`](SimConfig::validate) checks all of them up
//! front; the engine builds its passes through the same constructors, so a
//! config that validates always produces a working engine.

use std::error::Error;
use std::fmt;
use std::time::Duration;

use tincture_field::{FieldError, GridShape, SeedPlacer};
use tincture_propagators::{CompetitionResolver, DiffusionStepper, Kernel3x3};
use tincture_render::{FrameRenderer, PixelLayout, RenderError};

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`SimConfig::validate()`].
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// Grid dimensions or seed size are invalid.
    Field(FieldError),
    /// Frame geometry or brightness floor is invalid.
    Render(RenderError),
    /// Diffusion rate or kernel rejected.
    InvalidDiffusion {
        /// Description of the validation failure.
        reason: String,
    },
    /// Competition factor or threshold rejected.
    InvalidCompetition {
        /// Description of the validation failure.
        reason: String,
    },
    /// `tick_interval` is zero.
    ZeroTickInterval,
    /// `max_suppliers` is zero or above [`SimConfig::MAX_LAYERS`].
    InvalidSupplierLimit {
        /// The configured limit.
        configured: usize,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Field(e) => write!(f, "field: {e}"),
            Self::Render(e) => write!(f, "render: {e}"),
            Self::InvalidDiffusion { reason } => write!(f, "invalid diffusion: {reason}"),
            Self::InvalidCompetition { reason } => write!(f, "invalid competition: {reason}"),
            Self::ZeroTickInterval => write!(f, "tick_interval must be non-zero"),
            Self::InvalidSupplierLimit { configured } => write!(
                f,
                "max_suppliers must be in 1..={}, got {configured}",
                SimConfig::MAX_LAYERS
            ),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Field(e) => Some(e),
            Self::Render(e) => Some(e),
            _ => None,
        }
    }
}

impl From<FieldError> for ConfigError {
    fn from(e: FieldError) -> Self {
        Self::Field(e)
    }
}

impl From<RenderError> for ConfigError {
    fn from(e: RenderError) -> Self {
        Self::Render(e)
    }
}

// ── SimConfig ──────────────────────────────────────────────────────

/// Complete configuration for a simulation run.
#[derive(Clone, Debug, PartialEq)]
pub struct SimConfig {
    /// Grid columns. Default: 200.
    pub width: u32,
    /// Grid rows. Default: 200.
    pub height: u32,
    /// Diffusion rate applied to the kernel sum. Default: 0.28.
    pub diffusion_rate: f64,
    /// Diffusion stencil. Default: [`Kernel3x3::laplacian`].
    pub kernel: Kernel3x3,
    /// Fraction of each pairwise gap taken from the weaker layer. Default: 0.1.
    pub competition_factor: f64,
    /// Cells whose scaled total is below this are cleared. Default: 0.001.
    pub competition_threshold: f64,
    /// Side of each seed block. Default: 5.
    pub seed_size: u32,
    /// Brightness floor of rendered pixels, in `[0, 1]`. Default: 0.3.
    pub min_brightness: f64,
    /// Time between tick starts in the background loop. Default: 50 ms.
    pub tick_interval: Duration,
    /// Upper bound on suppliers fetched from the source. Default: 10.
    pub max_suppliers: usize,
    /// Frame row stride in bytes. `None` = tightly packed (`width * 4`).
    pub stride: Option<usize>,
    /// RNG seed for seed placement and colours. `None` = drawn from entropy.
    pub seed: Option<u64>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            width: 200,
            height: 200,
            diffusion_rate: DiffusionStepper::DEFAULT_RATE,
            kernel: Kernel3x3::laplacian(),
            competition_factor: CompetitionResolver::DEFAULT_FACTOR,
            competition_threshold: CompetitionResolver::DEFAULT_THRESHOLD,
            seed_size: 5,
            min_brightness: FrameRenderer::DEFAULT_MIN_BRIGHTNESS,
            tick_interval: Duration::from_millis(50),
            max_suppliers: 10,
            stride: None,
            seed: None,
        }
    }
}

impl SimConfig {
    /// Largest accepted `max_suppliers`.
    pub const MAX_LAYERS: usize = 256;

    /// Validate every parameter.
    pub fn validate(&self) -> Result<(), ConfigError> {
        // 1. Grid, then frame geometry over that grid.
        self.shape()?;
        self.pixel_layout()?;
        // 2. Passes.
        self.diffusion()?;
        self.competition()?;
        self.renderer()?;
        self.seed_placer()?;
        // 3. Loop and source bounds.
        if self.tick_interval.is_zero() {
            return Err(ConfigError::ZeroTickInterval);
        }
        if self.max_suppliers == 0 || self.max_suppliers > Self::MAX_LAYERS {
            return Err(ConfigError::InvalidSupplierLimit {
                configured: self.max_suppliers,
            });
        }
        Ok(())
    }

    pub(crate) fn shape(&self) -> Result<GridShape, ConfigError> {
        Ok(GridShape::new(self.width, self.height)?)
    }

    pub(crate) fn pixel_layout(&self) -> Result<PixelLayout, ConfigError> {
        let layout = match self.stride {
            Some(stride) => PixelLayout::with_stride(self.width, self.height, stride)?,
            None => PixelLayout::tight(self.width, self.height)?,
        };
        Ok(layout)
    }

    pub(crate) fn diffusion(&self) -> Result<DiffusionStepper, ConfigError> {
        DiffusionStepper::builder()
            .rate(self.diffusion_rate)
            .kernel(self.kernel)
            .build()
            .map_err(|reason| ConfigError::InvalidDiffusion { reason })
    }

    pub(crate) fn competition(&self) -> Result<CompetitionResolver, ConfigError> {
        CompetitionResolver::builder()
            .factor(self.competition_factor)
            .threshold(self.competition_threshold)
            .build()
            .map_err(|reason| ConfigError::InvalidCompetition { reason })
    }

    pub(crate) fn renderer(&self) -> Result<FrameRenderer, ConfigError> {
        Ok(FrameRenderer::new(self.min_brightness)?)
    }

    pub(crate) fn seed_placer(&self) -> Result<SeedPlacer, ConfigError> {
        Ok(SeedPlacer::new(self.seed_size)?)
    }
}
