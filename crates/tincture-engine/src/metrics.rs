//! Per-tick performance metrics.
//!
//! [`StepMetrics`] captures timing for one tick plus the field's total
//! intensity after competition, for telemetry and profiling.

/// Timing and mass collected during a single tick.
///
/// All durations are in microseconds.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StepMetrics {
    /// Wall-clock time for the entire tick.
    pub total_us: u64,
    /// Time spent in the diffusion pass, swap included.
    pub diffusion_us: u64,
    /// Time spent in the competition pass.
    pub competition_us: u64,
    /// Time spent rendering the frame.
    pub render_us: u64,
    /// Time spent handing the frame to the slot.
    pub publish_us: u64,
    /// Sum of all layer intensities after competition.
    pub total_mass: f64,
}
