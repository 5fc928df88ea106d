//! Errors surfaced by the simulation controller and lockstep driver.

use std::error::Error;
use std::fmt;

use tincture_core::SourceError;
use tincture_field::FieldError;

use crate::config::ConfigError;

/// Errors from constructing, reloading, or driving a simulation.
#[derive(Debug, PartialEq)]
pub enum ControllerError {
    /// The configuration failed validation.
    Config(ConfigError),
    /// The supplier source failed, or returned an invalid record.
    Source(SourceError),
    /// The fetched suppliers could not be laid out as layers
    /// (for example, two records share an id).
    Layers(FieldError),
    /// The tick thread could not be spawned. The engine is lost with the
    /// failed spawn; [`reload`](crate::SimulationController::reload)
    /// rebuilds it.
    ThreadSpawnFailed {
        /// The OS error text.
        reason: String,
    },
    /// The engine could not be recovered from the tick thread (it panicked,
    /// or a previous spawn failed).
    EngineRecoveryFailed,
}

impl fmt::Display for ControllerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "config: {e}"),
            Self::Source(e) => write!(f, "supplier source: {e}"),
            Self::Layers(e) => write!(f, "layers: {e}"),
            Self::ThreadSpawnFailed { reason } => write!(f, "tick thread spawn failed: {reason}"),
            Self::EngineRecoveryFailed => {
                write!(f, "engine could not be recovered from tick thread")
            }
        }
    }
}

impl Error for ControllerError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::Source(e) => Some(e),
            Self::Layers(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ConfigError> for ControllerError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<SourceError> for ControllerError {
    fn from(e: SourceError) -> Self {
        Self::Source(e)
    }
}

impl From<FieldError> for ControllerError {
    fn from(e: FieldError) -> Self {
        Self::Layers(e)
    }
}
