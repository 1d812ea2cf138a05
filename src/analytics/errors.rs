use crate::physics::propagator::PropagationError;
use std::{error::Error, fmt};

/// Errors surfaced by a single recomputation. Nothing here is fatal to the
/// process: a failed request leaves prior results untouched and is retried
/// by re-issuing the same input set.
#[derive(Debug)]
pub enum AnalyticsError {
    InvalidInput(String),
    Propagation(PropagationError),
    Clock(hifitime::errors::Errors),
}

impl fmt::Display for AnalyticsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnalyticsError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            AnalyticsError::Propagation(e) => write!(f, "Propagation failed: {}", e),
            AnalyticsError::Clock(e) => write!(f, "Failed to read system clock: {}", e),
        }
    }
}

impl Error for AnalyticsError {}

// Implement `From<T>` conversions for automatic error mapping
impl From<PropagationError> for AnalyticsError {
    fn from(err: PropagationError) -> Self {
        AnalyticsError::Propagation(err)
    }
}

impl From<hifitime::errors::Errors> for AnalyticsError {
    fn from(err: hifitime::errors::Errors) -> Self {
        AnalyticsError::Clock(err)
    }
}
