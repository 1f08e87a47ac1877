//! Errors raised by the rank estimators

use thiserror::Error;

/// Errors that can occur while computing ranks
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AlgoError {
    #[error("Invalid parameter {name} = {value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },

    #[error("Graph has no pages")]
    EmptyGraph,

    #[error("Page {0} not found in graph")]
    UnknownPage(String),

    #[error("Internal invariant violated: {0}")]
    InvariantViolation(String),
}

pub type AlgoResult<T> = Result<T, AlgoError>;

/// Reject damping factors outside the open interval (0, 1)
pub fn check_damping(damping: f64) -> AlgoResult<()> {
    if damping > 0.0 && damping < 1.0 {
        Ok(())
    } else {
        Err(AlgoError::InvalidParameter {
            name: "damping_factor",
            value: damping,
            reason: "must be strictly between 0 and 1",
        })
    }
}

/// Reject tolerances that are not finite and strictly positive
pub fn check_tolerance(tolerance: f64) -> AlgoResult<()> {
    if tolerance.is_finite() && tolerance > 0.0 {
        Ok(())
    } else {
        Err(AlgoError::InvalidParameter {
            name: "tolerance",
            value: tolerance,
            reason: "must be finite and greater than 0",
        })
    }
}

/// Reject a zero sample count
pub fn check_samples(samples: usize) -> AlgoResult<()> {
    if samples >= 1 {
        Ok(())
    } else {
        Err(AlgoError::InvalidParameter {
            name: "samples",
            value: samples as f64,
            reason: "at least one sample is required",
        })
    }
}
