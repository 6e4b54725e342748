use thiserror::Error;

use crate::cell::UnitCell;

/// Failures that callers can ask for instead of a flagged-invalid value.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CellError {
    #[error("invalid cell geometry: {0}")]
    InvalidGeometry(UnitCell),

    #[error("cell parameter index {0} is outside 0..=5")]
    OutOfRange(usize),

    #[error("could not parse cell parameters from {input:?}: {reason}")]
    Parse { input: String, reason: String },

    #[error("unknown lattice centering symbol {0:?}")]
    UnknownCentering(String),

    #[error("random lattice sampling gave up after {attempts} attempts")]
    SamplingFailed { attempts: usize },

    #[error("Selling reduction did not converge within {0} cycles")]
    ReductionFailed(usize),
}
