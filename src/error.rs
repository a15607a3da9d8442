//! Crate error type.

use thiserror::Error;

use crate::validation::ValidationError;

/// Errors returned by the simulator.
///
/// Every error is raised before any simulation work starts, so a failed
/// call never yields a partial report.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimulationError {
    #[error("invalid bed count: {bed_count}")]
    InvalidBedCount { bed_count: usize },

    #[error("invalid patient record: {0}")]
    InvalidPatientRecord(#[from] ValidationError),
}
