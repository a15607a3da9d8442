//! Patient record model.
//!
//! A patient is the unit of work admitted to the bed pool. The record is
//! immutable input: ordering policies reorder records but never change
//! their fields, and simulation outcomes live in the result report.
//!
//! # Time Representation
//! All times are whole simulated minutes relative to the run epoch (t=0).

use serde::{Deserialize, Serialize};

/// A patient awaiting a hospital bed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatientRecord {
    /// Opaque identifier, unique within a run.
    pub id: u32,
    /// Minute at which the patient becomes available for admission.
    pub arrival_time: i64,
    /// Minutes a bed stays occupied once the patient is admitted.
    pub hospitalization_duration: i64,
    /// Minutes after arrival the patient survives without a bed.
    pub survival_window: i64,
}

impl PatientRecord {
    /// Creates a patient record.
    pub fn new(
        id: u32,
        arrival_time: i64,
        hospitalization_duration: i64,
        survival_window: i64,
    ) -> Self {
        Self {
            id,
            arrival_time,
            hospitalization_duration,
            survival_window,
        }
    }

    /// Last minute at which the patient is still alive while unadmitted.
    ///
    /// The patient dies at the first clock value strictly greater than this.
    /// Saturates at `i64::MAX` (never dies).
    #[inline]
    pub fn deadline(&self) -> i64 {
        self.arrival_time.saturating_add(self.survival_window)
    }

    /// Whether the patient is dead at simulated time `time` if still waiting.
    #[inline]
    pub fn is_dead_at(&self, time: i64) -> bool {
        time > self.deadline()
    }
}

/// Final status of a patient after simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Admitted to a bed before the survival window elapsed.
    Survived,
    /// Survival window elapsed while waiting.
    Died,
}
