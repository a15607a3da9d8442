//! Built-in urgency keys.
//!
//! # Score Convention
//! All keys return lower values for patients that should be admitted first.

use super::UrgencyKey;
use crate::models::PatientRecord;

/// Earliest arrival first. Used by FCFS.
#[derive(Debug, Clone, Copy)]
pub struct EarliestArrival;

impl UrgencyKey for EarliestArrival {
    fn name(&self) -> &'static str {
        "ARRIVAL"
    }

    fn key(&self, patient: &PatientRecord) -> i64 {
        patient.arrival_time
    }

    fn description(&self) -> &'static str {
        "Earliest Arrival"
    }
}

/// Shortest hospitalization first. Used by SJF.
#[derive(Debug, Clone, Copy)]
pub struct ShortestJob;

impl UrgencyKey for ShortestJob {
    fn name(&self) -> &'static str {
        "SJF"
    }

    fn key(&self, patient: &PatientRecord) -> i64 {
        patient.hospitalization_duration
    }

    fn description(&self) -> &'static str {
        "Shortest Hospitalization"
    }
}

/// Shortest survival window first. Used by PS.
#[derive(Debug, Clone, Copy)]
pub struct MostUrgent;

impl UrgencyKey for MostUrgent {
    fn name(&self) -> &'static str {
        "PS"
    }

    fn key(&self, patient: &PatientRecord) -> i64 {
        patient.survival_window
    }

    fn description(&self) -> &'static str {
        "Shortest Time To Death"
    }
}
