//! Admission ordering policies.
//!
//! Turns a raw patient list into the sequence the simulator processes.
//!
//! - **FCFS**: stable sort by arrival time.
//! - **SJF**: arrival order, immediate-service pre-pass, then busy-window
//!   reordering by hospitalization duration.
//! - **PS**: same as SJF, keyed by survival window (time to death).
//!
//! All functions borrow their input and return a new sequence; the
//! caller's list is never reordered or modified.
//!
//! # Usage
//!
//! ```
//! use u_bedsim::models::PatientRecord;
//! use u_bedsim::ordering::Policy;
//!
//! let patients = vec![
//!     PatientRecord::new(1, 0, 10, 100),
//!     PatientRecord::new(2, 0, 3, 100),
//! ];
//! let order = Policy::Sjf.order(&patients, 1);
//! assert_eq!(order[0].id, 2);
//! ```

mod classify;
pub mod keys;
mod window;

pub use classify::{classify, ClassifiedPatient};
pub use window::{should_swap, ReorderStrategy, WindowedBubbleSort};

use std::fmt::{self, Debug};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::models::PatientRecord;

/// Sort key used to rank contending patients.
///
/// # Score Convention
/// **Lower key = admitted first.**
pub trait UrgencyKey: Send + Sync + Debug {
    /// Key name (e.g., "SJF", "PS").
    fn name(&self) -> &'static str;

    /// Evaluates the key for a patient.
    fn key(&self, patient: &PatientRecord) -> i64;

    /// Key description.
    fn description(&self) -> &'static str {
        self.name()
    }
}

/// An admission ordering policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Policy {
    /// First come, first served.
    #[serde(rename = "FCFS")]
    Fcfs,
    /// Shortest job (hospitalization) first.
    #[serde(rename = "SJF")]
    Sjf,
    /// Priority scheduling by time to death.
    #[serde(rename = "PS")]
    Ps,
}

impl Policy {
    /// All policies, in comparison order.
    pub const ALL: [Policy; 3] = [Policy::Fcfs, Policy::Sjf, Policy::Ps];

    /// Short policy name.
    pub fn name(&self) -> &'static str {
        match self {
            Policy::Fcfs => "FCFS",
            Policy::Sjf => "SJF",
            Policy::Ps => "PS",
        }
    }

    /// Orders `patients` for admission under this policy.
    ///
    /// `bed_count` only affects SJF/PS, whose pre-pass replays arrivals
    /// against a pool of that size.
    pub fn order(&self, patients: &[PatientRecord], bed_count: usize) -> Vec<PatientRecord> {
        match self {
            Policy::Fcfs => order_fcfs(patients),
            Policy::Sjf => order_sjf(patients, bed_count),
            Policy::Ps => order_ps(patients, bed_count),
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// First come, first served: stable sort by arrival time.
pub fn order_fcfs(patients: &[PatientRecord]) -> Vec<PatientRecord> {
    let mut ordered = patients.to_vec();
    ordered.sort_by_key(|p| keys::EarliestArrival.key(p));
    ordered
}

/// Shortest job first within busy windows.
pub fn order_sjf(patients: &[PatientRecord], bed_count: usize) -> Vec<PatientRecord> {
    order_windowed(patients, bed_count, &keys::ShortestJob, &WindowedBubbleSort)
}

/// Most urgent (shortest survival window) first within busy windows.
pub fn order_ps(patients: &[PatientRecord], bed_count: usize) -> Vec<PatientRecord> {
    order_windowed(patients, bed_count, &keys::MostUrgent, &WindowedBubbleSort)
}

/// Pre-pass classification followed by `strategy` reordering under `key`.
///
/// Patients are first put in arrival order (stable, as FCFS); the pre-pass
/// runs on that order and only the reordering step is pluggable.
pub fn order_windowed(
    patients: &[PatientRecord],
    bed_count: usize,
    key: &dyn UrgencyKey,
    strategy: &dyn ReorderStrategy,
) -> Vec<PatientRecord> {
    let mut classified = classify(&order_fcfs(patients), bed_count);
    let immediate = classified.iter().filter(|c| c.admitted_immediately).count();
    debug!(
        "{} pre-pass: {} of {} patients served on arrival with {} beds, reordering with {}",
        key.name(),
        immediate,
        classified.len(),
        bed_count,
        strategy.name()
    );

    strategy.reorder(&mut classified, key);
    classified
        .into_iter()
        .map(ClassifiedPatient::into_record)
        .collect()
}
