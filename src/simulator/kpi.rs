//! Simulation quality metrics (KPIs).
//!
//! Computes admission performance indicators from a finished report.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Makespan | Latest departure time |
//! | Survival Rate | alive / patients |
//! | Mortality Rate | dead / patients |
//! | Max Wait | Longest single wait (any outcome) |
//! | Avg Survivor Wait | Mean wait of admitted patients |
//! | Bed Utilization | occupied minutes / makespan, per bed |

use serde::{Deserialize, Serialize};

use crate::models::{Outcome, ResultReport};

/// Simulation performance indicators. Times are in minutes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationKpi {
    /// Latest departure time.
    pub makespan: i64,
    /// Fraction of patients admitted (0.0..1.0).
    pub survival_rate: f64,
    /// Fraction of patients who died waiting (0.0..1.0).
    pub mortality_rate: f64,
    /// Longest wait of any patient.
    pub max_wait_minutes: i64,
    /// Mean wait of admitted patients.
    pub avg_survivor_wait_minutes: f64,
    /// Occupied minutes per bed (index 0 = bed 1).
    pub occupied_minutes_by_bed: Vec<i64>,
    /// Utilization per bed (index 0 = bed 1).
    pub utilization_by_bed: Vec<f64>,
    /// Mean utilization over all beds.
    pub avg_utilization: f64,
}

impl SimulationKpi {
    /// Computes KPIs from a report produced on `bed_count` beds.
    pub fn calculate(report: &ResultReport, bed_count: usize) -> Self {
        let makespan = report.makespan();

        let mut occupied = vec![0i64; bed_count];
        for a in &report.admissions {
            if let Some(slot) = a.bed.checked_sub(1).and_then(|i| occupied.get_mut(i)) {
                *slot = slot.saturating_add(a.departure_time - a.admission_time);
            }
        }

        let utilization_by_bed: Vec<f64> = occupied
            .iter()
            .map(|&minutes| {
                if makespan <= 0 {
                    0.0
                } else {
                    minutes as f64 / makespan as f64
                }
            })
            .collect();
        let avg_utilization = if utilization_by_bed.is_empty() {
            0.0
        } else {
            utilization_by_bed.iter().sum::<f64>() / utilization_by_bed.len() as f64
        };

        let max_wait_minutes = report
            .outcomes
            .iter()
            .map(|o| o.wait_minutes)
            .max()
            .unwrap_or(0);

        let survivor_waits: Vec<i64> = report
            .outcomes
            .iter()
            .filter(|o| o.outcome == Outcome::Survived)
            .map(|o| o.wait_minutes)
            .collect();
        let avg_survivor_wait_minutes = if survivor_waits.is_empty() {
            0.0
        } else {
            survivor_waits.iter().sum::<i64>() as f64 / survivor_waits.len() as f64
        };

        let patients = report.patient_count();
        let mortality_rate = if patients == 0 {
            0.0
        } else {
            report.dead_count as f64 / patients as f64
        };

        Self {
            makespan,
            survival_rate: report.survival_rate(),
            mortality_rate,
            max_wait_minutes,
            avg_survivor_wait_minutes,
            occupied_minutes_by_bed: occupied,
            utilization_by_bed,
            avg_utilization,
        }
    }

    /// Whether the run meets the given quality thresholds.
    pub fn meets_thresholds(&self, min_survival_rate: f64, max_wait_minutes: i64) -> bool {
        self.survival_rate >= min_survival_rate && self.max_wait_minutes <= max_wait_minutes
    }
}
