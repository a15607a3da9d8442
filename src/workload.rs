//! Synthetic patient cohorts.
//!
//! Generates reproducible patient lists for benchmarking and comparing
//! policies. The same seed always yields the same cohort.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::models::PatientRecord;

/// Seeded generator of valid patient records.
///
/// Ids run from 1 to n, arrivals are non-decreasing with random gaps in
/// `0..=max_arrival_gap`, durations and survival windows are drawn
/// uniformly from their inclusive ranges.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkloadGenerator {
    /// RNG seed.
    pub seed: u64,
    /// Largest gap between consecutive arrivals (minutes).
    pub max_arrival_gap: i64,
    /// Inclusive hospitalization duration range (minutes, at least 1).
    pub duration_range: (i64, i64),
    /// Inclusive survival window range (minutes, at least 0).
    pub survival_range: (i64, i64),
}

impl WorkloadGenerator {
    /// Creates a generator with moderate defaults.
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            max_arrival_gap: 10,
            duration_range: (5, 60),
            survival_range: (0, 120),
        }
    }

    /// Sets the largest arrival gap.
    pub fn with_max_arrival_gap(mut self, gap: i64) -> Self {
        self.max_arrival_gap = gap;
        self
    }

    /// Sets the hospitalization duration range.
    pub fn with_duration_range(mut self, min: i64, max: i64) -> Self {
        self.duration_range = (min, max);
        self
    }

    /// Sets the survival window range.
    pub fn with_survival_range(mut self, min: i64, max: i64) -> Self {
        self.survival_range = (min, max);
        self
    }

    /// Generates `count` patients.
    ///
    /// Out-of-order or out-of-domain bounds are normalized so the output
    /// always passes validation.
    pub fn generate(&self, count: usize) -> Vec<PatientRecord> {
        let mut rng = SmallRng::seed_from_u64(self.seed);
        let gap = self.max_arrival_gap.max(0);
        let (dur_lo, dur_hi) = normalize(self.duration_range, 1);
        let (surv_lo, surv_hi) = normalize(self.survival_range, 0);

        let mut arrival = 0i64;
        (1..=count)
            .map(|i| {
                arrival += rng.random_range(0..=gap);
                PatientRecord::new(
                    i as u32,
                    arrival,
                    rng.random_range(dur_lo..=dur_hi),
                    rng.random_range(surv_lo..=surv_hi),
                )
            })
            .collect()
    }
}

fn normalize((a, b): (i64, i64), floor: i64) -> (i64, i64) {
    (a.min(b).max(floor), a.max(b).max(floor))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::validate_patients;

    #[test]
    fn test_deterministic() {
        let generator = WorkloadGenerator::new(42);
        assert_eq!(generator.generate(50), generator.generate(50));
        assert_ne!(generator.generate(50), WorkloadGenerator::new(43).generate(50));
    }

    #[test]
    fn test_generated_records_are_valid() {
        let patients = WorkloadGenerator::new(7)
            .with_duration_range(-3, 4)
            .with_survival_range(9, -9)
            .with_max_arrival_gap(-1)
            .generate(100);

        assert!(validate_patients(&patients).is_ok());
        assert!(patients.iter().all(|p| p.arrival_time == 0));
        assert!(patients
            .iter()
            .all(|p| (1..=4).contains(&p.hospitalization_duration)));
        assert!(patients.iter().all(|p| (0..=9).contains(&p.survival_window)));
    }

    #[test]
    fn test_ids_and_arrivals() {
        let patients = WorkloadGenerator::new(1).with_max_arrival_gap(5).generate(20);
        let ids: Vec<u32> = patients.iter().map(|p| p.id).collect();
        assert_eq!(ids, (1..=20).collect::<Vec<u32>>());
        assert!(patients
            .windows(2)
            .all(|w| w[0].arrival_time <= w[1].arrival_time));
    }

    #[test]
    fn test_empty() {
        assert!(WorkloadGenerator::new(0).generate(0).is_empty());
    }
}
