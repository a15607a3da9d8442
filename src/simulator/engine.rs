//! Minute-stepped bed pool simulator.
//!
//! # Algorithm
//!
//! Patients are resolved strictly one at a time, in the given order, against
//! a single clock that is never reset:
//! 1. Advance the clock to the patient's arrival if it is behind.
//! 2. If the clock is past `arrival + survival_window`, the patient dies.
//! 3. Otherwise admit to the leftmost bed free at the current minute.
//! 4. If no bed is free, the patient waits: advance the clock to the
//!    earlier of the next bed release and the first minute past the
//!    deadline, counting every skipped minute as waiting, and go back to
//!    step 2.
//!
//! Because the clock carries over, the processing order decides outcomes.
//!
//! # Complexity
//! O(n * b) where n=patients, b=beds.

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::error::SimulationError;
use crate::models::{Admission, BedPool, Death, PatientRecord, ResultReport};
use crate::validation::validate_patients;

/// How a bed's free time is updated on admission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BedRelease {
    /// Previous free time + stay. A bed that sat idle frees up earlier than
    /// the patient actually leaves.
    #[default]
    Queued,
    /// Admission time + stay.
    FromAdmission,
}

enum Resolution {
    Admitted { bed: usize },
    Died,
}

/// Bed pool simulator.
///
/// # Example
///
/// ```
/// use u_bedsim::models::PatientRecord;
/// use u_bedsim::simulator::BedSimulator;
///
/// let patients = vec![
///     PatientRecord::new(1, 0, 10, 100),
///     PatientRecord::new(2, 1, 5, 100),
/// ];
/// let report = BedSimulator::new().run(&patients, 1).unwrap();
/// assert_eq!(report.alive_count, 2);
/// assert_eq!(report.admissions[1].admission_time, 10);
/// ```
#[derive(Debug, Clone, Default)]
pub struct BedSimulator {
    bed_release: BedRelease,
}

impl BedSimulator {
    /// Creates a simulator with queued bed release.
    pub fn new() -> Self {
        Self {
            bed_release: BedRelease::Queued,
        }
    }

    /// Sets the bed release model.
    pub fn with_bed_release(mut self, bed_release: BedRelease) -> Self {
        self.bed_release = bed_release;
        self
    }

    /// Configured bed release model.
    pub fn bed_release(&self) -> BedRelease {
        self.bed_release
    }

    /// Simulates admissions of `ordered` patients into `bed_count` beds.
    ///
    /// # Errors
    /// - [`SimulationError::InvalidBedCount`] if `bed_count` is 0.
    /// - [`SimulationError::InvalidPatientRecord`] with the first invalid
    ///   record, see [`validate_patients`].
    pub fn run(
        &self,
        ordered: &[PatientRecord],
        bed_count: usize,
    ) -> Result<ResultReport, SimulationError> {
        if bed_count == 0 {
            return Err(SimulationError::InvalidBedCount { bed_count });
        }
        if let Some(first) = validate_patients(ordered)
            .err()
            .and_then(|errors| errors.into_iter().next())
        {
            return Err(first.into());
        }

        info!(
            "simulating {} patients on {} beds ({:?} release)",
            ordered.len(),
            bed_count,
            self.bed_release
        );

        let mut pool = BedPool::new(bed_count);
        let mut report = ResultReport::new();
        let mut time = 0i64;

        for patient in ordered {
            time = time.max(patient.arrival_time);
            let mut waited = 0i64;

            let resolution = loop {
                if patient.is_dead_at(time) {
                    break Resolution::Died;
                }
                if let Some(bed) = pool.first_free(time) {
                    break Resolution::Admitted { bed };
                }
                // Skip the idle minutes: nothing changes until a bed frees up
                // or the patient's deadline passes.
                let next_free = pool.earliest().map_or(i64::MAX, |(_, free)| free);
                let next = next_free.min(patient.deadline().saturating_add(1));
                waited = waited.saturating_add(next - time);
                time = next;
            };

            match resolution {
                Resolution::Admitted { bed } => {
                    let departure_time = time.saturating_add(patient.hospitalization_duration);
                    match self.bed_release {
                        BedRelease::Queued => {
                            pool.extend(bed, patient.hospitalization_duration);
                        }
                        BedRelease::FromAdmission => {
                            pool.set_free_time(bed, departure_time);
                        }
                    }
                    debug!(
                        "patient {} entered bed {} at {} and leaves at {}",
                        patient.id,
                        bed + 1,
                        time,
                        departure_time
                    );
                    report.add_admission(
                        Admission {
                            patient_id: patient.id,
                            bed: bed + 1,
                            admission_time: time,
                            departure_time,
                        },
                        waited,
                    );
                }
                Resolution::Died => {
                    debug!("patient {} died at {}", patient.id, time);
                    report.add_death(
                        Death {
                            patient_id: patient.id,
                            death_time: time,
                        },
                        waited,
                    );
                }
            }
        }

        report.finalize();
        info!(
            "alive {}, dead {}, average wait {:.2} min",
            report.alive_count, report.dead_count, report.average_wait_minutes
        );
        Ok(report)
    }
}

/// Simulates with the default (queued) bed release model.
pub fn simulate(
    ordered: &[PatientRecord],
    bed_count: usize,
) -> Result<ResultReport, SimulationError> {
    BedSimulator::new().run(ordered, bed_count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Outcome;
    use crate::ordering::Policy;

    #[test]
    fn test_one_bed_two_patients() {
        let patients = vec![
            PatientRecord::new(1, 0, 10, 100),
            PatientRecord::new(2, 1, 5, 100),
        ];
        let report = simulate(&patients, 1).unwrap();

        assert_eq!(report.alive_count, 2);
        assert_eq!(report.dead_count, 0);
        assert_eq!(
            report.admissions[0],
            Admission {
                patient_id: 1,
                bed: 1,
                admission_time: 0,
                departure_time: 10,
            }
        );
        assert_eq!(report.admissions[1].admission_time, 10);
        assert_eq!(report.admissions[1].departure_time, 15);
        assert_eq!(report.total_wait_minutes, 9);
        assert!((report.average_wait_minutes - 4.5).abs() < 1e-10);
    }

    #[test]
    fn test_zero_survival_admitted_on_arrival() {
        let patients = vec![PatientRecord::new(1, 5, 10, 0)];
        let report = simulate(&patients, 1).unwrap();
        let o = report.outcome_for(1).unwrap();
        assert_eq!(o.outcome, Outcome::Survived);
        assert_eq!(o.admission_time, Some(5));
        assert_eq!(o.bed, Some(1));
        assert_eq!(o.wait_minutes, 0);
    }

    #[test]
    fn test_zero_survival_dies_when_bed_busy() {
        let patients = vec![
            PatientRecord::new(1, 0, 20, 100),
            PatientRecord::new(2, 5, 10, 0),
        ];
        let report = simulate(&patients, 1).unwrap();
        assert_eq!(report.dead_count, 1);
        assert_eq!(
            report.deaths[0],
            Death {
                patient_id: 2,
                death_time: 6,
            }
        );
        assert_eq!(report.outcome_for(2).unwrap().wait_minutes, 1);
        assert!((report.average_wait_minutes - 0.5).abs() < 1e-10);
    }

    #[test]
    fn test_dies_on_dequeue_without_waiting() {
        let patients = vec![
            PatientRecord::new(1, 0, 10, 100),
            PatientRecord::new(2, 0, 10, 100),
            PatientRecord::new(3, 1, 5, 3),
        ];
        let report = simulate(&patients, 1).unwrap();
        assert_eq!(report.admission_for(2).unwrap().admission_time, 10);

        let o = report.outcome_for(3).unwrap();
        assert_eq!(o.outcome, Outcome::Died);
        assert_eq!(o.death_time, Some(10));
        assert_eq!(o.wait_minutes, 0);
    }

    #[test]
    fn test_clock_carries_over_between_patients() {
        // The late patient is processed first and drags the clock to 50,
        // past the early patient's deadline, although a second bed is idle.
        let patients = vec![
            PatientRecord::new(1, 50, 10, 100),
            PatientRecord::new(2, 0, 10, 5),
        ];
        let report = simulate(&patients, 2).unwrap();
        assert_eq!(report.alive_count, 1);
        assert_eq!(report.deaths[0].death_time, 50);

        let reversed = vec![patients[1].clone(), patients[0].clone()];
        let report = simulate(&reversed, 2).unwrap();
        assert_eq!(report.alive_count, 2);
    }

    #[test]
    fn test_leftmost_free_bed() {
        let patients = vec![
            PatientRecord::new(1, 0, 30, 100),
            PatientRecord::new(2, 0, 10, 100),
            PatientRecord::new(3, 0, 10, 100),
        ];
        let report = simulate(&patients, 3).unwrap();
        let beds: Vec<usize> = report.admissions.iter().map(|a| a.bed).collect();
        assert_eq!(beds, vec![1, 2, 3]);
        assert_eq!(report.average_wait_minutes, 0.0);
    }

    #[test]
    fn test_queued_release_reuses_idle_bed_early() {
        let patients = vec![
            PatientRecord::new(1, 100, 10, 0),
            PatientRecord::new(2, 101, 10, 0),
        ];
        let report = simulate(&patients, 1).unwrap();
        assert_eq!(report.alive_count, 2);
        assert_eq!(report.admission_for(2).unwrap().admission_time, 101);
    }

    #[test]
    fn test_from_admission_release() {
        let patients = vec![
            PatientRecord::new(1, 100, 10, 0),
            PatientRecord::new(2, 101, 10, 0),
        ];
        let sim = BedSimulator::new().with_bed_release(BedRelease::FromAdmission);
        assert_eq!(sim.bed_release(), BedRelease::FromAdmission);

        let report = sim.run(&patients, 1).unwrap();
        assert_eq!(report.alive_count, 1);
        assert_eq!(report.deaths[0].death_time, 102);
    }

    #[test]
    fn test_zero_beds_rejected_for_every_policy() {
        let patients = vec![
            PatientRecord::new(1, 0, 10, 100),
            PatientRecord::new(2, 1, 5, 100),
        ];
        for policy in Policy::ALL {
            let ordered = policy.order(&patients, 0);
            assert_eq!(
                simulate(&ordered, 0),
                Err(SimulationError::InvalidBedCount { bed_count: 0 })
            );
        }
    }

    #[test]
    fn test_invalid_record_rejected() {
        let patients = vec![
            PatientRecord::new(1, 0, 10, 100),
            PatientRecord::new(2, 0, 0, 100),
        ];
        match simulate(&patients, 1) {
            Err(SimulationError::InvalidPatientRecord(e)) => assert_eq!(e.patient_id, 2),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_unsorted_input_no_deaths_without_contention() {
        let patients = vec![
            PatientRecord::new(1, 50, 10, 100),
            PatientRecord::new(2, 0, 10, 5),
        ];
        for policy in Policy::ALL {
            let report = simulate(&policy.order(&patients, 2), 2).unwrap();
            assert_eq!(report.alive_count, 2, "{policy}");
            assert_eq!(report.dead_count, 0, "{policy}");
        }
    }

    #[test]
    fn test_unbounded_survival_window() {
        let patients = vec![PatientRecord::new(1, 1, 10, i64::MAX)];
        let report = simulate(&patients, 1).unwrap();
        assert_eq!(report.admission_for(1).unwrap().admission_time, 1);
    }

    #[test]
    fn test_unbounded_stays_share_a_bed() {
        let patients = vec![
            PatientRecord::new(1, 0, i64::MAX, 0),
            PatientRecord::new(2, 0, i64::MAX, 0),
        ];
        for policy in Policy::ALL {
            let report = simulate(&policy.order(&patients, 1), 1).unwrap();
            assert_eq!(report.admissions[0].departure_time, i64::MAX);
            assert_eq!(report.deaths[0].death_time, 1);
        }
    }

    #[test]
    fn test_long_wait_resolves_without_stepping() {
        let stay = 1_000_000_000_000;
        let patients = vec![
            PatientRecord::new(1, 0, stay, 0),
            PatientRecord::new(2, 1, 10, 2 * stay),
            PatientRecord::new(3, 2, 10, stay),
        ];
        let report = simulate(&patients, 1).unwrap();

        let admitted = report.outcome_for(2).unwrap();
        assert_eq!(admitted.admission_time, Some(stay));
        assert_eq!(admitted.wait_minutes, stay - 1);

        // Bed busy until stay + 10; patient 3's deadline is stay + 2.
        let dead = report.outcome_for(3).unwrap();
        assert_eq!(dead.death_time, Some(stay + 3));
        assert_eq!(dead.wait_minutes, 3);
        assert_eq!(report.total_wait_minutes, stay + 2);
    }

    #[test]
    fn test_death_wins_when_bed_frees_past_deadline() {
        // Bed frees at 11 = deadline + 1: the patient is already dead.
        let patients = vec![
            PatientRecord::new(1, 0, 11, 100),
            PatientRecord::new(2, 0, 5, 10),
        ];
        let report = simulate(&patients, 1).unwrap();
        assert_eq!(report.deaths[0].death_time, 11);
        assert_eq!(report.outcome_for(2).unwrap().wait_minutes, 11);
    }

    #[test]
    fn test_empty_input() {
        let report = simulate(&[], 2).unwrap();
        assert_eq!(report.patient_count(), 0);
        assert_eq!(report.average_wait_minutes, 0.0);
        assert!(report.admissions.is_empty());
        assert!(report.deaths.is_empty());
    }
}
