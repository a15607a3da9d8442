//! Immediate-service pre-pass.
//!
//! Replays arrival-ordered patients against a greedy bed pool and
//! records, per patient, whether a bed was free on arrival and how long the
//! patient would otherwise wait for the earliest bed. The result only gates
//! reordering; it does not feed the simulator.

use crate::models::{BedPool, PatientRecord};

/// A patient annotated by the pre-pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedPatient {
    /// The untouched input record.
    pub record: PatientRecord,
    /// A bed was free at or before the arrival time.
    pub admitted_immediately: bool,
    /// Estimated minutes until the earliest bed frees up (0 if immediate).
    pub wait_before_admission: i64,
}

impl ClassifiedPatient {
    fn immediate(record: PatientRecord) -> Self {
        Self {
            record,
            admitted_immediately: true,
            wait_before_admission: 0,
        }
    }

    fn queued(record: PatientRecord, wait_before_admission: i64) -> Self {
        Self {
            record,
            admitted_immediately: false,
            wait_before_admission,
        }
    }

    /// End of this patient's busy window: arrival + estimated wait + stay.
    #[inline]
    pub fn busy_until(&self) -> i64 {
        self.record
            .arrival_time
            .saturating_add(self.wait_before_admission)
            .saturating_add(self.record.hospitalization_duration)
    }

    /// Unwraps the input record.
    pub fn into_record(self) -> PatientRecord {
        self.record
    }
}

/// Classifies each patient against a fresh pool of `bed_count` beds.
///
/// A free bed's free time is extended by the stay (queued-bed model), not
/// reset to `arrival + stay`. A patient with no free bed takes the earliest
/// bed, which is extended by the wait plus the stay. With zero beds every
/// patient is queued with a zero wait.
pub fn classify(patients: &[PatientRecord], bed_count: usize) -> Vec<ClassifiedPatient> {
    let mut pool = BedPool::new(bed_count);

    patients
        .iter()
        .map(|p| {
            if let Some(bed) = pool.first_free(p.arrival_time) {
                pool.extend(bed, p.hospitalization_duration);
                return ClassifiedPatient::immediate(p.clone());
            }
            match pool.earliest() {
                Some((bed, free_at)) => {
                    let wait = free_at.saturating_sub(p.arrival_time);
                    pool.extend(bed, wait.saturating_add(p.hospitalization_duration));
                    ClassifiedPatient::queued(p.clone(), wait)
                }
                None => ClassifiedPatient::queued(p.clone(), 0),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_bed_queue() {
        let patients = vec![
            PatientRecord::new(1, 0, 10, 100),
            PatientRecord::new(2, 1, 5, 100),
        ];
        let c = classify(&patients, 1);
        assert!(c[0].admitted_immediately);
        assert_eq!(c[0].wait_before_admission, 0);
        assert!(!c[1].admitted_immediately);
        assert_eq!(c[1].wait_before_admission, 9);
        assert_eq!(c[1].busy_until(), 15);
    }

    #[test]
    fn test_queued_bed_extends_previous_free_time() {
        // Bed 1 is free at 0; patient 2 arrives at 20 but the bed's free time
        // is pushed from 10 to 15, not to 25.
        let patients = vec![
            PatientRecord::new(1, 0, 10, 100),
            PatientRecord::new(2, 20, 5, 100),
            PatientRecord::new(3, 16, 5, 100),
        ];
        let c = classify(&patients, 1);
        assert!(c[1].admitted_immediately);
        assert!(c[2].admitted_immediately);
    }

    #[test]
    fn test_waiting_patient_takes_earliest_bed() {
        let patients = vec![
            PatientRecord::new(1, 0, 30, 100),
            PatientRecord::new(2, 0, 20, 100),
            PatientRecord::new(3, 2, 5, 100),
            PatientRecord::new(4, 3, 5, 100),
        ];
        let c = classify(&patients, 2);
        assert!(c[0].admitted_immediately);
        assert!(c[1].admitted_immediately);
        // Beds free at [30, 20]; patient 3 waits for bed 2.
        assert_eq!(c[2].wait_before_admission, 18);
        // Bed 2 now free at 20 + 18 + 5 = 43; patient 4 waits for bed 1.
        assert_eq!(c[3].wait_before_admission, 27);
    }

    #[test]
    fn test_huge_stays_saturate() {
        let patients = vec![
            PatientRecord::new(1, 0, i64::MAX, 0),
            PatientRecord::new(2, 0, i64::MAX, 0),
        ];
        let c = classify(&patients, 1);
        assert!(c[0].admitted_immediately);
        assert_eq!(c[1].wait_before_admission, i64::MAX);
        assert_eq!(c[1].busy_until(), i64::MAX);
    }

    #[test]
    fn test_zero_beds() {
        let patients = vec![PatientRecord::new(1, 4, 10, 100)];
        let c = classify(&patients, 0);
        assert!(!c[0].admitted_immediately);
        assert_eq!(c[0].wait_before_admission, 0);
    }

    #[test]
    fn test_records_untouched() {
        let patients = vec![PatientRecord::new(1, 3, 7, 11)];
        let c = classify(&patients, 1);
        assert_eq!(c[0].clone().into_record(), patients[0]);
    }
}
