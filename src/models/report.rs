//! Result report model.
//!
//! The report is the complete output of one simulation run: admissions in
//! admission order, deaths, per-patient outcomes in processing order, and
//! aggregate counts. It is plain data for a presentation layer to format.

use serde::{Deserialize, Serialize};

use super::Outcome;

/// A survivor's bed assignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Admission {
    /// Admitted patient.
    pub patient_id: u32,
    /// Assigned bed (1-based).
    pub bed: usize,
    /// Minute of admission.
    pub admission_time: i64,
    /// Minute the patient leaves the bed (admission + hospitalization).
    pub departure_time: i64,
}

/// A patient who died waiting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Death {
    /// Deceased patient.
    pub patient_id: u32,
    /// Simulated minute of death.
    pub death_time: i64,
}

/// Simulation outcome for a single patient.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatientOutcome {
    /// Patient identifier.
    pub patient_id: u32,
    /// Assigned bed (1-based), survivors only.
    pub bed: Option<usize>,
    /// Minute of admission, survivors only.
    pub admission_time: Option<i64>,
    /// Survived or died.
    pub outcome: Outcome,
    /// Minute of death, dead patients only.
    pub death_time: Option<i64>,
    /// Minutes this patient spent waiting for a bed.
    pub wait_minutes: i64,
}

impl PatientOutcome {
    /// Outcome of an admitted patient.
    pub fn survived(patient_id: u32, bed: usize, admission_time: i64, wait_minutes: i64) -> Self {
        Self {
            patient_id,
            bed: Some(bed),
            admission_time: Some(admission_time),
            outcome: Outcome::Survived,
            death_time: None,
            wait_minutes,
        }
    }

    /// Outcome of a patient who died waiting.
    pub fn died(patient_id: u32, death_time: i64, wait_minutes: i64) -> Self {
        Self {
            patient_id,
            bed: None,
            admission_time: None,
            outcome: Outcome::Died,
            death_time: Some(death_time),
            wait_minutes,
        }
    }
}

/// Aggregated result of one simulation run.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ResultReport {
    /// Survivors' bed assignments, in admission order.
    pub admissions: Vec<Admission>,
    /// Deaths, in the order they occurred.
    pub deaths: Vec<Death>,
    /// Every patient's outcome, in processing order.
    pub outcomes: Vec<PatientOutcome>,
    /// Number of admitted patients.
    pub alive_count: usize,
    /// Number of patients who died waiting.
    pub dead_count: usize,
    /// Sum of waiting minutes over all patients.
    pub total_wait_minutes: i64,
    /// `total_wait_minutes / patient_count`; 0.0 when there are no patients.
    pub average_wait_minutes: f64,
}

impl ResultReport {
    /// Creates an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an admission.
    pub fn add_admission(&mut self, admission: Admission, wait_minutes: i64) {
        self.outcomes.push(PatientOutcome::survived(
            admission.patient_id,
            admission.bed,
            admission.admission_time,
            wait_minutes,
        ));
        self.admissions.push(admission);
        self.alive_count += 1;
        self.total_wait_minutes = self.total_wait_minutes.saturating_add(wait_minutes);
    }

    /// Records a death.
    pub fn add_death(&mut self, death: Death, wait_minutes: i64) {
        self.outcomes
            .push(PatientOutcome::died(death.patient_id, death.death_time, wait_minutes));
        self.deaths.push(death);
        self.dead_count += 1;
        self.total_wait_minutes = self.total_wait_minutes.saturating_add(wait_minutes);
    }

    /// Recomputes the average wait over all recorded patients.
    pub fn finalize(&mut self) {
        let patients = self.patient_count();
        self.average_wait_minutes = if patients == 0 {
            0.0
        } else {
            self.total_wait_minutes as f64 / patients as f64
        };
    }

    /// Total number of patients (alive + dead).
    #[inline]
    pub fn patient_count(&self) -> usize {
        self.alive_count + self.dead_count
    }

    /// Fraction of patients admitted (1.0 when there are no patients).
    pub fn survival_rate(&self) -> f64 {
        let patients = self.patient_count();
        if patients == 0 {
            1.0
        } else {
            self.alive_count as f64 / patients as f64
        }
    }

    /// Outcome for a specific patient.
    pub fn outcome_for(&self, patient_id: u32) -> Option<&PatientOutcome> {
        self.outcomes.iter().find(|o| o.patient_id == patient_id)
    }

    /// Admission for a specific patient.
    pub fn admission_for(&self, patient_id: u32) -> Option<&Admission> {
        self.admissions.iter().find(|a| a.patient_id == patient_id)
    }

    /// Admissions to a given bed (1-based), in admission order.
    pub fn admissions_for_bed(&self, bed: usize) -> Vec<&Admission> {
        self.admissions.iter().filter(|a| a.bed == bed).collect()
    }

    /// Latest departure time across all admissions (0 if none).
    pub fn makespan(&self) -> i64 {
        self.admissions
            .iter()
            .map(|a| a.departure_time)
            .max()
            .unwrap_or(0)
    }
}
