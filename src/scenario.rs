//! Policy comparison runs.
//!
//! Runs every configured ordering policy over the same patient list, each
//! on its own copy of the input and its own bed pool, and collects the
//! reports side by side.
//!
//! # Usage
//!
//! ```
//! use u_bedsim::models::PatientRecord;
//! use u_bedsim::scenario::{compare_policies, ScenarioRequest, SimulationConfig};
//!
//! let patients = vec![
//!     PatientRecord::new(1, 0, 10, 100),
//!     PatientRecord::new(2, 1, 5, 100),
//! ];
//! let request = ScenarioRequest::new(patients, SimulationConfig::new(1));
//! let comparison = compare_policies(&request).unwrap();
//! assert_eq!(comparison.runs.len(), 3);
//! ```

use log::info;
use serde::{Deserialize, Serialize};

use crate::error::SimulationError;
use crate::models::{PatientRecord, ResultReport};
use crate::ordering::Policy;
use crate::simulator::{BedRelease, BedSimulator, SimulationKpi};

/// Simulation settings shared by all policy runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Number of beds in the pool.
    pub bed_count: usize,
    /// Bed free-time update model.
    #[serde(default)]
    pub bed_release: BedRelease,
    /// Policies to run, in report order.
    #[serde(default = "default_policies")]
    pub policies: Vec<Policy>,
}

fn default_policies() -> Vec<Policy> {
    Policy::ALL.to_vec()
}

impl SimulationConfig {
    /// Creates a config running all policies with queued bed release.
    pub fn new(bed_count: usize) -> Self {
        Self {
            bed_count,
            bed_release: BedRelease::default(),
            policies: default_policies(),
        }
    }

    /// Sets the bed release model.
    pub fn with_bed_release(mut self, bed_release: BedRelease) -> Self {
        self.bed_release = bed_release;
        self
    }

    /// Sets the policies to run.
    pub fn with_policies(mut self, policies: Vec<Policy>) -> Self {
        self.policies = policies;
        self
    }
}

/// Input container for a comparison run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioRequest {
    /// Patients, in input order.
    pub patients: Vec<PatientRecord>,
    /// Simulation settings.
    pub config: SimulationConfig,
}

impl ScenarioRequest {
    /// Creates a new request.
    pub fn new(patients: Vec<PatientRecord>, config: SimulationConfig) -> Self {
        Self { patients, config }
    }
}

/// Result of one policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolicyRun {
    /// Policy that produced the order.
    pub policy: Policy,
    /// Patient ids in processing order.
    pub order: Vec<u32>,
    /// Simulation report.
    pub report: ResultReport,
    /// Metrics derived from the report.
    pub kpi: SimulationKpi,
}

/// Reports of all configured policies.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PolicyComparison {
    /// One run per configured policy, in config order.
    pub runs: Vec<PolicyRun>,
}

impl PolicyComparison {
    /// Run for a specific policy.
    pub fn run(&self, policy: Policy) -> Option<&PolicyRun> {
        self.runs.iter().find(|r| r.policy == policy)
    }

    /// Run with the most survivors; ties go to the lower average wait, then
    /// to the earlier run.
    pub fn best_by_survival(&self) -> Option<&PolicyRun> {
        let mut best: Option<&PolicyRun> = None;
        for run in &self.runs {
            best = match best {
                None => Some(run),
                Some(current) => {
                    let more_alive = run.report.alive_count > current.report.alive_count;
                    let same_alive = run.report.alive_count == current.report.alive_count;
                    let shorter_wait =
                        run.report.average_wait_minutes < current.report.average_wait_minutes;
                    if more_alive || (same_alive && shorter_wait) {
                        Some(run)
                    } else {
                        Some(current)
                    }
                }
            };
        }
        best
    }
}

/// Runs one policy over `patients`.
pub fn run_policy(
    policy: Policy,
    patients: &[PatientRecord],
    config: &SimulationConfig,
) -> Result<PolicyRun, SimulationError> {
    info!("{} scenario", policy);
    let ordered = policy.order(patients, config.bed_count);
    let report = BedSimulator::new()
        .with_bed_release(config.bed_release)
        .run(&ordered, config.bed_count)?;
    let kpi = SimulationKpi::calculate(&report, config.bed_count);

    Ok(PolicyRun {
        policy,
        order: ordered.iter().map(|p| p.id).collect(),
        report,
        kpi,
    })
}

/// Runs every configured policy over the request's patients.
///
/// Fails on the first policy whose simulation fails; since validation does
/// not depend on the order, that is always the first policy.
pub fn compare_policies(request: &ScenarioRequest) -> Result<PolicyComparison, SimulationError> {
    let runs = request
        .config
        .policies
        .iter()
        .map(|&policy| run_policy(policy, &request.patients, &request.config))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(PolicyComparison { runs })
}
