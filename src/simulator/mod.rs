//! Bed pool simulation and KPI evaluation.
//!
//! `BedSimulator` resolves an ordered patient sequence against a fixed
//! number of beds, minute by minute, and produces a `ResultReport`.
//! `SimulationKpi` derives utilization and mortality metrics from it.

mod engine;
mod kpi;

pub use engine::{simulate, BedRelease, BedSimulator};
pub use kpi::SimulationKpi;
