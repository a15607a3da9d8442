//! Simulation domain models.
//!
//! Plain data types shared by the ordering policies and the simulator.
//!
//! # Domain Mappings
//!
//! | u-bedsim | Scheduling term |
//! |----------|-----------------|
//! | PatientRecord | Job with release time, processing time, deadline |
//! | BedPool | Identical parallel machines |
//! | ResultReport | Schedule plus rejected (expired) jobs |

mod bed_pool;
mod patient;
mod report;

pub use bed_pool::BedPool;
pub use patient::{Outcome, PatientRecord};
pub use report::{Admission, Death, PatientOutcome, ResultReport};
