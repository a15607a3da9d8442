//! Discrete-event simulator of patient admission to a fixed pool of
//! hospital beds.
//!
//! Given patients (arrival time, hospitalization duration, survival window)
//! and a bed count, the crate orders the patients under an admission policy
//! and simulates, minute by minute, who gets which bed and who dies waiting.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `PatientRecord`, `BedPool`, `ResultReport`
//! - **`ordering`**: FCFS, SJF and PS admission ordering
//! - **`simulator`**: Bed pool simulation and KPIs
//! - **`scenario`**: Side-by-side runs of all policies over one input
//! - **`validation`**: Input integrity checks
//! - **`workload`**: Seeded synthetic patient cohorts
//!
//! # Architecture
//!
//! Patient list → ordering policy → ordered sequence → simulator → report.
//! Every step is a pure, single-threaded function over owned copies, so
//! policy runs never share state. Reading input and rendering reports are
//! left to the host.
//!
//! # References
//!
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5 (CPU Scheduling)

pub mod error;
pub mod models;
pub mod ordering;
pub mod scenario;
pub mod simulator;
pub mod validation;
pub mod workload;

pub use error::SimulationError;
pub use models::{PatientRecord, ResultReport};
pub use ordering::{order_fcfs, order_ps, order_sjf, Policy};
pub use simulator::simulate;
