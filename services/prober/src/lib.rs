//! Smoke checks for the paginated product listing endpoints
//!
//! Each scenario is one GET request judged only by its status code. Nothing
//! here asserts or panics; results are reported and the run moves on.

pub mod probe;
pub mod report;
pub mod scenario;

pub use probe::{Outcome, ProbeResult, Prober, Shape, Verdict, judge};
pub use report::ProbeReport;
pub use scenario::{Scenario, default_scenarios};
