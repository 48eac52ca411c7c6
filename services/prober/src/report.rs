//! Tally of a probe run

use serde::Serialize;
use std::fmt;

use crate::probe::{Outcome, ProbeResult, Verdict};

#[derive(Debug, Clone, Default, Serialize)]
pub struct ProbeReport {
    pub results: Vec<ProbeResult>,
}

impl ProbeReport {
    pub fn passed(&self) -> usize {
        self.results.iter().filter(|r| r.passed()).count()
    }

    pub fn failed(&self) -> usize {
        self.results
            .iter()
            .filter(|r| {
                matches!(
                    r.outcome,
                    Outcome::Responded {
                        verdict: Verdict::Fail,
                        ..
                    }
                )
            })
            .count()
    }

    pub fn errored(&self) -> usize {
        self.results
            .iter()
            .filter(|r| matches!(r.outcome, Outcome::Errored { .. }))
            .count()
    }

    pub fn all_passed(&self) -> bool {
        self.passed() == self.results.len()
    }
}

impl fmt::Display for ProbeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} scenarios: {} passed, {} failed, {} errored",
            self.results.len(),
            self.passed(),
            self.failed(),
            self.errored()
        )
    }
}
