//! Observable outcome of a seeding run

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;
use uuid::Uuid;

/// How many records were already there and how many this run added
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Bootstrap {
    pub existing: u32,
    pub created: u32,
}

impl Bootstrap {
    pub fn total(&self) -> u32 {
        self.existing + self.created
    }
}

/// Tally of the bounded product creation loop
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProductOutcome {
    /// Products the run aimed for
    pub target: u32,
    /// Attempts the run was allowed
    pub max_attempts: u32,
    pub created: u32,
    pub attempts: u32,
    /// Non-success responses, keyed by HTTP status
    pub rejected: BTreeMap<u16, u32>,
    /// Requests that never got a response
    pub transport_errors: u32,
    /// Payloads dropped by client-side validation before sending
    pub invalid_payloads: u32,
    /// The attempt budget ran out before the target was reached
    pub exhausted: bool,
}

impl ProductOutcome {
    pub fn new(target: u32, max_attempts: u32) -> Self {
        Self {
            target,
            max_attempts,
            ..Self::default()
        }
    }

    /// Whether another attempt fits in the budget
    pub fn keep_going(&self) -> bool {
        self.created < self.target && self.attempts < self.max_attempts
    }

    pub fn record_rejection(&mut self, status: u16) {
        *self.rejected.entry(status).or_insert(0) += 1;
    }

    /// Attempts that did not create a product
    pub fn failures(&self) -> u32 {
        self.rejected.values().sum::<u32>() + self.transport_errors + self.invalid_payloads
    }

    pub(crate) fn finish(&mut self) {
        self.exhausted = self.created < self.target;
    }
}

/// Summary printed at the end of a run
#[derive(Debug, Clone, Serialize)]
pub struct SeedReport {
    pub run_id: Uuid,
    pub base_url: String,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub users: Bootstrap,
    pub categories: Bootstrap,
    pub products: ProductOutcome,
}
