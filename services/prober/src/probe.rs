//! Running scenarios and judging their responses

use common::CatalogClient;
use serde::Serialize;
use serde_json::Value;
use std::fmt;
use tracing::{debug, warn};

use crate::report::ProbeReport;
use crate::scenario::Scenario;

/// Characters of a failing response body worth showing
const SNIPPET_LEN: usize = 200;

/// Pass or fail for a response that arrived
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Pass,
    Fail,
}

/// A scenario passes exactly when the observed status is expected
pub fn judge(status: u16, expected: &[u16]) -> Verdict {
    if expected.contains(&status) {
        Verdict::Pass
    } else {
        Verdict::Fail
    }
}

/// What the response body looked like
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum Shape {
    /// JSON object; its top-level keys
    Object(Vec<String>),
    /// JSON array; its length
    Array(usize),
    /// Any other JSON value
    Scalar,
    /// Empty or not JSON at all
    NotJson,
}

impl Shape {
    pub fn of(body: &str) -> Self {
        match serde_json::from_str::<Value>(body) {
            Ok(Value::Object(map)) => Shape::Object(map.keys().cloned().collect()),
            Ok(Value::Array(items)) => Shape::Array(items.len()),
            Ok(_) => Shape::Scalar,
            Err(_) => Shape::NotJson,
        }
    }
}

/// Result of running one scenario
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "outcome", rename_all = "lowercase")]
pub enum Outcome {
    Responded {
        status: u16,
        verdict: Verdict,
        shape: Shape,
        /// Start of the body, kept only when the verdict is a fail
        snippet: Option<String>,
    },
    Errored {
        message: String,
    },
}

/// One scenario and what happened when it ran
#[derive(Debug, Clone, Serialize)]
pub struct ProbeResult {
    pub id: &'static str,
    pub description: &'static str,
    pub url: String,
    pub expected: Vec<u16>,
    pub outcome: Outcome,
}

impl ProbeResult {
    pub fn passed(&self) -> bool {
        matches!(
            self.outcome,
            Outcome::Responded {
                verdict: Verdict::Pass,
                ..
            }
        )
    }
}

impl fmt::Display for ProbeResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[TEST] #{} {}", self.id, self.description)?;
        match &self.outcome {
            Outcome::Responded {
                status,
                verdict: Verdict::Pass,
                shape,
                ..
            } => {
                write!(f, "[OK] Status {status}")?;
                match shape {
                    Shape::Object(keys) => write!(f, "\n  Keys: {keys:?}"),
                    Shape::Array(len) => write!(f, "\n  Records: {len}"),
                    Shape::Scalar => Ok(()),
                    Shape::NotJson => write!(f, "\n  Response without JSON"),
                }
            }
            Outcome::Responded {
                status,
                verdict: Verdict::Fail,
                snippet,
                ..
            } => {
                write!(f, "[ERROR] Status {status} (expected {:?})", self.expected)?;
                match snippet {
                    Some(snippet) if !snippet.is_empty() => write!(f, "\n{snippet}"),
                    _ => Ok(()),
                }
            }
            Outcome::Errored { message } => write!(f, "[ERROR] {message}"),
        }
    }
}

/// Runs scenarios one after another against the catalog API
pub struct Prober {
    client: CatalogClient,
}

impl Prober {
    pub fn new(client: CatalogClient) -> Self {
        Self { client }
    }

    /// Run one scenario. Transport errors become an `Errored` outcome.
    pub async fn probe(&self, scenario: &Scenario) -> ProbeResult {
        let outcome = match self.client.get_raw(&scenario.path, &scenario.query).await {
            Ok(response) => {
                let status = response.status.as_u16();
                let verdict = judge(status, &scenario.expected);
                debug!("{} -> {} ({:?})", response.url, status, verdict);

                let snippet = (verdict == Verdict::Fail)
                    .then(|| response.body.chars().take(SNIPPET_LEN).collect());
                Outcome::Responded {
                    status,
                    verdict,
                    shape: Shape::of(&response.body),
                    snippet,
                }
            }
            Err(e) => {
                warn!("Scenario {} failed to run: {}", scenario.id, e);
                Outcome::Errored {
                    message: e.to_string(),
                }
            }
        };

        ProbeResult {
            id: scenario.id,
            description: scenario.description,
            url: self.client.url(&scenario.target()),
            expected: scenario.expected.clone(),
            outcome,
        }
    }

    /// Run every scenario in order, handing each result to `on_result`
    /// as soon as it is known
    pub async fn run_all<F>(&self, scenarios: &[Scenario], mut on_result: F) -> ProbeReport
    where
        F: FnMut(&ProbeResult),
    {
        let mut report = ProbeReport::default();
        for scenario in scenarios {
            let result = self.probe(scenario).await;
            on_result(&result);
            report.results.push(result);
        }
        report
    }
}
