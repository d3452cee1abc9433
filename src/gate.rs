// SPDX-License-Identifier: PMPL-1.0-or-later
//! The compliance gate: runs every rule in fixed order and aggregates the
//! verdict.
//!
//! A missing artifact is a controlled fail for that rule alone. Any other
//! read fault (permissions, undecodable bytes) is caught here, reported as
//! an ERROR outcome, counted as a failed check, and never stops the
//! remaining rules. Nothing is retried; the checks are pure reads.

use crate::artifacts::{self, ReadError};
use crate::report;
use crate::rules::{self, CheckResult, Evidence, Rule};
use std::io::Write;
use std::path::Path;
use tracing::{debug, info, warn};

/// Aggregate over one full run
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub passed_count: usize,
    pub total_count: usize,
    /// `passed_count / total_count * 100`, unrounded. Display rounds.
    pub percentage: f64,
}

impl Summary {
    /// Derive the summary from the ordered sequence of check outcomes
    pub fn from_outcomes(outcomes: &[bool]) -> Self {
        let passed_count = outcomes.iter().filter(|passed| **passed).count();
        let total_count = outcomes.len();
        let percentage = if total_count == 0 {
            0.0
        } else {
            passed_count as f64 / total_count as f64 * 100.0
        };
        Self { passed_count, total_count, percentage }
    }

    /// Overall success: every check passed. Stricter than the 75% tier
    /// used for the printed verdict line.
    pub fn all_passed(&self) -> bool {
        self.passed_count == self.total_count
    }
}

/// Results and summary of one full gate run
#[derive(Debug, Clone)]
pub struct GateOutcome {
    pub results: Vec<CheckResult>,
    pub summary: Summary,
}

impl GateOutcome {
    /// Whether the process should exit 0
    pub fn passed(&self) -> bool {
        self.summary.all_passed()
    }
}

/// Evaluate a single rule against the plugin root.
///
/// Absence of the artifact becomes the rule's controlled fail with its
/// diagnostic text; any other `ReadError` is returned for the caller's
/// catch-all tier.
pub fn run_rule(root: &Path, rule: &dyn Rule) -> Result<CheckResult, ReadError> {
    match artifacts::read_artifact(root, rule.artifact()) {
        Ok(content) => Ok(rule.evaluate(&content)),
        Err(ReadError::NotFound(path)) => {
            debug!(path = %path.display(), rule = rule.name(), "artifact missing");
            Ok(CheckResult {
                name: rule.name(),
                passed: false,
                evidence: Evidence::Diagnostic(rule.missing_diagnostic().to_string()),
            })
        }
        Err(err) => Err(err),
    }
}

/// Run the full gate, streaming the report to `out` as checks complete.
pub fn run<W: Write>(root: &Path, out: &mut W) -> std::io::Result<GateOutcome> {
    info!(root = %root.display(), "running accessibility compliance checks");
    out.write_all(report::banner().as_bytes())?;

    let mut results = Vec::new();
    for rule in rules::all() {
        match run_rule(root, rule.as_ref()) {
            Ok(result) => {
                out.write_all(report::render_check(&result).as_bytes())?;
                results.push(result);
            }
            Err(err) => {
                warn!(rule = rule.name(), error = %err, "check raised an unexpected error");
                out.write_all(report::render_error(rule.name(), &err).as_bytes())?;
                results.push(CheckResult {
                    name: rule.name(),
                    passed: false,
                    evidence: Evidence::Diagnostic(err.to_string()),
                });
            }
        }
    }

    let outcomes: Vec<bool> = results.iter().map(|r| r.passed).collect();
    let summary = Summary::from_outcomes(&outcomes);
    out.write_all(report::render_summary(&summary).as_bytes())?;

    info!(
        passed = summary.passed_count,
        total = summary.total_count,
        "compliance run finished"
    );

    Ok(GateOutcome { results, summary })
}
