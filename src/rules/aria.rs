// SPDX-License-Identifier: PMPL-1.0-or-later
//! ARIA attributes rule.
//!
//! The single-experience template drives the time-slot picker, so it must
//! carry the radiogroup role, the labelling/expansion ARIA attributes, and
//! the explicit label id the widget script points at. Unlike the other
//! rules this one uses a threshold: 80% of the criteria is enough.

use crate::artifacts;
use crate::rules::{CheckResult, Evidence, Rule};

/// Criterion name and the marker that must appear in the template
const ARIA_CRITERIA: &[(&str, &str)] = &[
    ("radiogroup", r#"role="radiogroup""#),
    ("aria_labelledby", "aria-labelledby="),
    ("aria_controls", "aria-controls="),
    ("aria_expanded", "aria-expanded="),
    ("aria_labels", "aria-label="),
    ("explicit_ids", r#"id="fp-time-slots-label""#),
];

/// Fraction of criteria that must hold. Compared fractionally, not via an
/// integer floor: 5/6 passes, 4/6 does not.
const PASS_THRESHOLD: f64 = 0.8;

/// ARIA attributes rule
pub struct AriaAttributesRule;

impl Rule for AriaAttributesRule {
    fn name(&self) -> &'static str {
        "ARIA Attributes"
    }

    fn artifact(&self) -> &'static str {
        artifacts::TEMPLATE
    }

    fn missing_diagnostic(&self) -> &'static str {
        "Template file not found"
    }

    fn evaluate(&self, content: &str) -> CheckResult {
        let criteria: Vec<(&'static str, bool)> = ARIA_CRITERIA
            .iter()
            .map(|(name, marker)| (*name, content.contains(marker)))
            .collect();

        let satisfied = criteria.iter().filter(|(_, ok)| *ok).count();
        let passed = satisfied as f64 >= criteria.len() as f64 * PASS_THRESHOLD;

        CheckResult {
            name: self.name(),
            passed,
            evidence: Evidence::Criteria(criteria),
        }
    }
}
