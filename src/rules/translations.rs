// SPDX-License-Identifier: PMPL-1.0-or-later
//! Translation catalog rule.
//!
//! The .pot template must identify the project and its author in the
//! header and carry a meaningful number of message ids. The count is a
//! line-prefix scan, not a full gettext parse; entries whose msgid wraps
//! onto continuation lines are counted once by their opening line, so the
//! count is an approximation for unconventional catalogs.

use crate::artifacts;
use crate::rules::{CheckResult, Evidence, Rule};
use regex::Regex;
use tracing::debug;

/// Substrings that must BOTH appear somewhere in the catalog header
const HEADER_MARKERS: &[&str] = &["fp-esperienze", "Francesco Passeri"];

/// The catalog needs strictly more than this many message ids
const MIN_MSGID_COUNT: usize = 500;

/// Translation catalog rule
pub struct TranslationCatalogRule;

impl Rule for TranslationCatalogRule {
    fn name(&self) -> &'static str {
        "Translation Files"
    }

    fn artifact(&self) -> &'static str {
        artifacts::CATALOG
    }

    fn missing_diagnostic(&self) -> &'static str {
        "POT file not found"
    }

    fn evaluate(&self, content: &str) -> CheckResult {
        let msgid_re = Regex::new(r"(?m)^msgid ").expect("valid regex");
        let msgid_count = msgid_re.find_iter(content).count();
        let has_sufficient_msgids = msgid_count > MIN_MSGID_COUNT;
        let has_proper_header = HEADER_MARKERS.iter().all(|s| content.contains(s));

        debug!(msgid_count, "counted message ids in catalog");

        CheckResult {
            name: self.name(),
            passed: has_sufficient_msgids && has_proper_header,
            evidence: Evidence::Criteria(vec![
                ("has_sufficient_msgids", has_sufficient_msgids),
                ("has_proper_header", has_proper_header),
            ]),
        }
    }
}
