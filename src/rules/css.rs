// SPDX-License-Identifier: PMPL-1.0-or-later
//! CSS color contrast rule.
//!
//! The frontend stylesheet must declare the accessible brand color
//! variables and actually use them, and the legacy low-contrast literals
//! (`#666`/`#999` on text) must be gone.

use crate::artifacts;
use crate::rules::{CheckResult, Evidence, Rule};

/// Custom-property markers that must ALL be present: the two declarations
/// plus at least one `var()` usage of the brand text color.
const REQUIRED_VARIABLES: &[&str] = &[
    "--fp-brand-orange-text",
    "--fp-text-gray",
    "var(--fp-brand-orange-text)",
];

/// Legacy literal declarations whose presence (ANY of them) is a violation
const LEGACY_COLORS: &[&str] = &["color: #666;", "color: #999;"];

/// CSS color contrast rule
pub struct CssContrastRule;

impl Rule for CssContrastRule {
    fn name(&self) -> &'static str {
        "CSS Color Contrast"
    }

    fn artifact(&self) -> &'static str {
        artifacts::STYLESHEET
    }

    fn missing_diagnostic(&self) -> &'static str {
        "CSS file not found"
    }

    fn evaluate(&self, content: &str) -> CheckResult {
        let has_variables = REQUIRED_VARIABLES.iter().all(|s| content.contains(s));
        let has_old_colors = LEGACY_COLORS.iter().any(|s| content.contains(s));

        // Both raw booleans are exposed, not the combined verdict, so the
        // report shows which side of the rule went wrong.
        CheckResult {
            name: self.name(),
            passed: has_variables && !has_old_colors,
            evidence: Evidence::Criteria(vec![
                ("has_css_variables", has_variables),
                ("has_old_colors", has_old_colors),
            ]),
        }
    }
}
