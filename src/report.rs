// SPDX-License-Identifier: PMPL-1.0-or-later
//! Report rendering for compliance check results.
//!
//! Human-readable text only, written for a developer watching CI output.
//! The exit status is the machine-consumable side of the tool; nothing
//! here is meant to be parsed.

use crate::gate::Summary;
use crate::rules::{CheckResult, Evidence};
use std::fmt::Display;

/// Report banner printed before the first check
pub fn banner() -> String {
    format!("🔍 FP Esperienze Accessibility Validation\n{}\n\n", "=".repeat(50))
}

/// Render one check result block: name, verdict glyph, and one line per
/// criterion in insertion order. Diagnostic evidence adds no extra lines;
/// the verdict already covers it.
pub fn render_check(result: &CheckResult) -> String {
    let status = if result.passed { "✅ PASS" } else { "❌ FAIL" };
    let mut out = format!("{}: {}\n", result.name, status);

    if let Evidence::Criteria(criteria) = &result.evidence {
        for (name, satisfied) in criteria {
            let glyph = if *satisfied { "✓" } else { "✗" };
            out.push_str(&format!("  {} {}\n", glyph, humanize(name)));
        }
    }

    out.push('\n');
    out
}

/// Render an unexpected evaluator failure. Distinct from FAIL so a broken
/// run is not mistaken for a clean negative result.
pub fn render_error(rule_name: &str, error: &dyn Display) -> String {
    format!("{rule_name}: ❌ ERROR - {error}\n\n")
}

/// Render the summary block with the qualitative verdict line
pub fn render_summary(summary: &Summary) -> String {
    let mut out = format!("📊 SUMMARY\n{}\n", "-".repeat(20));
    out.push_str(&format!(
        "Tests Passed: {}/{} ({:.1}%)\n",
        summary.passed_count, summary.total_count, summary.percentage
    ));

    let verdict = if summary.percentage >= 100.0 {
        "🎉 All accessibility checks passed!"
    } else if summary.percentage >= 75.0 {
        "✅ Good accessibility compliance!"
    } else {
        "⚠️  Some accessibility issues need attention"
    };
    out.push_str(verdict);
    out.push('\n');

    out
}

/// Turn a criterion name into display form: underscores become spaces and
/// each word is capitalized.
fn humanize(name: &str) -> String {
    name.split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
