// SPDX-License-Identifier: PMPL-1.0-or-later
//! End-to-end tests for the compliance gate against fixture plugin trees.

use fp_a11y_check::artifacts;
use fp_a11y_check::gate;
use fp_a11y_check::rules::{CheckResult, Evidence};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Create a temporary directory representing a plugin checkout
fn setup_plugin_root() -> (TempDir, PathBuf) {
    let temp = TempDir::new().expect("create temp dir");
    let path = temp.path().to_path_buf();
    (temp, path)
}

fn write_artifact(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().expect("artifact has a parent")).unwrap();
    fs::write(path, content).unwrap();
}

fn compliant_stylesheet() -> &'static str {
    r#"
:root {
    --fp-brand-orange-text: #c2410c;
    --fp-text-gray: #4b5563;
}
.fp-slot-label { color: var(--fp-brand-orange-text); }
.fp-meta { color: var(--fp-text-gray); }
"#
}

fn compliant_template() -> &'static str {
    r#"
<h3 id="fp-time-slots-label">Time Slots</h3>
<div role="radiogroup" aria-labelledby="fp-time-slots-label">
    <button aria-expanded="false" aria-controls="fp-slot-list" aria-label="Choose a time slot">
    </button>
</div>
"#
}

fn compliant_script() -> &'static str {
    r#"
const i18n = window.fp_booking_widget_i18n || {};
function showLoadError() {
    announce(i18n.error_failed_load_availability);
}
slotList.addEventListener('keydown', function (event) {
    if (event.key === 'ArrowDown') { moveFocus(1); }
});
"#
}

/// Catalog with a valid header and `n` msgid lines
fn catalog(n: usize) -> String {
    let mut content = String::from(
        "# Translation template for fp-esperienze\n\
         # Copyright (C) Francesco Passeri\n\n",
    );
    for i in 0..n {
        content.push_str(&format!("msgid \"string-{i}\"\nmsgstr \"\"\n\n"));
    }
    content
}

fn write_compliant_tree(root: &Path) {
    write_artifact(root, artifacts::STYLESHEET, compliant_stylesheet());
    write_artifact(root, artifacts::TEMPLATE, compliant_template());
    write_artifact(root, artifacts::SCRIPT, compliant_script());
    write_artifact(root, artifacts::CATALOG, &catalog(501));
}

fn run_to_string(root: &Path) -> (String, gate::GateOutcome) {
    let mut out = Vec::new();
    let outcome = gate::run(root, &mut out).expect("gate run should not fail on write");
    (String::from_utf8(out).expect("report is UTF-8"), outcome)
}

#[test]
fn test_compliant_tree_passes_everything() {
    let (_temp, root) = setup_plugin_root();
    write_compliant_tree(&root);

    let (report, outcome) = run_to_string(&root);

    assert!(outcome.passed());
    assert_eq!(outcome.summary.passed_count, 4);
    assert!(report.contains("CSS Color Contrast: ✅ PASS"));
    assert!(report.contains("ARIA Attributes: ✅ PASS"));
    assert!(report.contains("JavaScript i18n: ✅ PASS"));
    assert!(report.contains("Translation Files: ✅ PASS"));
    assert!(report.contains("Tests Passed: 4/4 (100.0%)"));
    assert!(report.contains("🎉 All accessibility checks passed!"));
}

#[test]
fn test_empty_tree_fails_everything_with_diagnostics() {
    let (_temp, root) = setup_plugin_root();

    let (report, outcome) = run_to_string(&root);

    assert!(!outcome.passed());
    assert_eq!(outcome.summary.passed_count, 0);
    assert!(report.contains("Tests Passed: 0/4 (0.0%)"));
    assert!(report.contains("⚠️  Some accessibility issues need attention"));

    for result in &outcome.results {
        assert!(!result.passed);
        assert!(
            matches!(result.evidence, Evidence::Diagnostic(_)),
            "missing artifacts must produce diagnostic evidence, got {:?}",
            result.evidence
        );
    }
}

#[test]
fn test_partial_tree_reports_good_compliance_but_fails_the_gate() {
    let (_temp, root) = setup_plugin_root();
    write_compliant_tree(&root);
    // Knock out one check: exactly 500 msgids is below the strict boundary
    write_artifact(&root, artifacts::CATALOG, &catalog(500));

    let (report, outcome) = run_to_string(&root);

    // The 75% tier wording is friendly, but the gate itself still fails
    assert!(!outcome.passed());
    assert_eq!(outcome.summary.passed_count, 3);
    assert!(report.contains("Translation Files: ❌ FAIL"));
    assert!(report.contains("  ✗ Has Sufficient Msgids"));
    assert!(report.contains("  ✓ Has Proper Header"));
    assert!(report.contains("Tests Passed: 3/4 (75.0%)"));
    assert!(report.contains("✅ Good accessibility compliance!"));
}

#[test]
fn test_undecodable_artifact_reports_error_and_continues() {
    let (_temp, root) = setup_plugin_root();
    write_compliant_tree(&root);
    let css_path = root.join(artifacts::STYLESHEET);
    fs::write(css_path, [0xff, 0xfe, 0x00, 0x01]).unwrap();

    let (report, outcome) = run_to_string(&root);

    assert!(!outcome.passed());
    assert_eq!(outcome.summary.passed_count, 3, "the other three checks still run");
    assert!(report.contains("CSS Color Contrast: ❌ ERROR - "));
    assert!(!report.contains("CSS Color Contrast: ❌ FAIL"));
    assert!(report.contains("Tests Passed: 3/4 (75.0%)"));
}

#[test]
fn test_evidence_criteria_render_in_order() {
    let (_temp, root) = setup_plugin_root();
    write_compliant_tree(&root);

    let (report, _) = run_to_string(&root);

    let radiogroup = report.find("✓ Radiogroup").expect("radiogroup line");
    let explicit_ids = report.find("✓ Explicit Ids").expect("explicit ids line");
    assert!(radiogroup < explicit_ids, "ARIA criteria keep declaration order");
}

#[test]
fn test_repeated_runs_are_identical() {
    let (_temp, root) = setup_plugin_root();
    write_artifact(&root, artifacts::STYLESHEET, compliant_stylesheet());
    write_artifact(&root, artifacts::SCRIPT, compliant_script());

    let (first_report, first) = run_to_string(&root);
    let (second_report, second) = run_to_string(&root);

    assert_eq!(first_report, second_report);
    assert_eq!(first.results, second.results);
    assert_eq!(first.summary, second.summary);
    assert_eq!(first.passed(), second.passed());
}

#[test]
fn test_results_arrive_in_fixed_rule_order() {
    let (_temp, root) = setup_plugin_root();
    write_compliant_tree(&root);

    let (_, outcome) = run_to_string(&root);

    let names: Vec<&str> = outcome.results.iter().map(|r: &CheckResult| r.name).collect();
    assert_eq!(
        names,
        vec!["CSS Color Contrast", "ARIA Attributes", "JavaScript i18n", "Translation Files"]
    );
}
