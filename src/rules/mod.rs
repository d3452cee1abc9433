// SPDX-License-Identifier: PMPL-1.0-or-later
//! The four compliance rules and their shared result types.
//!
//! Each rule is a pure evaluator: artifact content in, `CheckResult` out.
//! File access stays outside the rules so the gate can map a missing
//! artifact to a controlled fail before evaluation ever runs.

pub mod aria;
pub mod css;
pub mod js_i18n;
pub mod translations;

/// Detail payload explaining why a check passed or failed
#[derive(Debug, Clone, PartialEq)]
pub enum Evidence {
    /// Named boolean criteria. Insertion order is the display order.
    Criteria(Vec<(&'static str, bool)>),
    /// Free-form diagnostic standing in for criteria, used when the
    /// artifact is absent or evaluation never completed.
    Diagnostic(String),
}

/// Outcome of one rule evaluation. Immutable once returned.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckResult {
    pub name: &'static str,
    pub passed: bool,
    pub evidence: Evidence,
}

/// Trait implemented by all compliance rules
pub trait Rule: Send + Sync {
    /// Human-readable name of this rule
    fn name(&self) -> &'static str;

    /// Relative path of the artifact this rule inspects
    fn artifact(&self) -> &'static str;

    /// Diagnostic text used when the artifact is absent
    fn missing_diagnostic(&self) -> &'static str;

    /// Evaluate the artifact content
    fn evaluate(&self, content: &str) -> CheckResult;
}

/// All rules, in the fixed evaluation (and report) order
pub fn all() -> Vec<Box<dyn Rule>> {
    vec![
        Box::new(css::CssContrastRule),
        Box::new(aria::AriaAttributesRule),
        Box::new(js_i18n::JsI18nRule),
        Box::new(translations::TranslationCatalogRule),
    ]
}
