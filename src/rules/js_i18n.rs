// SPDX-License-Identifier: PMPL-1.0-or-later
//! JavaScript i18n and keyboard navigation rule.
//!
//! The booking widget script must pull its strings from the localized
//! object handed over by wp_localize_script, must not ship the old
//! hardcoded English error, and must wire up arrow-key navigation.
//! All criteria are required; there is no threshold here.

use crate::artifacts;
use crate::rules::{CheckResult, Evidence, Rule};

/// The localization object the widget reads its strings from
const I18N_OBJECT: &str = "fp_booking_widget_i18n";

/// Hardcoded English error that must be gone from the script
const HARDCODED_ERROR: &str = "Failed to load availability.";

/// Message key that replaced the hardcoded error
const LOCALIZED_ERROR_KEY: &str = "error_failed_load_availability";

/// JavaScript i18n rule
pub struct JsI18nRule;

impl Rule for JsI18nRule {
    fn name(&self) -> &'static str {
        "JavaScript i18n"
    }

    fn artifact(&self) -> &'static str {
        artifacts::SCRIPT
    }

    fn missing_diagnostic(&self) -> &'static str {
        "JavaScript file not found"
    }

    fn evaluate(&self, content: &str) -> CheckResult {
        let uses_i18n_object = content.contains(I18N_OBJECT);
        // Inverted predicate: presence of the hardcoded string is the fault
        let no_hardcoded_errors = !content.contains(HARDCODED_ERROR);
        let localized_messages = content.contains(LOCALIZED_ERROR_KEY);
        // One named criterion folding two markers: a keydown handler that
        // actually inspects the arrow keys
        let keyboard_navigation = content.contains("keydown") && content.contains("ArrowDown");

        let criteria = vec![
            ("uses_i18n_object", uses_i18n_object),
            ("no_hardcoded_errors", no_hardcoded_errors),
            ("localized_messages", localized_messages),
            ("keyboard_navigation", keyboard_navigation),
        ];

        CheckResult {
            name: self.name(),
            passed: criteria.iter().all(|(_, ok)| *ok),
            evidence: Evidence::Criteria(criteria),
        }
    }
}
