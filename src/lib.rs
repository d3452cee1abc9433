// SPDX-License-Identifier: PMPL-1.0-or-later
//! fp-a11y-check - Accessibility compliance gate for FP Esperienze
//!
//! Inspects four source artifacts of the FP Esperienze plugin and reports
//! whether each satisfies its accessibility-related textual conditions.
//! Intended as a manual or CI gate signal, not a runtime component.
//!
//! ## Checks
//!
//! - **CSS Color Contrast**: stylesheet uses the accessible color variables
//!   and no longer declares the legacy low-contrast literals
//! - **ARIA Attributes**: booking template carries the expected roles,
//!   ARIA attributes, and explicit ids (80% threshold)
//! - **JavaScript i18n**: booking widget script is localized and keyboard
//!   navigable (strict all-criteria conjunction)
//! - **Translation Files**: the .pot catalog has a proper header and more
//!   than 500 message ids
//!
//! All checks are substring presence checks over the raw artifact text.
//! Nothing is parsed into an AST and nothing is ever written back.

pub mod artifacts;
pub mod gate;
pub mod report;
pub mod rules;
