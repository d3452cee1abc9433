// SPDX-License-Identifier: PMPL-1.0-or-later
//! Artifact loading for the compliance gate.
//!
//! Every check inspects exactly one file at a fixed path relative to the
//! plugin root. Absence is reported distinctly from any other read fault so
//! that rules can degrade to a controlled fail instead of aborting the run.

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Frontend stylesheet inspected by the CSS contrast check
pub const STYLESHEET: &str = "assets/css/frontend.css";

/// Single-experience template inspected by the ARIA check
pub const TEMPLATE: &str = "templates/single-experience.php";

/// Booking widget script inspected by the JavaScript i18n check
pub const SCRIPT: &str = "assets/js/booking-widget.js";

/// Translation template inspected by the catalog check
pub const CATALOG: &str = "languages/fp-esperienze.pot";

/// Faults raised while loading an artifact
#[derive(Error, Debug)]
pub enum ReadError {
    /// The artifact does not exist. Rules map this to a controlled fail.
    #[error("{} not found", .0.display())]
    NotFound(PathBuf),

    /// Any other read fault (permissions, undecodable bytes). Surfaced at
    /// the gate as an ERROR outcome rather than a plain FAIL.
    #[error("failed to read {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Read the full text of an artifact under the plugin root.
///
/// No caching and no encoding negotiation beyond UTF-8; undecodable content
/// comes back as `ReadError::Io`.
pub fn read_artifact(root: &Path, relative: &str) -> Result<String, ReadError> {
    let path = root.join(relative);
    std::fs::read_to_string(&path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => ReadError::NotFound(path.clone()),
        _ => ReadError::Io { path: path.clone(), source },
    })
}
