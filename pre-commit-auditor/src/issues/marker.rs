//! Repository key embedded in tracking issue bodies.
//!
//! Each issue the auditor opens ends with a hidden HTML comment naming the
//! repository it tracks, e.g. `<!-- pre-commit-auditor: acme/widgets -->`.

const MARKER_PREFIX: &str = "<!-- pre-commit-auditor:";
const MARKER_SUFFIX: &str = "-->";

/// Builds the marker for a repository.
#[must_use]
pub fn tracking_marker(full_name: &str) -> String {
    format!("{MARKER_PREFIX} {full_name} {MARKER_SUFFIX}")
}

/// Appends the repository marker to a rendered issue body.
#[must_use]
pub fn with_tracking_marker(body: &str, full_name: &str) -> String {
    format!("{}\n\n{}\n", body.trim_end(), tracking_marker(full_name))
}

/// Extracts the repository key from an issue body, if it carries one.
#[must_use]
pub fn marker_key(body: &str) -> Option<&str> {
    let start = body.find(MARKER_PREFIX)? + MARKER_PREFIX.len();
    let rest = &body[start..];
    let end = rest.find(MARKER_SUFFIX)?;
    Some(rest[..end].trim())
}
