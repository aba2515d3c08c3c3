//! Sequential attempt planning and execution.
//!
//! Attempts run strictly in order on the calling thread; each one is
//! single-shot, owns its destination file and connection for its lifetime,
//! and cannot affect the others.

use anyhow::Result;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::fetch::{self, FetchError, FetchOptions, FetchReport};
use crate::har;
use crate::profiles::{self, HeaderProfile};
use crate::url_model;

/// One planned probe attempt.
#[derive(Debug, Clone)]
pub struct Attempt {
    pub label: String,
    pub file_stem: String,
    pub headers: HashMap<String, String>,
    pub use_session: bool,
}

impl From<HeaderProfile> for Attempt {
    fn from(p: HeaderProfile) -> Self {
        Self {
            label: p.label.to_string(),
            file_stem: p.file_stem.to_string(),
            headers: p.headers,
            use_session: p.use_session,
        }
    }
}

/// Outcome of a finished attempt, kept only long enough to report it.
#[derive(Debug)]
pub struct AttemptOutcome {
    pub destination: PathBuf,
    pub result: Result<FetchReport, FetchError>,
}

/// The three built-in attempts, plus an optional HAR-replay attempt.
///
/// A HAR that cannot be read or parsed is a setup error and fails the plan;
/// it never silently shortens the attempt list.
pub fn plan_attempts(url: &str, har: Option<(&Path, bool)>) -> Result<Vec<Attempt>> {
    let mut attempts: Vec<Attempt> = profiles::builtin_profiles()
        .into_iter()
        .map(Attempt::from)
        .collect();
    if let Some((path, include_cookies)) = har {
        let headers = har::headers_for_url(path, url, include_cookies)?;
        attempts.push(Attempt {
            label: "Replaying headers from HAR capture".to_string(),
            file_stem: "probe_har".to_string(),
            headers,
            use_session: false,
        });
    }
    Ok(attempts)
}

/// Destination file for an attempt: its stem plus the URL path's extension.
pub fn attempt_destination(output_dir: &Path, attempt: &Attempt, url: &str) -> PathBuf {
    output_dir.join(url_model::output_filename(&attempt.file_stem, url))
}

/// Run one attempt to completion. Single-shot, no retries; the result
/// carries either the success report or the error, ready for classification.
pub fn run_attempt(
    url: &str,
    attempt: &Attempt,
    output_dir: &Path,
    opts: &FetchOptions,
) -> AttemptOutcome {
    let destination = attempt_destination(output_dir, attempt, url);
    let mut opts = opts.clone();
    opts.use_session = attempt.use_session;
    tracing::debug!(
        "attempt '{}' ({} headers) -> {}",
        attempt.label,
        attempt.headers.len(),
        destination.display()
    );
    let result = fetch::fetch(url, &attempt.headers, &destination, &opts);
    match &result {
        Ok(report) => tracing::info!(
            "attempt '{}' succeeded: {} bytes, HTTP {}",
            attempt.label,
            report.bytes_written,
            report.status
        ),
        Err(err) => tracing::info!("attempt '{}' failed: {}", attempt.label, err),
    }
    AttemptOutcome {
        destination,
        result,
    }
}
