//! Human-readable outcome reports for the console.
//!
//! Exactly one of these renders per attempt: a success report, or one of the
//! four bracketed failure tags.

use crate::fetch::{classify, FailureKind, FetchError, FetchReport};
use std::path::Path;

/// Success lines: byte count and destination, then status, then content type.
pub fn render_success(report: &FetchReport, destination: &Path) -> String {
    format!(
        "[SUCCESS] Downloaded {} bytes to {}\nStatus Code: {}\nContent-Type: {}",
        report.bytes_written,
        destination.display(),
        report.status,
        report.content_type
    )
}

/// Failure line(s) with the classified kind tag. Connection errors carry
/// guidance about active server-side rejection; request errors carry the
/// status code when one is known; unexpected errors carry a debug trace.
pub fn render_failure(err: &FetchError) -> String {
    match classify(err) {
        FailureKind::Connection => format!(
            "[CONNECTION ERROR] {}\n  This suggests the server is actively closing the connection.\n  Possible causes: bot detection, firewall, or TLS/SSL issues.",
            err
        ),
        FailureKind::Timeout => format!("[TIMEOUT] {}", err),
        FailureKind::Request { status: Some(code) } => {
            format!("[REQUEST ERROR] {}\n  Status Code: {}", err, code)
        }
        FailureKind::Request { status: None } => format!("[REQUEST ERROR] {}", err),
        FailureKind::Unexpected => format!("[UNEXPECTED ERROR] {}\n  {:?}", err, err),
    }
}
