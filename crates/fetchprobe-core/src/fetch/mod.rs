//! Single-shot streaming HTTP GET.
//!
//! One blocking transfer per call: issue a GET with the caller's headers,
//! stream the body into the destination file in arrival order, and report
//! bytes written, status code, and content type. A non-success final status
//! aborts the transfer before the destination file is created.

mod classify;
mod error;

pub use classify::{classify, FailureKind};
pub use error::FetchError;

use std::collections::HashMap;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Knobs for a single fetch. Defaults reproduce the built-in probe behavior.
#[derive(Debug, Clone)]
pub struct FetchOptions {
    /// Whole-request timeout (connect + transfer).
    pub timeout: Duration,
    /// Receive buffer size handed to libcurl.
    pub buffer_bytes: usize,
    /// Enable libcurl's in-memory cookie engine for this transfer, so cookies
    /// set during the redirect chain are replayed within the attempt.
    pub use_session: bool,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            buffer_bytes: 8192,
            use_session: false,
        }
    }
}

/// Success summary for one fetch, used only for reporting.
#[derive(Debug, Clone)]
pub struct FetchReport {
    pub bytes_written: u64,
    pub status: u32,
    /// Content-Type of the final response, or "unknown" when absent.
    pub content_type: String,
}

/// Downloads `url` with a single GET, streaming the body to `destination`.
///
/// The destination is created (truncating any existing content) only once
/// body bytes for a success status start arriving; on an empty success body
/// it is created empty after the transfer. A transfer that fails mid-body
/// leaves the partial file behind, closed.
pub fn fetch(
    url: &str,
    headers: &HashMap<String, String>,
    destination: &Path,
    opts: &FetchOptions,
) -> Result<FetchReport, FetchError> {
    let mut easy = curl::easy::Easy::new();
    easy.url(url)?;
    easy.follow_location(true)?;
    easy.max_redirections(10)?;
    // Makes a 4xx/5xx final status fail the transfer before any body bytes
    // are delivered, so the destination file is never created for it.
    easy.fail_on_error(true)?;
    easy.timeout(opts.timeout)?;
    easy.connect_timeout(opts.timeout)?;
    easy.buffer_size(opts.buffer_bytes)?;
    if opts.use_session {
        // Empty path: enable the cookie engine without reading a file.
        easy.cookie_file("")?;
    }

    let mut list = curl::easy::List::new();
    let mut listed = 0usize;
    for (name, value) in headers {
        if name.eq_ignore_ascii_case("accept-encoding") {
            // Routed through libcurl so bodies land on disk decoded.
            easy.accept_encoding(value)?;
            continue;
        }
        list.append(&format!("{}: {}", name.trim(), value.trim()))?;
        listed += 1;
    }
    if listed > 0 {
        easy.http_headers(list)?;
    }

    let written = Arc::new(AtomicU64::new(0));
    let out_file: Arc<Mutex<Option<File>>> = Arc::new(Mutex::new(None));
    let write_err: Arc<Mutex<Option<std::io::Error>>> = Arc::new(Mutex::new(None));

    let result = {
        let written = Arc::clone(&written);
        let out_file = Arc::clone(&out_file);
        let write_err = Arc::clone(&write_err);
        let dest = destination.to_path_buf();
        let mut transfer = easy.transfer();
        transfer.write_function(move |data| {
            let mut slot = out_file.lock().unwrap();
            if slot.is_none() {
                match File::create(&dest) {
                    Ok(f) => *slot = Some(f),
                    Err(e) => {
                        tracing::warn!("create {} failed: {}", dest.display(), e);
                        *write_err.lock().unwrap() = Some(e);
                        return Ok(0); // abort transfer
                    }
                }
            }
            match slot.as_mut().unwrap().write_all(data) {
                Ok(()) => {
                    written.fetch_add(data.len() as u64, Ordering::Relaxed);
                    Ok(data.len())
                }
                Err(e) => {
                    tracing::warn!("write to {} failed: {}", dest.display(), e);
                    *write_err.lock().unwrap() = Some(e);
                    Ok(0) // abort transfer
                }
            }
        })?;
        transfer.perform()
    };

    // Close the file before inspecting the outcome, so a failed transfer
    // still leaves a closed (possibly partial) file behind.
    let file_created = {
        let mut slot = out_file.lock().unwrap();
        if let Some(f) = slot.as_mut() {
            let _ = f.flush();
        }
        slot.take().is_some()
    };

    if let Some(io_err) = write_err.lock().unwrap().take() {
        return Err(FetchError::Storage(io_err));
    }
    if let Err(e) = result {
        if e.is_http_returned_error() {
            let code = easy.response_code()?;
            return Err(FetchError::Http(code));
        }
        return Err(FetchError::Transport(e));
    }

    let status = easy.response_code()?;
    let content_type = easy
        .content_type()?
        .map(str::to_string)
        .unwrap_or_else(|| "unknown".to_string());

    // A success with an empty body never reaches the write callback; the
    // destination file still has to exist.
    if !file_created {
        File::create(destination)?;
    }

    Ok(FetchReport {
        bytes_written: written.load(Ordering::Relaxed),
        status,
        content_type,
    })
}
