//! HAR (HTTP Archive) header replay.
//!
//! Picks the capture entry for the probe target and reuses its request
//! headers as an extra attempt's configuration. Cookie extraction is opt-in
//! (--har-cookies), since replaying a session cookie is sometimes exactly
//! what the operator does not want.

mod parse;

use anyhow::{Context, Result};
use std::collections::HashMap;
use std::path::Path;

use parse::{HarEntry, HarHeader, HarLog};

/// Headers the HTTP client manages itself; replaying them breaks the request.
const MANAGED_HEADERS: [&str; 2] = ["Host", "Content-Length"];

/// Extracts the request headers to replay from a HAR capture.
///
/// Picks the last entry whose request URL equals `target_url`; failing that,
/// the entry whose response looks like a real download (200/206 with
/// Content-Length); failing that, the first entry. `Host`, `Content-Length`,
/// and HTTP/2 pseudo-headers are dropped; `Cookie` only survives when
/// `include_cookies` is set.
pub fn headers_for_url(
    path: &Path,
    target_url: &str,
    include_cookies: bool,
) -> Result<HashMap<String, String>> {
    let bytes =
        std::fs::read(path).with_context(|| format!("read HAR file: {}", path.display()))?;
    let har: HarLog = serde_json::from_slice(&bytes)
        .with_context(|| format!("parse HAR JSON: {}", path.display()))?;

    let entries = har.log.entries;
    if entries.is_empty() {
        anyhow::bail!("HAR file has no entries");
    }

    let entry = &entries[select_entry(&entries, target_url)];
    let mut headers = HashMap::new();
    for h in &entry.request.headers {
        if h.name.starts_with(':') {
            continue; // HTTP/2 pseudo-headers in browser captures
        }
        if MANAGED_HEADERS.iter().any(|m| h.name.eq_ignore_ascii_case(m)) {
            continue;
        }
        if h.name.eq_ignore_ascii_case("Cookie") && !include_cookies {
            continue;
        }
        headers.insert(h.name.clone(), h.value.clone());
    }
    Ok(headers)
}

/// Entry index for the target URL if captured, else a download-looking entry
/// (preferring 206 and later position), else 0.
fn select_entry(entries: &[HarEntry], target_url: &str) -> usize {
    if let Some(i) = entries.iter().rposition(|e| e.request.url == target_url) {
        return i;
    }
    entries
        .iter()
        .enumerate()
        .filter(|(_, e)| looks_like_download(e))
        .max_by_key(|(i, e)| (e.response.status == 206, *i))
        .map(|(i, _)| i)
        .unwrap_or(0)
}

/// True if the response looks like a real download: 200/206 + Content-Length.
fn looks_like_download(entry: &HarEntry) -> bool {
    let status = entry.response.status;
    if status != 200 && status != 206 {
        return false;
    }
    get_header(&entry.response.headers, "Content-Length").is_some()
}

fn get_header<'a>(headers: &'a [HarHeader], name: &str) -> Option<&'a str> {
    headers
        .iter()
        .find(|h| h.name.eq_ignore_ascii_case(name))
        .map(|h| h.value.as_str())
}
