//! Post-run output summary: size and SHA-256 per attempt output file.
//!
//! Computed after all attempts finish, off the transfer path, so the operator
//! can see at a glance whether the methods produced identical bytes.

use anyhow::{Context, Result};
use sha2::{Digest, Sha256};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

const BUF_SIZE: usize = 64 * 1024;

/// Size and digest of one attempt's output file; both `None` when the
/// attempt never created it.
#[derive(Debug)]
pub struct OutputSummary {
    pub path: PathBuf,
    pub bytes: Option<u64>,
    pub sha256: Option<String>,
}

/// Compute SHA-256 of a file and return the digest as lowercase hex.
/// Reads in chunks to keep memory use bounded.
pub fn sha256_file(path: &Path) -> Result<String> {
    let mut f = File::open(path).with_context(|| format!("open {}", path.display()))?;
    let mut hasher = Sha256::new();
    let mut buf = [0u8; BUF_SIZE];
    loop {
        let n = f
            .read(&mut buf)
            .with_context(|| format!("read {}", path.display()))?;
        if n == 0 {
            break;
        }
        hasher.update(&buf[..n]);
    }
    Ok(hex::encode(hasher.finalize()))
}

/// Summarize each path, tolerating absent files (failed attempts).
pub fn summarize(paths: &[PathBuf]) -> Vec<OutputSummary> {
    paths
        .iter()
        .map(|p| match std::fs::metadata(p) {
            Ok(meta) => OutputSummary {
                path: p.clone(),
                bytes: Some(meta.len()),
                sha256: sha256_file(p).ok(),
            },
            Err(_) => OutputSummary {
                path: p.clone(),
                bytes: None,
                sha256: None,
            },
        })
        .collect()
}

/// One console line per file.
pub fn render_line(summary: &OutputSummary) -> String {
    let name = summary
        .path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| summary.path.display().to_string());
    match (summary.bytes, summary.sha256.as_deref()) {
        (Some(bytes), Some(digest)) => {
            format!("  - {}: {} bytes  sha256={}", name, bytes, digest)
        }
        (Some(bytes), None) => format!("  - {}: {} bytes", name, bytes),
        _ => format!("  - {}: not created", name),
    }
}
