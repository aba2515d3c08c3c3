//! Output filename derivation from the target URL.
//!
//! Each attempt writes to a fixed stem; the extension follows the URL path
//! so `probe_browser` against an image ends in `.jpg` and not `.bin`.

/// Extension used when the URL path has none.
const DEFAULT_EXT: &str = "bin";

/// Extension of the URL's last path segment, lowercased, if it has a sane one.
pub fn extension_from_url(url: &str) -> Option<String> {
    let parsed = url::Url::parse(url).ok()?;
    let segment = parsed.path().split('/').filter(|s| !s.is_empty()).last()?;
    let (stem, ext) = segment.rsplit_once('.')?;
    if stem.is_empty() || ext.is_empty() || !ext.chars().all(|c| c.is_ascii_alphanumeric()) {
        return None;
    }
    Some(ext.to_ascii_lowercase())
}

/// Output filename for an attempt: `stem` plus the URL path's extension.
///
/// `output_filename("probe_browser", "https://x/y/photo.jpg")` → `"probe_browser.jpg"`.
pub fn output_filename(stem: &str, url: &str) -> String {
    let ext = extension_from_url(url).unwrap_or_else(|| DEFAULT_EXT.to_string());
    format!("{}.{}", stem, ext)
}
