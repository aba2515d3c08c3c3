//! Built-in header profiles for the three probe methods.
//!
//! These are constants of the program: one full browser-like set, the same
//! set issued through a cookie-enabled session handle, and a minimal
//! two-header set. Comparing which of them the server accepts is the whole
//! point of the tool.

use std::collections::HashMap;

/// Default probe target: the image that triggered the original investigation.
pub const DEFAULT_URL: &str =
    "https://www.vonmaur.com/Images/Product/2144427/1621855/StillPhoto/1621855_Frt.jpg";

const BROWSER_UA: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";
const MINIMAL_UA: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";
const REFERER: &str = "https://www.vonmaur.com/";
const ORIGIN: &str = "https://www.vonmaur.com";

/// One probe configuration: a console label, a stem for the output file,
/// the headers to send, and whether the cookie engine is enabled.
#[derive(Debug, Clone)]
pub struct HeaderProfile {
    pub label: &'static str,
    pub file_stem: &'static str,
    pub headers: HashMap<String, String>,
    pub use_session: bool,
}

fn browser_headers() -> HashMap<String, String> {
    let pairs = [
        ("User-Agent", BROWSER_UA),
        (
            "Accept",
            "image/avif,image/webp,image/apng,image/svg+xml,image/*,*/*;q=0.8",
        ),
        ("Accept-Language", "en-US,en;q=0.9"),
        ("Accept-Encoding", "gzip, deflate, br"),
        ("Connection", "keep-alive"),
        ("Cache-Control", "no-cache"),
        ("Pragma", "no-cache"),
        ("Sec-Fetch-Dest", "image"),
        ("Sec-Fetch-Mode", "no-cors"),
        ("Sec-Fetch-Site", "cross-site"),
        ("Referer", REFERER),
        ("Origin", ORIGIN),
    ];
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn minimal_headers() -> HashMap<String, String> {
    let pairs = [("User-Agent", MINIMAL_UA), ("Referer", REFERER)];
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// The three built-in probe methods, in the order they run.
pub fn builtin_profiles() -> Vec<HeaderProfile> {
    vec![
        HeaderProfile {
            label: "Direct request with enhanced headers",
            file_stem: "probe_browser",
            headers: browser_headers(),
            use_session: false,
        },
        HeaderProfile {
            label: "Cookie-enabled session with enhanced headers",
            file_stem: "probe_session",
            headers: browser_headers(),
            use_session: true,
        },
        HeaderProfile {
            label: "Minimal headers (like a simple browser)",
            file_stem: "probe_minimal",
            headers: minimal_headers(),
            use_session: false,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_profiles_in_fixed_order() {
        let profiles = builtin_profiles();
        assert_eq!(profiles.len(), 3);
        assert_eq!(profiles[0].file_stem, "probe_browser");
        assert_eq!(profiles[1].file_stem, "probe_session");
        assert_eq!(profiles[2].file_stem, "probe_minimal");
    }

    #[test]
    fn only_second_profile_uses_session() {
        let profiles = builtin_profiles();
        assert!(!profiles[0].use_session);
        assert!(profiles[1].use_session);
        assert!(!profiles[2].use_session);
    }

    #[test]
    fn browser_set_is_full_minimal_is_two() {
        let profiles = builtin_profiles();
        assert_eq!(profiles[0].headers.len(), 12);
        assert_eq!(profiles[1].headers, profiles[0].headers);
        assert_eq!(profiles[2].headers.len(), 2);
        assert!(profiles[2].headers.contains_key("User-Agent"));
        assert!(profiles[2].headers.contains_key("Referer"));
    }

    #[test]
    fn browser_set_carries_sec_fetch_and_origin() {
        let headers = browser_headers();
        assert_eq!(headers.get("Sec-Fetch-Dest").map(String::as_str), Some("image"));
        assert_eq!(headers.get("Origin").map(String::as_str), Some(ORIGIN));
        assert_eq!(
            headers.get("Accept-Encoding").map(String::as_str),
            Some("gzip, deflate, br")
        );
    }
}
