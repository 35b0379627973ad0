//! Canonical URL keys for duplicate detection.

use url::Url;

/// Normalize a URL into a duplicate-detection key: the fragment is cleared
/// and trailing slashes are stripped from any non-root path, so in-page
/// anchors and `/a/` vs `/a` differences never count as distinct tabs.
///
/// Input that fails to parse is returned unchanged; malformed URLs are
/// deduplicated by raw string equality only.
pub fn canonical_url(raw: &str) -> String {
    let Ok(mut parsed) = Url::parse(raw) else {
        return raw.to_string();
    };

    parsed.set_fragment(None);
    if parsed.path() != "/" && parsed.path().ends_with('/') {
        let trimmed = parsed.path().trim_end_matches('/').to_string();
        parsed.set_path(&trimmed);
    }
    parsed.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fragment_and_trailing_slash_stripped() {
        assert_eq!(canonical_url("https://x.com/a/#frag"), "https://x.com/a");
        assert_eq!(canonical_url("https://x.com/a/"), "https://x.com/a");
        assert_eq!(canonical_url("https://x.com/a"), "https://x.com/a");
    }

    #[test]
    fn test_root_path_kept() {
        assert_eq!(canonical_url("https://x.com/"), "https://x.com/");
        assert_eq!(canonical_url("https://x.com/#top"), "https://x.com/");
    }

    #[test]
    fn test_query_survives() {
        assert_eq!(
            canonical_url("https://x.com/search/?q=1#results"),
            "https://x.com/search?q=1"
        );
    }

    #[test]
    fn test_malformed_returned_unchanged() {
        assert_eq!(canonical_url("not a url"), "not a url");
        assert_eq!(canonical_url(""), "");
    }
}
