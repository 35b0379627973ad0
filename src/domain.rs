//! Registrable-domain extraction and the grouping key derived from it.

use url::Url;

/// Known multi-label public suffixes. A fixed, non-exhaustive approximation
/// of the public-suffix list; unrecognized multi-label suffixes degrade to a
/// plain two-label registrable domain.
const MULTI_LABEL_SUFFIXES: &[&str] = &[
    // UK
    "co.uk", "org.uk", "ac.uk", "gov.uk", "ltd.uk", "plc.uk", "me.uk", "net.uk",
    // AU
    "com.au", "net.au", "org.au", "edu.au", "gov.au",
    // JP
    "co.jp", "or.jp", "ne.jp", "ac.jp", "go.jp",
    // BR
    "com.br", "net.br", "org.br", "gov.br", "edu.br",
    // Hosting suffixes commonly seen in the wild
    "github.io", "blogspot.com",
];

fn is_multi_label_suffix(suffix: &str) -> bool {
    MULTI_LABEL_SUFFIXES.contains(&suffix)
}

/// Check if a hostname looks like an IP literal (dotted v4 or a v6 address).
fn is_ip_literal(host: &str) -> bool {
    let v4 = host
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_digit())
        && host.chars().all(|c| c.is_ascii_digit() || c == '.');
    v4 || host.contains(':')
}

/// The organization-owned portion of a hostname: one label above the public
/// suffix, e.g. `addons.mozilla.org` -> `mozilla.org` and
/// `news.bbc.co.uk` -> `bbc.co.uk`.
///
/// Single-label hosts and IP literals are returned unchanged.
pub fn registrable_domain(hostname: &str) -> String {
    let host = hostname.trim().to_lowercase();
    if is_ip_literal(&host) {
        return host;
    }

    let labels: Vec<&str> = host.split('.').filter(|l| !l.is_empty()).collect();
    if labels.len() <= 1 {
        return host;
    }

    let last2 = labels[labels.len() - 2..].join(".");
    if labels.len() >= 3 {
        if is_multi_label_suffix(&last2) {
            return labels[labels.len() - 3..].join(".");
        }
        let last3 = labels[labels.len() - 3..].join(".");
        if labels.len() >= 4 && is_multi_label_suffix(&last3) {
            return labels[labels.len() - 4..].join(".");
        }
    }
    last2
}

/// Grouping key for a URL: the first label of the registrable domain, so
/// every subdomain of one organization sorts together (`mozilla` for
/// `addons.mozilla.org`). Unparseable URLs and URLs without a host key as
/// `""` and sort first.
pub fn sort_key_domain(url: &str) -> String {
    let Ok(parsed) = Url::parse(url) else {
        return String::new();
    };
    let Some(host) = parsed.host_str() else {
        return String::new();
    };

    let registrable = registrable_domain(host);
    if is_ip_literal(&registrable) {
        return registrable;
    }
    match registrable.split_once('.') {
        Some((first, _)) => first.to_string(),
        None => registrable,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registrable_domain_two_labels() {
        assert_eq!(registrable_domain("google.com"), "google.com");
        assert_eq!(registrable_domain("www.google.com"), "google.com");
        assert_eq!(registrable_domain("a.b.mozilla.org"), "mozilla.org");
    }

    #[test]
    fn test_registrable_domain_multi_label_suffixes() {
        assert_eq!(registrable_domain("foo.co.uk"), "foo.co.uk");
        assert_eq!(registrable_domain("news.bbc.co.uk"), "bbc.co.uk");
        assert_eq!(registrable_domain("store.amazon.com.au"), "amazon.com.au");
        assert_eq!(registrable_domain("rust-lang.github.io"), "rust-lang.github.io");
        assert_eq!(registrable_domain("docs.rust-lang.github.io"), "rust-lang.github.io");
    }

    #[test]
    fn test_registrable_domain_unknown_suffix_degrades() {
        // co.nz is not in the fixed suffix set, so only two labels survive.
        assert_eq!(registrable_domain("shop.example.co.nz"), "co.nz");
    }

    #[test]
    fn test_registrable_domain_single_label_and_ips() {
        assert_eq!(registrable_domain("localhost"), "localhost");
        assert_eq!(registrable_domain("127.0.0.1"), "127.0.0.1");
        assert_eq!(registrable_domain("192.168.1.1"), "192.168.1.1");
        assert_eq!(registrable_domain(""), "");
    }

    #[test]
    fn test_registrable_domain_case_and_whitespace() {
        assert_eq!(registrable_domain(" Addons.Mozilla.ORG "), "mozilla.org");
    }

    #[test]
    fn test_sort_key_clusters_subdomains() {
        assert_eq!(sort_key_domain("https://a.b.mozilla.org/page"), "mozilla");
        assert_eq!(sort_key_domain("https://addons.mozilla.org"), "mozilla");
        assert_eq!(sort_key_domain("https://news.bbc.co.uk/article"), "bbc");
        assert_eq!(sort_key_domain("https://github.com/rust-lang/rust"), "github");
    }

    #[test]
    fn test_sort_key_fails_soft() {
        assert_eq!(sort_key_domain(""), "");
        assert_eq!(sort_key_domain("not a url"), "");
        assert_eq!(sort_key_domain("about:blank"), "");
    }

    #[test]
    fn test_sort_key_ip_hosts() {
        // IP hosts key on the whole literal rather than a leading octet.
        assert_eq!(sort_key_domain("http://127.0.0.1:8080/"), "127.0.0.1");
        assert_eq!(sort_key_domain("http://localhost:3000/"), "localhost");
    }
}
