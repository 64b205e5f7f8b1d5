// src/crawl/normalize.rs
// =============================================================================
// Turns raw href values into canonical absolute URLs.
//
// Rules:
// - Absolute hrefs (with a scheme) are kept as they are
// - Relative hrefs are resolved against the SEED's scheme and host, not the
//   page they were found on. "/foo" and "foo" both become scheme://host/foo
// - Only http/https survive; mailto:, javascript:, tel:, data: etc. are dropped
// - Fragments are removed so "/a#x" and "/a#y" are the same page
// - Anything that fails to parse is silently skipped
//
// The returned string is the dedup key used by the frontier.
// =============================================================================

use super::origin::SeedOrigin;
use tracing::trace;
use url::{ParseError, Url};

// What kind of link an href turned out to be
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkKind {
    /// http or https: something we can crawl
    Web(Url),
    /// Any other scheme (mailto:, javascript:, ...)
    Other(String),
    /// Couldn't be parsed at all
    Malformed,
}

// Resolves and classifies one href
pub fn classify(raw_href: &str, origin: &SeedOrigin) -> LinkKind {
    let href = raw_href.trim();
    if href.is_empty() {
        return LinkKind::Malformed;
    }

    let parsed = match Url::parse(href) {
        Ok(url) => Ok(url),
        // No scheme: fill in the seed's scheme and host
        Err(ParseError::RelativeUrlWithoutBase) => origin.root().join(href),
        Err(e) => Err(e),
    };

    match parsed {
        Ok(mut url) if is_web_scheme(url.scheme()) => {
            url.set_fragment(None);
            LinkKind::Web(url)
        }
        Ok(url) => LinkKind::Other(url.scheme().to_string()),
        Err(_) => LinkKind::Malformed,
    }
}

// Returns the canonical absolute URL for an href, or None if it isn't crawlable
pub fn resolve(raw_href: &str, origin: &SeedOrigin) -> Option<String> {
    match classify(raw_href, origin) {
        LinkKind::Web(url) => Some(url.into()),
        LinkKind::Other(scheme) => {
            trace!("Ignoring {} link {}", scheme, raw_href);
            None
        }
        LinkKind::Malformed => None,
    }
}

fn is_web_scheme(scheme: &str) -> bool {
    scheme == "http" || scheme == "https"
}

#[cfg(test)]
mod tests {
    use super::*;

    fn origin() -> SeedOrigin {
        SeedOrigin::parse("http://example.com/bar").unwrap()
    }

    #[test]
    fn test_root_relative_link_uses_seed_host() {
        assert_eq!(
            resolve("/foo", &origin()),
            Some("http://example.com/foo".to_string())
        );
    }

    #[test]
    fn test_path_relative_link_resolves_from_root() {
        // Relative to the seed origin, never to the current page
        assert_eq!(
            resolve("docs/intro.html", &origin()),
            Some("http://example.com/docs/intro.html".to_string())
        );
    }

    #[test]
    fn test_absolute_link_is_kept() {
        assert_eq!(
            resolve("https://other.com/x?y=1", &origin()),
            Some("https://other.com/x?y=1".to_string())
        );
    }

    #[test]
    fn test_protocol_relative_link_takes_seed_scheme() {
        assert_eq!(
            resolve("//cdn.example.com/app.js", &origin()),
            Some("http://cdn.example.com/app.js".to_string())
        );
    }

    #[test]
    fn test_fragment_is_removed() {
        assert_eq!(
            resolve("/page#section", &origin()),
            Some("http://example.com/page".to_string())
        );
        assert_eq!(resolve("#top", &origin()), Some("http://example.com/".to_string()));
    }

    #[test]
    fn test_non_web_schemes_are_dropped() {
        assert_eq!(resolve("mailto:test@example.com", &origin()), None);
        assert_eq!(resolve("javascript:void(0)", &origin()), None);
        assert_eq!(resolve("tel:+15555555555", &origin()), None);
        assert_eq!(
            classify("mailto:test@example.com", &origin()),
            LinkKind::Other("mailto".to_string())
        );
    }

    #[test]
    fn test_empty_and_malformed_are_dropped() {
        assert_eq!(classify("", &origin()), LinkKind::Malformed);
        assert_eq!(classify("   ", &origin()), LinkKind::Malformed);
        assert_eq!(classify("http://[::1", &origin()), LinkKind::Malformed);
        assert_eq!(resolve("http://", &origin()), None);
    }

    #[test]
    fn test_canonical_form_matches_seed_form() {
        // Host case and the implicit root path are normalized
        assert_eq!(
            resolve("HTTP://Example.COM", &origin()),
            Some("http://example.com/".to_string())
        );
    }
}
