// src/crawl/origin.rs
// =============================================================================
// The seed URL decides what "the same site" means for the whole crawl.
//
// How it works:
// 1. Validate the seed (http/https with a real host)
// 2. Build its base URL: scheme://host[:port]
// 3. Build an alternate base by toggling "www." so that example.com and
//    www.example.com count as the same site
// 4. A URL is in scope if it contains either base as a substring
//
// The substring test is deliberately loose: http://example.com.other.org
// also matches a seed of http://example.com. That's accepted.
//
// Rust concepts:
// - Url: parsed URL with accessors for scheme, host, port
// - Immutable struct: built once, only borrowed afterwards
// =============================================================================

use crate::error::{CrawlError, Result};
use url::Url;

// Everything we know about the seed, computed once at startup
#[derive(Debug, Clone)]
pub struct SeedOrigin {
    /// The seed itself in canonical form (first URL in the frontier)
    seed: Url,
    /// scheme://host/ used to resolve relative links
    root: Url,
    /// scheme://host[:port], no trailing slash
    base: String,
    /// Same as base with "www." added or removed
    alt_base: String,
}

impl SeedOrigin {
    // Validates the seed URL and derives the origin from it
    //
    // Fails (InvalidSeed) if:
    //   - the input doesn't parse as an absolute URL ("not-a-url")
    //   - the scheme is anything but http/https
    //   - there is no host
    pub fn parse(input: &str) -> Result<Self> {
        let mut seed = Url::parse(input.trim())
            .map_err(|e| CrawlError::invalid_seed(input, e.to_string()))?;

        if seed.scheme() != "http" && seed.scheme() != "https" {
            return Err(CrawlError::invalid_seed(
                input,
                format!("unsupported scheme '{}' (expected http or https)", seed.scheme()),
            ));
        }

        let host = match seed.host_str() {
            Some(host) if !host.is_empty() => host.to_string(),
            _ => return Err(CrawlError::invalid_seed(input, "URL has no host")),
        };

        seed.set_fragment(None);
        // Credentials would keep the seed from matching its own base
        let _ = seed.set_username("");
        let _ = seed.set_password(None);

        let base = match seed.port() {
            Some(port) => format!("{}://{}:{}", seed.scheme(), host, port),
            None => format!("{}://{}", seed.scheme(), host),
        };
        let alt_base = toggle_www(&base);

        let mut root = seed.clone();
        root.set_path("/");
        root.set_query(None);

        Ok(Self {
            seed,
            root,
            base,
            alt_base,
        })
    }

    pub fn seed_url(&self) -> &Url {
        &self.seed
    }

    pub fn root(&self) -> &Url {
        &self.root
    }

    pub fn base_url(&self) -> &str {
        &self.base
    }

    pub fn alternate_base_url(&self) -> &str {
        &self.alt_base
    }

    // Is this URL part of the site we're crawling?
    pub fn in_scope(&self, url: &str) -> bool {
        url.contains(&self.base) || url.contains(&self.alt_base)
    }
}

// Adds or removes "www." right after the scheme separator
//
// Examples:
//   "https://www.example.com" -> "https://example.com"
//   "https://example.com"     -> "https://www.example.com"
fn toggle_www(base: &str) -> String {
    if base.contains("www.") {
        base.replacen("www.", "", 1)
    } else {
        base.replacen("://", "://www.", 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_and_alternate_without_www() {
        let origin = SeedOrigin::parse("http://example.com").unwrap();
        assert_eq!(origin.base_url(), "http://example.com");
        assert_eq!(origin.alternate_base_url(), "http://www.example.com");
        assert_eq!(origin.seed_url().as_str(), "http://example.com/");
    }

    #[test]
    fn test_base_and_alternate_with_www() {
        let origin = SeedOrigin::parse("https://www.example.com/docs?page=2#top").unwrap();
        assert_eq!(origin.base_url(), "https://www.example.com");
        assert_eq!(origin.alternate_base_url(), "https://example.com");
        assert_eq!(origin.seed_url().as_str(), "https://www.example.com/docs?page=2");
        assert_eq!(origin.root().as_str(), "https://www.example.com/");
    }

    #[test]
    fn test_port_is_part_of_base() {
        let origin = SeedOrigin::parse("http://127.0.0.1:8080/start").unwrap();
        assert_eq!(origin.base_url(), "http://127.0.0.1:8080");
        assert!(origin.in_scope("http://127.0.0.1:8080/other"));
        assert!(!origin.in_scope("http://127.0.0.1:9090/other"));
    }

    #[test]
    fn test_in_scope_www_equivalence() {
        let origin = SeedOrigin::parse("http://example.com").unwrap();
        assert!(origin.in_scope("http://example.com/a"));
        assert!(origin.in_scope("http://www.example.com/b"));
        assert!(!origin.in_scope("http://other.com/c"));
    }

    #[test]
    fn test_in_scope_is_a_substring_match() {
        let origin = SeedOrigin::parse("http://example.com").unwrap();
        // Accepted false positive of the substring rule
        assert!(origin.in_scope("http://example.com.other.org/"));
        // Scheme matters: an https link is not the http site
        assert!(!origin.in_scope("https://example.com/a"));
    }

    #[test]
    fn test_reject_not_a_url() {
        let err = SeedOrigin::parse("not-a-url").unwrap_err();
        assert!(matches!(err, CrawlError::InvalidSeed { .. }));
    }

    #[test]
    fn test_reject_unsupported_scheme() {
        let err = SeedOrigin::parse("ftp://example.com").unwrap_err();
        assert!(err.to_string().contains("unsupported scheme"));
    }

    #[test]
    fn test_reject_missing_host() {
        assert!(SeedOrigin::parse("http://").is_err());
        assert!(SeedOrigin::parse("mailto:someone@example.com").is_err());
    }

    #[test]
    fn test_credentials_are_stripped_from_seed_and_root() {
        let origin = SeedOrigin::parse("http://user:pw@example.com/private").unwrap();
        assert_eq!(origin.seed_url().as_str(), "http://example.com/private");
        assert_eq!(origin.root().as_str(), "http://example.com/");
        assert!(origin.in_scope(origin.seed_url().as_str()));
    }
}
