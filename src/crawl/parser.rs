// src/crawl/parser.rs
// =============================================================================
// Pulls the bits we care about out of a fetched HTML page:
// - the <title> text
// - the <meta name="description"> content
// - every <a href="..."> value, in document order
//
// scraper (html5ever underneath) never fails on bad markup, it just builds
// the best tree it can. Missing fields come back as empty strings.
// =============================================================================

use scraper::{Html, Selector};
use std::sync::LazyLock;

// Selectors are compile-time constants, so parsing them can't fail
static TITLE: LazyLock<Selector> = LazyLock::new(|| selector("title"));
static DESCRIPTION: LazyLock<Selector> =
    LazyLock::new(|| selector(r#"meta[name="description"]"#));
static ANCHOR: LazyLock<Selector> = LazyLock::new(|| selector("a[href]"));

fn selector(css: &str) -> Selector {
    Selector::parse(css).expect("hard-coded CSS selector is valid")
}

// What one page tells us
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageSummary {
    pub title: String,
    pub description: String,
    /// Raw href values, not yet resolved. Empty hrefs are already dropped.
    pub links: Vec<String>,
}

pub fn parse_page(html: &str) -> PageSummary {
    let document = Html::parse_document(html);

    let title = document
        .select(&TITLE)
        .next()
        .map(|element| element.text().collect::<String>().trim().to_string())
        .unwrap_or_default();

    let description = document
        .select(&DESCRIPTION)
        .next()
        .and_then(|element| element.value().attr("content"))
        .unwrap_or_default()
        .to_string();

    let links = document
        .select(&ANCHOR)
        .filter_map(|element| element.value().attr("href"))
        .filter(|href| !href.trim().is_empty())
        .map(str::to_string)
        .collect();

    PageSummary {
        title,
        description,
        links,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_description_and_links() {
        let html = r#"
            <html>
              <head>
                <title> Example Domain </title>
                <meta name="description" content="Just an example">
              </head>
              <body>
                <a href="/a">A</a>
                <a href="https://other.com/b">B</a>
              </body>
            </html>
        "#;
        let page = parse_page(html);

        assert_eq!(page.title, "Example Domain");
        assert_eq!(page.description, "Just an example");
        assert_eq!(page.links, vec!["/a", "https://other.com/b"]);
    }

    #[test]
    fn test_missing_fields_are_empty() {
        let page = parse_page("<html><body><p>No metadata here</p></body></html>");
        assert_eq!(page, PageSummary::default());
    }

    #[test]
    fn test_meta_without_content_is_empty() {
        let page = parse_page(r#"<meta name="description"><title>T</title>"#);
        assert_eq!(page.title, "T");
        assert_eq!(page.description, "");
    }

    #[test]
    fn test_only_first_title_is_used() {
        let page = parse_page("<title>First</title><title>Second</title>");
        assert_eq!(page.title, "First");
    }

    #[test]
    fn test_links_keep_order_and_duplicates() {
        let html = r#"
            <a href="/b">1</a>
            <a>no href</a>
            <a href="">empty</a>
            <a href="  ">blank</a>
            <a href="/c">2</a>
            <a href="/b">3</a>
        "#;
        let page = parse_page(html);
        assert_eq!(page.links, vec!["/b", "/c", "/b"]);
    }

    #[test]
    fn test_malformed_html_does_not_fail() {
        let html = "<html><head><title>Broken</title><body><a href='/x'>x<div></span></p>";
        let page = parse_page(html);
        assert_eq!(page.title, "Broken");
        assert_eq!(page.links, vec!["/x"]);
    }
}
