//! HTML parser for extracting titles and outbound links
//!
//! The crawl core only depends on the [`PageParser`] trait; [`HtmlParser`]
//! is the production implementation over the `scraper` crate.

use crate::ParseError;
use scraper::{Html, Selector};
use url::Url;

/// Extracted information from an HTML page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedPage {
    /// The page title from the `<title>` tag, empty when absent
    pub title: String,

    /// All followable links found on the page, as absolute URLs in
    /// document order
    pub outlinks: Vec<String>,
}

/// Extracts a title and outbound links from a fetched page body
///
/// Relative links must be resolved against the page's own URL.
pub trait PageParser: Send + Sync {
    /// Parses `body`, fetched from `url`
    fn parse(&self, url: &str, body: &str) -> Result<ParsedPage, ParseError>;
}

/// Production parser backed by `scraper`
#[derive(Debug, Clone, Default)]
pub struct HtmlParser;

impl HtmlParser {
    pub fn new() -> Self {
        Self
    }
}

impl PageParser for HtmlParser {
    fn parse(&self, url: &str, body: &str) -> Result<ParsedPage, ParseError> {
        let base_url = Url::parse(url).map_err(|e| ParseError::Html {
            url: url.to_string(),
            message: format!("invalid base URL: {}", e),
        })?;

        let document = Html::parse_document(body);

        let title = extract_title(&document);
        let outlinks = extract_links(&document, &base_url, url)?;

        Ok(ParsedPage { title, outlinks })
    }
}

/// Extracts the page title, trimmed, or an empty string
fn extract_title(document: &Html) -> String {
    let Ok(title_selector) = Selector::parse("title") else {
        return String::new();
    };

    document
        .select(&title_selector)
        .next()
        .map(|element| element.text().collect::<String>().trim().to_string())
        .unwrap_or_default()
}

/// Extracts all followable links from `<a href>` tags
fn extract_links(document: &Html, base_url: &Url, url: &str) -> Result<Vec<String>, ParseError> {
    let a_selector = Selector::parse("a[href]").map_err(|e| ParseError::Html {
        url: url.to_string(),
        message: format!("invalid selector: {}", e),
    })?;

    let mut links = Vec::new();
    for element in document.select(&a_selector) {
        if let Some(href) = element.value().attr("href") {
            if let Some(absolute_url) = resolve_link(href, base_url) {
                links.push(absolute_url);
            }
        }
    }

    Ok(links)
}

/// Resolves a link href to an absolute URL and validates it
///
/// Returns None if the link should be excluded:
/// - javascript:, mailto:, tel: schemes
/// - data: URIs
/// - Fragment-only hrefs (same page anchors)
/// - Invalid URLs
/// - Non-HTTP(S) URLs after resolution
fn resolve_link(href: &str, base_url: &Url) -> Option<String> {
    let href = href.trim();

    if href.is_empty() {
        return None;
    }

    if href.starts_with("javascript:")
        || href.starts_with("mailto:")
        || href.starts_with("tel:")
        || href.starts_with("data:")
    {
        return None;
    }

    if href.starts_with('#') {
        return None;
    }

    match base_url.join(href) {
        Ok(absolute_url) => {
            if absolute_url.scheme() == "http" || absolute_url.scheme() == "https" {
                Some(absolute_url.to_string())
            } else {
                None
            }
        }
        Err(_) => None,
    }
}
