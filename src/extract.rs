//! HTML-to-text reduction: strip script/style markup, keep visible text,
//! normalize whitespace.

use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{Html, Selector};

use crate::error::{PagesenseError, Result};

/// Precompiled regex for removing script/style blocks wholesale
static SCRIPT_STYLE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?is)<(script|style)[^>]*>.*?</(script|style)\s*>")
        .expect("Invalid script/style regex")
});

/// Precompiled regex for stripping HTML tags
static HTML_TAG_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"<[^>]+>").expect("Invalid HTML tag regex")
});

/// Precompiled regex for collapsing whitespace
static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\s+").expect("Invalid whitespace regex")
});

/// Reduce a full HTML document to its visible text.
///
/// Script and style contents are dropped, text nodes are joined with single
/// spaces, and runs of whitespace collapse to one space. Returns an empty
/// string for pages with no visible text.
pub fn reduce_html_to_text(html: &str) -> String {
    let cleaned = SCRIPT_STYLE_RE.replace_all(html, " ");

    let document = Html::parse_document(&cleaned);
    if let Ok(body_selector) = Selector::parse("body") {
        if let Some(body) = document.select(&body_selector).next() {
            let text: String = body.text().collect::<Vec<_>>().join(" ");
            return normalize_whitespace(&text);
        }
    }

    // No body element (fragments, malformed markup): strip tags directly
    normalize_whitespace(&HTML_TAG_RE.replace_all(&cleaned, " "))
}

/// Collect the text of every element matching a CSS selector.
///
/// Each element's text nodes are joined with single spaces and
/// whitespace-normalized. Elements that match but contain no text come back
/// as empty strings; callers decide whether to skip them.
pub fn select_texts(html: &str, selector_str: &str) -> Result<Vec<String>> {
    let document = Html::parse_document(html);
    let selector = Selector::parse(selector_str)
        .map_err(|e| PagesenseError::SelectorError(format!("{:?}", e)))?;

    Ok(document
        .select(&selector)
        .map(|el| normalize_whitespace(&el.text().collect::<Vec<_>>().join(" ")))
        .collect())
}

/// Collapse whitespace runs into single spaces and trim
pub fn normalize_whitespace(text: &str) -> String {
    WHITESPACE_RE.replace_all(text, " ").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reduce_strips_script_and_style() {
        let html = r#"<html><head><style>body { color: red; }</style></head>
            <body><script>var hidden = "secret";</script><p>Visible text.</p></body></html>"#;
        let text = reduce_html_to_text(html);
        assert_eq!(text, "Visible text.");
        assert!(!text.contains("secret"));
        assert!(!text.contains("color"));
    }

    #[test]
    fn test_reduce_normalizes_whitespace() {
        let html = "<body><p>Hello\n\n   World</p>\t<p>Again</p></body>";
        assert_eq!(reduce_html_to_text(html), "Hello World Again");
    }

    #[test]
    fn test_reduce_empty_page() {
        assert_eq!(reduce_html_to_text("<body></body>"), "");
        assert_eq!(reduce_html_to_text(""), "");
    }

    #[test]
    fn test_select_texts_matches_elements() {
        let html = "<body><p>First</p><div>skip</div><p>Second  para</p><p></p></body>";
        let texts = select_texts(html, "p").unwrap();
        assert_eq!(texts, vec!["First", "Second para", ""]);
    }

    #[test]
    fn test_select_texts_no_matches() {
        let texts = select_texts("<body><p>Hi</p></body>", "article").unwrap();
        assert!(texts.is_empty());
    }

    #[test]
    fn test_select_texts_invalid_selector() {
        let result = select_texts("<body></body>", "p[");
        assert!(matches!(result, Err(PagesenseError::SelectorError(_))));
    }

    #[test]
    fn test_normalize_whitespace() {
        assert_eq!(normalize_whitespace("Hello   World\n\n\nTest"), "Hello World Test");
        assert_eq!(normalize_whitespace("  padded  "), "padded");
    }
}
