//! Anchor-tag link extraction

use regex::Regex;
use std::collections::BTreeSet;
use std::sync::OnceLock;

static ANCHOR_HREF: OnceLock<Regex> = OnceLock::new();

fn anchor_href() -> &'static Regex {
    ANCHOR_HREF.get_or_init(|| {
        Regex::new(r#"<a\s+(?:[^>]*?)href="([^"]*)""#).expect("anchor pattern is valid")
    })
}

/// Collect the `href` targets of every `<a ... href="...">` tag in `html`.
pub fn extract_links(html: &str) -> BTreeSet<String> {
    anchor_href()
        .captures_iter(html)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_hrefs() {
        let html = r#"
            <html><body>
              <a href="2.html">Two</a>
              <a class="nav" href="3.html">Three</a>
              <a href="2.html">Again</a>
              <link href="style.css">
              <a name="anchor">No target</a>
            </body></html>
        "#;

        let links: Vec<String> = extract_links(html).into_iter().collect();
        assert_eq!(links, vec!["2.html", "3.html"]);
    }

    #[test]
    fn test_no_links() {
        assert!(extract_links("<p>plain text</p>").is_empty());
    }
}
