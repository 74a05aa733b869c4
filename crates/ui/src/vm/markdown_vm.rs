use std::collections::{HashMap, HashSet};

/// Render catalog markdown to sanitised HTML.
#[must_use]
pub fn markdown_to_html(input: &str) -> String {
    let mut options = pulldown_cmark::Options::empty();
    options.insert(pulldown_cmark::Options::ENABLE_STRIKETHROUGH);
    options.insert(pulldown_cmark::Options::ENABLE_TABLES);

    let parser = pulldown_cmark::Parser::new_ext(input, options);
    let mut html = String::new();
    pulldown_cmark::html::push_html(&mut html, parser);
    sanitize_html(&html)
}

/// Single-line markdown (table cells, list items, titles) without the wrapping `<p>`.
#[must_use]
pub fn inline_markdown_to_html(input: &str) -> String {
    let html = markdown_to_html(input);
    let trimmed = html.trim();
    match trimmed
        .strip_prefix("<p>")
        .and_then(|rest| rest.strip_suffix("</p>"))
    {
        Some(inner) if !inner.contains("<p>") => inner.to_string(),
        _ => trimmed.to_string(),
    }
}

#[must_use]
pub fn sanitize_html(html: &str) -> String {
    let tags: HashSet<&str> = [
        "p", "div", "span", "br", "hr", "em", "strong", "b", "i", "del", "code", "pre",
        "blockquote", "ul", "ol", "li", "a", "h1", "h2", "h3", "h4", "h5", "h6", "table", "thead",
        "tbody", "tr", "th", "td",
    ]
    .into_iter()
    .collect();

    let mut attributes: HashMap<&str, HashSet<&str>> = HashMap::new();
    attributes.insert("a", ["href"].into_iter().collect());

    ammonia::Builder::new()
        .tags(tags)
        .tag_attributes(attributes)
        .clean(html)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::{inline_markdown_to_html, markdown_to_html, sanitize_html};

    #[test]
    fn markdown_to_html_sanitizes_links() {
        let html = markdown_to_html("[Link](javascript:alert(1))");
        assert!(html.contains("Link"));
        assert!(!html.contains("javascript:"));
    }

    #[test]
    fn emphasis_and_lists_survive() {
        let html = markdown_to_html("**Psychological**: emotional factors\n\n- PHQ-9\n- GAD-7");
        assert!(html.contains("<strong>Psychological</strong>"));
        assert!(html.contains("<li>PHQ-9</li>"));
    }

    #[test]
    fn inline_markdown_drops_paragraph_wrapper() {
        assert_eq!(inline_markdown_to_html("*Tell me more*"), "<em>Tell me more</em>");
        assert!(inline_markdown_to_html("one\n\ntwo").starts_with("<p>"));
    }

    #[test]
    fn scripts_and_handlers_are_stripped() {
        let html = sanitize_html("<p onclick=\"x()\">Hi</p><script>alert(1)</script>");
        assert_eq!(html, "<p>Hi</p>");
    }
}
