use scraper::{Html, Selector};

const SKIPPED_PARENTS: [&str; 3] = ["script", "style", "noscript"];

/// Plain text of the document body, one text node per line.
///
/// Returns `None` when the document has no body or the body holds no visible
/// text.
pub fn extract_body_text(html: &str) -> Option<String> {
    let document = Html::parse_document(html);
    let selector = Selector::parse("body").ok()?;
    let body = document.select(&selector).next()?;

    let mut text = String::new();
    for node in body.descendants() {
        let Some(fragment) = node.value().as_text() else {
            continue;
        };
        let skipped = node
            .parent()
            .and_then(|parent| parent.value().as_element().map(|el| el.name()))
            .is_some_and(|name| SKIPPED_PARENTS.contains(&name));
        if skipped {
            continue;
        }
        text.push_str(fragment);
        text.push('\n');
    }

    if text.trim().is_empty() {
        tracing::warn!("Could not extract text content from HTML body.");
        None
    } else {
        Some(text)
    }
}
