use memchr::memmem;

/// Extracts the drawable body of a vector image.
///
/// The body is everything between the first `>` and the last occurrence of
/// `closing_tag`, trimmed. This is a plain delimiter search: a closing tag
/// literal inside a comment or attribute value is not recognised as such.
///
/// Returns `None` when a delimiter is missing, the delimiters are out of
/// order, or the trimmed body is empty.
///
/// # Examples
///
/// ```
/// use iconpack::extract_body;
///
/// let svg = r#"<svg viewBox="0 0 18 18"><path d="M0 0h18v18H0z"/></svg>"#;
/// assert_eq!(extract_body(svg, "</svg>"), Some(r#"<path d="M0 0h18v18H0z"/>"#));
/// ```
#[must_use]
pub fn extract_body<'a>(content: &'a str, closing_tag: &str) -> Option<&'a str> {
    let start = memchr::memchr(b'>', content.as_bytes())? + 1;
    let end = memmem::rfind(content.as_bytes(), closing_tag.as_bytes())?;

    if end < start {
        return None;
    }

    // both offsets sit on ASCII bytes, so they are char boundaries
    let body = content[start..end].trim();
    (!body.is_empty()).then_some(body)
}

/// Builds the closing tag literal for a root element name.
#[must_use]
pub fn closing_tag(root_element: &str) -> String {
    format!("</{root_element}>")
}
