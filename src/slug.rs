/// Normalizes a human-readable name into an identifier segment.
///
/// The input is lower-cased, every character outside `[a-z0-9-]` becomes a
/// hyphen, runs of hyphens collapse into one and leading or trailing hyphens
/// are stripped. The result matches `^[a-z0-9]+(-[a-z0-9]+)*$` or is empty.
///
/// An empty result means the name is unusable; callers skip the entry.
///
/// # Examples
///
/// ```
/// use iconpack::slugify;
///
/// assert_eq!(slugify("ML Studio +"), "ml-studio");
/// assert_eq!(slugify("A + B"), "a-b");
/// assert_eq!(slugify("+++"), "");
/// ```
#[must_use]
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_dash = false;

    for ch in name.chars().flat_map(char::to_lowercase) {
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            slug.push(ch);
            pending_dash = false;
        } else {
            // '-' itself and every replaced character fold into one separator
            pending_dash = true;
        }
    }

    slug
}

/// Joins a category path and a segment with a hyphen, dropping empty parts.
#[must_use]
pub fn join_segment(category: &str, segment: &str) -> String {
    match (category.is_empty(), segment.is_empty()) {
        (true, _) => segment.to_string(),
        (false, true) => category.to_string(),
        (false, false) => format!("{category}-{segment}"),
    }
}
