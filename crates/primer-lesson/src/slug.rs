//! Anchor-to-slug resolution.

/// Slug used when an anchor contains no ASCII alphanumerics.
const FALLBACK_SLUG: &str = "section";

/// Convert an anchor title into a URL-safe fragment identifier.
///
/// ASCII alphanumerics are kept (lowercased), runs of whitespace, `-` and `_`
/// collapse into a single dash, everything else is dropped. The result never
/// starts or ends with a dash.
///
/// # Examples
///
/// ```
/// use primer_lesson::slugify;
///
/// assert_eq!(slugify("Lists - Get, Set, and Delete"), "lists-get-set-and-delete");
/// assert_eq!(slugify("  Maps  "), "maps");
/// ```
#[must_use]
pub fn slugify(anchor: &str) -> String {
    let mut result = String::with_capacity(anchor.len());
    let mut last_was_dash = true; // Prevents leading dash

    for c in anchor.trim().chars() {
        if c.is_ascii_alphanumeric() {
            result.push(c.to_ascii_lowercase());
            last_was_dash = false;
        } else if !last_was_dash && (c.is_whitespace() || c == '-' || c == '_') {
            result.push('-');
            last_was_dash = true;
        }
    }

    if result.ends_with('-') {
        result.pop();
    }

    if result.is_empty() {
        FALLBACK_SLUG.to_owned()
    } else {
        result
    }
}
