//! URI-safe slugs derived from post titles.

const SEPARATOR: char = '-';

/// Lower-cases `title` and collapses every run of characters outside
/// `[a-z0-9]` into a single `-`. Leading and trailing separators are dropped.
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_separator = false;

    for c in title.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_separator && !slug.is_empty() {
                slug.push(SEPARATOR);
            }
            pending_separator = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_separator = true;
        }
    }

    slug
}

/// Checks that `slug` is already in the form [`slugify`] produces.
pub fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty() && slugify(slug) == slug
}
