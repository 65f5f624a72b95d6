//! Name normalization for modeled people.

use std::sync::LazyLock;

use regex::Regex;

static NON_LETTER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^a-zA-Z]").unwrap());

/// Normalize a raw name into `Capitalized` form.
///
/// Every character outside `[A-Za-z]` is removed (non-ASCII letters too), the
/// remainder is lower-cased, and only the first character is upper-cased.
/// Input without any ASCII letter yields an empty string.
pub fn format_name(raw: &str) -> String {
    let letters = NON_LETTER_RE.replace_all(raw, "").to_ascii_lowercase();
    let mut chars = letters.chars();
    match chars.next() {
        Some(first) => {
            let mut name = String::with_capacity(letters.len());
            name.push(first.to_ascii_uppercase());
            name.push_str(chars.as_str());
            name
        }
        None => String::new(),
    }
}
