//! Title-to-slug transform for post primary keys.

#[cfg(test)]
#[path = "slug_test.rs"]
mod slug_test;

/// Derive a URL-safe slug from a title.
///
/// Trims, lowercases, collapses each run of characters that are neither
/// ASCII alphanumeric nor whitespace into a single `-`, then maps every
/// remaining whitespace character to `-`.
pub fn slugify(value: &str) -> String {
    let trimmed = value.trim().to_lowercase();
    let mut out = String::with_capacity(trimmed.len());
    let mut in_symbol_run = false;
    for ch in trimmed.chars() {
        if ch.is_ascii_alphanumeric() {
            in_symbol_run = false;
            out.push(ch);
        } else if ch.is_whitespace() {
            in_symbol_run = false;
            out.push('-');
        } else if !in_symbol_run {
            in_symbol_run = true;
            out.push('-');
        }
    }
    out
}
