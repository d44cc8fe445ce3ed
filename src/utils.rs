//! Common utility functions shared across the codebase.

/// Checks if the text contains at least one Unicode alphabetic character.
///
/// Entries without letters (numbers, symbols, blanks) are not worth sending
/// to a translation backend.
///
/// # Examples
///
/// ```
/// use chatloc::utils::contains_alphabetic;
///
/// assert!(contains_alphabetic("Pay now"));
/// assert!(contains_alphabetic("Zahlen 1"));
/// assert!(!contains_alphabetic("123"));
/// assert!(!contains_alphabetic("$100"));
/// assert!(!contains_alphabetic(""));
/// ```
pub fn contains_alphabetic(text: &str) -> bool {
    text.chars().any(|c| c.is_alphabetic())
}

/// Shorten `text` to at most `limit` characters, appending `...` when cut.
///
/// ```
/// use chatloc::utils::truncate_chars;
///
/// assert_eq!(truncate_chars("abcdef", 3), "abc...");
/// assert_eq!(truncate_chars("abc", 3), "abc");
/// ```
pub fn truncate_chars(text: &str, limit: usize) -> String {
    match text.char_indices().nth(limit) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}
