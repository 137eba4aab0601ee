use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;

// Every maximal run of characters whose general category is neither L* nor N*
static NON_ESSENTIAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^\p{L}\p{N}]+").expect("Failed to compile essence filter regex"));

/// Drop every character that is not a Unicode letter or number.
///
/// Borrows when nothing needs to be removed.
pub fn letters_and_numbers(text: &str) -> Cow<'_, str> {
    NON_ESSENTIAL.replace_all(text, "")
}

/// Simple (non-locale) lower-casing.
///
/// A few letters lower-case into a letter plus a combining mark (`İ` becomes
/// `i` + U+0307); such marks are dropped so the result stays letters and
/// numbers only.
pub fn fold_case(text: &str) -> String {
    let lowered = text.to_lowercase();
    if let Cow::Owned(filtered) = letters_and_numbers(&lowered) {
        return filtered;
    }
    lowered
}
