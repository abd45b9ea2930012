//! Case folding applied where text enters the index.
//!
//! Only ASCII letters are folded; every other character passes through
//! unchanged, so `'É'` and `'é'` remain distinct.

/// Fold `text` to lowercase ASCII and split it into characters
pub fn fold_chars(text: &str) -> Vec<char> {
    text.chars().map(|c| c.to_ascii_lowercase()).collect()
}
