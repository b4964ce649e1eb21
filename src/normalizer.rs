// Standalone normalization applied to both documents before matching.
// Case-folds and strips everything that is neither a word character nor
// whitespace, so punctuation differences never break an exact match.

/// Normalize text with a new allocation.
///
/// Output contains only lower-case alphanumerics, underscores, and
/// whitespace. Whitespace runs are preserved as-is. Idempotent.
pub fn normalize(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    normalize_into(text, &mut result);
    result
}

/// Normalize text into a supplied buffer to avoid allocation.
///
/// Enables buffer reuse when normalizing many sentences in one pass.
pub fn normalize_into(text: &str, buffer: &mut String) {
    buffer.clear();
    buffer.reserve(text.len());

    for ch in text.chars() {
        // Case-fold before filtering; a fold may expand to several chars.
        for folded in ch.to_lowercase() {
            if folded.is_alphanumeric() || folded == '_' || folded.is_whitespace() {
                buffer.push(folded);
            }
        }
    }
}
