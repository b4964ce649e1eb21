// Segments suspect text into candidate sentences. Boundaries are runs of
// sentence terminators or newlines; segments borrow from the source text.

/// Split text into trimmed, non-empty sentences on runs of `.` or `\n`.
///
/// Output order matches input order. Consecutive separators produce no
/// empty segments.
pub fn split_sentences(text: &str) -> Vec<&str> {
    text.split(['.', '\n'])
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .collect()
}
