// Prefix-function (failure-table) exact substring search. Linear in
// pattern plus text length. Matching is byte-exact, which is sufficient
// for UTF-8: a full-pattern byte match is always a real substring
// occurrence because the encoding is self-synchronizing.

/// Returns true when `pattern` occurs contiguously and verbatim in `text`.
///
/// An empty pattern is trivially contained.
pub fn contains_exact(pattern: &str, text: &str) -> bool {
    let pattern = pattern.as_bytes();
    let m = pattern.len();
    if m == 0 {
        return true;
    }

    let lps = build_failure_table(pattern);

    let mut j = 0;
    for &byte in text.as_bytes() {
        while j != 0 && byte != pattern[j] {
            j = lps[j - 1];
        }
        if byte == pattern[j] {
            j += 1;
            if j == m {
                return true;
            }
        }
    }
    false
}

/// `lps[i]` is the length of the longest proper prefix of `pattern[..=i]`
/// that is also a suffix of it.
fn build_failure_table(pattern: &[u8]) -> Vec<usize> {
    let mut lps = vec![0usize; pattern.len()];
    let mut length = 0;

    for i in 1..pattern.len() {
        while length != 0 && pattern[i] != pattern[length] {
            length = lps[length - 1];
        }
        if pattern[i] == pattern[length] {
            length += 1;
            lps[i] = length;
        }
    }
    lps
}
