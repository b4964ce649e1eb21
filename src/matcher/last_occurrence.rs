// Bad-character-heuristic exact substring search. Compares right-to-left
// at each alignment and shifts by the last known position of the
// mismatching text byte within the pattern. Sub-linear on average,
// O(M*N) worst case. Byte-exact matching, same as the prefix scanner.

const ALPHABET_SIZE: usize = 256;

/// Returns true when `pattern` occurs contiguously and verbatim in `text`.
///
/// An empty pattern is trivially contained; a pattern longer than the
/// text can never match.
pub fn contains_exact(pattern: &str, text: &str) -> bool {
    let pattern = pattern.as_bytes();
    let text = text.as_bytes();
    let m = pattern.len();
    let n = text.len();

    if m == 0 {
        return true;
    }
    // Guard keeps the n - m alignment bound from underflowing.
    if m > n {
        return false;
    }

    let last_occ = build_last_occurrence_table(pattern);

    let mut s = 0;
    while s <= n - m {
        // j is one past the next byte to compare, counting down from m.
        let mut j = m;
        while j > 0 && pattern[j - 1] == text[s + j - 1] {
            j -= 1;
        }
        if j == 0 {
            return true;
        }

        let mismatch = j - 1;
        let last = last_occ[text[s + mismatch] as usize];
        // max(1, ..) guarantees forward progress even when the last
        // occurrence lies at or right of the mismatch position.
        let shift = (mismatch as isize - last).max(1);
        s += shift as usize;
    }
    false
}

/// Right-most index of each byte within the pattern, -1 when absent.
fn build_last_occurrence_table(pattern: &[u8]) -> [isize; ALPHABET_SIZE] {
    let mut table = [-1isize; ALPHABET_SIZE];
    for (i, &byte) in pattern.iter().enumerate() {
        table[byte as usize] = i as isize;
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_occurrence_table() {
        let table = build_last_occurrence_table(b"abcab");
        assert_eq!(table[b'a' as usize], 3);
        assert_eq!(table[b'b' as usize], 4);
        assert_eq!(table[b'c' as usize], 2);
        assert_eq!(table[b'z' as usize], -1);
    }

    #[test]
    fn test_basic_containment() {
        assert!(contains_exact("cat", "the cat sat"));
        assert!(contains_exact("the cat", "the cat sat"));
        assert!(contains_exact("sat", "the cat sat"));
        assert!(!contains_exact("dog", "the cat sat"));
    }

    #[test]
    fn test_empty_pattern_trivially_contained() {
        assert!(contains_exact("", "anything"));
        assert!(contains_exact("", ""));
    }

    #[test]
    fn test_pattern_longer_than_text() {
        assert!(!contains_exact("longer than text", "short"));
        assert!(!contains_exact("a", ""));
    }

    #[test]
    fn test_self_containment() {
        assert!(contains_exact("the whole string", "the whole string"));
    }

    #[test]
    fn test_shift_past_absent_byte() {
        // Mismatching bytes absent from the pattern force full-length shifts.
        assert!(contains_exact("needle", "xxxxxx needle xxxxxx"));
        assert!(!contains_exact("needle", "xxxxxxxxxxxxxxxxxxxx"));
    }

    #[test]
    fn test_forward_progress_on_repeated_bytes() {
        // Worst-case repetitive input must still terminate and answer.
        assert!(contains_exact("aaaa", "aaaaaaaaaa"));
        assert!(!contains_exact("aaab", "aaaaaaaaaa"));
    }

    #[test]
    fn test_match_at_text_boundaries() {
        assert!(contains_exact("head", "head of the text"));
        assert!(contains_exact("tail", "text ending in tail"));
    }

    #[test]
    fn test_unicode_bytes_match_exactly() {
        assert!(contains_exact("世界", "hello 世界 goodbye"));
        assert!(!contains_exact("über", "uber without umlaut"));
    }
}
