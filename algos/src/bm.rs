use crate::StringSearch;

pub struct BM;

impl StringSearch for BM {
    const NAME: &'static str = "Boyer-Moore";

    fn find_bytes(text: &[u8], pattern: &[u8]) -> Option<usize> {
        bm_find(text, pattern)
    }

    fn find_all_bytes(text: &[u8], pattern: &[u8]) -> Vec<usize> {
        bm_find_all(text, pattern)
    }
}

/// Build the last-occurrence table for Boyer–Moore: the rightmost position
/// of every byte in `pattern`, -1 for bytes that do not occur.
fn build_last_occurrence(pattern: &[u8]) -> [isize; 256] {
    let mut table = [-1isize; 256];
    for (i, &b) in pattern.iter().enumerate() {
        table[b as usize] = i as isize;
    }
    table
}

/// Compare `pattern` right-to-left against the alignment starting at `i`.
/// Returns the position of the rightmost mismatch, or None on a full match.
#[inline]
fn mismatch_from_right(text: &[u8], pattern: &[u8], i: usize) -> Option<usize> {
    let mut j = pattern.len();
    while j > 0 {
        if pattern[j - 1] != text[i + j - 1] {
            return Some(j - 1);
        }
        j -= 1;
    }
    None
}

/// Shift after a mismatch at pattern position `j` against `bad_byte`.
#[inline]
fn bad_char_shift(last_occurrence: &[isize; 256], j: usize, bad_byte: u8) -> usize {
    let shift = j as isize - last_occurrence[bad_byte as usize];
    if shift > 0 { shift as usize } else { 1 }
}

/// Find the first occurrence of `pattern` in `text` using Boyer–Moore.
/// Returns Some(start_index) if found, None otherwise.
///
/// Operates on raw bytes; UTF-8 is fine but not required.
pub fn bm_find(text: &[u8], pattern: &[u8]) -> Option<usize> {
    let n = text.len();
    let m = pattern.len();

    if m == 0 {
        return Some(0);
    }
    if m > n {
        return None;
    }

    let last = build_last_occurrence(pattern);

    let mut i = 0usize; // index in text where the current pattern alignment starts

    while i <= n - m {
        match mismatch_from_right(text, pattern, i) {
            None => return Some(i),
            Some(j) => i += bad_char_shift(&last, j, text[i + j]),
        }
    }

    None
}

/// Find all (possibly overlapping) occurrences of `pattern` in `text`
/// using Boyer–Moore. Returns a vector of starting indices.
pub fn bm_find_all(text: &[u8], pattern: &[u8]) -> Vec<usize> {
    let n = text.len();
    let m = pattern.len();

    if m == 0 {
        // Convention: match at every index (including at the end)
        return (0..=n).collect();
    }
    if m > n {
        return Vec::new();
    }

    let last = build_last_occurrence(pattern);

    let mut res = Vec::new();
    let mut i = 0usize;

    while i <= n - m {
        match mismatch_from_right(text, pattern, i) {
            None => {
                res.push(i);
                // step by one so overlapping matches are not skipped
                i += 1;
            }
            Some(j) => i += bad_char_shift(&last, j, text[i + j]),
        }
    }

    res
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bm_basic() {
        let hay = b"ababcabcabababd";
        let pat = b"ababd";
        assert_eq!(bm_find(hay, pat), Some(10));
    }

    #[test]
    fn test_bm_not_found() {
        let hay = b"hello world";
        let pat = b"rust";
        assert_eq!(bm_find(hay, pat), None);
    }

    #[test]
    fn test_bm_empty_pattern() {
        let hay = b"abc";
        let pat: &[u8] = b"";
        assert_eq!(bm_find(hay, pat), Some(0));
        assert_eq!(bm_find_all(hay, pat), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_bm_pattern_longer_than_text() {
        assert_eq!(bm_find(b"", b"a"), None);
        assert_eq!(bm_find(b"ab", b"abc"), None);
        assert!(bm_find_all(b"ab", b"abc").is_empty());
    }

    #[test]
    fn test_bm_last_occurrence_table() {
        let table = build_last_occurrence(b"abracadabra");
        assert_eq!(table[b'a' as usize], 10);
        assert_eq!(table[b'b' as usize], 8);
        assert_eq!(table[b'c' as usize], 4);
        assert_eq!(table[b'z' as usize], -1);
    }

    #[test]
    fn test_bm_shift_never_below_one() {
        let table = build_last_occurrence(b"aab");
        // 'b' last occurs at 2, mismatch at 0 would give a negative shift
        assert_eq!(bad_char_shift(&table, 0, b'b'), 1);
        assert_eq!(bad_char_shift(&table, 2, b'z'), 3);
    }

    #[test]
    fn test_bm_match_at_end() {
        assert_eq!(bm_find(b"abracadabra", b"dabra"), Some(6));
    }

    #[test]
    fn test_bm_find_all_overlapping() {
        let hay = b"aaaa";
        let pat = b"aa";
        assert_eq!(bm_find_all(hay, pat), vec![0, 1, 2]);
    }

    #[test]
    fn test_bm_find_all_cut() {
        let hay = b"aabaa";
        let pat = b"aa";
        assert_eq!(bm_find_all(hay, pat), vec![0, 3]);
    }

    #[test]
    fn test_bm_utf8() {
        let hay_s = "🌍hello🌍hello";
        let pat_s = "🌍hello";
        let hay = hay_s.as_bytes();
        let pat = pat_s.as_bytes();

        assert_eq!(pat_s.len(), 9);
        assert_eq!(hay_s.len(), 18);

        assert_eq!(bm_find(hay, pat), Some(0));
        assert_eq!(bm_find_all(hay, pat), vec![0, pat_s.len()]);
    }
}
