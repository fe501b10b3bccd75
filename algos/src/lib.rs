mod bm;
mod kmp;
mod rk;

pub mod compare;
pub mod hash_table;
pub mod timing;
pub mod upper_bound;

/// Byte-level matchers with a character-indexed `&str` surface.
pub trait StringSearch {
    /// Name used in timing records and reports.
    const NAME: &'static str;

    fn find_bytes(text: &[u8], pattern: &[u8]) -> Option<usize>;
    fn find_all_bytes(text: &[u8], pattern: &[u8]) -> Vec<usize>;

    /// First match as a character index into `text`.
    fn find(text: &str, pattern: &str) -> Option<usize> {
        Self::find_bytes(text.as_bytes(), pattern.as_bytes()).map(|i| char_index(text, i))
    }

    /// Every (possibly overlapping) match as character indices into `text`.
    fn find_all(text: &str, pattern: &str) -> Vec<usize> {
        if pattern.is_empty() {
            return (0..=text.chars().count()).collect();
        }
        char_offsets(text, Self::find_all_bytes(text.as_bytes(), pattern.as_bytes()))
    }
}

pub use bm::{BM, bm_find, bm_find_all};
pub use kmp::{KMP, kmp_find, kmp_find_all};
pub use rk::{RK, RollingHash, rk_find, rk_find_all, rk_find_all_with, rk_find_with};

pub use compare::{Disagreement, TimingRecord, agreed_match, compare};
pub use timing::{Measurement, measure, measure_search};

/// Integer form of a match result: the start offset, or -1 when absent.
pub const NOT_FOUND: isize = -1;

pub fn match_index(found: Option<usize>) -> isize {
    found.map_or(NOT_FOUND, |i| i as isize)
}

/// Convert a byte offset into `text` into a character offset.
///
/// Offsets returned by the matchers for a non-empty UTF-8 pattern always fall
/// on a char boundary; offsets inside a code point are counted up to the
/// preceding boundary.
pub fn char_index(text: &str, byte_offset: usize) -> usize {
    text.char_indices()
        .take_while(|&(i, _)| i < byte_offset)
        .count()
}

/// `char_index` for an ascending list of byte offsets, in one pass.
fn char_offsets(text: &str, byte_offsets: Vec<usize>) -> Vec<usize> {
    let mut boundaries = text.char_indices().map(|(i, _)| i).peekable();
    let mut chars = 0;

    byte_offsets
        .into_iter()
        .map(|offset| {
            while boundaries.next_if(|&b| b < offset).is_some() {
                chars += 1;
            }
            chars
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn match_index_sentinel() {
        assert_eq!(match_index(Some(4)), 4);
        assert_eq!(match_index(None), -1);
    }

    #[test]
    fn char_index_counts_code_points() {
        let text = "структури даних";
        let byte = text.find("даних").unwrap();
        assert_eq!(byte, 19);
        assert_eq!(char_index(text, byte), 10);
        assert_eq!(char_index("abc", 2), 2);
        assert_eq!(char_index("", 0), 0);
    }

    #[test]
    fn char_offsets_single_pass() {
        let text = "αβ-αβ-αβ";
        let bytes: Vec<usize> = text.match_indices("αβ").map(|(i, _)| i).collect();
        assert_eq!(bytes, vec![0, 5, 10]);
        assert_eq!(char_offsets(text, bytes), vec![0, 3, 6]);
        assert!(char_offsets(text, Vec::new()).is_empty());
    }

    #[test]
    fn str_surface_reports_char_indices() {
        let text = "алгоритми та структури даних";
        let pattern = "структури даних";
        assert_eq!(BM::find(text, pattern), Some(13));
        assert_eq!(KMP::find(text, pattern), Some(13));
        assert_eq!(RK::find(text, pattern), Some(13));
        assert_eq!(BM::find_bytes(text.as_bytes(), pattern.as_bytes()), Some(24));
    }

    #[test]
    fn find_all_reports_char_indices() {
        let text = "🌍hello🌍hello";
        assert_eq!(BM::find_all(text, "🌍hello"), vec![0, 6]);
        assert_eq!(KMP::find_all(text, "🌍hello"), vec![0, 6]);
        assert_eq!(RK::find_all(text, "🌍hello"), vec![0, 6]);
        assert_eq!(KMP::find_all("αβ", ""), vec![0, 1, 2]);
    }
}
