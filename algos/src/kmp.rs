use crate::StringSearch;

pub struct KMP;

impl StringSearch for KMP {
    const NAME: &'static str = "KMP";

    fn find_bytes(text: &[u8], pattern: &[u8]) -> Option<usize> {
        kmp_find(text, pattern)
    }

    fn find_all_bytes(text: &[u8], pattern: &[u8]) -> Vec<usize> {
        kmp_find_all(text, pattern)
    }
}

/// `fail[q]` is the length of the longest proper prefix of `pattern[..=q]`
/// that is also its suffix.
fn failure_function(pattern: &[u8]) -> Vec<usize> {
    let mut fail = vec![0; pattern.len()];
    let mut k = 0;

    for q in 1..pattern.len() {
        while k > 0 && pattern[q] != pattern[k] {
            k = fail[k - 1];
        }
        if pattern[q] == pattern[k] {
            k += 1;
        }
        fail[q] = k;
    }

    fail
}

/// Lazily yields the start of every (possibly overlapping) match.
/// The text cursor only moves forward.
struct Matches<'a> {
    text: &'a [u8],
    pattern: &'a [u8],
    fail: Vec<usize>,
    pos: usize,     // next text byte to consume
    matched: usize, // pattern bytes matched so far
}

impl<'a> Matches<'a> {
    /// `pattern` must be non-empty.
    fn new(text: &'a [u8], pattern: &'a [u8]) -> Self {
        debug_assert!(!pattern.is_empty());
        // a pattern longer than the text can never complete; skip the scan
        let pos = if pattern.len() > text.len() { text.len() } else { 0 };
        Self {
            text,
            pattern,
            fail: failure_function(pattern),
            pos,
            matched: 0,
        }
    }
}

impl Iterator for Matches<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let m = self.pattern.len();

        while let Some(&b) = self.text.get(self.pos) {
            self.pos += 1;

            while self.matched > 0 && b != self.pattern[self.matched] {
                self.matched = self.fail[self.matched - 1];
            }
            if b == self.pattern[self.matched] {
                self.matched += 1;
            }
            if self.matched == m {
                self.matched = self.fail[m - 1];
                return Some(self.pos - m);
            }
        }

        None
    }
}

pub fn kmp_find(text: &[u8], pattern: &[u8]) -> Option<usize> {
    if pattern.is_empty() {
        return Some(0);
    }
    Matches::new(text, pattern).next()
}

pub fn kmp_find_all(text: &[u8], pattern: &[u8]) -> Vec<usize> {
    if pattern.is_empty() {
        return (0..=text.len()).collect();
    }
    Matches::new(text, pattern).collect()
}
