use crate::StringSearch;

pub struct RK;

impl StringSearch for RK {
    const NAME: &'static str = "Rabin-Karp";

    fn find_bytes(text: &[u8], pattern: &[u8]) -> Option<usize> {
        rk_find(text, pattern)
    }

    fn find_all_bytes(text: &[u8], pattern: &[u8]) -> Vec<usize> {
        rk_find_all(text, pattern)
    }
}

/// Polynomial hash `h(s) = sum(s[i] * base^(len-1-i)) mod modulus`.
///
/// The modulus is capped at 2^31 and the base is kept reduced below it, so
/// every intermediate product fits in a `u64` without wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RollingHash {
    base: u64,
    modulus: u64,
}

impl RollingHash {
    /// One value per byte, modulus is the prime 10^9 + 7.
    pub const DEFAULT: RollingHash = RollingHash {
        base: 256,
        modulus: 1_000_000_007,
    };

    pub const MAX_MODULUS: u64 = 1 << 31;

    /// Returns None when `modulus` is zero or above `MAX_MODULUS`.
    pub fn new(base: u64, modulus: u64) -> Option<Self> {
        if modulus == 0 || modulus > Self::MAX_MODULUS {
            return None;
        }
        Some(Self {
            base: base % modulus,
            modulus,
        })
    }

    pub fn base(&self) -> u64 {
        self.base
    }

    pub fn modulus(&self) -> u64 {
        self.modulus
    }

    pub fn hash(&self, bytes: &[u8]) -> u64 {
        bytes.iter().fold(0, |h, &b| self.push(h, b))
    }

    #[inline]
    fn push(&self, h: u64, b: u8) -> u64 {
        (h * self.base + b as u64) % self.modulus
    }

    /// base^exp mod modulus
    fn pow(&self, exp: usize) -> u64 {
        let mut acc = 1 % self.modulus;
        for _ in 0..exp {
            acc = (acc * self.base) % self.modulus;
        }
        acc
    }

    /// Slide the window one byte: drop `outgoing` (weighted by `high`,
    /// i.e. base^(len-1)) and append `incoming`.
    #[inline]
    fn roll(&self, h: u64, outgoing: u8, incoming: u8, high: u64) -> u64 {
        let out = (outgoing as u64 * high) % self.modulus;
        let h = (h + self.modulus - out) % self.modulus;
        self.push(h, incoming)
    }
}

impl Default for RollingHash {
    fn default() -> Self {
        Self::DEFAULT
    }
}

pub fn rk_find(text: &[u8], pattern: &[u8]) -> Option<usize> {
    rk_find_with(text, pattern, RollingHash::DEFAULT)
}

pub fn rk_find_all(text: &[u8], pattern: &[u8]) -> Vec<usize> {
    rk_find_all_with(text, pattern, RollingHash::DEFAULT)
}

/// Find the first occurrence of `pattern` in `text` using Rabin–Karp with
/// the given hash. Every hash hit is verified byte-by-byte, so a weak hash
/// only costs time, never correctness.
pub fn rk_find_with(text: &[u8], pattern: &[u8], hasher: RollingHash) -> Option<usize> {
    let n = text.len();
    let m = pattern.len();

    if m == 0 {
        return Some(0);
    }
    if m > n {
        return None;
    }

    let high = hasher.pow(m - 1);
    let target = hasher.hash(pattern);
    let mut window = hasher.hash(&text[..m]);

    let mut i = 0usize;
    loop {
        if window == target && &text[i..i + m] == pattern {
            return Some(i);
        }
        if i + m == n {
            return None;
        }
        window = hasher.roll(window, text[i], text[i + m], high);
        i += 1;
    }
}

pub fn rk_find_all_with(text: &[u8], pattern: &[u8], hasher: RollingHash) -> Vec<usize> {
    let n = text.len();
    let m = pattern.len();

    if m == 0 {
        return (0..=n).collect();
    }
    if m > n {
        return Vec::new();
    }

    let high = hasher.pow(m - 1);
    let target = hasher.hash(pattern);
    let mut window = hasher.hash(&text[..m]);

    let mut result = Vec::new();
    let mut i = 0usize;
    loop {
        if window == target && &text[i..i + m] == pattern {
            result.push(i);
        }
        if i + m == n {
            return result;
        }
        window = hasher.roll(window, text[i], text[i + m], high);
        i += 1;
    }
}
