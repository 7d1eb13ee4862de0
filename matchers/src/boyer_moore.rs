use crate::{MatchResult, Matcher};

pub struct BoyerMoore;

impl Matcher for BoyerMoore {
    type Config = ();

    fn search_bytes(_config: Self::Config, text: &[u8], pattern: &[u8]) -> MatchResult {
        bm_find(text, pattern)
    }
}

/// Build the bad-character shift table for Boyer-Moore.
///
/// Each byte in the pattern maps to `max(1, m - 1 - i)` where `i` is its
/// rightmost index; later occurrences overwrite earlier ones on purpose.
/// Bytes absent from the pattern keep the full-length shift `m`.
pub fn build_bad_char_table(pattern: &[u8]) -> [usize; 256] {
    let m = pattern.len();
    let mut table = [m; 256];
    for (i, &b) in pattern.iter().enumerate() {
        table[b as usize] = (m - i - 1).max(1);
    }
    table
}

/// Find the first occurrence of `pattern` in `text` using Boyer-Moore with
/// the bad-character rule only.
///
/// Each window is compared right-to-left; on a mismatch the window advances
/// by the mismatching text byte's shift (at least 1, so the scan always
/// makes progress). Without the good-suffix rule the worst case is O(n·m);
/// that trade-off is intentional.
pub fn bm_find(text: &[u8], pattern: &[u8]) -> MatchResult {
    let n = text.len();
    let m = pattern.len();

    if m == 0 {
        return MatchResult::Found(0);
    }
    if m > n {
        return MatchResult::NotFound;
    }

    log::debug!("bm_find: n={} m={}", n, m);

    let bad_char = build_bad_char_table(pattern);

    let mut i = 0usize; // index in text where the current pattern alignment starts

    while i <= n - m {
        let mut j = (m - 1) as isize;

        while j >= 0 && pattern[j as usize] == text[i + j as usize] {
            j -= 1;
        }

        if j < 0 {
            // full match
            return MatchResult::Found(i);
        }

        let bad_byte = text[i + j as usize];
        i += bad_char[bad_byte as usize];
    }

    MatchResult::NotFound
}
