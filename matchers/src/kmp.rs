use crate::{MatchResult, Matcher};

pub struct Kmp;

impl Matcher for Kmp {
    type Config = ();

    fn search_bytes(_config: Self::Config, text: &[u8], pattern: &[u8]) -> MatchResult {
        kmp_find(text, pattern)
    }
}

/// Build the "longest proper prefix which is also suffix" (LPS) table.
///
/// `lps[i]` is the length of the longest proper prefix of `pattern[0..=i]`
/// that is also a suffix of it; `lps[0] == 0` and `lps[i] <= i` always hold.
pub fn build_prefix_table(pattern: &[u8]) -> Vec<usize> {
    let m = pattern.len();
    let mut lps = vec![0; m];

    let mut len = 0;
    let mut i = 1;

    while i < m {
        if pattern[i] == pattern[len] {
            len += 1;
            lps[i] = len;
            i += 1;
        } else if len != 0 {
            len = lps[len - 1];
        } else {
            lps[i] = 0;
            i += 1;
        }
    }

    lps
}

/// Find the first occurrence of `pattern` in `text` with Knuth-Morris-Pratt.
///
/// The prefix table lets the scan fall back without re-comparing matched
/// symbols, so this runs in O(n + m) with O(m) extra space. A pattern longer
/// than the text is scanned like any other (the match length can never reach
/// `m`, so the scan ends in `NotFound` without an up-front length check).
pub fn kmp_find(text: &[u8], pattern: &[u8]) -> MatchResult {
    let n = text.len();
    let m = pattern.len();

    if m == 0 {
        return MatchResult::Found(0); // convention: empty pattern matches at 0
    }

    log::debug!("kmp_find: n={} m={}", n, m);

    let lps = build_prefix_table(pattern);

    let mut j = 0;

    for i in 0..n {
        while j > 0 && text[i] != pattern[j] {
            j = lps[j - 1];
        }

        if text[i] == pattern[j] {
            j += 1;
        }

        if j == m {
            // full match ending at i
            return MatchResult::Found(i + 1 - j);
        }
    }

    MatchResult::NotFound
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kmp_basic() {
        let hay = b"ababcabcabababd";
        let pat = b"ababd";
        assert_eq!(kmp_find(hay, pat), MatchResult::Found(10));
    }

    #[test]
    fn test_kmp_not_found() {
        let hay = b"hello world";
        let pat = b"rust";
        assert_eq!(kmp_find(hay, pat), MatchResult::NotFound);
    }

    #[test]
    fn test_kmp_empty_pattern() {
        let hay = b"abc";
        let pat: &[u8] = b"";
        assert_eq!(kmp_find(hay, pat), MatchResult::Found(0));
        assert_eq!(kmp_find(b"", pat), MatchResult::Found(0));
    }

    #[test]
    fn test_kmp_pattern_longer_than_text() {
        // No early rejection: the scan itself must come up empty.
        let hay = b"ab";
        let pat = b"abc";
        assert_eq!(kmp_find(hay, pat), MatchResult::NotFound);
    }

    #[test]
    fn test_kmp_leftmost_match() {
        let hay = b"aaaa";
        let pat = b"aa";
        assert_eq!(kmp_find(hay, pat), MatchResult::Found(0));
    }

    #[test]
    fn test_kmp_repeated_structure() {
        // Exercises the fallback path of the prefix table.
        let hay = b"aaaaaaaaab";
        let pat = b"aaab";
        assert_eq!(kmp_find(hay, pat), MatchResult::Found(6));
    }

    #[test]
    fn test_prefix_table_values() {
        assert_eq!(build_prefix_table(b"aabaaab"), vec![0, 1, 0, 1, 2, 2, 3]);
        assert_eq!(build_prefix_table(b""), Vec::<usize>::new());
        assert_eq!(build_prefix_table(b"a"), vec![0]);
        assert_eq!(build_prefix_table(b"abcd"), vec![0, 0, 0, 0]);
    }

    #[test]
    fn test_prefix_table_invariants() {
        let pat = b"abacabadabacaba";
        let lps = build_prefix_table(pat);
        assert_eq!(lps.len(), pat.len());
        assert_eq!(lps[0], 0);
        for (i, &v) in lps.iter().enumerate() {
            assert!(v <= i);
        }
    }

    #[test]
    fn test_kmp_utf8() {
        let hay = "🌍hello🌍hello".as_bytes();
        let pat = "🌍hello".as_bytes();

        assert_eq!("🌍hello".len(), 9);
        assert_eq!(kmp_find(hay, pat), MatchResult::Found(0));
    }
}
