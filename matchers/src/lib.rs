mod boyer_moore;
mod kmp;
mod rabin_karp;

/// Outcome of a single substring search: the 0-based index of the leftmost
/// occurrence of the pattern, or `NotFound`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchResult {
    Found(usize),
    NotFound,
}

impl MatchResult {
    pub fn index(self) -> Option<usize> {
        match self {
            MatchResult::Found(i) => Some(i),
            MatchResult::NotFound => None,
        }
    }
}

pub trait Matcher {
    type Config: Default;

    fn search_bytes(config: Self::Config, text: &[u8], pattern: &[u8]) -> MatchResult;
    fn search(config: Self::Config, text: &str, pattern: &str) -> MatchResult {
        let text_bytes = text.as_bytes();
        let pattern_bytes = pattern.as_bytes();
        Self::search_bytes(config, text_bytes, pattern_bytes)
    }
}

pub use boyer_moore::{BoyerMoore, bm_find, build_bad_char_table};
pub use kmp::{Kmp, build_prefix_table, kmp_find};
pub use rabin_karp::{
    ConfigError, DEFAULT_BASE, DEFAULT_PRIME, RabinKarp, RabinKarpConfig, rabin_karp_find,
    rabin_karp_find_with,
};
