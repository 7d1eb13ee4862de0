use std::{error::Error, fmt};

use crate::{MatchResult, Matcher};

pub const DEFAULT_PRIME: i64 = 101;
pub const DEFAULT_BASE: i64 = 256;

/// Rejected Rabin-Karp parameters. Both the modulus and the radix must be
/// strictly positive; anything else is caught before any hashing happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    NonPositivePrime(i64),
    NonPositiveBase(i64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NonPositivePrime(p) => {
                write!(f, "prime modulus must be positive (got {})", p)
            }
            ConfigError::NonPositiveBase(b) => {
                write!(f, "base radix must be positive (got {})", b)
            }
        }
    }
}

impl Error for ConfigError {}

/// Hashing parameters for Rabin-Karp. The default `prime` of 101 is small
/// and collides often on long texts; that stresses the verification step on
/// purpose and is not something to "fix" by enlarging the modulus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RabinKarpConfig {
    prime: i64,
    base: i64,
}

impl RabinKarpConfig {
    pub fn new(prime: i64, base: i64) -> Result<Self, ConfigError> {
        if prime <= 0 {
            return Err(ConfigError::NonPositivePrime(prime));
        }
        if base <= 0 {
            return Err(ConfigError::NonPositiveBase(base));
        }
        Ok(Self { prime, base })
    }

    pub fn prime(&self) -> i64 {
        self.prime
    }

    pub fn base(&self) -> i64 {
        self.base
    }
}

impl Default for RabinKarpConfig {
    fn default() -> Self {
        Self {
            prime: DEFAULT_PRIME,
            base: DEFAULT_BASE,
        }
    }
}

pub struct RabinKarp;

impl Matcher for RabinKarp {
    type Config = RabinKarpConfig;

    fn search_bytes(config: Self::Config, text: &[u8], pattern: &[u8]) -> MatchResult {
        rabin_karp_find_with(config, text, pattern)
    }
}

/// Find the first occurrence of `pattern` in `text` using Rabin-Karp with
/// the default modulus and radix.
pub fn rabin_karp_find(text: &[u8], pattern: &[u8]) -> MatchResult {
    rabin_karp_find_with(RabinKarpConfig::default(), text, pattern)
}

/// Find the first occurrence of `pattern` in `text` using Rabin-Karp.
///
/// A polynomial hash of each pattern-sized text window is rolled across the
/// text and compared against the pattern hash; equal hashes are always
/// confirmed by a direct byte comparison, so collisions can cost time but
/// never produce a wrong index.
pub fn rabin_karp_find_with(
    config: RabinKarpConfig,
    text: &[u8],
    pattern: &[u8],
) -> MatchResult {
    let n = text.len();
    let m = pattern.len();

    if m == 0 {
        return MatchResult::Found(0);
    }
    if m > n {
        return MatchResult::NotFound;
    }

    let prime = config.prime;
    let base = config.base;

    log::debug!(
        "rabin_karp_find: n={} m={} prime={} base={}",
        n,
        m,
        prime,
        base
    );

    // base^(m-1) mod prime: the weight of the outgoing symbol.
    let h = mod_pow(base, m - 1, prime);

    let mut pattern_hash = 0i64;
    let mut text_hash = 0i64;

    for i in 0..m {
        pattern_hash = mod_add(mod_mul(pattern_hash, base, prime), pattern[i] as i64, prime);
        text_hash = mod_add(mod_mul(text_hash, base, prime), text[i] as i64, prime);
    }

    for i in 0..=n - m {
        if pattern_hash == text_hash {
            if &text[i..i + m] == pattern {
                return MatchResult::Found(i);
            }
            log::trace!("rabin_karp_find: hash collision at window {}", i);
        }

        if i < n - m {
            // Drop the outgoing symbol, shift, pull in the incoming one.
            text_hash = (text_hash - mod_mul(text[i] as i64, h, prime)) % prime;
            text_hash = mod_add(mod_mul(text_hash, base, prime), text[i + m] as i64, prime);
            // The subtraction can leave a negative remainder; fold it back
            // into [0, prime) regardless of the host modulo convention.
            text_hash = mod_add(text_hash, prime, prime);
        }
    }

    MatchResult::NotFound
}

/// Widened multiply-then-reduce so user-supplied moduli cannot overflow i64.
fn mod_mul(a: i64, b: i64, modulus: i64) -> i64 {
    ((a as i128 * b as i128) % modulus as i128) as i64
}

/// Widened add-then-reduce; a modulus near i64::MAX would otherwise make the
/// intermediate sum overflow.
fn mod_add(a: i64, b: i64, modulus: i64) -> i64 {
    ((a as i128 + b as i128) % modulus as i128) as i64
}

fn mod_pow(base: i64, mut exp: usize, modulus: i64) -> i64 {
    let mut result = 1 % modulus;
    let mut factor = base % modulus;
    while exp > 0 {
        if exp & 1 == 1 {
            result = mod_mul(result, factor, modulus);
        }
        factor = mod_mul(factor, factor, modulus);
        exp >>= 1;
    }
    result
}
