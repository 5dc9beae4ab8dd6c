//! Substitution-alphabet random strings and the timestamp tag.

use once_cell::sync::Lazy;

use crate::error::TimeTagError;

/// Length of the timestamp suffix. Base-62 `ZZZZZZ` is 56800235583,
/// i.e. 3769-12-05T03:13:03Z.
pub const TS_LEN: usize = 6;

/// Largest Unix timestamp whose base-62 encoding fits in [`TS_LEN`]
/// symbols (62^6 - 1).
pub const MAX_UNIX_TS: i64 = 56_800_235_583;

/// The URL-safe substitution alphabet used by [`url_random`].
pub const URL_ALPHABET: &str =
    "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_";

/// Returns `n` bytes from the operating system's secure random
/// generator.
///
/// # Panics
///
/// Panics if the generator fails; a broken entropy source has no
/// degraded mode.
pub fn random_bytes(n: usize) -> Vec<u8> {
    let mut buf = vec![0u8; n];
    getrandom::fill(&mut buf).expect("getrandom failed");
    buf
}

/// A random-string generator over a fixed substitution alphabet.
///
/// Immutable after construction, so a single instance can be shared
/// across threads without synchronization.
#[derive(Debug, Clone)]
pub struct Random {
    substitute: Vec<char>,
}

impl Random {
    /// Creates a generator from the given alphabet. Duplicate symbols
    /// are dropped, first occurrence kept, so a repeated symbol cannot
    /// weight the mapping.
    ///
    /// # Panics
    ///
    /// Panics if the alphabet has no symbols.
    pub fn new(alphabet: &str) -> Self {
        let mut substitute: Vec<char> = Vec::with_capacity(alphabet.len());
        for c in alphabet.chars() {
            if !substitute.contains(&c) {
                substitute.push(c);
            }
        }
        assert!(!substitute.is_empty(), "empty substitution alphabet");
        Self { substitute }
    }

    /// Number of distinct symbols in the alphabet.
    pub fn alphabet_len(&self) -> usize {
        self.substitute.len()
    }

    /// The deduplicated alphabet, in first-occurrence order.
    pub fn alphabet(&self) -> String {
        self.substitute.iter().collect()
    }

    /// Returns a securely generated random string of exactly `length`
    /// symbols drawn from the alphabet.
    ///
    /// Each random byte maps to `alphabet[byte % alphabet_len]`. When
    /// the alphabet length does not divide 256 this leans slightly
    /// towards the leading symbols; callers that need an exactly
    /// uniform draw should use an alphabet whose length is a power of
    /// two, such as [`URL_ALPHABET`].
    ///
    /// # Panics
    ///
    /// Panics if the secure random generator fails.
    pub fn random_string(&self, length: usize) -> String {
        let n = self.substitute.len();
        random_bytes(length)
            .into_iter()
            .map(|b| self.substitute[b as usize % n])
            .collect()
    }

    /// Returns a random string whose last [`TS_LEN`] characters encode
    /// `unix_ts` in base 62: a random prefix of `length - 6` symbols
    /// followed by the encoded timestamp, no separator.
    ///
    /// `length` must be greater than [`TS_LEN`] and `unix_ts` must lie
    /// in `[0, MAX_UNIX_TS]`. Timestamps below 62^5 = 916132832
    /// (before 1999-09-02T03:00:32Z) encode in fewer than six symbols
    /// and are not zero-padded, so the result comes out shorter than
    /// `length` and [`parse_time`](Self::parse_time) cannot recover
    /// them; any timestamp from 62^5 up encodes to exactly six.
    pub fn random_string_with_time(
        &self,
        length: usize,
        unix_ts: i64,
    ) -> Result<String, TimeTagError> {
        if length <= TS_LEN {
            return Err(TimeTagError::LengthTooShort(length));
        }
        if !(0..=MAX_UNIX_TS).contains(&unix_ts) {
            return Err(TimeTagError::TimestampOutOfRange(unix_ts));
        }
        let mut s = self.random_string(length - TS_LEN);
        randtag_radix::append_int(&mut s, unix_ts, 62);
        Ok(s)
    }

    /// Recovers the Unix timestamp from the last [`TS_LEN`] characters
    /// of a string produced by
    /// [`random_string_with_time`](Self::random_string_with_time).
    ///
    /// Never panics: malformed input, including text whose tail is not
    /// base 62 or splits a multi-byte character, comes back as an
    /// error.
    pub fn parse_time(&self, tagged: &str) -> Result<i64, TimeTagError> {
        let length = tagged.len();
        if length <= TS_LEN {
            return Err(TimeTagError::StringTooShort(length));
        }
        let suffix = tagged
            .get(length - TS_LEN..)
            .ok_or(TimeTagError::MalformedSuffix)?;
        Ok(randtag_radix::parse_int(suffix, 62, 64)?)
    }
}

static URL_RANDOM: Lazy<Random> = Lazy::new(|| Random::new(URL_ALPHABET));

/// Returns the process-wide generator over [`URL_ALPHABET`].
pub fn url_random() -> &'static Random {
    &URL_RANDOM
}

/// Returns a URL-safe, securely generated random string of `n`
/// symbols.
///
/// # Panics
///
/// Panics if the secure random generator fails.
pub fn url_random_string(n: usize) -> String {
    URL_RANDOM.random_string(n)
}
