//! Secure random strings with an embedded base-62 timestamp tag.
//!
//! This crate maps bytes from the operating system's secure random
//! generator through a substitution alphabet:
//!
//! - [`Random`]: a generator over a configurable alphabet
//! - [`url_random`] / [`url_random_string`]: a shared generator over the
//!   URL-safe alphabet `A-Z a-z 0-9 - _`
//! - [`Random::random_string_with_time`] / [`Random::parse_time`]: tag the
//!   last six characters of a string with a Unix timestamp in base 62,
//!   recoverable later
//!
//! # Example
//!
//! ```rust
//! use randtag_random::url_random;
//!
//! let token = url_random().random_string(24);
//! assert_eq!(token.chars().count(), 24);
//!
//! // Tag a token with the second it was minted.
//! let tagged = url_random()
//!     .random_string_with_time(24, 1_700_000_000)
//!     .unwrap();
//! assert_eq!(url_random().parse_time(&tagged).unwrap(), 1_700_000_000);
//! ```

mod error;
mod random;

pub use error::TimeTagError;
pub use random::{
    MAX_UNIX_TS, Random, TS_LEN, URL_ALPHABET, random_bytes, url_random, url_random_string,
};
