//! Integer <-> string conversion in any base from 2 to 62.
//!
//! This crate provides strconv-style conversion routines for 64-bit
//! integers:
//!
//! - [`format_int`] / [`format_uint`]: value to string in a given base
//! - [`append_int`] / [`append_uint`]: same output, written into an existing buffer
//! - [`parse_int`] / [`parse_uint`]: string back to value, with overflow checks
//!
//! # Example
//!
//! ```rust
//! use randtag_radix::{format_int, parse_int};
//!
//! assert_eq!(format_int(255, 16), "ff");
//! assert_eq!(format_int(-1, 10), "-1");
//! assert_eq!(parse_int("ff", 16, 64).unwrap(), 255);
//!
//! // The full 62-symbol digit set: 0-9, a-z, A-Z.
//! assert_eq!(format_int(61, 62), "Z");
//! assert_eq!(parse_int("10", 62, 64).unwrap(), 62);
//! ```
//!
//! Formatting panics on a base outside `2..=62` (a caller bug);
//! parsing reports every failure as a [`ParseIntError`] and never
//! panics on untrusted text.

mod error;
mod format;
mod parse;

pub use error::ParseIntError;
pub use format::{append_int, append_uint, format_int, format_uint, itoa};
pub use parse::{parse_int, parse_uint};

/// The digit alphabet shared by the format and parse paths. A base `b`
/// uses the first `b` symbols as its digit set.
pub(crate) const DIGITS: &str = "0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

pub(crate) const MIN_BASE: u32 = 2;
pub(crate) const MAX_BASE: u32 = 62;
