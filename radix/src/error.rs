use thiserror::Error;

/// Errors returned by [`parse_int`](crate::parse_int) and
/// [`parse_uint`](crate::parse_uint).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseIntError {
    /// The input was empty, or held nothing after its sign.
    #[error("cannot parse integer from empty string")]
    Empty,

    #[error("invalid base {0}, must be in 2..=62")]
    InvalidBase(u32),

    #[error("invalid bit size {0}, must be in 1..=64")]
    InvalidBitSize(u32),

    /// The character is not one of the first `base` symbols of the
    /// digit alphabet.
    #[error("invalid digit {0:?} for base {1}")]
    InvalidDigit(char, u32),

    #[error("value out of range for a {0}-bit integer")]
    OutOfRange(u32),
}
