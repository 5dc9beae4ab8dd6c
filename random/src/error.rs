use randtag_radix::ParseIntError;
use thiserror::Error;

/// Errors returned by the time-embedding operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimeTagError {
    /// The requested length leaves no room for the 6-character suffix.
    #[error("length {0} is too short, must be greater than 6")]
    LengthTooShort(usize),

    #[error("unix timestamp {0} is out of range [0, 56800235583]")]
    TimestampOutOfRange(i64),

    /// The string handed to parse_time is no longer than the suffix
    /// itself.
    #[error("tagged string length {0} is too short, must be greater than 6")]
    StringTooShort(usize),

    /// The last six bytes do not form base-62 text (for example, they
    /// start inside a multi-byte character).
    #[error("tagged string does not end in a base-62 suffix")]
    MalformedSuffix,

    #[error("invalid timestamp suffix: {0}")]
    InvalidSuffix(#[from] ParseIntError),
}
