use jiff::Timestamp;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned while turning user input into a value to encode.
#[derive(Debug, Error)]
pub enum Error {
    #[error("empty bitstring input")]
    EmptyBitstring,
    #[error("bitstring input exceeds 64 bits")]
    OversizedBitstring,
    #[error("bad character in bitstring input at position {position}: {character:?}")]
    BadBitstringCharacter { position: usize, character: char },
    #[error("input date {input:?} does not match the required 14-character format YYYYMMDDhhmmss")]
    MalformedDate { input: String },
    #[error("invalid date {input:?}: {source}")]
    InvalidDate {
        input: String,
        #[source]
        source: jiff::Error,
    },
    #[error("{time} is before the Unix epoch")]
    BeforeEpoch { time: Timestamp },
    #[error("unknown time zone {name:?}: {source}")]
    UnknownTimeZone {
        name: String,
        #[source]
        source: jiff::Error,
    },
}
