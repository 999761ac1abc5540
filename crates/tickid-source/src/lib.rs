//! Inputs that identifiers are generated from: clock readings, bit strings
//! and local date-time strings.

pub mod bitstring;
mod clock;
pub mod datetime;
pub mod error;

pub use bitstring::parse_bits;
pub use clock::{Clock, FixedClock, SystemClock};
pub use datetime::{unix_seconds, DateParser, DATE_FORMAT};
pub use error::{Error, Result};
