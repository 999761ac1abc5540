//! Typable, self-checking identifiers for 64-bit values.
//!
//! An identifier is a fixed part of five symbols holding the low 12 bits and
//! their parity, a master check digit, and a variable part of 5-bit groups
//! for the remaining bits. The parity digit makes a typing error visible
//! while the identifier is still being entered; the master check digit
//! catches the rest once it is complete.
//!
//! ```
//! use tickid_core::{decode, encode, Verdict};
//!
//! let id = encode(1_552_572_000);
//! assert_eq!(id.as_str(), "72639D77LD");
//! assert_eq!(decode("72639D77LD"), Ok(Verdict::Complete(1_552_572_000)));
//! assert_eq!(decode("726"), Ok(Verdict::Partial));
//! ```

pub mod alphabet;
pub mod decoder;
pub mod distribution;
pub mod encoder;
pub mod error;
pub mod identifier;
pub mod layout;

pub use decoder::{decode, Decoder, Verdict};
pub use distribution::PrefixDistribution;
pub use encoder::{encode, Layout};
pub use error::DecodeError;
pub use identifier::Identifier;
