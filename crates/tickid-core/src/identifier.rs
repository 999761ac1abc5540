use crate::decoder::{decode, Verdict};
use crate::encoder::encode;
use crate::error::DecodeError;
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;
use std::fmt::Display;
use std::str::FromStr;

/// A complete, valid identifier in its canonical spelling.
///
/// Produced by [`encode`] or by parsing. Parsing accepts lowercase input and
/// the look-alike characters, and stores the canonical spelling.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Identifier {
    code: SmolStr,
    value: u64,
}

impl Identifier {
    pub fn encode(value: u64) -> Self {
        encode(value)
    }

    pub(crate) fn from_parts(code: SmolStr, value: u64) -> Self {
        Self { code, value }
    }

    /// The encoded value.
    pub fn value(&self) -> u64 {
        self.value
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.code
    }

    /// Number of characters, between 6 and 17.
    pub fn len(&self) -> usize {
        self.code.len()
    }

    pub fn is_empty(&self) -> bool {
        self.code.is_empty()
    }
}

impl std::fmt::Debug for Identifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Identifier").field(&self.code).finish()
    }
}

impl Display for Identifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.code)
    }
}

impl FromStr for Identifier {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match decode(s)? {
            Verdict::Complete(value) => Ok(encode(value)),
            Verdict::Partial => Err(DecodeError::Incomplete {
                length: s.chars().count(),
            }),
        }
    }
}

impl From<u64> for Identifier {
    fn from(value: u64) -> Self {
        encode(value)
    }
}

impl From<Identifier> for u64 {
    fn from(id: Identifier) -> Self {
        id.value
    }
}

impl AsRef<str> for Identifier {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl Serialize for Identifier {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.code.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Identifier {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = SmolStr::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_complete() {
        let id: Identifier = "72639D77LD".parse().unwrap();
        assert_eq!(id.value(), 1_552_572_000);
        assert_eq!(id.to_string(), "72639D77LD");
        assert_eq!(id.len(), 10);
    }

    #[test]
    fn parse_normalizes_spelling() {
        let id: Identifier = "68495ltt0d".parse().unwrap();
        assert_eq!(id.as_str(), "68495LTTOD");
    }

    #[test]
    fn parse_drops_trailing_zero_groups() {
        // a zero group adds nothing to the checksum
        let id: Identifier = "22222X2".parse().unwrap();
        assert_eq!(id.value(), 0);
        assert_eq!(id.as_str(), "22222X");
    }

    #[test]
    fn parse_rejects_prefix() {
        assert_eq!(
            "684".parse::<Identifier>(),
            Err(DecodeError::Incomplete { length: 3 })
        );
    }

    #[test]
    fn parse_rejects_invalid() {
        assert!("94875KBZOD".parse::<Identifier>().is_err());
        assert!("B4D1NPUT".parse::<Identifier>().is_err());
    }

    #[test]
    fn converts_to_and_from_value() {
        let id = Identifier::from(42);
        assert_eq!(id.as_str(), "94722N");
        assert_eq!(u64::from(id), 42);
    }

    #[test]
    fn serde_as_string() {
        let id = Identifier::encode(1_567_856_598);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, r#""68495LTTOD""#);

        let back: Identifier = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn deserialize_validates() {
        let err = serde_json::from_str::<Identifier>(r#""94875KBZOD""#).unwrap_err();
        assert!(err.to_string().contains("after position 5"));
        assert!(serde_json::from_str::<Identifier>(r#""684""#).is_err());
    }
}
