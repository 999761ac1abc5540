use crate::alphabet::decode_symbol;
use crate::error::{DecodeError, Result};
use crate::layout::{
    embedded_parity, parity_window, weight, FixedFields, FIRST_PARITY_POSITION, FIXED_BITS,
    GROUP_BITS, MAX_LEN, MIN_LEN, MODULUS,
};

/// Decodes a complete identifier or a prefix of one.
pub fn decode(input: &str) -> Result<Verdict> {
    let mut decoder = Decoder::new();
    for c in input.chars() {
        decoder.push(c)?;
    }
    decoder.verdict()
}

/// What can be said about input that has not failed any check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// A complete identifier whose checksum matches; carries the value.
    Complete(u64),
    /// Shorter than a complete identifier, but nothing typed so far is wrong.
    Partial,
}

impl Verdict {
    pub fn value(self) -> Option<u64> {
        match self {
            Verdict::Complete(value) => Some(value),
            Verdict::Partial => None,
        }
    }

    pub fn is_complete(self) -> bool {
        matches!(self, Verdict::Complete(_))
    }

    pub fn is_partial(self) -> bool {
        matches!(self, Verdict::Partial)
    }
}

/// The role of the symbol at a given position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    /// Position 1, the fixed check digit.
    CheckDigit,
    /// Positions 2 to 5, field F1 to F4.
    Field(usize),
    /// Position 6, the master check digit.
    MasterCheck,
    /// Positions 7 and up, the 0-based variable part group.
    Group(usize),
    /// Past the longest possible identifier.
    Beyond,
}

impl Stage {
    fn at(position: usize) -> Self {
        match position {
            1 => Stage::CheckDigit,
            2..=5 => Stage::Field(position - 1),
            6 => Stage::MasterCheck,
            p if p <= MAX_LEN => Stage::Group(p - MIN_LEN - 1),
            _ => Stage::Beyond,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum State {
    Scanning,
    Invalid(DecodeError),
}

/// Progressive identifier decoder, fed one character at a time.
///
/// Every character is checked as soon as it arrives: the fixed part is range
/// checked and, from position 3 on, compared against the parity bits carried
/// by the first character. The whole-string checksum is only evaluated by
/// [`Decoder::verdict`], which can be asked after any character.
///
/// Once a check fails the decoder stays invalid and keeps returning the same
/// error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoder {
    state: State,
    position: usize,
    check_digit: u8,
    fixed: FixedFields,
    high: u64,
    checksum: u32,
}

impl Default for Decoder {
    fn default() -> Self {
        Self::new()
    }
}

impl Decoder {
    pub fn new() -> Self {
        Self {
            state: State::Scanning,
            position: 0,
            check_digit: 0,
            fixed: FixedFields::new(),
            high: 0,
            checksum: 0,
        }
    }

    /// Number of characters accepted so far.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Consumes the next character of the identifier.
    pub fn push(&mut self, c: char) -> Result<()> {
        if let State::Invalid(err) = &self.state {
            return Err(err.clone());
        }

        let position = self.position + 1;
        match self.scan(position, c) {
            Ok(()) => {
                self.position = position;
                Ok(())
            }
            Err(err) => {
                self.state = State::Invalid(err.clone());
                Err(err)
            }
        }
    }

    /// Judges the characters pushed so far.
    pub fn verdict(&self) -> Result<Verdict> {
        match &self.state {
            State::Invalid(err) => Err(err.clone()),
            State::Scanning if self.position < MIN_LEN => Ok(Verdict::Partial),
            State::Scanning if self.checksum % MODULUS != 0 => Err(DecodeError::ChecksumMismatch),
            State::Scanning => Ok(Verdict::Complete(self.value())),
        }
    }

    fn value(&self) -> u64 {
        self.high | u64::from(self.fixed.bits())
    }

    fn scan(&mut self, position: usize, c: char) -> Result<()> {
        let digit = decode_symbol(c).ok_or(DecodeError::UnmappedCharacter {
            position,
            character: c,
        })?;

        match Stage::at(position) {
            Stage::CheckDigit => {
                self.check_digit = fixed_digit(position, c, digit)?;
            }
            Stage::Field(index) => {
                let field = fixed_digit(position, c, digit)?;
                self.fixed = self.fixed.with_field(index, field);
                if position >= FIRST_PARITY_POSITION {
                    self.verify_parity(position)?;
                }
            }
            Stage::MasterCheck => {}
            Stage::Group(index) => {
                let shift = FIXED_BITS + GROUP_BITS * index as u32;
                let group = u64::from(digit);
                if group >> (u64::BITS - shift) != 0 {
                    return Err(DecodeError::Overflow { position });
                }
                self.high |= group << shift;
            }
            Stage::Beyond => return Err(DecodeError::Overflow { position }),
        }

        self.checksum += weight(position) * u32::from(digit);
        Ok(())
    }

    fn verify_parity(&self, position: usize) -> Result<()> {
        // unfilled fields are zero, so all assembled bits lie inside the window
        debug_assert!(u32::from(self.fixed.bits()) >> parity_window(position) == 0);
        let embedded = embedded_parity(self.check_digit, position);
        if (self.fixed.bits().count_ones() + u32::from(embedded)) % 2 == 1 {
            return Err(DecodeError::ParityMismatch { position });
        }
        Ok(())
    }
}

fn fixed_digit(position: usize, character: char, digit: u8) -> Result<u8> {
    if digit > 7 {
        return Err(DecodeError::OutOfRangeDigit {
            position,
            character,
        });
    }
    Ok(digit)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete(input: &str) -> u64 {
        match decode(input) {
            Ok(Verdict::Complete(value)) => value,
            other => panic!("{input:?} should be complete, got {other:?}"),
        }
    }

    #[test]
    fn decodes_known_identifiers() {
        assert_eq!(complete("22222X"), 0);
        assert_eq!(complete("72639D77LD"), 1_552_572_000);
        assert_eq!(complete("68495LTTOD"), 1_567_856_598);
        assert_eq!(complete("52247CRMTY"), 4_133_980_800);
        assert_eq!(complete("3445352D8B"), 1_234_567_890);
        assert_eq!(complete("499997ZZZZZZZZZZ5"), u64::MAX);
    }

    #[test]
    fn accepts_lowercase_and_look_alikes() {
        assert_eq!(complete("68495ltt0d"), 1_567_856_598);
        assert_eq!(complete("22222x"), 0);
    }

    #[test]
    fn prefixes_are_partial() {
        for input in ["", "6", "68", "684", "6849", "68495", "5", "52", "522", "5224", "52247"] {
            assert_eq!(decode(input), Ok(Verdict::Partial), "{input:?}");
        }
    }

    #[test]
    fn rejects_unmapped_characters() {
        assert_eq!(
            decode("2222!X"),
            Err(DecodeError::UnmappedCharacter {
                position: 5,
                character: '!'
            })
        );
    }

    #[test]
    fn rejects_letters_in_fixed_part() {
        assert_eq!(
            decode("B4D1NPUT"),
            Err(DecodeError::OutOfRangeDigit {
                position: 1,
                character: 'B'
            })
        );
        for input in ["22220X", "22221X", "2222TX"] {
            assert!(
                matches!(decode(input), Err(DecodeError::OutOfRangeDigit { position: 5, .. })),
                "{input:?}"
            );
        }
    }

    #[test]
    fn parity_mismatch_reports_first_bad_position() {
        assert_eq!(decode("22332"), Err(DecodeError::ParityMismatch { position: 3 }));
        assert_eq!(decode("22233"), Err(DecodeError::ParityMismatch { position: 4 }));
        assert_eq!(decode("22223"), Err(DecodeError::ParityMismatch { position: 5 }));
        assert_eq!(decode("92222"), Err(DecodeError::ParityMismatch { position: 3 }));
        assert_eq!(decode("92332"), Err(DecodeError::ParityMismatch { position: 4 }));
        assert_eq!(decode("92323"), Err(DecodeError::ParityMismatch { position: 5 }));
    }

    #[test]
    fn parity_is_checked_before_the_rest_is_typed() {
        assert_eq!(decode("223"), Err(DecodeError::ParityMismatch { position: 3 }));
        // a later bad character does not mask the earlier parity error
        assert_eq!(decode("223!"), Err(DecodeError::ParityMismatch { position: 3 }));
    }

    #[test]
    fn checksum_covers_every_position() {
        for input in [
            "94875KBZOD",
            "94875J5ZOD",
            "94875JBSOD",
            "94875JBZQD",
            "94875JBZO4",
        ] {
            assert_eq!(decode(input), Err(DecodeError::ChecksumMismatch), "{input:?}");
        }
    }

    #[test]
    fn rejects_symbols_past_64_bits() {
        assert_eq!(
            decode("499997ZZZZZZZZZZ6"),
            Err(DecodeError::Overflow { position: 17 })
        );
        assert_eq!(
            decode("499997ZZZZZZZZZZ5Z"),
            Err(DecodeError::Overflow { position: 18 })
        );
    }

    #[test]
    fn decoder_stays_invalid() {
        let mut decoder = Decoder::new();
        decoder.push('2').unwrap();
        decoder.push('2').unwrap();
        let err = decoder.push('3').unwrap_err();
        assert_eq!(err, DecodeError::ParityMismatch { position: 3 });
        assert_eq!(decoder.push('2'), Err(err.clone()));
        assert_eq!(decoder.verdict(), Err(err));
        assert_eq!(decoder.position(), 2);
    }

    #[test]
    fn verdict_follows_typing() {
        let mut decoder = Decoder::new();
        let mut verdicts = Vec::new();
        for c in "68495LTTOD".chars() {
            decoder.push(c).unwrap();
            verdicts.push(decoder.verdict());
        }
        assert!(verdicts[..5].iter().all(|v| *v == Ok(Verdict::Partial)));
        // "68495L" happens to be the complete identifier of 2006
        assert_eq!(verdicts[5], Ok(Verdict::Complete(2006)));
        assert!(verdicts[6..9]
            .iter()
            .all(|v| *v == Err(DecodeError::ChecksumMismatch)));
        assert_eq!(verdicts[9], Ok(Verdict::Complete(1_567_856_598)));
    }

    #[test]
    fn verdict_accessors() {
        let complete = decode("94722N").unwrap();
        assert_eq!(complete.value(), Some(42));
        assert!(complete.is_complete());
        assert!(!complete.is_partial());

        let partial = decode("947").unwrap();
        assert_eq!(partial.value(), None);
        assert!(partial.is_partial());
        assert!(!partial.is_complete());
    }

    #[test]
    fn stage_per_position() {
        assert_eq!(Stage::at(1), Stage::CheckDigit);
        assert_eq!(Stage::at(2), Stage::Field(1));
        assert_eq!(Stage::at(5), Stage::Field(4));
        assert_eq!(Stage::at(6), Stage::MasterCheck);
        assert_eq!(Stage::at(7), Stage::Group(0));
        assert_eq!(Stage::at(17), Stage::Group(10));
        assert_eq!(Stage::at(18), Stage::Beyond);
    }
}
