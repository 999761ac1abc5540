//! Bit strings such as `"0101 1101_0111"`.

use crate::error::{Error, Result};

/// Parses a big-endian string of `0` and `1` into a value.
///
/// Spaces, tabs and underscores are skipped. Leading zeros do not count
/// towards the 64-bit limit.
pub fn parse_bits(input: &str) -> Result<u64> {
    let mut value: u64 = 0;
    let mut digits = 0_usize;

    for (i, c) in input.chars().enumerate() {
        let bit = match c {
            ' ' | '\t' | '_' => continue,
            '0' => 0,
            '1' => 1,
            _ => {
                return Err(Error::BadBitstringCharacter {
                    position: i + 1,
                    character: c,
                })
            }
        };
        if value.leading_zeros() == 0 {
            return Err(Error::OversizedBitstring);
        }
        value = value << 1 | bit;
        digits += 1;
    }

    if digits == 0 {
        return Err(Error::EmptyBitstring);
    }
    Ok(value)
}
