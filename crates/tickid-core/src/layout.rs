use modular_bitfield::prelude::*;
use std::fmt;

/// Number of symbols in the fixed part (check digit plus four fields).
pub const FIXED_LEN: usize = 5;
/// Shortest complete identifier: fixed part plus the master check digit.
pub const MIN_LEN: usize = FIXED_LEN + 1;
/// Bits of the value carried by the fixed part.
pub const FIXED_BITS: u32 = 12;
/// Bits of the value carried by each variable part symbol.
pub const GROUP_BITS: u32 = 5;
/// Variable part symbols needed for the largest value.
pub const MAX_GROUPS: usize = (u64::BITS - FIXED_BITS).div_ceil(GROUP_BITS) as usize;
/// Longest complete identifier.
pub const MAX_LEN: usize = MIN_LEN + MAX_GROUPS;

/// First position whose arrival completes a parity window.
pub(crate) const FIRST_PARITY_POSITION: usize = 3;
/// Modulus of the master check digit.
pub(crate) const MODULUS: u32 = 29;

pub(crate) const FIXED_MASK: u64 = (1 << FIXED_BITS) - 1;
pub(crate) const GROUP_MASK: u64 = (1 << GROUP_BITS) - 1;

/// The low 12 bits of a value, split into the four 3-bit fields.
#[bitfield]
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct FixedFields {
    /// Bits 0..3.
    pub f1: B3,
    /// Bits 3..6.
    pub f2: B3,
    /// Bits 6..9.
    pub f3: B3,
    /// Bits 9..12.
    pub f4: B3,
    #[skip]
    __: B4,
}

impl FixedFields {
    /// Takes the low 12 bits of `value`.
    pub fn from_value(value: u64) -> Self {
        Self::from_bytes(((value & FIXED_MASK) as u16).to_le_bytes())
    }

    /// The 12 bits as an integer.
    pub fn bits(self) -> u16 {
        u16::from_le_bytes(self.into_bytes())
    }

    /// F1..F4 in symbol order.
    pub fn fields(self) -> [u8; 4] {
        [self.f1(), self.f2(), self.f3(), self.f4()]
    }

    /// Sets field `index` (1-based, in `1..=4`).
    pub(crate) fn with_field(self, index: usize, field: u8) -> Self {
        match index {
            1 => self.with_f1(field),
            2 => self.with_f2(field),
            3 => self.with_f3(field),
            _ => self.with_f4(field),
        }
    }

    /// Even-parity bits over the 6, 9 and 12 lowest bits.
    pub fn parity(self) -> [u8; 3] {
        let bits = u64::from(self.bits());
        [
            parity(bits, parity_window(3)),
            parity(bits, parity_window(4)),
            parity(bits, parity_window(5)),
        ]
    }

    /// The fixed check digit, `P2 * 4 + P3 * 2 + P4`.
    pub fn check_digit(self) -> u8 {
        let [p2, p3, p4] = self.parity();
        p2 << 2 | p3 << 1 | p4
    }
}

impl fmt::Debug for FixedFields {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FixedFields")
            .field("f1", &self.f1())
            .field("f2", &self.f2())
            .field("f3", &self.f3())
            .field("f4", &self.f4())
            .finish()
    }
}

/// Bits covered by the parity bit checked when `position` arrives.
pub(crate) fn parity_window(position: usize) -> u32 {
    3 * (position as u32 - 1)
}

/// The parity bit for `position` as embedded in the check digit.
pub(crate) fn embedded_parity(check_digit: u8, position: usize) -> u8 {
    (check_digit >> (FIXED_LEN - position)) & 1
}

fn parity(bits: u64, window: u32) -> u8 {
    ((bits & ((1 << window) - 1)).count_ones() & 1) as u8
}

/// Weight of the digit at 1-based `ordinal`: 3 for odd, 1 for even.
pub(crate) fn weight(ordinal: usize) -> u32 {
    if ordinal % 2 == 1 {
        3
    } else {
        1
    }
}
