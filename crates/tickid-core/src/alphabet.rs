//! Ambiguity-resistant base-32 alphabet.
//!
//! The canonical alphabet leaves out `0`, `1`, `G` and `S`. When reading,
//! those glyphs are accepted as look-alikes of `O`, `I`, `6` and `5`, and
//! lowercase input is treated as uppercase.

/// Number of symbols in the alphabet.
pub const RADIX: u8 = 32;

/// The canonical symbols, indexed by their value.
pub const ALPHABET: &[u8; RADIX as usize] = b"23456789ABCDEFHIJKLMNOPQRTUVWXYZ";

/// Marker for bytes without a mapping in [`DECODING_TABLE`].
const NONE: u8 = u8::MAX;

/// Reverse lookup from uppercase ASCII byte to symbol value.
const DECODING_TABLE: [u8; 128] = build_decoding_table();

const fn build_decoding_table() -> [u8; 128] {
    let mut table = [NONE; 128];
    let mut i = 0;
    while i < ALPHABET.len() {
        table[ALPHABET[i] as usize] = i as u8;
        i += 1;
    }
    // look-alikes
    table[b'0' as usize] = table[b'O' as usize];
    table[b'1' as usize] = table[b'I' as usize];
    table[b'S' as usize] = table[b'5' as usize];
    table[b'G' as usize] = table[b'6' as usize];
    table
}

/// Returns the canonical character for a symbol value.
///
/// # Panics
///
/// Panics if `value` is not below [`RADIX`]. Every caller inside this crate
/// masks its input to 5 bits first.
pub fn encode_symbol(value: u8) -> char {
    ALPHABET[value as usize] as char
}

/// Returns the value of a character, accepting lowercase and look-alikes.
pub fn decode_symbol(c: char) -> Option<u8> {
    if !c.is_ascii() {
        return None;
    }
    match DECODING_TABLE[c.to_ascii_uppercase() as usize] {
        NONE => None,
        value => Some(value),
    }
}
