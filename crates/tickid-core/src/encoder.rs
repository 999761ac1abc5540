use crate::alphabet::encode_symbol;
use crate::identifier::Identifier;
use crate::layout::{weight, FixedFields, FIXED_BITS, GROUP_BITS, GROUP_MASK, MAX_GROUPS, MODULUS};
use smol_str::SmolStr;

/// Encodes `value` into its canonical identifier.
pub fn encode(value: u64) -> Identifier {
    Layout::of(value).identifier()
}

/// Every intermediate quantity of the encoding of one value.
///
/// [`encode`] is `Layout::of(value).identifier()`, so anything that explains
/// an encoding from a `Layout` shows exactly what was encoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    value: u64,
    fixed: FixedFields,
    check_digit: u8,
    groups: Vec<u8>,
    fixed_sum: u32,
    variable_sum: u32,
    master: u8,
}

impl Layout {
    pub fn of(value: u64) -> Self {
        let fixed = FixedFields::from_value(value);
        let check_digit = fixed.check_digit();
        let groups = variable_groups(value);
        let fixed_sum = fixed_sum(check_digit, fixed);
        let variable_sum = variable_sum(&groups);
        let master = (MODULUS - (fixed_sum + variable_sum) % MODULUS) as u8;

        Self {
            value,
            fixed,
            check_digit,
            groups,
            fixed_sum,
            variable_sum,
            master,
        }
    }

    pub fn value(&self) -> u64 {
        self.value
    }

    pub fn fixed(&self) -> FixedFields {
        self.fixed
    }

    /// FC, the parity check digit in `0..8`.
    pub fn check_digit(&self) -> u8 {
        self.check_digit
    }

    /// The fixed part digits `[FC, F1, F2, F3, F4]`.
    pub fn fixed_digits(&self) -> [u8; 5] {
        let [f1, f2, f3, f4] = self.fixed.fields();
        [self.check_digit, f1, f2, f3, f4]
    }

    /// The variable part digits, least significant group first.
    pub fn groups(&self) -> &[u8] {
        &self.groups
    }

    /// FS, the weighted sum of the fixed part.
    pub fn fixed_sum(&self) -> u32 {
        self.fixed_sum
    }

    /// VS, the weighted sum of the variable part.
    pub fn variable_sum(&self) -> u32 {
        self.variable_sum
    }

    /// MC, the master check digit in `1..=29`.
    pub fn master(&self) -> u8 {
        self.master
    }

    /// All digits in output order: fixed part, master check digit, variable part.
    pub fn digits(&self) -> impl Iterator<Item = u8> + '_ {
        self.fixed_digits()
            .into_iter()
            .chain(std::iter::once(self.master))
            .chain(self.groups.iter().copied())
    }

    pub fn identifier(&self) -> Identifier {
        let code = self.digits().map(encode_symbol).collect::<SmolStr>();
        Identifier::from_parts(code, self.value)
    }
}

fn variable_groups(value: u64) -> Vec<u8> {
    let mut groups = Vec::with_capacity(MAX_GROUPS);
    let mut rest = value >> FIXED_BITS;
    while rest > 0 {
        groups.push((rest & GROUP_MASK) as u8);
        rest >>= GROUP_BITS;
    }
    groups
}

fn fixed_sum(check_digit: u8, fixed: FixedFields) -> u32 {
    std::iter::once(check_digit)
        .chain(fixed.fields())
        .enumerate()
        .map(|(i, digit)| weight(i + 1) * u32::from(digit))
        .sum()
}

fn variable_sum(groups: &[u8]) -> u32 {
    groups
        .iter()
        .enumerate()
        .map(|(i, &group)| weight(i + 1) * u32::from(group))
        .sum()
}
