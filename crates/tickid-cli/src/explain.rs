use std::fmt;
use tickid_core::alphabet::ALPHABET;
use tickid_core::layout::FIXED_BITS;
use tickid_core::Layout;

/// Step-by-step account of how a value is encoded.
///
/// Renders a [`Layout`], the same structure the identifier itself is built
/// from.
pub struct Explanation<'a> {
    layout: &'a Layout,
}

impl<'a> Explanation<'a> {
    pub fn new(layout: &'a Layout) -> Self {
        Self { layout }
    }
}

impl fmt::Display for Explanation<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let layout = self.layout;
        let value = layout.value();
        let [fc, f1, f2, f3, f4] = layout.fixed_digits();
        let [p2, p3, p4] = layout.fixed().parity();
        let groups = layout.groups();
        let rest = value >> FIXED_BITS;

        let significant = (value.leading_zeros() / 8) as usize;
        let bytes = &value.to_be_bytes()[significant..];
        let hex = bytes.iter().map(|b| format!("{b:02X} ")).collect::<String>();
        let bin = bytes.iter().map(|b| format!("{b:08b} ")).collect::<String>();

        writeln!(f, "Encoding {value} ( {hex}/ {bin}):")?;
        writeln!(f, "  Calculating leading [F]ixed [P]art FP:")?;
        for (i, field) in [f1, f2, f3, f4].into_iter().enumerate() {
            let (high, low) = (3 * i + 3, 3 * i + 1);
            writeln!(
                f,
                "    F{} := LSB {high:>2} to {low:>2}: {field:03b} ({field})",
                i + 1
            )?;
        }
        for (name, window, bit) in [("P2", 6, p2), ("P3", 9, p3), ("P4", 12, p4)] {
            writeln!(f, "    {name} := Even [P]arity bit for {window:>2} LSB := {bit}")?;
        }
        writeln!(f, "    FC := P2 * 4 + P3 * 2 + P4 : {fc:03b} ({fc}) as input [C]heck digit")?;
        writeln!(f, "    < FP := [FC F1 F2 F3 F4]: {:?}", layout.fixed_digits())?;

        writeln!(f, "  Calculating trailing [V]ariable [P]art VP:")?;
        writeln!(
            f,
            "    {} bits remaining: {rest:b}",
            u64::BITS - rest.leading_zeros()
        )?;
        for (k, group) in groups.iter().enumerate() {
            writeln!(f, "    V{} := next 5 LSB: {group:05b} ({group:>2})", k + 1)?;
        }
        writeln!(f, "    < VP := [V1 V2 ...]: {groups:?}")?;

        writeln!(f, "  Calculating [M]aster [C]heck digit MC:")?;
        writeln!(
            f,
            "    FS := [F]ixed    part weighted [S]um: 3*FC + 1*F1 + 3*F2 + 1*F3 + 3*F4: {}",
            layout.fixed_sum()
        )?;
        writeln!(
            f,
            "    VS := [V]ariable part weighted [S]um: 3*V1 + 1*V2 + 3*V3 + 1*V4 + ... : {}",
            layout.variable_sum()
        )?;
        writeln!(
            f,
            "    < MC := 29 - ( ( FS + VS ) modulo 29 ): {}",
            layout.master()
        )?;

        writeln!(f, "  Concatenating FP & MC & VP:")?;
        writeln!(
            f,
            "    < {:?} & [{}] & {groups:?}",
            layout.fixed_digits(),
            layout.master()
        )?;
        writeln!(f, "  Encoding using custom Base32 mapping...")?;
        writeln!(
            f,
            "    Alphabet used: {}",
            String::from_utf8_lossy(ALPHABET)
        )?;
        write!(f, "< Result: {}", layout.identifier())
    }
}
