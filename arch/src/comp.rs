use bimap::BiMap;
use num_enum::{IntoPrimitive, TryFromPrimitive};
use once_cell::sync::Lazy;
use std::fmt::Display;

/// ALU computation of a C-instruction.
///
/// The discriminant is the 7-bit `a cccccc` field: bit 6 selects `M`
/// (memory at `A`) instead of the `A` register as the second operand.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, IntoPrimitive, TryFromPrimitive)]
#[repr(u8)]
pub enum Comp {
    Zero = 0b0_101010,
    One = 0b0_111111,
    MinusOne = 0b0_111010,
    D = 0b0_001100,
    A = 0b0_110000,
    NotD = 0b0_001101,
    NotA = 0b0_110001,
    NegD = 0b0_001111,
    NegA = 0b0_110011,
    IncD = 0b0_011111,
    IncA = 0b0_110111,
    DecD = 0b0_001110,
    DecA = 0b0_110010,
    DAddA = 0b0_000010,
    DSubA = 0b0_010011,
    ASubD = 0b0_000111,
    DAndA = 0b0_000000,
    DOrA = 0b0_010101,

    M = 0b1_110000,
    NotM = 0b1_110001,
    NegM = 0b1_110011,
    IncM = 0b1_110111,
    DecM = 0b1_110010,
    DAddM = 0b1_000010,
    DSubM = 0b1_010011,
    MSubD = 0b1_000111,
    DAndM = 0b1_000000,
    DOrM = 0b1_010101,
}

static COMP_MAP: Lazy<BiMap<&'static str, Comp>> = Lazy::new(|| {
    let mut map: BiMap<&'static str, Comp> = BiMap::new();
    map.insert("0", Comp::Zero);
    map.insert("1", Comp::One);
    map.insert("-1", Comp::MinusOne);
    map.insert("D", Comp::D);
    map.insert("A", Comp::A);
    map.insert("!D", Comp::NotD);
    map.insert("!A", Comp::NotA);
    map.insert("-D", Comp::NegD);
    map.insert("-A", Comp::NegA);
    map.insert("D+1", Comp::IncD);
    map.insert("A+1", Comp::IncA);
    map.insert("D-1", Comp::DecD);
    map.insert("A-1", Comp::DecA);
    map.insert("D+A", Comp::DAddA);
    map.insert("D-A", Comp::DSubA);
    map.insert("A-D", Comp::ASubD);
    map.insert("D&A", Comp::DAndA);
    map.insert("D|A", Comp::DOrA);
    map.insert("M", Comp::M);
    map.insert("!M", Comp::NotM);
    map.insert("-M", Comp::NegM);
    map.insert("M+1", Comp::IncM);
    map.insert("M-1", Comp::DecM);
    map.insert("D+M", Comp::DAddM);
    map.insert("D-M", Comp::DSubM);
    map.insert("M-D", Comp::MSubD);
    map.insert("D&M", Comp::DAndM);
    map.insert("D|M", Comp::DOrM);
    map
});

impl Comp {
    pub fn parse(s: &str) -> Option<Comp> {
        COMP_MAP.get_by_left(s).copied()
    }

    pub fn format(&self) -> &'static str {
        // every variant is registered in COMP_MAP
        COMP_MAP.get_by_right(self).copied().unwrap_or("?")
    }
}

impl Display for Comp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.format())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_complete() {
        assert_eq!(COMP_MAP.len(), 28);
        for (name, comp) in COMP_MAP.iter() {
            assert_eq!(Comp::parse(name), Some(*comp));
            assert_eq!(comp.format(), *name);
            assert_eq!(Comp::try_from(u8::from(*comp)).ok(), Some(*comp));
        }
    }

    #[test]
    fn memory_flag() {
        // a-bit selects M over A
        for (name, comp) in COMP_MAP.iter() {
            assert_eq!(u8::from(*comp) >> 6 == 1, name.contains('M'), "{name}");
        }
        assert_eq!(u8::from(Comp::DSubM), 0b1010011);
        assert_eq!(u8::from(Comp::IncD), 0b0011111);
    }

    #[test]
    fn unknown() {
        assert_eq!(Comp::parse(""), None);
        assert_eq!(Comp::parse("d"), None);
        assert_eq!(Comp::parse("A+D"), None);
        assert_eq!(Comp::parse("1+1"), None);
        assert_eq!(Comp::parse("D+X"), None);
    }
}
