use num_enum::IntoPrimitive;
use strum::{Display, EnumIter, EnumString};

/// Jump condition of a C-instruction, tested against the ALU output.
/// The discriminant is the `jjj` field; no jump encodes `000`.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    IntoPrimitive,
    EnumString,
    EnumIter,
    Display,
)]
#[repr(u8)]
pub enum Jump {
    JGT = 0b001,
    JEQ = 0b010,
    JGE = 0b011,
    JLT = 0b100,
    JNE = 0b101,
    JLE = 0b110,
    JMP = 0b111,
}

impl Jump {
    pub fn parse(s: &str) -> Option<Self> {
        s.parse::<Self>().ok()
    }

    pub fn bits(jump: Option<Self>) -> u8 {
        jump.map_or(0, u8::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn codes() {
        for (idx, jump) in Jump::iter().enumerate() {
            assert_eq!(u8::from(jump) as usize, idx + 1);
            assert_eq!(Jump::parse(&jump.to_string()), Some(jump));
        }
        assert_eq!(Jump::bits(None), 0);
        assert_eq!(Jump::bits(Some(Jump::JLE)), 0b110);
    }

    #[test]
    fn parse() {
        assert_eq!(Jump::parse("jmp"), None);
        assert_eq!(Jump::parse("JMP;"), None);
        assert_eq!(Jump::parse(""), None);
    }
}
