use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

/// Names every program can use without declaring them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, EnumIter, Display)]
pub enum Builtin {
    R0,
    R1,
    R2,
    R3,
    R4,
    R5,
    R6,
    R7,
    R8,
    R9,
    R10,
    R11,
    R12,
    R13,
    R14,
    R15,
    SP,
    LCL,
    ARG,
    THIS,
    THAT,
    SCREEN,
    KBD,
}

pub const SCREEN_ADDR: u16 = 0x4000;
pub const KBD_ADDR: u16 = 0x6000;

impl Builtin {
    pub fn all() -> impl Iterator<Item = Builtin> {
        Builtin::iter()
    }

    pub fn addr(&self) -> u16 {
        use Builtin::*;
        match self {
            R0 | SP => 0,
            R1 | LCL => 1,
            R2 | ARG => 2,
            R3 | THIS => 3,
            R4 | THAT => 4,
            R5 => 5,
            R6 => 6,
            R7 => 7,
            R8 => 8,
            R9 => 9,
            R10 => 10,
            R11 => 11,
            R12 => 12,
            R13 => 13,
            R14 => 14,
            R15 => 15,
            SCREEN => SCREEN_ADDR,
            KBD => KBD_ADDR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registers() {
        for i in 0..=15u16 {
            assert_eq!(format!("R{i}").parse::<Builtin>().map(|b| b.addr()).ok(), Some(i));
        }
    }

    #[test]
    fn pointers_alias_registers() {
        assert_eq!(Builtin::SP.addr(), Builtin::R0.addr());
        assert_eq!(Builtin::LCL.addr(), 1);
        assert_eq!(Builtin::ARG.addr(), 2);
        assert_eq!(Builtin::THIS.addr(), 3);
        assert_eq!(Builtin::THAT.addr(), Builtin::R4.addr());
        assert_eq!(Builtin::SCREEN.addr(), 16384);
        assert_eq!(Builtin::KBD.addr(), 24576);
    }

    #[test]
    fn names() {
        assert_eq!(Builtin::all().count(), 23);
        assert_eq!("screen".parse::<Builtin>().ok(), None);
        assert_eq!("R16".parse::<Builtin>().ok(), None);
        assert_eq!(Builtin::THAT.to_string(), "THAT");
    }
}
