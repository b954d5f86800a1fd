use crate::{comp::Comp, dest::Dest, jump::Jump, ADDR_MAX};

use color_print::cformat;
use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Inst {
    /// `@value`: load a 15-bit address into `A`.
    Addr(u16),
    /// `dest=comp;jump`
    Calc(Option<Dest>, Comp, Option<Jump>),
}

const CALC_PREFIX: u16 = 0b111 << 13;

impl Inst {
    pub fn to_bin(&self) -> u16 {
        match self {
            Inst::Addr(addr) => {
                debug_assert!(*addr <= ADDR_MAX, "address out of range: {addr}");
                addr & ADDR_MAX
            }
            Inst::Calc(dest, comp, jump) => {
                CALC_PREFIX
                    | (u8::from(*comp) as u16) << 6
                    | (Dest::bits(*dest) as u16) << 3
                    | Jump::bits(*jump) as u16
            }
        }
    }
}

/// Renders the 16 character `0`/`1` form written to `.hack` files.
impl Display for Inst {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:016b}", self.to_bin())
    }
}

impl Inst {
    pub fn cformat(&self) -> String {
        match self {
            Inst::Addr(addr) => cformat!("<r>@</><y>{:<5}</> <y>0x{:0>4X}</>", addr, addr),
            Inst::Calc(dest, comp, jump) => {
                let dest = dest.map(|d| format!("{}=", d)).unwrap_or_default();
                let jump = jump.map(|j| format!(";{}", j)).unwrap_or_default();
                cformat!("<b>{:>4}</><r>{:<3}</><g>{:<4}</>", dest, comp, jump)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! test_inst {
        ($($name:ident: $inst:expr => $bin:expr,)*) => {
            $(
                #[test]
                fn $name() {
                    let inst = $inst;
                    assert_eq!(inst.to_string(), $bin);
                    assert_eq!(inst.to_string().len(), 16);
                }
            )*
        }
    }

    test_inst! {
        test_addr_zero: Inst::Addr(0) => "0000000000000000",
        test_addr_max: Inst::Addr(ADDR_MAX) => "0111111111111111",
        test_addr_screen: Inst::Addr(16384) => "0100000000000000",
        test_addr_kbd: Inst::Addr(24576) => "0110000000000000",
        test_d_eq_m: Inst::Calc(Some(Dest::D), Comp::M, None) => "1111110000010000",
        test_d_eq_d_sub_m: Inst::Calc(Some(Dest::D), Comp::DSubM, None) => "1111010011010000",
        test_d_jle: Inst::Calc(None, Comp::D, Some(Jump::JLE)) => "1110001100000110",
        test_zero_jmp: Inst::Calc(None, Comp::Zero, Some(Jump::JMP)) => "1110101010000111",
        test_m_eq_d: Inst::Calc(Some(Dest::M), Comp::D, None) => "1110001100001000",
        test_amd_eq_m_inc_jne: Inst::Calc(Some(Dest::AMD), Comp::IncM, Some(Jump::JNE)) => "1111110111111101",
    }
}
