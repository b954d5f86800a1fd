use num_enum::IntoPrimitive;
use strum::{Display, EnumIter, EnumString};

/// Registers written by a C-instruction. The discriminant is the `ddd` field;
/// an instruction without a destination encodes `000`.
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
pub enum Dest {
    M = 0b001,
    D = 0b010,
    MD = 0b011,
    A = 0b100,
    AM = 0b101,
    AD = 0b110,
    AMD = 0b111,
}

impl Dest {
    pub fn parse(s: &str) -> Option<Self> {
        s.parse::<Self>().ok()
    }

    pub fn bits(dest: Option<Self>) -> u8 {
        dest.map_or(0, u8::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn codes() {
        let codes: Vec<(String, u8)> = Dest::iter().map(|d| (d.to_string(), d.into())).collect();
        assert_eq!(
            codes,
            vec![
                ("M".to_string(), 1),
                ("D".to_string(), 2),
                ("MD".to_string(), 3),
                ("A".to_string(), 4),
                ("AM".to_string(), 5),
                ("AD".to_string(), 6),
                ("AMD".to_string(), 7),
            ]
        );
        assert_eq!(Dest::bits(None), 0);
    }

    #[test]
    fn parse() {
        assert_eq!(Dest::parse("AMD"), Some(Dest::AMD));
        assert_eq!(Dest::parse("md"), None);
        assert_eq!(Dest::parse("DM"), None);
        assert_eq!(Dest::parse("D "), None);
        assert_eq!(Dest::parse(""), None);
    }
}
