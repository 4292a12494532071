use crate::error::FareError;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FareClass {
    Standard,
    Comfort,
    First,
}

impl FareClass {
    pub const ALL: [FareClass; 3] = [FareClass::Standard, FareClass::Comfort, FareClass::First];

    /// Added on top of the slot price.
    pub fn price_modifier(self) -> u32 {
        match self {
            FareClass::Standard => 0,
            FareClass::Comfort => 15,
            FareClass::First => 35,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            FareClass::Standard => "Standard",
            FareClass::Comfort => "Comfort",
            FareClass::First => "First",
        }
    }
}

impl fmt::Display for FareClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FareClass {
    type Err = FareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FareClass::ALL
            .into_iter()
            .find(|class| class.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| FareError::UnknownFareClass(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(FareClass::Comfort, "comfort".parse::<FareClass>().unwrap());
        assert_eq!(FareClass::First, "FIRST".parse::<FareClass>().unwrap());
        assert!("business".parse::<FareClass>().is_err());
    }

    #[test]
    fn test_modifiers_increase_with_class() {
        let modifiers: Vec<u32> = FareClass::ALL.iter().map(|c| c.price_modifier()).collect();
        assert_eq!(vec![0, 15, 35], modifiers);
    }
}
