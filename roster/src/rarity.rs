//! Summon rarity tiers

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The five rarity tiers a fighter can be summoned at
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rarity {
    Common,
    Rare,
    Epic,
    Legendary,
    Mythic,
}

/// Error returned when parsing an unrecognized rarity name
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown rarity: {0}")]
pub struct ParseRarityError(pub String);

impl Rarity {
    /// All tiers, lowest first
    pub const ALL: [Rarity; 5] = [
        Rarity::Common,
        Rarity::Rare,
        Rarity::Epic,
        Rarity::Legendary,
        Rarity::Mythic,
    ];

    /// Multiplier applied to a fighter's listed power when summoned at this tier
    pub fn power_multiplier(&self) -> f32 {
        match self {
            Rarity::Common => 1.0,
            Rarity::Rare => 1.2,
            Rarity::Epic => 1.5,
            Rarity::Legendary => 2.0,
            Rarity::Mythic => 2.5,
        }
    }

    /// Star count shown next to the fighter name
    pub fn stars(&self) -> usize {
        match self {
            Rarity::Common => 1,
            Rarity::Rare => 2,
            Rarity::Epic => 3,
            Rarity::Legendary => 4,
            Rarity::Mythic => 5,
        }
    }

    /// Get display name
    pub fn as_str(&self) -> &'static str {
        match self {
            Rarity::Common => "Common",
            Rarity::Rare => "Rare",
            Rarity::Epic => "Epic",
            Rarity::Legendary => "Legendary",
            Rarity::Mythic => "Mythic",
        }
    }
}

impl FromStr for Rarity {
    type Err = ParseRarityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "common" => Ok(Rarity::Common),
            "rare" => Ok(Rarity::Rare),
            "epic" => Ok(Rarity::Epic),
            "legendary" => Ok(Rarity::Legendary),
            "mythic" => Ok(Rarity::Mythic),
            _ => Err(ParseRarityError(s.to_string())),
        }
    }
}

impl std::fmt::Display for Rarity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rarity_from_str() {
        assert_eq!("common".parse(), Ok(Rarity::Common));
        assert_eq!("Legendary".parse(), Ok(Rarity::Legendary));
        assert_eq!("MYTHIC".parse(), Ok(Rarity::Mythic));
        assert!("shiny".parse::<Rarity>().is_err());
    }

    #[test]
    fn test_rarity_ordering() {
        assert!(Rarity::Common < Rarity::Rare);
        assert!(Rarity::Legendary < Rarity::Mythic);
    }

    #[test]
    fn test_power_multiplier_increases_with_tier() {
        let mut last = 0.0;
        for rarity in Rarity::ALL {
            assert!(rarity.power_multiplier() > last);
            last = rarity.power_multiplier();
        }
    }

    #[test]
    fn test_stars() {
        assert_eq!(Rarity::Common.stars(), 1);
        assert_eq!(Rarity::Mythic.stars(), 5);
    }
}
