//! Static fighter catalog

use serde::Serialize;

use crate::rarity::Rarity;

/// One row of the fighter catalog
///
/// `base_power` is the listed power before the rarity multiplier; the value
/// the battle engine consumes is [`FighterEntry::power`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FighterEntry {
    /// Canonical fighter name
    pub name: &'static str,
    /// Flavor title shown under the name
    pub epithet: &'static str,
    /// Tier this fighter is summoned at
    pub rarity: Rarity,
    /// Listed power before the rarity multiplier
    pub base_power: u32,
}

impl FighterEntry {
    /// Effective power: listed power scaled by the rarity multiplier
    pub fn power(&self) -> u32 {
        (self.base_power as f32 * self.rarity.power_multiplier()) as u32
    }
}

/// The full fighter catalog, grouped by tier
pub static CATALOG: &[FighterEntry] = &[
    // Common
    FighterEntry { name: "Gutter Rat", epithet: "the Unseen", rarity: Rarity::Common, base_power: 280 },
    FighterEntry { name: "Street Brawler", epithet: "of the Low Quarter", rarity: Rarity::Common, base_power: 300 },
    FighterEntry { name: "Dockhand", epithet: "the Tireless", rarity: Rarity::Common, base_power: 290 },
    FighterEntry { name: "Torch Juggler", epithet: "of the Night Market", rarity: Rarity::Common, base_power: 310 },
    // Rare
    FighterEntry { name: "Ember Knight", epithet: "the Cinderborn", rarity: Rarity::Rare, base_power: 340 },
    FighterEntry { name: "Frost Adept", epithet: "of the White Spire", rarity: Rarity::Rare, base_power: 330 },
    FighterEntry { name: "Thorn Witch", epithet: "the Bramble Queen", rarity: Rarity::Rare, base_power: 335 },
    FighterEntry { name: "Sand Runner", epithet: "the Horizon Chaser", rarity: Rarity::Rare, base_power: 325 },
    // Epic
    FighterEntry { name: "Storm Caller", epithet: "Voice of Thunder", rarity: Rarity::Epic, base_power: 380 },
    FighterEntry { name: "Iron Colossus", epithet: "the Unbroken", rarity: Rarity::Epic, base_power: 400 },
    FighterEntry { name: "Night Stalker", epithet: "the Last Shadow", rarity: Rarity::Epic, base_power: 370 },
    FighterEntry { name: "Plague Doctor", epithet: "of the Silent Ward", rarity: Rarity::Epic, base_power: 360 },
    // Legendary
    FighterEntry { name: "Dragon Oracle", epithet: "Keeper of the Old Flame", rarity: Rarity::Legendary, base_power: 430 },
    FighterEntry { name: "Void Duelist", epithet: "the Starless Blade", rarity: Rarity::Legendary, base_power: 440 },
    FighterEntry { name: "Sun Paladin", epithet: "Dawn Incarnate", rarity: Rarity::Legendary, base_power: 450 },
    // Mythic
    FighterEntry { name: "World Serpent", epithet: "That Which Circles All", rarity: Rarity::Mythic, base_power: 500 },
    FighterEntry { name: "Ash Empress", epithet: "the Final Ember", rarity: Rarity::Mythic, base_power: 520 },
];

/// The full catalog
pub fn catalog() -> &'static [FighterEntry] {
    CATALOG
}

/// Find a catalog entry by name (case-insensitive)
pub fn fighter(name: &str) -> Option<&'static FighterEntry> {
    CATALOG.iter().find(|f| f.name.eq_ignore_ascii_case(name))
}
