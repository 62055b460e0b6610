//! Drink Category Model

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Drink category
///
/// Closed set; each category carries its own permitted size-label
/// vocabulary for the menu editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DrinkCategory {
    Spirits,
    Cocktails,
    Wines,
    #[serde(rename = "Soft Drinks")]
    SoftDrinks,
    #[serde(rename = "Beers & Bottles")]
    BeersAndBottles,
    Shots,
}

/// Unknown category label
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown drink category: {0}")]
pub struct UnknownCategory(pub String);

impl DrinkCategory {
    /// All categories, in menu display order
    pub const ALL: [DrinkCategory; 6] = [
        DrinkCategory::SoftDrinks,
        DrinkCategory::Spirits,
        DrinkCategory::Shots,
        DrinkCategory::BeersAndBottles,
        DrinkCategory::Cocktails,
        DrinkCategory::Wines,
    ];

    /// Display label, identical to the wire representation
    pub fn label(&self) -> &'static str {
        match self {
            DrinkCategory::Spirits => "Spirits",
            DrinkCategory::Cocktails => "Cocktails",
            DrinkCategory::Wines => "Wines",
            DrinkCategory::SoftDrinks => "Soft Drinks",
            DrinkCategory::BeersAndBottles => "Beers & Bottles",
            DrinkCategory::Shots => "Shots",
        }
    }

    /// Permitted size labels for new entries in this category
    pub fn size_options(&self) -> &'static [&'static str] {
        match self {
            DrinkCategory::Spirits => &["Single", "Double", "Triple", "Bottle"],
            DrinkCategory::Cocktails => &["Standard", "Large", "Pitcher", "Jug"],
            DrinkCategory::Wines => &[
                "Bottle",
                "125ml Glass",
                "175ml Glass",
                "250ml Glass",
                "500ml Bottle",
                "750ml Bottle",
                "1L Bottle",
            ],
            DrinkCategory::SoftDrinks => &["Can", "Standard", "Large", "Bottle"],
            DrinkCategory::BeersAndBottles => &[
                "Pint",
                "Half-Pint",
                "330ml Bottle",
                "500ml Bottle",
                "275ml Bottle",
                "470ml Bottle",
                "550ml Bottle",
                "640ml Bottle",
                "355ml Bottle",
            ],
            DrinkCategory::Shots => &["Single", "Double", "Triple", "Bomb"],
        }
    }
}

impl std::fmt::Display for DrinkCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for DrinkCategory {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|c| c.label() == s)
            .copied()
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}
