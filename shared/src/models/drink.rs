//! Drink Model

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::category::DrinkCategory;

/// One purchasable size of a drink
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrinkSize {
    pub size: String,
    /// Price in currency unit
    pub price: Decimal,
}

/// Drink entity
///
/// Removal is a soft delete: the record stays in the remote collection
/// with `deleted` set and is excluded from display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Drink {
    pub id: String,
    pub category: DrinkCategory,
    pub name: String,
    /// ABV percentage, free text as entered by the operator
    pub abv: String,
    pub is_popular: bool,
    pub in_stock: bool,
    #[serde(default)]
    pub deleted: bool,
    #[serde(default)]
    pub sizes: Vec<DrinkSize>,
    pub updated_at: DateTime<Utc>,
}

/// Add/update drink payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DrinkPayload {
    pub category: DrinkCategory,
    pub name: String,
    pub abv: String,
    pub is_popular: bool,
    pub in_stock: bool,
    pub sizes: Vec<DrinkSize>,
}
