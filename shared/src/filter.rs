//! Filter specifications
//!
//! Typed filter specs for the History and Menu views. The order filter
//! doubles as the query-string DTO for `GET /venue/orders/history`.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::DrinkCategory;

/// Order history filter
///
/// `name` and `order_id` are mutually exclusive: the text quick-filter
/// populates exactly one of them per interaction. The date window is
/// `[from, to)` with `to` an exclusive start-of-day bound.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderFilter {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub order_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<NaiveDate>,
}

impl OrderFilter {
    /// Zero-value spec: no filtering at all
    pub fn reset() -> Self {
        Self::default()
    }

    /// Whether any field is set
    pub fn is_active(&self) -> bool {
        !self.name.is_empty()
            || !self.order_id.is_empty()
            || self.from.is_some()
            || self.to.is_some()
    }

    /// Route a raw search string to the right field
    ///
    /// Input that parses entirely as an integer targets the order
    /// number; anything else targets the customer name. The other
    /// field is cleared, never merged.
    pub fn apply_search(&mut self, raw: &str) {
        let raw = raw.trim();
        if raw.parse::<i64>().is_ok() {
            self.order_id = raw.to_string();
            self.name.clear();
        } else {
            self.name = raw.to_string();
            self.order_id.clear();
        }
    }

    /// Set the `[from, to)` date window
    pub fn set_range(&mut self, from: NaiveDate, to: NaiveDate) {
        self.from = Some(from);
        self.to = Some(to);
    }
}

/// Menu filter
///
/// Category and search are mutually exclusive triggers: setting one
/// clears the other (last-writer-wins per interaction).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DrinkFilter {
    pub category: Vec<DrinkCategory>,
    pub search: String,
}

impl DrinkFilter {
    /// Zero-value spec: every non-deleted drink passes
    pub fn reset() -> Self {
        Self::default()
    }

    /// Whether any field is set
    pub fn is_active(&self) -> bool {
        !self.category.is_empty() || !self.search.is_empty()
    }

    /// Set the text search, clearing any category selection
    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
        self.category.clear();
    }

    /// Set the category selection, clearing any text search
    pub fn set_category(&mut self, categories: impl Into<Vec<DrinkCategory>>) {
        self.category = categories.into();
        self.search.clear();
    }
}
