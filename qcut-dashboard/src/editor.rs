//! Drink editor
//!
//! Form state for the add/update drink modal. The size sub-editor
//! owns the row invariant: the list always holds every complete entry
//! plus exactly one trailing input row, maintained by the mutators
//! rather than recomputed at render time.

use rust_decimal::Decimal;
use shared::{Drink, DrinkCategory, DrinkPayload, DrinkSize};
use std::str::FromStr;

/// One editable (size, price) row, both fields free text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SizeRow {
    pub size: String,
    pub price: String,
}

impl SizeRow {
    /// Complete rows have a size label and a parseable price
    pub fn is_complete(&self) -> bool {
        !self.size.is_empty() && Decimal::from_str(self.price.trim()).is_ok()
    }

    fn entry(&self) -> Option<DrinkSize> {
        if self.size.is_empty() {
            return None;
        }
        Decimal::from_str(self.price.trim()).ok().map(|price| DrinkSize {
            size: self.size.clone(),
            price,
        })
    }
}

/// Variable-length list of size rows
///
/// Invariant: the last row is the open input row; completing it
/// appends a fresh blank one, so there is always exactly one more row
/// than there are complete entries.
#[derive(Debug, Clone)]
pub struct SizeEditor {
    rows: Vec<SizeRow>,
}

impl Default for SizeEditor {
    fn default() -> Self {
        Self::new()
    }
}

impl SizeEditor {
    pub fn new() -> Self {
        Self {
            rows: vec![SizeRow::default()],
        }
    }

    /// Seed the editor from an existing drink's sizes
    pub fn from_sizes(sizes: &[DrinkSize]) -> Self {
        let mut rows: Vec<SizeRow> = sizes
            .iter()
            .map(|s| SizeRow {
                size: s.size.clone(),
                price: s.price.to_string(),
            })
            .collect();
        rows.push(SizeRow::default());
        Self { rows }
    }

    pub fn rows(&self) -> &[SizeRow] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Set the size label of one row in place; never reorders
    pub fn set_size(&mut self, index: usize, value: impl Into<String>) {
        if let Some(row) = self.rows.get_mut(index) {
            row.size = value.into();
            self.normalize();
        }
    }

    /// Set the price text of one row in place; never reorders
    pub fn set_price(&mut self, index: usize, value: impl Into<String>) {
        if let Some(row) = self.rows.get_mut(index) {
            row.price = value.into();
            self.normalize();
        }
    }

    /// Remove a complete row, shifting the rest up
    ///
    /// Only complete rows are removable; returns whether a row was
    /// removed.
    pub fn remove(&mut self, index: usize) -> bool {
        match self.rows.get(index) {
            Some(row) if row.is_complete() => {
                self.rows.remove(index);
                self.normalize();
                true
            }
            _ => false,
        }
    }

    /// The complete entries, in position order
    pub fn complete_entries(&self) -> Vec<DrinkSize> {
        self.rows.iter().filter_map(SizeRow::entry).collect()
    }

    fn normalize(&mut self) {
        if self.rows.last().is_none_or(SizeRow::is_complete) {
            self.rows.push(SizeRow::default());
        }
    }
}

/// Add/update drink form
///
/// `drink_id` distinguishes the update form (pre-seeded from an
/// existing drink) from the add form.
#[derive(Debug, Clone)]
pub struct DrinkEditor {
    drink_id: Option<String>,
    pub category: Option<DrinkCategory>,
    pub name: String,
    pub abv: String,
    pub is_popular: bool,
    pub in_stock: bool,
    pub sizes: SizeEditor,
}

impl DrinkEditor {
    /// Blank form for adding a drink
    pub fn new() -> Self {
        Self {
            drink_id: None,
            category: None,
            name: String::new(),
            abv: String::new(),
            is_popular: true,
            in_stock: true,
            sizes: SizeEditor::new(),
        }
    }

    /// Form pre-seeded from an existing drink
    pub fn from_drink(drink: &Drink) -> Self {
        Self {
            drink_id: Some(drink.id.clone()),
            category: Some(drink.category),
            name: drink.name.clone(),
            abv: drink.abv.clone(),
            is_popular: drink.is_popular,
            in_stock: drink.in_stock,
            sizes: SizeEditor::from_sizes(&drink.sizes),
        }
    }

    pub fn drink_id(&self) -> Option<&str> {
        self.drink_id.as_deref()
    }

    pub fn is_update(&self) -> bool {
        self.drink_id.is_some()
    }

    /// Change the category without touching existing size rows
    ///
    /// Rows whose size label is not in the new category's vocabulary
    /// are left as free text; they are not auto-corrected.
    pub fn set_category(&mut self, category: DrinkCategory) {
        self.category = Some(category);
    }

    /// Permitted size labels for new rows, per the selected category
    pub fn size_options(&self) -> &'static [&'static str] {
        self.category.map(|c| c.size_options()).unwrap_or(&[])
    }

    /// Build the mutation payload from the current form values
    ///
    /// `None` until a category is selected; the remote API is the
    /// validator for everything else. The size list carries exactly
    /// the complete entries.
    pub fn payload(&self) -> Option<DrinkPayload> {
        Some(DrinkPayload {
            category: self.category?,
            name: self.name.clone(),
            abv: self.abv.clone(),
            is_popular: self.is_popular,
            in_stock: self.in_stock,
            sizes: self.sizes.complete_entries(),
        })
    }
}

impl Default for DrinkEditor {
    fn default() -> Self {
        Self::new()
    }
}
