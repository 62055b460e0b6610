//! Shared types for the QCut venue dashboard
//!
//! Data models and filter specifications used by both the API client
//! and the dashboard core.

pub mod filter;
pub mod models;

pub use filter::{DrinkFilter, OrderFilter};
pub use models::{
    Drink, DrinkCategory, DrinkPayload, DrinkSize, Order, OrderCustomer, User, Venue,
};
pub use serde::{Deserialize, Serialize};
