//! Data models
//!
//! Entities exchanged with the venue API. All types are plain serde
//! structs; payload companions follow the entity they create or update.

mod category;
mod drink;
mod order;
mod user;
mod venue;

pub use category::{DrinkCategory, UnknownCategory};
pub use drink::{Drink, DrinkPayload, DrinkSize};
pub use order::{Order, OrderCustomer};
pub use user::User;
pub use venue::Venue;
