//! QCut Client - HTTP client for the venue API
//!
//! Provides network-based calls to the QCut venue REST API: login,
//! session resolution, order history, and menu CRUD.

pub mod config;
pub mod error;
pub mod http;

pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::HttpClient;

// Re-export shared types for convenience
pub use shared::{Drink, DrinkPayload, Order, OrderFilter, User, Venue};
