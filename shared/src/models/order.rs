//! Order Model

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Customer snapshot embedded in an order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderCustomer {
    pub name: String,
}

/// Order entity (read-only on the dashboard side)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    /// Human-facing order number
    pub order_id: i64,
    pub customer: OrderCustomer,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Total in currency unit
    pub total_price: Decimal,
    pub table_number: i32,
}
