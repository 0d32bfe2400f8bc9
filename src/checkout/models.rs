//! Checkout Models

use jiff::{Timestamp, civil::Date};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Where and when the order should be delivered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryDetails {
    pub address: String,
    pub preferred_date: Option<Date>,
    pub instructions: Option<String>,
}

/// Summary of a placed order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderConfirmation {
    /// Total quantity across the cart at checkout.
    pub items: u64,

    pub total: Decimal,
    pub delivery: DeliveryDetails,
    pub placed_at: Timestamp,
}
