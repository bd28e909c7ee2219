use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, strum::IntoStaticStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum OrderStatus {
    Confirmed,
    Pending,
}

impl OrderStatus {
    pub fn label(&self) -> &'static str {
        self.into()
    }
}

/// A ticket order for an event the current user attends.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct TicketOrder {
    pub id: String,
    pub event_id: String,
    pub event_title: String,
    pub event_date: chrono::NaiveDate,
    pub event_time: String,
    pub location: String,
    pub ticket_type: String,
    pub price_cents: i64,
    pub quantity: u32,
    pub order_date: chrono::NaiveDate,
    pub status: OrderStatus,
}

impl TicketOrder {
    /// Quantity times unit price, in cents.
    pub fn total_cents(&self) -> i64 {
        self.price_cents * i64::from(self.quantity)
    }

    pub fn short_event_date(&self) -> String {
        self.event_date.format("%b %-d, %Y").to_string()
    }

    pub fn short_order_date(&self) -> String {
        self.order_date.format("%b %-d, %Y").to_string()
    }
}
