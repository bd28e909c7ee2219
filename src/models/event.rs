use serde::{Deserialize, Serialize};

use crate::models::Category;

/// A catalog event. Prices are stored in cents (smallest currency unit);
/// `price_cents == 0` means the event is free to attend.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Event {
    pub id: String,
    pub title: String,
    pub description: String,
    pub full_description: String,
    pub category: Category,
    pub date: chrono::NaiveDate,
    /// Display time range, e.g. "9:00 AM - 6:00 PM".
    pub time: String,
    pub location: String,
    pub address: String,
    pub price_cents: i64,
    pub attendees: u32,
    pub max_attendees: u32,
    pub image_url: String,
    #[serde(default)]
    pub featured: bool,
}

impl Event {
    /// "Free" for zero-priced events, "$299" / "$12.50" otherwise.
    pub fn formatted_price(&self) -> String {
        if self.price_cents == 0 {
            "Free".to_string()
        } else {
            format_usd(self.price_cents)
        }
    }

    /// Card-sized date, e.g. "Mar 15, 2024".
    pub fn short_date(&self) -> String {
        self.date.format("%b %-d, %Y").to_string()
    }

    /// Detail-page date, e.g. "Friday, March 15, 2024".
    pub fn long_date(&self) -> String {
        self.date.format("%A, %B %-d, %Y").to_string()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, strum::IntoStaticStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum EventStatus {
    Published,
    Draft,
    Cancelled,
}

impl EventStatus {
    pub fn label(&self) -> &'static str {
        self.into()
    }
}

/// An event the current user organizes, as shown on the My Events screen.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct OrganizedEvent {
    pub id: String,
    pub title: String,
    pub category: Category,
    pub date: chrono::NaiveDate,
    pub time: String,
    pub location: String,
    pub attendees: u32,
    pub max_attendees: u32,
    pub revenue_cents: i64,
    pub status: EventStatus,
}

impl OrganizedEvent {
    pub fn short_date(&self) -> String {
        self.date.format("%b %-d, %Y").to_string()
    }
}

/// "$252,653" / "$12.50"; thousands separated, cents only when non-zero.
pub fn format_usd(cents: i64) -> String {
    let dollars = cents / 100;
    let rem = (cents % 100).abs();
    let digits = dollars.abs().to_string();
    let mut grouped = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    let sign = if cents < 0 { "-" } else { "" };
    if rem == 0 {
        format!("{}${}", sign, grouped)
    } else {
        format!("{}${}.{:02}", sign, grouped, rem)
    }
}
