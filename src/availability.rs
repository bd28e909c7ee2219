//! Remaining-capacity derivation for an event. Pure, no side effects:
//! the same (attendees, max_attendees, threshold) always yields the same result.

use serde::{Deserialize, Serialize};

use crate::models::Event;

/// Spots-left value at or below which a listing card flips to AlmostFull.
pub const CARD_ALMOST_FULL_THRESHOLD: i64 = 10;
/// Spots-left value at or below which the detail page flips to AlmostFull.
pub const DETAIL_ALMOST_FULL_THRESHOLD: i64 = 50;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AvailabilityStatus {
    Open,
    AlmostFull,
    SoldOut,
}

/// Computed fresh on every read; never stored on the event itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Availability {
    /// `max_attendees - attendees`. Negative when over-booked; callers see the
    /// raw value, classification alone absorbs the anomaly.
    pub spots_left: i64,
    pub status: AvailabilityStatus,
}

/// Classify remaining capacity. SoldOut takes precedence over the threshold
/// check, so an over-booked event is SoldOut at any threshold.
pub fn derive_availability(event: &Event, almost_full_threshold: i64) -> Availability {
    let spots_left = i64::from(event.max_attendees) - i64::from(event.attendees);
    let status = if spots_left <= 0 {
        AvailabilityStatus::SoldOut
    } else if spots_left <= almost_full_threshold {
        AvailabilityStatus::AlmostFull
    } else {
        AvailabilityStatus::Open
    };
    Availability { spots_left, status }
}
