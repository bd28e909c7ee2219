//! Availability derivation: status precedence, thresholds, over-booking.

use chrono::NaiveDate;
use eventhub_frontend::availability::{
    derive_availability, AvailabilityStatus, CARD_ALMOST_FULL_THRESHOLD,
    DETAIL_ALMOST_FULL_THRESHOLD,
};
use eventhub_frontend::models::{Category, Event};

fn sample_event(attendees: u32, max_attendees: u32) -> Event {
    Event {
        id: "evt-1".to_string(),
        title: "Sample Conference".to_string(),
        description: "A sample event".to_string(),
        full_description: "A sample event used by availability tests.".to_string(),
        category: Category::Technology,
        date: NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
        time: "9:00 AM - 6:00 PM".to_string(),
        location: "Convention Center".to_string(),
        address: "1 Main St".to_string(),
        price_cents: 10_000,
        attendees,
        max_attendees,
        image_url: String::new(),
        featured: false,
    }
}

#[test]
fn derivation_is_deterministic() {
    let event = sample_event(847, 1000);
    let first = derive_availability(&event, CARD_ALMOST_FULL_THRESHOLD);
    let second = derive_availability(&event, CARD_ALMOST_FULL_THRESHOLD);
    assert_eq!(first, second);
}

#[test]
fn plenty_of_room_is_open() {
    let availability = derive_availability(&sample_event(847, 1000), CARD_ALMOST_FULL_THRESHOLD);
    assert_eq!(availability.spots_left, 153);
    assert_eq!(availability.status, AvailabilityStatus::Open);
}

#[test]
fn almost_full_under_both_view_thresholds() {
    let event = sample_event(995, 1000);

    let on_card = derive_availability(&event, CARD_ALMOST_FULL_THRESHOLD);
    assert_eq!(on_card.spots_left, 5);
    assert_eq!(on_card.status, AvailabilityStatus::AlmostFull);

    let on_detail = derive_availability(&event, DETAIL_ALMOST_FULL_THRESHOLD);
    assert_eq!(on_detail.spots_left, 5);
    assert_eq!(on_detail.status, AvailabilityStatus::AlmostFull);
}

#[test]
fn threshold_boundary_flips_to_almost_full() {
    // Exactly at the threshold counts as almost full.
    let at = derive_availability(&sample_event(990, 1000), CARD_ALMOST_FULL_THRESHOLD);
    assert_eq!(at.spots_left, 10);
    assert_eq!(at.status, AvailabilityStatus::AlmostFull);

    let above = derive_availability(&sample_event(989, 1000), CARD_ALMOST_FULL_THRESHOLD);
    assert_eq!(above.spots_left, 11);
    assert_eq!(above.status, AvailabilityStatus::Open);
}

#[test]
fn full_house_is_sold_out_at_any_threshold() {
    let event = sample_event(1000, 1000);
    for threshold in [0, CARD_ALMOST_FULL_THRESHOLD, DETAIL_ALMOST_FULL_THRESHOLD, 1000] {
        let availability = derive_availability(&event, threshold);
        assert_eq!(availability.spots_left, 0);
        assert_eq!(availability.status, AvailabilityStatus::SoldOut);
    }
}

#[test]
fn over_booked_event_keeps_negative_spots_and_is_sold_out() {
    let availability = derive_availability(&sample_event(1005, 1000), DETAIL_ALMOST_FULL_THRESHOLD);
    assert_eq!(availability.spots_left, -5);
    assert_eq!(availability.status, AvailabilityStatus::SoldOut);
}

#[test]
fn zero_threshold_leaves_remaining_capacity_open() {
    let availability = derive_availability(&sample_event(995, 1000), 0);
    assert_eq!(availability.status, AvailabilityStatus::Open);
}
