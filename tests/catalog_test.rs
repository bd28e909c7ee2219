//! Catalog store tests: seed order, lookup, publishing, JSON ingest.
//! Run with: cargo test -- --test-threads=1 (the global catalog is shared).

use chrono::NaiveDate;
use eventhub_frontend::catalog::{self, CatalogError, EventDraft};
use eventhub_frontend::models::Category;

fn sample_draft() -> EventDraft {
    EventDraft {
        title: "Rooftop Jazz Evening".to_string(),
        description: "An intimate evening of live jazz above the city.".to_string(),
        full_description: "Two sets, one intermission, cash bar.".to_string(),
        category: Category::Music,
        date: NaiveDate::from_ymd_opt(2024, 7, 12).unwrap(),
        time: "7:00 PM - 10:00 PM".to_string(),
        location: "Harbor Rooftop".to_string(),
        address: "12 Pier Ave".to_string(),
        price_cents: 4_500,
        max_attendees: 80,
        image_url: String::new(),
    }
}

#[test]
fn seeded_catalog_keeps_its_order() {
    catalog::reset();

    let events = catalog::all_events();
    assert_eq!(events.len(), 6);
    let ids: Vec<&str> = events.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "2", "3", "4", "5", "6"]);
    assert_eq!(events[0].title, "Tech Innovation Summit 2024");
    assert!(events[0].featured);
}

#[test]
fn get_event_finds_by_id() {
    catalog::reset();

    let event = catalog::get_event("3").expect("seed event 3 exists");
    assert_eq!(event.title, "Startup Networking Night");
    assert_eq!(event.price_cents, 0);

    assert!(catalog::get_event("no-such-event").is_none());
}

#[test]
fn add_event_appends_a_fresh_record() {
    catalog::reset();

    let published = catalog::add_event(sample_draft()).expect("valid draft publishes");
    assert!(!published.id.is_empty());
    assert_eq!(published.attendees, 0);
    assert!(!published.featured);

    assert_eq!(catalog::event_count(), 7);
    let events = catalog::all_events();
    assert_eq!(events.last().unwrap().id, published.id);
    assert_eq!(catalog::get_event(&published.id), Some(published));

    catalog::reset();
}

#[test]
fn add_event_rejects_zero_capacity() {
    catalog::reset();

    let mut draft = sample_draft();
    draft.max_attendees = 0;
    let err = catalog::add_event(draft).unwrap_err();
    assert!(matches!(err, CatalogError::InvalidDraft { .. }));
    assert_eq!(catalog::event_count(), 6);
}

#[test]
fn add_event_rejects_negative_price() {
    catalog::reset();

    let mut draft = sample_draft();
    draft.price_cents = -100;
    let err = catalog::add_event(draft).unwrap_err();
    assert!(matches!(err, CatalogError::InvalidDraft { .. }));
    assert_eq!(catalog::event_count(), 6);
}

#[test]
fn load_from_json_replaces_the_catalog() {
    catalog::reset();

    let json = r#"[
        {
            "id": "a",
            "title": "Food Truck Friday",
            "description": "Street food from a dozen local kitchens.",
            "full_description": "Street food from a dozen local kitchens, every Friday.",
            "category": "Food & Drink",
            "date": "2024-06-07",
            "time": "11:00 AM - 3:00 PM",
            "location": "Market Square",
            "address": "1 Market Sq",
            "price_cents": 0,
            "attendees": 120,
            "max_attendees": 400,
            "image_url": ""
        },
        {
            "id": "b",
            "title": "City Marathon",
            "description": "The annual 42k through the old town.",
            "full_description": "The annual 42k through the old town, all levels welcome.",
            "category": "Sports",
            "date": "2024-09-01",
            "time": "6:00 AM - 2:00 PM",
            "location": "Old Town",
            "address": "Start line, Main Gate",
            "price_cents": 3500,
            "attendees": 2200,
            "max_attendees": 3000,
            "image_url": "",
            "featured": true
        }
    ]"#;

    let count = catalog::load_from_json(json).expect("well-formed catalog loads");
    assert_eq!(count, 2);
    assert_eq!(catalog::event_count(), 2);

    let marathon = catalog::get_event("b").expect("loaded record is queryable");
    assert_eq!(marathon.category, Category::Sports);
    assert!(marathon.featured);
    // The featured flag defaults to false when the field is absent.
    assert!(!catalog::get_event("a").unwrap().featured);

    catalog::reset();
}

#[test]
fn load_from_json_rejects_unknown_categories_at_parse() {
    catalog::reset();

    let json = r#"[{
        "id": "x",
        "title": "Mystery Meetup",
        "description": "d",
        "full_description": "fd",
        "category": "Séances",
        "date": "2024-06-07",
        "time": "8:00 PM",
        "location": "Somewhere",
        "address": "?",
        "price_cents": 0,
        "attendees": 0,
        "max_attendees": 10,
        "image_url": ""
    }]"#;

    let err = catalog::load_from_json(json).unwrap_err();
    assert!(matches!(err, CatalogError::Parse(_)));
    // A failed load leaves the catalog untouched.
    assert_eq!(catalog::event_count(), 6);
}

#[test]
fn load_from_json_rejects_zero_capacity_records() {
    catalog::reset();

    let json = r#"[{
        "id": "bad-capacity",
        "title": "Ghost Event",
        "description": "d",
        "full_description": "fd",
        "category": "Music",
        "date": "2024-06-07",
        "time": "8:00 PM",
        "location": "Nowhere",
        "address": "?",
        "price_cents": 1000,
        "attendees": 0,
        "max_attendees": 0,
        "image_url": ""
    }]"#;

    match catalog::load_from_json(json).unwrap_err() {
        CatalogError::InvalidRecord { id, .. } => assert_eq!(id, "bad-capacity"),
        other => panic!("expected InvalidRecord, got {:?}", other),
    }
    assert_eq!(catalog::event_count(), 6);
}

#[test]
fn reset_restores_the_seed() {
    catalog::reset();
    catalog::add_event(sample_draft()).unwrap();
    assert_eq!(catalog::event_count(), 7);

    catalog::reset();
    assert_eq!(catalog::event_count(), 6);
    assert!(catalog::get_event("1").is_some());
}
