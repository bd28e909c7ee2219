//! Filter engine over the seeded demo catalog: identity, idempotence,
//! order preservation, and the concrete category/audience scenarios.

use pretty_assertions::assert_eq;

use eventhub_frontend::availability::{
    derive_availability, AvailabilityStatus, CARD_ALMOST_FULL_THRESHOLD,
};
use eventhub_frontend::catalog;
use eventhub_frontend::filter::{filter_catalog, AudienceFilter, FilterCriteria};
use eventhub_frontend::models::{Category, Event};

fn ids(events: &[Event]) -> Vec<&str> {
    events.iter().map(|e| e.id.as_str()).collect()
}

#[test]
fn all_all_criteria_is_the_identity() {
    let events = catalog::all_events();
    let filtered = filter_catalog(&events, &FilterCriteria::default());
    assert_eq!(filtered, events);
}

#[test]
fn filtering_is_idempotent() {
    let events = catalog::all_events();
    let criteria = FilterCriteria {
        category: None,
        audience: AudienceFilter::Paid,
    };
    let once = filter_catalog(&events, &criteria);
    let twice = filter_catalog(&once, &criteria);
    assert_eq!(once, twice);
}

#[test]
fn featured_technology_matches_only_the_summit() {
    let events = catalog::all_events();
    let criteria = FilterCriteria {
        category: Some(Category::Technology),
        audience: AudienceFilter::Featured,
    };
    let filtered = filter_catalog(&events, &criteria);
    assert_eq!(ids(&filtered), vec!["1"]);

    // 847 of 1000 attending leaves 153 spots: comfortably open on a card.
    let availability = derive_availability(&filtered[0], CARD_ALMOST_FULL_THRESHOLD);
    assert_eq!(availability.spots_left, 153);
    assert_eq!(availability.status, AvailabilityStatus::Open);
}

#[test]
fn unrepresented_category_yields_an_empty_result() {
    let events = catalog::all_events();
    let criteria = FilterCriteria {
        category: Some(Category::Charity),
        audience: AudienceFilter::All,
    };
    let filtered = filter_catalog(&events, &criteria);
    assert!(filtered.is_empty());
}

#[test]
fn free_tab_matches_zero_priced_events_only() {
    let events = catalog::all_events();
    let criteria = FilterCriteria {
        category: None,
        audience: AudienceFilter::Free,
    };
    assert_eq!(ids(&filter_catalog(&events, &criteria)), vec!["3"]);
}

#[test]
fn paid_tab_preserves_catalog_order() {
    let events = catalog::all_events();
    let criteria = FilterCriteria {
        category: None,
        audience: AudienceFilter::Paid,
    };
    assert_eq!(
        ids(&filter_catalog(&events, &criteria)),
        vec!["1", "2", "4", "5", "6"]
    );
}

#[test]
fn featured_tab_matches_flagged_events_in_order() {
    let events = catalog::all_events();
    let criteria = FilterCriteria {
        category: None,
        audience: AudienceFilter::Featured,
    };
    assert_eq!(ids(&filter_catalog(&events, &criteria)), vec!["1", "4"]);
}

#[test]
fn category_predicate_alone_narrows_the_catalog() {
    let events = catalog::all_events();
    let criteria = FilterCriteria {
        category: Some(Category::Music),
        audience: AudienceFilter::All,
    };
    assert_eq!(ids(&filter_catalog(&events, &criteria)), vec!["5"]);
}

#[test]
fn filtering_does_not_mutate_the_input() {
    let events = catalog::all_events();
    let before = events.clone();
    let _ = filter_catalog(
        &events,
        &FilterCriteria {
            category: Some(Category::Business),
            audience: AudienceFilter::Paid,
        },
    );
    assert_eq!(events, before);
}
