//! Catalog filtering: category and audience predicates ANDed over the ordered
//! event list. Stable - input order is preserved and the input is never mutated.

use crate::models::{Category, Event};

/// Quick-filter tabs over price/featured status.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AudienceFilter {
    #[default]
    All,
    Featured,
    Free,
    Paid,
}

/// Owned by the screens; passed by value on every recomputation.
/// `category: None` is the "All" sentinel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub category: Option<Category>,
    pub audience: AudienceFilter,
}

/// The ordered subsequence of `events` matching both predicates. An empty
/// result is a valid outcome, not an error.
pub fn filter_catalog(events: &[Event], criteria: &FilterCriteria) -> Vec<Event> {
    events
        .iter()
        .filter(|event| matches(event, criteria))
        .cloned()
        .collect()
}

fn matches(event: &Event, criteria: &FilterCriteria) -> bool {
    let category_match = match criteria.category {
        None => true,
        Some(category) => event.category == category,
    };
    let audience_match = match criteria.audience {
        AudienceFilter::All => true,
        AudienceFilter::Featured => event.featured,
        AudienceFilter::Free => event.price_cents == 0,
        AudienceFilter::Paid => event.price_cents > 0,
    };
    category_match && audience_match
}
