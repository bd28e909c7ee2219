//! In-memory event catalog seeded with demo data. Stands in for a backend
//! fetch; nothing is persisted. Catalog order is insertion order.

use std::fmt;
use std::sync::Mutex;

use chrono::NaiveDate;

use crate::models::{Category, Event};

static CATALOG: once_cell::sync::Lazy<Mutex<Vec<Event>>> =
    once_cell::sync::Lazy::new(|| Mutex::new(seed_events()));

#[derive(Debug)]
pub enum CatalogError {
    Parse(serde_json::Error),
    /// A structurally valid record that violates a catalog invariant.
    InvalidRecord { id: String, reason: &'static str },
    InvalidDraft { reason: &'static str },
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Parse(e) => write!(f, "catalog parse failed: {}", e),
            CatalogError::InvalidRecord { id, reason } => {
                write!(f, "invalid catalog record \"{}\": {}", id, reason)
            }
            CatalogError::InvalidDraft { reason } => write!(f, "invalid event draft: {}", reason),
        }
    }
}

impl std::error::Error for CatalogError {}

impl From<serde_json::Error> for CatalogError {
    fn from(e: serde_json::Error) -> Self {
        CatalogError::Parse(e)
    }
}

/// Everything the create-event form collects; id, attendee count and featured
/// flag are assigned by the catalog on insert.
#[derive(Clone, Debug, PartialEq)]
pub struct EventDraft {
    pub title: String,
    pub description: String,
    pub full_description: String,
    pub category: Category,
    pub date: NaiveDate,
    pub time: String,
    pub location: String,
    pub address: String,
    pub price_cents: i64,
    pub max_attendees: u32,
    pub image_url: String,
}

/// Snapshot of the catalog in its canonical order.
pub fn all_events() -> Vec<Event> {
    CATALOG.lock().unwrap().clone()
}

pub fn get_event(id: &str) -> Option<Event> {
    CATALOG.lock().unwrap().iter().find(|e| e.id == id).cloned()
}

pub fn event_count() -> usize {
    CATALOG.lock().unwrap().len()
}

/// Publish a new event at the end of the catalog. Drafts that violate the
/// catalog invariants are rejected here, at the boundary, so the pure
/// derivation code never sees them.
pub fn add_event(draft: EventDraft) -> Result<Event, CatalogError> {
    if draft.max_attendees == 0 {
        return Err(CatalogError::InvalidDraft {
            reason: "max attendees must be at least 1",
        });
    }
    if draft.price_cents < 0 {
        return Err(CatalogError::InvalidDraft {
            reason: "price cannot be negative",
        });
    }

    let event = Event {
        id: uuid::Uuid::new_v4().to_string(),
        title: draft.title,
        description: draft.description,
        full_description: draft.full_description,
        category: draft.category,
        date: draft.date,
        time: draft.time,
        location: draft.location,
        address: draft.address,
        price_cents: draft.price_cents,
        attendees: 0,
        max_attendees: draft.max_attendees,
        image_url: draft.image_url,
        featured: false,
    };
    log::info!("publishing event {} ({})", event.id, event.title);
    CATALOG.lock().unwrap().push(event.clone());
    Ok(event)
}

/// Replace the catalog with a JSON array of events. Every record is validated
/// on the way in; the first malformed one fails the whole load so a bad feed
/// cannot be half-installed.
pub fn load_from_json(json: &str) -> Result<usize, CatalogError> {
    let events: Vec<Event> = serde_json::from_str(json)?;
    for event in &events {
        if let Err(reason) = validate_record(event) {
            log::warn!("rejecting catalog record \"{}\": {}", event.id, reason);
            return Err(CatalogError::InvalidRecord {
                id: event.id.clone(),
                reason,
            });
        }
    }
    let count = events.len();
    *CATALOG.lock().unwrap() = events;
    log::info!("catalog loaded: {} events", count);
    Ok(count)
}

/// Restore the seeded demo catalog (used by tests).
pub fn reset() {
    *CATALOG.lock().unwrap() = seed_events();
}

fn validate_record(event: &Event) -> Result<(), &'static str> {
    if event.id.is_empty() {
        return Err("empty id");
    }
    if event.max_attendees == 0 {
        return Err("max attendees must be at least 1");
    }
    if event.price_cents < 0 {
        return Err("price cannot be negative");
    }
    Ok(())
}

fn d(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn seed_events() -> Vec<Event> {
    vec![
        Event {
            id: "1".to_string(),
            title: "Tech Innovation Summit 2024".to_string(),
            description: "Join industry leaders to explore the latest in AI, blockchain, and emerging technologies.".to_string(),
            full_description: "The Tech Innovation Summit is a premier event bringing together technology leaders, innovators, and visionaries from around the world. This full-day conference features keynote presentations, panel discussions, networking sessions, and hands-on workshops covering the latest developments in artificial intelligence, blockchain, cloud computing, and emerging technologies.\n\nAttendees will have the opportunity to:\n• Learn from 20+ industry experts and thought leaders\n• Participate in interactive workshops and breakout sessions\n• Network with 500+ tech professionals and entrepreneurs\n• Explore cutting-edge technology demonstrations\n• Access exclusive content and resources\n\nWhether you're a startup founder, enterprise executive, developer, or tech enthusiast, this summit will provide valuable insights and connections to advance your career and business.".to_string(),
            category: Category::Technology,
            date: d(2024, 3, 15),
            time: "9:00 AM - 6:00 PM".to_string(),
            location: "San Francisco Convention Center".to_string(),
            address: "747 Howard St, San Francisco, CA 94103".to_string(),
            price_cents: 29900,
            attendees: 847,
            max_attendees: 1000,
            image_url: "https://images.unsplash.com/photo-1540575467063-178a50c2df87?w=800&h=400&fit=crop".to_string(),
            featured: true,
        },
        Event {
            id: "2".to_string(),
            title: "Digital Marketing Masterclass".to_string(),
            description: "Learn advanced strategies for social media, SEO, and conversion optimization.".to_string(),
            full_description: "A focused single-day masterclass for marketers who want measurable results. Morning sessions cover organic growth: content strategy, SEO fundamentals, and social media playbooks that still work. The afternoon turns to paid acquisition and conversion optimization, with live teardowns of real landing pages submitted by attendees.".to_string(),
            category: Category::Business,
            date: d(2024, 3, 20),
            time: "10:00 AM - 4:00 PM".to_string(),
            location: "Marina Bay Sands".to_string(),
            address: "10 Bayfront Ave, Singapore 018956".to_string(),
            price_cents: 19900,
            attendees: 234,
            max_attendees: 300,
            image_url: "https://images.unsplash.com/photo-1557804506-669a67965ba0?w=800&h=400&fit=crop".to_string(),
            featured: false,
        },
        Event {
            id: "3".to_string(),
            title: "Startup Networking Night".to_string(),
            description: "Connect with entrepreneurs, investors, and innovators in the startup ecosystem.".to_string(),
            full_description: "An open evening for the startup community. No talks, no panels: just founders, operators, and investors in one room with name tags and good coffee. Bring a pitch if you have one, bring questions if you don't. Hosted monthly; first-timers welcome.".to_string(),
            category: Category::Networking,
            date: d(2024, 2, 28),
            time: "6:00 PM - 9:00 PM".to_string(),
            location: "WeWork Downtown".to_string(),
            address: "428 Market St, San Francisco, CA 94111".to_string(),
            price_cents: 0,
            attendees: 156,
            max_attendees: 200,
            image_url: "https://images.unsplash.com/photo-1515187029135-18ee286d815b?w=800&h=400&fit=crop".to_string(),
            featured: false,
        },
        Event {
            id: "4".to_string(),
            title: "AI & Machine Learning Workshop".to_string(),
            description: "Hands-on workshop covering neural networks, deep learning, and practical applications.".to_string(),
            full_description: "Bring a laptop: this is a hands-on afternoon, not a lecture. We start with neural-network fundamentals, then build and train a small model end to end, and close with a practical session on deploying models behind an API. All course material and notebooks are yours to keep.".to_string(),
            category: Category::Education,
            date: d(2024, 4, 10),
            time: "2:00 PM - 6:00 PM".to_string(),
            location: "Tech Hub Center".to_string(),
            address: "1200 Mission St, San Francisco, CA 94103".to_string(),
            price_cents: 14900,
            attendees: 89,
            max_attendees: 120,
            image_url: "https://images.unsplash.com/photo-1485827404703-89b55fcc595e?w=800&h=400&fit=crop".to_string(),
            featured: true,
        },
        Event {
            id: "5".to_string(),
            title: "Music Festival Downtown".to_string(),
            description: "Three days of incredible live music featuring local and international artists.".to_string(),
            full_description: "Three stages, three days, forty acts. The downtown festival returns with headline sets every evening, a local-artists stage running all afternoon, and a family-friendly lawn with food trucks and craft stalls. Single-day wristbands are available at the gate; this ticket covers all three days.".to_string(),
            category: Category::Music,
            date: d(2024, 5, 15),
            time: "12:00 PM - 11:00 PM".to_string(),
            location: "Central Park Amphitheater".to_string(),
            address: "830 5th Ave, New York, NY 10065".to_string(),
            price_cents: 8900,
            attendees: 2341,
            max_attendees: 5000,
            image_url: "https://images.unsplash.com/photo-1470225620780-dba8ba36b745?w=800&h=400&fit=crop".to_string(),
            featured: false,
        },
        Event {
            id: "6".to_string(),
            title: "Health & Wellness Expo".to_string(),
            description: "Discover the latest in fitness, nutrition, and mental health with expert speakers.".to_string(),
            full_description: "A full day across two halls: fitness demonstrations and equipment showcases in one, nutrition and mental-health programming in the other. Talks run every hour, with open Q&A after each. Entry includes access to all talks and the vendor floor.".to_string(),
            category: Category::HealthWellness,
            date: d(2024, 3, 25),
            time: "9:00 AM - 5:00 PM".to_string(),
            location: "Convention Center Hall B".to_string(),
            address: "255 S King St, Seattle, WA 98104".to_string(),
            price_cents: 2500,
            attendees: 445,
            max_attendees: 600,
            image_url: "https://images.unsplash.com/photo-1571019613454-1cb2f99b2d8b?w=800&h=400&fit=crop".to_string(),
            featured: false,
        },
    ]
}
