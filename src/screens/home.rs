use dioxus::prelude::*;

use crate::app::Route;
use crate::catalog;
use crate::filter::{filter_catalog, AudienceFilter, FilterCriteria};
use crate::models::Category;
use crate::theme::AppColors;
use crate::widgets::{EventCard, Header, HeroSection, PageBackground};

/// Categories offered as quick chips on the listing (the create form offers
/// the full enumeration).
const LISTING_CATEGORIES: [Category; 6] = [
    Category::Technology,
    Category::Business,
    Category::Networking,
    Category::Education,
    Category::Music,
    Category::HealthWellness,
];

#[component]
pub fn HomeScreen(
    is_dark: bool,
    on_navigate: EventHandler<Route>,
    on_open_event: EventHandler<String>,
) -> Element {
    let mut category = use_signal(|| Option::<Category>::None);
    let mut audience = use_signal(AudienceFilter::default);

    let events = catalog::all_events();
    let criteria = FilterCriteria {
        category: category(),
        audience: audience(),
    };
    let filtered = filter_catalog(&events, &criteria);
    let featured: Vec<_> = events.iter().filter(|e| e.featured).cloned().collect();

    let on_surface = AppColors::on_surface(is_dark);
    let muted = AppColors::muted(is_dark);
    let primary = AppColors::primary(is_dark);
    let gradient = AppColors::GRADIENT_PRIMARY;
    let section_alt = if is_dark { "#1D1C22" } else { "#F6F5F8" };
    let border = if is_dark { "#3A3742" } else { "#E5E7EB" };

    let active_tab = primary;
    let bg_all = if audience() == AudienceFilter::All { active_tab } else { "transparent" };
    let bg_featured = if audience() == AudienceFilter::Featured { active_tab } else { "transparent" };
    let bg_free = if audience() == AudienceFilter::Free { active_tab } else { "transparent" };
    let bg_paid = if audience() == AudienceFilter::Paid { active_tab } else { "transparent" };
    let tab_style = format!(
        "padding: 8px 16px; border-radius: 8px; border: 1px solid {}; cursor: pointer; color: {};",
        border, on_surface
    );
    let grid_style = "display: grid; grid-template-columns: repeat(auto-fill, minmax(300px, 1fr)); gap: 24px;";

    rsx! {
        PageBackground { is_dark,
            Header { is_dark, on_navigate: move |r| on_navigate.call(r) }
            HeroSection { is_dark }

            // Featured events
            section { style: "padding: 56px 16px; background: {section_alt};",
                div { style: "max-width: 1100px; margin: 0 auto;",
                    div { style: "text-align: center; margin-bottom: 40px;",
                        span {
                            style: "display: inline-block; color: {primary}; border: 1px solid {primary}; border-radius: 999px; padding: 2px 12px; font-size: 0.85rem; margin-bottom: 12px;",
                            "📈 Featured"
                        }
                        h2 { style: "color: {on_surface}; font-size: 2.25rem; margin: 0 0 12px;", "Featured Events" }
                        p { style: "color: {muted}; font-size: 1.1rem; margin: 0;",
                            "Don't miss these handpicked events curated by our team"
                        }
                    }
                    div { style: "{grid_style}",
                        for event in featured.iter() {
                            EventCard {
                                is_dark,
                                event: event.clone(),
                                on_select: move |id| on_open_event.call(id),
                            }
                        }
                    }
                }
            }

            // All events with filters
            section { style: "padding: 56px 16px;",
                div { style: "max-width: 1100px; margin: 0 auto;",
                    h2 { style: "color: {on_surface}; font-size: 2.25rem; margin: 0 0 8px;", "All Events" }
                    p { style: "color: {muted}; font-size: 1.1rem; margin: 0 0 24px;",
                        "Browse all upcoming events in your area"
                    }

                    div { style: "display: flex; gap: 8px; margin-bottom: 24px; flex-wrap: wrap;",
                        button {
                            onclick: move |_| audience.set(AudienceFilter::All),
                            style: "{tab_style} background: {bg_all};",
                            "All Events"
                        }
                        button {
                            onclick: move |_| audience.set(AudienceFilter::Featured),
                            style: "{tab_style} background: {bg_featured};",
                            "Featured"
                        }
                        button {
                            onclick: move |_| audience.set(AudienceFilter::Free),
                            style: "{tab_style} background: {bg_free};",
                            "Free"
                        }
                        button {
                            onclick: move |_| audience.set(AudienceFilter::Paid),
                            style: "{tab_style} background: {bg_paid};",
                            "Paid"
                        }
                    }

                    div { style: "display: flex; flex-wrap: wrap; gap: 8px; margin-bottom: 32px;",
                        button {
                            onclick: move |_| category.set(None),
                            style: if category().is_none() {
                                format!("padding: 6px 14px; border-radius: 999px; border: none; cursor: pointer; background: {}; color: white;", primary)
                            } else {
                                format!("padding: 6px 14px; border-radius: 999px; border: 1px solid {}; cursor: pointer; background: transparent; color: {};", border, on_surface)
                            },
                            "All"
                        }
                        for cat in LISTING_CATEGORIES {
                            button {
                                onclick: move |_| category.set(Some(cat)),
                                style: if category() == Some(cat) {
                                    format!("padding: 6px 14px; border-radius: 999px; border: none; cursor: pointer; background: {}; color: white;", primary)
                                } else {
                                    format!("padding: 6px 14px; border-radius: 999px; border: 1px solid {}; cursor: pointer; background: transparent; color: {};", border, on_surface)
                                },
                                "{cat.label()}"
                            }
                        }
                    }

                    if filtered.is_empty() {
                        div { style: "text-align: center; padding: 48px 0;",
                            div { style: "font-size: 3rem; margin-bottom: 16px;", "📅" }
                            h3 { style: "color: {on_surface}; font-size: 1.5rem; margin: 0 0 8px;", "No events found" }
                            p { style: "color: {muted}; margin: 0 0 24px;",
                                "Try adjusting your filters or check back later for new events."
                            }
                            button {
                                onclick: move |_| {
                                    category.set(None);
                                    audience.set(AudienceFilter::All);
                                },
                                style: "padding: 10px 24px; border-radius: 8px; border: none; cursor: pointer; background: {gradient}; color: white; font-weight: 600;",
                                "Clear Filters"
                            }
                        }
                    } else {
                        div { style: "{grid_style}",
                            for event in filtered.iter() {
                                EventCard {
                                    is_dark,
                                    event: event.clone(),
                                    on_select: move |id| on_open_event.call(id),
                                }
                            }
                        }
                    }
                }
            }

            // Stats band
            section { style: "padding: 56px 16px; background: {gradient};",
                div {
                    style: "max-width: 1100px; margin: 0 auto; display: grid; grid-template-columns: repeat(auto-fit, minmax(200px, 1fr)); gap: 32px; text-align: center; color: white;",
                    div {
                        div { style: "font-size: 2.25rem; font-weight: bold;", "1000+" }
                        div { style: "font-size: 1.1rem; opacity: 0.9;", "Events Hosted" }
                    }
                    div {
                        div { style: "font-size: 2.25rem; font-weight: bold;", "50k+" }
                        div { style: "font-size: 1.1rem; opacity: 0.9;", "Happy Attendees" }
                    }
                    div {
                        div { style: "font-size: 2.25rem; font-weight: bold;", "500+" }
                        div { style: "font-size: 1.1rem; opacity: 0.9;", "Event Organizers" }
                    }
                }
            }
        }
    }
}
