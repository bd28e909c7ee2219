use dioxus::prelude::*;

use crate::availability::{derive_availability, AvailabilityStatus, DETAIL_ALMOST_FULL_THRESHOLD};
use crate::booking::{clamp_ticket_quantity, order_total_cents};
use crate::models::{format_usd, Event};
use crate::theme::AppColors;
use crate::widgets::{PageBackground, SurfaceCard};

#[derive(Clone, Copy, PartialEq)]
enum DetailTab {
    Overview,
    Speakers,
    Location,
    Reviews,
}

struct Speaker {
    name: &'static str,
    role: &'static str,
    topic: &'static str,
}

// Demo organizer/speaker lineup; a real backend would attach these per event.
const ORGANIZER_NAME: &str = "TechEvents Inc.";
const ORGANIZER_RATING: &str = "4.8";
const ORGANIZER_EVENTS_HOSTED: u32 = 25;

const SPEAKERS: [Speaker; 2] = [
    Speaker {
        name: "Sarah Chen",
        role: "CTO, InnovateTech",
        topic: "The Future of AI in Enterprise",
    },
    Speaker {
        name: "Marcus Rodriguez",
        role: "Founder, BlockchainVentures",
        topic: "Decentralized Finance Revolution",
    },
];

#[component]
pub fn EventDetailScreen(is_dark: bool, event: Event, on_back: EventHandler<()>) -> Element {
    let mut tickets = use_signal(|| 1u32);
    let mut bookmarked = use_signal(|| false);
    let mut tab = use_signal(|| DetailTab::Overview);
    let mut notice = use_signal(|| Option::<String>::None);

    let availability = derive_availability(&event, DETAIL_ALMOST_FULL_THRESHOLD);
    let is_full = availability.status == AvailabilityStatus::SoldOut;
    let is_almost_full = availability.status == AvailabilityStatus::AlmostFull;

    let qty = tickets();
    let total = format_usd(order_total_cents(event.price_cents, qty));
    let price = event.formatted_price();
    let long_date = event.long_date();
    let category = event.category.label();
    let title_for_booking = event.title.clone();
    let paragraphs: Vec<String> = event
        .full_description
        .split('\n')
        .filter(|p| !p.is_empty())
        .map(String::from)
        .collect();

    let on_surface = AppColors::on_surface(is_dark);
    let muted = AppColors::muted(is_dark);
    let primary = AppColors::primary(is_dark);
    let success = AppColors::success(is_dark);
    let error = AppColors::error(is_dark);
    let border = if is_dark { "#3A3742" } else { "#E5E7EB" };
    let gradient = AppColors::GRADIENT_PRIMARY;

    let tab_style = format!(
        "padding: 8px 16px; border-radius: 8px; border: 1px solid {}; cursor: pointer; color: {};",
        border, on_surface
    );
    let bg_overview = if tab() == DetailTab::Overview { primary } else { "transparent" };
    let bg_speakers = if tab() == DetailTab::Speakers { primary } else { "transparent" };
    let bg_location = if tab() == DetailTab::Location { primary } else { "transparent" };
    let bg_reviews = if tab() == DetailTab::Reviews { primary } else { "transparent" };

    let stepper_style = format!(
        "width: 32px; height: 32px; border-radius: 8px; border: 1px solid {}; background: transparent; color: {}; cursor: pointer;",
        border, on_surface
    );
    let book_label = if is_full {
        "Sold Out".to_string()
    } else {
        format!("Book {} Ticket{}", qty, if qty > 1 { "s" } else { "" })
    };

    rsx! {
        PageBackground { is_dark,
            // Hero header
            div { style: "position: relative; height: 380px; overflow: hidden;",
                img {
                    src: "{event.image_url}",
                    alt: "{event.title}",
                    style: "width: 100%; height: 100%; object-fit: cover; display: block;",
                }
                div {
                    style: "position: absolute; inset: 0; background: linear-gradient(to top, rgba(0,0,0,0.8), rgba(0,0,0,0.35), transparent);",
                }
                div { style: "position: absolute; top: 16px; left: 16px; right: 16px; display: flex; justify-content: space-between;",
                    button {
                        onclick: move |_| on_back.call(()),
                        style: "padding: 8px 16px; border-radius: 8px; border: none; cursor: pointer; background: rgba(255,255,255,0.9); color: #1C1B22;",
                        "← Back to Events"
                    }
                    div { style: "display: flex; gap: 8px;",
                        button {
                            onclick: move |_| {
                                notice.set(Some("Event link has been copied to your clipboard.".to_string()));
                            },
                            style: "padding: 8px 12px; border-radius: 8px; border: none; cursor: pointer; background: rgba(255,255,255,0.9); color: #1C1B22;",
                            "↗ Share"
                        }
                        button {
                            onclick: move |_| {
                                let now_bookmarked = !bookmarked();
                                bookmarked.set(now_bookmarked);
                                notice.set(Some(if now_bookmarked {
                                    "Event saved to your bookmarks.".to_string()
                                } else {
                                    "Event removed from your saved events.".to_string()
                                }));
                            },
                            style: if bookmarked() {
                                "padding: 8px 12px; border-radius: 8px; border: none; cursor: pointer; background: rgba(255,255,255,0.9); color: #DC2626;".to_string()
                            } else {
                                "padding: 8px 12px; border-radius: 8px; border: none; cursor: pointer; background: rgba(255,255,255,0.9); color: #1C1B22;".to_string()
                            },
                            if bookmarked() { "♥" } else { "♡" }
                        }
                    }
                }
                div { style: "position: absolute; bottom: 0; left: 0; right: 0; padding: 24px; color: white;",
                    div { style: "max-width: 1100px; margin: 0 auto;",
                        div { style: "display: flex; flex-wrap: wrap; gap: 8px; margin-bottom: 16px;",
                            span {
                                style: "background: {primary}; color: white; padding: 3px 12px; border-radius: 999px; font-size: 0.85rem;",
                                "{category}"
                            }
                            if event.featured {
                                span {
                                    style: "background: {gradient}; color: white; padding: 3px 12px; border-radius: 999px; font-size: 0.85rem;",
                                    "Featured Event"
                                }
                            }
                            if is_almost_full {
                                span {
                                    style: "background: {error}; color: white; padding: 3px 12px; border-radius: 999px; font-size: 0.85rem;",
                                    "Almost Full - {availability.spots_left} spots left"
                                }
                            }
                        }
                        h1 { style: "font-size: 2.5rem; margin: 0 0 16px;", "{event.title}" }
                        div { style: "display: flex; flex-wrap: wrap; gap: 24px; font-size: 1.05rem;",
                            span { "📅 {long_date}" }
                            span { "🕐 {event.time}" }
                            span { "📍 {event.location}" }
                        }
                    }
                }
            }

            div { style: "max-width: 1100px; margin: 0 auto; padding: 32px 16px; display: grid; grid-template-columns: 2fr 1fr; gap: 32px;",
                // Main column: info tabs
                div {
                    div { style: "display: flex; gap: 8px; margin-bottom: 24px; flex-wrap: wrap;",
                        button {
                            onclick: move |_| tab.set(DetailTab::Overview),
                            style: "{tab_style} background: {bg_overview};",
                            "Overview"
                        }
                        button {
                            onclick: move |_| tab.set(DetailTab::Speakers),
                            style: "{tab_style} background: {bg_speakers};",
                            "Speakers"
                        }
                        button {
                            onclick: move |_| tab.set(DetailTab::Location),
                            style: "{tab_style} background: {bg_location};",
                            "Location"
                        }
                        button {
                            onclick: move |_| tab.set(DetailTab::Reviews),
                            style: "{tab_style} background: {bg_reviews};",
                            "Reviews"
                        }
                    }

                    {match tab() {
                        DetailTab::Overview => rsx! {
                            SurfaceCard { is_dark,
                                h2 { style: "color: {on_surface}; margin: 0 0 16px;", "About This Event" }
                                for paragraph in paragraphs.iter() {
                                    p { style: "color: {muted}; margin: 0 0 16px; white-space: pre-line;", "{paragraph}" }
                                }
                            }
                        },
                        DetailTab::Speakers => rsx! {
                            SurfaceCard { is_dark,
                                h2 { style: "color: {on_surface}; margin: 0 0 16px;", "Featured Speakers" }
                                div { style: "display: grid; grid-template-columns: repeat(auto-fill, minmax(260px, 1fr)); gap: 16px;",
                                    for speaker in SPEAKERS.iter() {
                                        div { style: "display: flex; gap: 12px; padding: 16px; border: 1px solid {border}; border-radius: 12px;",
                                            div {
                                                style: "width: 48px; height: 48px; border-radius: 50%; background: {gradient}; color: white; display: flex; align-items: center; justify-content: center; font-weight: 600; flex-shrink: 0;",
                                                "{speaker.name.chars().next().unwrap_or('?')}"
                                            }
                                            div {
                                                h4 { style: "color: {on_surface}; margin: 0;", "{speaker.name}" }
                                                p { style: "color: {muted}; margin: 4px 0 0; font-size: 0.9rem;", "{speaker.role}" }
                                                p { style: "color: {primary}; margin: 8px 0 0; font-size: 0.85rem; font-weight: 500;", "{speaker.topic}" }
                                            }
                                        }
                                    }
                                }
                            }
                        },
                        DetailTab::Location => rsx! {
                            SurfaceCard { is_dark,
                                h2 { style: "color: {on_surface}; margin: 0 0 16px;", "Event Location" }
                                h4 { style: "color: {on_surface}; margin: 0;", "{event.location}" }
                                p { style: "color: {muted}; margin: 4px 0 16px;", "{event.address}" }
                                div {
                                    style: "height: 220px; border: 1px dashed {border}; border-radius: 12px; display: flex; align-items: center; justify-content: center; color: {muted};",
                                    "Map would be displayed here"
                                }
                            }
                        },
                        DetailTab::Reviews => rsx! {
                            SurfaceCard { is_dark,
                                h2 { style: "color: {on_surface}; margin: 0 0 16px;", "Attendee Reviews" }
                                p { style: "color: {muted}; text-align: center; padding: 24px 0;",
                                    "Reviews will be available after the event"
                                }
                            }
                        },
                    }}
                }

                // Sidebar
                div {
                    SurfaceCard { is_dark,
                        div { style: "display: flex; align-items: center; justify-content: space-between; margin-bottom: 16px;",
                            h3 { style: "color: {on_surface}; margin: 0;", "Book Tickets" }
                            span { style: "font-size: 1.5rem; font-weight: bold; color: {primary};", "{price}" }
                        }
                        div { style: "display: flex; align-items: center; justify-content: space-between; margin-bottom: 16px;",
                            span { style: "color: {on_surface};", "Number of tickets:" }
                            div { style: "display: flex; align-items: center; gap: 8px;",
                                button {
                                    onclick: move |_| tickets.set(clamp_ticket_quantity(tickets(), -1)),
                                    style: "{stepper_style}",
                                    "-"
                                }
                                span { style: "color: {on_surface}; width: 24px; text-align: center;", "{qty}" }
                                button {
                                    onclick: move |_| tickets.set(clamp_ticket_quantity(tickets(), 1)),
                                    style: "{stepper_style}",
                                    "+"
                                }
                            }
                        }
                        div { style: "border-top: 1px solid {border}; padding-top: 16px; margin-bottom: 16px; display: flex; justify-content: space-between; font-weight: 600; color: {on_surface}; font-size: 1.1rem;",
                            span { "Total:" }
                            span { "{total}" }
                        }
                        button {
                            disabled: is_full,
                            onclick: move |_| {
                                notice.set(Some(format!(
                                    "Tickets reserved! {} ticket(s) for {} have been added to your cart.",
                                    tickets(), title_for_booking
                                )));
                            },
                            style: if is_full {
                                "width: 100%; padding: 14px; border-radius: 8px; border: none; background: #9CA3AF; color: white; font-weight: 600;".to_string()
                            } else {
                                format!("width: 100%; padding: 14px; border-radius: 8px; border: none; cursor: pointer; background: {}; color: white; font-weight: 600;", gradient)
                            },
                            "{book_label}"
                        }
                        if let Some(ref message) = notice() {
                            p { style: "color: {success}; font-size: 0.875rem; margin: 12px 0 0;", "{message}" }
                        }
                        div { style: "text-align: center; color: {muted}; font-size: 0.875rem; margin-top: 12px;",
                            p { style: "margin: 0;", "{availability.spots_left} tickets remaining" }
                            p { style: "margin: 4px 0 0;", "Free cancellation until 24 hours before event" }
                        }
                    }

                    SurfaceCard { is_dark,
                        h3 { style: "color: {on_surface}; margin: 0 0 16px;", "Event Organizer" }
                        div { style: "display: flex; gap: 12px;",
                            div {
                                style: "width: 44px; height: 44px; border-radius: 50%; background: {gradient}; color: white; display: flex; align-items: center; justify-content: center; font-weight: 600; flex-shrink: 0;",
                                "T"
                            }
                            div {
                                h4 { style: "color: {on_surface}; margin: 0;", "{ORGANIZER_NAME}" }
                                p { style: "color: {muted}; margin: 4px 0 0; font-size: 0.9rem;",
                                    "★ {ORGANIZER_RATING} • {ORGANIZER_EVENTS_HOSTED} events"
                                }
                            }
                        }
                    }

                    SurfaceCard { is_dark,
                        h3 { style: "color: {on_surface}; margin: 0 0 16px;", "Event Statistics" }
                        div { style: "display: flex; justify-content: space-between; margin-bottom: 8px;",
                            span { style: "color: {muted};", "👥 Attendees" }
                            span { style: "color: {on_surface}; font-weight: 600;", "{event.attendees}" }
                        }
                        div { style: "display: flex; justify-content: space-between;",
                            span { style: "color: {muted};", "📅 Event Date" }
                            span { style: "color: {on_surface}; font-weight: 600;", "{long_date}" }
                        }
                    }
                }
            }
        }
    }
}
