use dioxus::prelude::*;

use crate::availability::{derive_availability, AvailabilityStatus, CARD_ALMOST_FULL_THRESHOLD};
use crate::models::Event;
use crate::theme::AppColors;

#[component]
pub fn EventCard(is_dark: bool, event: Event, on_select: EventHandler<String>) -> Element {
    let availability = derive_availability(&event, CARD_ALMOST_FULL_THRESHOLD);
    let is_full = availability.status == AvailabilityStatus::SoldOut;
    let is_almost_full = availability.status == AvailabilityStatus::AlmostFull;

    let event_id = event.id.clone();
    let date = event.short_date();
    let price = event.formatted_price();
    let category = event.category.label();

    let surface = if is_dark { "#232129" } else { "#FFFFFF" };
    let border = if is_dark { "#3A3742" } else { "#E5E7EB" };
    let on_surface = AppColors::on_surface(is_dark);
    let muted = AppColors::muted(is_dark);
    let primary = AppColors::primary(is_dark);
    let warning = AppColors::warning(is_dark);
    let error = AppColors::error(is_dark);
    let gradient = AppColors::GRADIENT_PRIMARY;

    rsx! {
        div {
            style: "background: {surface}; border: 1px solid {border}; border-radius: 12px; overflow: hidden; box-shadow: 0 1px 3px rgba(0,0,0,0.08); display: flex; flex-direction: column;",
            div { style: "position: relative;",
                img {
                    src: "{event.image_url}",
                    alt: "{event.title}",
                    style: "width: 100%; height: 190px; object-fit: cover; display: block;",
                }
                span {
                    style: "position: absolute; top: 12px; left: 12px; background: rgba(255,255,255,0.92); color: #1C1B22; padding: 4px 10px; border-radius: 999px; font-size: 0.8rem;",
                    "{category}"
                }
                if event.featured {
                    span {
                        style: "position: absolute; top: 12px; right: 12px; background: {gradient}; color: white; padding: 4px 10px; border-radius: 999px; font-size: 0.8rem;",
                        "Featured"
                    }
                }
                span {
                    style: "position: absolute; bottom: 12px; left: 12px; color: white; font-size: 0.85rem; text-shadow: 0 1px 2px rgba(0,0,0,0.7);",
                    "📅 {date}"
                }
            }

            div { style: "padding: 20px; flex: 1;",
                h3 { style: "color: {on_surface}; font-size: 1.2rem; margin: 0 0 8px;", "{event.title}" }
                p { style: "color: {muted}; margin: 0 0 16px; font-size: 0.95rem;", "{event.description}" }
                div { style: "display: flex; flex-direction: column; gap: 6px; font-size: 0.875rem; color: {muted};",
                    span { "🕐 {event.time}" }
                    span { "📍 {event.location}" }
                    div { style: "display: flex; align-items: center; gap: 8px;",
                        span { "👥 {event.attendees}/{event.max_attendees} attending" }
                        if is_almost_full {
                            span {
                                style: "border: 1px solid {warning}; color: {warning}; padding: 1px 8px; border-radius: 999px; font-size: 0.8rem;",
                                "{availability.spots_left} spots left"
                            }
                        }
                        if is_full {
                            span {
                                style: "background: {error}; color: white; padding: 1px 8px; border-radius: 999px; font-size: 0.8rem;",
                                "Sold Out"
                            }
                        }
                    }
                }
            }

            div { style: "padding: 0 20px 20px; display: flex; align-items: center; justify-content: space-between;",
                span { style: "font-size: 1.5rem; font-weight: bold; color: {primary};", "{price}" }
                button {
                    disabled: is_full,
                    onclick: move |_| on_select.call(event_id.clone()),
                    style: if is_full {
                        "padding: 10px 20px; border-radius: 8px; border: none; background: #9CA3AF; color: white; font-weight: 600;".to_string()
                    } else {
                        format!("padding: 10px 20px; border-radius: 8px; border: none; cursor: pointer; background: {}; color: white; font-weight: 600;", gradient)
                    },
                    if is_full { "Sold Out" } else { "Get Tickets" }
                }
            }
        }
    }
}
