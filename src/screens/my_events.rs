use dioxus::prelude::*;

use crate::app::Route;
use crate::models::{format_usd, Category, EventStatus, OrderStatus, OrganizedEvent, TicketOrder};
use crate::theme::AppColors;
use crate::widgets::{Header, PageBackground, SurfaceCard};

#[derive(Clone, Copy, PartialEq)]
enum MyEventsTab {
    Organizing,
    Attending,
}

fn status_color(status: EventStatus) -> &'static str {
    match status {
        EventStatus::Published => "#22C55E",
        EventStatus::Draft => "#EAB308",
        EventStatus::Cancelled => "#EF4444",
    }
}

fn order_status_color(status: OrderStatus) -> &'static str {
    match status {
        OrderStatus::Confirmed => "#22C55E",
        OrderStatus::Pending => "#EAB308",
    }
}

fn d(year: i32, month: u32, day: u32) -> chrono::NaiveDate {
    chrono::NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

// Demo data for the signed-in user; a real backend would scope these queries.
fn demo_organized_events() -> Vec<OrganizedEvent> {
    vec![
        OrganizedEvent {
            id: "1".to_string(),
            title: "Tech Innovation Summit 2024".to_string(),
            category: Category::Technology,
            date: d(2024, 3, 15),
            time: "9:00 AM - 6:00 PM".to_string(),
            location: "San Francisco Convention Center".to_string(),
            attendees: 847,
            max_attendees: 1000,
            revenue_cents: 25_265_300,
            status: EventStatus::Published,
        },
        OrganizedEvent {
            id: "3".to_string(),
            title: "Startup Networking Night".to_string(),
            category: Category::Networking,
            date: d(2024, 2, 28),
            time: "6:00 PM - 9:00 PM".to_string(),
            location: "WeWork Downtown".to_string(),
            attendees: 45,
            max_attendees: 50,
            revenue_cents: 0,
            status: EventStatus::Published,
        },
        OrganizedEvent {
            id: "workshop-series".to_string(),
            title: "AI Workshop Series".to_string(),
            category: Category::Education,
            date: d(2024, 4, 10),
            time: "2:00 PM - 5:00 PM".to_string(),
            location: "Tech Hub Center".to_string(),
            attendees: 12,
            max_attendees: 30,
            revenue_cents: 240_000,
            status: EventStatus::Draft,
        },
    ]
}

fn demo_ticket_orders() -> Vec<TicketOrder> {
    vec![
        TicketOrder {
            id: "order-1".to_string(),
            event_id: "2".to_string(),
            event_title: "Digital Marketing Masterclass".to_string(),
            event_date: d(2024, 3, 20),
            event_time: "10:00 AM - 4:00 PM".to_string(),
            location: "Marina Bay Sands".to_string(),
            ticket_type: "VIP".to_string(),
            price_cents: 19_900,
            quantity: 2,
            order_date: d(2024, 2, 15),
            status: OrderStatus::Confirmed,
        },
        TicketOrder {
            id: "order-2".to_string(),
            event_id: "web-dev-bootcamp".to_string(),
            event_title: "Web Development Bootcamp".to_string(),
            event_date: d(2024, 2, 25),
            event_time: "9:00 AM - 6:00 PM".to_string(),
            location: "Online Event".to_string(),
            ticket_type: "Standard".to_string(),
            price_cents: 9_900,
            quantity: 1,
            order_date: d(2024, 2, 10),
            status: OrderStatus::Confirmed,
        },
    ]
}

#[component]
pub fn MyEventsScreen(
    is_dark: bool,
    on_navigate: EventHandler<Route>,
    on_open_event: EventHandler<String>,
) -> Element {
    let mut tab = use_signal(|| MyEventsTab::Organizing);
    let mut status_filter = use_signal(|| "all".to_string());

    let organized = demo_organized_events();
    let filtered: Vec<_> = organized
        .iter()
        .filter(|e| status_filter() == "all" || e.status.label() == status_filter())
        .cloned()
        .collect();
    let tickets = demo_ticket_orders();
    let found = filtered.len();

    let on_surface = AppColors::on_surface(is_dark);
    let muted = AppColors::muted(is_dark);
    let primary = AppColors::primary(is_dark);
    let gradient = AppColors::GRADIENT_PRIMARY;
    let border = if is_dark { "#3A3742" } else { "#E5E7EB" };

    let tab_style = format!(
        "flex: 1; padding: 10px 16px; border-radius: 8px; border: 1px solid {}; cursor: pointer; color: {};",
        border, on_surface
    );
    let bg_organizing = if tab() == MyEventsTab::Organizing { primary } else { "transparent" };
    let bg_attending = if tab() == MyEventsTab::Attending { primary } else { "transparent" };
    let outline_button = format!(
        "padding: 8px 16px; border-radius: 8px; border: 1px solid {}; background: transparent; color: {}; cursor: pointer;",
        border, on_surface
    );
    let grid_style = "display: grid; grid-template-columns: repeat(auto-fill, minmax(320px, 1fr)); gap: 16px;";

    rsx! {
        PageBackground { is_dark,
            Header { is_dark, on_navigate: move |r| on_navigate.call(r) }
            div { style: "max-width: 1100px; margin: 0 auto; padding: 32px 16px;",
                div { style: "display: flex; align-items: center; justify-content: space-between; margin-bottom: 32px; flex-wrap: wrap; gap: 16px;",
                    div {
                        h1 { style: "color: {on_surface}; margin: 0 0 8px;", "My Events" }
                        p { style: "color: {muted}; margin: 0;", "Manage your events and view your bookings" }
                    }
                    button {
                        onclick: move |_| on_navigate.call(Route::CreateEvent),
                        style: "padding: 10px 20px; border-radius: 8px; border: none; cursor: pointer; background: {gradient}; color: white; font-weight: 600;",
                        "+ Create New Event"
                    }
                }

                div { style: "display: flex; gap: 8px; margin-bottom: 24px;",
                    button {
                        onclick: move |_| tab.set(MyEventsTab::Organizing),
                        style: "{tab_style} background: {bg_organizing};",
                        "Events I'm Organizing"
                    }
                    button {
                        onclick: move |_| tab.set(MyEventsTab::Attending),
                        style: "{tab_style} background: {bg_attending};",
                        "Events I'm Attending"
                    }
                }

                {match tab() {
                    MyEventsTab::Organizing => rsx! {
                        div { style: "display: flex; align-items: center; justify-content: space-between; margin-bottom: 24px;",
                            select {
                                value: "{status_filter()}",
                                onchange: move |ev| status_filter.set(ev.value().clone()),
                                style: "padding: 8px 12px; border-radius: 8px; border: 1px solid {border}; background: transparent; color: {on_surface};",
                                option { value: "all", "All Events" }
                                option { value: "published", "Published" }
                                option { value: "draft", "Draft" }
                                option { value: "cancelled", "Cancelled" }
                            }
                            span { style: "color: {muted}; font-size: 0.875rem;", "{found} event(s) found" }
                        }

                        if filtered.is_empty() {
                            SurfaceCard { is_dark,
                                div { style: "text-align: center; padding: 32px 0;",
                                    div { style: "font-size: 2.5rem; margin-bottom: 12px;", "📅" }
                                    h3 { style: "color: {on_surface}; margin: 0 0 8px;", "No events found" }
                                    p { style: "color: {muted}; margin: 0 0 16px;",
                                        if status_filter() == "all" {
                                            "You haven't created any events yet."
                                        } else {
                                            "No {status_filter()} events found."
                                        }
                                    }
                                    button {
                                        onclick: move |_| on_navigate.call(Route::CreateEvent),
                                        style: "padding: 10px 24px; border-radius: 8px; border: none; cursor: pointer; background: {gradient}; color: white; font-weight: 600;",
                                        "+ Create Your First Event"
                                    }
                                }
                            }
                        } else {
                            div { style: "{grid_style}",
                                for event in filtered.iter() {
                                    SurfaceCard { is_dark,
                                        div { style: "display: flex; align-items: flex-start; justify-content: space-between; margin-bottom: 12px;",
                                            h3 { style: "color: {on_surface}; margin: 0; font-size: 1.1rem;", "{event.title}" }
                                        }
                                        div { style: "display: flex; gap: 8px; margin-bottom: 16px;",
                                            span {
                                                style: "background: {status_color(event.status)}; color: white; padding: 2px 10px; border-radius: 999px; font-size: 0.8rem;",
                                                "{event.status.label()}"
                                            }
                                            span {
                                                style: "border: 1px solid {border}; color: {on_surface}; padding: 2px 10px; border-radius: 999px; font-size: 0.8rem;",
                                                "{event.category.label()}"
                                            }
                                        }
                                        div { style: "display: flex; flex-direction: column; gap: 6px; font-size: 0.875rem; color: {muted}; margin-bottom: 16px;",
                                            span { "📅 {event.short_date()} • {event.time}" }
                                            span { "📍 {event.location}" }
                                            span { "👥 {event.attendees}/{event.max_attendees} registered" }
                                        }
                                        div { style: "border-top: 1px solid {border}; padding-top: 16px; display: flex; align-items: center; justify-content: space-between;",
                                            div {
                                                p { style: "color: {muted}; margin: 0; font-size: 0.8rem;", "Revenue" }
                                                p { style: "color: {primary}; margin: 0; font-weight: 600; font-size: 1.1rem;",
                                                    "{format_usd(event.revenue_cents)}"
                                                }
                                            }
                                            button {
                                                onclick: {
                                                    let id = event.id.clone();
                                                    move |_| on_open_event.call(id.clone())
                                                },
                                                style: "{outline_button}",
                                                "View Details"
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    },
                    MyEventsTab::Attending => rsx! {
                        div { style: "{grid_style}",
                            for ticket in tickets.iter() {
                                SurfaceCard { is_dark,
                                    div { style: "display: flex; align-items: flex-start; justify-content: space-between; margin-bottom: 12px;",
                                        div {
                                            h3 { style: "color: {on_surface}; margin: 0 0 8px; font-size: 1.1rem;", "{ticket.event_title}" }
                                            span {
                                                style: "background: {order_status_color(ticket.status)}; color: white; padding: 2px 10px; border-radius: 999px; font-size: 0.8rem;",
                                                "{ticket.status.label()}"
                                            }
                                        }
                                        div { style: "text-align: right;",
                                            p { style: "color: {muted}; margin: 0; font-size: 0.8rem;", "Total Paid" }
                                            p { style: "color: {primary}; margin: 0; font-weight: 600; font-size: 1.1rem;",
                                                "{format_usd(ticket.total_cents())}"
                                            }
                                        }
                                    }
                                    div { style: "display: flex; flex-direction: column; gap: 6px; font-size: 0.875rem; color: {muted}; margin-bottom: 16px;",
                                        span { "📅 {ticket.short_event_date()} • {ticket.event_time}" }
                                        span { "📍 {ticket.location}" }
                                    }
                                    div { style: "border-top: 1px solid {border}; padding-top: 16px; display: flex; align-items: center; justify-content: space-between;",
                                        div { style: "font-size: 0.875rem; color: {muted};",
                                            p { style: "margin: 0;", "{ticket.quantity} × {ticket.ticket_type} Ticket" }
                                            p { style: "margin: 4px 0 0;", "Ordered: {ticket.short_order_date()}" }
                                        }
                                        button {
                                            onclick: {
                                                let id = ticket.event_id.clone();
                                                move |_| on_open_event.call(id.clone())
                                            },
                                            style: "{outline_button}",
                                            "View Event"
                                        }
                                    }
                                }
                            }
                        }
                    },
                }}
            }
        }
    }
}
