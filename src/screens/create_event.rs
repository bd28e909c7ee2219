use dioxus::prelude::*;
use strum::IntoEnumIterator;

use crate::catalog::{self, EventDraft};
use crate::models::Category;
use crate::theme::AppColors;
use crate::widgets::{PageBackground, SurfaceCard};

/// Fields the form refuses to submit without, reported by name.
fn missing_fields(
    title: &str,
    description: &str,
    category: &str,
    date: &str,
    time: &str,
    location: &str,
    max_attendees: &str,
) -> Vec<&'static str> {
    let mut missing = Vec::new();
    if title.trim().is_empty() {
        missing.push("title");
    }
    if description.trim().is_empty() {
        missing.push("description");
    }
    if category.is_empty() {
        missing.push("category");
    }
    if date.trim().is_empty() {
        missing.push("date");
    }
    if time.trim().is_empty() {
        missing.push("time");
    }
    if location.trim().is_empty() {
        missing.push("location");
    }
    if max_attendees.trim().is_empty() {
        missing.push("max attendees");
    }
    missing
}

#[component]
pub fn CreateEventScreen(
    is_dark: bool,
    on_created: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    let mut title = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut full_description = use_signal(String::new);
    let mut category = use_signal(String::new);
    let mut date = use_signal(String::new);
    let mut time = use_signal(String::new);
    let mut location = use_signal(String::new);
    let mut address = use_signal(String::new);
    let mut price = use_signal(String::new);
    let mut max_attendees = use_signal(String::new);
    let mut image_url = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);

    let on_surface = AppColors::on_surface(is_dark);
    let muted = AppColors::muted(is_dark);
    let gradient = AppColors::GRADIENT_PRIMARY;
    let error_color = AppColors::error(is_dark);
    let border = if is_dark { "#3A3742" } else { "#E5E7EB" };

    let input_style = format!(
        "width: 100%; padding: 12px; border-radius: 8px; border: 1px solid {}; background: transparent; color: {}; box-sizing: border-box;",
        border, on_surface
    );
    let label_style = format!(
        "display: block; margin-bottom: 4px; color: {}; font-size: 0.875rem;",
        on_surface
    );

    let submit = move |_| {
        error.set(None);

        let missing = missing_fields(
            &title(),
            &description(),
            &category(),
            &date(),
            &time(),
            &location(),
            &max_attendees(),
        );
        if !missing.is_empty() {
            error.set(Some(format!("Please fill in: {}", missing.join(", "))));
            return;
        }

        let parsed_category = match category().parse::<Category>() {
            Ok(c) => c,
            Err(_) => {
                error.set(Some("Please select a valid category".to_string()));
                return;
            }
        };
        let parsed_date = match chrono::NaiveDate::parse_from_str(&date(), "%Y-%m-%d") {
            Ok(d) => d,
            Err(_) => {
                error.set(Some("Event date must be a valid YYYY-MM-DD date".to_string()));
                return;
            }
        };
        let parsed_max = match max_attendees().trim().parse::<u32>() {
            Ok(n) => n,
            Err(_) => {
                error.set(Some("Maximum attendees must be a whole number".to_string()));
                return;
            }
        };
        let price_text = price();
        let price_cents = if price_text.trim().is_empty() {
            0
        } else {
            match price_text.trim().parse::<f64>() {
                Ok(dollars) if dollars >= 0.0 => (dollars * 100.0).round() as i64,
                _ => {
                    error.set(Some("Ticket price must be a non-negative number".to_string()));
                    return;
                }
            }
        };

        let draft = EventDraft {
            title: title().trim().to_string(),
            description: description().trim().to_string(),
            full_description: full_description().trim().to_string(),
            category: parsed_category,
            date: parsed_date,
            time: time().trim().to_string(),
            location: location().trim().to_string(),
            address: address().trim().to_string(),
            price_cents,
            max_attendees: parsed_max,
            image_url: image_url().trim().to_string(),
        };
        match catalog::add_event(draft) {
            Ok(_) => on_created.call(()),
            Err(e) => error.set(Some(e.to_string())),
        }
    };

    rsx! {
        PageBackground { is_dark,
            div { style: "max-width: 820px; margin: 0 auto; padding: 32px 16px;",
                h1 { style: "color: {on_surface}; margin: 0 0 8px;", "Create New Event" }
                p { style: "color: {muted}; margin: 0 0 32px; font-size: 1.05rem;",
                    "Fill in the details below to create and publish your event."
                }

                form {
                    onsubmit: move |ev| ev.prevent_default(),

                    SurfaceCard { is_dark,
                        h2 { style: "color: {on_surface}; margin: 0 0 16px; font-size: 1.1rem;", "🏷 Basic Information" }
                        div { style: "margin-bottom: 16px;",
                            label { style: "{label_style}", "Event Title" }
                            input {
                                r#type: "text",
                                placeholder: "Enter event title",
                                value: "{title()}",
                                oninput: move |ev| title.set(ev.value().clone()),
                                style: "{input_style}",
                            }
                        }
                        div { style: "margin-bottom: 16px;",
                            label { style: "{label_style}", "Short Description" }
                            textarea {
                                placeholder: "Brief description of your event (max 200 characters)",
                                maxlength: "200",
                                value: "{description()}",
                                oninput: move |ev| description.set(ev.value().clone()),
                                style: "{input_style} min-height: 72px; resize: vertical;",
                            }
                            p { style: "color: {muted}; font-size: 0.8rem; margin: 4px 0 0;",
                                "{description().len()}/200 characters"
                            }
                        }
                        div { style: "margin-bottom: 16px;",
                            label { style: "{label_style}", "Full Description" }
                            textarea {
                                placeholder: "Detailed description of your event, agenda, speakers, etc.",
                                value: "{full_description()}",
                                oninput: move |ev| full_description.set(ev.value().clone()),
                                style: "{input_style} min-height: 140px; resize: vertical;",
                            }
                        }
                        div { style: "margin-bottom: 16px;",
                            label { style: "{label_style}", "Category" }
                            select {
                                value: "{category()}",
                                onchange: move |ev| category.set(ev.value().clone()),
                                style: "{input_style}",
                                option { value: "", "Select event category" }
                                for cat in Category::iter() {
                                    option { value: "{cat.label()}", "{cat.label()}" }
                                }
                            }
                        }
                        div {
                            label { style: "{label_style}", "Event Image URL" }
                            input {
                                r#type: "text",
                                placeholder: "https://example.com/image.jpg",
                                value: "{image_url()}",
                                oninput: move |ev| image_url.set(ev.value().clone()),
                                style: "{input_style}",
                            }
                        }
                    }

                    SurfaceCard { is_dark,
                        h2 { style: "color: {on_surface}; margin: 0 0 16px; font-size: 1.1rem;", "📅 Date & Time" }
                        div { style: "display: grid; grid-template-columns: 1fr 1fr; gap: 16px;",
                            div {
                                label { style: "{label_style}", "Event Date" }
                                input {
                                    r#type: "date",
                                    value: "{date()}",
                                    oninput: move |ev| date.set(ev.value().clone()),
                                    style: "{input_style}",
                                }
                            }
                            div {
                                label { style: "{label_style}", "Event Time" }
                                input {
                                    r#type: "text",
                                    placeholder: "e.g., 9:00 AM - 5:00 PM",
                                    value: "{time()}",
                                    oninput: move |ev| time.set(ev.value().clone()),
                                    style: "{input_style}",
                                }
                            }
                        }
                    }

                    SurfaceCard { is_dark,
                        h2 { style: "color: {on_surface}; margin: 0 0 16px; font-size: 1.1rem;", "📍 Location" }
                        div { style: "margin-bottom: 16px;",
                            label { style: "{label_style}", "Venue Name" }
                            input {
                                r#type: "text",
                                placeholder: "e.g., Convention Center, Online Event",
                                value: "{location()}",
                                oninput: move |ev| location.set(ev.value().clone()),
                                style: "{input_style}",
                            }
                        }
                        div {
                            label { style: "{label_style}", "Full Address" }
                            input {
                                r#type: "text",
                                placeholder: "Street address, city, state, zip code",
                                value: "{address()}",
                                oninput: move |ev| address.set(ev.value().clone()),
                                style: "{input_style}",
                            }
                        }
                    }

                    SurfaceCard { is_dark,
                        h2 { style: "color: {on_surface}; margin: 0 0 16px; font-size: 1.1rem;", "👥 Pricing & Capacity" }
                        div { style: "display: grid; grid-template-columns: 1fr 1fr; gap: 16px;",
                            div {
                                label { style: "{label_style}", "Ticket Price ($)" }
                                input {
                                    r#type: "number",
                                    min: "0",
                                    step: "0.01",
                                    placeholder: "0 for free events",
                                    value: "{price()}",
                                    oninput: move |ev| price.set(ev.value().clone()),
                                    style: "{input_style}",
                                }
                            }
                            div {
                                label { style: "{label_style}", "Maximum Attendees" }
                                input {
                                    r#type: "number",
                                    min: "1",
                                    placeholder: "e.g., 100",
                                    value: "{max_attendees()}",
                                    oninput: move |ev| max_attendees.set(ev.value().clone()),
                                    style: "{input_style}",
                                }
                            }
                        }
                    }

                    if let Some(ref e) = error() {
                        p { style: "color: {error_color}; font-size: 0.9rem; margin: 0 0 16px;", "{e}" }
                    }

                    div { style: "display: flex; justify-content: flex-end; gap: 12px;",
                        button {
                            r#type: "button",
                            onclick: move |_| on_cancel.call(()),
                            style: "padding: 12px 24px; border-radius: 8px; border: 1px solid {border}; background: transparent; color: {on_surface}; cursor: pointer;",
                            "Cancel"
                        }
                        button {
                            r#type: "submit",
                            onclick: submit,
                            style: "padding: 12px 32px; border-radius: 8px; border: none; cursor: pointer; background: {gradient}; color: white; font-weight: 600;",
                            "Create Event"
                        }
                    }
                }
            }
        }
    }
}
