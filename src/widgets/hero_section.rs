use dioxus::prelude::*;
use crate::theme::AppColors;

#[component]
pub fn HeroSection(is_dark: bool) -> Element {
    let mut query = use_signal(String::new);

    let gradient = AppColors::GRADIENT_PRIMARY;

    rsx! {
        section {
            style: "background: {gradient}; padding: 80px 16px; text-align: center;",
            div { style: "max-width: 820px; margin: 0 auto;",
                h1 {
                    style: "color: white; font-size: 3rem; font-weight: bold; line-height: 1.15; margin-bottom: 24px;",
                    "Discover Amazing"
                    span { style: "display: block;", "Events Near You" }
                }
                p {
                    style: "color: rgba(255,255,255,0.9); font-size: 1.25rem; margin-bottom: 32px;",
                    "From conferences to concerts, find and book tickets for the best events in your area."
                }
                form {
                    onsubmit: move |ev| {
                        ev.prevent_default();
                        // Search semantics live outside this storefront skeleton.
                        log::info!("search submitted: {}", query());
                    },
                    style: "display: flex; gap: 8px; max-width: 640px; margin: 0 auto 32px;",
                    input {
                        r#type: "text",
                        placeholder: "Search events, venues, or organizers...",
                        value: "{query()}",
                        oninput: move |ev| query.set(ev.value().clone()),
                        style: "flex: 1; padding: 14px 16px; border-radius: 8px; border: none; font-size: 1.05rem;",
                    }
                    button {
                        r#type: "submit",
                        style: "padding: 14px 28px; border-radius: 8px; border: none; cursor: pointer; background: #1C1B22; color: white; font-weight: 600;",
                        "Search"
                    }
                }
                div {
                    style: "display: flex; flex-wrap: wrap; justify-content: center; gap: 24px; color: rgba(255,255,255,0.85);",
                    span { "📅 1000+ Events" }
                    span { "📈 50k+ Attendees" }
                    span { "🔍 Easy Discovery" }
                }
            }
        }
    }
}
