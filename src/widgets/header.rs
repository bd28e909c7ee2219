use dioxus::prelude::*;
use crate::app::Route;
use crate::theme::AppColors;

#[component]
pub fn Header(is_dark: bool, on_navigate: EventHandler<Route>) -> Element {
    let mut menu_open = use_signal(|| false);

    let surface = AppColors::surface(is_dark);
    let on_surface = AppColors::on_surface(is_dark);
    let border = if is_dark { "#3A3742" } else { "#E5E7EB" };
    let gradient = AppColors::GRADIENT_PRIMARY;

    let nav_link_style = format!(
        "background: none; border: none; cursor: pointer; font-size: 1rem; color: {};",
        on_surface
    );

    rsx! {
        header {
            style: "position: sticky; top: 0; z-index: 50; background: {surface}; border-bottom: 1px solid {border};",
            div {
                style: "max-width: 1100px; margin: 0 auto; padding: 0 16px; height: 64px; display: flex; align-items: center; justify-content: space-between;",
                button {
                    onclick: move |_| on_navigate.call(Route::Home),
                    style: "display: flex; align-items: center; gap: 8px; background: none; border: none; cursor: pointer;",
                    div {
                        style: "width: 32px; height: 32px; border-radius: 8px; background: {gradient}; display: flex; align-items: center; justify-content: center; color: white; font-size: 1rem;",
                        "📅"
                    }
                    span {
                        style: "font-weight: bold; font-size: 1.25rem; background: {gradient}; -webkit-background-clip: text; background-clip: text; color: transparent;",
                        "EventHub"
                    }
                }

                // Desktop navigation
                nav { style: "display: flex; align-items: center; gap: 24px;",
                    button {
                        onclick: move |_| on_navigate.call(Route::Home),
                        style: "{nav_link_style}",
                        "Events"
                    }
                    button {
                        onclick: move |_| on_navigate.call(Route::CreateEvent),
                        style: "{nav_link_style}",
                        "Create Event"
                    }
                    button {
                        onclick: move |_| on_navigate.call(Route::MyEvents),
                        style: "{nav_link_style}",
                        "My Events"
                    }
                    button {
                        onclick: move |_| on_navigate.call(Route::CreateEvent),
                        style: "padding: 8px 16px; border-radius: 8px; border: none; cursor: pointer; background: {gradient}; color: white; font-weight: 600;",
                        "+ Create Event"
                    }
                    button {
                        onclick: move |_| menu_open.set(!menu_open()),
                        style: "background: none; border: 1px solid {border}; border-radius: 8px; padding: 4px 10px; cursor: pointer; color: {on_surface};",
                        if menu_open() { "✕" } else { "☰" }
                    }
                }
            }

            // Collapsible menu (mobile-style)
            if menu_open() {
                nav {
                    style: "border-top: 1px solid {border}; background: {surface}; padding: 16px; display: flex; flex-direction: column; gap: 12px;",
                    button {
                        onclick: move |_| { menu_open.set(false); on_navigate.call(Route::Home); },
                        style: "{nav_link_style} text-align: left;",
                        "Events"
                    }
                    button {
                        onclick: move |_| { menu_open.set(false); on_navigate.call(Route::CreateEvent); },
                        style: "{nav_link_style} text-align: left;",
                        "Create Event"
                    }
                    button {
                        onclick: move |_| { menu_open.set(false); on_navigate.call(Route::MyEvents); },
                        style: "{nav_link_style} text-align: left;",
                        "My Events"
                    }
                }
            }
        }
    }
}
