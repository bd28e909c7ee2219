use dioxus::prelude::*;

use crate::catalog;
use crate::screens::{CreateEventScreen, EventDetailScreen, HomeScreen, MyEventsScreen};
use crate::theme::AppColors;
use crate::widgets::{Header, PageBackground};

#[derive(Clone, PartialEq)]
pub enum Route {
    Home,
    EventDetail(String),
    CreateEvent,
    MyEvents,
}

#[component]
pub fn App() -> Element {
    let mut route = use_signal(|| Route::Home);
    let is_dark = use_signal(|| false);

    let current_screen = match route() {
        Route::Home => rsx! {
            HomeScreen {
                is_dark: is_dark(),
                on_navigate: move |r| route.set(r),
                on_open_event: move |id| route.set(Route::EventDetail(id)),
            }
        },
        Route::EventDetail(id) => match catalog::get_event(&id) {
            Some(event) => rsx! {
                EventDetailScreen {
                    is_dark: is_dark(),
                    event,
                    on_back: move |_| route.set(Route::Home),
                }
            },
            None => rsx! {
                NotFound {
                    is_dark: is_dark(),
                    on_back: move |_| route.set(Route::Home),
                }
            },
        },
        Route::CreateEvent => rsx! {
            CreateEventScreen {
                is_dark: is_dark(),
                on_created: move |_| route.set(Route::Home),
                on_cancel: move |_| route.set(Route::Home),
            }
        },
        Route::MyEvents => rsx! {
            MyEventsScreen {
                is_dark: is_dark(),
                on_navigate: move |r| route.set(r),
                on_open_event: move |id| route.set(Route::EventDetail(id)),
            }
        },
    };

    rsx! {
        div { style: "font-family: system-ui, sans-serif;",
            {current_screen}
        }
    }
}

#[component]
fn NotFound(is_dark: bool, on_back: EventHandler<()>) -> Element {
    let on_surface = AppColors::on_surface(is_dark);
    let muted = AppColors::muted(is_dark);
    let gradient = AppColors::GRADIENT_PRIMARY;

    rsx! {
        PageBackground { is_dark,
            Header { is_dark, on_navigate: move |_| on_back.call(()) }
            div { style: "text-align: center; padding: 96px 16px;",
                div { style: "font-size: 3rem; margin-bottom: 16px;", "📅" }
                h2 { style: "color: {on_surface}; margin: 0 0 8px;", "Event not found" }
                p { style: "color: {muted}; margin: 0 0 24px;",
                    "This event may have been removed or never existed."
                }
                button {
                    onclick: move |_| on_back.call(()),
                    style: "padding: 10px 24px; border-radius: 8px; border: none; cursor: pointer; background: {gradient}; color: white; font-weight: 600;",
                    "← Back to Events"
                }
            }
        }
    }
}
