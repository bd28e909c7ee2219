use dioxus::prelude::*;
use crate::theme::spacing;

#[component]
pub fn SurfaceCard(is_dark: bool, children: Element) -> Element {
    let surface = if is_dark { "#232129" } else { "#FFFFFF" };
    let border = if is_dark { "#3A3742" } else { "#E5E7EB" };
    rsx! {
        div {
            style: "background: {surface}; border: 1px solid {border}; border-radius: 12px; padding: {spacing::CARD_PADDING}; margin-bottom: {spacing::MD}; box-shadow: 0 1px 3px rgba(0,0,0,0.08);",
            {children}
        }
    }
}
