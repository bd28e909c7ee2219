use dioxus::prelude::*;
use crate::theme::AppColors;

#[component]
pub fn PageBackground(is_dark: bool, children: Element) -> Element {
    let bg = AppColors::surface(is_dark);
    rsx! {
        div {
            style: "min-height: 100vh; background: {bg};",
            {children}
        }
    }
}
