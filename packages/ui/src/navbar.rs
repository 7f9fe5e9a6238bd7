use dioxus::prelude::*;

use crate::MAIN_CSS;

/// Top bar with the page title on the left and `children` on the right.
#[component]
pub fn Navbar(title: String, children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        div {
            class: "navbar",
            span { class: "navbar-title", "{title}" }
            div { class: "navbar-actions", {children} }
        }
    }
}
