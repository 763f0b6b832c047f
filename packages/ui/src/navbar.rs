use dioxus::prelude::*;

/// Top bar: brand on the left, navigation links on the right.
#[component]
pub fn Navbar(brand: Element, children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: crate::VIEWS_CSS }
        nav {
            class: "navbar",
            div { class: "navbar__brand", {brand} }
            div { class: "navbar__links", {children} }
        }
    }
}
