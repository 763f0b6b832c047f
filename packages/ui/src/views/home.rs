use dioxus::prelude::*;

/// Landing page with the calls to action.
#[component]
pub fn HomeView() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: crate::VIEWS_CSS }
        div {
            class: "home",

            header {
                class: "home__header",
                h3 { class: "home__brand", "SafeSpot Lite" }
                div {
                    class: "home__actions",
                    a { class: "home__link", href: "/login", "Login" }
                    a { class: "btn btn--success", href: "/signup", "Sign Up" }
                }
            }

            main {
                class: "home__hero",
                h1 {
                    "Quick Safety Reporting "
                    br {}
                    span { class: "home__accent", "Made Simple" }
                }
                p {
                    class: "home__lead",
                    "Report incidents quickly and securely. From danger zones to safe zones one report can make the difference."
                }
                a { class: "btn btn--success", href: "/signup", "Get Started →" }

                div {
                    class: "home__ticks",
                    span { "✓ Secure & Private" }
                    span { "✓ 24/7 Available" }
                    span { "✓ Fast Response" }
                }
            }
        }
    }
}
