use dioxus::prelude::*;
use ui::views::DashboardView;

/// All reports on the live map.
#[component]
pub fn Reports() -> Element {
    rsx! {
        DashboardView {}
    }
}
