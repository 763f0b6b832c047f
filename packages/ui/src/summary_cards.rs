use dioxus::prelude::*;

use crate::dashboard::LastReport;
use crate::icons::{FaClock, FaLocationDot, FaTriangleExclamation};
use crate::Icon;

/// The three headline cards above the map.
#[component]
pub fn SummaryCards(total: usize, location_text: String, last_report: LastReport) -> Element {
    rsx! {
        div {
            class: "summary-cards",

            div {
                class: "summary-card summary-card--danger",
                div {
                    class: "summary-card__header",
                    Icon { icon: FaTriangleExclamation, width: 14, height: 14 }
                    " Total Reports"
                }
                h4 { class: "summary-card__value", "{total}" }
                p { class: "summary-card__caption", "Active safety concerns reported." }
            }

            div {
                class: "summary-card summary-card--info",
                div {
                    class: "summary-card__header",
                    Icon { icon: FaLocationDot, width: 14, height: 14 }
                    " Your Location"
                }
                h5 { class: "summary-card__value", "{location_text}" }
                p { class: "summary-card__caption", "Current geolocation." }
            }

            div {
                class: "summary-card summary-card--muted",
                div {
                    class: "summary-card__header",
                    Icon { icon: FaClock, width: 14, height: 14 }
                    " Last Report"
                }
                h5 { class: "summary-card__value", "{last_report.title}" }
                p { class: "summary-card__caption", "{last_report.date}" }
            }
        }
    }
}
