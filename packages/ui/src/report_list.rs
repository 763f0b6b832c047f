use dioxus::prelude::*;

use crate::dashboard::{ReportRow, NO_REPORTS_AVAILABLE};

/// Scrollable list of every fetched report, map-placeable or not.
#[component]
pub fn ReportList(rows: Vec<ReportRow>) -> Element {
    if rows.is_empty() {
        return rsx! {
            p { class: "report-list__empty", "{NO_REPORTS_AVAILABLE}" }
        };
    }

    rsx! {
        div {
            class: "report-list",
            for row in rows {
                div {
                    key: "{row.id}",
                    class: "report-card",
                    h5 { class: "report-card__title", "🚨 {row.title}" }
                    p {
                        class: "report-card__address",
                        "📍 "
                        strong { "{row.address}" }
                    }
                    p { class: "report-card__description", "{row.description}" }
                    if let Some(src) = row.image_url.clone() {
                        img {
                            class: "report-card__image",
                            src: "{src}",
                            alt: "report",
                        }
                    }
                    p {
                        class: "report-card__date",
                        small { "🕒 {row.date}" }
                    }
                }
            }
        }
    }
}
