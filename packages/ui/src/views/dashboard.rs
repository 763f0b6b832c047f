use api::ReportRepository;
use dioxus::prelude::*;

use crate::dashboard::{aggregate, DashboardEvent, DashboardState, MapSettings};
use crate::geolocation::request_position;
use crate::{use_api, use_config, MapWidget, ReportList, SummaryCards};
use crate::Icon;
use crate::icons::{FaList, FaMap, FaShieldHalved};

/// Live incident map, summary cards and the full report list.
///
/// The position query and the report fetch run as two resources owned by this
/// component; if the page unmounts first, both are dropped with it.
#[component]
pub fn DashboardView() -> Element {
    let config = use_config();
    let api = use_api();
    let mut state = use_signal(DashboardState::default);

    let _position = use_resource(move || async move {
        let position = request_position().await;
        if let Err(e) = &position {
            tracing::warn!("Geolocation error: {}", e);
        }
        state.write().apply(DashboardEvent::Position(position));
    });

    let fetch_api = api.clone();
    let _reports = use_resource(move || {
        let api = fetch_api.clone();
        async move {
            let reports = api.list_reports().await.map_err(|e| {
                tracing::error!("Failed to fetch reports: {}", e);
                e.to_string()
            });
            state.write().apply(DashboardEvent::Reports(reports));
        }
    });

    let settings = MapSettings::from(&config.map);
    let view = aggregate(&state.read(), &settings, &api);

    rsx! {
        document::Link { rel: "stylesheet", href: crate::VIEWS_CSS }
        div {
            class: "dashboard",

            h2 {
                class: "dashboard__title",
                Icon { icon: FaShieldHalved, width: 22, height: 22 }
                " SafeSpot Dashboard"
            }

            SummaryCards {
                total: view.total,
                location_text: view.location_text.clone(),
                last_report: view.last_report.clone(),
            }

            div {
                class: "dashboard__body",

                div {
                    class: "panel panel--map",
                    div {
                        class: "panel__header panel__header--success",
                        Icon { icon: FaMap, width: 14, height: 14 }
                        " Live Incident Map"
                    }
                    MapWidget {
                        center: view.center.lat_lng(),
                        zoom: view.zoom,
                        markers: view.markers.clone(),
                        tile_url: config.map.tile_url.clone(),
                        attribution: config.map.attribution.clone(),
                    }
                }

                div {
                    class: "panel panel--list",
                    div {
                        class: "panel__header panel__header--primary",
                        Icon { icon: FaList, width: 14, height: 14 }
                        " All Reports"
                    }
                    div {
                        class: "panel__body panel__body--scroll",
                        ReportList { rows: view.rows.clone() }
                    }
                }
            }
        }
    }
}
