//! # Dashboard aggregation: reports + device location → view model
//!
//! The dashboard runs two independent one-shot effects on mount: a position
//! query and a report fetch. Each result arrives as a [`DashboardEvent`] and is
//! folded into [`DashboardState`]. [`aggregate`] then derives everything the
//! page renders:
//!
//! | Output | Rule |
//! |--------|------|
//! | center / zoom | device position at the located zoom, else the fallback point at the fallback zoom |
//! | report markers | one per report whose stored point has exactly two finite numbers, placed at `(lat, lng)` |
//! | device marker | one extra "You are here" marker when the position is known |
//! | total | length of the full list, valid point or not |
//! | last report | final element in response order, or the "No reports" placeholder |
//! | rows | every report, with address / image / date placeholders filled in |
//!
//! Events commute: the four completion orders of (position, fetch) produce the
//! same view. A failed fetch renders exactly like an empty list.

use api::{ApiClient, Coordinate, Report};
use store::config::MapConfig;

use crate::geolocation::LocationError;

pub const DEVICE_MARKER_LABEL: &str = "You are here";
pub const NO_REPORTS: &str = "No reports";
pub const NO_REPORTS_AVAILABLE: &str = "No reports available.";
pub const NO_DATA: &str = "No data";
pub const NO_ADDRESS: &str = "No address";
pub const UNKNOWN_DATE: &str = "Unknown date";
pub const LOCATION_PENDING: &str = "Fetching...";
pub const LOCATION_UNAVAILABLE: &str = "Location access denied or unavailable.";

/// Device position as seen by the dashboard.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum LocationStatus {
    #[default]
    Pending,
    Located(Coordinate),
    Failed(LocationError),
}

/// Report list as seen by the dashboard.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ReportsStatus {
    #[default]
    Loading,
    Loaded(Vec<Report>),
    /// The fetch failed; rendered as an empty list.
    Failed,
}

/// Completion of one of the two mount effects.
#[derive(Debug, Clone)]
pub enum DashboardEvent {
    Position(Result<Coordinate, LocationError>),
    Reports(Result<Vec<Report>, String>),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardState {
    pub location: LocationStatus,
    pub reports: ReportsStatus,
}

impl DashboardState {
    pub fn apply(&mut self, event: DashboardEvent) {
        match event {
            DashboardEvent::Position(Ok(coordinate)) => {
                self.location = LocationStatus::Located(coordinate);
            }
            DashboardEvent::Position(Err(error)) => {
                self.location = LocationStatus::Failed(error);
            }
            DashboardEvent::Reports(Ok(reports)) => {
                self.reports = ReportsStatus::Loaded(reports);
            }
            DashboardEvent::Reports(Err(_)) => {
                self.reports = ReportsStatus::Failed;
            }
        }
    }

    pub fn device(&self) -> Option<Coordinate> {
        match self.location {
            LocationStatus::Located(c) => Some(c),
            _ => None,
        }
    }

    /// The list to render; empty while loading or after a failed fetch.
    pub fn reports(&self) -> &[Report] {
        match &self.reports {
            ReportsStatus::Loaded(reports) => reports,
            _ => &[],
        }
    }
}

/// Map framing rules, taken from [`MapConfig`].
#[derive(Debug, Clone, PartialEq)]
pub struct MapSettings {
    pub fallback_center: Coordinate,
    pub located_zoom: u8,
    pub fallback_zoom: u8,
}

impl From<&MapConfig> for MapSettings {
    fn from(config: &MapConfig) -> Self {
        let fallback_center = Coordinate::new(config.fallback_latitude, config.fallback_longitude)
            .unwrap_or(Coordinate {
                latitude: 20.5937,
                longitude: 78.9629,
            });
        Self {
            fallback_center,
            located_zoom: config.located_zoom,
            fallback_zoom: config.fallback_zoom,
        }
    }
}

impl Default for MapSettings {
    fn default() -> Self {
        Self::from(&MapConfig::default())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerKind {
    Report,
    Device,
}

/// A point on the map widget.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub id: String,
    pub position: Coordinate,
    pub kind: MarkerKind,
    pub label: String,
    /// Popup body for report markers.
    pub detail: Option<ReportRow>,
}

/// One entry of the report list, placeholders already applied.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportRow {
    pub id: String,
    pub title: String,
    pub description: String,
    pub address: String,
    pub image_url: Option<String>,
    pub date: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LastReport {
    pub title: String,
    pub date: String,
}

/// Everything the dashboard page renders.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardSnapshot {
    pub center: Coordinate,
    pub zoom: u8,
    pub markers: Vec<Marker>,
    pub total: usize,
    pub last_report: LastReport,
    pub location_text: String,
    pub rows: Vec<ReportRow>,
}

impl DashboardSnapshot {
    pub fn report_markers(&self) -> impl Iterator<Item = &Marker> {
        self.markers.iter().filter(|m| m.kind == MarkerKind::Report)
    }

    pub fn device_marker(&self) -> Option<&Marker> {
        self.markers.iter().find(|m| m.kind == MarkerKind::Device)
    }
}

/// Display form of a report timestamp.
///
/// RFC 3339 values are shown in UTC; anything else is shown as received.
pub fn format_timestamp(report: &Report) -> Option<String> {
    match report.created_at() {
        Some(t) => Some(t.format("%-m/%-d/%Y, %-I:%M:%S %p UTC").to_string()),
        None => report.created_at.clone().filter(|raw| !raw.trim().is_empty()),
    }
}

fn row_id(report: &Report, index: usize) -> String {
    if report.id.is_empty() {
        format!("report-{index}")
    } else {
        report.id.clone()
    }
}

fn report_row(report: &Report, index: usize, api: &ApiClient) -> ReportRow {
    ReportRow {
        id: row_id(report, index),
        title: report.title.clone(),
        description: report.description.clone(),
        address: report.address().unwrap_or(NO_ADDRESS).to_string(),
        image_url: report
            .image_url
            .as_deref()
            .filter(|path| !path.is_empty())
            .map(|path| api.resolve_asset(path)),
        date: format_timestamp(report).unwrap_or_else(|| UNKNOWN_DATE.to_string()),
    }
}

fn location_text(location: &LocationStatus) -> String {
    match location {
        LocationStatus::Pending => LOCATION_PENDING.to_string(),
        LocationStatus::Located(c) => format!("{:.3}, {:.3}", c.latitude, c.longitude),
        LocationStatus::Failed(_) => LOCATION_UNAVAILABLE.to_string(),
    }
}

/// Derive the dashboard view from the current state.
pub fn aggregate(state: &DashboardState, settings: &MapSettings, api: &ApiClient) -> DashboardSnapshot {
    let reports = state.reports();
    let device = state.device();

    let (center, zoom) = match device {
        Some(c) => (c, settings.located_zoom),
        None => (settings.fallback_center, settings.fallback_zoom),
    };

    let rows: Vec<ReportRow> = reports
        .iter()
        .enumerate()
        .map(|(i, report)| report_row(report, i, api))
        .collect();

    let mut markers: Vec<Marker> = reports
        .iter()
        .zip(&rows)
        .filter_map(|(report, row)| {
            let position = report.coordinate()?;
            Some(Marker {
                id: row.id.clone(),
                position,
                kind: MarkerKind::Report,
                label: row.title.clone(),
                detail: Some(row.clone()),
            })
        })
        .collect();

    if let Some(position) = device {
        markers.push(Marker {
            id: "device".to_string(),
            position,
            kind: MarkerKind::Device,
            label: DEVICE_MARKER_LABEL.to_string(),
            detail: None,
        });
    }

    let last_report = match reports.last() {
        Some(report) => LastReport {
            title: report.title.clone(),
            date: format_timestamp(report).unwrap_or_else(|| NO_DATA.to_string()),
        },
        None => LastReport {
            title: NO_REPORTS.to_string(),
            date: NO_DATA.to_string(),
        },
    };

    DashboardSnapshot {
        center,
        zoom,
        markers,
        total: reports.len(),
        last_report,
        location_text: location_text(&state.location),
        rows,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api() -> ApiClient {
        ApiClient::new("https://safespot-backend.onrender.com")
    }

    fn report(id: &str, title: &str, coordinates: Option<Vec<f64>>) -> Report {
        Report {
            id: id.to_string(),
            title: title.to_string(),
            description: format!("{title} description"),
            address: None,
            coordinates,
            image_url: None,
            created_at: None,
        }
    }

    fn state_with(reports: Vec<Report>, position: Result<Coordinate, LocationError>) -> DashboardState {
        let mut state = DashboardState::default();
        state.apply(DashboardEvent::Position(position));
        state.apply(DashboardEvent::Reports(Ok(reports)));
        state
    }

    #[test]
    fn test_pothole_example_with_location_denied() {
        let body = r#"[{"_id":"a","title":"Pothole","location":{"coordinates":[77.1,28.6]},"createdAt":"2024-01-01T00:00:00Z"}]"#;
        let reports: Vec<Report> = serde_json::from_str(body).unwrap();
        let state = state_with(reports, Err(LocationError::PermissionDenied));

        let view = aggregate(&state, &MapSettings::default(), &api());

        let markers: Vec<_> = view.report_markers().collect();
        assert_eq!(markers.len(), 1);
        assert_eq!(markers[0].position.latitude, 28.6);
        assert_eq!(markers[0].position.longitude, 77.1);
        assert!(view.device_marker().is_none());

        assert_eq!(view.center.latitude, 20.5937);
        assert_eq!(view.center.longitude, 78.9629);
        assert_eq!(view.zoom, 5);
        assert_eq!(view.total, 1);
        assert_eq!(view.last_report.title, "Pothole");
        assert_eq!(view.last_report.date, "1/1/2024, 12:00:00 AM UTC");
        assert_eq!(view.location_text, LOCATION_UNAVAILABLE);
    }

    #[test]
    fn test_located_device_centers_and_adds_marker() {
        let here = Coordinate::new(12.9716, 77.5946).unwrap();
        let state = state_with(vec![], Ok(here));

        let view = aggregate(&state, &MapSettings::default(), &api());

        assert_eq!(view.center, here);
        assert_eq!(view.zoom, 13);
        let device = view.device_marker().unwrap();
        assert_eq!(device.position, here);
        assert_eq!(device.label, DEVICE_MARKER_LABEL);
        assert_eq!(view.markers.len(), 1);
        assert_eq!(view.location_text, "12.972, 77.595");
    }

    #[test]
    fn test_malformed_points_stay_in_list_only() {
        let reports = vec![
            report("ok", "Valid", Some(vec![77.1, 28.6])),
            report("none", "No location", None),
            report("short", "One component", Some(vec![77.1])),
            report("long", "Three components", Some(vec![77.1, 28.6, 3.0])),
            report("nan", "Not a number", Some(vec![f64::NAN, 28.6])),
            report("inf", "Infinite", Some(vec![77.1, f64::NEG_INFINITY])),
        ];
        let state = state_with(reports, Err(LocationError::Timeout));

        let view = aggregate(&state, &MapSettings::default(), &api());

        let ids: Vec<_> = view.report_markers().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["ok"]);
        assert_eq!(view.total, 6);
        assert_eq!(view.rows.len(), 6);
        assert_eq!(view.rows[5].title, "Infinite");
        assert_eq!(view.last_report.title, "Infinite");
    }

    #[test]
    fn test_badly_shaped_records_do_not_empty_the_dashboard() {
        let body = r#"[
            {"_id":"a","title":"Pothole","description":"Big","location":{"coordinates":[77.1,28.6]}},
            {"_id":"b","title":"Legacy","description":null},
            {"_id":"c","title":"Flood","description":"d","location":{"coordinates":"77.1,28.6"}}
        ]"#;
        let reports: Vec<Report> = serde_json::from_str(body).unwrap();
        let state = state_with(reports, Err(LocationError::PermissionDenied));

        let view = aggregate(&state, &MapSettings::default(), &api());

        assert_eq!(view.total, 3);
        assert_eq!(view.rows.len(), 3);
        let ids: Vec<_> = view.report_markers().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["a"]);
        assert_eq!(view.rows[1].description, "");
        assert_eq!(view.last_report.title, "Flood");
    }

    #[test]
    fn test_every_valid_pair_is_swapped() {
        let pairs = [(0.0, 0.0), (-122.4, 37.8), (179.9, -89.9), (2.35, 48.85)];
        let reports = pairs
            .iter()
            .enumerate()
            .map(|(i, (lng, lat))| report(&i.to_string(), "r", Some(vec![*lng, *lat])))
            .collect();
        let state = state_with(reports, Err(LocationError::Unavailable));

        let view = aggregate(&state, &MapSettings::default(), &api());

        let positions: Vec<_> = view.report_markers().map(|m| m.position.lat_lng()).collect();
        let expected: Vec<_> = pairs.iter().map(|(lng, lat)| [*lat, *lng]).collect();
        assert_eq!(positions, expected);
    }

    #[test]
    fn test_empty_and_failed_fetch_render_placeholders() {
        let mut failed = DashboardState::default();
        failed.apply(DashboardEvent::Reports(Err("network error".to_string())));
        let empty = state_with(vec![], Err(LocationError::Unsupported));

        for state in [failed, empty] {
            let view = aggregate(&state, &MapSettings::default(), &api());
            assert_eq!(view.total, 0);
            assert!(view.report_markers().next().is_none());
            assert!(view.rows.is_empty());
            assert_eq!(view.last_report.title, NO_REPORTS);
            assert_eq!(view.last_report.date, NO_DATA);
        }
    }

    #[test]
    fn test_rows_fill_placeholders_and_resolve_images() {
        let mut with_all = report("a", "Fire", Some(vec![77.1, 28.6]));
        with_all.address = Some("Sector 5".to_string());
        with_all.image_url = Some("/uploads/fire.jpg".to_string());
        with_all.created_at = Some("2024-03-05T14:07:09Z".to_string());
        let mut blank_address = report("b", "Smoke", None);
        blank_address.address = Some(String::new());

        let state = state_with(vec![with_all, blank_address], Err(LocationError::Timeout));
        let view = aggregate(&state, &MapSettings::default(), &api());

        assert_eq!(view.rows[0].address, "Sector 5");
        assert_eq!(
            view.rows[0].image_url.as_deref(),
            Some("https://safespot-backend.onrender.com/uploads/fire.jpg")
        );
        assert_eq!(view.rows[0].date, "3/5/2024, 2:07:09 PM UTC");

        assert_eq!(view.rows[1].address, NO_ADDRESS);
        assert!(view.rows[1].image_url.is_none());
        assert_eq!(view.rows[1].date, UNKNOWN_DATE);
        assert_eq!(view.last_report.date, NO_DATA);

        // Popup content mirrors the list row
        let marker = view.report_markers().next().unwrap();
        assert_eq!(marker.detail.as_ref(), Some(&view.rows[0]));
    }

    #[test]
    fn test_last_report_follows_response_order() {
        let mut newer = report("1", "Newer", None);
        newer.created_at = Some("2024-06-01T00:00:00Z".to_string());
        let mut older = report("2", "Older", None);
        older.created_at = Some("2023-01-01T00:00:00Z".to_string());

        let state = state_with(vec![newer, older], Err(LocationError::Timeout));
        let view = aggregate(&state, &MapSettings::default(), &api());

        assert_eq!(view.last_report.title, "Older");
    }

    #[test]
    fn test_completion_order_does_not_matter() {
        let reports = vec![
            report("a", "Pothole", Some(vec![77.1, 28.6])),
            report("b", "Broken", None),
        ];
        let positions = [
            Ok(Coordinate::new(28.61, 77.2).unwrap()),
            Err(LocationError::PermissionDenied),
        ];
        let fetches = [Ok(reports), Err("timeout".to_string())];

        for position in &positions {
            for fetch in &fetches {
                let position_event = DashboardEvent::Position(position.clone());
                let fetch_event = DashboardEvent::Reports(fetch.clone());

                let mut position_first = DashboardState::default();
                position_first.apply(position_event.clone());
                position_first.apply(fetch_event.clone());

                let mut fetch_first = DashboardState::default();
                fetch_first.apply(fetch_event);
                fetch_first.apply(position_event);

                assert_eq!(position_first, fetch_first);
                assert_eq!(
                    aggregate(&position_first, &MapSettings::default(), &api()),
                    aggregate(&fetch_first, &MapSettings::default(), &api()),
                );
            }
        }
    }

    #[test]
    fn test_pending_state() {
        let view = aggregate(&DashboardState::default(), &MapSettings::default(), &api());
        assert_eq!(view.location_text, LOCATION_PENDING);
        assert_eq!(view.zoom, 5);
        assert!(view.markers.is_empty());
    }

    #[test]
    fn test_settings_from_config() {
        let config = MapConfig {
            fallback_latitude: 48.8566,
            fallback_longitude: 2.3522,
            located_zoom: 15,
            fallback_zoom: 4,
            ..MapConfig::default()
        };
        let settings = MapSettings::from(&config);
        let here = Coordinate::new(1.0, 2.0).unwrap();

        let located = aggregate(&state_with(vec![], Ok(here)), &settings, &api());
        assert_eq!(located.zoom, 15);

        let fallback = aggregate(
            &state_with(vec![], Err(LocationError::Timeout)),
            &settings,
            &api(),
        );
        assert_eq!(fallback.center, Coordinate::new(48.8566, 2.3522).unwrap());
        assert_eq!(fallback.zoom, 4);
    }
}
