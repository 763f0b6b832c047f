//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub mod views;

pub const VIEWS_CSS: Asset = asset!("/src/views/views.css");

pub mod alert;
pub use alert::alert;

mod config;
pub use config::{use_api, use_config, ConfigProvider};

pub mod dashboard;
pub use dashboard::{aggregate, DashboardEvent, DashboardSnapshot, DashboardState};

pub mod form_state;
pub use form_state::SubmitState;

pub mod geolocation;
pub use geolocation::{request_position, LocationError};

mod map_widget;
pub use map_widget::MapWidget;

mod navbar;
pub use navbar::Navbar;

mod report_list;
pub use report_list::ReportList;

mod session;
pub use session::{sign_in, use_session, SessionProvider, SessionState};

mod summary_cards;
pub use summary_cards::SummaryCards;
