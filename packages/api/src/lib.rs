//! # API crate: client side of the SafeSpot report service
//!
//! Every network call the frontend makes goes through this crate. The remote
//! service owns authentication, report storage and image hosting; this crate
//! only builds requests and interprets responses.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`ApiClient`]: base URL, optional session token, image URL resolution |
//! | [`auth`] | `signup` and `login` on [`ApiClient`] |
//! | [`reports`] | [`ReportRepository`] trait, its HTTP implementation and [`MemoryReports`] |
//! | [`models`] | [`Report`], [`Coordinate`], [`ReportDraft`] and the `[lng, lat]` boundary conversion |
//! | [`error`] | [`ApiError`], [`AuthError`], [`ValidationError`] |
//!
//! ## Remote endpoints
//!
//! - `POST /auth/signup {name, email, password}`
//! - `POST /auth/login {email, password}` → `{token}`
//! - `GET /report` → list of reports
//! - `POST /report` multipart `title, description, address, latitude, longitude, image?`

pub mod auth;
pub mod client;
pub mod error;
pub mod models;
pub mod reports;

pub use client::ApiClient;
pub use error::{ApiError, AuthError, ReportField, ValidationError, SERVER_ERROR};
pub use models::{Coordinate, ImageAttachment, NewReport, Report, ReportDraft};
pub use reports::{MemoryReports, ReportRepository};

pub use store::SessionToken;
