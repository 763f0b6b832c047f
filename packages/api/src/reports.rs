//! # Report repository: list and create incident reports
//!
//! [`ReportRepository`] is the seam between the screens and report storage.
//! [`ApiClient`] implements it against the remote service; [`MemoryReports`]
//! keeps everything in a `Vec` for tests and native previews.
//!
//! | Method | Remote call |
//! |--------|-------------|
//! | [`list_reports`](ReportRepository::list_reports) | `GET /report`, order preserved as received |
//! | [`create_report`](ReportRepository::create_report) | `POST /report`, multipart `title, description, address, latitude, longitude, image?` |
//!
//! `create_report` validates the draft first. A draft missing a required field
//! returns [`ApiError::Validation`] and no request is issued. Neither call
//! retries.

use std::sync::{Arc, Mutex};

use reqwest::multipart::{Form, Part};

use crate::client::{error_message, ApiClient};
use crate::error::ApiError;
use crate::models::{NewReport, Report, ReportDraft};

/// Async interface to report storage.
pub trait ReportRepository {
    fn list_reports(&self) -> impl std::future::Future<Output = Result<Vec<Report>, ApiError>>;
    fn create_report(
        &self,
        draft: ReportDraft,
    ) -> impl std::future::Future<Output = Result<(), ApiError>>;
}

fn multipart_form(report: NewReport) -> Result<Form, ApiError> {
    let mut form = Form::new()
        .text("title", report.title)
        .text("description", report.description)
        .text("address", report.address)
        .text("latitude", report.coordinate.latitude.to_string())
        .text("longitude", report.coordinate.longitude.to_string());

    if let Some(image) = report.image {
        let mut part = Part::bytes(image.bytes).file_name(image.file_name);
        if let Some(mime) = image.content_type.as_deref() {
            part = part
                .mime_str(mime)
                .map_err(|e| ApiError::InvalidRequest(e.to_string()))?;
        }
        form = form.part("image", part);
    }

    Ok(form)
}

async fn status_error(response: reqwest::Response) -> ApiError {
    let status = response.status().as_u16();
    let body = response.text().await.unwrap_or_default();
    let message = error_message(&body, "error")
        .or_else(|| error_message(&body, "message"))
        .unwrap_or_else(|| format!("request failed with status {status}"));
    ApiError::Status { status, message }
}

impl ReportRepository for ApiClient {
    async fn list_reports(&self) -> Result<Vec<Report>, ApiError> {
        let response = self.http.get(self.url("/report")).send().await?;
        if !response.status().is_success() {
            return Err(status_error(response).await);
        }
        let reports: Vec<Report> = response.json().await?;
        tracing::info!("Fetched {} reports", reports.len());
        Ok(reports)
    }

    async fn create_report(&self, draft: ReportDraft) -> Result<(), ApiError> {
        let report = draft.validate()?;
        let form = multipart_form(report)?;

        let mut request = self.http.post(self.url("/report")).multipart(form);
        if let Some(token) = self.token() {
            request = request.bearer_auth(token.as_str());
        }

        let response = request.send().await?;
        if !response.status().is_success() {
            return Err(status_error(response).await);
        }
        tracing::info!("Report submitted");
        Ok(())
    }
}

/// In-memory ReportRepository for testing and native previews.
#[derive(Clone, Debug, Default)]
pub struct MemoryReports {
    reports: Arc<Mutex<Vec<Report>>>,
}

impl MemoryReports {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_reports(reports: Vec<Report>) -> Self {
        Self {
            reports: Arc::new(Mutex::new(reports)),
        }
    }

    pub fn len(&self) -> usize {
        self.reports.lock().map(|r| r.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ReportRepository for MemoryReports {
    async fn list_reports(&self) -> Result<Vec<Report>, ApiError> {
        let reports = self
            .reports
            .lock()
            .map_err(|e| ApiError::InvalidRequest(e.to_string()))?;
        Ok(reports.clone())
    }

    async fn create_report(&self, draft: ReportDraft) -> Result<(), ApiError> {
        let report = draft.validate()?;
        let mut reports = self
            .reports
            .lock()
            .map_err(|e| ApiError::InvalidRequest(e.to_string()))?;

        let id = format!("mem-{}", reports.len() + 1);
        reports.push(Report {
            id,
            title: report.title,
            description: report.description,
            address: Some(report.address),
            coordinates: Some(vec![
                report.coordinate.longitude,
                report.coordinate.latitude,
            ]),
            image_url: report
                .image
                .map(|image| format!("/uploads/{}", image.file_name)),
            created_at: Some(chrono::Utc::now().to_rfc3339()),
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ReportField, ValidationError};
    use crate::models::{Coordinate, ImageAttachment};

    fn draft(title: &str) -> ReportDraft {
        ReportDraft {
            title: title.to_string(),
            description: "Flooded underpass".to_string(),
            address: "Ring Road".to_string(),
            coordinate: Coordinate::new(28.6, 77.1),
            image: None,
        }
    }

    #[tokio::test]
    async fn test_memory_create_then_list() {
        let repo = MemoryReports::new();

        // Initially empty
        assert!(repo.list_reports().await.unwrap().is_empty());

        repo.create_report(draft("Flood")).await.unwrap();
        repo.create_report(draft("Fire")).await.unwrap();

        let reports = repo.list_reports().await.unwrap();
        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0].title, "Flood");
        assert_eq!(reports[1].title, "Fire");

        // Stored in [lng, lat] order, read back through the boundary conversion
        assert_eq!(reports[0].coordinates, Some(vec![77.1, 28.6]));
        assert_eq!(reports[0].coordinate(), Coordinate::new(28.6, 77.1));
    }

    #[tokio::test]
    async fn test_memory_rejects_incomplete_draft() {
        let repo = MemoryReports::new();
        let mut incomplete = draft("Flood");
        incomplete.address = String::new();

        let err = repo.create_report(incomplete).await.unwrap_err();
        assert!(err.is_validation());
        assert!(repo.is_empty());
    }

    #[tokio::test]
    async fn test_http_create_validates_before_sending() {
        // Nothing listens here; a request would surface as ApiError::Network.
        let client = ApiClient::new("http://127.0.0.1:9");
        let mut incomplete = draft("Flood");
        incomplete.coordinate = None;
        incomplete.image = Some(ImageAttachment {
            file_name: "photo.png".to_string(),
            content_type: Some("image/png".to_string()),
            bytes: vec![0x89, 0x50],
        });

        match client.create_report(incomplete).await {
            Err(ApiError::Validation(ValidationError::MissingField(field))) => {
                assert_eq!(field, ReportField::Location);
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_multipart_rejects_bad_mime() {
        let report = NewReport {
            title: "t".to_string(),
            description: "d".to_string(),
            address: "a".to_string(),
            coordinate: Coordinate::new(1.0, 2.0).unwrap(),
            image: Some(ImageAttachment {
                file_name: "x".to_string(),
                content_type: Some("not a mime".to_string()),
                bytes: vec![],
            }),
        };
        assert!(matches!(
            multipart_form(report),
            Err(ApiError::InvalidRequest(_))
        ));
    }
}
