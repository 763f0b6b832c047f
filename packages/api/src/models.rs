//! # Report models and the coordinate boundary
//!
//! Defines the data that crosses the HTTP boundary with the report service.
//!
//! ## Types
//!
//! | Type | Represents |
//! |------|-----------|
//! | [`Report`] | A stored incident as returned by `GET /report`. Read-only on the client. |
//! | [`Coordinate`] | A finite `(latitude, longitude)` pair. |
//! | [`ReportDraft`] | What the report form collected; may be incomplete. |
//! | [`NewReport`] | A validated draft, ready to be sent as multipart. |
//! | [`ImageAttachment`] | The optional photo picked in the form. |
//!
//! ## Coordinate order
//!
//! The service stores GeoJSON-style points, `location.coordinates = [lng, lat]`.
//! [`Coordinate::from_lng_lat`] is the only place that order is undone; nothing
//! else indexes into the raw pair.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::error::{ReportField, ValidationError};

/// A geographic point with finite components.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    /// Build a coordinate, rejecting NaN and infinities.
    pub fn new(latitude: f64, longitude: f64) -> Option<Self> {
        if latitude.is_finite() && longitude.is_finite() {
            Some(Self {
                latitude,
                longitude,
            })
        } else {
            None
        }
    }

    /// Read a stored `[lng, lat]` pair.
    ///
    /// Returns `None` unless there are exactly two finite components.
    pub fn from_lng_lat(components: &[f64]) -> Option<Self> {
        match components {
            [lng, lat] => Self::new(*lat, *lng),
            _ => None,
        }
    }

    /// `(lat, lng)` order, as map widgets take it.
    pub fn lat_lng(&self) -> [f64; 2] {
        [self.latitude, self.longitude]
    }
}

/// A stored incident report.
///
/// Decoding never fails on a badly shaped field: text that is null or not a
/// string falls back to empty/absent, and a malformed point is kept as a
/// component list that [`Report::coordinate`] rejects.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Report {
    #[serde(rename = "_id", default, deserialize_with = "lenient_text")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub description: String,
    #[serde(default, deserialize_with = "lenient_optional_text")]
    pub address: Option<String>,
    /// Raw `[lng, lat]` components; non-numeric entries decode as NaN.
    #[serde(rename = "location", default, deserialize_with = "location_components")]
    pub coordinates: Option<Vec<f64>>,
    #[serde(rename = "imageUrl", default, deserialize_with = "lenient_optional_text")]
    pub image_url: Option<String>,
    #[serde(rename = "createdAt", default, deserialize_with = "lenient_optional_text")]
    pub created_at: Option<String>,
}

impl Report {
    /// Map position of this report, if its stored point is well formed.
    pub fn coordinate(&self) -> Option<Coordinate> {
        self.coordinates
            .as_deref()
            .and_then(Coordinate::from_lng_lat)
    }

    /// Address, treating an empty string as absent.
    pub fn address(&self) -> Option<&str> {
        self.address.as_deref().filter(|a| !a.trim().is_empty())
    }

    /// Parsed creation time, when present and RFC 3339.
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        let raw = self.created_at.as_deref()?;
        DateTime::parse_from_rfc3339(raw)
            .ok()
            .map(|t| t.with_timezone(&Utc))
    }
}

fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => s,
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    })
}

fn lenient_optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => Some(s),
        _ => None,
    })
}

/// `location.coordinates` as raw components.
///
/// A missing or null point is `None`. A `coordinates` value that is not an
/// array decodes as an empty list, which never yields a map position.
fn location_components<'de, D>(deserializer: D) -> Result<Option<Vec<f64>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    let Some(Value::Object(point)) = value else {
        return Ok(None);
    };
    Ok(match point.get("coordinates") {
        None | Some(Value::Null) => None,
        Some(Value::Array(values)) => Some(
            values
                .iter()
                .map(|v| v.as_f64().unwrap_or(f64::NAN))
                .collect(),
        ),
        Some(_) => Some(Vec::new()),
    })
}

/// Photo attached to a report.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageAttachment {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

/// Report form input as collected, possibly incomplete.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReportDraft {
    pub title: String,
    pub description: String,
    pub address: String,
    pub coordinate: Option<Coordinate>,
    pub image: Option<ImageAttachment>,
}

/// A report that passed the presence checks.
#[derive(Debug, Clone, PartialEq)]
pub struct NewReport {
    pub title: String,
    pub description: String,
    pub address: String,
    pub coordinate: Coordinate,
    pub image: Option<ImageAttachment>,
}

fn required(value: String, field: ReportField) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(ValidationError::MissingField(field))
    } else {
        Ok(trimmed.to_string())
    }
}

impl ReportDraft {
    /// Check title, description, address and coordinate are present.
    ///
    /// The image plays no part: an attached photo never makes an incomplete
    /// draft valid.
    pub fn validate(self) -> Result<NewReport, ValidationError> {
        let title = required(self.title, ReportField::Title)?;
        let description = required(self.description, ReportField::Description)?;
        let address = required(self.address, ReportField::Address)?;
        let coordinate = self
            .coordinate
            .ok_or(ValidationError::MissingField(ReportField::Location))?;

        Ok(NewReport {
            title,
            description,
            address,
            coordinate,
            image: self.image,
        })
    }
}
