//! The location form and its submission.
use std::sync::Arc;

use async_trait::async_trait;
use geo_fuzz::{Coordinate, FuzzError, FuzzRadiusKm};
use serde::{Deserialize, Serialize};
use strum::Display;
use tokio::sync::Mutex;

use super::SubmitError;

pub const FUZZY_FIELD: &str = "fuzzy";
pub const LAT_FIELD: &str = "lat";
pub const LNG_FIELD: &str = "lng";

/// The form carrying the fuzz radius in and the fuzzed position out.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeoForm {
    /// Target URL of the POST.
    pub action: String,
    /// Fuzz radius in km, as typed.
    pub fuzzy: String,
    pub lat: String,
    pub lng: String,
}

impl GeoForm {
    pub fn new(action: impl Into<String>) -> Self {
        Self {
            action: action.into(),
            ..Self::default()
        }
    }

    pub fn with_fuzzy(mut self, fuzzy: impl Into<String>) -> Self {
        self.fuzzy = fuzzy.into();
        self
    }

    /// The radius from the `fuzzy` field, or `default` when the field is
    /// blank.
    pub fn fuzz_radius(&self, default: FuzzRadiusKm) -> Result<FuzzRadiusKm, FuzzError> {
        if self.fuzzy.trim().is_empty() {
            return Ok(default);
        }
        self.fuzzy.parse()
    }

    pub fn set_coordinate(&mut self, coordinate: Coordinate) {
        self.lat = coordinate.latitude.to_string();
        self.lng = coordinate.longitude.to_string();
    }

    /// The POST this form submits, fields in form order.
    pub fn submission(&self) -> FormSubmission {
        FormSubmission {
            method: HttpMethod::Post,
            action: self.action.clone(),
            fields: vec![
                (FUZZY_FIELD.to_string(), self.fuzzy.clone()),
                (LAT_FIELD.to_string(), self.lat.clone()),
                (LNG_FIELD.to_string(), self.lng.clone()),
            ],
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, Display)]
#[strum(serialize_all = "UPPERCASE")]
pub enum HttpMethod {
    #[default]
    Post,
}

/// A form submission as sent to the server.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormSubmission {
    pub method: HttpMethod,
    pub action: String,
    pub fields: Vec<(String, String)>,
}

impl FormSubmission {
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

/// Sends a form to the server.
#[async_trait]
pub trait FormSubmitter: Send + Sync {
    async fn submit(&self, submission: FormSubmission) -> Result<(), SubmitError>;
}

/// Keeps every submission in memory instead of sending it.
#[derive(Clone, Debug, Default)]
pub struct RecordingSubmitter {
    submissions: Arc<Mutex<Vec<FormSubmission>>>,
}

impl RecordingSubmitter {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn submissions(&self) -> Vec<FormSubmission> {
        self.submissions.lock().await.clone()
    }
}

#[async_trait]
impl FormSubmitter for RecordingSubmitter {
    async fn submit(&self, submission: FormSubmission) -> Result<(), SubmitError> {
        tracing::debug!(action = %submission.action, "form recorded");
        self.submissions.lock().await.push(submission);
        Ok(())
    }
}
