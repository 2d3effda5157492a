//! Common types used across the frontend application.
//!
//! This module centralizes type definitions to avoid duplication
//! and ensure consistency across components and services.
//!
//! # Categories
//!
//! - **Selection Types** - Photos picked by the user
//! - **View Types** - The three mutually exclusive screens
//! - **Progress Types** - Processing bar state
//! - **Log Types** - Activity log shown to the user
//! - **API Types** - Backend request/response structures
//! - **Error Types** - Frontend error handling

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use thiserror::Error;

use crate::config::FALLBACK_CONTEXT_MESSAGE;

// =============================================================================
// Selection Types
// =============================================================================

/// Unique identifier of a selected photo.
///
/// Millisecond timestamp plus 64 random bits, so ids minted in the
/// same event tick still differ.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PhotoId(String);

impl PhotoId {
    /// Mint a fresh id.
    pub fn generate() -> Self {
        let millis = chrono::Utc::now().timestamp_millis();
        let nonce: [u8; 8] = rand::random();
        Self(format!("{:x}-{}", millis, hex::encode(nonce)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PhotoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PhotoId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// One user-selected image.
///
/// Only exists once its preview has been decoded.
#[derive(Clone, Debug)]
pub struct Photo<F> {
    /// Unique key within the selection
    pub id: PhotoId,
    /// Handle to the original blob (a reference, not a copy)
    pub file: F,
    /// Data URL used by the preview grid
    pub preview: String,
}

// =============================================================================
// View Types
// =============================================================================

/// The screen currently shown. Exactly one is visible at a time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum View {
    /// Upload section: pick photos, submit
    #[default]
    Idle,
    /// Processing section: progress bar active
    Processing,
    /// Results section: context summary and download
    Results,
}

/// Inputs to the view state machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewEvent {
    /// Pipeline started
    Submit,
    /// Both phases succeeded
    Complete,
    /// Either phase failed
    Fail,
    /// "Create another" or a full session reset
    Reset,
}

impl View {
    /// The single transition function of the view state machine.
    ///
    /// Events that make no sense in the current view leave it unchanged.
    pub fn next(self, event: ViewEvent) -> View {
        match (self, event) {
            (_, ViewEvent::Reset) => View::Idle,
            (View::Idle, ViewEvent::Submit) => View::Processing,
            (View::Processing, ViewEvent::Complete) => View::Results,
            (View::Processing, ViewEvent::Fail) => View::Idle,
            (current, _) => current,
        }
    }
}

// =============================================================================
// Progress Types
// =============================================================================

/// Progress bar state: fill percentage and status label.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Progress {
    pub percentage: u8,
    pub status: String,
}

impl Progress {
    pub fn new(percentage: u8, status: impl Into<String>) -> Self {
        Self {
            percentage,
            status: status.into(),
        }
    }

    /// Inline style for the fill element.
    pub fn fill_style(&self) -> String {
        format!("width: {}%;", self.percentage)
    }
}

// =============================================================================
// Log Types
// =============================================================================

/// Log severity level.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogLevel {
    /// Informational message
    Info,
    /// Success/completion message
    Success,
    /// Non-fatal problem (e.g. a photo that could not be read)
    Warning,
    /// Pipeline failure
    Error,
}

impl LogLevel {
    /// Get CSS class for styling.
    pub fn css_class(&self) -> &'static str {
        match self {
            LogLevel::Info => "log-info",
            LogLevel::Success => "log-success",
            LogLevel::Warning => "log-warning",
            LogLevel::Error => "log-error",
        }
    }
}

/// A single activity log entry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    /// Severity level
    pub level: LogLevel,
    /// Log message
    pub message: String,
    /// Timestamp string (HH:MM:SS)
    pub timestamp: String,
}

impl LogEntry {
    /// Entry stamped with the current local time.
    pub fn now(level: LogLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            timestamp: chrono::Local::now().format("%H:%M:%S").to_string(),
        }
    }
}

// =============================================================================
// API Types
// =============================================================================

/// Server-produced description of the photo set.
///
/// Kept as raw JSON so it reaches the generation endpoint unchanged.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VideoContext(pub Value);

impl VideoContext {
    /// The `overall_context` field, if present and non-empty.
    pub fn overall_context(&self) -> Option<&str> {
        self.0
            .get("overall_context")
            .and_then(Value::as_str)
            .filter(|text| !text.trim().is_empty())
    }

    /// Text for the results view.
    pub fn summary(&self) -> String {
        self.overall_context()
            .unwrap_or(FALLBACK_CONTEXT_MESSAGE)
            .to_string()
    }
}

/// Response from `POST /upload`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UploadResponse {
    /// Stored photo paths, in the order the backend settled on
    pub photo_paths: Vec<String>,
    /// Context generated for the set
    pub context: VideoContext,
    /// Opaque plan handed to the generation step
    #[serde(default)]
    pub video_plan: Value,
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub photo_count: Option<usize>,
}

impl UploadResponse {
    /// Body for phase 2, built from exactly what phase 1 returned.
    pub fn generate_request(&self) -> GenerateRequest {
        GenerateRequest {
            photo_paths: self.photo_paths.clone(),
            context: self.context.clone(),
            video_plan: self.video_plan.clone(),
        }
    }
}

/// Body of `POST /generate_video`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GenerateRequest {
    pub photo_paths: Vec<String>,
    pub context: VideoContext,
    pub video_plan: Value,
}

/// Response from `POST /generate_video`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GenerateResponse {
    /// Where the finished video can be fetched
    pub download_url: String,
    #[serde(default)]
    pub video_path: Option<String>,
    #[serde(default)]
    pub success: Option<bool>,
}

/// Error body the backend sends with non-2xx responses.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

// =============================================================================
// Error Types
// =============================================================================

/// Frontend application errors.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum AppError {
    /// User input rejected before any network call.
    #[error("{0}")]
    Validation(String),

    /// Phase 1 failed (HTTP status, network or parsing).
    #[error("Upload failed: {0}")]
    Upload(String),

    /// Phase 2 failed (HTTP status, network or parsing).
    #[error("Video generation failed: {0}")]
    Generation(String),

    /// A single photo could not be read for preview.
    #[error("Could not read {name}: {message}")]
    Decode { name: String, message: String },
}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_view_transitions() {
        assert_eq!(View::Idle.next(ViewEvent::Submit), View::Processing);
        assert_eq!(View::Processing.next(ViewEvent::Complete), View::Results);
        assert_eq!(View::Processing.next(ViewEvent::Fail), View::Idle);
        assert_eq!(View::Results.next(ViewEvent::Reset), View::Idle);
        assert_eq!(View::Processing.next(ViewEvent::Reset), View::Idle);
    }

    #[test]
    fn test_view_ignores_out_of_order_events() {
        assert_eq!(View::Processing.next(ViewEvent::Submit), View::Processing);
        assert_eq!(View::Results.next(ViewEvent::Submit), View::Results);
        assert_eq!(View::Idle.next(ViewEvent::Complete), View::Idle);
        assert_eq!(View::Results.next(ViewEvent::Fail), View::Results);
    }

    #[test]
    fn test_photo_ids_are_unique_within_a_tick() {
        let ids: std::collections::HashSet<PhotoId> =
            (0..1000).map(|_| PhotoId::generate()).collect();
        assert_eq!(ids.len(), 1000);
    }

    #[test]
    fn test_context_summary_fallback() {
        let with_text = VideoContext(json!({"overall_context": "Beach trip"}));
        assert_eq!(with_text.summary(), "Beach trip");

        let missing = VideoContext(json!({"themes": ["sea"]}));
        assert_eq!(missing.summary(), FALLBACK_CONTEXT_MESSAGE);

        let empty = VideoContext(json!({"overall_context": ""}));
        assert_eq!(empty.summary(), FALLBACK_CONTEXT_MESSAGE);

        let not_an_object = VideoContext(json!("just text"));
        assert_eq!(not_an_object.summary(), FALLBACK_CONTEXT_MESSAGE);
    }

    #[test]
    fn test_upload_response_deserialization() {
        let json = r#"{
            "success": true,
            "photo_count": 2,
            "context": {
                "overall_context": "A sunny day at the beach",
                "mood": "joyful",
                "photo_contexts": [{"index": 0}, {"index": 1}]
            },
            "video_plan": {"style": "cinematic", "durations": [3, 3]},
            "photo_paths": ["uploads/a.jpg", "uploads/b.jpg"]
        }"#;

        let response: UploadResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.photo_paths.len(), 2);
        assert_eq!(response.photo_count, Some(2));
        assert_eq!(response.context.summary(), "A sunny day at the beach");

        let request = response.generate_request();
        assert_eq!(request.context.0["mood"], "joyful");
        assert_eq!(request.video_plan["style"], "cinematic");
    }

    #[test]
    fn test_generate_request_wire_format() {
        let request = GenerateRequest {
            photo_paths: vec!["/a".to_string()],
            context: VideoContext(json!({"overall_context": "x"})),
            video_plan: json!({"k": 1}),
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            json!({
                "photo_paths": ["/a"],
                "context": {"overall_context": "x"},
                "video_plan": {"k": 1}
            })
        );
    }

    #[test]
    fn test_generate_response_requires_download_url() {
        let ok: GenerateResponse = serde_json::from_str(
            r#"{"success": true, "video_path": "outputs/v.mp4", "download_url": "/download/v.mp4"}"#,
        )
        .unwrap();
        assert_eq!(ok.download_url, "/download/v.mp4");

        let missing = serde_json::from_str::<GenerateResponse>(r#"{"success": true}"#);
        assert!(missing.is_err());
    }

    #[test]
    fn test_error_display() {
        let err = AppError::Upload("Server error (500): boom".to_string());
        assert_eq!(err.to_string(), "Upload failed: Server error (500): boom");

        let err = AppError::Decode {
            name: "a.jpg".to_string(),
            message: "truncated".to_string(),
        };
        assert_eq!(err.to_string(), "Could not read a.jpg: truncated");
    }
}
