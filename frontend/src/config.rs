//! Application configuration.
//!
//! Centralized constants for the Memory Video frontend.
//! Everything is compiled in; there is no runtime configuration surface.

/// Backend API base URL.
///
/// Empty means same origin: the backend serves this frontend and
/// exposes the pipeline endpoints next to it.
pub const BACKEND_URL: &str = "";

/// Phase 1 endpoint: multipart upload, returns paths, context and plan.
pub const UPLOAD_ENDPOINT: &str = "/upload";

/// Phase 2 endpoint: JSON body, returns the download URL.
pub const GENERATE_ENDPOINT: &str = "/generate_video";

/// Multipart field name repeated once per selected photo.
pub const PHOTOS_FIELD: &str = "photos";

/// Only blobs whose MIME type starts with this prefix are accepted.
pub const ACCEPTED_MIME_PREFIX: &str = "image/";

/// Time the 100% status stays on screen before the results view (ms).
pub const RESULTS_DELAY_MS: u64 = 1000;

/// Maximum activity log entries kept in memory.
pub const MAX_LOG_ENTRIES: usize = 100;

/// Whether a failed pipeline run also drops the current selection.
///
/// `false` keeps the photos so the user can retry right away.
pub const RESET_SELECTION_ON_FAILURE: bool = false;

// =============================================================================
// User-facing text
// =============================================================================

/// Shown when processing is requested with nothing selected.
pub const NO_PHOTOS_MESSAGE: &str = "Please select some photos first!";

/// Displayed in the results view when the context has no summary.
pub const FALLBACK_CONTEXT_MESSAGE: &str = "Context generated successfully!";

/// Prefix of the notification shown when the pipeline fails.
pub const FAILURE_PREFIX: &str = "Error processing photos";

/// Status while photos are being uploaded and analyzed.
pub const STATUS_UPLOADING: &str = "Uploading photos and analyzing context...";

/// Status once the context is back and the video is being rendered.
pub const STATUS_GENERATING: &str = "Context ready, generating video...";

/// Status once the video exists.
pub const STATUS_DONE: &str = "Video created successfully!";
