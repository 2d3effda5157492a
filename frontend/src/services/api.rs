//! HTTP client for the two backend endpoints of the pipeline.
//!
//! | Method | Path              | Body                    | Returns                               |
//! |--------|-------------------|-------------------------|---------------------------------------|
//! | POST   | `/upload`         | multipart, `photos` × N | `photo_paths`, `context`, `video_plan`|
//! | POST   | `/generate_video` | JSON                    | `download_url`                        |

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use web_sys::{File, FormData};

use crate::config::{BACKEND_URL, GENERATE_ENDPOINT, PHOTOS_FIELD, UPLOAD_ENDPOINT};
use crate::services::browser::js_error_message;
use crate::types::{
    AppError, AppResult, ErrorBody, GenerateRequest, GenerateResponse, UploadResponse,
};

/// The remote half of the pipeline.
#[allow(async_fn_in_trait)]
pub trait PipelineApi<F> {
    /// Phase 1: send every file, get back paths, context and plan.
    async fn upload(&self, files: &[F]) -> AppResult<UploadResponse>;

    /// Phase 2: turn the phase 1 output into a video.
    async fn generate(&self, request: &GenerateRequest) -> AppResult<GenerateResponse>;
}

/// [`PipelineApi`] over `fetch`.
///
/// No timeout is applied: a backend that never answers keeps the
/// processing view up.
#[derive(Clone, Debug)]
pub struct HttpApi {
    base_url: String,
}

impl HttpApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }
}

impl Default for HttpApi {
    fn default() -> Self {
        Self::new(BACKEND_URL)
    }
}

impl PipelineApi<File> for HttpApi {
    async fn upload(&self, files: &[File]) -> AppResult<UploadResponse> {
        let form_data = FormData::new().map_err(|e| {
            AppError::Upload(format!("Failed to create FormData: {}", js_error_message(&e)))
        })?;

        for file in files {
            form_data
                .append_with_blob_and_filename(PHOTOS_FIELD, file, &file.name())
                .map_err(|e| {
                    AppError::Upload(format!(
                        "Failed to append {}: {}",
                        file.name(),
                        js_error_message(&e)
                    ))
                })?;
        }

        let request = Request::post(&self.url(UPLOAD_ENDPOINT))
            .body(form_data)
            .map_err(|e| AppError::Upload(format!("Failed to build request: {}", e)))?;

        let response = request
            .send()
            .await
            .map_err(|e| AppError::Upload(format!("HTTP request failed: {}", e)))?;

        read_json(response).await.map_err(AppError::Upload)
    }

    async fn generate(&self, request: &GenerateRequest) -> AppResult<GenerateResponse> {
        let request = Request::post(&self.url(GENERATE_ENDPOINT))
            .json(request)
            .map_err(|e| AppError::Generation(format!("Failed to build request: {}", e)))?;

        let response = request
            .send()
            .await
            .map_err(|e| AppError::Generation(format!("HTTP request failed: {}", e)))?;

        read_json(response).await.map_err(AppError::Generation)
    }
}

/// Check the status, then parse the JSON body.
async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, String> {
    if !response.ok() {
        let body = response.text().await.unwrap_or_default();
        return Err(server_error_message(response.status(), &body));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Message for a non-2xx response, preferring the backend's `error` field.
pub fn server_error_message(status: u16, body: &str) -> String {
    let detail = serde_json::from_str::<ErrorBody>(body)
        .map(|b| b.error)
        .unwrap_or_else(|_| body.trim().to_string());

    if detail.is_empty() {
        format!("Server error ({})", status)
    } else {
        format!("Server error ({}): {}", status, detail)
    }
}
