//! In-memory stand-ins for the browser and the backend, used by unit tests.

use std::cell::RefCell;
use std::rc::Rc;

use futures::channel::oneshot;

use crate::services::{ImageBlob, PipelineApi, UiSurface};
use crate::types::{
    AppError, AppResult, GenerateRequest, GenerateResponse, Progress, UploadResponse,
};

enum Outcome {
    Ready(AppResult<String>),
    Gated(Option<oneshot::Receiver<AppResult<String>>>),
}

/// A file whose read either resolves immediately or waits for the test.
#[derive(Clone)]
pub struct FakeBlob {
    name: String,
    mime: String,
    outcome: Rc<RefCell<Outcome>>,
}

impl FakeBlob {
    fn with(name: &str, mime: &str, outcome: Outcome) -> Self {
        Self {
            name: name.to_string(),
            mime: mime.to_string(),
            outcome: Rc::new(RefCell::new(outcome)),
        }
    }

    pub fn image(name: &str) -> Self {
        let preview = format!("data:image/jpeg;base64,{}", name);
        Self::with(name, "image/jpeg", Outcome::Ready(Ok(preview)))
    }

    pub fn other(name: &str, mime: &str) -> Self {
        Self::with(name, mime, Outcome::Ready(Ok(String::new())))
    }

    pub fn broken(name: &str) -> Self {
        let err = AppError::Decode {
            name: name.to_string(),
            message: "corrupt data".to_string(),
        };
        Self::with(name, "image/jpeg", Outcome::Ready(Err(err)))
    }

    /// Image whose read completes when the returned sender fires.
    pub fn gated(name: &str) -> (Self, oneshot::Sender<AppResult<String>>) {
        let (tx, rx) = oneshot::channel();
        (Self::with(name, "image/jpeg", Outcome::Gated(Some(rx))), tx)
    }
}

impl ImageBlob for FakeBlob {
    fn mime_type(&self) -> String {
        self.mime.clone()
    }

    fn file_name(&self) -> String {
        self.name.clone()
    }

    async fn read_preview(&self) -> AppResult<String> {
        let gate = match &mut *self.outcome.borrow_mut() {
            Outcome::Ready(result) => return result.clone(),
            Outcome::Gated(rx) => rx.take(),
        };
        let cancelled = || AppError::Decode {
            name: self.name.clone(),
            message: "cancelled".to_string(),
        };
        match gate {
            Some(rx) => rx.await.unwrap_or_else(|_| Err(cancelled())),
            None => Err(cancelled()),
        }
    }
}

struct FakeApiState {
    upload: AppResult<UploadResponse>,
    generate: AppResult<GenerateResponse>,
    uploads: Vec<Vec<String>>,
    generate_requests: Vec<GenerateRequest>,
}

/// Backend with canned answers that records every call.
#[derive(Clone)]
pub struct FakeApi {
    state: Rc<RefCell<FakeApiState>>,
}

impl FakeApi {
    pub fn new(upload: AppResult<UploadResponse>, generate: AppResult<GenerateResponse>) -> Self {
        Self {
            state: Rc::new(RefCell::new(FakeApiState {
                upload,
                generate,
                uploads: Vec::new(),
                generate_requests: Vec::new(),
            })),
        }
    }

    /// Backend that fails any call made to it.
    pub fn unreachable() -> Self {
        Self::new(
            Err(AppError::Upload("unexpected call".to_string())),
            Err(AppError::Generation("unexpected call".to_string())),
        )
    }

    /// File names sent by each upload call.
    pub fn upload_calls(&self) -> Vec<Vec<String>> {
        self.state.borrow().uploads.clone()
    }

    pub fn generate_calls(&self) -> Vec<GenerateRequest> {
        self.state.borrow().generate_requests.clone()
    }
}

impl PipelineApi<FakeBlob> for FakeApi {
    async fn upload(&self, files: &[FakeBlob]) -> AppResult<UploadResponse> {
        let mut state = self.state.borrow_mut();
        state
            .uploads
            .push(files.iter().map(|f| f.file_name()).collect());
        state.upload.clone()
    }

    async fn generate(&self, request: &GenerateRequest) -> AppResult<GenerateResponse> {
        let mut state = self.state.borrow_mut();
        state.generate_requests.push(request.clone());
        state.generate.clone()
    }
}

/// UI surface that remembers everything written to it.
#[derive(Clone, Default)]
pub struct RecordingSurface {
    progress: Rc<RefCell<Vec<Progress>>>,
    notices: Rc<RefCell<Vec<String>>>,
    opened: Rc<RefCell<Vec<String>>>,
}

impl RecordingSurface {
    pub fn progress(&self) -> Vec<Progress> {
        self.progress.borrow().clone()
    }

    pub fn notices(&self) -> Vec<String> {
        self.notices.borrow().clone()
    }

    pub fn opened(&self) -> Vec<String> {
        self.opened.borrow().clone()
    }
}

impl UiSurface for RecordingSurface {
    fn report_progress(&self, percentage: u8, status: &str) {
        self.progress
            .borrow_mut()
            .push(Progress::new(percentage, status));
    }

    fn notify(&self, message: &str) {
        self.notices.borrow_mut().push(message.to_string());
    }

    fn open_url(&self, url: &str) {
        self.opened.borrow_mut().push(url.to_string());
    }
}

/// Upload answer for three beach photos.
pub fn beach_trip_upload() -> UploadResponse {
    serde_json::from_str(
        r#"{
            "success": true,
            "photo_count": 3,
            "photo_paths": ["/a", "/b", "/c"],
            "context": {"overall_context": "Beach trip", "mood": "sunny"},
            "video_plan": {"transitions": ["fade", "slide"], "duration_per_photo": 3}
        }"#,
    )
    .expect("valid upload fixture")
}
