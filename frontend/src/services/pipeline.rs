//! Upload orchestrator.
//!
//! Owns the user-facing flow: building the selection, running the two
//! dependent backend calls one after the other and moving the session
//! between the upload, processing and results views.
//!
//! ```text
//!   Idle ──process──▶ Processing ──upload ok, generate ok──▶ Results
//!    ▲                    │                                     │
//!    └──────failure───────┘◀────────────reset───────────────────┘
//! ```

use std::time::Duration;

use crate::config::{
    FAILURE_PREFIX, NO_PHOTOS_MESSAGE, RESULTS_DELAY_MS, STATUS_DONE, STATUS_GENERATING,
    STATUS_UPLOADING,
};
use crate::services::api::PipelineApi;
use crate::services::decode::{decode_batch, partition_images, ImageBlob};
use crate::session::{FailureRecovery, SessionCell};
use crate::types::{AppError, AppResult, LogLevel, PhotoId, View, ViewEvent};

/// Write side of the UI the orchestrator talks to.
pub trait UiSurface {
    /// Progress reporter: fill to `percentage` and show `status` verbatim.
    fn report_progress(&self, percentage: u8, status: &str);

    /// Blocking notification.
    fn notify(&self, message: &str);

    /// Open `url` in a new browsing context.
    fn open_url(&self, url: &str);
}

/// Tunables for a pipeline run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PipelineOptions {
    /// How long the 100% status stays up before the results view.
    pub results_delay: Duration,
    pub recovery: FailureRecovery,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            results_delay: Duration::from_millis(RESULTS_DELAY_MS),
            recovery: FailureRecovery::default(),
        }
    }
}

struct PipelineOutcome {
    summary: String,
    download_url: String,
}

/// Drives the selection and the upload → generate pipeline.
#[derive(Clone)]
pub struct Orchestrator<C, A, U> {
    session: C,
    api: A,
    surface: U,
    options: PipelineOptions,
}

impl<C, A, U> Orchestrator<C, A, U>
where
    C: SessionCell,
    C::Blob: ImageBlob + Clone,
    A: PipelineApi<C::Blob>,
    U: UiSurface,
{
    pub fn new(session: C, api: A, surface: U, options: PipelineOptions) -> Self {
        Self {
            session,
            api,
            surface,
            options,
        }
    }

    pub fn session(&self) -> &C {
        &self.session
    }

    /// Decode `blobs` and append each one to the selection as it finishes.
    ///
    /// Non-images are dropped silently. A file that cannot be read is
    /// skipped with a warning in the activity log.
    pub async fn add_photos(&self, blobs: Vec<C::Blob>) {
        let (images, rejected) = partition_images(blobs);
        if rejected > 0 {
            log::debug!("Ignored {} non-image file(s)", rejected);
        }
        if images.is_empty() {
            return;
        }

        log::info!("🖼️  Reading {} photo(s)", images.len());

        decode_batch(images, |blob, result| match result {
            Ok(preview) => self.session.write(|s| {
                s.selection.push(blob, preview);
            }),
            Err(err) => {
                log::warn!("⚠️  {}", err);
                self.session
                    .write(|s| s.log(LogLevel::Warning, format!("Skipped photo. {}", err)));
            }
        })
        .await;
    }

    /// Remove one photo. Unknown ids are ignored.
    pub fn remove_photo(&self, id: &PhotoId) {
        if self.session.read(|s| s.selection.contains(id)) {
            self.session.write(|s| {
                s.selection.remove(id);
            });
        }
    }

    /// Drop every selected photo and empty the file input.
    pub fn clear_photos(&self) {
        self.session.write(|s| s.clear_selection());
    }

    /// Run the full pipeline on the current selection.
    ///
    /// Every failure ends here: it is shown to the user once and the
    /// session goes back to the upload view.
    pub async fn process_photos(&self) {
        let (view, files) = self
            .session
            .read(|s| (s.view(), s.selection.files()));

        if files.is_empty() {
            let err = AppError::Validation(NO_PHOTOS_MESSAGE.to_string());
            log::warn!("{}", err);
            self.surface.notify(&err.to_string());
            return;
        }
        if view != View::Idle {
            log::warn!("Pipeline already running, ignoring request");
            return;
        }

        let count = files.len();
        self.session.write(|s| {
            s.apply(ViewEvent::Submit);
            s.log(LogLevel::Info, format!("Uploading {} photo(s)", count));
        });
        self.surface.report_progress(0, STATUS_UPLOADING);

        match self.run_pipeline(&files).await {
            Ok(outcome) => {
                if !self.options.results_delay.is_zero() {
                    gloo_timers::future::sleep(self.options.results_delay).await;
                }
                log::info!("✅ Video ready at {}", outcome.download_url);
                self.session.write(|s| {
                    s.log(LogLevel::Success, STATUS_DONE);
                    s.complete(outcome.summary, outcome.download_url);
                });
            }
            Err(err) => {
                log::error!("❌ {}", err);
                self.surface
                    .notify(&format!("{}: {}", FAILURE_PREFIX, err));
                let recovery = self.options.recovery;
                self.session.write(|s| {
                    s.log(LogLevel::Error, err.to_string());
                    s.fail(recovery);
                });
            }
        }
    }

    async fn run_pipeline(&self, files: &[C::Blob]) -> AppResult<PipelineOutcome> {
        let uploaded = self.api.upload(files).await?;
        log::info!(
            "📤 Upload done, {} photo(s) stored",
            uploaded.photo_paths.len()
        );
        self.surface.report_progress(50, STATUS_GENERATING);
        self.session.write(|s| s.log(LogLevel::Info, STATUS_GENERATING));

        let generated = self.api.generate(&uploaded.generate_request()).await?;
        self.surface.report_progress(100, STATUS_DONE);

        Ok(PipelineOutcome {
            summary: uploaded.context.summary(),
            download_url: generated.download_url,
        })
    }

    /// Open the last produced video, if any.
    pub fn download_video(&self) {
        let url = self
            .session
            .read(|s| s.download_url().map(str::to_string));
        if let Some(url) = url {
            self.surface.open_url(&url);
        }
    }

    /// "Create another": back to an empty upload view from anywhere.
    pub fn reset_app(&self) {
        log::info!("🔄 Starting over");
        self.session.write(|s| s.reset());
    }
}
