//! Session state: the selection store, the current view and the outcome
//! of the last pipeline run.
//!
//! One [`Session`] lives for the lifetime of the page. It is owned by a
//! [`SessionCell`], which is a Leptos `RwSignal` in the browser and a plain
//! `Rc<RefCell<_>>` in tests. Every mutation goes through that one owner.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::{RwSignal, SignalUpdate, SignalWithUntracked};

use crate::config::{MAX_LOG_ENTRIES, RESET_SELECTION_ON_FAILURE};
use crate::types::{LogEntry, LogLevel, Photo, PhotoId, View, ViewEvent};

// =============================================================================
// Selection Store
// =============================================================================

/// Ordered photos chosen by the user, keyed by unique [`PhotoId`].
///
/// Order is the order in which previews finished decoding.
#[derive(Clone, Debug)]
pub struct Selection<F> {
    photos: Vec<Photo<F>>,
}

impl<F> Default for Selection<F> {
    fn default() -> Self {
        Self { photos: Vec::new() }
    }
}

impl<F> Selection<F> {
    /// Append a decoded photo and return its id.
    pub fn push(&mut self, file: F, preview: String) -> PhotoId {
        let mut id = PhotoId::generate();
        while self.contains(&id) {
            id = PhotoId::generate();
        }
        self.photos.push(Photo {
            id: id.clone(),
            file,
            preview,
        });
        id
    }

    /// Remove the photo with `id`. Returns `false` if it was not there.
    pub fn remove(&mut self, id: &PhotoId) -> bool {
        let before = self.photos.len();
        self.photos.retain(|photo| &photo.id != id);
        self.photos.len() != before
    }

    pub fn clear(&mut self) {
        self.photos.clear();
    }

    pub fn contains(&self, id: &PhotoId) -> bool {
        self.photos.iter().any(|photo| &photo.id == id)
    }

    pub fn len(&self) -> usize {
        self.photos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.photos.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Photo<F>> {
        self.photos.iter()
    }

    /// File handles in selection order, for the upload body.
    pub fn files(&self) -> Vec<F>
    where
        F: Clone,
    {
        self.photos.iter().map(|photo| photo.file.clone()).collect()
    }
}

// =============================================================================
// Session
// =============================================================================

/// What a failed pipeline run does to the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FailureRecovery {
    /// Back to the upload view with the photos still selected.
    KeepSelection,
    /// Full reset, as if "create another" had been pressed.
    ResetSession,
}

impl Default for FailureRecovery {
    fn default() -> Self {
        if RESET_SELECTION_ON_FAILURE {
            FailureRecovery::ResetSession
        } else {
            FailureRecovery::KeepSelection
        }
    }
}

/// Process-wide state for one page instance.
#[derive(Clone, Debug)]
pub struct Session<F> {
    pub selection: Selection<F>,
    view: View,
    download_url: Option<String>,
    context_summary: Option<String>,
    logs: Vec<LogEntry>,
    input_epoch: u32,
}

impl<F> Default for Session<F> {
    fn default() -> Self {
        Self {
            selection: Selection::default(),
            view: View::Idle,
            download_url: None,
            context_summary: None,
            logs: Vec::new(),
            input_epoch: 0,
        }
    }
}

impl<F> Session<F> {
    pub fn view(&self) -> View {
        self.view
    }

    /// Set only after a successful run, cleared on reset.
    pub fn download_url(&self) -> Option<&str> {
        self.download_url.as_deref()
    }

    /// Text shown in the results view.
    pub fn context_summary(&self) -> Option<&str> {
        self.context_summary.as_deref()
    }

    pub fn logs(&self) -> &[LogEntry] {
        &self.logs
    }

    /// Bumped whenever the raw file input must be emptied.
    pub fn input_epoch(&self) -> u32 {
        self.input_epoch
    }

    /// Feed an event to the view state machine. Returns whether the view changed.
    pub fn apply(&mut self, event: ViewEvent) -> bool {
        let next = self.view.next(event);
        let changed = next != self.view;
        self.view = next;
        changed
    }

    /// Record a successful run and move to the results view.
    pub fn complete(&mut self, summary: String, download_url: String) {
        if self.apply(ViewEvent::Complete) {
            self.context_summary = Some(summary);
            self.download_url = Some(download_url);
        }
    }

    /// Leave the processing view after a failure.
    pub fn fail(&mut self, recovery: FailureRecovery) {
        match recovery {
            FailureRecovery::ResetSession => self.reset(),
            FailureRecovery::KeepSelection => {
                self.apply(ViewEvent::Fail);
                self.download_url = None;
                self.context_summary = None;
            }
        }
    }

    /// Empty the selection and the raw input control.
    pub fn clear_selection(&mut self) {
        self.selection.clear();
        self.input_epoch = self.input_epoch.wrapping_add(1);
    }

    /// Back to the initial empty state, whatever the current view.
    ///
    /// The activity log survives so the user can still see what happened.
    pub fn reset(&mut self) {
        self.clear_selection();
        self.download_url = None;
        self.context_summary = None;
        self.apply(ViewEvent::Reset);
    }

    /// Append to the activity log, dropping the oldest entries past the cap.
    pub fn log(&mut self, level: LogLevel, message: impl Into<String>) {
        self.logs.push(LogEntry::now(level, message));
        if self.logs.len() > MAX_LOG_ENTRIES {
            let excess = self.logs.len() - MAX_LOG_ENTRIES;
            self.logs.drain(..excess);
        }
    }

    pub fn clear_logs(&mut self) {
        self.logs.clear();
    }
}

// =============================================================================
// Session ownership
// =============================================================================

/// Single logical owner of the [`Session`].
pub trait SessionCell {
    /// File handle type stored in the selection.
    type Blob;

    /// Read the session without subscribing to changes.
    fn read<R>(&self, f: impl FnOnce(&Session<Self::Blob>) -> R) -> R;

    /// Mutate the session; observers are notified afterwards.
    fn write(&self, f: impl FnOnce(&mut Session<Self::Blob>));
}

impl<F: 'static> SessionCell for RwSignal<Session<F>> {
    type Blob = F;

    fn read<R>(&self, f: impl FnOnce(&Session<F>) -> R) -> R {
        SignalWithUntracked::with_untracked(self, f)
    }

    fn write(&self, f: impl FnOnce(&mut Session<F>)) {
        SignalUpdate::update(self, f)
    }
}

impl<F> SessionCell for Rc<RefCell<Session<F>>> {
    type Blob = F;

    fn read<R>(&self, f: impl FnOnce(&Session<F>) -> R) -> R {
        f(&self.borrow())
    }

    fn write(&self, f: impl FnOnce(&mut Session<F>)) {
        f(&mut self.borrow_mut())
    }
}
