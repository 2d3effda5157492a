//! UI Components for the Memory Video application.
//!
//! # Layout Components
//! - [`Hero`] - Main title and description
//! - [`Footer`] - Page footer
//!
//! # Feature Components
//! - [`UploadSection`] - Photo selection with drag & drop
//! - [`PhotoPreview`] - Thumbnail grid of the current selection
//! - [`ProcessingSection`] - Progress bar while the pipeline runs
//! - [`ResultsSection`] - Context summary and download
//! - [`ActivityLog`] - Session activity log

mod hero;
mod upload;
mod preview;
mod progress;
mod results;
mod footer;
mod logs;

pub use hero::*;
pub use upload::*;
pub use preview::*;
pub use progress::*;
pub use results::*;
pub use footer::*;
pub use logs::*;
