//! Services behind the UI components.
//!
//! # Services
//!
//! - [`decode`] - Reading selected files into previews
//! - [`api`] - Upload and generation endpoints
//! - [`browser`] - Progress, alerts and new tabs in the browser
//! - [`pipeline`] - The upload orchestrator driving the whole flow

pub mod api;
pub mod browser;
pub mod decode;
pub mod pipeline;

pub use api::*;
pub use browser::BrowserSurface;
pub use decode::*;
pub use pipeline::*;
