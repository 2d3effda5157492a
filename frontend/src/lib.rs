//! Memory Video - Frontend Rust/Leptos Application
//!
//! A WebAssembly frontend that lets the user pick a batch of photos,
//! uploads them, and drives the backend's two-step pipeline (context
//! generation, then video generation) until a download link is ready.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Hero (title, description)                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  MainContent (exactly one of)                                │
//! │  ├── UploadSection + PhotoPreview        (View::Idle)        │
//! │  ├── ProcessingSection                   (View::Processing)  │
//! │  └── ResultsSection                      (View::Results)     │
//! │  ActivityLog                                                 │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Footer                                                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`types`] - Common types (Photo, View, wire types, errors)
//! - [`session`] - Selection store and session state
//! - [`components`] - UI components (Upload, Preview, Progress, Results)
//! - [`services`] - Decoding, backend calls and the upload orchestrator

use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use wasm_bindgen::prelude::*;
use web_sys::File;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod session;
pub mod components;
pub mod services;

#[cfg(test)]
mod testing;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{
    // Selection
    Photo, PhotoId,
    // Views
    View, ViewEvent, Progress,
    // Logs
    LogEntry, LogLevel,
    // API
    UploadResponse, GenerateRequest, GenerateResponse, VideoContext,
    // Errors
    AppError, AppResult,
};

// Session
pub use session::{FailureRecovery, Selection, Session, SessionCell};

// Components
pub use components::*;

// Services
pub use services::*;

/// Session owner used by the browser app.
pub type AppSession = RwSignal<Session<File>>;

/// Orchestrator wired to `fetch` and the real DOM.
pub type AppController = Orchestrator<AppSession, HttpApi, BrowserSurface>;

// =============================================================================
// Application Entry Point
// =============================================================================

/// WASM entry point - called automatically by trunk.
#[wasm_bindgen(start)]
pub fn main() {
    // Setup panic hook for better error messages
    console_error_panic_hook::set_once();

    // Setup console logging
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🦀 Memory Video - Starting Leptos App");

    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Memory Video Creator"/>
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=MainContent/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn MainContent() -> impl IntoView {
    // One session for the lifetime of the page
    let session: AppSession = create_rw_signal(Session::default());
    let progress = create_rw_signal(Progress::default());

    let controller = store_value(Orchestrator::new(
        session,
        HttpApi::default(),
        BrowserSurface::new(progress),
        PipelineOptions::default(),
    ));

    let showing = move |view: View| session.with(|s| s.view() == view);

    view! {
        <div class="container">
            <Hero/>

            <Show
                when=move || showing(View::Idle)
                fallback=|| view! { }
            >
                <UploadSection session=session controller=controller/>
            </Show>

            <Show
                when=move || showing(View::Processing)
                fallback=|| view! { }
            >
                <ProcessingSection progress=progress/>
            </Show>

            <Show
                when=move || showing(View::Results)
                fallback=|| view! { }
            >
                <ResultsSection session=session controller=controller/>
            </Show>

            <ActivityLog session=session/>
        </div>

        <Footer/>
    }
}
