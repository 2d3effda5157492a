//! Results view: context summary, download and "create another".

use leptos::*;

use crate::config::FALLBACK_CONTEXT_MESSAGE;
use crate::{AppController, AppSession};

#[component]
pub fn ResultsSection(
    session: AppSession,
    controller: StoredValue<AppController>,
) -> impl IntoView {
    let summary = move || {
        session.with(|s| {
            s.context_summary()
                .unwrap_or(FALLBACK_CONTEXT_MESSAGE)
                .to_string()
        })
    };

    view! {
        <div class="results-section" id="resultsSection">
            <h2>"🎬 Your video is ready!"</h2>
            <div class="context-box">
                <h3>"What we saw in your photos"</h3>
                <p id="contextText">{summary}</p>
            </div>
            <div class="results-actions">
                <button
                    class="btn btn-primary"
                    id="downloadBtn"
                    on:click=move |_| controller.with_value(|c| c.download_video())
                >
                    "Download Video"
                </button>
                <button
                    class="btn btn-secondary"
                    id="createAnotherBtn"
                    on:click=move |_| controller.with_value(|c| c.reset_app())
                >
                    "Create Another"
                </button>
            </div>
        </div>
    }
}
