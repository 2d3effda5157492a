use leptos::*;
use crate::types::Progress;

/// Processing view: the progress reporter's fill bar and status line.
#[component]
pub fn ProcessingSection(progress: RwSignal<Progress>) -> impl IntoView {
    view! {
        <div class="processing-section" id="processingSection">
            <div class="spinner"></div>
            <h2>"Creating your memory video"</h2>
            <div class="progress-bar">
                <div
                    class="progress-fill"
                    id="progressFill"
                    style=move || progress.with(|p| p.fill_style())
                ></div>
            </div>
            <div class="processing-status" id="processingStatus">
                {move || progress.with(|p| p.status.clone())}
            </div>
        </div>
    }
}
