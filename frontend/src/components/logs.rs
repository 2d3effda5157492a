//! Activity log panel.
//!
//! Shows what happened during the session (skipped photos, pipeline
//! milestones, failures) with auto-scroll to the newest entry.

use leptos::*;

use crate::AppSession;

#[component]
pub fn ActivityLog(session: AppSession) -> impl IntoView {
    let logs = create_memo(move |_| session.with(|s| s.logs().to_vec()));

    // Reference to the logs content div for auto-scroll
    let logs_container = create_node_ref::<html::Div>();

    // Auto-scroll to bottom when logs change
    create_effect(move |_| {
        let _ = logs.get();
        if let Some(container) = logs_container.get() {
            request_animation_frame(move || {
                container.set_scroll_top(container.scroll_height());
            });
        }
    });

    view! {
        <Show
            when=move || logs.with(|l| !l.is_empty())
            fallback=|| view! { }
        >
            <div class="logs-panel">
                <div class="logs-header">
                    <span class="logs-title">"📋 Activity"</span>
                    <button
                        class="logs-clear"
                        on:click=move |_| session.update(|s| s.clear_logs())
                    >
                        "Clear"
                    </button>
                </div>
                <div class="logs-content" node_ref=logs_container>
                    <For
                        each=move || logs.get().into_iter().enumerate()
                        key=|(i, entry)| format!("{}-{}-{}", i, entry.timestamp, entry.message)
                        children=move |(_, entry)| {
                            view! {
                                <div class=format!("log-entry {}", entry.level.css_class())>
                                    <span class="log-time">"[" {entry.timestamp.clone()} "] "</span>
                                    {entry.message.clone()}
                                </div>
                            }
                        }
                    />
                </div>
            </div>
        </Show>
    }
}
