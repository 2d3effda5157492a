//! Hero section component

use leptos::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="hero">
            <h1>"Memory Video Creator"</h1>
            <p class="subtitle">
                "Drop a handful of photos. "
                "We work out the story behind them and turn it into a video."
            </p>
        </div>
    }
}
