//! Browser side of the UI surface: progress signal, alerts, new tabs.

use leptos::{RwSignal, SignalSet};
use wasm_bindgen::{JsCast, JsValue};

use crate::services::pipeline::UiSurface;
use crate::types::Progress;

/// [`UiSurface`] backed by a Leptos progress signal and `window`.
#[derive(Clone, Copy)]
pub struct BrowserSurface {
    progress: RwSignal<Progress>,
}

impl BrowserSurface {
    pub fn new(progress: RwSignal<Progress>) -> Self {
        Self { progress }
    }
}

impl UiSurface for BrowserSurface {
    fn report_progress(&self, percentage: u8, status: &str) {
        self.progress.set(Progress::new(percentage, status));
    }

    fn notify(&self, message: &str) {
        if let Err(e) = gloo_utils::window().alert_with_message(message) {
            log::warn!("Could not show alert: {}", js_error_message(&e));
        }
    }

    fn open_url(&self, url: &str) {
        match gloo_utils::window().open_with_url_and_target(url, "_blank") {
            Ok(Some(_)) => log::info!("⬇️  Opened {}", url),
            Ok(None) => log::warn!("Popup blocked while opening {}", url),
            Err(e) => log::error!("Could not open {}: {}", url, js_error_message(&e)),
        }
    }
}

/// Human readable message out of a thrown JS value.
pub(crate) fn js_error_message(value: &JsValue) -> String {
    if let Some(error) = value.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}
