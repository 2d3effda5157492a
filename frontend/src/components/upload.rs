//! Photo selection with drag & drop support.
//!
//! Hosts the drop zone, the hidden file input, the preview grid and the
//! process/clear buttons.

use leptos::*;
use web_sys::{DragEvent, Event, File, FileList, HtmlInputElement};

use crate::components::PhotoPreview;
use crate::services::ImageBlob;
use crate::{AppController, AppSession};

#[component]
pub fn UploadSection(
    session: AppSession,
    controller: StoredValue<AppController>,
) -> impl IntoView {
    let (drag_over, set_drag_over) = create_signal(false);
    let file_input = create_node_ref::<html::Input>();

    // Empty the raw input whenever the selection is cleared or reset
    create_effect(move |_| {
        session.with(|s| s.input_epoch());
        if let Some(input) = file_input.get_untracked() {
            input.set_value("");
        }
    });

    let add_files = move |files: Vec<File>| {
        if files.is_empty() {
            return;
        }
        let controller = controller.get_value();
        spawn_local(async move {
            controller.add_photos(files).await;
        });
    };

    let on_file_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        if let Some(files) = input.files() {
            add_files(file_list_to_vec(&files));
        }
    };

    let on_drag_over = move |ev: DragEvent| {
        ev.prevent_default();
        set_drag_over.set(true);
    };

    let on_drag_leave = move |_: DragEvent| set_drag_over.set(false);

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        set_drag_over.set(false);

        let files = ev
            .data_transfer()
            .and_then(|dt| dt.files())
            .map(|list| file_list_to_vec(&list))
            .unwrap_or_default();
        let images: Vec<File> = files.into_iter().filter(ImageBlob::is_image).collect();
        log::debug!("Dropped {} image(s)", images.len());
        add_files(images);
    };

    // Clicking anywhere in the drop zone opens the file picker
    let trigger_file_input = move |_| {
        if let Some(input) = file_input.get() {
            input.click();
        }
    };

    let on_process = move |_| {
        let controller = controller.get_value();
        spawn_local(async move {
            controller.process_photos().await;
        });
    };

    let on_clear = move |_| controller.with_value(|c| c.clear_photos());

    let has_photos = move || session.with(|s| !s.selection.is_empty());

    view! {
        <div class="upload-section" id="uploadSection">
            <div
                class="upload-area"
                class:dragover=move || drag_over.get()
                id="uploadArea"
                on:click=trigger_file_input
                on:dragover=on_drag_over
                on:dragleave=on_drag_leave
                on:drop=on_drop
            >
                <div class="upload-icon">"📷"</div>
                <div class="upload-text">"Drop your photos here"</div>
                <div class="upload-hint">"or click to browse"</div>
            </div>

            <input
                type="file"
                id="photoInput"
                accept="image/*"
                multiple=true
                style="display:none"
                node_ref=file_input
                on:change=on_file_change
            />

            <PhotoPreview session=session controller=controller/>

            <div class="upload-actions">
                <button
                    class="btn btn-secondary"
                    id="clearBtn"
                    on:click=on_clear
                    disabled=move || !has_photos()
                >
                    "Clear"
                </button>
                <button class="btn btn-primary" id="processBtn" on:click=on_process>
                    "Create Video"
                </button>
            </div>
        </div>
    }
}

fn file_list_to_vec(list: &FileList) -> Vec<File> {
    (0..list.length()).filter_map(|i| list.get(i)).collect()
}
