//! Preview grid for the current selection.
//!
//! The grid is rebuilt from scratch out of the selection on every change;
//! [`render_preview`] is the pure projection, [`PhotoPreview`] draws it.

use leptos::*;

use crate::session::Selection;
use crate::types::PhotoId;
use crate::{AppController, AppSession};

/// One thumbnail with its remove button.
#[derive(Clone, Debug, PartialEq)]
pub struct PreviewTile {
    pub id: PhotoId,
    pub src: String,
}

/// What the preview region should show.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PreviewGrid {
    /// Hidden when nothing is selected
    pub visible: bool,
    /// In selection order
    pub tiles: Vec<PreviewTile>,
}

pub fn render_preview<F>(selection: &Selection<F>) -> PreviewGrid {
    PreviewGrid {
        visible: !selection.is_empty(),
        tiles: selection
            .iter()
            .map(|photo| PreviewTile {
                id: photo.id.clone(),
                src: photo.preview.clone(),
            })
            .collect(),
    }
}

#[component]
pub fn PhotoPreview(
    session: AppSession,
    controller: StoredValue<AppController>,
) -> impl IntoView {
    let grid = create_memo(move |_| session.with(|s| render_preview(&s.selection)));

    view! {
        <Show
            when=move || grid.with(|g| g.visible)
            fallback=|| view! { }
        >
            <div class="photo-preview" id="photoPreview">
                <div class="preview-header">
                    {move || match grid.with(|g| g.tiles.len()) {
                        1 => "1 photo selected".to_string(),
                        n => format!("{} photos selected", n),
                    }}
                </div>
                <div class="photo-grid" id="photoGrid">
                    <For
                        each=move || grid.get().tiles
                        key=|tile| tile.id.clone()
                        children=move |tile| {
                            let id = tile.id.clone();
                            view! {
                                <div class="photo-item">
                                    <img src=tile.src alt="Preview"/>
                                    <button
                                        class="remove-btn"
                                        title="Remove"
                                        on:click=move |ev| {
                                            ev.stop_propagation();
                                            controller.with_value(|c| c.remove_photo(&id));
                                        }
                                    >
                                        "✕"
                                    </button>
                                </div>
                            }
                        }
                    />
                </div>
            </div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_selection_hides_grid() {
        let selection: Selection<()> = Selection::default();
        let grid = render_preview(&selection);
        assert!(!grid.visible);
        assert!(grid.tiles.is_empty());
    }

    #[test]
    fn test_tiles_follow_selection_order() {
        let mut selection = Selection::default();
        let first = selection.push((), "data:first".to_string());
        let second = selection.push((), "data:second".to_string());

        let grid = render_preview(&selection);
        assert!(grid.visible);
        assert_eq!(
            grid.tiles,
            vec![
                PreviewTile { id: first.clone(), src: "data:first".to_string() },
                PreviewTile { id: second, src: "data:second".to_string() },
            ]
        );

        selection.remove(&first);
        assert_eq!(render_preview(&selection).tiles.len(), 1);

        selection.clear();
        assert!(!render_preview(&selection).visible);
    }
}
