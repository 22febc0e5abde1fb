use crate::shared::dom::viewport_width;
use contracts::domain::gallery::{page_size_for_width, GalleryState};
use leptos::prelude::*;

/// Gallery state sized for the viewport at mount time.
pub fn create_state() -> RwSignal<GalleryState> {
    RwSignal::new(GalleryState::with_page_size(page_size_for_width(
        viewport_width(),
    )))
}
