//! Small helpers over `window` for scrolling and viewport metrics.

use contracts::domain::gallery::MEDIUM_BREAKPOINT;
use web_sys::{window, ScrollBehavior, ScrollIntoViewOptions, ScrollToOptions};

/// Gap left above a section after scrolling to it.
const SECTION_SCROLL_OFFSET: f64 = 20.0;

/// Smoothly scroll the page so the section's top sits just below the viewport edge.
pub fn scroll_to_section(section_id: &str) {
    let Some(window) = window() else { return };
    let Some(section) = window
        .document()
        .and_then(|d| d.get_element_by_id(section_id))
    else {
        log::debug!("scroll_to_section: #{} not found", section_id);
        return;
    };

    let page_y = window.scroll_y().unwrap_or(0.0);
    let top = section.get_bounding_client_rect().top() + page_y - SECTION_SCROLL_OFFSET;

    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

/// Smoothly bring a section into view (used after page changes).
pub fn scroll_into_view(section_id: &str) {
    let section = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(section_id));
    if let Some(section) = section {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        section.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

/// Current viewport width in CSS pixels. Without a window the wide layout is assumed.
pub fn viewport_width() -> u32 {
    window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .map(|w| w.max(0.0) as u32)
        .unwrap_or(MEDIUM_BREAKPOINT)
}

pub fn scroll_y() -> f64 {
    window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}
