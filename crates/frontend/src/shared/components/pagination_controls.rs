use crate::shared::icons::icon;
use crate::system::session::use_session;
use leptos::prelude::*;

/// First / previous / "n / total" / next / last controls.
///
/// Pages are 1-based. The component reports raw targets; clamping is the
/// owner's job (`GalleryState::go_to`).
#[component]
pub fn PaginationControls(
    /// Current page (1-based)
    #[prop(into)]
    current_page: Signal<usize>,

    /// Total number of pages
    #[prop(into)]
    total_pages: Signal<usize>,

    /// Callback when page changes
    on_page_change: Callback<usize>,
) -> impl IntoView {
    let session = use_session();
    let at_start = move || current_page.get() <= 1;
    let at_end = move || current_page.get() >= total_pages.get();

    view! {
        <div class="pagination-controls">
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(1)
                disabled=at_start
                aria-label=move || session.t("projects.pagination.first")
                title=move || session.t("projects.pagination.first")
            >
                {icon("chevrons-left")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(current_page.get().saturating_sub(1))
                disabled=at_start
                aria-label=move || session.t("projects.pagination.prev")
                title=move || session.t("projects.pagination.prev")
            >
                {icon("chevron-left")}
            </button>
            <span class="pagination-info">
                {move || format!("{} / {}", current_page.get(), total_pages.get().max(1))}
            </span>
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(current_page.get() + 1)
                disabled=at_end
                aria-label=move || session.t("projects.pagination.next")
                title=move || session.t("projects.pagination.next")
            >
                {icon("chevron-right")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(total_pages.get())
                disabled=at_end
                aria-label=move || session.t("projects.pagination.last")
                title=move || session.t("projects.pagination.last")
            >
                {icon("chevrons-right")}
            </button>
        </div>
    }
}
