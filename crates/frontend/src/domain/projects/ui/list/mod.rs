pub mod state;

use self::state::create_state;
use super::media::ProjectMedia;
use crate::shared::components::{CardAnimated, PaginationControls, SectionHeader};
use crate::shared::dom::{scroll_into_view, viewport_width};
use crate::shared::icons::icon;
use crate::system::session::use_session;
use contracts::domain::catalog::{ProjectRecord, PROJECTS};
use contracts::domain::gallery::{page_size_for_width, GalleryFilter, FILTERS};
use leptos::prelude::*;
use thaw::*;

const SECTION_ID: &str = "projects";

#[component]
pub fn ProjectsSection() -> impl IntoView {
    let session = use_session();
    let state = create_state();

    // Page size follows the viewport; the current page is kept and clamped on render.
    let (viewport, set_viewport) = signal(viewport_width());
    let _ = window_event_listener(leptos::ev::resize, move |_| {
        set_viewport.set(viewport_width());
    });
    let page_size = Memo::new(move |_| page_size_for_width(viewport.get()));
    Effect::new(move |_| {
        let size = page_size.get();
        if state.with_untracked(|s| s.page_size) != size {
            state.update(|s| s.set_page_size(size));
            log::debug!("Gallery page size: {}", size);
        }
    });

    let total_pages = Signal::derive(move || state.with(|s| s.total_pages(PROJECTS)));
    let current_page = Signal::derive(move || state.with(|s| s.effective_page(PROJECTS)));
    let visible = move || state.with(|s| s.current_page(PROJECTS));

    let select_filter = move |filter: GalleryFilter| {
        if state.with_untracked(|s| s.filter) == filter {
            return;
        }
        state.update(|s| s.set_filter(filter));
        log::debug!("Gallery filter: {}", filter.key());
    };

    let go_to_page = Callback::new(move |target: usize| {
        let total = total_pages.get_untracked();
        let changed = state
            .try_update(|s| s.go_to(target, total))
            .unwrap_or(false);
        if changed {
            log::debug!("Gallery page: {} / {}", current_page.get_untracked(), total);
            scroll_into_view(SECTION_ID);
        }
    });

    let showing_line = move || {
        state.with(|s| {
            s.visible_range(PROJECTS).map(|(start, end)| {
                format!(
                    "{} {}-{} {} {} {}",
                    session.t("projects.pagination.showing"),
                    start,
                    end,
                    session.t("projects.pagination.of"),
                    s.filtered_count(PROJECTS),
                    session.t("projects.pagination.projects"),
                )
            })
        })
    };

    view! {
        <section id=SECTION_ID class="section section--dark">
            <SectionHeader title_key="projects.title" prefix="{ " suffix=" }" />

            <div class="projects__filters">
                {FILTERS
                    .into_iter()
                    .map(move |filter| {
                        let appearance = Signal::derive(move || {
                            if state.with(|s| s.filter == filter) {
                                ButtonAppearance::Primary
                            } else {
                                ButtonAppearance::Secondary
                            }
                        });
                        let label = move || match filter.translation_key() {
                            Some(key) => session.t(key),
                            None => filter.key(),
                        };
                        view! {
                            <Button
                                size=ButtonSize::Small
                                appearance=appearance
                                on_click=move |_| select_filter(filter)
                            >
                                {label}
                            </Button>
                        }
                    })
                    .collect_view()}
            </div>

            {move || {
                let projects = visible();
                if projects.is_empty() {
                    view! {
                        <p class="projects__empty">{move || session.t("projects.empty")}</p>
                    }
                    .into_any()
                } else {
                    view! {
                        <div class="projects__grid">
                            {projects
                                .into_iter()
                                .enumerate()
                                .map(|(i, project)| {
                                    let delay = i as u32 * 80;
                                    view! { <ProjectCard project=project delay_ms=delay /> }
                                })
                                .collect_view()}
                        </div>
                    }
                    .into_any()
                }
            }}

            <Show when=move || state.with(|s| s.show_pagination(PROJECTS))>
                <div class="projects__pagination">
                    <PaginationControls
                        current_page=current_page
                        total_pages=total_pages
                        on_page_change=go_to_page
                    />
                    <p class="projects__showing">{showing_line}</p>
                </div>
            </Show>
        </section>
    }
}

#[component]
fn ProjectCard(project: &'static ProjectRecord, delay_ms: u32) -> impl IntoView {
    let session = use_session();

    view! {
        <CardAnimated delay_ms=delay_ms class="project-card">
            <ProjectMedia media=project.media alt=project.title />
            <div class="project-card__body">
                <h3 class="project-card__title">{project.title}</h3>
                <p class="project-card__description">
                    {move || project.description.get(session.language.get())}
                </p>
                <div class="project-card__tags">
                    {project
                        .tags
                        .iter()
                        .map(|tag| view! { <span class="project-card__tag">{*tag}</span> })
                        .collect_view()}
                </div>
                <div class="project-card__links">
                    {project.demo_link.map(|href| view! {
                        <a class="button button--outline" href=href target="_blank" rel="noopener noreferrer">
                            {icon("external-link")}
                            {move || session.t("projects.demo")}
                        </a>
                    })}
                    {project.source_link.map(|href| view! {
                        <a class="button button--outline" href=href target="_blank" rel="noopener noreferrer">
                            {icon("github")}
                            {move || session.t("projects.code")}
                        </a>
                    })}
                </div>
            </div>
        </CardAnimated>
    }
}
