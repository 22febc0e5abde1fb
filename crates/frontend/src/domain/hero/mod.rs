use crate::shared::components::ui::Button;
use crate::shared::config::use_site_config;
use crate::shared::dom::{scroll_to_section, scroll_y};
use crate::shared::icons::icon;
use crate::system::session::use_session;
use leptos::prelude::*;

/// Scroll depth after which the "scroll down" hint fades out.
const SCROLL_HINT_THRESHOLD: f64 = 50.0;

#[component]
pub fn Hero() -> impl IntoView {
    let session = use_session();
    let model_url = use_site_config().model_url();
    let (scrolled, set_scrolled) = signal(scroll_y() > SCROLL_HINT_THRESHOLD);

    let _ = window_event_listener(leptos::ev::scroll, move |_| {
        let past = scroll_y() > SCROLL_HINT_THRESHOLD;
        if past != scrolled.get_untracked() {
            set_scrolled.set(past);
        }
    });

    view! {
        <section id="hero" class="hero" data-model=model_url>
            <div class="hero__grid"></div>

            <div class="hero__content">
                <h1 class="hero__title glitch-text">
                    <span class="hero__title-accent">"Antonio "</span>
                    "Alexandre"
                </h1>
                <p class="hero__subtitle">
                    <span class="typewriter-text">{move || session.t("hero.subtitle")}</span>
                </p>
                <div class="hero__actions">
                    <Button on_click=Callback::new(move |_| scroll_to_section("projects"))>
                        {move || session.t("hero.cta.projects")}
                    </Button>
                    <Button
                        variant="outline"
                        on_click=Callback::new(move |_| scroll_to_section("contact"))
                    >
                        {move || session.t("hero.cta.contact")}
                    </Button>
                </div>
            </div>

            <button
                class=move || {
                    if scrolled.get() {
                        "hero__scroll-hint hero__scroll-hint--hidden"
                    } else {
                        "hero__scroll-hint"
                    }
                }
                aria-label=move || session.t("hero.scroll")
                on:click=move |_| scroll_to_section("about")
            >
                {icon("arrow-down")}
            </button>
        </section>
    }
}
