use crate::shared::icons::icon;
use crate::system::session::use_session;
use contracts::shared::i18n::Language;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

const TOOLTIP_MS: u32 = 3000;
const CHANGED_HIGHLIGHT_MS: u32 = 1500;

/// Fixed language dropdown in the top-right corner.
///
/// The tooltip shows for a few seconds after load and while hovered. After a
/// switch the button is highlighted briefly; a newer switch restarts the timer.
#[component]
pub fn LanguageSwitcher() -> impl IntoView {
    let session = use_session();
    let (menu_open, set_menu_open) = signal(false);
    let (show_tooltip, set_show_tooltip) = signal(true);
    let (changed, set_changed) = signal(false);
    let changed_generation = StoredValue::new(0u32);

    spawn_local(async move {
        TimeoutFuture::new(TOOLTIP_MS).await;
        set_show_tooltip.set(false);
    });

    let choose = move |language: Language| {
        set_menu_open.set(false);
        if session.get_language() == language {
            return;
        }
        session.set_language(language);
        set_changed.set(true);

        changed_generation.update_value(|g| *g += 1);
        let generation = changed_generation.get_value();
        spawn_local(async move {
            TimeoutFuture::new(CHANGED_HIGHLIGHT_MS).await;
            if changed_generation.get_value() == generation {
                set_changed.set(false);
            }
        });
    };

    view! {
        <div class="language-switcher">
            <button
                class=move || {
                    if changed.get() {
                        "language-switcher__trigger language-switcher__trigger--changed"
                    } else {
                        "language-switcher__trigger"
                    }
                }
                aria-haspopup="menu"
                aria-expanded=move || menu_open.get().to_string()
                on:click=move |_| set_menu_open.update(|open| *open = !*open)
                on:mouseenter=move |_| set_show_tooltip.set(true)
                on:mouseleave=move |_| set_show_tooltip.set(false)
            >
                {icon("globe")}
                <span class="language-switcher__name">
                    {move || session.language.get().display_name()}
                </span>
                <span class=move || {
                    if changed.get() {
                        "language-switcher__badge language-switcher__badge--pulse"
                    } else {
                        "language-switcher__badge"
                    }
                }>
                    {move || session.language.get().badge()}
                </span>
            </button>

            <Show when=move || menu_open.get()>
                <ul class="language-switcher__menu" role="menu">
                    {Language::all()
                        .into_iter()
                        .map(move |language| {
                            let is_active = move || session.language.get() == language;
                            view! {
                                <li
                                    role="menuitem"
                                    class=move || {
                                        if is_active() {
                                            "language-switcher__item language-switcher__item--active"
                                        } else {
                                            "language-switcher__item"
                                        }
                                    }
                                    on:click=move |_| choose(language)
                                >
                                    <span class="language-switcher__item-badge">{language.badge()}</span>
                                    <span>{language.display_name()}</span>
                                    <Show when=is_active>
                                        <span class="language-switcher__check">"✓"</span>
                                    </Show>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </Show>

            <Show when=move || show_tooltip.get() && !menu_open.get()>
                <div class="language-switcher__tooltip" role="tooltip">
                    {move || session.t("language.tooltip")}
                </div>
            </Show>
        </div>
    }
}
