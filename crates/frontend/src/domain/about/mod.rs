use crate::shared::components::{CardAnimated, SectionHeader};
use crate::shared::icons::icon;
use crate::system::session::use_session;
use leptos::prelude::*;

/// (icon, title key, description key)
const HIGHLIGHTS: [(&str, &str, &str); 3] = [
    ("code", "about.card1.title", "about.card1.desc"),
    ("gamepad", "about.card2.title", "about.card2.desc"),
    ("brain", "about.card3.title", "about.card3.desc"),
];

#[component]
pub fn About() -> impl IntoView {
    let session = use_session();

    view! {
        <section id="about" class="section">
            <SectionHeader title_key="about.title" prefix="< " suffix=" />" />

            <div class="about__grid">
                <div class="about__text">
                    <h3 class="about__subtitle">{move || session.t("about.subtitle")}</h3>
                    <p>{move || session.t("about.p1")}</p>
                    <p>{move || session.t("about.p2")}</p>
                    <p>{move || session.t("about.p3")}</p>
                </div>

                <div class="about__cards">
                    {HIGHLIGHTS
                        .into_iter()
                        .enumerate()
                        .map(move |(i, (icon_name, title_key, desc_key))| {
                            let delay = i as u32 * 120;
                            // the last card spans both columns
                            let class = if i + 1 == HIGHLIGHTS.len() {
                                "about__card about__card--wide"
                            } else {
                                "about__card"
                            };
                            view! {
                                <CardAnimated delay_ms=delay class=class>
                                    <div class="about__card-icon">{icon(icon_name)}</div>
                                    <h4 class="about__card-title">{move || session.t(title_key)}</h4>
                                    <p>{move || session.t(desc_key)}</p>
                                </CardAnimated>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
