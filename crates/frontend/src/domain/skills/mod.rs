use crate::shared::components::{CardAnimated, SectionHeader};
use crate::system::session::use_session;
use contracts::domain::skills::{skill_groups, Skill};
use leptos::prelude::*;

#[component]
fn SkillBar(skill: &'static Skill) -> impl IntoView {
    let width = format!("width: {}%;", skill.level.min(100));

    view! {
        <div class="skill">
            <div class="skill__header">
                <span class="skill__name">{skill.name}</span>
                <span class="skill__level">{format!("{}%", skill.level)}</span>
            </div>
            <div class="skill__track">
                <div class="skill__fill" style=width></div>
            </div>
        </div>
    }
}

#[component]
pub fn Skills() -> impl IntoView {
    let session = use_session();

    view! {
        <section id="skills" class="section">
            <SectionHeader title_key="skills.title" prefix="function " suffix="()" />

            <div class="skills__grid">
                {skill_groups()
                    .into_iter()
                    .enumerate()
                    .map(move |(i, group)| {
                        let delay = (i as u32 + 1) * 100;
                        let title_key = group.category.title_key();
                        view! {
                            <CardAnimated delay_ms=delay class="skills__card">
                                <h3 class="skills__card-title">{move || session.t(title_key)}</h3>
                                {group
                                    .skills
                                    .into_iter()
                                    .map(|skill| view! { <SkillBar skill=skill /> })
                                    .collect_view()}
                            </CardAnimated>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
