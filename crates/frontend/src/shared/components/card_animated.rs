//! CardAnimated: Thaw `Card` that fades in on mount.
//!
//! The `card-appear` keyframes live in `crates/frontend/style/main.css`. Lists pass an
//! increasing `delay_ms` so cards cascade in:
//!
//! ```rust,ignore
//! {projects.into_iter().enumerate().map(|(i, p)| view! {
//!     <CardAnimated delay_ms=(i as u32) * 80 class="project-card">
//!         <ProjectCardBody project=p />
//!     </CardAnimated>
//! }).collect_view()}
//! ```

use leptos::prelude::*;
use thaw::Card;

#[component]
pub fn CardAnimated(
    /// Animation delay in milliseconds.
    #[prop(optional)]
    delay_ms: u32,
    /// Extra CSS classes for the card root.
    #[prop(optional, into)]
    class: String,
    children: Children,
) -> impl IntoView {
    let style = format!("animation: card-appear 0.3s ease-out {}ms both;", delay_ms);
    let class = if class.is_empty() {
        "card-animated".to_string()
    } else {
        format!("card-animated {}", class)
    };

    view! {
        <Card class=class attr:style=style>
            {children()}
        </Card>
    }
}
