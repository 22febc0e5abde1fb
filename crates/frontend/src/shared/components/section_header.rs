use crate::system::session::use_session;
use leptos::prelude::*;

/// Section heading wrapped in code-like tokens, e.g. `{ Projects }`.
///
/// `prefix` and `suffix` are rendered verbatim, spacing included.
#[component]
pub fn SectionHeader(
    /// Translation key of the heading text
    title_key: &'static str,
    #[prop(into)]
    prefix: String,
    #[prop(into)]
    suffix: String,
) -> impl IntoView {
    let session = use_session();

    view! {
        <div class="section-header">
            <h2 class="section-header__title">
                <span class="section-header__token">{prefix}</span>
                {move || session.t(title_key)}
                <span class="section-header__token">{suffix}</span>
            </h2>
            <div class="section-header__rule"></div>
        </div>
    }
}
