use crate::layout::PageShell;
use crate::shared::config::provide_site_config;
use crate::system::session::SessionProvider;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Build-time configuration, shared with every section via context.
    provide_site_config();

    view! {
        <SessionProvider>
            <PageShell />
        </SessionProvider>
    }
}
