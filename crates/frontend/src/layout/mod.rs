pub mod footer;
pub mod header;

use crate::domain::about::About;
use crate::domain::contact::ui::ContactSection;
use crate::domain::hero::Hero;
use crate::domain::projects::ui::list::ProjectsSection;
use crate::domain::skills::Skills;
use footer::Footer;
use header::LanguageSwitcher;
use leptos::prelude::*;

/// Single-page layout.
///
/// ```text
/// +------------------------------------------+
/// |                     [LanguageSwitcher]   |
/// |  Hero (#hero)                            |
/// |  About (#about)                          |
/// |  Skills (#skills)                        |
/// |  Projects (#projects)                    |
/// |  Contact (#contact)                      |
/// |  Footer                                  |
/// +------------------------------------------+
/// ```
#[component]
pub fn PageShell() -> impl IntoView {
    view! {
        <LanguageSwitcher />
        <main class="page">
            <Hero />
            <About />
            <Skills />
            <ProjectsSection />
            <ContactSection />
        </main>
        <Footer />
    }
}
