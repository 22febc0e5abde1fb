//! Per-page session: the active language and its persisted preference.
//!
//! Built once by [`SessionProvider`] and handed to views through Leptos
//! context. Every translated string in the page reads `language`, so a switch
//! re-renders all text in the same tick.

use super::storage::LocalStorageStore;
use contracts::shared::i18n::{translate, Language};
use contracts::system::preference::LanguagePreference;
use leptos::prelude::*;
use web_sys::window;

#[derive(Clone, Copy)]
pub struct SessionContext {
    /// Current language signal.
    pub language: RwSignal<Language>,
    preference: StoredValue<LanguagePreference<LocalStorageStore>>,
}

impl SessionContext {
    /// Restore the saved preference, falling back to the default language.
    fn restore() -> Self {
        let mut preference = LanguagePreference::new(LocalStorageStore);
        let initial = preference.load();
        log::debug!("Session language restored: {}", initial);
        Self {
            language: RwSignal::new(initial),
            preference: StoredValue::new(preference),
        }
    }

    pub fn get_language(&self) -> Language {
        self.language.get()
    }

    /// Switch language and persist the choice.
    pub fn set_language(&self, language: Language) {
        self.preference.update_value(|p| p.set_language(language));
        self.language.set(language);
        apply_document_language(language);
        log::info!("Language switched to {}", language);
    }

    /// Reactive translation lookup.
    pub fn t(&self, key: &'static str) -> &'static str {
        translate(self.language.get(), key)
    }
}

/// Mirror the language on `<html lang>` for screen readers and hyphenation.
fn apply_document_language(language: Language) {
    let root = window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element());
    if let Some(root) = root {
        let _ = root.set_attribute("lang", language.code());
    }
}

/// Provides the session context to children components.
#[component]
pub fn SessionProvider(children: Children) -> impl IntoView {
    let session = SessionContext::restore();
    apply_document_language(session.language.get_untracked());
    provide_context(session);

    children()
}

/// Hook to use the session context.
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>()
        .expect("SessionContext not found. Wrap your app with SessionProvider.")
}
