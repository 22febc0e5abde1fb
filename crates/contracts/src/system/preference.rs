//! Persisted language preference.
//!
//! The preference is the only state that outlives a page load. It is read once
//! at startup and written on every change.

use crate::shared::i18n::{translate, Language, LanguageError};
use std::collections::HashMap;
use std::sync::Mutex;

pub const LANGUAGE_STORAGE_KEY: &str = "portfolio-language";

/// Key/value storage the preference is persisted to.
pub trait PreferenceStore {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&self, key: &str, value: &str);
}

/// Process-local store for hosts without browser storage.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryStore {
    fn read(&self, key: &str) -> Option<String> {
        self.values.lock().ok()?.get(key).cloned()
    }

    fn write(&self, key: &str, value: &str) {
        if let Ok(mut values) = self.values.lock() {
            values.insert(key.to_string(), value.to_string());
        }
    }
}

impl<S: PreferenceStore + ?Sized> PreferenceStore for &S {
    fn read(&self, key: &str) -> Option<String> {
        (**self).read(key)
    }

    fn write(&self, key: &str, value: &str) {
        (**self).write(key, value)
    }
}

#[derive(Debug, Clone)]
pub struct LanguagePreference<S> {
    store: S,
    current: Language,
}

impl<S: PreferenceStore> LanguagePreference<S> {
    /// Starts at the default language; call [`load`](Self::load) to restore.
    pub fn new(store: S) -> Self {
        Self {
            store,
            current: Language::default(),
        }
    }

    /// Adopt the stored language if it is valid, otherwise keep the current one.
    pub fn load(&mut self) -> Language {
        if let Some(saved) = self.store.read(LANGUAGE_STORAGE_KEY) {
            match Language::from_code(&saved) {
                Ok(language) => self.current = language,
                Err(err) => log::debug!("Ignoring stored language preference: {}", err),
            }
        }
        self.current
    }

    pub fn current(&self) -> Language {
        self.current
    }

    /// Switch language by code. Unknown codes are rejected and nothing changes.
    pub fn set(&mut self, code: &str) -> Result<Language, LanguageError> {
        let language = Language::from_code(code)?;
        self.set_language(language);
        Ok(language)
    }

    pub fn set_language(&mut self, language: Language) {
        self.current = language;
        self.store.write(LANGUAGE_STORAGE_KEY, language.code());
    }

    pub fn t<'a>(&self, key: &'a str) -> &'a str {
        translate(self.current, key)
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_after_set_round_trips() {
        let store = MemoryStore::new();
        for language in Language::all() {
            let mut pref = LanguagePreference::new(&store);
            pref.set(language.code()).unwrap();

            let mut reloaded = LanguagePreference::new(&store);
            assert_eq!(reloaded.load(), language);
        }
    }

    #[test]
    fn test_invalid_stored_value_keeps_default() {
        for junk in ["", "EN", "es", "pt-BR", "  en"] {
            let store = MemoryStore::new();
            store.write(LANGUAGE_STORAGE_KEY, junk);
            let mut pref = LanguagePreference::new(&store);
            assert_eq!(pref.load(), Language::En, "stored {:?}", junk);
        }
    }

    #[test]
    fn test_missing_value_keeps_default() {
        let mut pref = LanguagePreference::new(MemoryStore::new());
        assert_eq!(pref.load(), Language::En);
        assert!(pref.store().read(LANGUAGE_STORAGE_KEY).is_none());
    }

    #[test]
    fn test_set_rejects_unknown_code() {
        let store = MemoryStore::new();
        let mut pref = LanguagePreference::new(&store);
        pref.set("pt").unwrap();

        assert_eq!(
            pref.set("fr"),
            Err(LanguageError::Unsupported("fr".to_string()))
        );
        assert_eq!(pref.current(), Language::Pt);
        assert_eq!(store.read(LANGUAGE_STORAGE_KEY).as_deref(), Some("pt"));
    }

    #[test]
    fn test_lookups_follow_language() {
        let mut pref = LanguagePreference::new(MemoryStore::new());
        assert_eq!(pref.t("nav.about"), "About");
        pref.set_language(Language::Pt);
        assert_eq!(pref.t("nav.about"), "Sobre");
        assert_eq!(pref.t("missing.key"), "missing.key");
    }
}
