//! Two-language text layer.
//!
//! Translation is a flat key lookup: no interpolation, no plural rules and no
//! nested keys. A key missing from the active dictionary resolves to itself.

mod dictionary;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Languages the site is authored in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Pt,
}

impl Language {
    /// Code used in storage and in the `lang` attribute.
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Pt => "pt",
        }
    }

    /// Name of the language in its own script.
    pub fn display_name(&self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Pt => "Português",
        }
    }

    /// Two-letter badge shown on the switcher.
    pub fn badge(&self) -> &'static str {
        match self {
            Language::En => "EN",
            Language::Pt => "PT",
        }
    }

    pub fn all() -> [Language; 2] {
        [Language::En, Language::Pt]
    }

    /// Parse a stored or user-supplied code. Only the exact codes are accepted.
    pub fn from_code(code: &str) -> Result<Self, LanguageError> {
        match code {
            "en" => Ok(Language::En),
            "pt" => Ok(Language::Pt),
            other => Err(LanguageError::Unsupported(other.to_string())),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = LanguageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::from_code(s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LanguageError {
    #[error("unsupported language code: {0:?}")]
    Unsupported(String),
}

type Dictionary = HashMap<&'static str, &'static str>;

static EN: Lazy<Dictionary> = Lazy::new(|| dictionary::EN.iter().copied().collect());
static PT: Lazy<Dictionary> = Lazy::new(|| dictionary::PT.iter().copied().collect());

fn dictionary(language: Language) -> &'static Dictionary {
    match language {
        Language::En => &*EN,
        Language::Pt => &*PT,
    }
}

/// Look `key` up in the dictionary of `language`, falling back to the key.
pub fn translate<'a>(language: Language, key: &'a str) -> &'a str {
    match dictionary(language).get(key) {
        Some(value) => *value,
        None => key,
    }
}

/// Authored text available in both languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bilingual {
    pub en: &'static str,
    pub pt: &'static str,
}

impl Bilingual {
    pub const fn new(en: &'static str, pt: &'static str) -> Self {
        Self { en, pt }
    }

    pub fn get(&self, language: Language) -> &'static str {
        match language {
            Language::En => self.en,
            Language::Pt => self.pt,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn test_translate_known_key() {
        assert_eq!(translate(Language::En, "nav.projects"), "Projects");
        assert_eq!(translate(Language::Pt, "nav.projects"), "Projetos");
        assert_eq!(translate(Language::Pt, "contact.form.submit"), "Enviar Mensagem");
    }

    #[test]
    fn test_missing_key_returns_key() {
        assert_eq!(translate(Language::En, "does.not.exist"), "does.not.exist");
        assert_eq!(translate(Language::Pt, ""), "");
    }

    #[test]
    fn test_dictionaries_share_keys() {
        let en: BTreeSet<_> = dictionary::EN.iter().map(|(k, _)| *k).collect();
        let pt: BTreeSet<_> = dictionary::PT.iter().map(|(k, _)| *k).collect();
        assert_eq!(en, pt);
        // no key is declared twice in a table
        assert_eq!(en.len(), dictionary::EN.len());
        assert_eq!(pt.len(), dictionary::PT.len());
    }

    #[test]
    fn test_language_codes() {
        for language in Language::all() {
            assert_eq!(Language::from_code(language.code()), Ok(language));
            assert_eq!(language.code().parse::<Language>(), Ok(language));
        }
        assert_eq!(
            Language::from_code("EN"),
            Err(LanguageError::Unsupported("EN".to_string()))
        );
        assert!(Language::from_code("es").is_err());
        assert_eq!(Language::default(), Language::En);
    }

    #[test]
    fn test_bilingual_get() {
        let text = Bilingual::new("Hello", "Olá");
        assert_eq!(text.get(Language::En), "Hello");
        assert_eq!(text.get(Language::Pt), "Olá");
    }
}
