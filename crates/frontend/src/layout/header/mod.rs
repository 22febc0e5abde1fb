pub mod language_switcher;

pub use language_switcher::LanguageSwitcher;
