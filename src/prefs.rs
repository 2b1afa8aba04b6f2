use std::collections::HashMap;

use codee::{string::FromToStringCodec, Decoder, Encoder};
use thiserror::Error;

use crate::i18n::Language;

/// Storage key holding the language code (`"ar"` / `"en"`).
pub const LANGUAGE_KEY: &str = "lang";
/// Storage key holding the dark theme flag (`"true"` / `"false"`).
pub const THEME_KEY: &str = "dark";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl From<bool> for Theme {
    fn from(dark: bool) -> Self {
        if dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreferenceName {
    Language,
    Theme,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreferenceValue {
    Language(Language),
    Theme(Theme),
}

impl PreferenceValue {
    pub fn name(&self) -> PreferenceName {
        match self {
            PreferenceValue::Language(_) => PreferenceName::Language,
            PreferenceValue::Theme(_) => PreferenceName::Theme,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PreferenceError {
    #[error("malformed {key} preference {value:?}")]
    Malformed { key: &'static str, value: String },
    #[error("local storage is unavailable")]
    StorageUnavailable,
    #[error("could not write {key} preference")]
    WriteFailed { key: &'static str },
}

pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &'static str, value: &str) -> Result<(), PreferenceError>;
}

/// Receives the document level side effects of a preference change.
pub trait DocumentRoot {
    fn set_dark(&mut self, dark: bool);
    fn set_language(&mut self, lang: &str, dir: &str);
}

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(mut self, key: &str, value: &str) -> Self {
        self.entries.insert(key.to_string(), value.to_string());
        self
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &'static str, value: &str) -> Result<(), PreferenceError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Document root that only remembers what was applied to it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DetachedDocument {
    pub dark: bool,
    pub lang: String,
    pub dir: String,
}

impl DocumentRoot for DetachedDocument {
    fn set_dark(&mut self, dark: bool) {
        self.dark = dark;
    }

    fn set_language(&mut self, lang: &str, dir: &str) {
        self.lang = lang.to_string();
        self.dir = dir.to_string();
    }
}

fn decode_language(raw: &str) -> Result<Language, PreferenceError> {
    <FromToStringCodec as Decoder<Language>>::decode(raw).map_err(|_| {
        PreferenceError::Malformed {
            key: LANGUAGE_KEY,
            value: raw.to_string(),
        }
    })
}

fn decode_theme(raw: &str) -> Result<Theme, PreferenceError> {
    <FromToStringCodec as Decoder<bool>>::decode(raw)
        .map(Theme::from)
        .map_err(|_| PreferenceError::Malformed {
            key: THEME_KEY,
            value: raw.to_string(),
        })
}

fn encode_value(value: PreferenceValue) -> (&'static str, String) {
    let encoded = match value {
        PreferenceValue::Language(lang) => <FromToStringCodec as Encoder<Language>>::encode(&lang),
        PreferenceValue::Theme(theme) => {
            <FromToStringCodec as Encoder<bool>>::encode(&theme.is_dark())
        }
    };
    let key = match value.name() {
        PreferenceName::Language => LANGUAGE_KEY,
        PreferenceName::Theme => THEME_KEY,
    };
    // encoding through ToString cannot fail
    (key, encoded.unwrap_or_default())
}

/// Holds the language and theme preferences, persisting every change and
/// mirroring it onto the document root.
#[derive(Debug, Clone)]
pub struct PreferenceStore<S, D> {
    language: Language,
    theme: Theme,
    storage: S,
    document: D,
}

impl<S: KeyValueStore, D: DocumentRoot> PreferenceStore<S, D> {
    /// Store with default values. Nothing is read or applied.
    pub fn new(storage: S, document: D) -> Self {
        Self {
            language: Language::default(),
            theme: Theme::default(),
            storage,
            document,
        }
    }

    pub fn load(storage: S, document: D) -> Self {
        let mut store = Self::new(storage, document);
        store.reload();
        store
    }

    /// Re-reads both preferences from storage. Missing or malformed values
    /// fall back to the defaults and are left in storage until the next write.
    pub fn reload(&mut self) {
        self.language = self
            .read(LANGUAGE_KEY, decode_language)
            .unwrap_or_default();
        self.theme = self.read(THEME_KEY, decode_theme).unwrap_or_default();
        self.apply(PreferenceName::Language);
        self.apply(PreferenceName::Theme);
    }

    fn read<T>(&self, key: &str, decode: fn(&str) -> Result<T, PreferenceError>) -> Option<T> {
        // an empty entry is how a cleared key reads back
        let raw = self.storage.get(key).filter(|raw| !raw.is_empty())?;
        match decode(&raw) {
            Ok(v) => Some(v),
            Err(e) => {
                log::warn!("{e}, using default");
                None
            }
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn get(&self, name: PreferenceName) -> PreferenceValue {
        match name {
            PreferenceName::Language => PreferenceValue::Language(self.language),
            PreferenceName::Theme => PreferenceValue::Theme(self.theme),
        }
    }

    pub fn set(&mut self, value: PreferenceValue) {
        match value {
            PreferenceValue::Language(lang) => self.language = lang,
            PreferenceValue::Theme(theme) => self.theme = theme,
        }
        let (key, encoded) = encode_value(value);
        if let Err(e) = self.storage.set(key, &encoded) {
            log::debug!("ignoring preference write failure: {e}");
        }
        self.apply(value.name());
    }

    pub fn toggle(&mut self, name: PreferenceName) {
        let next = match name {
            PreferenceName::Language => PreferenceValue::Language(self.language.other()),
            PreferenceName::Theme => PreferenceValue::Theme(self.theme.toggled()),
        };
        self.set(next);
    }

    pub fn set_language(&mut self, language: Language) {
        self.set(PreferenceValue::Language(language));
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.set(PreferenceValue::Theme(theme));
    }

    pub fn toggle_language(&mut self) {
        self.toggle(PreferenceName::Language);
    }

    pub fn toggle_theme(&mut self) {
        self.toggle(PreferenceName::Theme);
    }

    fn apply(&mut self, name: PreferenceName) {
        match name {
            PreferenceName::Language => self
                .document
                .set_language(self.language.code(), self.language.direction().as_str()),
            PreferenceName::Theme => self.document.set_dark(self.theme.is_dark()),
        }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn document(&self) -> &D {
        &self.document
    }

    pub fn into_storage(self) -> S {
        self.storage
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type TestStore = PreferenceStore<MemoryStore, DetachedDocument>;

    fn load(storage: MemoryStore) -> TestStore {
        PreferenceStore::load(storage, DetachedDocument::default())
    }

    struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn get(&self, _key: &str) -> Option<String> {
            None
        }

        fn set(&mut self, _key: &'static str, _value: &str) -> Result<(), PreferenceError> {
            Err(PreferenceError::StorageUnavailable)
        }
    }

    #[test]
    fn test_empty_storage_uses_defaults() {
        let store = load(MemoryStore::new());
        assert_eq!(store.language(), Language::Arabic);
        assert_eq!(store.theme(), Theme::Light);
        assert_eq!(store.document().dir, "rtl");
        assert_eq!(store.document().lang, "ar");
        assert!(!store.document().dark);
        // reading never writes
        assert_eq!(store.storage().get(LANGUAGE_KEY), None);
        assert_eq!(store.storage().get(THEME_KEY), None);
    }

    #[test]
    fn test_dark_theme_persists_across_reload() {
        let mut store = load(MemoryStore::new());
        store.set_theme(Theme::Dark);
        assert_eq!(store.storage().get(THEME_KEY).as_deref(), Some("true"));
        assert!(store.document().dark);

        let reloaded = load(store.into_storage());
        assert_eq!(reloaded.theme(), Theme::Dark);
        assert!(reloaded.document().dark);
    }

    #[test]
    fn test_toggle_twice_restores_value() {
        let mut store = load(MemoryStore::new());
        store.toggle_theme();
        assert_eq!(store.storage().get(THEME_KEY).as_deref(), Some("true"));
        store.toggle_theme();
        assert_eq!(store.storage().get(THEME_KEY).as_deref(), Some("false"));
        assert_eq!(store.theme(), Theme::Light);

        store.toggle(PreferenceName::Language);
        assert_eq!(store.storage().get(LANGUAGE_KEY).as_deref(), Some("en"));
        assert_eq!(store.document().dir, "ltr");
        store.toggle(PreferenceName::Language);
        assert_eq!(store.storage().get(LANGUAGE_KEY).as_deref(), Some("ar"));
        assert_eq!(
            store.get(PreferenceName::Language),
            PreferenceValue::Language(Language::Arabic)
        );
        assert_eq!(store.document().dir, "rtl");
    }

    #[test]
    fn test_stored_values_are_read() {
        let store = load(
            MemoryStore::new()
                .with_entry(LANGUAGE_KEY, "en")
                .with_entry(THEME_KEY, "true"),
        );
        assert_eq!(store.language(), Language::English);
        assert_eq!(store.theme(), Theme::Dark);
        assert_eq!(store.document().lang, "en");
        assert_eq!(store.document().dir, "ltr");
    }

    #[test]
    fn test_malformed_values_fall_back_and_get_overwritten() {
        let mut store = load(
            MemoryStore::new()
                .with_entry(LANGUAGE_KEY, "klingon")
                .with_entry(THEME_KEY, "{\"dark\":1}"),
        );
        assert_eq!(store.language(), Language::Arabic);
        assert_eq!(store.theme(), Theme::Light);
        assert_eq!(store.storage().get(LANGUAGE_KEY).as_deref(), Some("klingon"));

        store.set_language(Language::English);
        store.toggle_theme();
        assert_eq!(store.storage().get(LANGUAGE_KEY).as_deref(), Some("en"));
        assert_eq!(store.storage().get(THEME_KEY).as_deref(), Some("true"));
    }

    #[test]
    fn test_empty_entries_read_as_missing() {
        let store = load(
            MemoryStore::new()
                .with_entry(LANGUAGE_KEY, "")
                .with_entry(THEME_KEY, ""),
        );
        assert_eq!(store.language(), Language::Arabic);
        assert_eq!(store.theme(), Theme::Light);
        assert_eq!(store.document().dir, "rtl");
    }

    #[test]
    fn test_write_failure_still_updates_memory() {
        let mut store = PreferenceStore::load(BrokenStore, DetachedDocument::default());
        store.toggle_theme();
        assert_eq!(store.theme(), Theme::Dark);
        assert!(store.document().dark);
        store.set(PreferenceValue::Language(Language::English));
        assert_eq!(store.language(), Language::English);
    }

    #[test]
    fn test_new_does_not_touch_document() {
        let store = PreferenceStore::new(MemoryStore::new(), DetachedDocument::default());
        assert_eq!(store.document(), &DetachedDocument::default());
    }
}
