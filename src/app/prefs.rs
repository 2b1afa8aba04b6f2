use codee::string::FromToStringCodec;
use leptos::prelude::*;
use leptos_use::storage::use_local_storage;

use crate::{
    i18n::{translate, Language},
    prefs::{
        DocumentRoot, KeyValueStore, PreferenceError, PreferenceStore, Theme, LANGUAGE_KEY,
        THEME_KEY,
    },
};

/// Browser `localStorage`, one reactive entry per preference key. On the
/// server both entries stay empty and writes go nowhere.
#[derive(Debug, Clone, Copy)]
pub struct LocalStorage {
    language: (Signal<String>, WriteSignal<String>),
    theme: (Signal<String>, WriteSignal<String>),
}

impl LocalStorage {
    pub fn new() -> Self {
        let (language, set_language, _) =
            use_local_storage::<String, FromToStringCodec>(LANGUAGE_KEY);
        let (theme, set_theme, _) = use_local_storage::<String, FromToStringCodec>(THEME_KEY);
        Self {
            language: (language, set_language),
            theme: (theme, set_theme),
        }
    }

    fn entry(&self, key: &str) -> Option<(Signal<String>, WriteSignal<String>)> {
        match key {
            LANGUAGE_KEY => Some(self.language),
            THEME_KEY => Some(self.theme),
            _ => None,
        }
    }
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        let (value, _) = self.entry(key)?;
        Some(value.get_untracked())
    }

    fn set(&mut self, key: &'static str, value: &str) -> Result<(), PreferenceError> {
        let (_, set_value) = self.entry(key).ok_or(PreferenceError::WriteFailed { key })?;
        set_value.set(value.to_string());
        Ok(())
    }
}

/// The `<html>` element of the live document. The theme class also goes
/// on `<body>`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentElement;

impl DocumentRoot for DocumentElement {
    fn set_dark(&mut self, dark: bool) {
        #[cfg(feature = "hydrate")]
        {
            let doc = document();
            let roots = [doc.document_element(), doc.body().map(Into::into)];
            for el in roots.into_iter().flatten() {
                let classes = el.class_list();
                _ = if dark {
                    classes.add_1("dark")
                } else {
                    classes.remove_1("dark")
                };
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = dark;
        }
    }

    fn set_language(&mut self, lang: &str, dir: &str) {
        #[cfg(feature = "hydrate")]
        {
            let Some(el) = document().document_element() else {
                return;
            };
            _ = el.set_attribute("lang", lang);
            _ = el.set_attribute("dir", dir);
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (lang, dir);
        }
    }
}

type BrowserStore = PreferenceStore<LocalStorage, DocumentElement>;

/// Language and theme shared by every view through context.
#[derive(Debug, Clone, Copy)]
pub struct SitePreferences {
    store: RwSignal<BrowserStore>,
}

impl SitePreferences {
    pub fn language(&self) -> Language {
        self.store.with(|s| s.language())
    }

    pub fn theme(&self) -> Theme {
        self.store.with(|s| s.theme())
    }

    pub fn toggle_language(&self) {
        self.store.update(|s| s.toggle_language());
    }

    pub fn toggle_theme(&self) {
        self.store.update(|s| s.toggle_theme());
    }

    /// Translates `key` into the current language.
    pub fn t(&self, key: &'static str) -> &'static str {
        translate(self.language(), key)
    }
}

pub fn provide_preferences() -> SitePreferences {
    let store = RwSignal::new(PreferenceStore::new(LocalStorage::new(), DocumentElement));

    // the server renders the defaults, stored values are picked up once hydrated
    Effect::watch(
        || (),
        move |_, _, _| {
            store.update(|s| s.reload());
        },
        true,
    );

    let prefs = SitePreferences { store };
    provide_context(prefs);
    prefs
}

pub fn use_preferences() -> SitePreferences {
    expect_context::<SitePreferences>()
}
