//! Light/dark theme preference.
//!
//! The preference is a single string stored under [`THEME_STORAGE_KEY`].
//! It is read once at startup, falling back to the platform preference when
//! nothing is stored, and written on every toggle. Storage is abstracted
//! behind [`PreferenceStore`] so the browser's `localStorage` and an
//! in-memory map behave the same way.

use crate::constants::THEME_STORAGE_KEY;
use fnv::FnvHashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggle(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn as_attr(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn from_attr(v: &str) -> Option<Self> {
        match v {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn from_platform(prefers_dark: bool) -> Self {
        if prefers_dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }
}

/// Key/value string storage that may silently refuse writes.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

/// In-memory store; also the fallback when browser storage is unavailable.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    values: FnvHashMap<String, String>,
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }
}

/// Current theme plus the store it is persisted to.
pub struct ThemeController<S: PreferenceStore> {
    store: S,
    theme: Theme,
}

impl<S: PreferenceStore> ThemeController<S> {
    /// Persisted value wins; unknown or missing values fall back to the
    /// platform preference. Loading never writes.
    pub fn load(store: S, platform_prefers_dark: bool) -> Self {
        let persisted = store
            .get(THEME_STORAGE_KEY)
            .and_then(|v| Theme::from_attr(v.trim()));
        let theme = persisted.unwrap_or_else(|| Theme::from_platform(platform_prefers_dark));
        Self { store, theme }
    }

    #[inline]
    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn set(&mut self, theme: Theme) {
        self.theme = theme;
        self.store.set(THEME_STORAGE_KEY, theme.as_attr());
    }

    /// Flip and persist; returns the new theme.
    pub fn toggle(&mut self) -> Theme {
        self.set(self.theme.toggle());
        self.theme
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }
}
