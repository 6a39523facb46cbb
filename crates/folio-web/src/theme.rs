use crate::constants::{DARK_CLASS, PREFERS_DARK_QUERY, THEME_ATTR, THEME_TOGGLE_ID};
use crate::dom;
use folio_core::{PreferenceStore, Theme, ThemeController};
use web_sys as web;

/// `localStorage`-backed preference store. Reads and writes degrade to
/// no-ops when storage is blocked.
pub struct LocalStore;

impl PreferenceStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        dom::local_storage_get_string(key)
    }

    fn set(&mut self, key: &str, value: &str) {
        dom::local_storage_set_string(key, value);
    }
}

pub fn platform_prefers_dark() -> bool {
    web::window()
        .and_then(|w| w.match_media(PREFERS_DARK_QUERY).ok().flatten())
        .map(|m| m.matches())
        .unwrap_or(false)
}

/// Reflect the theme on `<html>` and the toggle button.
pub fn apply(document: &web::Document, theme: Theme) {
    if let Some(root) = document.document_element() {
        let _ = root.set_attribute(THEME_ATTR, theme.as_attr());
        let _ = root.class_list().toggle_with_force(DARK_CLASS, theme.is_dark());
    }
    if let Some(button) = document.get_element_by_id(THEME_TOGGLE_ID) {
        let _ = button.set_attribute("aria-pressed", if theme.is_dark() { "true" } else { "false" });
    }
}

pub fn load(document: &web::Document) -> ThemeController<LocalStore> {
    let prefers_dark = platform_prefers_dark();
    let ctl = ThemeController::load(LocalStore, prefers_dark);
    apply(document, ctl.theme());
    log::info!(
        "[theme] {} (platform prefers {})",
        ctl.theme().as_attr(),
        if prefers_dark { "dark" } else { "light" }
    );
    ctl
}
