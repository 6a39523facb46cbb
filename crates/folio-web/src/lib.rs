#![cfg(target_arch = "wasm32")]
use folio_core::{Palette, ThemeController, Variant};
use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod constants;
mod dom;
mod frame;
mod mount;
mod paint;
mod profile;
mod theme;
mod widgets;

use constants::{FIELD_ATTR, FIELD_SELECTOR, THEME_TOGGLE_ID};
use mount::FieldMount;
use theme::LocalStore;

thread_local! {
    static FIELDS: RefCell<Vec<FieldMount>> = const { RefCell::new(Vec::new()) };
    static THEME: RefCell<Option<ThemeController<LocalStore>>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("folio-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let ctl = theme::load(&document);
    let palette = Palette::for_theme(ctl.theme());
    THEME.with(|t| *t.borrow_mut() = Some(ctl));
    dom::add_click_listener(&document, THEME_TOGGLE_ID, || {
        toggle_theme();
    });

    mount_fields(&document, palette)?;

    widgets::wire_terminal(&document, || {
        toggle_theme();
    });
    widgets::wire_carousel(&document);
    widgets::wire_spotlights(&document);

    // Leaving the page tears the fields down like an unmount would.
    let pagehide = Closure::wrap(Box::new(unmount_fields) as Box<dyn FnMut()>);
    let _ = window.add_event_listener_with_callback("pagehide", pagehide.as_ref().unchecked_ref());
    pagehide.forget();
    Ok(())
}

fn mount_fields(document: &web::Document, palette: Palette) -> anyhow::Result<()> {
    let root = document
        .document_element()
        .ok_or_else(|| anyhow::anyhow!("no document element"))?;
    let base_seed = js_sys::Date::now() as u64;
    log::info!("[field] seed={}", base_seed);

    for (i, el) in dom::query_all(&root, FIELD_SELECTOR).into_iter().enumerate() {
        let attr = el.get_attribute(FIELD_ATTR).unwrap_or_default();
        let Some(variant) = Variant::from_attr(attr.trim()) else {
            log::warn!("[field] unknown {}=\"{}\"; skipping", FIELD_ATTR, attr);
            continue;
        };
        let canvas = match el.dyn_into::<web::HtmlCanvasElement>() {
            Ok(c) => c,
            Err(_) => continue,
        };
        // Per-field seeds so two fields on one page never share a layout.
        let seed = base_seed ^ (i as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15);
        match FieldMount::mount(canvas, variant, palette, seed) {
            Ok(m) => FIELDS.with(|f| f.borrow_mut().push(m)),
            Err(e) => log::error!("[field] mount {} failed: {:?}", variant.as_attr(), e),
        }
    }
    Ok(())
}

/// Stop every running field and detach its listeners.
#[wasm_bindgen]
pub fn unmount_fields() {
    let mounts: Vec<FieldMount> = FIELDS.with(|f| f.borrow_mut().drain(..).collect());
    let n = mounts.len();
    for m in mounts {
        m.unmount();
    }
    if n > 0 {
        log::info!("[field] unmounted {} field(s)", n);
    }
}

/// Flip the theme, persist it, and recolour the fields. Returns the new theme.
#[wasm_bindgen]
pub fn toggle_theme() -> String {
    let Some(theme) = THEME.with(|t| t.borrow_mut().as_mut().map(|ctl| ctl.toggle())) else {
        return String::new();
    };
    if let Some(document) = dom::window_document() {
        theme::apply(&document, theme);
    }
    let palette = Palette::for_theme(theme);
    FIELDS.with(|f| {
        for m in f.borrow().iter() {
            m.set_palette(palette);
        }
    });
    log::info!("[theme] toggled to {}", theme.as_attr());
    theme.as_attr().to_string()
}
