use folio_core::Viewport;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn on_click(element: &web::Element, mut handler: impl FnMut() + 'static) {
    let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
    let _ = element.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    handler: impl FnMut() + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        on_click(&el, handler);
    }
}

/// Match the canvas backing store to its CSS size times the device pixel
/// ratio, and report the CSS-pixel viewport the field should lay out in.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) -> Viewport {
    let dpr = web::window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0);
    let rect = canvas.get_bounding_client_rect();
    let viewport = Viewport::new(rect.width() as f32, rect.height() as f32, dpr as f32);
    let (w_px, h_px) = viewport.backing_size();
    canvas.set_width(w_px);
    canvas.set_height(h_px);
    viewport
}

/// Whether any part of the element is inside the window's vertical extent.
pub fn is_in_viewport(element: &web::Element) -> bool {
    let Some(window) = web::window() else {
        return false;
    };
    let Some(inner_h) = window.inner_height().ok().and_then(|v| v.as_f64()) else {
        return true;
    };
    let rect = element.get_bounding_client_rect();
    rect.bottom() > 0.0 && rect.top() < inner_h
}

/// Elements matching `selector` under `root`.
pub fn query_all(root: &web::Element, selector: &str) -> Vec<web::Element> {
    let Ok(list) = root.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<web::Element>().ok())
        .collect()
}

pub fn local_storage() -> Option<web::Storage> {
    web::window().and_then(|w| w.local_storage().ok().flatten())
}

pub fn local_storage_get_string(key: &str) -> Option<String> {
    local_storage().and_then(|s| s.get_item(key).ok().flatten())
}

pub fn local_storage_set_string(key: &str, value: &str) {
    match local_storage() {
        Some(s) => {
            if s.set_item(key, value).is_err() {
                log::warn!("[storage] write refused for {}", key);
            }
        }
        None => log::warn!("[storage] localStorage unavailable"),
    }
}
