use crate::frame::{self, AnimationLoop, FieldContext};
use folio_core::{Palette, Variant};
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// An attached event listener that can be removed again.
pub struct Listener {
    target: web::EventTarget,
    kind: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

impl Listener {
    pub fn attach(
        target: &web::EventTarget,
        kind: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> Option<Self> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        target
            .add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())
            .ok()?;
        Some(Self {
            target: target.clone(),
            kind,
            closure,
        })
    }

    pub fn detach(self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.kind, self.closure.as_ref().unchecked_ref());
    }
}

/// A field running on a canvas, with everything needed to tear it down.
pub struct FieldMount {
    pub variant: Variant,
    pub field: Rc<RefCell<FieldContext>>,
    animation: AnimationLoop,
    listeners: Vec<Listener>,
}

impl FieldMount {
    pub fn mount(
        canvas: web::HtmlCanvasElement,
        variant: Variant,
        palette: Palette,
        seed: u64,
    ) -> anyhow::Result<Self> {
        let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| anyhow::anyhow!("no document"))?;
        let field = Rc::new(RefCell::new(FieldContext::new(
            canvas.clone(),
            variant,
            palette,
            seed,
        )?));

        let mut listeners = Vec::new();

        let field_resize = field.clone();
        listeners.extend(Listener::attach(&window, "resize", move |_| {
            field_resize.borrow_mut().resize();
        }));

        // Tracked on the window so overlaid content does not hide the pointer.
        let field_move = field.clone();
        let canvas_move = canvas.clone();
        listeners.extend(Listener::attach(&window, "mousemove", move |ev| {
            if let Some(ev) = ev.dyn_ref::<web::MouseEvent>() {
                let pointer = pointer_in_canvas(ev, &canvas_move);
                field_move.borrow_mut().set_pointer(pointer);
            }
        }));

        // Pointer leaving the page; `mouseleave` does not fire on the document itself.
        let root = document
            .document_element()
            .ok_or_else(|| anyhow::anyhow!("no document element"))?;
        let field_leave = field.clone();
        listeners.extend(Listener::attach(&root, "mouseleave", move |_| {
            field_leave.borrow_mut().set_pointer(None);
        }));

        let animation = frame::start_loop(field.clone());
        {
            let f = field.borrow();
            log::info!(
                "[field] mounted {} {}x{} @{}x particles={} links={}",
                variant.as_attr(),
                f.viewport.width,
                f.viewport.height,
                f.viewport.dpr,
                f.renderer.particles().len(),
                f.renderer.connections().len()
            );
        }
        Ok(Self {
            variant,
            field,
            animation,
            listeners,
        })
    }

    pub fn set_palette(&self, palette: Palette) {
        self.field.borrow_mut().renderer.set_palette(palette);
    }

    /// Stop the loop and remove every listener this mount attached.
    pub fn unmount(self) {
        self.animation.cancel();
        for l in self.listeners {
            l.detach();
        }
        log::info!("[field] unmounted {}", self.variant.as_attr());
    }
}

/// Pointer position in canvas CSS pixels, `None` when outside the canvas.
fn pointer_in_canvas(ev: &web::MouseEvent, canvas: &web::HtmlCanvasElement) -> Option<Vec2> {
    let rect = canvas.get_bounding_client_rect();
    let x = ev.client_x() as f64 - rect.left();
    let y = ev.client_y() as f64 - rect.top();
    let inside = x >= 0.0 && y >= 0.0 && x <= rect.width() && y <= rect.height();
    inside.then(|| Vec2::new(x as f32, y as f32))
}
