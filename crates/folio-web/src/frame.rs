use crate::dom;
use crate::paint;
use folio_core::{FieldConfig, Mode, Palette, Renderer, Variant, Viewport};
use glam::Vec2;
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// One mounted field: renderer plus the canvas it paints into.
pub struct FieldContext {
    pub renderer: Renderer,
    pub canvas: web::HtmlCanvasElement,
    /// `None` when the 2D context could not be acquired; frames still run
    /// but nothing is painted.
    pub ctx: Option<web::CanvasRenderingContext2d>,
    pub viewport: Viewport,
    pub started: Instant,
}

impl FieldContext {
    pub fn new(
        canvas: web::HtmlCanvasElement,
        variant: Variant,
        palette: Palette,
        seed: u64,
    ) -> anyhow::Result<Self> {
        let viewport = dom::sync_canvas_backing_size(&canvas);
        let config = FieldConfig::for_variant(variant, viewport.size_class());
        let renderer = Renderer::new(config, viewport, palette, seed)?;
        let ctx = acquire_context(&canvas);
        if ctx.is_none() {
            log::warn!("[field] no 2d context for {} field", variant.as_attr());
        }
        Ok(Self {
            renderer,
            canvas,
            ctx,
            viewport,
            started: Instant::now(),
        })
    }

    pub fn frame(&mut self) {
        if !dom::is_in_viewport(&self.canvas) {
            return;
        }
        let now = self.started.elapsed().as_secs_f64();
        let list = self.renderer.frame(now);
        let Some(ctx) = &self.ctx else {
            return;
        };
        paint::paint(ctx, &self.viewport, list);
    }

    /// Resync the backing store and rebuild the geometry before the next frame.
    pub fn resize(&mut self) {
        self.viewport = dom::sync_canvas_backing_size(&self.canvas);
        self.renderer.resize(self.viewport);
    }

    /// Pointer in canvas CSS pixels, or `None` once it left the canvas.
    pub fn set_pointer(&mut self, pointer: Option<Vec2>) {
        self.renderer.set_pointer(pointer);
        self.renderer.set_mode(if pointer.is_some() {
            Mode::Focused
        } else {
            Mode::Ambient
        });
    }
}

fn acquire_context(canvas: &web::HtmlCanvasElement) -> Option<web::CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|c| c.dyn_into::<web::CanvasRenderingContext2d>().ok())
}

/// Pending animation-frame request plus the self-rescheduling tick closure.
pub struct AnimationLoop {
    raf_id: Rc<Cell<Option<i32>>>,
    tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
}

impl AnimationLoop {
    /// Cancel the pending request and drop the tick closure, which also
    /// breaks its reference to itself.
    pub fn cancel(&self) {
        if let Some(id) = self.raf_id.take() {
            if let Some(w) = web::window() {
                let _ = w.cancel_animation_frame(id);
            }
        }
        self.tick.borrow_mut().take();
    }
}

fn request_frame(cb: &Closure<dyn FnMut()>) -> Option<i32> {
    web::window().and_then(|w| w.request_animation_frame(cb.as_ref().unchecked_ref()).ok())
}

pub fn start_loop(field: Rc<RefCell<FieldContext>>) -> AnimationLoop {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let raf_id: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
    let tick_clone = tick.clone();
    let raf_clone = raf_id.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        raf_clone.set(None);
        field.borrow_mut().frame();
        if let Some(cb) = tick_clone.borrow().as_ref() {
            raf_clone.set(request_frame(cb));
        }
    }) as Box<dyn FnMut()>));
    if let Some(cb) = tick.borrow().as_ref() {
        raf_id.set(request_frame(cb));
    }
    AnimationLoop { raf_id, tick }
}
