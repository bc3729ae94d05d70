use crate::constants::{MAX_FRAME_DT_SEC, ZOOM_DEPTH};
use crate::core::Sketch;
use crate::dom::{self, DomGrid};
use crate::events::PointerState;
use crate::overlay;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub sketch: Rc<RefCell<Sketch>>,
    pub pointer: Rc<RefCell<PointerState>>,
    pub document: web::Document,
    /// `None` when the cell elements could not be built at startup; the loop
    /// then does nothing.
    pub grid: Option<DomGrid>,
    pub last_instant: Instant,
    pub last_hint: String,
    pub zoom_applied: bool,
}

impl FrameContext {
    pub fn new(
        sketch: Rc<RefCell<Sketch>>,
        pointer: Rc<RefCell<PointerState>>,
        document: web::Document,
        grid: Option<DomGrid>,
    ) -> Self {
        Self {
            sketch,
            pointer,
            document,
            grid,
            last_instant: Instant::now(),
            last_hint: String::new(),
            zoom_applied: false,
        }
    }

    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = (now - self.last_instant).min(Duration::from_secs_f32(MAX_FRAME_DT_SEC));
        self.last_instant = now;

        let Some(grid) = self.grid.as_mut() else {
            return;
        };

        let sample = self.pointer.borrow().sample(dom::viewport_size());
        let mut sketch = self.sketch.borrow_mut();
        let timing = sketch.update_pointer(&sample);

        grid.apply_parallax(sketch.parallax(&sample));

        if sketch.advance(dt) > 0 {
            sketch.render_into(grid);
        }

        // zoom only follows loudness while enabled; reset once when turned off
        if sketch.zoom_enabled() {
            grid.apply_zoom(1.0 + sketch.loudness() * ZOOM_DEPTH);
            self.zoom_applied = true;
        } else if self.zoom_applied {
            grid.apply_zoom(1.0);
            self.zoom_applied = false;
        }

        let hint = overlay::hint_text(sketch.mode(), timing, sketch.ticks_elapsed());
        if hint != self.last_hint {
            overlay::update_hint(&self.document, &hint);
            self.last_hint = hint;
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let (Some(w), Some(cb)) = (web::window(), tick_clone.borrow().as_ref()) {
            _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut()>));
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
