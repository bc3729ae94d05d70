use crate::core::PointerSample;
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Last pointer position in client px; `None` until the pointer first moves.
#[derive(Default, Clone, Copy)]
pub struct PointerState {
    pub pos: Option<Vec2>,
}

impl PointerState {
    pub fn sample(&self, viewport: Vec2) -> PointerSample {
        match self.pos {
            Some(pos) => PointerSample::new(pos, viewport),
            None => PointerSample::centered(viewport),
        }
    }
}

#[inline]
pub fn pointer_client_px(ev: &web::PointerEvent) -> Vec2 {
    Vec2::new(ev.client_x() as f32, ev.client_y() as f32)
}

pub fn wire_pointermove(pointer: Rc<RefCell<PointerState>>) {
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        pointer.borrow_mut().pos = Some(pointer_client_px(&ev));
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }

    closure.forget();
}
