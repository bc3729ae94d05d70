use crate::audio::{self, AudioDriver};
use crate::core::{KeyOutcome, Mode, Sketch};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn handle_global_keydown(
    ev: &web::KeyboardEvent,
    document: &web::Document,
    sketch: &Rc<RefCell<Sketch>>,
    audio_driver: &Rc<RefCell<AudioDriver>>,
) {
    if ev.repeat() || ev.ctrl_key() || ev.meta_key() || ev.alt_key() {
        return;
    }
    let key = ev.key();
    let (outcome, audio_enabled) = {
        let mut s = sketch.borrow_mut();
        (s.handle_key(&key), s.config.audio_enabled)
    };
    match outcome {
        KeyOutcome::ModeChanged(Mode::Audio) if audio_enabled => {
            audio::enter_audio_mode(document, sketch, audio_driver);
        }
        KeyOutcome::ModeChanged(_) | KeyOutcome::ZoomToggled(_) => {}
        KeyOutcome::Ignored => return,
    }
    ev.prevent_default();
}

// Wire an 'H' key handler to toggle the help overlay
pub fn wire_overlay_toggle_h(document: &web::Document) {
    if let Some(window) = web::window() {
        let doc = document.clone();
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
                let key = ev.key();
                if key == "h" || key == "H" {
                    crate::overlay::toggle(&doc);
                    ev.prevent_default();
                }
            }) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

pub fn wire_global_keydown(
    document: web::Document,
    sketch: Rc<RefCell<Sketch>>,
    audio_driver: Rc<RefCell<AudioDriver>>,
) {
    if let Some(window) = web::window() {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
                handle_global_keydown(&ev, &document, &sketch, &audio_driver);
            }) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
