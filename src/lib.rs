#![cfg(target_arch = "wasm32")]
use crate::core::{Sketch, SketchConfig, Variant};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod audio;
mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod overlay;

fn read_variant(document: &web::Document) -> Variant {
    document
        .body()
        .and_then(|b| b.get_attribute(constants::VARIANT_ATTR))
        .map(|v| Variant::from_attr(&v))
        .unwrap_or_default()
}

// Seed the cell picker from the browser RNG so every page load differs
fn random_seed() -> u64 {
    let lo = (js_sys::Math::random() * u32::MAX as f64) as u64;
    let hi = (js_sys::Math::random() * u32::MAX as f64) as u64;
    (hi << 32) | lo
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("parallax-grid starting");

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

    let variant = read_variant(&document);
    let config = SketchConfig::for_variant(variant);
    log::info!(
        "[config] variant={:?} layers={} audio={}",
        config.variant,
        config.layers,
        config.audio_enabled
    );

    let grid = match dom::DomGrid::build(&document, config.layers) {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("[grid] {:?}; rendering disabled", e);
            None
        }
    };

    let sketch = Rc::new(RefCell::new(Sketch::new(config, random_seed())));
    let pointer = Rc::new(RefCell::new(events::PointerState::default()));
    let audio_driver = Rc::new(RefCell::new(audio::AudioDriver::default()));

    events::wire_global_keydown(document.clone(), sketch.clone(), audio_driver);
    events::wire_overlay_toggle_h(&document);
    events::wire_pointermove(pointer.clone());

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext::new(
        sketch, pointer, document, grid,
    )));
    frame::start_loop(frame_ctx);
    Ok(())
}
