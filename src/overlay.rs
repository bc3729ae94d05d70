use crate::constants::{HELP_OVERLAY_ID, HIDDEN_CLASS, HINT_OVERLAY_ID};
use crate::core::{Mode, Timing};
use web_sys as web;

/// Show or hide the help overlay via its `hidden` class.
pub fn set_hidden(document: &web::Document, hidden: bool) {
    if let Some(el) = document.get_element_by_id(HELP_OVERLAY_ID) {
        _ = el.class_list().toggle_with_force(HIDDEN_CLASS, hidden);
    }
}

pub fn is_hidden(document: &web::Document) -> bool {
    document
        .get_element_by_id(HELP_OVERLAY_ID)
        .map_or(true, |el| el.class_list().contains(HIDDEN_CLASS))
}

pub fn toggle(document: &web::Document) {
    set_hidden(document, !is_hidden(document));
}

pub fn hint_text(mode: Mode, timing: Timing, ticks: u64) -> String {
    format!(
        "Mode: {} • Interval: {:.0} ms • Active: {:.0} ms • Ticks: {}",
        mode.label(),
        timing.interval_ms,
        timing.active_ms,
        ticks
    )
}

/// Replace the hint overlay text. No-op if the page has no hint element.
pub fn update_hint(document: &web::Document, text: &str) {
    if let Some(el) = document.get_element_by_id(HINT_OVERLAY_ID) {
        el.set_text_content(Some(text));
    }
}
