//! Presentation layer: reflects playback state and the current track name
//! back into the page. Core logic never touches these elements directly.

use web_sys as web;

use crate::constants::{GREYED_CLASS, NOW_PLAYING_ID, PAUSE_ICON_ID, PLAY_ICON_ID};
use crate::dom;

/// Grey out whichever transport icon does not apply: the play icon while
/// playing, the pause icon while stopped. The two flags are mutually
/// exclusive.
pub fn set_transport_icons(document: &web::Document, playing: bool) {
    let (greyed, active) = if playing {
        (PLAY_ICON_ID, PAUSE_ICON_ID)
    } else {
        (PAUSE_ICON_ID, PLAY_ICON_ID)
    };
    if let Some(el) = document.get_element_by_id(greyed) {
        _ = el.class_list().add_1(GREYED_CLASS);
    }
    if let Some(el) = document.get_element_by_id(active) {
        _ = el.class_list().remove_1(GREYED_CLASS);
    }
}

pub fn set_now_playing(document: &web::Document, name: &str) {
    dom::set_element_text(document, NOW_PLAYING_ID, name);
}
