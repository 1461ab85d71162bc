use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::audio::{self, AudioPlayer};
use crate::constants::{FILE_INPUT_ID, PAUSE_ICON_ID, PLAY_ICON_ID};
use crate::core::OrbitCamera;
use crate::dom;
use crate::ui;

#[derive(Default)]
struct OrbitDrag {
    active: bool,
    last_x: f32,
    last_y: f32,
}

pub fn wire_transport_controls(document: &web::Document, player: Rc<RefCell<AudioPlayer>>) {
    {
        let doc = document.clone();
        let player_play = player.clone();
        dom::add_click_listener(document, PLAY_ICON_ID, move || {
            if player_play.borrow_mut().play() {
                ui::set_transport_icons(&doc, true);
            }
        });
    }
    {
        let doc = document.clone();
        dom::add_click_listener(document, PAUSE_ICON_ID, move || {
            if player.borrow_mut().pause() {
                ui::set_transport_icons(&doc, false);
            }
        });
    }
}

pub fn wire_file_input(document: &web::Document, player: Rc<RefCell<AudioPlayer>>) {
    let doc = document.clone();
    dom::add_change_listener(document, FILE_INPUT_ID, move |ev: web::Event| {
        let Some(input) = ev
            .target()
            .and_then(|t| t.dyn_into::<web::HtmlInputElement>().ok())
        else {
            return;
        };
        let Some(file) = input.files().and_then(|fs| fs.get(0)) else {
            return;
        };
        audio::load_user_file(player.clone(), doc.clone(), file);
    });
}

/// Orbit interaction: drag on the canvas steers azimuth/polar, the wheel
/// zooms. Move/up listeners sit on the window so a drag that leaves the
/// canvas still ends cleanly.
pub fn wire_orbit_controls(canvas: &web::HtmlCanvasElement, camera: Rc<RefCell<OrbitCamera>>) {
    let drag = Rc::new(RefCell::new(OrbitDrag::default()));

    // pointerdown
    {
        let drag_m = drag.clone();
        let canvas_target = canvas.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            let mut d = drag_m.borrow_mut();
            d.active = true;
            d.last_x = ev.client_x() as f32;
            d.last_y = ev.client_y() as f32;
            let _ = canvas_target.set_pointer_capture(ev.pointer_id());
            ev.prevent_default();
        }) as Box<dyn FnMut(_)>);
        let _ = canvas
            .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // pointermove
    {
        let drag_m = drag.clone();
        let camera_m = camera.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            let mut d = drag_m.borrow_mut();
            if !d.active {
                return;
            }
            let x = ev.client_x() as f32;
            let y = ev.client_y() as f32;
            camera_m.borrow_mut().rotate(x - d.last_x, y - d.last_y);
            d.last_x = x;
            d.last_y = y;
        }) as Box<dyn FnMut(_)>);
        if let Some(wnd) = web::window() {
            let _ = wnd
                .add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
        }
        closure.forget();
    }

    // pointerup
    {
        let drag_m = drag;
        let closure = Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
            drag_m.borrow_mut().active = false;
        }) as Box<dyn FnMut(_)>);
        if let Some(wnd) = web::window() {
            let _ =
                wnd.add_event_listener_with_callback("pointerup", closure.as_ref().unchecked_ref());
        }
        closure.forget();
    }

    // wheel zoom
    {
        let closure = Closure::wrap(Box::new(move |ev: web::WheelEvent| {
            camera.borrow_mut().zoom(ev.delta_y().signum() as f32);
            ev.prevent_default();
        }) as Box<dyn FnMut(_)>);
        let _ = canvas.add_event_listener_with_callback("wheel", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
