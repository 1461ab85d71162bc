#![cfg(target_arch = "wasm32")]
use crate::core::OrbitCamera;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod audio;
mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod render;
mod ui;

// Maintain canvas internal pixel size to match CSS size * devicePixelRatio
fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("icopulse starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el = document
        .get_element_by_id(constants::CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #app-canvas"))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    wire_canvas_resize(&canvas);

    // Audio graph, default track and transport/file wiring
    let player = match audio::AudioPlayer::new() {
        Ok(p) => Rc::new(RefCell::new(p)),
        Err(()) => return Err(anyhow::anyhow!("audio init failed")),
    };
    audio::load_default_track(player.clone(), constants::DEFAULT_TRACK_PATH);
    ui::set_transport_icons(&document, false);
    events::wire_transport_controls(&document, player.clone());
    events::wire_file_input(&document, player.clone());

    // Orbit camera bound to the canvas
    let camera = Rc::new(RefCell::new(OrbitCamera::default()));
    events::wire_orbit_controls(&canvas, camera.clone());

    // Mesh + WebGPU; rendering starts immediately, audio waits for a gesture
    let mesh = core::geometry::icosphere_wireframe(constants::ICO_RADIUS, constants::ICO_DETAIL);
    let gpu = frame::init_gpu(&canvas, &mesh).await;

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        canvas,
        camera,
        player,
        gpu,
        started: Instant::now(),
    }));
    let _loop_handle = frame::start_loop(frame_ctx);

    Ok(())
}
