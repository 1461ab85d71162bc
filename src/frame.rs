use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::audio::AudioPlayer;
use crate::core::geometry::WireMesh;
use crate::core::{model_matrix, OrbitCamera};
use crate::render;

pub struct FrameContext<'a> {
    pub canvas: web::HtmlCanvasElement,
    pub camera: Rc<RefCell<OrbitCamera>>,
    pub player: Rc<RefCell<AudioPlayer>>,
    pub gpu: Option<render::GpuState<'a>>,
    pub started: Instant,
}

impl<'a> FrameContext<'a> {
    /// One animation frame: advance the mesh rotation by elapsed time,
    /// sample the analyser, rewrite the uniforms and draw.
    pub fn frame(&mut self) {
        let elapsed = self.started.elapsed().as_secs_f32();
        let frequency = self.player.borrow_mut().average_frequency();

        let Some(gpu) = &mut self.gpu else {
            return;
        };
        let w = self.canvas.width();
        let h = self.canvas.height();
        gpu.resize_if_needed(w, h);

        let aspect = w as f32 / h.max(1) as f32;
        let view_proj = self.camera.borrow().view_proj(aspect);
        let uniforms = render::IcoUniforms {
            view_proj: view_proj.to_cols_array_2d(),
            model: model_matrix(elapsed).to_cols_array_2d(),
            resolution: [w as f32, h as f32],
            time: elapsed,
            frequency,
            progress: 0.0,
            _pad: [0.0; 3],
        };
        if let Err(e) = gpu.render(&uniforms) {
            log::error!("render error: {:?}", e);
        }
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    mesh: &WireMesh,
) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas, mesh).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

/// Cancellation handle for the animation loop. The loop keeps itself alive
/// through its own closure; dropping the handle does not stop it, calling
/// `cancel` does.
pub struct FrameLoopHandle {
    running: Rc<Cell<bool>>,
}

impl FrameLoopHandle {
    pub fn cancel(&self) {
        self.running.set(false);
    }

    pub fn is_running(&self) -> bool {
        self.running.get()
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) -> FrameLoopHandle {
    let running = Rc::new(Cell::new(true));
    let running_tick = running.clone();
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if !running_tick.get() {
            return;
        }
        frame_ctx_tick.borrow_mut().frame();
        if let Some(w) = web::window() {
            _ = w.request_animation_frame(
                tick_clone
                    .borrow()
                    .as_ref()
                    .unwrap()
                    .as_ref()
                    .unchecked_ref(),
            );
        }
    }) as Box<dyn FnMut()>));
    if let Some(w) = web::window() {
        _ = w.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
    FrameLoopHandle { running }
}
