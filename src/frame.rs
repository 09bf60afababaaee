use crate::background::BackgroundScene;
use crate::hero::HeroScene;
use crate::render::Renderer;
use crate::scene::{apply_resize, Camera};
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Work performed once per display frame.
pub trait FrameTask {
    /// `now_ms` is wall-clock milliseconds since the Unix epoch.
    fn frame(&mut self, now_ms: f64);
}

/// Background scene plus its renderer, once the GPU is ready.
pub struct BackgroundFrame {
    pub scene: BackgroundScene,
    pub gpu: Option<Renderer>,
}

impl FrameTask for BackgroundFrame {
    fn frame(&mut self, _now_ms: f64) {
        self.scene.step();
        if let Some(g) = &mut self.gpu {
            if let Err(e) = g.render(&mut self.scene.scene) {
                log::error!("[background] render error: {:?}", e);
            }
        }
    }
}

impl BackgroundFrame {
    pub fn resize(&mut self, width: u32, height: u32) {
        resize_scene(&mut self.scene.scene.camera, self.gpu.as_mut(), width, height);
    }
}

pub struct HeroFrame {
    pub scene: HeroScene,
    pub gpu: Option<Renderer>,
}

impl FrameTask for HeroFrame {
    fn frame(&mut self, now_ms: f64) {
        self.scene.step(now_ms);
        if let Some(g) = &mut self.gpu {
            if let Err(e) = g.render(&mut self.scene.scene) {
                log::error!("[hero] render error: {:?}", e);
            }
        }
    }
}

impl HeroFrame {
    pub fn resize(&mut self, width: u32, height: u32) {
        resize_scene(&mut self.scene.scene.camera, self.gpu.as_mut(), width, height);
    }
}

// Before the GPU is ready only the camera follows the new size; the renderer
// picks up the canvas size when it is created.
fn resize_scene(camera: &mut Camera, gpu: Option<&mut Renderer>, width: u32, height: u32) {
    match gpu {
        Some(g) => apply_resize(camera, g, width, height),
        None => camera.set_aspect(width, height),
    }
}

type TickClosure = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Handle to a running frame loop. Cancelling stops the loop and releases
/// the task; it must not be called from inside the task's own frame.
#[derive(Clone)]
pub struct LoopHandle {
    label: &'static str,
    tick: TickClosure,
    request_id: Rc<Cell<Option<i32>>>,
}

impl LoopHandle {
    pub fn cancel(&self) {
        if let (Some(w), Some(id)) = (web::window(), self.request_id.take()) {
            _ = w.cancel_animation_frame(id);
        }
        if self.tick.borrow_mut().take().is_some() {
            log::info!("[{}] frame loop stopped", self.label);
        }
    }
}

const FPS_LOG_INTERVAL_SEC: f32 = 10.0;

/// Run `task` on every animation frame until the returned handle is cancelled.
pub fn start_loop<T: FrameTask + 'static>(label: &'static str, task: Rc<RefCell<T>>) -> LoopHandle {
    let tick: TickClosure = Rc::new(RefCell::new(None));
    let request_id = Rc::new(Cell::new(None::<i32>));

    let tick_clone = tick.clone();
    let request_clone = request_id.clone();
    let mut window_start = Instant::now();
    let mut frames = 0u32;
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        task.borrow_mut().frame(js_sys::Date::now());

        frames += 1;
        let elapsed = window_start.elapsed().as_secs_f32();
        if elapsed >= FPS_LOG_INTERVAL_SEC {
            log::debug!("[{}] {:.1} fps", label, frames as f32 / elapsed);
            window_start = Instant::now();
            frames = 0;
        }

        let next = match (web::window(), tick_clone.borrow().as_ref()) {
            (Some(w), Some(cb)) => w.request_animation_frame(cb.as_ref().unchecked_ref()).ok(),
            _ => None,
        };
        request_clone.set(next);
    }) as Box<dyn FnMut()>));

    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        request_id.set(w.request_animation_frame(cb.as_ref().unchecked_ref()).ok());
    }
    log::info!("[{}] frame loop started", label);

    LoopHandle {
        label,
        tick,
        request_id,
    }
}
