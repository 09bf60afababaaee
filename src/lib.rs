#![cfg(target_arch = "wasm32")]
use crate::background::BackgroundScene;
use crate::constants::{BG_MOUNT_ID, HERO_MOUNT_ID};
use crate::error::FxError;
use crate::frame::{BackgroundFrame, HeroFrame};
use crate::hero::HeroScene;
use crate::render::{GpuContext, Renderer};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod audio;
mod background;
mod constants;
mod dom;
mod error;
mod events;
mod frame;
mod geometry;
mod hero;
mod lifecycle;
mod motion;
pub mod page;
mod render;
mod scene;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("landing-fx starting");

    let (window, document) = dom::window_and_document().map_err(|e| JsValue::from_str(&e.to_string()))?;
    let loops = events::wire_teardown(&window);

    let (win, doc) = (window.clone(), document.clone());
    dom::on_ready(&document, move || {
        page::wire_all(&win, &doc);
        events::keyboard::wire_escape_closes_menu(&win, &doc);

        let (w, d, l) = (win.clone(), doc.clone(), loops.clone());
        spawn_local(async move {
            if let Err(e) = init_background(w, d, l).await {
                log::error!("[background] init error: {:?}", e);
            }
        });
        spawn_local(async move {
            match init_hero(win, doc, loops).await {
                Ok(true) => {}
                Ok(false) => log::info!("[hero] no #{} on this page; skipped", HERO_MOUNT_ID),
                Err(e) => log::error!("[hero] init error: {:?}", e),
            }
        });
    });
    Ok(())
}

#[inline]
fn aspect(width: f64, height: f64) -> f32 {
    if width > 0.0 && height > 0.0 {
        (width / height) as f32
    } else {
        1.0
    }
}

async fn init_background(
    window: web::Window,
    document: web::Document,
    loops: events::LoopRegistry,
) -> anyhow::Result<()> {
    let mount = document
        .get_element_by_id(BG_MOUNT_ID)
        .ok_or(FxError::MissingMount(BG_MOUNT_ID))?;
    let canvas = dom::create_canvas(&document, &mount)?;
    let (w, h) = dom::inner_size(&window);

    let scene = BackgroundScene::new(&mut rand::thread_rng(), aspect(w, h));
    let frame = Rc::new(RefCell::new(BackgroundFrame { scene, gpu: None }));
    {
        let frame = frame.clone();
        events::pointer::wire_pointer_move(&window, &document, move |p| {
            frame.borrow_mut().scene.set_pointer(p);
        });
    }
    events::wire_background_resize(&window, frame.clone());

    let gpu = GpuContext::connect(canvas, w as u32, h as u32).await?;
    let renderer = Renderer::new(gpu, &frame.borrow().scene.scene);
    frame.borrow_mut().gpu = Some(renderer);
    // The window may have been resized while the GPU was being acquired
    let (w, h) = dom::inner_size(&window);
    frame.borrow_mut().resize(w as u32, h as u32);

    loops.borrow_mut().push(frame::start_loop("background", frame));
    Ok(())
}

/// Returns `Ok(false)` when the page has no hero container.
async fn init_hero(
    window: web::Window,
    document: web::Document,
    loops: events::LoopRegistry,
) -> anyhow::Result<bool> {
    let Some(container) = document.get_element_by_id(HERO_MOUNT_ID) else {
        return Ok(false);
    };
    let canvas = dom::create_canvas(&document, &container)?;
    let (w, h) = (container.client_width().max(0), container.client_height().max(0));

    let scene = HeroScene::new(aspect(w as f64, h as f64));
    let frame = Rc::new(RefCell::new(HeroFrame { scene, gpu: None }));
    {
        let frame = frame.clone();
        events::pointer::wire_pointer_move(&window, &document, move |p| {
            frame.borrow_mut().scene.set_pointer(p);
        });
    }
    events::pointer::wire_click_tone(&window);
    events::wire_hero_resize(&window, &document, frame.clone());

    let gpu = GpuContext::connect(canvas, w as u32, h as u32).await?;
    let renderer = Renderer::new(gpu, &frame.borrow().scene.scene);
    frame.borrow_mut().gpu = Some(renderer);
    frame
        .borrow_mut()
        .resize(container.client_width().max(0) as u32, container.client_height().max(0) as u32);

    loops.borrow_mut().push(frame::start_loop("hero", frame));
    Ok(true)
}
