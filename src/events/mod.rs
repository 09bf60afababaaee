pub mod keyboard;
pub mod pointer;

use crate::constants::HERO_MOUNT_ID;
use crate::dom;
use crate::frame::{BackgroundFrame, HeroFrame, LoopHandle};
use crate::lifecycle;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Frame loops started so far, cancelled together when the page is discarded.
pub type LoopRegistry = Rc<RefCell<Vec<LoopHandle>>>;

pub fn wire_background_resize(window: &web::Window, frame: Rc<RefCell<BackgroundFrame>>) {
    let win = window.clone();
    dom::listen(window, "resize", move |_: web::Event| {
        let (w, h) = dom::inner_size(&win);
        frame.borrow_mut().resize(w as u32, h as u32);
    });
}

/// The hero container is measured again on every resize; a container that
/// has been removed makes the handler a no-op.
pub fn wire_hero_resize(window: &web::Window, document: &web::Document, frame: Rc<RefCell<HeroFrame>>) {
    let doc = document.clone();
    dom::listen(window, "resize", move |_: web::Event| {
        let Some(container) = doc.get_element_by_id(HERO_MOUNT_ID) else {
            return;
        };
        let (w, h) = (container.client_width(), container.client_height());
        frame.borrow_mut().resize(w.max(0) as u32, h.max(0) as u32);
    });
}

pub fn wire_teardown(window: &web::Window) -> LoopRegistry {
    let loops: LoopRegistry = Rc::new(RefCell::new(Vec::new()));
    let registry = loops.clone();
    dom::listen(window, "pagehide", move |ev: web::PageTransitionEvent| {
        if !lifecycle::stops_loops_on_pagehide(ev.persisted()) {
            log::debug!("[events] page cached, loops kept");
            return;
        }
        for handle in registry.borrow_mut().drain(..) {
            handle.cancel();
        }
    });
    loops
}
