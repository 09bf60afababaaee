use crate::audio::{self, ClickSynth};
use crate::dom;
use crate::motion::PointerState;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Feed normalized pointer positions from document `mousemove` to `on_move`.
pub fn wire_pointer_move(
    window: &web::Window,
    document: &web::Document,
    mut on_move: impl FnMut(PointerState) + 'static,
) {
    let win = window.clone();
    dom::listen(document, "mousemove", move |ev: web::MouseEvent| {
        let (w, h) = dom::inner_size(&win);
        on_move(PointerState::from_client(
            ev.client_x() as f32,
            ev.client_y() as f32,
            w as f32,
            h as f32,
        ));
    });
}

/// Play a random-pitch click tone on every window click. The audio context is
/// created by the first click.
pub fn wire_click_tone(window: &web::Window) {
    let synth: Rc<RefCell<ClickSynth<web::AudioContext>>> = Rc::new(RefCell::new(ClickSynth::new()));
    dom::listen(window, "click", move |_: web::MouseEvent| {
        let mut synth = synth.borrow_mut();
        let was_started = synth.is_started();
        let result = synth.click(&mut rand::thread_rng(), audio::create_context);
        if !was_started && synth.is_started() {
            log::info!("[audio] output created");
        }
        match result {
            Ok(tone) => log::debug!("[audio] click tone {:.0} Hz", tone.frequency_hz),
            Err(e) => log::warn!("[audio] click tone failed: {:?}", e),
        }
    });
}
