// Landing-page DOM effects: navigation, reveal animations, counters and
// decoration. Each effect looks up its own elements and is skipped when
// they are absent.

pub mod constants;
pub mod logic;

mod decor;
mod nav;
mod reveal;

use crate::error::FxError;
use web_sys as web;

/// Wire every page effect. Call once the document has been parsed.
pub fn wire_all(window: &web::Window, document: &web::Document) {
    nav::wire_active_nav(window, document);
    nav::wire_hamburger(document);
    nav::wire_smooth_scroll(window, document);
    nav::wire_responsive_menu(window, document);
    decor::wire_card_tilt(document);
    reveal::wire_section_reveal(window, document);

    let fallible: [(&str, Result<(), FxError>); 3] = [
        ("fade-in", reveal::wire_fade_in(document)),
        ("counters", reveal::wire_counters(window, document)),
        ("progress bar", decor::wire_progress_bar(window, document)),
    ];
    for (name, result) in fallible {
        if let Err(e) = result {
            log::warn!("[page] {} disabled: {}", name, e);
        }
    }
    log::info!("[page] effects wired");
}
