use crate::dom;
use crate::page::constants::NAV_MENU_SELECTOR;
use crate::page::logic;
use web_sys as web;

/// Escape closes the navigation menu on narrow windows.
pub fn wire_escape_closes_menu(window: &web::Window, document: &web::Document) {
    let (win, doc) = (window.clone(), document.clone());
    dom::listen(document, "keydown", move |ev: web::KeyboardEvent| {
        let (width, _) = dom::inner_size(&win);
        if !logic::closes_menu_on_key(&ev.key(), width) {
            return;
        }
        if let Some(menu) = dom::query_one(&doc, NAV_MENU_SELECTOR) {
            dom::set_style(&menu, "display", "none");
        }
    });
}
