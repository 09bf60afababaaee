use crate::dom;
use crate::error::FxError;
use crate::page::constants::*;
use crate::page::logic;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_card_tilt(document: &web::Document) {
    let doc = document.clone();
    dom::listen(document, "mousemove", move |ev: web::MouseEvent| {
        let (cx, cy) = (ev.client_x() as f64, ev.client_y() as f64);
        for card in dom::query_all(&doc, STAT_CARD_SELECTOR) {
            let r = card.get_bounding_client_rect();
            if let Some((ax, ay)) = logic::tilt_angles(cx, cy, r.left(), r.top(), r.width(), r.height()) {
                dom::set_style(&card, "transform", &logic::tilt_transform(ax, ay));
            }
        }
    });
    let doc = document.clone();
    dom::listen(document, "mouseleave", move |_: web::Event| {
        for card in dom::query_all(&doc, STAT_CARD_SELECTOR) {
            dom::set_style(&card, "transform", TILT_RESET_TRANSFORM);
        }
    });
}

pub fn wire_progress_bar(window: &web::Window, document: &web::Document) -> Result<(), FxError> {
    let Some(body) = document.body() else {
        return Ok(());
    };
    let bar: web::HtmlElement = document
        .create_element("div")
        .map_err(FxError::dom)?
        .dyn_into()
        .map_err(|_| FxError::Dom("created element is not an HTML element".into()))?;
    for (prop, value) in PROGRESS_BAR_STYLE {
        dom::set_style(&bar, prop, value);
    }
    body.append_child(&bar).map_err(FxError::dom)?;

    let (win, doc) = (window.clone(), document.clone());
    dom::listen(window, "scroll", move |_: web::Event| {
        let scroll_height = doc
            .document_element()
            .map(|el| el.scroll_height() as f64)
            .unwrap_or(0.0);
        let (_, inner_h) = dom::inner_size(&win);
        let pct = logic::scroll_percent(win.scroll_y().unwrap_or(0.0), scroll_height, inner_h);
        dom::set_style(&bar, "width", &format!("{}%", pct));
    });
    Ok(())
}
