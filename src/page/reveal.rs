use crate::dom;
use crate::error::FxError;
use crate::page::constants::*;
use crate::page::logic::{self, CounterAnimation};
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

type ObserverCallback = dyn FnMut(js_sys::Array, web::IntersectionObserver);

/// Observe `elements` and call `on_visible` for each entry that intersects.
fn observe(
    elements: &[web::HtmlElement],
    threshold: f64,
    root_margin: Option<&str>,
    mut on_visible: impl FnMut(web::Element) + 'static,
) -> Result<(), FxError> {
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, _: web::IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                    continue;
                };
                if entry.is_intersecting() {
                    on_visible(entry.target());
                }
            }
        },
    ) as Box<ObserverCallback>);
    let init = web::IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(threshold));
    if let Some(margin) = root_margin {
        init.set_root_margin(margin);
    }
    let observer =
        web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
            .map_err(FxError::dom)?;
    callback.forget();
    for el in elements {
        observer.observe(el);
    }
    Ok(())
}

pub fn wire_fade_in(document: &web::Document) -> Result<(), FxError> {
    let cards = dom::query_all(document, FADE_SELECTOR);
    if cards.is_empty() {
        return Ok(());
    }
    for card in &cards {
        dom::set_style(card, "opacity", "0");
        dom::set_style(card, "transform", FADE_HIDDEN_TRANSFORM);
        dom::set_style(card, "transition", FADE_TRANSITION);
    }
    observe(&cards, FADE_THRESHOLD, Some(FADE_ROOT_MARGIN), |target| {
        if let Ok(el) = target.dyn_into::<web::HtmlElement>() {
            dom::set_style(&el, "opacity", "1");
            dom::set_style(&el, "transform", SHOWN_TRANSFORM);
        }
    })
}

pub fn wire_counters(window: &web::Window, document: &web::Document) -> Result<(), FxError> {
    let items = dom::query_all(document, STAT_ITEM_SELECTOR);
    if items.is_empty() {
        return Ok(());
    }
    let win = window.clone();
    observe(&items, COUNTER_THRESHOLD, None, move |item| {
        if item.has_attribute(ANIMATED_ATTR) {
            return;
        }
        let Some(label) = item.query_selector("h4").ok().flatten() else {
            return;
        };
        let text = label.text_content().unwrap_or_default();
        let Some(target) = logic::parse_counter_target(&text) else {
            return;
        };
        _ = item.set_attribute(ANIMATED_ATTR, "true");
        if let Err(e) = run_counter(&win, label, target) {
            log::warn!("[page] counter not started: {}", e);
        }
    })
}

fn run_counter(window: &web::Window, label: web::Element, target: i64) -> Result<(), FxError> {
    let mut anim = CounterAnimation::new(target);
    let interval_id = Rc::new(Cell::new(None::<i32>));
    let id_clone = interval_id.clone();
    let win = window.clone();
    let tick = Closure::wrap(Box::new(move || {
        label.set_text_content(Some(&anim.tick()));
        if anim.is_done() {
            if let Some(id) = id_clone.take() {
                win.clear_interval_with_handle(id);
            }
        }
    }) as Box<dyn FnMut()>);
    let id = window
        .set_interval_with_callback_and_timeout_and_arguments_0(
            tick.as_ref().unchecked_ref(),
            COUNTER_TICK_MS,
        )
        .map_err(FxError::dom)?;
    interval_id.set(Some(id));
    tick.forget();
    Ok(())
}

pub fn wire_section_reveal(window: &web::Window, document: &web::Document) {
    let sections = dom::query_all(document, SECTION_CLASS_SELECTOR);
    if sections.is_empty() {
        return;
    }
    for sec in &sections {
        dom::set_style(sec, "opacity", "0");
        dom::set_style(sec, "transform", SECTION_HIDDEN_TRANSFORM);
        dom::set_style(sec, "transition", SECTION_TRANSITION);
    }
    let win = window.clone();
    dom::listen(window, "scroll", move |_: web::Event| {
        let (_, inner_h) = dom::inner_size(&win);
        for sec in &sections {
            if logic::should_reveal(sec.get_bounding_client_rect().top(), inner_h) {
                dom::set_style(sec, "opacity", "1");
                dom::set_style(sec, "transform", SHOWN_TRANSFORM);
            }
        }
    });
}
