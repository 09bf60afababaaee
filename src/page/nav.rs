use crate::dom;
use crate::page::constants::*;
use crate::page::logic::{self, SectionPos};
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_active_nav(window: &web::Window, document: &web::Document) {
    let links = dom::query_all(document, NAV_LINK_SELECTOR);
    let sections = dom::query_all(document, SECTION_TAG_SELECTOR);
    if links.is_empty() || sections.is_empty() {
        return;
    }
    let win = window.clone();
    dom::listen(window, "scroll", move |_: web::Event| {
        let positions: Vec<SectionPos> = sections
            .iter()
            .map(|s| SectionPos::new(s.id(), s.offset_top() as f64))
            .collect();
        let page_y = win.page_y_offset().unwrap_or(0.0);
        let current = logic::active_section(&positions, page_y);
        for link in &links {
            let href = link.get_attribute("href").unwrap_or_default();
            let cl = link.class_list();
            if logic::is_link_active(&href, current) {
                _ = cl.add_1(ACTIVE_CLASS);
            } else {
                _ = cl.remove_1(ACTIVE_CLASS);
            }
        }
    });
}

pub fn wire_hamburger(document: &web::Document) {
    let (Some(hamburger), Some(menu)) = (
        dom::query_one(document, HAMBURGER_SELECTOR),
        dom::query_one(document, NAV_MENU_SELECTOR),
    ) else {
        return;
    };
    let menu_toggle = menu.clone();
    dom::listen(&hamburger, "click", move |_: web::Event| {
        let next = logic::toggled_menu_display(&dom::style_value(&menu_toggle, "display"));
        dom::set_style(&menu_toggle, "display", next);
    });
    for link in dom::query_all(document, NAV_LINK_SELECTOR) {
        let menu = menu.clone();
        dom::listen(&link, "click", move |_: web::Event| {
            dom::set_style(&menu, "display", "none");
        });
    }
}

pub fn wire_smooth_scroll(window: &web::Window, document: &web::Document) {
    for anchor in dom::query_all(document, ANCHOR_SELECTOR) {
        let (win, doc) = (window.clone(), document.clone());
        let anchor_href = anchor.clone();
        dom::listen(&anchor, "click", move |ev: web::Event| {
            let href = anchor_href.get_attribute("href").unwrap_or_default();
            if href == "#" {
                return;
            }
            let Some(target) = doc
                .query_selector(&href)
                .ok()
                .flatten()
                .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
            else {
                return;
            };
            ev.prevent_default();
            let opts = web::ScrollToOptions::new();
            opts.set_top(logic::smooth_scroll_top(target.offset_top() as f64));
            opts.set_behavior(web::ScrollBehavior::Smooth);
            win.scroll_to_with_scroll_to_options(&opts);
        });
    }
}

fn apply_menu_layout(window: &web::Window, document: &web::Document) {
    let (width, _) = dom::inner_size(window);
    let layout = logic::menu_layout(width);
    if let (Some(menu), Some(display)) = (dom::query_one(document, NAV_MENU_SELECTOR), layout.menu) {
        dom::set_style(&menu, "display", display);
    }
    if let Some(hamburger) = dom::query_one(document, HAMBURGER_SELECTOR) {
        dom::set_style(&hamburger, "display", layout.hamburger);
    }
}

pub fn wire_responsive_menu(window: &web::Window, document: &web::Document) {
    apply_menu_layout(window, document);
    let (win, doc) = (window.clone(), document.clone());
    dom::listen(window, "resize", move |_: web::Event| {
        apply_menu_layout(&win, &doc);
    });
}
