use crate::error::FxError;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::convert::FromWasmAbi;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn window_and_document() -> Result<(web::Window, web::Document), FxError> {
    let window = web::window().ok_or(FxError::NoWindow)?;
    let document = window.document().ok_or(FxError::NoDocument)?;
    Ok((window, document))
}

/// Window inner size in CSS pixels.
pub fn inner_size(window: &web::Window) -> (f64, f64) {
    let w = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let h = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    (w, h)
}

/// Attach `handler` for `event` on `target` for the lifetime of the page.
pub fn listen<E>(target: &web::EventTarget, event: &str, handler: impl FnMut(E) + 'static)
where
    E: FromWasmAbi + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    if let Err(e) = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref()) {
        log::warn!("[dom] cannot listen for {}: {:?}", event, e);
    }
    closure.forget();
}

/// Run `f` now if the document has finished parsing, otherwise on
/// `DOMContentLoaded`.
pub fn on_ready(document: &web::Document, f: impl FnOnce() + 'static) {
    if document.ready_state() != "loading" {
        f();
        return;
    }
    let mut f = Some(f);
    listen(document, "DOMContentLoaded", move |_: web::Event| {
        if let Some(f) = f.take() {
            f();
        }
    });
}

/// All elements matching `selector` that are HTML elements.
pub fn query_all(document: &web::Document, selector: &str) -> Vec<web::HtmlElement> {
    let Ok(list) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|n| n.dyn_into::<web::HtmlElement>().ok())
        .collect()
}

pub fn query_one(document: &web::Document, selector: &str) -> Option<web::HtmlElement> {
    document
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

#[inline]
pub fn set_style(el: &web::HtmlElement, property: &str, value: &str) {
    _ = el.style().set_property(property, value);
}

#[inline]
pub fn style_value(el: &web::HtmlElement, property: &str) -> String {
    el.style().get_property_value(property).unwrap_or_default()
}

/// Create a block canvas filling `mount` and append it.
pub fn create_canvas(
    document: &web::Document,
    mount: &web::Element,
) -> Result<web::HtmlCanvasElement, FxError> {
    let canvas: web::HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(FxError::dom)?
        .dyn_into()
        .map_err(|_| FxError::Dom("created element is not a canvas".into()))?;
    _ = canvas.style().set_property("display", "block");
    mount.append_child(&canvas).map_err(FxError::dom)?;
    Ok(canvas)
}

/// Size `canvas` to `width` x `height` CSS pixels with a device-pixel-ratio
/// backing store. Returns the backing size in physical pixels.
pub fn size_canvas(canvas: &web::HtmlCanvasElement, width: u32, height: u32) -> (u32, u32) {
    let dpr = web::window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0);
    let style = canvas.style();
    _ = style.set_property("width", &format!("{}px", width));
    _ = style.set_property("height", &format!("{}px", height));
    let w_px = ((width as f64 * dpr) as u32).max(1);
    let h_px = ((height as f64 * dpr) as u32).max(1);
    canvas.set_width(w_px);
    canvas.set_height(h_px);
    (w_px, h_px)
}
