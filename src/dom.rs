use glam::Vec2;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn js_err(e: JsValue) -> anyhow::Error {
    anyhow::anyhow!("{:?}", e)
}

/// `innerWidth` x `innerHeight` in CSS pixels; zero when unavailable.
pub fn viewport_size(window: &web::Window) -> Vec2 {
    let w = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let h = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    Vec2::new(w as f32, h as f32)
}

/// Touch capability as the page sees it at startup.
pub fn touch_capable(window: &web::Window) -> bool {
    let has_ontouchstart =
        js_sys::Reflect::has(window.as_ref(), &JsValue::from_str("ontouchstart")).unwrap_or(false);
    has_ontouchstart || window.navigator().max_touch_points() > 0
}

pub fn create_element<T: JsCast>(document: &web::Document, tag: &str) -> anyhow::Result<T> {
    document
        .create_element(tag)
        .map_err(js_err)?
        .dyn_into::<T>()
        .map_err(|e| anyhow::anyhow!("<{}> has unexpected type: {:?}", tag, e))
}

#[inline]
pub fn set_style(el: &web::HtmlElement, property: &str, value: &str) {
    _ = el.style().set_property(property, value);
}

#[inline]
pub fn clear_style(el: &web::HtmlElement, property: &str) {
    _ = el.style().remove_property(property);
}

/// Position a fixed element's top-left at `pos` (viewport pixels).
#[inline]
pub fn place(el: &web::HtmlElement, pos: Vec2) {
    set_style(el, "left", &format!("{}px", pos.x));
    set_style(el, "top", &format!("{}px", pos.y));
}

/// All elements under `root` matching `selector` that cast to `T`, in
/// document order.
pub fn query_all<T: JsCast>(root: &web::Element, selector: &str) -> Vec<T> {
    let Ok(list) = root.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<T>().ok())
        .collect()
}

/// Remove every element in the document matching `selector`.
pub fn remove_all(document: &web::Document, selector: &str) {
    let Ok(list) = document.query_selector_all(selector) else {
        return;
    };
    let doomed: Vec<web::Element> = (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<web::Element>().ok())
        .collect();
    for el in doomed {
        el.remove();
    }
}
