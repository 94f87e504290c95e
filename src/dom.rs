use crate::config::Viewport;
use crate::error::Unavailable;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

#[inline]
pub fn window_document() -> Option<(web::Window, web::Document)> {
    let window = web::window()?;
    let document = window.document()?;
    Some((window, document))
}

#[inline]
fn js_f64(value: Result<JsValue, JsValue>) -> f64 {
    value.ok().and_then(|v| v.as_f64()).unwrap_or(0.0)
}

pub fn viewport(window: &web::Window) -> Viewport {
    Viewport {
        css_width: js_f64(window.inner_width()),
        css_height: js_f64(window.inner_height()),
        device_pixel_ratio: window.device_pixel_ratio(),
    }
}

#[inline]
pub fn scroll_offset(window: &web::Window) -> f64 {
    window.scroll_y().unwrap_or(0.0)
}

/// Document height minus viewport height; 0 when the page cannot scroll.
pub fn max_scroll(window: &web::Window, document: &web::Document) -> f32 {
    let scroll_height = document
        .document_element()
        .map(|el| el.scroll_height() as f64)
        .unwrap_or(0.0);
    let inner_height = js_f64(window.inner_height());
    (scroll_height - inner_height).max(0.0) as f32
}

pub fn prefers_reduced_motion(window: &web::Window) -> bool {
    window
        .match_media("(prefers-reduced-motion: reduce)")
        .ok()
        .flatten()
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

/// `navigator.gpu` is only present where WebGPU is exposed.
pub fn has_webgpu(window: &web::Window) -> bool {
    js_sys::Reflect::has(&window.navigator(), &JsValue::from_str("gpu")).unwrap_or(false)
}

pub fn find_canvas(
    document: &web::Document,
    id: &'static str,
) -> Result<web::HtmlCanvasElement, Unavailable> {
    document
        .get_element_by_id(id)
        .ok_or(Unavailable::MissingMount(id))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|_| Unavailable::NotACanvas(id))
}

/// Size the canvas to the viewport: CSS size in CSS pixels, backing store in
/// device pixels (ratio capped at `max_pixel_ratio`).
pub fn sync_canvas_size(canvas: &web::HtmlCanvasElement, viewport: &Viewport, max_pixel_ratio: f64) {
    let (w_px, h_px) = viewport.backing_size(max_pixel_ratio);
    canvas.set_width(w_px);
    canvas.set_height(h_px);
    let style = canvas.style();
    _ = style.set_property("width", &format!("{}px", viewport.css_width));
    _ = style.set_property("height", &format!("{}px", viewport.css_height));
}
