use super::Listeners;
use crate::config::Viewport;
use crate::core::InputSignals;
use crate::dom;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use web_sys as web;

pub fn wire_scroll(
    listeners: &mut Listeners,
    window: &web::Window,
    signals: Rc<RefCell<InputSignals>>,
) {
    let win = window.clone();
    listeners.add(window, "scroll", true, move |_ev: web::Event| {
        signals.borrow_mut().on_scroll(dom::scroll_offset(&win));
    });
}

#[derive(Clone)]
pub struct ResizeWiring {
    pub window: web::Window,
    pub document: web::Document,
    pub canvas: web::HtmlCanvasElement,
    pub viewport: Rc<Cell<Viewport>>,
    pub signals: Rc<RefCell<InputSignals>>,
    pub max_pixel_ratio: f64,
}

/// Resizes take effect before the next frame: canvas size, camera aspect (via
/// the shared viewport) and the scrollable distance are all refreshed here.
pub fn wire_resize(listeners: &mut Listeners, w: ResizeWiring) {
    let target = w.window.clone();
    listeners.add(&target, "resize", false, move |_ev: web::Event| {
        let vp = dom::viewport(&w.window);
        w.viewport.set(vp);
        dom::sync_canvas_size(&w.canvas, &vp, w.max_pixel_ratio);
        let mut signals = w.signals.borrow_mut();
        signals.set_max_scroll(dom::max_scroll(&w.window, &w.document));
        log::debug!(
            "[resize] {}x{} css, aspect {:.3}, max scroll {}px",
            vp.css_width,
            vp.css_height,
            vp.aspect(),
            signals.max_scroll()
        );
    });
}
