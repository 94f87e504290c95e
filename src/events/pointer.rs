use super::Listeners;
use crate::config::Viewport;
use crate::core::InputSignals;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Pointer moves only retarget the pointer signal; smoothing happens per frame.
pub fn wire_pointer(
    listeners: &mut Listeners,
    window: &web::Window,
    signals: Rc<RefCell<InputSignals>>,
    viewport: Rc<Cell<Viewport>>,
) {
    listeners.add(window, "pointermove", true, move |ev: web::Event| {
        let Some(ev) = ev.dyn_ref::<web::MouseEvent>() else {
            return;
        };
        let vp = viewport.get();
        signals.borrow_mut().on_pointer_move(
            ev.client_x() as f64,
            ev.client_y() as f64,
            vp.css_width,
            vp.css_height,
        );
    });
}
