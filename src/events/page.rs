use super::Listeners;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Run `on_hide` when the page is being discarded. Pages kept in the
/// back/forward cache resume with the loop intact, so those are ignored.
pub fn wire_pagehide(listeners: &mut Listeners, window: &web::Window, on_hide: fn()) {
    listeners.add(window, "pagehide", false, move |ev: web::Event| {
        let persisted = ev
            .dyn_ref::<web::PageTransitionEvent>()
            .is_some_and(|e| e.persisted());
        if !persisted {
            on_hide();
        }
    });
}
