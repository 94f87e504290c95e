use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

mod page;
mod pointer;
mod viewport;

pub use page::wire_pagehide;
pub use pointer::wire_pointer;
pub use viewport::{wire_resize, wire_scroll, ResizeWiring};

struct Registered {
    target: web::EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(web::Event)>,
}

/// Event listeners owned by the running background. Dropping the set
/// detaches every handler from its target.
#[derive(Default)]
pub struct Listeners {
    registered: Vec<Registered>,
}

impl Listeners {
    pub fn add(
        &mut self,
        target: &web::EventTarget,
        event: &'static str,
        passive: bool,
        handler: impl FnMut(web::Event) + 'static,
    ) {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        let options = web::AddEventListenerOptions::new();
        options.set_passive(passive);
        if let Err(e) = target.add_event_listener_with_callback_and_add_event_listener_options(
            event,
            callback.as_ref().unchecked_ref(),
            &options,
        ) {
            log::warn!("[events] cannot listen for {}: {:?}", event, e);
            return;
        }
        self.registered.push(Registered {
            target: target.clone(),
            event,
            callback,
        });
    }

    pub fn len(&self) -> usize {
        self.registered.len()
    }

    pub fn remove_all(&mut self) {
        for r in self.registered.drain(..) {
            _ = r
                .target
                .remove_event_listener_with_callback(r.event, r.callback.as_ref().unchecked_ref());
        }
    }
}

impl Drop for Listeners {
    fn drop(&mut self) {
        self.remove_all();
    }
}
