#![cfg(target_arch = "wasm32")]
use crate::config::SceneConfig;
use crate::constants::MOUNT_ELEMENT_ID;
use crate::core::{InputSignals, ParticlePool, SceneAnimator, SceneClock, SceneGraph, SceneMeshes};
use crate::error::Unavailable;
use crate::events::Listeners;
use crate::frame::{FrameContext, LoopHandle};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

mod config;
mod constants;
mod core;
mod dom;
mod error;
mod events;
mod frame;
mod render;

thread_local! {
    static ACTIVE: RefCell<Option<LoopHandle>> = const { RefCell::new(None) };
    static TORN_DOWN: Cell<bool> = const { Cell::new(false) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("parallax background starting");

    spawn_local(async move {
        match init().await {
            Ok(handle) if TORN_DOWN.with(Cell::get) => handle.stop(),
            Ok(handle) => ACTIVE.with(|a| *a.borrow_mut() = Some(handle)),
            // the page stays usable with a static background
            Err(e) => log::info!("parallax background disabled: {e}"),
        }
    });
    Ok(())
}

/// Stop the animation loop, detach every listener and release GPU resources.
/// Safe to call more than once.
#[wasm_bindgen]
pub fn teardown() {
    TORN_DOWN.with(|t| t.set(true));
    if let Some(handle) = ACTIVE.with(|a| a.borrow_mut().take()) {
        handle.stop();
    }
}

async fn init() -> anyhow::Result<LoopHandle> {
    let (window, document) = dom::window_document().ok_or(Unavailable::NoDocument)?;
    let canvas = dom::find_canvas(&document, MOUNT_ELEMENT_ID)?;
    if !dom::has_webgpu(&window) {
        return Err(Unavailable::NoWebGpu.into());
    }

    let viewport = dom::viewport(&window);
    let config = SceneConfig::detect(viewport.css_width, dom::prefers_reduced_motion(&window));
    log::info!(
        "[init] device={:?} particles={} msaa={} reduced_motion={}",
        config.device,
        config.particle_count,
        config.msaa_samples(),
        config.reduced_motion
    );
    dom::sync_canvas_size(&canvas, &viewport, config.max_pixel_ratio);

    let meshes = SceneMeshes::build();
    let gpu = render::GpuState::new(
        canvas.clone(),
        &meshes,
        config.particle_count,
        config.msaa_samples(),
    )
    .await?;

    let signals = Rc::new(RefCell::new(InputSignals::new(dom::max_scroll(
        &window, &document,
    ))));
    signals.borrow_mut().on_scroll(dom::scroll_offset(&window));
    let viewport_cell = Rc::new(Cell::new(viewport));

    let mut listeners = Listeners::default();
    events::wire_pointer(&mut listeners, &window, signals.clone(), viewport_cell.clone());
    events::wire_scroll(&mut listeners, &window, signals.clone());
    events::wire_resize(
        &mut listeners,
        events::ResizeWiring {
            window: window.clone(),
            document,
            canvas: canvas.clone(),
            viewport: viewport_cell.clone(),
            signals: signals.clone(),
            max_pixel_ratio: config.max_pixel_ratio,
        },
    );
    events::wire_pagehide(&mut listeners, &window, teardown);
    log::info!("[init] {} listeners attached", listeners.len());

    let scene = SceneGraph::new(&config, viewport.aspect());
    let animator = SceneAnimator::new(scene, meshes.outer.positions.clone(), &config);
    let particles = ParticlePool::new(config.particle_count, StdRng::from_entropy());

    Ok(frame::start_loop(
        FrameContext {
            clock: SceneClock::start(),
            signals,
            viewport: viewport_cell,
            animator,
            particle_positions: Vec::with_capacity(particles.len()),
            particles,
            gpu: Some(gpu),
            canvas,
        },
        listeners,
    ))
}
