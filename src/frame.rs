use crate::config::Viewport;
use crate::core::{FrameInputs, InputSignals, ParticlePool, SceneAnimator, SceneClock};
use crate::events::Listeners;
use crate::render;
use glam::Vec3;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub clock: SceneClock,
    pub signals: Rc<RefCell<InputSignals>>,
    pub viewport: Rc<Cell<Viewport>>,
    pub animator: SceneAnimator,
    pub particles: ParticlePool,
    pub gpu: Option<render::GpuState>,
    pub canvas: web::HtmlCanvasElement,
    pub particle_positions: Vec<Vec3>,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let t = self.clock.elapsed();
        let inputs = {
            let mut signals = self.signals.borrow_mut();
            signals.tick();
            FrameInputs::sample(t, &signals)
        };

        self.animator.set_aspect(self.viewport.get().aspect());
        self.animator.animate(&inputs);

        self.particles.update();
        self.particle_positions.clear();
        self.particle_positions.extend(self.particles.positions());

        let Some(gpu) = &mut self.gpu else {
            return;
        };
        gpu.resize_if_needed(self.canvas.width(), self.canvas.height());
        match gpu.render(
            self.animator.scene(),
            self.animator.displaced_vertices(),
            &self.particle_positions,
        ) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => gpu.reconfigure(),
            Err(e) => log::warn!("[frame] render error: {:?}", e),
        }
    }
}

type TickClosure = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Owns everything the running loop keeps alive. `stop` cancels the pending
/// frame, detaches listeners and releases GPU resources.
pub struct LoopHandle {
    ctx: Rc<RefCell<FrameContext>>,
    tick: TickClosure,
    raf_id: Rc<Cell<Option<i32>>>,
    listeners: Listeners,
}

impl LoopHandle {
    pub fn stop(mut self) {
        if let (Some(id), Some(w)) = (self.raf_id.take(), web::window()) {
            _ = w.cancel_animation_frame(id);
        }
        self.listeners.remove_all();
        // breaks the closure <-> handle cycle
        let closure = self.tick.borrow_mut().take();
        drop(closure);
        self.ctx.borrow_mut().gpu = None;
        log::info!("[frame] loop stopped");
    }
}

fn request_frame(tick: &TickClosure) -> Option<i32> {
    let window = web::window()?;
    let tick = tick.borrow();
    let callback = tick.as_ref()?;
    window
        .request_animation_frame(callback.as_ref().unchecked_ref())
        .ok()
}

pub fn start_loop(frame_ctx: FrameContext, listeners: Listeners) -> LoopHandle {
    let ctx = Rc::new(RefCell::new(frame_ctx));
    let tick: TickClosure = Rc::new(RefCell::new(None));
    let raf_id = Rc::new(Cell::new(None));

    let tick_clone = tick.clone();
    let raf_tick = raf_id.clone();
    let ctx_tick = ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        raf_tick.set(None);
        ctx_tick.borrow_mut().frame();
        raf_tick.set(request_frame(&tick_clone));
    }) as Box<dyn FnMut()>));
    raf_id.set(request_frame(&tick));

    LoopHandle {
        ctx,
        tick,
        raf_id,
        listeners,
    }
}
