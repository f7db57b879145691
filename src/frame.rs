use crate::core::{LoopState, ParticleField};
use crate::render::{self, CanvasSurface};
use rand::rngs::StdRng;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub type SharedField = Rc<RefCell<ParticleField<StdRng>>>;

pub struct FrameContext {
    pub field: SharedField,
    pub canvas: web::HtmlCanvasElement,
    pub ctx: Option<web::CanvasRenderingContext2d>,
    pub pixel_ratio: Rc<Cell<f64>>,
    pub warned_no_context: bool,
}

impl FrameContext {
    pub fn frame(&mut self) {
        if !self.canvas.is_connected() {
            return;
        }
        if self.ctx.is_none() {
            self.ctx = render::context_2d(&self.canvas);
        }
        let Some(ctx) = self.ctx.as_ref() else {
            if !self.warned_no_context {
                log::warn!("[frame] 2d context unavailable, skipping frames until it is");
                self.warned_no_context = true;
            }
            return;
        };
        let mut surface = CanvasSurface::new(ctx, self.pixel_ratio.get());
        self.field.borrow_mut().tick(Some(&mut surface));
    }

    /// Clear whatever the last frame left on the canvas.
    pub fn clear(&self) {
        if let Some(ctx) = &self.ctx {
            let _ = ctx.set_transform(1.0, 0.0, 0.0, 1.0, 0.0, 0.0);
            ctx.clear_rect(
                0.0,
                0.0,
                self.canvas.width() as f64,
                self.canvas.height() as f64,
            );
        }
    }
}

type TickClosure = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// A `requestAnimationFrame` loop with an explicit stop.
///
/// Each frame requests the next one only after its body has run, and every
/// request is tracked in [`LoopState`] so [`FrameLoop::stop`] can cancel it.
pub struct FrameLoop {
    state: Rc<RefCell<LoopState>>,
    tick: TickClosure,
}

impl FrameLoop {
    pub fn start(frame_ctx: Rc<RefCell<FrameContext>>) -> anyhow::Result<Self> {
        let state = Rc::new(RefCell::new(LoopState::new()));
        let tick: TickClosure = Rc::new(RefCell::new(None));

        let state_tick = state.clone();
        let tick_clone = tick.clone();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            if !state_tick.borrow_mut().begin_tick() {
                return;
            }
            frame_ctx.borrow_mut().frame();
            if let Some(cb) = tick_clone.borrow().as_ref() {
                request_next(&state_tick, cb);
            }
        }) as Box<dyn FnMut()>));

        state.borrow_mut().start();
        let requested = {
            let first = tick.borrow();
            match (web::window(), first.as_ref()) {
                (Some(w), Some(cb)) => w
                    .request_animation_frame(cb.as_ref().unchecked_ref())
                    .map_err(|e| anyhow::anyhow!("requestAnimationFrame: {:?}", e)),
                (None, _) => Err(anyhow::anyhow!("no window")),
                (_, None) => Err(anyhow::anyhow!("frame closure missing")),
            }
        };
        match requested {
            Ok(handle) => {
                state.borrow_mut().scheduled(handle);
            }
            Err(e) => {
                state.borrow_mut().stop();
                tick.borrow_mut().take();
                return Err(e);
            }
        }

        Ok(Self { state, tick })
    }

    /// Cancel the pending frame and release the frame closure. Safe to call
    /// more than once.
    pub fn stop(&self) {
        let pending = self.state.borrow_mut().stop();
        if let Some(handle) = pending {
            if let Some(w) = web::window() {
                let _ = w.cancel_animation_frame(handle);
            }
        }
        if self.tick.borrow_mut().take().is_some() {
            log::debug!("[frame] loop stopped after {} ticks", self.ticks());
        }
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.state.borrow().is_running()
    }

    #[inline]
    pub fn ticks(&self) -> u64 {
        self.state.borrow().ticks()
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.stop();
    }
}

fn request_next(state: &Rc<RefCell<LoopState>>, cb: &Closure<dyn FnMut()>) {
    let Some(w) = web::window() else {
        state.borrow_mut().stop();
        return;
    };
    match w.request_animation_frame(cb.as_ref().unchecked_ref()) {
        Ok(handle) => {
            if !state.borrow_mut().scheduled(handle) {
                let _ = w.cancel_animation_frame(handle);
            }
        }
        Err(e) => {
            log::error!("[frame] requestAnimationFrame failed: {:?}", e);
            state.borrow_mut().stop();
        }
    }
}
