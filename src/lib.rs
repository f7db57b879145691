#![cfg(target_arch = "wasm32")]
use crate::core::{FieldConfig, ParticleField, Variant};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod input;
mod render;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("particle-backdrop loaded");
    Ok(())
}

/// Everything one mount owns. Dropping it tears the component down.
struct Mounted {
    canvas: web::HtmlCanvasElement,
    created_canvas: bool,
    variant: Variant,
    field: frame::SharedField,
    frame_ctx: Rc<RefCell<frame::FrameContext>>,
    frame_loop: frame::FrameLoop,
    _listeners: Vec<events::EventListener>,
}

impl Drop for Mounted {
    fn drop(&mut self) {
        self.frame_loop.stop();
        self.frame_ctx.borrow().clear();
        if self.created_canvas {
            self.canvas.remove();
        }
        log::info!("[backdrop] unmounted ({})", self.variant);
    }
}

/// Full-viewport particle background drawn on a 2D canvas.
#[wasm_bindgen]
pub struct ParticleBackground {
    inner: Option<Mounted>,
}

#[wasm_bindgen]
impl ParticleBackground {
    /// Attach to `#canvas_id`, or to a fresh canvas prepended to `<body>` when
    /// no id is given, and start animating.
    ///
    /// `variant` overrides the canvas' `data-variant` ("network" or "drift").
    pub fn mount(
        canvas_id: Option<String>,
        variant: Option<String>,
    ) -> Result<ParticleBackground, JsValue> {
        match mount_inner(canvas_id.as_deref(), variant.as_deref()) {
            Ok(m) => Ok(ParticleBackground { inner: Some(m) }),
            Err(e) => {
                log::error!("[backdrop] mount error: {:#}", e);
                Err(JsValue::from_str(&format!("{:#}", e)))
            }
        }
    }

    /// Stop animating and release every listener. Calling it again is a no-op.
    pub fn unmount(&mut self) {
        self.inner.take();
    }

    #[wasm_bindgen(getter, js_name = isRunning)]
    pub fn is_running(&self) -> bool {
        self.inner
            .as_ref()
            .map(|m| m.frame_loop.is_running())
            .unwrap_or(false)
    }

    #[wasm_bindgen(getter, js_name = particleCount)]
    pub fn particle_count(&self) -> usize {
        self.inner
            .as_ref()
            .map(|m| m.field.borrow().particle_count())
            .unwrap_or(0)
    }

    #[wasm_bindgen(getter)]
    pub fn variant(&self) -> Option<String> {
        self.inner.as_ref().map(|m| m.variant.to_string())
    }
}

fn mount_inner(canvas_id: Option<&str>, variant: Option<&str>) -> anyhow::Result<Mounted> {
    let (window, document) = dom::window_document()?;

    let (canvas, created_canvas) = match canvas_id {
        Some(id) => (dom::find_canvas(&document, id)?, false),
        None => (dom::create_canvas(&document)?, true),
    };
    match attach(&window, canvas.clone(), created_canvas, variant) {
        Ok(mounted) => Ok(mounted),
        Err(e) => {
            if created_canvas {
                canvas.remove();
            }
            Err(e)
        }
    }
}

fn attach(
    window: &web::Window,
    canvas: web::HtmlCanvasElement,
    created_canvas: bool,
    variant: Option<&str>,
) -> anyhow::Result<Mounted> {
    dom::apply_backdrop_style(&canvas);

    let variant = match variant.map(str::to_owned).or_else(|| dom::variant_attribute(&canvas)) {
        Some(name) => name.parse::<Variant>()?,
        None => Variant::default(),
    };
    let rng = match dom::seed_attribute(&canvas) {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let viewport = dom::window_viewport(window);
    let pixel_ratio = Rc::new(Cell::new(dom::sync_canvas_backing_size(&canvas, viewport)));
    let field: frame::SharedField = Rc::new(RefCell::new(ParticleField::new(
        FieldConfig::for_variant(variant),
        viewport,
        rng,
    )?));

    let mut listeners = vec![events::wire_resize(window, &canvas, &field, &pixel_ratio)];
    listeners.extend(events::wire_pointer_tracking(window, &canvas, &field));

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        field: field.clone(),
        canvas: canvas.clone(),
        ctx: render::context_2d(&canvas),
        pixel_ratio,
        warned_no_context: false,
    }));
    let frame_loop = frame::FrameLoop::start(frame_ctx.clone())?;

    log::info!(
        "[backdrop] mounted {} on #{} ({} particles, {:.0}x{:.0})",
        variant,
        canvas.id(),
        field.borrow().particle_count(),
        viewport.width,
        viewport.height
    );

    Ok(Mounted {
        canvas,
        created_canvas,
        variant,
        field,
        frame_ctx,
        frame_loop,
        _listeners: listeners,
    })
}
