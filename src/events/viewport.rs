use super::listener::EventListener;
use crate::constants::EVENT_RESIZE;
use crate::dom;
use crate::frame::SharedField;
use std::cell::Cell;
use std::rc::Rc;
use web_sys as web;

/// Resize the canvas backing store and reseed the field on every window resize.
pub fn wire_resize(
    window: &web::Window,
    canvas: &web::HtmlCanvasElement,
    field: &SharedField,
    pixel_ratio: &Rc<Cell<f64>>,
) -> EventListener {
    let canvas = canvas.clone();
    let field = field.clone();
    let pixel_ratio = pixel_ratio.clone();
    EventListener::new(window, EVENT_RESIZE, move |_ev: web::Event| {
        let Some(window) = web::window() else {
            return;
        };
        let viewport = dom::window_viewport(&window);
        pixel_ratio.set(dom::sync_canvas_backing_size(&canvas, viewport));
        let mut f = field.borrow_mut();
        f.resize(viewport);
        log::debug!(
            "[resize] {:.0}x{:.0} -> {} particles",
            viewport.width,
            viewport.height,
            f.particle_count()
        );
    })
}
