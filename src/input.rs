use glam::Vec2;
use web_sys as web;

/// Pointer position in the canvas' CSS pixel space.
///
/// The simulation runs in CSS pixels, so unlike the backing store this needs
/// no device pixel ratio scaling.
#[inline]
pub fn pointer_canvas_css(ev: &web::MouseEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    let x_css = ev.client_x() as f32 - rect.left() as f32;
    let y_css = ev.client_y() as f32 - rect.top() as f32;
    Vec2::new(x_css, y_css)
}

/// True when a `pointerout` means the pointer left the window entirely.
#[inline]
pub fn left_window(ev: &web::MouseEvent) -> bool {
    ev.related_target().is_none()
}
