use super::listener::EventListener;
use crate::constants::{
    EVENT_POINTER_CANCEL, EVENT_POINTER_MOVE, EVENT_POINTER_OUT, EVENT_POINTER_UP,
};
use crate::core::{PointerKind, PointerSignal};
use crate::frame::SharedField;
use crate::input;
use web_sys as web;

type ToSignal = fn(&web::PointerEvent, &web::HtmlCanvasElement) -> PointerSignal;

/// Track the pointer over the whole window; the canvas itself never receives
/// pointer events.
///
/// Every device reports through pointer events, so a touch or pen that lifts
/// off clears the pointer the same way a mouse leaving the window does.
pub fn wire_pointer_tracking(
    window: &web::Window,
    canvas: &web::HtmlCanvasElement,
    field: &SharedField,
) -> Vec<EventListener> {
    let listen = |kind: &'static str, to_signal: ToSignal| {
        let canvas = canvas.clone();
        let field = field.clone();
        EventListener::new(window, kind, move |ev: web::PointerEvent| {
            if !canvas.is_connected() {
                return;
            }
            let device = PointerKind::from_dom(&ev.pointer_type());
            field
                .borrow_mut()
                .pointer_input(device, to_signal(&ev, &canvas));
        })
    };

    vec![
        listen(EVENT_POINTER_MOVE, |ev, canvas| {
            PointerSignal::Moved(input::pointer_canvas_css(ev, canvas))
        }),
        listen(EVENT_POINTER_OUT, |ev, _| PointerSignal::Out {
            left_window: input::left_window(ev),
        }),
        listen(EVENT_POINTER_UP, |_, _| PointerSignal::Up),
        listen(EVENT_POINTER_CANCEL, |_, _| PointerSignal::Cancel),
    ]
}
