use crate::constants::{BACKDROP_STYLE, DATA_SEED, DATA_VARIANT, DEFAULT_CANVAS_ID};
use crate::core::{backing_size, Viewport};
use wasm_bindgen::JsCast;
use web_sys as web;

/// The global window together with its document.
pub fn window_document() -> anyhow::Result<(web::Window, web::Document)> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    Ok((window, document))
}

/// Current window inner size in CSS pixels.
pub fn window_viewport(window: &web::Window) -> Viewport {
    let w = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let h = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    Viewport::new(w as f32, h as f32)
}

/// Size the backing store to `viewport * devicePixelRatio`; returns the ratio used.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement, viewport: Viewport) -> f64 {
    let dpr = web::window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0);
    let (w_px, h_px) = backing_size(viewport, dpr);
    canvas.set_width(w_px);
    canvas.set_height(h_px);
    dpr
}

pub fn find_canvas(
    document: &web::Document,
    element_id: &str,
) -> anyhow::Result<web::HtmlCanvasElement> {
    let el = document
        .get_element_by_id(element_id)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", element_id))?;
    el.dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!("#{} is not a canvas: {:?}", element_id, e))
}

/// Create a backdrop canvas as the first child of `<body>`.
pub fn create_canvas(document: &web::Document) -> anyhow::Result<web::HtmlCanvasElement> {
    let body = document
        .body()
        .ok_or_else(|| anyhow::anyhow!("no document body"))?;
    let canvas = document
        .create_element("canvas")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    canvas.set_id(DEFAULT_CANVAS_ID);
    let _ = canvas.set_attribute("aria-hidden", "true");
    body.prepend_with_node_1(&canvas)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    Ok(canvas)
}

#[inline]
pub fn apply_backdrop_style(canvas: &web::HtmlCanvasElement) {
    let _ = canvas.set_attribute("style", BACKDROP_STYLE);
}

#[inline]
pub fn variant_attribute(canvas: &web::HtmlCanvasElement) -> Option<String> {
    canvas.get_attribute(DATA_VARIANT)
}

/// `data-seed` as a u64; malformed values are logged and ignored.
pub fn seed_attribute(canvas: &web::HtmlCanvasElement) -> Option<u64> {
    let raw = canvas.get_attribute(DATA_SEED)?;
    match raw.trim().parse::<u64>() {
        Ok(seed) => Some(seed),
        Err(e) => {
            log::warn!("[dom] ignoring {}={:?}: {}", DATA_SEED, raw, e);
            None
        }
    }
}
