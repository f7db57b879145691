// DOM-facing constants for the backdrop component.

// Canvas created by `mount` when no element id is given
pub const DEFAULT_CANVAS_ID: &str = "particle-backdrop";

// Optional per-deployment settings read from the canvas element
pub const DATA_VARIANT: &str = "data-variant";
pub const DATA_SEED: &str = "data-seed";

// Fixed, full-viewport, behind all content, never intercepting pointer input
pub const BACKDROP_STYLE: &str = "position:fixed;top:0;left:0;width:100%;height:100%;\
pointer-events:none;z-index:-10;background:transparent";

// Window events the component listens to
pub const EVENT_RESIZE: &str = "resize";
pub const EVENT_POINTER_MOVE: &str = "pointermove";
pub const EVENT_POINTER_OUT: &str = "pointerout";
pub const EVENT_POINTER_UP: &str = "pointerup";
pub const EVENT_POINTER_CANCEL: &str = "pointercancel";
