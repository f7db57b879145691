use glam::Vec2;

/// Input device behind a pointer event.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PointerKind {
    #[default]
    Mouse,
    Pen,
    Touch,
}

impl PointerKind {
    /// Map a DOM `pointerType`. Empty or unknown values count as a mouse.
    pub fn from_dom(kind: &str) -> Self {
        match kind {
            "touch" => Self::Touch,
            "pen" => Self::Pen,
            _ => Self::Mouse,
        }
    }

    /// A mouse keeps hovering after its button is released.
    #[inline]
    pub fn hovers(self) -> bool {
        matches!(self, Self::Mouse)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerSignal {
    Moved(Vec2),
    /// `left_window` is set when the event has no related target.
    Out { left_window: bool },
    Up,
    Cancel,
}

/// Pointer position after `signal` arrives from a `kind` device.
pub fn next_pointer(current: Option<Vec2>, kind: PointerKind, signal: PointerSignal) -> Option<Vec2> {
    match signal {
        PointerSignal::Moved(pos) => Some(pos),
        PointerSignal::Out { left_window } => {
            if left_window {
                None
            } else {
                current
            }
        }
        PointerSignal::Up if kind.hovers() => current,
        PointerSignal::Up | PointerSignal::Cancel => None,
    }
}
