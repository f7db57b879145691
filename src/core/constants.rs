// Shared simulation tuning constants for the particle backdrop.

// Viewport bucketing
pub const NARROW_BREAKPOINT_PX: f32 = 768.0; // widths below this use the narrow count
pub const PARTICLE_COUNT_NARROW: usize = 40;
pub const PARTICLE_COUNT_WIDE: usize = 80;

// Motion (pixels per frame)
pub const MAX_SPEED: f32 = 0.5; // velocity components span [-MAX_SPEED / 2, MAX_SPEED / 2]
pub const DRIFT_SPEED: f32 = 0.3; // constant magnitude used by the drift preset

// Particle discs
pub const RADIUS_MIN: f32 = 1.0;
pub const RADIUS_SPAN: f32 = 2.0;

// Particle-to-particle lines
pub const CONNECT_DISTANCE: f32 = 110.0;
pub const LINK_MAX_ALPHA: f32 = 0.2;
pub const LINK_COLOR: [u8; 3] = [148, 163, 184]; // slate-400

// Particle-to-pointer lines
pub const POINTER_RADIUS: f32 = 150.0;
pub const POINTER_LINK_MAX_ALPHA: f32 = 0.5;
pub const POINTER_LINK_COLOR: [u8; 3] = [6, 182, 212]; // cyan-500

pub const LINE_WIDTH: f32 = 1.0;

// Palettes
pub const BRAND_PALETTE: [[u8; 3]; 3] = [
    [0x06, 0xb6, 0xd4], // cyan
    [0xa8, 0x55, 0xf7], // purple
    [0x3b, 0x82, 0xf6], // blue
];
pub const MONO_PALETTE: [[u8; 3]; 1] = [[0x94, 0xa3, 0xb8]];
