use super::constants::*;
use super::surface::Rgb;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("unknown backdrop variant {0:?} (expected \"network\" or \"drift\")")]
    UnknownVariant(String),
    #[error("particle count must be at least one")]
    NoParticles,
    #[error("palette must contain at least one color")]
    EmptyPalette,
    #[error("{0} must be positive")]
    NonPositive(&'static str),
    #[error("{0} must not be negative")]
    Negative(&'static str),
}

/// What happens when a particle crosses a viewport edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Boundary {
    /// Clamp to the edge and send the velocity component back inward.
    Bounce,
    /// Teleport to the opposite edge.
    Wrap,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum VelocityInit {
    /// Each component uniform in `[-max_speed / 2, max_speed / 2]`.
    Uniform { max_speed: f32 },
    /// Random heading with a constant magnitude.
    Fixed { speed: f32 },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinkStyle {
    pub distance: f32,
    pub color: Rgb,
    pub max_alpha: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Connections {
    pub between: LinkStyle,
    pub pointer: LinkStyle,
}

/// Named deployment presets.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Variant {
    /// Bouncing brand-colored particles joined by fading lines.
    #[default]
    Network,
    /// Monochrome particles wrapping around the edges, no lines.
    Drift,
}

impl Variant {
    pub fn as_str(self) -> &'static str {
        match self {
            Variant::Network => "network",
            Variant::Drift => "drift",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Variant {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "network" => Ok(Variant::Network),
            "drift" => Ok(Variant::Drift),
            other => Err(ConfigError::UnknownVariant(other.to_string())),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct FieldConfig {
    pub narrow_breakpoint: f32,
    pub count_narrow: usize,
    pub count_wide: usize,
    pub velocity: VelocityInit,
    pub radius_min: f32,
    pub radius_span: f32,
    pub boundary: Boundary,
    pub palette: Vec<Rgb>,
    pub connections: Option<Connections>,
    pub line_width: f32,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self::network()
    }
}

impl FieldConfig {
    pub fn network() -> Self {
        Self {
            narrow_breakpoint: NARROW_BREAKPOINT_PX,
            count_narrow: PARTICLE_COUNT_NARROW,
            count_wide: PARTICLE_COUNT_WIDE,
            velocity: VelocityInit::Uniform {
                max_speed: MAX_SPEED,
            },
            radius_min: RADIUS_MIN,
            radius_span: RADIUS_SPAN,
            boundary: Boundary::Bounce,
            palette: BRAND_PALETTE.iter().copied().map(Rgb::from).collect(),
            connections: Some(Connections {
                between: LinkStyle {
                    distance: CONNECT_DISTANCE,
                    color: Rgb::from(LINK_COLOR),
                    max_alpha: LINK_MAX_ALPHA,
                },
                pointer: LinkStyle {
                    distance: POINTER_RADIUS,
                    color: Rgb::from(POINTER_LINK_COLOR),
                    max_alpha: POINTER_LINK_MAX_ALPHA,
                },
            }),
            line_width: LINE_WIDTH,
        }
    }

    pub fn drift() -> Self {
        Self {
            velocity: VelocityInit::Fixed { speed: DRIFT_SPEED },
            boundary: Boundary::Wrap,
            palette: MONO_PALETTE.iter().copied().map(Rgb::from).collect(),
            connections: None,
            ..Self::network()
        }
    }

    pub fn for_variant(variant: Variant) -> Self {
        match variant {
            Variant::Network => Self::network(),
            Variant::Drift => Self::drift(),
        }
    }

    /// Particle count for a viewport of the given CSS width.
    pub fn particle_count(&self, viewport_width: f32) -> usize {
        if viewport_width < self.narrow_breakpoint {
            self.count_narrow
        } else {
            self.count_wide
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.count_narrow == 0 || self.count_wide == 0 {
            return Err(ConfigError::NoParticles);
        }
        if self.palette.is_empty() {
            return Err(ConfigError::EmptyPalette);
        }
        positive("narrow_breakpoint", self.narrow_breakpoint)?;
        positive("line_width", self.line_width)?;
        non_negative("radius_min", self.radius_min)?;
        non_negative("radius_span", self.radius_span)?;
        match self.velocity {
            VelocityInit::Uniform { max_speed } => non_negative("max_speed", max_speed)?,
            VelocityInit::Fixed { speed } => non_negative("speed", speed)?,
        }
        if let Some(c) = &self.connections {
            positive("connection distance", c.between.distance)?;
            positive("pointer radius", c.pointer.distance)?;
            non_negative("link alpha", c.between.max_alpha)?;
            non_negative("pointer link alpha", c.pointer.max_alpha)?;
        }
        Ok(())
    }
}

fn positive(name: &'static str, v: f32) -> Result<(), ConfigError> {
    if v.is_finite() && v > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositive(name))
    }
}

fn non_negative(name: &'static str, v: f32) -> Result<(), ConfigError> {
    if v.is_finite() && v >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Negative(name))
    }
}
