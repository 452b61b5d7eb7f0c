//! Stateless animation math and timing helpers.
//!
//! Everything here is pure: the particle field, the label overlay and the
//! transcript reveal all build on these functions and none of them keep state.

use glam::DVec2;
use std::f64::consts::TAU;
use std::fmt;

/// Linear interpolation. `t` is not clamped.
#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

#[inline]
pub fn clamp(v: f64, lo: f64, hi: f64) -> f64 {
    v.max(lo).min(hi)
}

/// Cubic ease `x²(3 − 2x)`; expects `x` in \[0, 1\].
#[inline]
pub fn smooth_step(x: f64) -> f64 {
    x * x * (3.0 - 2.0 * x)
}

/// Cartesian offset of a point at `radius` and `angle` (radians) from the origin.
#[inline]
pub fn polar(radius: f64, angle: f64) -> DVec2 {
    DVec2::new(radius * angle.cos(), radius * angle.sin())
}

/// A slot on a circle, relative to the circle center.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbitPosition {
    pub x: f64,
    pub y: f64,
    /// Angle in degrees.
    pub angle: f64,
}

/// Place `index` of `total` evenly around a circle of `radius`, rotated by
/// `angle_offset` radians.
pub fn orbit_position(index: usize, total: usize, radius: f64, angle_offset: f64) -> OrbitPosition {
    let theta = if total == 0 {
        angle_offset
    } else {
        (index as f64 / total as f64) * TAU + angle_offset
    };
    let p = polar(radius, theta);
    OrbitPosition {
        x: p.x,
        y: p.y,
        angle: theta.to_degrees(),
    }
}

/// Linear stagger used for sequential reveals.
#[inline]
pub fn stagger_delay(index: usize, base_ms: u64) -> u64 {
    index as u64 * base_ms
}

/// Whitespace-delimited, non-empty tokens in order.
pub fn split_into_words(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

/// Color in hue/saturation/lightness space so hue interpolation stays one-dimensional.
///
/// `h` is in degrees, `s` and `l` in percent, `a` in \[0, 1\].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsla {
    pub h: f64,
    pub s: f64,
    pub l: f64,
    pub a: f64,
}

impl Hsla {
    pub const fn new(h: f64, s: f64, l: f64, a: f64) -> Self {
        Self { h, s, l, a }
    }

    pub fn with_alpha(self, a: f64) -> Self {
        Self { a, ..self }
    }

    /// Raise lightness by `amount` percentage points, capped at 100.
    pub fn lighten(self, amount: f64) -> Self {
        Self {
            l: (self.l + amount).min(100.0),
            ..self
        }
    }

    /// Component-wise linear blend.
    pub fn lerp(self, other: Hsla, t: f64) -> Self {
        Self {
            h: lerp(self.h, other.h, t),
            s: lerp(self.s, other.s, t),
            l: lerp(self.l, other.l, t),
            a: lerp(self.a, other.a, t),
        }
    }

    /// CSS `hsla()` string.
    pub fn to_css(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Hsla {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsla({:.1}, {:.1}%, {:.1}%, {:.3})",
            self.h, self.s, self.l, self.a
        )
    }
}

/// Format a color as a CSS `hsla()` string.
#[inline]
pub fn color_at(h: f64, s: f64, l: f64, alpha: f64) -> String {
    Hsla::new(h, s, l, alpha).to_css()
}

/// Named durations shared by reveal animations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Timing {
    Fast,
    Medium,
    Slow,
    ExtraSlow,
}

impl Timing {
    pub fn millis(self) -> u32 {
        match self {
            Timing::Fast => 200,
            Timing::Medium => 400,
            Timing::Slow => 800,
            Timing::ExtraSlow => 1200,
        }
    }
}
