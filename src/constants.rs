/// Paint tuning constants for the Canvas 2D renderer.
///
/// These keep magic numbers out of `render.rs`; physics tuning lives in
/// `core::constants`.
use crate::core::Hsla;

// Motion trail: translucent fill in the background hue instead of a hard clear
pub const TRAIL_FILL: Hsla = Hsla::new(30.0, 25.0, 98.0, 0.15);

// Connections
pub const CONNECTION_DISTANCE: f64 = 50.0; // logical px
pub const CONNECTION_ALPHA: f64 = 0.15; // opacity of a zero-length connection
pub const CONNECTION_WIDTH: f64 = 0.5;

// Per-particle glow
pub const GLOW_RADIUS_SCALE: f64 = 3.0; // glow radius as a multiple of dot radius
pub const GLOW_MID_STOP: f64 = 0.4;
pub const GLOW_MID_ALPHA: f64 = 0.5;
pub const CORE_LIGHTEN: f64 = 10.0; // lightness points added to the core dot

// Ambient center glow
pub const AMBIENT_RADIUS: f64 = 60.0;
pub const AMBIENT_INTENSITY_GAIN: f64 = 0.5;
pub const AMBIENT_INNER: Hsla = Hsla::new(15.0, 50.0, 85.0, 0.15);
pub const AMBIENT_MID: Hsla = Hsla::new(25.0, 40.0, 80.0, 0.08);
pub const AMBIENT_OUTER: Hsla = Hsla::new(35.0, 30.0, 75.0, 0.0);
