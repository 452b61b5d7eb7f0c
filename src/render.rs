use crate::constants::*;
use crate::core::{ActivityParams, FieldFrame, Hsla};
use glam::DVec2;

/// Minimal 2D raster target the painter draws onto, in logical pixels.
///
/// The browser implementation wraps a `CanvasRenderingContext2d`; tests use a
/// recording surface.
pub trait Surface {
    /// Logical side length of the square viewport.
    fn logical_size(&self) -> f64;
    fn fill_rect(&mut self, origin: DVec2, size: DVec2, color: Hsla);
    fn stroke_line(&mut self, from: DVec2, to: DVec2, width: f64, color: Hsla);
    /// Disc filled with a radial gradient from `center` (offset 0) to `radius` (offset 1).
    fn fill_radial_glow(&mut self, center: DVec2, radius: f64, stops: &[(f64, Hsla)]);
    fn fill_circle(&mut self, center: DVec2, radius: f64, color: Hsla);
}

impl<S: Surface + ?Sized> Surface for Box<S> {
    fn logical_size(&self) -> f64 {
        (**self).logical_size()
    }
    fn fill_rect(&mut self, origin: DVec2, size: DVec2, color: Hsla) {
        (**self).fill_rect(origin, size, color)
    }
    fn stroke_line(&mut self, from: DVec2, to: DVec2, width: f64, color: Hsla) {
        (**self).stroke_line(from, to, width, color)
    }
    fn fill_radial_glow(&mut self, center: DVec2, radius: f64, stops: &[(f64, Hsla)]) {
        (**self).fill_radial_glow(center, radius, stops)
    }
    fn fill_circle(&mut self, center: DVec2, radius: f64, color: Hsla) {
        (**self).fill_circle(center, radius, color)
    }
}

/// Backing-store dimensions for a logical square viewport on a display with
/// device pixel ratio `dpr`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BackingSize {
    pub logical: f64,
    pub width_px: u32,
    pub height_px: u32,
    /// Context scale so drawing stays in logical units.
    pub scale: f64,
}

impl BackingSize {
    pub fn new(logical: f64, dpr: f64) -> Self {
        let logical = crate::core::sanitize_size(logical);
        let scale = if dpr.is_finite() && dpr > 0.0 { dpr } else { 1.0 };
        let px = ((logical * scale).round() as u32).max(1);
        Self {
            logical,
            width_px: px,
            height_px: px,
            scale,
        }
    }
}

/// Opacity of a connection between two particles `dist` apart, or `None`
/// when they are too far apart to connect.
#[inline]
pub fn connection_alpha(dist: f64, brightness: f64) -> Option<f64> {
    if dist < CONNECTION_DISTANCE {
        Some((1.0 - dist / CONNECTION_DISTANCE) * CONNECTION_ALPHA * brightness)
    } else {
        None
    }
}

/// Paint one frame: trail fill, connections, particle glows and cores, then
/// the ambient center glow.
pub fn paint_frame<S: Surface + ?Sized>(
    surface: &mut S,
    frame: &FieldFrame<'_>,
    params: &ActivityParams,
    intensity: f64,
) {
    let size = surface.logical_size();
    surface.fill_rect(DVec2::ZERO, DVec2::splat(size), TRAIL_FILL);

    let sprites = frame.sprites;
    for (i, a) in sprites.iter().enumerate() {
        for b in &sprites[i + 1..] {
            let dist = a.position.distance(b.position);
            if let Some(alpha) = connection_alpha(dist, params.brightness) {
                let color = a.color.lerp(b.color, 0.5).with_alpha(alpha);
                surface.stroke_line(a.position, b.position, CONNECTION_WIDTH, color);
            }
        }
    }

    for s in sprites {
        let alpha = s.color.a;
        let stops = [
            (0.0, s.color),
            (GLOW_MID_STOP, s.color.with_alpha(alpha * GLOW_MID_ALPHA)),
            (1.0, s.color.with_alpha(0.0)),
        ];
        surface.fill_radial_glow(s.position, s.radius * GLOW_RADIUS_SCALE, &stops);
        surface.fill_circle(s.position, s.radius, s.color.lighten(CORE_LIGHTEN));
    }

    let boost = 1.0 + intensity * AMBIENT_INTENSITY_GAIN;
    let radius = AMBIENT_RADIUS * params.expansion * boost;
    let glow = params.brightness * boost;
    let stops = [
        (0.0, AMBIENT_INNER.with_alpha(AMBIENT_INNER.a * glow)),
        (0.5, AMBIENT_MID.with_alpha(AMBIENT_MID.a * glow)),
        (1.0, AMBIENT_OUTER),
    ];
    surface.fill_radial_glow(frame.center, radius, &stops);
}
