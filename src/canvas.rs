use crate::core::Hsla;
use crate::dom;
use crate::error::VizError;
use crate::render::Surface;
use glam::DVec2;
use std::f64::consts::TAU;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Canvas 2D implementation of [`Surface`], drawing in logical pixels.
pub struct CanvasSurface {
    ctx: web::CanvasRenderingContext2d,
    logical: f64,
}

impl CanvasSurface {
    /// Size the canvas for the current device pixel ratio and acquire its 2D
    /// context, scaled so callers draw in logical units.
    pub fn acquire(canvas: &web::HtmlCanvasElement, logical: f64) -> Result<Self, VizError> {
        // The canvas is left untouched unless a context is available.
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .and_then(|obj| obj.dyn_into::<web::CanvasRenderingContext2d>().ok())
            .ok_or(VizError::ContextUnavailable)?;
        // Resizing resets the context transform, so size before scaling.
        let backing = dom::sync_canvas_backing_size(canvas, logical);
        _ = ctx.set_transform(1.0, 0.0, 0.0, 1.0, 0.0, 0.0);
        _ = ctx.scale(backing.scale, backing.scale);
        log::info!(
            "[canvas] backing {}x{} px (dpr {:.2})",
            backing.width_px,
            backing.height_px,
            backing.scale
        );
        Ok(Self {
            ctx,
            logical: backing.logical,
        })
    }
}

impl Surface for CanvasSurface {
    fn logical_size(&self) -> f64 {
        self.logical
    }

    fn fill_rect(&mut self, origin: DVec2, size: DVec2, color: Hsla) {
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx.fill_rect(origin.x, origin.y, size.x, size.y);
    }

    fn stroke_line(&mut self, from: DVec2, to: DVec2, width: f64, color: Hsla) {
        self.ctx.set_stroke_style_str(&color.to_css());
        self.ctx.set_line_width(width);
        self.ctx.begin_path();
        self.ctx.move_to(from.x, from.y);
        self.ctx.line_to(to.x, to.y);
        self.ctx.stroke();
    }

    fn fill_radial_glow(&mut self, center: DVec2, radius: f64, stops: &[(f64, Hsla)]) {
        if !(radius > 0.0) {
            return;
        }
        let gradient = match self
            .ctx
            .create_radial_gradient(center.x, center.y, 0.0, center.x, center.y, radius)
        {
            Ok(g) => g,
            Err(_) => return,
        };
        for (offset, color) in stops {
            _ = gradient.add_color_stop(*offset as f32, &color.to_css());
        }
        self.ctx.set_fill_style_canvas_gradient(&gradient);
        self.ctx.begin_path();
        _ = self.ctx.arc(center.x, center.y, radius, 0.0, TAU);
        self.ctx.fill();
    }

    fn fill_circle(&mut self, center: DVec2, radius: f64, color: Hsla) {
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx.begin_path();
        _ = self.ctx.arc(center.x, center.y, radius, 0.0, TAU);
        self.ctx.fill();
    }
}
