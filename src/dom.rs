use crate::error::VizError;
use crate::render::BackingSize;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

pub fn element_by_id(id: &str) -> anyhow::Result<web::HtmlElement> {
    let document = window_document().ok_or(VizError::NoDocument)?;
    let el = document
        .get_element_by_id(id)
        .ok_or_else(|| VizError::MissingElement(id.to_string()))?;
    el.dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow::anyhow!("#{id} is not an HTML element: {:?}", e))
}

pub fn canvas_by_id(id: &str) -> anyhow::Result<web::HtmlCanvasElement> {
    let document = window_document().ok_or(VizError::NoDocument)?;
    let el = document
        .get_element_by_id(id)
        .ok_or_else(|| VizError::MissingElement(id.to_string()))?;
    Ok(el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|_| VizError::NotACanvas(id.to_string()))?)
}

#[inline]
pub fn device_pixel_ratio() -> f64 {
    web::window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0)
}

/// Size the backing store to `logical * dpr` and keep the CSS size at
/// `logical` so drawing stays crisp on dense displays.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement, logical: f64) -> BackingSize {
    let backing = BackingSize::new(logical, device_pixel_ratio());
    canvas.set_width(backing.width_px);
    canvas.set_height(backing.height_px);
    let style = canvas.style();
    let css = format!("{}px", backing.logical);
    _ = style.set_property("width", &css);
    _ = style.set_property("height", &css);
    backing
}

/// Create a child `<span>` under `parent`.
pub fn append_span(document: &web::Document, parent: &web::HtmlElement) -> Option<web::HtmlElement> {
    let el = document.create_element("span").ok()?;
    let span = el.dyn_into::<web::HtmlElement>().ok()?;
    parent.append_child(&span).ok()?;
    Some(span)
}
