use glam::DVec2;
use sky_core::SkyError;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Look up the target canvas. A missing element or a non-canvas element is
/// a precondition failure, not a panic.
pub fn canvas_by_id(canvas_id: &str) -> Result<web::HtmlCanvasElement, SkyError> {
    let document = window_document()
        .ok_or_else(|| SkyError::PreconditionViolated("no window/document".into()))?;
    let element = document.get_element_by_id(canvas_id).ok_or_else(|| {
        SkyError::PreconditionViolated(format!("missing canvas element #{canvas_id}"))
    })?;
    element
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|_| SkyError::PreconditionViolated(format!("#{canvas_id} is not a canvas")))
}

/// Canvas-local pixel coordinates for a pointer event. The canvas backing
/// size is kept equal to its layout size, so no scaling is applied.
#[inline]
pub fn pointer_canvas_px(ev: &web::MouseEvent, canvas: &web::HtmlCanvasElement) -> DVec2 {
    let rect = canvas.get_bounding_client_rect();
    DVec2::new(
        ev.client_x() as f64 - rect.left(),
        ev.client_y() as f64 - rect.top(),
    )
}

/// Whether the platform reports touch capability; selects the wider
/// hit-test window.
#[inline]
pub fn touch_capable() -> bool {
    web::window()
        .map(|w| w.navigator().max_touch_points() > 0)
        .unwrap_or(false)
}
