#![cfg(target_arch = "wasm32")]
mod canvas;
mod clock;
mod dom;
mod events;
mod options;

use std::cell::RefCell;
use std::rc::Rc;

use sky_core::{Catalog, SkyError, SkyPointRef, SkySphere};
use wasm_bindgen::prelude::*;

use crate::canvas::CanvasSurface;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("sky-web starting");
    Ok(())
}

fn js_err(e: SkyError) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// A projected point on the sphere. Coordinates track rotation and zoom, so
/// reading them always reflects the current view.
#[wasm_bindgen]
pub struct SkyPointHandle {
    point: SkyPointRef,
}

#[wasm_bindgen]
impl SkyPointHandle {
    #[wasm_bindgen(getter)]
    pub fn x(&self) -> f64 {
        self.point.borrow().x
    }

    #[wasm_bindgen(getter)]
    pub fn y(&self) -> f64 {
        self.point.borrow().y
    }

    #[wasm_bindgen(getter)]
    pub fn z(&self) -> f64 {
        self.point.borrow().z
    }
}

/// An interactive star map bound to a canvas element. Construction draws the
/// built-in catalog and wires pointer and wheel handlers; instances share one
/// requestAnimationFrame loop.
#[wasm_bindgen]
pub struct SkyMap {
    sphere: Rc<RefCell<SkySphere>>,
}

#[wasm_bindgen]
impl SkyMap {
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_id: &str, options: JsValue) -> Result<SkyMap, JsValue> {
        let canvas = dom::canvas_by_id(canvas_id).map_err(js_err)?;
        let surface = CanvasSurface::new(canvas.clone()).map_err(js_err)?;
        let config = options::parse_config(&options);
        let scheduler = clock::shared_scheduler();
        let sphere = SkySphere::new(
            Box::new(surface),
            config,
            &Catalog::builtin(),
            &scheduler,
        )
        .map_err(js_err)?;
        events::wire_pointer_handlers(&canvas, sphere.clone());
        log::info!("[sky] map bound to #{canvas_id}");
        Ok(SkyMap { sphere })
    }

    #[wasm_bindgen(js_name = setRadius)]
    pub fn set_radius(&self, radius: f64) -> Result<(), JsValue> {
        self.sphere.borrow_mut().set_radius(radius).map_err(js_err)
    }

    /// Add a marker at the given right ascension (hours) and declination
    /// (degrees). The `data` object may carry `color`, `radius`, and anything
    /// the click/hover callbacks want back.
    #[wasm_bindgen(js_name = addCustomObject)]
    pub fn add_custom_object(
        &self,
        ra_hours: f64,
        dec_deg: f64,
        data: JsValue,
    ) -> Result<SkyPointHandle, JsValue> {
        let mut sphere = self.sphere.borrow_mut();
        let point = sphere
            .add_custom_object(ra_hours, dec_deg, options::parse_object_data(data))
            .map_err(js_err)?;
        sphere.redraw();
        Ok(SkyPointHandle { point })
    }

    #[wasm_bindgen(js_name = rotateXY)]
    pub fn rotate_xy(&self, dx: f64, dy: f64) {
        let mut sphere = self.sphere.borrow_mut();
        sphere.rotate_xy(dx, dy);
        sphere.redraw();
    }

    #[wasm_bindgen(js_name = centerSkyPoint)]
    pub fn center_sky_point(&self, point: &SkyPointHandle) {
        self.sphere.borrow_mut().center_sky_point(&point.point);
    }

    #[wasm_bindgen(js_name = stopMoving)]
    pub fn stop_moving(&self) {
        self.sphere.borrow_mut().stop_moving();
    }

    #[wasm_bindgen(js_name = rotateXYAnimation)]
    pub fn rotate_xy_animation(&self, dx: f64, dy: f64) {
        self.sphere.borrow_mut().rotate_xy_animation(dx, dy);
    }

    pub fn zoom(&self, factor: f64) -> Result<(), JsValue> {
        self.sphere.borrow_mut().zoom(factor).map_err(js_err)
    }

    #[wasm_bindgen(js_name = absoluteZoom)]
    pub fn absolute_zoom(&self, factor: f64) -> Result<(), JsValue> {
        self.sphere
            .borrow_mut()
            .absolute_zoom(factor)
            .map_err(js_err)
    }

    #[wasm_bindgen(js_name = setContainerSize)]
    pub fn set_container_size(
        &self,
        width: f64,
        height: f64,
        resize: bool,
        padding_pct: Option<f64>,
    ) -> Result<(), JsValue> {
        self.sphere
            .borrow_mut()
            .set_container_size(width, height, resize, padding_pct)
            .map_err(js_err)
    }
}
