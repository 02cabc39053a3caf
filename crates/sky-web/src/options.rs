//! Translation between JS option/data objects and the core's types.

use std::any::Any;
use std::rc::Rc;

use sky_core::{ObjectData, SphereConfig, HIT_AREA_MOUSE_PX, HIT_AREA_TOUCH_PX};
use wasm_bindgen::{JsCast, JsValue};

use crate::dom;

fn get(obj: &JsValue, key: &str) -> Option<JsValue> {
    js_sys::Reflect::get(obj, &JsValue::from_str(key))
        .ok()
        .filter(|v| !v.is_undefined() && !v.is_null())
}

fn get_f64(obj: &JsValue, key: &str) -> Option<f64> {
    get(obj, key).and_then(|v| v.as_f64())
}

fn get_string(obj: &JsValue, key: &str) -> Option<String> {
    get(obj, key).and_then(|v| v.as_string())
}

fn get_function(obj: &JsValue, key: &str) -> Option<js_sys::Function> {
    get(obj, key).and_then(|v| v.dyn_into::<js_sys::Function>().ok())
}

/// The `JsValue` the host attached to a custom object, recovered from the
/// opaque payload.
fn user_js(data: &ObjectData) -> JsValue {
    data.user
        .as_ref()
        .and_then(|user| <dyn Any>::downcast_ref::<JsValue>(user.as_ref()))
        .cloned()
        .unwrap_or(JsValue::UNDEFINED)
}

/// Build a `SphereConfig` from the JS options object. Unrecognized keys are
/// ignored; callbacks are wrapped so their failures are logged, never
/// propagated into the gesture path.
pub fn parse_config(options: &JsValue) -> SphereConfig {
    let mut config = SphereConfig {
        hit_area: if dom::touch_capable() {
            HIT_AREA_TOUCH_PX
        } else {
            HIT_AREA_MOUSE_PX
        },
        ..SphereConfig::default()
    };

    if let Some(width) = get_f64(options, "width") {
        config.width = width;
    }
    config.height = get_f64(options, "height");
    config.initial_radius = get_f64(options, "initialRadius");
    if let Some(color) = get_string(options, "backgroundColor") {
        config.background_color = color;
    }
    if let Some(font) = get_string(options, "font") {
        config.font = font;
    }
    if let Some(color) = get_string(options, "highlightColor") {
        config.highlight_color = color;
    }
    if let Some(size) = get_f64(options, "highlightSize") {
        config.highlight_size = size;
    }

    if let Some(on_click) = get_function(options, "onCustomClick") {
        config.on_custom_click = Some(Rc::new(move |data: &ObjectData| {
            if let Err(e) = on_click.call1(&JsValue::NULL, &user_js(data)) {
                log::error!("onCustomClick handler failed: {e:?}");
            }
        }));
    }
    if let Some(get_text) = get_function(options, "getHoverText") {
        config.get_hover_text = Some(Rc::new(move |data: &ObjectData| {
            match get_text.call1(&JsValue::NULL, &user_js(data)) {
                Ok(value) => value.as_string().unwrap_or_default(),
                Err(e) => {
                    log::error!("getHoverText handler failed: {e:?}");
                    String::new()
                }
            }
        }));
    }

    config
}

/// Build the core payload for a custom object: `color` and `radius` are
/// lifted for drawing, the whole JS object rides along for the callbacks.
pub fn parse_object_data(data: JsValue) -> ObjectData {
    ObjectData {
        color: get_string(&data, "color"),
        radius: get_f64(&data, "radius"),
        user: Some(Rc::new(data) as Rc<dyn Any>),
    }
}
