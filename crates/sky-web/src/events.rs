//! DOM event wiring: normalizes pointer and wheel events into the core's
//! gesture stream.

use std::cell::RefCell;
use std::rc::Rc;

use sky_core::SkySphere;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::dom;

/// Attach the gesture listeners for one sphere. Press starts on the
/// canvas; move and release are window-level so a drag survives leaving
/// the canvas bounds. Pointer events cover mouse and touch alike.
pub fn wire_pointer_handlers(canvas: &web::HtmlCanvasElement, sphere: Rc<RefCell<SkySphere>>) {
    // pointerdown
    {
        let sphere = sphere.clone();
        let canvas_down = canvas.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            let pos = dom::pointer_canvas_px(&ev, &canvas_down);
            sphere.borrow_mut().pointer_down(pos.x, pos.y);
            ev.prevent_default();
        }) as Box<dyn FnMut(_)>);
        let _ = canvas
            .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    // pointermove (drag and hover share one normalized stream)
    {
        let sphere = sphere.clone();
        let canvas_move = canvas.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            let pos = dom::pointer_canvas_px(&ev, &canvas_move);
            let hover = sphere.borrow_mut().pointer_move(pos.x, pos.y);
            // Dispatch with the sphere borrow released; the callback may
            // re-enter the map.
            if let Some(hover) = hover {
                let label = hover.dispatch();
                sphere.borrow_mut().set_hover_label(label);
            }
        }) as Box<dyn FnMut(_)>);
        if let Some(window) = web::window() {
            let _ = window
                .add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
        }
        closure.forget();
    }

    // pointerup
    {
        let sphere = sphere.clone();
        let canvas_up = canvas.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            let pos = dom::pointer_canvas_px(&ev, &canvas_up);
            let click = sphere.borrow_mut().pointer_up(pos.x, pos.y);
            if let Some(click) = click {
                click.dispatch();
            }
        }) as Box<dyn FnMut(_)>);
        if let Some(window) = web::window() {
            let _ = window
                .add_event_listener_with_callback("pointerup", closure.as_ref().unchecked_ref());
        }
        closure.forget();
    }

    // wheel zoom, only inside the projected disc
    {
        let sphere = sphere.clone();
        let canvas_wheel = canvas.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::WheelEvent| {
            let pos = dom::pointer_canvas_px(&ev, &canvas_wheel);
            let handled = sphere.borrow_mut().wheel(pos.x, pos.y, ev.delta_y());
            if handled {
                ev.prevent_default();
            }
        }) as Box<dyn FnMut(_)>);
        let _ = canvas.add_event_listener_with_callback("wheel", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}
