//! The page-wide frame clock driving every sphere instance.

use std::cell::RefCell;
use std::rc::Rc;

use sky_core::{FrameScheduler, FALLBACK_FPS};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

thread_local! {
    static SHARED: RefCell<Option<FrameScheduler>> = const { RefCell::new(None) };
}

/// The one scheduler for this page, created on first use with a waker that
/// schedules a single tick per pending frame.
pub fn shared_scheduler() -> FrameScheduler {
    SHARED.with(|cell| {
        if let Some(scheduler) = cell.borrow().as_ref() {
            return scheduler.clone();
        }
        let scheduler = FrameScheduler::new();
        install_waker(&scheduler);
        *cell.borrow_mut() = Some(scheduler.clone());
        scheduler
    })
}

/// Wire the scheduler to `requestAnimationFrame`, falling back to a
/// fixed-rate timer where rAF is unavailable. The tick closure lives for
/// the page lifetime.
fn install_waker(scheduler: &FrameScheduler) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    {
        let scheduler = scheduler.clone();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            scheduler.tick();
        }) as Box<dyn FnMut()>));
    }
    scheduler.set_waker(move || {
        let Some(window) = web::window() else {
            return;
        };
        let tick = tick.borrow();
        let callback = tick
            .as_ref()
            .expect("tick closure installed above")
            .as_ref()
            .unchecked_ref();
        if window.request_animation_frame(callback).is_err() {
            let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
                callback,
                (1000 / FALLBACK_FPS) as i32,
            );
        }
    });
}
