//! Shared frame clock multiplexed over every live sphere instance.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::sphere::SkySphere;

/// Process-wide animation scheduler.
///
/// One scheduler serves every sphere on a page: instances register at
/// construction (weak handles, registration order preserved) and flag
/// themselves dirty through [`request_frame`](Self::request_frame). Requests
/// are coalesced, so at most one frame is pending regardless of how many
/// instances ask, and the injected waker is invoked exactly once per
/// pending frame to schedule a [`tick`](Self::tick) on the host's clock
/// (vsync callback, or a fixed-rate timer fallback).
///
/// A tick advances each live instance's scripted animation and redraws the
/// ones currently moving, in registration order. Dropped spheres are pruned
/// lazily. Single-threaded by design; handles are cheap `Rc` clones.
#[derive(Clone, Default)]
pub struct FrameScheduler {
    inner: Rc<RefCell<SchedulerInner>>,
}

#[derive(Default)]
struct SchedulerInner {
    instances: Vec<Weak<RefCell<SkySphere>>>,
    frame_pending: bool,
    waker: Option<Rc<dyn Fn()>>,
}

impl FrameScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install the host callback that schedules one future tick. Called at
    /// most once per pending frame.
    pub fn set_waker(&self, waker: impl Fn() + 'static) {
        self.inner.borrow_mut().waker = Some(Rc::new(waker));
    }

    pub fn register(&self, sphere: &Rc<RefCell<SkySphere>>) {
        self.inner.borrow_mut().instances.push(Rc::downgrade(sphere));
    }

    /// Flag that a redraw is wanted. Coalesced: while a frame is already
    /// pending this is a no-op.
    pub fn request_frame(&self) {
        let waker = {
            let mut inner = self.inner.borrow_mut();
            if inner.frame_pending {
                return;
            }
            inner.frame_pending = true;
            inner.waker.clone()
        };
        if let Some(wake) = waker {
            wake();
        }
    }

    pub fn frame_pending(&self) -> bool {
        self.inner.borrow().frame_pending
    }

    /// Run one frame: clear the pending flag, then step and redraw every
    /// registered instance that is moving. Instances requesting further
    /// frames during the tick re-arm the waker for the next one.
    pub fn tick(&self) {
        let instances = {
            let mut inner = self.inner.borrow_mut();
            inner.frame_pending = false;
            inner.instances.retain(|weak| weak.strong_count() > 0);
            inner.instances.clone()
        };
        for weak in instances {
            if let Some(sphere) = weak.upgrade() {
                sphere.borrow_mut().on_tick();
            }
        }
    }

    /// Number of live registered instances.
    pub fn instance_count(&self) -> usize {
        self.inner
            .borrow()
            .instances
            .iter()
            .filter(|weak| weak.strong_count() > 0)
            .count()
    }
}
