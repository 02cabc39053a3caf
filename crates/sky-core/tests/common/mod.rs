// Shared test harness: a surface that records draw calls instead of
// rasterizing, plus sphere constructors for the common 500x500 setup.

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use sky_core::{Catalog, DrawSurface, FrameScheduler, SkySphere, SphereConfig};

#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    SetSize {
        width: u32,
        height: u32,
    },
    Clear {
        width: f64,
        height: f64,
    },
    FillCircle {
        x: f64,
        y: f64,
        radius: f64,
        color: String,
    },
    StrokeCircle {
        x: f64,
        y: f64,
        radius: f64,
        color: String,
        line_width: f64,
    },
    Line {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        color: String,
    },
    Text {
        text: String,
        x: f64,
        y: f64,
    },
}

/// Appends every draw call to a shared log. Two surfaces may share one log
/// to observe interleaving across sphere instances.
pub struct RecordingSurface {
    pub ops: Rc<RefCell<Vec<DrawOp>>>,
}

impl RecordingSurface {
    pub fn new() -> (Self, Rc<RefCell<Vec<DrawOp>>>) {
        let ops = Rc::new(RefCell::new(Vec::new()));
        (Self { ops: Rc::clone(&ops) }, ops)
    }

    pub fn sharing(ops: &Rc<RefCell<Vec<DrawOp>>>) -> Self {
        Self { ops: Rc::clone(ops) }
    }
}

impl DrawSurface for RecordingSurface {
    fn set_size(&mut self, width: u32, height: u32) {
        self.ops.borrow_mut().push(DrawOp::SetSize { width, height });
    }

    fn clear(&mut self, width: f64, height: f64) {
        self.ops.borrow_mut().push(DrawOp::Clear { width, height });
    }

    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: &str) {
        self.ops.borrow_mut().push(DrawOp::FillCircle {
            x,
            y,
            radius,
            color: color.to_owned(),
        });
    }

    fn stroke_circle(&mut self, x: f64, y: f64, radius: f64, color: &str, line_width: f64) {
        self.ops.borrow_mut().push(DrawOp::StrokeCircle {
            x,
            y,
            radius,
            color: color.to_owned(),
            line_width,
        });
    }

    fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, color: &str) {
        self.ops.borrow_mut().push(DrawOp::Line {
            x1,
            y1,
            x2,
            y2,
            color: color.to_owned(),
        });
    }

    fn text(
        &mut self,
        text: &str,
        x: f64,
        y: f64,
        _font: &str,
        _fill: &str,
        _outline: &str,
        _outline_width: f64,
    ) {
        self.ops.borrow_mut().push(DrawOp::Text {
            text: text.to_owned(),
            x,
            y,
        });
    }
}

/// 500x500 container with a 250px sphere: the view center sits at
/// (250, 250) and all fixtures below assume this geometry.
pub fn base_config() -> SphereConfig {
    SphereConfig {
        width: 500.0,
        height: Some(500.0),
        initial_radius: Some(250.0),
        ..SphereConfig::default()
    }
}

pub fn build_sphere(
    config: SphereConfig,
    catalog: &Catalog,
) -> (
    Rc<RefCell<SkySphere>>,
    Rc<RefCell<Vec<DrawOp>>>,
    FrameScheduler,
) {
    let (surface, ops) = RecordingSurface::new();
    let scheduler = FrameScheduler::new();
    let sphere = SkySphere::new(Box::new(surface), config, catalog, &scheduler)
        .expect("sphere construction");
    (sphere, ops, scheduler)
}

/// The common case: 500x500, radius 250, no catalog entries.
pub fn empty_sphere() -> (
    Rc<RefCell<SkySphere>>,
    Rc<RefCell<Vec<DrawOp>>>,
    FrameScheduler,
) {
    build_sphere(base_config(), &Catalog::empty())
}

pub fn assert_close(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {expected} within {tolerance}, got {actual}"
    );
}
