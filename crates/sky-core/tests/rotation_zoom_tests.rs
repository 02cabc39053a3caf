// Rotation and zoom engine fixtures. All distances are exact up to
// floating-point error on the 500x500 / radius-250 view.

mod common;

use std::f64::consts::FRAC_PI_2;

use common::{assert_close, empty_sphere, DrawOp};
use sky_core::{ObjectData, SkyError, SkyPointRef};

fn pole_object(sphere: &std::rc::Rc<std::cell::RefCell<sky_core::SkySphere>>) -> SkyPointRef {
    sphere
        .borrow_mut()
        .add_custom_object(0.0, -90.0, ObjectData::default())
        .expect("valid position")
}

fn equator_object(sphere: &std::rc::Rc<std::cell::RefCell<sky_core::SkySphere>>) -> SkyPointRef {
    // ra 0h, dec 0: projects to (500, 250) with near-zero depth.
    sphere
        .borrow_mut()
        .add_custom_object(0.0, 0.0, ObjectData::default())
        .expect("valid position")
}

#[test]
fn quarter_turn_about_the_vertical_axis_moves_the_pole_to_the_edge() {
    let (sphere, _ops, _scheduler) = empty_sphere();
    let point = pole_object(&sphere);
    sphere.borrow_mut().rotate_xy(FRAC_PI_2, 0.0);
    let p = point.borrow();
    assert_close(p.x, 500.0, 1e-9);
    assert_close(p.y, 250.0, 1e-9);
    assert_close(p.z, 0.0, 1e-9);
}

#[test]
fn quarter_turn_about_the_horizontal_axis_moves_the_pole_down() {
    let (sphere, _ops, _scheduler) = empty_sphere();
    let point = pole_object(&sphere);
    sphere.borrow_mut().rotate_xy(0.0, FRAC_PI_2);
    let p = point.borrow();
    assert_close(p.x, 250.0, 1e-9);
    assert_close(p.y, 500.0, 1e-9);
    assert_close(p.z, 0.0, 1e-9);
}

#[test]
fn unit_drag_rotation_matches_the_reference_values() {
    let (sphere, _ops, _scheduler) = empty_sphere();
    let point = pole_object(&sphere);
    sphere.borrow_mut().rotate_xy(1.0, 1.0);
    let p = point.borrow();
    assert_close(p.x, 460.3678, 1e-3);
    assert_close(p.y, 363.6631, 1e-3);
    assert_close(p.z, 72.9852, 1e-3);
}

#[test]
fn sequential_mixed_axis_rotations_follow_the_reference_path() {
    let (sphere, _ops, _scheduler) = empty_sphere();
    let point = pole_object(&sphere);

    sphere.borrow_mut().rotate_xy(FRAC_PI_2, 0.0);
    {
        let p = point.borrow();
        assert_close(p.x, 500.0, 1e-9);
        assert_close(p.y, 250.0, 1e-9);
    }

    // Mixed-axis rotations do not commute; this continues from the state
    // above rather than from the initial position.
    sphere.borrow_mut().rotate_xy(-FRAC_PI_2, FRAC_PI_2);
    let p = point.borrow();
    assert_close(p.x, 250.0, 1e-9);
    assert_close(p.y, 500.0, 1e-9);
    assert_close(p.z, 0.0, 1e-9);
}

#[test]
fn rotation_preserves_distance_from_the_view_center() {
    let (sphere, _ops, _scheduler) = empty_sphere();
    let points = [
        pole_object(&sphere),
        equator_object(&sphere),
        sphere
            .borrow_mut()
            .add_custom_object(4.0, -45.0, ObjectData::default())
            .expect("valid position"),
    ];
    let norm = |p: &SkyPointRef| {
        let p = p.borrow();
        (p.x - 250.0).powi(2) + (p.y - 250.0).powi(2) + p.z.powi(2)
    };
    let before: Vec<f64> = points.iter().map(norm).collect();
    sphere.borrow_mut().rotate_xy(0.73, -1.31);
    sphere.borrow_mut().rotate_xy(-2.2, 0.4);
    for (point, expected) in points.iter().zip(before) {
        assert_close(norm(point), expected, 1e-6);
    }
}

#[test]
fn single_axis_rotations_invert_cleanly() {
    let (sphere, _ops, _scheduler) = empty_sphere();
    let point = sphere
        .borrow_mut()
        .add_custom_object(4.0, -45.0, ObjectData::default())
        .expect("valid position");
    let start = point.borrow().clone();

    sphere.borrow_mut().rotate_xy(0.9, 0.0);
    sphere.borrow_mut().rotate_xy(-0.9, 0.0);
    sphere.borrow_mut().rotate_xy(0.0, -0.4);
    sphere.borrow_mut().rotate_xy(0.0, 0.4);

    let p = point.borrow();
    assert_close(p.x, start.x, 1e-9);
    assert_close(p.y, start.y, 1e-9);
    assert_close(p.z, start.z, 1e-9);
}

#[test]
fn zoom_scales_radius_and_every_point_about_the_center() {
    let (sphere, _ops, _scheduler) = empty_sphere();
    let point = equator_object(&sphere);
    sphere.borrow_mut().zoom(2.0).expect("positive factor");

    let sphere = sphere.borrow();
    assert_eq!(sphere.radius(), 500.0);
    assert_eq!(sphere.zoom_factor(), 2.0);
    let p = point.borrow();
    assert_close(p.x, 750.0, 1e-9);
    assert_close(p.y, 250.0, 1e-9);
}

#[test]
fn successive_zooms_compose_multiplicatively() {
    let (sphere, _ops, _scheduler) = empty_sphere();
    let mut sphere = sphere.borrow_mut();
    sphere.zoom(0.5).expect("positive factor");
    sphere.zoom(4.0).expect("positive factor");
    assert_close(sphere.radius(), 500.0, 1e-9);
}

#[test]
fn absolute_zoom_is_relative_to_the_initial_radius() {
    let (sphere, _ops, _scheduler) = empty_sphere();
    let mut sphere = sphere.borrow_mut();
    sphere.zoom(3.0).expect("positive factor");
    sphere.absolute_zoom(1.0).expect("positive factor");
    assert_close(sphere.radius(), 250.0, 1e-9);
    sphere.absolute_zoom(2.0).expect("positive factor");
    assert_close(sphere.radius(), 500.0, 1e-9);
}

#[test]
fn set_radius_rescales_directly() {
    let (sphere, _ops, _scheduler) = empty_sphere();
    let point = equator_object(&sphere);
    sphere.borrow_mut().set_radius(100.0).expect("positive radius");
    assert_eq!(sphere.borrow().radius(), 100.0);
    assert_close(point.borrow().x, 350.0, 1e-9);
}

#[test]
fn degenerate_zoom_factors_are_rejected_without_side_effects() {
    let (sphere, _ops, _scheduler) = empty_sphere();
    let mut sphere = sphere.borrow_mut();
    for factor in [0.0, -1.0, f64::NAN, f64::INFINITY] {
        assert!(matches!(
            sphere.zoom(factor),
            Err(SkyError::InvalidArgument(_))
        ));
        assert!(matches!(
            sphere.absolute_zoom(factor),
            Err(SkyError::InvalidArgument(_))
        ));
        assert!(matches!(
            sphere.set_radius(factor),
            Err(SkyError::InvalidArgument(_))
        ));
    }
    assert_eq!(sphere.radius(), 250.0);
}

#[test]
fn container_resize_recenters_points_without_rescaling() {
    let (sphere, ops, _scheduler) = empty_sphere();
    let point = equator_object(&sphere);
    ops.borrow_mut().clear();

    sphere
        .borrow_mut()
        .set_container_size(1000.0, 1000.0, false, None)
        .expect("positive dimensions");

    let sphere = sphere.borrow();
    assert_eq!(sphere.container_size(), (1000.0, 1000.0));
    assert_eq!(sphere.radius(), 250.0);
    let p = point.borrow();
    assert_close(p.x, 750.0, 1e-9);
    assert_close(p.y, 500.0, 1e-9);
    assert!(ops
        .borrow()
        .contains(&DrawOp::SetSize { width: 1000, height: 1000 }));
}

#[test]
fn degenerate_resize_padding_is_rejected_before_any_mutation() {
    let (sphere, _ops, _scheduler) = empty_sphere();
    let mut sphere = sphere.borrow_mut();
    for padding in [0.0, -0.5, f64::NAN, f64::INFINITY] {
        assert!(matches!(
            sphere.set_container_size(1000.0, 1000.0, true, Some(padding)),
            Err(SkyError::InvalidArgument(_))
        ));
    }
    // The radius stays strictly positive and the container untouched, so
    // later drag deltas (pixels / radius) remain finite.
    assert_eq!(sphere.radius(), 250.0);
    assert_eq!(sphere.container_size(), (500.0, 500.0));
}

#[test]
fn container_resize_with_fit_rescales_to_the_padded_container() {
    let (sphere, _ops, _scheduler) = empty_sphere();
    sphere
        .borrow_mut()
        .set_container_size(1000.0, 1000.0, true, None)
        .expect("positive dimensions");
    // min(1000, 1000) * 0.9 / 2
    assert_close(sphere.borrow().radius(), 450.0, 1e-9);

    sphere
        .borrow_mut()
        .set_container_size(1000.0, 1000.0, true, Some(0.5))
        .expect("positive dimensions");
    assert_close(sphere.borrow().radius(), 250.0, 1e-9);
}
