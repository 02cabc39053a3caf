//! Projected sky points and the spherical-to-screen projection.

use std::any::Any;
use std::cell::RefCell;
use std::f64::consts::TAU;
use std::fmt;
use std::rc::Rc;

/// A point on the sphere, projected into screen space.
///
/// `x`/`y` are screen coordinates in pixels; `z` is signed depth along the
/// viewing axis. Non-negative depth faces the viewer and is the sole
/// visibility test (`z > 0` strictly for line segments and hover). Points
/// are mutated in place by every transform, so a held [`SkyPointRef`] keeps
/// observing live coordinates for the lifetime of its sphere.
#[derive(Clone, Debug)]
pub struct SkyPoint {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub data: Option<ObjectData>,
}

/// Shared handle to a custom object point.
pub type SkyPointRef = Rc<RefCell<SkyPoint>>;

/// One constellation segment: an ordered pair of catalog stars. Membership
/// is fixed at construction; the two endpoints transform independently.
#[derive(Clone, Debug)]
pub struct StarLine {
    pub a: SkyPoint,
    pub b: SkyPoint,
}

/// Opaque payload attached to a custom object point and echoed back to the
/// click and hover-text callbacks. `color` and `radius` override the drawn
/// marker; `user` carries arbitrary host data.
#[derive(Clone, Default)]
pub struct ObjectData {
    pub color: Option<String>,
    pub radius: Option<f64>,
    pub user: Option<Rc<dyn Any>>,
}

impl fmt::Debug for ObjectData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObjectData")
            .field("color", &self.color)
            .field("radius", &self.radius)
            .field("user", &self.user.as_ref().map(|_| "…"))
            .finish()
    }
}

/// Orthographic projection of a point on a sphere of `radius` onto the
/// viewing plane centered at (`center_x`, `center_y`).
///
/// `azimuth_rad` is the angle around the polar axis; `polar_rad` is measured
/// from the near pole, so `polar_rad == 0` projects to the view center with
/// full positive depth. Total over all real inputs; no rounding here.
pub fn project(
    azimuth_rad: f64,
    polar_rad: f64,
    radius: f64,
    center_x: f64,
    center_y: f64,
) -> SkyPoint {
    SkyPoint {
        x: radius * polar_rad.sin() * azimuth_rad.cos() + center_x,
        y: -radius * polar_rad.sin() * azimuth_rad.sin() + center_y,
        z: radius * polar_rad.cos(),
        data: None,
    }
}

/// Convert a right ascension from hours (0..24) to radians (0..2π).
#[inline]
pub fn ra_to_rad(hours: f64) -> f64 {
    hours * TAU / 24.0
}

/// Convert a declination from degrees (-90..90) to the internal polar angle
/// in radians (0..π), measured from the near pole.
#[inline]
pub fn dec_to_rad(deg: f64) -> f64 {
    (deg + 90.0) * TAU / 360.0
}
