//! The sphere aggregate: point store, rotation/zoom engines, hit testing,
//! gestures, scripted animations and draw-call generation.

use std::cell::RefCell;
use std::rc::Rc;

use glam::DVec2;

use crate::animation::{CenterPhase, ScriptedAnimation};
use crate::catalog::Catalog;
use crate::constants::*;
use crate::error::SkyError;
use crate::gesture::GestureState;
use crate::point::{project, ra_to_rad, dec_to_rad, ObjectData, SkyPoint, SkyPointRef, StarLine};
use crate::render::DrawSurface;
use crate::scheduler::FrameScheduler;

/// Construction options for a sphere. Unset `height` defaults to `width`;
/// unset `initial_radius` defaults to 0.45 × min(width, height).
#[derive(Clone)]
pub struct SphereConfig {
    pub width: f64,
    pub height: Option<f64>,
    pub initial_radius: Option<f64>,
    pub background_color: String,
    pub font: String,
    pub highlight_color: String,
    pub highlight_size: f64,
    /// Half-width of the square hit-test window, in pixels. Hosts pick the
    /// touch or mouse constant depending on platform capability.
    pub hit_area: f64,
    /// Invoked with an object's data when a click lands on it.
    pub on_custom_click: Option<Rc<dyn Fn(&ObjectData)>>,
    /// Produces the label drawn beside the hovered object.
    pub get_hover_text: Option<Rc<dyn Fn(&ObjectData) -> String>>,
}

impl Default for SphereConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: None,
            initial_radius: None,
            background_color: DEFAULT_BACKGROUND.to_owned(),
            font: DEFAULT_FONT.to_owned(),
            highlight_color: DEFAULT_HIGHLIGHT_COLOR.to_owned(),
            highlight_size: DEFAULT_HIGHLIGHT_SIZE_PX,
            hit_area: HIT_AREA_MOUSE_PX,
            on_custom_click: None,
            get_hover_text: None,
        }
    }
}

/// A gesture resolved against a custom object: the configured callback
/// paired with the object's data.
///
/// Returned by [`SkySphere::pointer_up`] and [`SkySphere::pointer_move`]
/// instead of being invoked inline. Hosts keep the sphere behind a
/// `RefCell` and call the pointer methods under `borrow_mut()`; a callback
/// that re-enters the sphere (centering a clicked point, say) would
/// double-borrow if it ran inside the gesture call. Dispatch only after
/// the sphere borrow has been released.
pub struct CallbackHit<R> {
    callback: Rc<dyn Fn(&ObjectData) -> R>,
    data: ObjectData,
}

impl<R> CallbackHit<R> {
    pub fn dispatch(self) -> R {
        (self.callback)(&self.data)
    }
}

/// A live sky map instance.
///
/// Owns the three point collections (star dots, constellation segment
/// endpoints, custom objects), mutates them in place through the broadcast
/// transform, and turns its state into draw calls on the injected
/// [`DrawSurface`]. Redraws are driven by the shared [`FrameScheduler`]
/// handed in at construction.
pub struct SkySphere {
    config: SphereConfig,
    width: f64,
    height: f64,
    radius: f64,
    initial_radius: f64,
    zoom_factor: f64,
    star_points: Vec<SkyPoint>,
    star_lines: Vec<StarLine>,
    object_points: Vec<SkyPointRef>,
    is_moving: bool,
    over_object: Option<usize>,
    hover_label: Option<String>,
    gesture: GestureState,
    animation: Option<ScriptedAnimation>,
    surface: Box<dyn DrawSurface>,
    scheduler: FrameScheduler,
}

impl SkySphere {
    /// Build a sphere over `surface`, populate its point collections from
    /// `catalog`, draw it once and register it with `scheduler`.
    pub fn new(
        mut surface: Box<dyn DrawSurface>,
        config: SphereConfig,
        catalog: &Catalog,
        scheduler: &FrameScheduler,
    ) -> Result<Rc<RefCell<Self>>, SkyError> {
        let width = positive(config.width, "width")?;
        let height = positive(config.height.unwrap_or(width), "height")?;
        let initial_radius = positive(
            config
                .initial_radius
                .unwrap_or_else(|| width.min(height) * DEFAULT_RADIUS_RATIO),
            "initial radius",
        )?;

        let cx = width / 2.0;
        let cy = height / 2.0;
        let star_points: Vec<SkyPoint> = catalog
            .stars()
            .iter()
            .map(|&[ra, dec]| project(ra, dec, initial_radius, cx, cy))
            .collect();
        let star_lines: Vec<StarLine> = catalog
            .lines()
            .iter()
            .map(|&[a, b]| {
                let [ra_a, dec_a] = catalog.stars()[a];
                let [ra_b, dec_b] = catalog.stars()[b];
                StarLine {
                    a: project(ra_a, dec_a, initial_radius, cx, cy),
                    b: project(ra_b, dec_b, initial_radius, cx, cy),
                }
            })
            .collect();

        surface.set_size(width as u32, height as u32);
        let mut sphere = Self {
            config,
            width,
            height,
            radius: initial_radius,
            initial_radius,
            zoom_factor: 1.0,
            star_points,
            star_lines,
            object_points: Vec::new(),
            is_moving: false,
            over_object: None,
            hover_label: None,
            gesture: GestureState::default(),
            animation: None,
            surface,
            scheduler: scheduler.clone(),
        };
        sphere.draw_sky();

        let sphere = Rc::new(RefCell::new(sphere));
        scheduler.register(&sphere);
        Ok(sphere)
    }

    // ---------------- introspection ----------------

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn initial_radius(&self) -> f64 {
        self.initial_radius
    }

    /// The last-applied zoom multiplier.
    pub fn zoom_factor(&self) -> f64 {
        self.zoom_factor
    }

    pub fn is_moving(&self) -> bool {
        self.is_moving
    }

    /// Index of the custom object currently under the pointer, if any.
    pub fn over_object(&self) -> Option<usize> {
        self.over_object
    }

    pub fn container_size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    pub fn object_count(&self) -> usize {
        self.object_points.len()
    }

    pub fn object_point(&self, index: usize) -> Option<SkyPointRef> {
        self.object_points.get(index).cloned()
    }

    fn center(&self) -> (f64, f64) {
        (self.width / 2.0, self.height / 2.0)
    }

    fn request_frame(&self) {
        self.scheduler.request_frame();
    }

    // ---------------- point store ----------------

    /// Apply `transform` to every point the sphere owns: all segment
    /// endpoints, all star dots, all custom objects.
    pub fn apply_transform(&mut self, mut transform: impl FnMut(&mut SkyPoint)) {
        for line in &mut self.star_lines {
            transform(&mut line.a);
            transform(&mut line.b);
        }
        for star in &mut self.star_points {
            transform(star);
        }
        for object in &self.object_points {
            transform(&mut object.borrow_mut());
        }
    }

    /// Add a custom object at the given right ascension (hours) and
    /// declination (degrees) and return a live handle to its point.
    pub fn add_custom_object(
        &mut self,
        ra_hours: f64,
        dec_deg: f64,
        data: ObjectData,
    ) -> Result<SkyPointRef, SkyError> {
        if !ra_hours.is_finite() || !dec_deg.is_finite() {
            return Err(SkyError::InvalidArgument(format!(
                "non-finite object position ({ra_hours}, {dec_deg})"
            )));
        }
        let (cx, cy) = self.center();
        let mut point = project(ra_to_rad(ra_hours), dec_to_rad(dec_deg), self.radius, cx, cy);
        point.data = Some(data);
        let point = Rc::new(RefCell::new(point));
        self.object_points.push(Rc::clone(&point));
        Ok(point)
    }

    // ---------------- rotation engine ----------------

    /// Apply one incremental rotation to every point: `dx` about the
    /// vertical screen axis, `dy` about the horizontal one. Preserves each
    /// point's distance from the view center up to floating-point error.
    pub fn rotate_xy(&mut self, dx: f64, dy: f64) {
        let (sin_dx, cos_dx) = dx.sin_cos();
        let (sin_dy, cos_dy) = dy.sin_cos();
        let (cx, cy) = self.center();
        self.apply_transform(|p| {
            let x = p.x - cx;
            let y = -p.y + cy;
            let z = p.z;
            let k = z * cos_dx - x * sin_dx;
            p.x = x * cos_dx + z * sin_dx + cx;
            p.y = sin_dy * k - y * cos_dy + cy;
            p.z = y * sin_dy + cos_dy * k;
        });
    }

    // ---------------- zoom engine ----------------

    /// Scale the sphere by `factor` about the view center. Non-positive or
    /// non-finite factors are rejected.
    pub fn zoom(&mut self, factor: f64) -> Result<(), SkyError> {
        self.zoom_by(positive(factor, "zoom factor")?);
        Ok(())
    }

    /// Zoom expressed relative to the initial radius instead of the
    /// current one; `absolute_zoom(1.0)` restores the initial radius.
    pub fn absolute_zoom(&mut self, factor: f64) -> Result<(), SkyError> {
        let factor = positive(factor, "zoom factor")?;
        self.zoom_by(self.initial_radius * factor / self.radius);
        Ok(())
    }

    /// Set the sphere radius directly, scaling every point to match.
    pub fn set_radius(&mut self, radius: f64) -> Result<(), SkyError> {
        let radius = positive(radius, "radius")?;
        self.zoom_by(radius / self.radius);
        Ok(())
    }

    fn zoom_by(&mut self, factor: f64) {
        self.radius *= factor;
        self.zoom_factor = factor;
        let (cx, cy) = self.center();
        self.apply_transform(|p| {
            p.x = factor * (p.x - cx) + cx;
            p.y = factor * (p.y - cy) + cy;
            p.z = factor * p.z;
        });
        self.draw_sky();
    }

    /// Change the container size, keeping the sphere centered. With
    /// `resize` the sphere is also rescaled to fit the new container minus
    /// `padding_pct` (default 0.9) of slack. Non-positive or non-finite
    /// dimensions and padding are rejected before anything is mutated.
    pub fn set_container_size(
        &mut self,
        width: f64,
        height: f64,
        resize: bool,
        padding_pct: Option<f64>,
    ) -> Result<(), SkyError> {
        let width = positive(width, "width")?;
        let height = positive(height, "height")?;
        let padding = match padding_pct {
            Some(padding) => positive(padding, "resize padding")?,
            None => DEFAULT_RESIZE_PADDING,
        };
        let offset_x = (width - self.width) / 2.0;
        let offset_y = (height - self.height) / 2.0;
        self.width = width;
        self.height = height;
        self.surface.set_size(width as u32, height as u32);
        self.apply_transform(|p| {
            p.x += offset_x;
            p.y += offset_y;
        });
        if resize {
            self.zoom_by(width.min(height) * padding / (2.0 * self.radius));
        } else {
            self.draw_sky();
        }
        Ok(())
    }

    // ---------------- hit tester ----------------

    /// Topmost custom object within the hit window for click dispatch
    /// (`z >= 0`). First match in insertion order wins.
    pub fn hit_test_click(&self, x: f64, y: f64) -> Option<usize> {
        self.hit_test(x, y, false)
    }

    /// Topmost custom object within the hit window for hover highlighting
    /// (strictly `z > 0`).
    pub fn hit_test_hover(&self, x: f64, y: f64) -> Option<usize> {
        self.hit_test(x, y, true)
    }

    fn hit_test(&self, x: f64, y: f64, strict_depth: bool) -> Option<usize> {
        let area = self.config.hit_area;
        self.object_points.iter().position(|point| {
            let p = point.borrow();
            let facing = if strict_depth { p.z > 0.0 } else { p.z >= 0.0 };
            facing && (x - p.x).abs() <= area && (y - p.y).abs() <= area
        })
    }

    // ---------------- gesture controller ----------------

    /// Press-start: enter the drag state, preempting any scripted
    /// animation, and request a frame.
    pub fn pointer_down(&mut self, x: f64, y: f64) {
        self.stop_moving();
        log::debug!("[gesture] drag start at ({x:.0}, {y:.0})");
        self.gesture.begin(DVec2::new(x, y));
        self.over_object = None;
        self.hover_label = None;
        self.is_moving = true;
        self.request_frame();
    }

    /// Pointer movement. While dragging, rotates by the delta from the
    /// previous position scaled by 1/radius (constant angular velocity per
    /// pixel across zoom levels); otherwise updates the hover highlight.
    ///
    /// When the hover target changes to an object and a hover-text callback
    /// is configured, the redraw is deferred: the returned hit must be
    /// dispatched and its label fed back through
    /// [`set_hover_label`](Self::set_hover_label), from outside the sphere
    /// borrow.
    pub fn pointer_move(&mut self, x: f64, y: f64) -> Option<CallbackHit<String>> {
        if self.gesture.is_dragging() {
            let pos = DVec2::new(x, y);
            let delta = (pos - self.gesture.prev) / self.radius;
            self.rotate_xy(delta.x, delta.y);
            self.gesture.prev = pos;
            self.request_frame();
            return None;
        }
        let over = self.hit_test_hover(x, y);
        if over == self.over_object {
            return None;
        }
        self.over_object = over;
        self.hover_label = None;
        if let (Some(index), Some(callback)) = (over, self.config.get_hover_text.clone()) {
            if let Some(data) = self.object_points[index].borrow().data.clone() {
                return Some(CallbackHit { callback, data });
            }
        }
        self.draw_sky();
        None
    }

    /// Store the label produced by the hover-text callback and redraw the
    /// frame with it.
    pub fn set_hover_label(&mut self, label: String) {
        self.hover_label = Some(label);
        self.draw_sky();
    }

    /// Release: leave the drag state. A release at the exact press position
    /// is a click; when it lands on a visible custom object and a click
    /// callback is configured, the resolved hit is handed back to the host
    /// for dispatch outside the sphere borrow.
    #[must_use = "a resolved click must be dispatched by the caller"]
    pub fn pointer_up(&mut self, _x: f64, _y: f64) -> Option<CallbackHit<()>> {
        if !self.gesture.is_dragging() {
            return None;
        }
        let was_click = self.gesture.is_click();
        let start = self.gesture.start;
        self.gesture.end();
        self.is_moving = false;

        if !was_click {
            return None;
        }
        let callback = self.config.on_custom_click.clone()?;
        let index = self.hit_test_click(start.x, start.y)?;
        log::info!("[gesture] click on object {index}");
        let data = self.object_points[index].borrow().data.clone()?;
        Some(CallbackHit { callback, data })
    }

    /// Wheel/scroll gesture. Only acts when the cursor is inside the
    /// projected disc; returns whether the gesture was consumed.
    pub fn wheel(&mut self, x: f64, y: f64, delta: f64) -> bool {
        let (cx, cy) = self.center();
        if (x - cx).powi(2) + (y - cy).powi(2) > self.radius.powi(2) {
            return false;
        }
        let step = if delta > 0.0 { ZOOM_OUT_STEP } else { ZOOM_IN_STEP };
        self.zoom_by(step);
        true
    }

    // ---------------- scripted animations ----------------

    /// Animate `target` toward the view center: horizontal axis first,
    /// then vertical, each phase ending when the offset's sign flips.
    /// Cancels any scripted animation already running.
    pub fn center_sky_point(&mut self, target: &SkyPointRef) {
        self.stop_moving();
        let (cx, cy) = self.center();
        let (dx, dy) = {
            let p = target.borrow();
            (
                if p.x < cx { CENTER_STEP_RAD } else { -CENTER_STEP_RAD },
                if p.y > cy { CENTER_STEP_RAD } else { -CENTER_STEP_RAD },
            )
        };
        log::info!("[anim] centering sky point");
        self.animation = Some(ScriptedAnimation::Center {
            target: Rc::clone(target),
            phase: CenterPhase::Horizontal,
            dx,
            dy,
        });
        self.is_moving = true;
        self.request_frame();
    }

    /// Rotate by a fixed step every tick until stopped. Cancels any
    /// scripted animation already running.
    pub fn rotate_xy_animation(&mut self, dx: f64, dy: f64) {
        self.stop_moving();
        log::info!("[anim] continuous rotation dx={dx} dy={dy}");
        self.animation = Some(ScriptedAnimation::Rotate { dx, dy });
        self.is_moving = true;
        self.request_frame();
    }

    /// Cancel whatever scripted animation is running and clear the moving
    /// flag. No-op when nothing is running.
    pub fn stop_moving(&mut self) {
        self.animation = None;
        self.is_moving = false;
    }

    /// Advance one scheduler tick: step the scripted animation if one is
    /// active, then redraw if the sphere is moving.
    pub(crate) fn on_tick(&mut self) {
        self.step_animation();
        if self.is_moving {
            self.draw_sky();
        }
    }

    fn step_animation(&mut self) {
        let Some(animation) = self.animation.take() else {
            return;
        };
        match animation {
            ScriptedAnimation::Rotate { dx, dy } => {
                self.rotate_xy(dx, dy);
                self.animation = Some(ScriptedAnimation::Rotate { dx, dy });
                self.request_frame();
            }
            ScriptedAnimation::Center {
                target,
                mut phase,
                dx,
                dy,
            } => {
                let (cx, cy) = self.center();
                if phase == CenterPhase::Horizontal {
                    let x = target.borrow().x - cx;
                    if (x != 0.0 && dx > 0.0 && x < 0.0) || (dx < 0.0 && x > 0.0) {
                        self.rotate_xy(dx, 0.0);
                        self.animation = Some(ScriptedAnimation::Center { target, phase, dx, dy });
                        self.request_frame();
                        return;
                    }
                    // Already centered (or just crossed): fall through to
                    // the vertical phase in the same tick.
                    phase = CenterPhase::Vertical;
                }
                let y = cy - target.borrow().y;
                if (y != 0.0 && dy > 0.0 && y < 0.0) || (dy < 0.0 && y > 0.0) {
                    // The vertical seek applies the negated step; callers
                    // undoing rotations must keep this decomposition order.
                    self.rotate_xy(0.0, -dy);
                    self.animation = Some(ScriptedAnimation::Center { target, phase, dx, dy });
                    self.request_frame();
                } else {
                    self.is_moving = false;
                }
            }
        }
    }

    // ---------------- renderer boundary ----------------

    /// Redraw immediately, outside the scheduler.
    pub fn redraw(&mut self) {
        self.draw_sky();
    }

    /// Emit the frame's draw calls: background disc, then visible
    /// constellation segments (both endpoints strictly facing), star dots,
    /// custom objects, and finally the hover highlight ring and label.
    /// Coordinates are floored to integer pixels here and nowhere else.
    pub(crate) fn draw_sky(&mut self) {
        let (cx, cy) = self.center();
        let surface = self.surface.as_mut();

        surface.clear(self.width, self.height);
        surface.fill_circle(cx.floor(), cy.floor(), self.radius, &self.config.background_color);
        surface.stroke_circle(cx.floor(), cy.floor(), self.radius, SPHERE_OUTLINE_COLOR, 1.0);

        for line in &self.star_lines {
            if line.a.z > 0.0 && line.b.z > 0.0 {
                surface.line(
                    line.a.x.floor(),
                    line.a.y.floor(),
                    line.b.x.floor(),
                    line.b.y.floor(),
                    LINE_COLOR,
                );
            }
        }

        for star in &self.star_points {
            if star.z >= 0.0 {
                surface.fill_circle(star.x.floor(), star.y.floor(), STAR_RADIUS_PX, STAR_COLOR);
            }
        }

        for object in &self.object_points {
            let p = object.borrow();
            if p.z >= 0.0 {
                let (color, radius) = marker_style(p.data.as_ref());
                surface.fill_circle(p.x.floor(), p.y.floor(), radius, color);
            }
        }

        if let Some(over) = self.over_object {
            if let Some(object) = self.object_points.get(over) {
                let p = object.borrow();
                let (_, radius) = marker_style(p.data.as_ref());
                let ring = radius + self.config.highlight_size;
                surface.stroke_circle(
                    p.x.floor(),
                    p.y.floor(),
                    ring,
                    &self.config.highlight_color,
                    self.config.highlight_size,
                );
                if let Some(text) = &self.hover_label {
                    surface.text(
                        text,
                        (p.x + ring).floor(),
                        (p.y - ring).floor(),
                        &self.config.font,
                        &self.config.highlight_color,
                        TEXT_OUTLINE_COLOR,
                        self.config.highlight_size,
                    );
                }
            }
        }
    }
}

fn marker_style(data: Option<&ObjectData>) -> (&str, f64) {
    let color = data
        .and_then(|d| d.color.as_deref())
        .unwrap_or(DEFAULT_OBJECT_COLOR);
    let radius = data
        .and_then(|d| d.radius)
        .unwrap_or(DEFAULT_OBJECT_RADIUS_PX);
    (color, radius)
}

fn positive(value: f64, what: &str) -> Result<f64, SkyError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(SkyError::InvalidArgument(format!(
            "{what} must be positive, got {value}"
        )))
    }
}
