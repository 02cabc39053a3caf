// Shared tuning constants for the sphere engine and its hosts.

// Frames per second for hosts without a vsync-aligned frame callback.
pub const FALLBACK_FPS: u32 = 15;

// Size of the sensitive square (in px) around an object point that picks up
// clicks and hovers.
pub const HIT_AREA_TOUCH_PX: f64 = 15.0;
pub const HIT_AREA_MOUSE_PX: f64 = 6.0;

// Wheel zoom step factors, keyed by scroll direction.
pub const ZOOM_OUT_STEP: f64 = 0.9;
pub const ZOOM_IN_STEP: f64 = 1.1;

// Rotation step (radians) per tick of the auto-center animation.
pub const CENTER_STEP_RAD: f64 = 0.05;

// Construction defaults
pub const DEFAULT_WIDTH: f64 = 400.0; // height defaults to width
pub const DEFAULT_RADIUS_RATIO: f64 = 0.45; // of min(width, height)
pub const DEFAULT_RESIZE_PADDING: f64 = 0.9;
pub const DEFAULT_HIGHLIGHT_SIZE_PX: f64 = 3.0;

// Drawing
pub const STAR_RADIUS_PX: f64 = 2.0;
pub const DEFAULT_OBJECT_RADIUS_PX: f64 = 2.0;
pub const DEFAULT_BACKGROUND: &str = "#000";
pub const DEFAULT_FONT: &str = "15px serif";
pub const DEFAULT_HIGHLIGHT_COLOR: &str = "#ffff00";
pub const DEFAULT_OBJECT_COLOR: &str = "#ff0000";
pub const SPHERE_OUTLINE_COLOR: &str = "#666";
pub const LINE_COLOR: &str = "#aaa";
pub const STAR_COLOR: &str = "#fff";
pub const TEXT_OUTLINE_COLOR: &str = "#000";
