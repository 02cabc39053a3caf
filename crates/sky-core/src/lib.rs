//! Platform-neutral engine for an interactive celestial sphere.
//!
//! This crate owns the geometry (projection, rotation, zoom), the pointer
//! gesture state machine, hit testing, scripted animations and the shared
//! frame scheduler. Pixel rendering and raw platform events stay outside:
//! a host supplies a [`DrawSurface`] implementation and feeds normalized
//! pointer coordinates into [`SkySphere`].

mod animation;
mod gesture;

pub mod catalog;
pub mod constants;
pub mod error;
pub mod point;
pub mod render;
pub mod scheduler;
pub mod sphere;

pub use catalog::*;
pub use constants::*;
pub use error::*;
pub use point::*;
pub use render::*;
pub use scheduler::*;
pub use sphere::*;
