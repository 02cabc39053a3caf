//! Scripted animation state, advanced one step per scheduler tick.

use crate::point::SkyPointRef;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum CenterPhase {
    Horizontal,
    Vertical,
}

/// At most one scripted animation owns redraw triggering for a sphere at
/// any instant; starting a new one cancels the old.
pub(crate) enum ScriptedAnimation {
    /// Seek `target` toward the view center, horizontal axis first. Each
    /// phase ends when the point's offset from center changes sign relative
    /// to the initial step direction.
    Center {
        target: SkyPointRef,
        phase: CenterPhase,
        dx: f64,
        dy: f64,
    },
    /// Apply a fixed rotation step every tick until explicitly stopped.
    Rotate { dx: f64, dy: f64 },
}
