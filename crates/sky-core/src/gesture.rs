//! Drag gesture state consumed by the sphere's pointer methods.

use glam::DVec2;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) enum DragPhase {
    #[default]
    Idle,
    Dragging,
}

/// Explicit gesture state: press position plus the previous move position.
/// Drag deltas are computed against `prev`, not `start`; a release whose
/// position still equals `start` pixel-exactly is a click.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct GestureState {
    pub phase: DragPhase,
    pub start: DVec2,
    pub prev: DVec2,
}

impl GestureState {
    pub fn begin(&mut self, pos: DVec2) {
        self.phase = DragPhase::Dragging;
        self.start = pos;
        self.prev = pos;
    }

    pub fn end(&mut self) {
        self.phase = DragPhase::Idle;
    }

    pub fn is_dragging(&self) -> bool {
        self.phase == DragPhase::Dragging
    }

    /// True when no move event changed the pointer position since press.
    pub fn is_click(&self) -> bool {
        self.prev == self.start
    }
}
