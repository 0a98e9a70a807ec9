use crate::geometry::{Rect, clamp_size};
use crate::pointer::PointerId;

/// One of the eight directional resize handles on a window border.
///
/// Each handle controls a subset of edges; edges it does not control are
/// never touched by a resize session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeHandle {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
    Top,
    Bottom,
    Left,
    Right,
}

impl ResizeHandle {
    /// True when this handle moves the left (leading horizontal) edge.
    pub fn controls_left(self) -> bool {
        matches!(self, Self::Left | Self::TopLeft | Self::BottomLeft)
    }

    pub fn controls_right(self) -> bool {
        matches!(self, Self::Right | Self::TopRight | Self::BottomRight)
    }

    /// True when this handle moves the top (leading vertical) edge.
    pub fn controls_top(self) -> bool {
        matches!(self, Self::Top | Self::TopLeft | Self::TopRight)
    }

    pub fn controls_bottom(self) -> bool {
        matches!(self, Self::Bottom | Self::BottomLeft | Self::BottomRight)
    }
}

/// One in-progress resize-drag for a single handle.
#[derive(Debug, Clone, Copy)]
pub struct ResizeSession {
    pointer: PointerId,
    handle: ResizeHandle,
    start_x: f64,
    start_y: f64,
    origin: Rect,
}

impl ResizeSession {
    pub(crate) fn new(
        pointer: PointerId,
        handle: ResizeHandle,
        x: f64,
        y: f64,
        origin: Rect,
    ) -> Self {
        Self {
            pointer,
            handle,
            start_x: x,
            start_y: y,
            origin,
        }
    }

    pub fn pointer(&self) -> PointerId {
        self.pointer
    }

    pub fn handle(&self) -> ResizeHandle {
        self.handle
    }

    pub(crate) fn matches(&self, pointer: PointerId) -> bool {
        self.pointer == pointer
    }

    /// Candidate rect for a movement sample, or `None` for a foreign pointer.
    ///
    /// Candidate sizes are the session's starting size adjusted by the
    /// pointer delta along the controlled edges, then clamped to the crate
    /// minimums. A controlled leading edge (top or left) moves by the amount
    /// the dimension actually changed after clamping, so the opposite edge
    /// stays pinned even when the clamp kicks in.
    pub fn moved(&self, pointer: PointerId, x: f64, y: f64) -> Option<Rect> {
        if !self.matches(pointer) {
            return None;
        }
        let dx = x - self.start_x;
        let dy = y - self.start_y;

        let mut width = self.origin.width;
        let mut height = self.origin.height;
        if self.handle.controls_left() {
            width -= dx;
        }
        if self.handle.controls_right() {
            width += dx;
        }
        if self.handle.controls_top() {
            height -= dy;
        }
        if self.handle.controls_bottom() {
            height += dy;
        }

        let (width, height) = clamp_size(width, height);

        let mut left = self.origin.left;
        let mut top = self.origin.top;
        if self.handle.controls_left() {
            left += self.origin.width - width;
        }
        if self.handle.controls_top() {
            top += self.origin.height - height;
        }

        Some(Rect {
            left,
            top,
            width,
            height,
        })
    }
}
