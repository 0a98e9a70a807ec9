use crate::geometry::Rect;
use crate::pointer::PointerId;

/// One in-progress move-drag: the pointer that started it plus the window
/// rect and pointer coordinates recorded at session start.
#[derive(Debug, Clone, Copy)]
pub struct DragSession {
    pointer: PointerId,
    start_x: f64,
    start_y: f64,
    origin: Rect,
}

impl DragSession {
    pub(crate) fn new(pointer: PointerId, x: f64, y: f64, origin: Rect) -> Self {
        Self {
            pointer,
            start_x: x,
            start_y: y,
            origin,
        }
    }

    pub fn pointer(&self) -> PointerId {
        self.pointer
    }

    pub(crate) fn matches(&self, pointer: PointerId) -> bool {
        self.pointer == pointer
    }

    /// Candidate rect for a movement sample, or `None` when the sample
    /// belongs to a different pointer.
    ///
    /// Position is never clamped; windows may be dragged fully or partially
    /// off the visible surface. Size is untouched.
    pub fn moved(&self, pointer: PointerId, x: f64, y: f64) -> Option<Rect> {
        if !self.matches(pointer) {
            return None;
        }
        let dx = x - self.start_x;
        let dy = y - self.start_y;
        Some(Rect {
            left: self.origin.left + dx,
            top: self.origin.top + dy,
            ..self.origin
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn moves_by_pointer_delta() {
        let session = DragSession::new(
            PointerId(1),
            100.0,
            100.0,
            Rect::new(50.0, 50.0, 300.0, 200.0),
        );
        let rect = session.moved(PointerId(1), 130.0, 115.0).unwrap();
        assert_eq!(rect, Rect::new(80.0, 65.0, 300.0, 200.0));
    }

    #[test]
    fn allows_negative_positions() {
        let session = DragSession::new(
            PointerId(1),
            10.0,
            10.0,
            Rect::new(0.0, 0.0, 300.0, 200.0),
        );
        let rect = session.moved(PointerId(1), -400.0, -90.0).unwrap();
        assert_eq!(rect.left, -410.0);
        assert_eq!(rect.top, -100.0);
    }

    #[test]
    fn ignores_foreign_pointer() {
        let session = DragSession::new(
            PointerId(1),
            100.0,
            100.0,
            Rect::new(50.0, 50.0, 300.0, 200.0),
        );
        assert!(session.moved(PointerId(2), 500.0, 500.0).is_none());
    }
}
