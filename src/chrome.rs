//! Chrome hit-region identity for terminal hosts.
//!
//! The core only needs to know which region a pointer-down targeted; the
//! chrome itself (borders, header, buttons) is built and styled by the host
//! (`ui`). This module also owns the cell-to-pixel-unit mapping terminal
//! hosts translate through, since window geometry runs in pixel-equivalent
//! units while terminal input arrives in cells.

use crate::geometry::Rect;
use crate::session::ResizeHandle;

/// Pixel-equivalent units covered by one terminal cell, horizontally.
pub const CELL_WIDTH: f64 = 8.0;

/// Pixel-equivalent units covered by one terminal cell, vertically.
pub const CELL_HEIGHT: f64 = 16.0;

/// Map a cell coordinate to a pointer position in pixel units.
pub fn cell_to_point(column: u16, row: u16) -> (f64, f64) {
    (
        f64::from(column) * CELL_WIDTH,
        f64::from(row) * CELL_HEIGHT,
    )
}

/// Window geometry snapped to the terminal cell grid. The origin is signed
/// so a window dragged off the surface keeps its logical position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellRect {
    pub x: i32,
    pub y: i32,
    pub width: u16,
    pub height: u16,
}

impl CellRect {
    pub fn from_rect(rect: Rect) -> Self {
        Self {
            x: (rect.left / CELL_WIDTH).round() as i32,
            y: (rect.top / CELL_HEIGHT).round() as i32,
            width: (rect.width / CELL_WIDTH).round().max(1.0) as u16,
            height: (rect.height / CELL_HEIGHT).round().max(1.0) as u16,
        }
    }

    pub fn contains(&self, column: u16, row: u16) -> bool {
        let column = i32::from(column);
        let row = i32::from(row);
        column >= self.x
            && column < self.x + i32::from(self.width)
            && row >= self.y
            && row < self.y + i32::from(self.height)
    }

    /// Rightmost cell column, inclusive.
    pub fn right(&self) -> i32 {
        self.x + i32::from(self.width) - 1
    }

    /// Bottommost cell row, inclusive.
    pub fn bottom(&self) -> i32 {
        self.y + i32::from(self.height) - 1
    }
}

/// Which part of a window's chrome a cell coordinate targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitRegion {
    /// Title-bar drag region.
    Drag,
    MinimizeButton,
    MaximizeButton,
    CloseButton,
    Resize(ResizeHandle),
    Content,
}

/// Capability flags relevant to hit-testing; a disabled button is not a hit
/// target and its slot collapses, like the original chrome hiding the
/// button entirely.
#[derive(Debug, Clone, Copy)]
pub struct ChromeFlags {
    pub minimizable: bool,
    pub maximizable: bool,
    pub closable: bool,
}

/// Columns occupied by the header buttons, right to left in the order
/// close, maximize, minimize, honoring `flags`. Used by both hit-testing
/// and rendering so the two can never drift apart.
pub(crate) fn button_columns(rect: CellRect, flags: ChromeFlags) -> [Option<(HitRegion, i32)>; 3] {
    let mut slots = [None; 3];
    let mut column = rect.right() - 1;
    if flags.closable {
        slots[0] = Some((HitRegion::CloseButton, column));
        column -= 2;
    }
    if flags.maximizable {
        slots[1] = Some((HitRegion::MaximizeButton, column));
        column -= 2;
    }
    if flags.minimizable {
        slots[2] = Some((HitRegion::MinimizeButton, column));
    }
    slots
}

/// Classify a cell coordinate within a window's cell rect. Returns `None`
/// when the point lies outside the window entirely.
///
/// Border cells resolve to the eight resize handles (corners take
/// precedence over edges); the header row splits into buttons and the drag
/// region; everything else is content.
pub fn hit_test(rect: CellRect, flags: ChromeFlags, column: u16, row: u16) -> Option<HitRegion> {
    if !rect.contains(column, row) {
        return None;
    }
    let column = i32::from(column);
    let row = i32::from(row);
    let (left, top) = (rect.x, rect.y);
    let (right, bottom) = (rect.right(), rect.bottom());

    if column == left && row == top {
        return Some(HitRegion::Resize(ResizeHandle::TopLeft));
    }
    if column == right && row == top {
        return Some(HitRegion::Resize(ResizeHandle::TopRight));
    }
    if column == left && row == bottom {
        return Some(HitRegion::Resize(ResizeHandle::BottomLeft));
    }
    if column == right && row == bottom {
        return Some(HitRegion::Resize(ResizeHandle::BottomRight));
    }
    if row == top {
        return Some(HitRegion::Resize(ResizeHandle::Top));
    }
    if row == bottom {
        return Some(HitRegion::Resize(ResizeHandle::Bottom));
    }
    if column == left {
        return Some(HitRegion::Resize(ResizeHandle::Left));
    }
    if column == right {
        return Some(HitRegion::Resize(ResizeHandle::Right));
    }

    if row == top + 1 {
        for slot in button_columns(rect, flags).into_iter().flatten() {
            let (region, button_column) = slot;
            if column == button_column {
                return Some(region);
            }
        }
        return Some(HitRegion::Drag);
    }

    Some(HitRegion::Content)
}

#[cfg(test)]
mod tests {
    use super::*;

    const RECT: CellRect = CellRect {
        x: 4,
        y: 2,
        width: 20,
        height: 10,
    };

    const ALL: ChromeFlags = ChromeFlags {
        minimizable: true,
        maximizable: true,
        closable: true,
    };

    #[test]
    fn corners_and_edges_map_to_handles() {
        assert_eq!(
            hit_test(RECT, ALL, 4, 2),
            Some(HitRegion::Resize(ResizeHandle::TopLeft))
        );
        assert_eq!(
            hit_test(RECT, ALL, 23, 11),
            Some(HitRegion::Resize(ResizeHandle::BottomRight))
        );
        assert_eq!(
            hit_test(RECT, ALL, 10, 2),
            Some(HitRegion::Resize(ResizeHandle::Top))
        );
        assert_eq!(
            hit_test(RECT, ALL, 4, 6),
            Some(HitRegion::Resize(ResizeHandle::Left))
        );
    }

    #[test]
    fn header_row_splits_into_buttons_and_drag() {
        // Buttons right to left: close at right-1, maximize at right-3,
        // minimize at right-5.
        assert_eq!(hit_test(RECT, ALL, 22, 3), Some(HitRegion::CloseButton));
        assert_eq!(hit_test(RECT, ALL, 20, 3), Some(HitRegion::MaximizeButton));
        assert_eq!(hit_test(RECT, ALL, 18, 3), Some(HitRegion::MinimizeButton));
        assert_eq!(hit_test(RECT, ALL, 8, 3), Some(HitRegion::Drag));
    }

    #[test]
    fn disabled_buttons_collapse_toward_the_border() {
        let flags = ChromeFlags {
            closable: false,
            ..ALL
        };
        assert_eq!(hit_test(RECT, flags, 22, 3), Some(HitRegion::MaximizeButton));
        assert_eq!(hit_test(RECT, flags, 20, 3), Some(HitRegion::MinimizeButton));
        assert_eq!(hit_test(RECT, flags, 18, 3), Some(HitRegion::Drag));
    }

    #[test]
    fn interior_is_content_and_outside_is_none() {
        assert_eq!(hit_test(RECT, ALL, 10, 7), Some(HitRegion::Content));
        assert_eq!(hit_test(RECT, ALL, 3, 7), None);
        assert_eq!(hit_test(RECT, ALL, 24, 7), None);
    }

    #[test]
    fn cell_rect_keeps_offscreen_origin() {
        let rect = CellRect::from_rect(Rect::new(-80.0, -32.0, 300.0, 200.0));
        assert_eq!(rect.x, -10);
        assert_eq!(rect.y, -2);
        assert_eq!(rect.width, 38);
        assert_eq!(rect.height, 13);
    }
}
