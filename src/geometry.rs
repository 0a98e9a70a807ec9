use crate::constants::{MIN_HEIGHT, MIN_WIDTH};

/// Position and size of a window on the host surface, in pixel-equivalent
/// units.
///
/// Positions are never clamped: a window may sit partially or fully outside
/// the visible surface, so `left` and `top` can go negative. Sizes obey the
/// crate-wide minimums after any controller-driven update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// Default placement for newly created windows.
    pub const DEFAULT: Rect = Rect::new(50.0, 50.0, 300.0, 200.0);

    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// The same rect with its size raised to the crate minimums. Position is
    /// left untouched.
    pub fn clamped(self) -> Rect {
        let (width, height) = clamp_size(self.width, self.height);
        Rect {
            width,
            height,
            ..self
        }
    }
}

impl Default for Rect {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Clamp a candidate size to the crate-wide minimums, componentwise.
pub fn clamp_size(width: f64, height: f64) -> (f64, f64) {
    (width.max(MIN_WIDTH), height.max(MIN_HEIGHT))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_size_raises_to_minimums() {
        assert_eq!(clamp_size(10.0, 10.0), (MIN_WIDTH, MIN_HEIGHT));
        assert_eq!(clamp_size(250.0, 20.0), (250.0, MIN_HEIGHT));
        assert_eq!(clamp_size(20.0, 250.0), (MIN_WIDTH, 250.0));
    }

    #[test]
    fn clamp_size_passes_valid_sizes_through() {
        assert_eq!(clamp_size(300.0, 200.0), (300.0, 200.0));
        assert_eq!(clamp_size(MIN_WIDTH, MIN_HEIGHT), (MIN_WIDTH, MIN_HEIGHT));
    }

    #[test]
    fn clamped_keeps_position() {
        let rect = Rect::new(-40.0, -10.0, 1.0, 1.0).clamped();
        assert_eq!(rect, Rect::new(-40.0, -10.0, MIN_WIDTH, MIN_HEIGHT));
    }
}
