//! Shared crate-wide constants.

/// Smallest width (in pixel-equivalent units) a window may reach through
/// any controller-driven geometry update. Resize sessions clamp candidate
/// sizes against this before touching edge positions.
pub const MIN_WIDTH: f64 = 100.0;

/// Smallest height a window may reach through any controller-driven
/// geometry update.
pub const MIN_HEIGHT: f64 = 55.0;

/// Title given to windows created without one.
pub const DEFAULT_TITLE: &str = "Window";
