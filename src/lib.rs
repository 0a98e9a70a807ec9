//! A pointer-driven floating window system for host UI surfaces.
//!
//! Each [`PaneWindow`] owns its geometry and lifecycle state exclusively; a
//! shared [`WindowManager`] registry owns stacking order, exclusive focus
//! and the minimized set. Pointer-capture sessions ([`DragSession`],
//! [`ResizeSession`]) convert movement samples into geometry updates, one
//! fully-applied sample at a time.
//!
//! The crate ships a terminal demo host (`pane-wm` binary) that renders
//! windows on a ratatui surface and translates crossterm mouse events into
//! pointer samples; see the `chrome` and `ui` modules.

pub mod chrome;
pub mod constants;
pub mod events;
pub mod geometry;
pub mod pointer;
pub mod session;
pub mod taskbar;
pub mod ui;
pub mod window;

pub use events::{LifecycleEvent, LifecycleEventKind};
pub use geometry::{Rect, clamp_size};
pub use pointer::{CaptureError, NullCapture, PointerCapture, PointerId};
pub use session::{DragSession, ResizeHandle, ResizeSession};
pub use taskbar::{Taskbar, TaskbarEntry};
pub use window::{
    LifecycleState, PaneWindow, SharedWindowManager, WindowId, WindowManager, WindowOptions,
};
