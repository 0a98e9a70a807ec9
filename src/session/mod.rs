//! Pointer-capture sessions for move-drag and resize-drag interactions.
//!
//! A session records the window origin and pointer position at pointer-down
//! and converts each later movement sample into a candidate rect. Sessions
//! never retain geometry; the owning window applies every result before the
//! next sample for that pointer is processed, which keeps each window's rect
//! on a single-writer sequence.

mod drag;
mod resize;

pub use drag::DragSession;
pub use resize::{ResizeHandle, ResizeSession};
