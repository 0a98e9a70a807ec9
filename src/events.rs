//! Lifecycle notifications for external observers.
//!
//! Listeners are registered explicitly on a window and invoked synchronously
//! at the point of transition; there is no ambient event propagation.

use crate::window::WindowId;

/// What happened to a window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleEventKind {
    Minimize,
    Restore,
    Maximize,
    Close,
}

/// A lifecycle transition, carrying the window's identity and title so
/// observers (e.g. a taskbar) need no back-reference to the window itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LifecycleEvent {
    pub window: WindowId,
    pub title: String,
    pub kind: LifecycleEventKind,
}

/// Callback registered on a window for lifecycle notifications.
pub type LifecycleListener = Box<dyn FnMut(&LifecycleEvent)>;
