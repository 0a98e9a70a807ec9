//! Taskbar observer model.
//!
//! Tracks one entry per minimized window, driven purely by lifecycle
//! events; rendering and click handling stay with the host.

use crate::events::{LifecycleEvent, LifecycleEventKind};
use crate::window::WindowId;

/// One minimized window shown in a taskbar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskbarEntry {
    pub window: WindowId,
    pub title: String,
}

/// Entry list for a taskbar, fed from window lifecycle events.
#[derive(Debug, Default)]
pub struct Taskbar {
    entries: Vec<TaskbarEntry>,
}

impl Taskbar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one lifecycle event. Minimize adds an entry; restore and close
    /// drop it. A duplicate minimize leaves a single entry.
    pub fn observe(&mut self, event: &LifecycleEvent) {
        match event.kind {
            LifecycleEventKind::Minimize => {
                if !self.entries.iter().any(|entry| entry.window == event.window) {
                    self.entries.push(TaskbarEntry {
                        window: event.window,
                        title: event.title.clone(),
                    });
                }
            }
            LifecycleEventKind::Restore | LifecycleEventKind::Close => {
                self.entries.retain(|entry| entry.window != event.window);
            }
            LifecycleEventKind::Maximize => {}
        }
    }

    /// Entries in minimize order.
    pub fn entries(&self) -> &[TaskbarEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::window::WindowManager;

    fn event(window: WindowId, kind: LifecycleEventKind) -> LifecycleEvent {
        LifecycleEvent {
            window,
            title: "Scratch".to_string(),
            kind,
        }
    }

    #[test]
    fn minimize_adds_one_entry() {
        let mut wm = WindowManager::new();
        let id = wm.register();
        let mut taskbar = Taskbar::new();
        taskbar.observe(&event(id, LifecycleEventKind::Minimize));
        taskbar.observe(&event(id, LifecycleEventKind::Minimize));
        assert_eq!(taskbar.len(), 1);
        assert_eq!(taskbar.entries()[0].title, "Scratch");
    }

    #[test]
    fn restore_and_close_remove_the_entry() {
        let mut wm = WindowManager::new();
        let a = wm.register();
        let b = wm.register();
        let mut taskbar = Taskbar::new();
        taskbar.observe(&event(a, LifecycleEventKind::Minimize));
        taskbar.observe(&event(b, LifecycleEventKind::Minimize));
        taskbar.observe(&event(a, LifecycleEventKind::Restore));
        assert_eq!(taskbar.len(), 1);
        taskbar.observe(&event(b, LifecycleEventKind::Close));
        assert!(taskbar.is_empty());
    }

    #[test]
    fn maximize_is_ignored() {
        let mut wm = WindowManager::new();
        let id = wm.register();
        let mut taskbar = Taskbar::new();
        taskbar.observe(&event(id, LifecycleEventKind::Maximize));
        assert!(taskbar.is_empty());
    }
}
