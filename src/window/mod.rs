//! Pane windows and the shared registry that orders them.

mod manager;

pub use manager::{SharedWindowManager, WindowId, WindowManager};

use std::fmt;

use crate::constants::DEFAULT_TITLE;
use crate::events::{LifecycleEvent, LifecycleEventKind, LifecycleListener};
use crate::geometry::Rect;
use crate::pointer::{PointerCapture, PointerId};
use crate::session::{DragSession, ResizeHandle, ResizeSession};

/// Lifecycle state of a window. Closing is a removal, not a state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LifecycleState {
    #[default]
    Normal,
    Minimized,
    Maximized,
}

/// Creation options for a window.
#[derive(Debug, Clone)]
pub struct WindowOptions {
    pub title: String,
    pub minimizable: bool,
    pub maximizable: bool,
    pub closable: bool,
    pub rect: Rect,
}

impl Default for WindowOptions {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            minimizable: true,
            maximizable: true,
            closable: true,
            rect: Rect::DEFAULT,
        }
    }
}

impl WindowOptions {
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn with_rect(mut self, rect: Rect) -> Self {
        self.rect = rect;
        self
    }

    pub fn minimizable(mut self, minimizable: bool) -> Self {
        self.minimizable = minimizable;
        self
    }

    pub fn maximizable(mut self, maximizable: bool) -> Self {
        self.maximizable = maximizable;
        self
    }

    pub fn closable(mut self, closable: bool) -> Self {
        self.closable = closable;
        self
    }
}

/// A movable, resizable panel widget with minimize/maximize/restore/close
/// lifecycle.
///
/// The window owns its rect and lifecycle state exclusively; the shared
/// registry owns only stacking and set membership. The host routes pointer
/// samples in one at a time and each result is applied before the next
/// sample is processed, so every window's geometry has a single writer.
pub struct PaneWindow {
    id: WindowId,
    title: String,
    minimizable: bool,
    maximizable: bool,
    closable: bool,
    rect: Rect,
    state: LifecycleState,
    saved_rect: Option<Rect>,
    drag: Option<DragSession>,
    resize: Option<ResizeSession>,
    listeners: Vec<LifecycleListener>,
    manager: SharedWindowManager,
    closed: bool,
}

impl fmt::Debug for PaneWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PaneWindow")
            .field("id", &self.id)
            .field("title", &self.title)
            .field("rect", &self.rect)
            .field("state", &self.state)
            .field("closed", &self.closed)
            .finish_non_exhaustive()
    }
}

impl PaneWindow {
    /// Create a window, register it with the surface registry and give it
    /// focus, mirroring attachment to a live surface.
    pub fn new(manager: SharedWindowManager, options: WindowOptions) -> Self {
        let id = manager.borrow_mut().register();
        let window = Self {
            id,
            title: options.title,
            minimizable: options.minimizable,
            maximizable: options.maximizable,
            closable: options.closable,
            rect: options.rect.clamped(),
            state: LifecycleState::Normal,
            saved_rect: None,
            drag: None,
            resize: None,
            listeners: Vec::new(),
            manager,
            closed: false,
        };
        window.manager.borrow_mut().focus(id);
        tracing::debug!(window = ?id, title = %window.title, "created window");
        window
    }

    pub fn id(&self) -> WindowId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn minimizable(&self) -> bool {
        self.minimizable
    }

    pub fn maximizable(&self) -> bool {
        self.maximizable
    }

    pub fn closable(&self) -> bool {
        self.closable
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn state(&self) -> LifecycleState {
        self.state
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn is_active(&self) -> bool {
        self.manager.borrow().is_active(self.id)
    }

    pub fn stack_token(&self) -> u64 {
        self.manager.borrow().stack_token(self.id)
    }

    /// Replace the window's rect, clamping the size to the crate minimums.
    ///
    /// Hosts use this to apply maximized surface bounds (and re-apply them
    /// when the surface resizes); the saved snapshot is never touched, so
    /// restore still returns the pre-maximize rect.
    pub fn set_rect(&mut self, rect: Rect) {
        self.rect = rect.clamped();
    }

    /// Register a listener for this window's lifecycle events. Delivery is
    /// synchronous at the point of transition.
    pub fn on_lifecycle(&mut self, listener: impl FnMut(&LifecycleEvent) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    fn emit(&mut self, kind: LifecycleEventKind) {
        let event = LifecycleEvent {
            window: self.id,
            title: self.title.clone(),
            kind,
        };
        for listener in &mut self.listeners {
            listener(&event);
        }
    }

    /// Request focus: bring to front and take the active flag.
    pub fn focus(&mut self) {
        if self.closed {
            return;
        }
        self.manager.borrow_mut().focus(self.id);
    }

    /// Hide the window into the minimized set. A no-op when already
    /// minimized or closed. Minimizing a maximized window drops back to the
    /// saved rect first so the snapshot never outlives the maximized state.
    pub fn minimize(&mut self) {
        if self.closed || self.state == LifecycleState::Minimized {
            return;
        }
        if self.state == LifecycleState::Maximized
            && let Some(saved) = self.saved_rect.take()
        {
            self.rect = saved;
        }
        self.state = LifecycleState::Minimized;
        tracing::debug!(window = ?self.id, "minimized window");
        self.emit(LifecycleEventKind::Minimize);
        self.manager.borrow_mut().notify_minimized(self.id);
    }

    /// Leave the minimized or maximized state. A no-op in `Normal` state.
    ///
    /// Restoring from minimized doubles as a focus request; restoring from
    /// maximized puts the saved rect back and clears the snapshot.
    pub fn restore(&mut self) {
        if self.closed {
            return;
        }
        match self.state {
            LifecycleState::Minimized => {
                self.state = LifecycleState::Normal;
                tracing::debug!(window = ?self.id, "restored window from minimized");
                self.emit(LifecycleEventKind::Restore);
                let mut manager = self.manager.borrow_mut();
                manager.notify_restored(self.id);
                manager.focus(self.id);
            }
            LifecycleState::Maximized => {
                if let Some(saved) = self.saved_rect.take() {
                    self.rect = saved;
                }
                self.state = LifecycleState::Normal;
                tracing::debug!(window = ?self.id, "restored window from maximized");
                self.emit(LifecycleEventKind::Restore);
            }
            LifecycleState::Normal => {}
        }
    }

    /// Snapshot the current rect and enter the maximized state. A no-op when
    /// minimized or already maximized.
    ///
    /// The snapshot is taken before any geometry change; the maximized
    /// bounds themselves are a host concern, applied through [`set_rect`]
    /// after observing the event.
    ///
    /// [`set_rect`]: PaneWindow::set_rect
    pub fn maximize(&mut self) {
        if self.closed || self.state != LifecycleState::Normal {
            return;
        }
        self.saved_rect = Some(self.rect);
        self.state = LifecycleState::Maximized;
        tracing::debug!(window = ?self.id, "maximized window");
        self.emit(LifecycleEventKind::Maximize);
    }

    /// Maximize, or restore when already maximized.
    pub fn toggle_maximize(&mut self) {
        if self.state == LifecycleState::Maximized {
            self.restore();
        } else {
            self.maximize();
        }
    }

    /// Emit the close event and unregister from the surface registry.
    ///
    /// No transitions are valid afterwards; later calls on this window are
    /// silent no-ops and the host is expected to drop it.
    pub fn close(&mut self) {
        if self.closed {
            return;
        }
        tracing::debug!(window = ?self.id, "closing window");
        self.emit(LifecycleEventKind::Close);
        self.manager.borrow_mut().unregister(self.id);
        self.drag = None;
        self.resize = None;
        self.closed = true;
    }

    /// Begin a move-drag from the window's drag region, focusing the window.
    ///
    /// No session starts while maximized, minimized or closed, or while a
    /// drag or resize session is already active. Pointer capture is acquired
    /// best-effort; the session's identity guard holds either way. Returns
    /// whether a session started.
    pub fn begin_drag(
        &mut self,
        pointer: PointerId,
        x: f64,
        y: f64,
        capture: &mut dyn PointerCapture,
    ) -> bool {
        if self.closed {
            return false;
        }
        self.focus();
        if self.state != LifecycleState::Normal {
            return false;
        }
        if self.drag.is_some() || self.resize.is_some() {
            return false;
        }
        if let Err(err) = capture.capture(pointer) {
            tracing::debug!(window = ?self.id, %err, "pointer capture failed");
        }
        self.drag = Some(DragSession::new(pointer, x, y, self.rect));
        tracing::trace!(window = ?self.id, pointer = ?pointer, "drag session started");
        true
    }

    /// Begin a resize-drag on one of the eight handles, focusing the window.
    /// Same preconditions and capture semantics as [`begin_drag`].
    ///
    /// [`begin_drag`]: PaneWindow::begin_drag
    pub fn begin_resize(
        &mut self,
        pointer: PointerId,
        x: f64,
        y: f64,
        handle: ResizeHandle,
        capture: &mut dyn PointerCapture,
    ) -> bool {
        if self.closed {
            return false;
        }
        self.focus();
        if self.state != LifecycleState::Normal {
            return false;
        }
        if self.drag.is_some() || self.resize.is_some() {
            return false;
        }
        if let Err(err) = capture.capture(pointer) {
            tracing::debug!(window = ?self.id, %err, "pointer capture failed");
        }
        self.resize = Some(ResizeSession::new(pointer, handle, x, y, self.rect));
        tracing::trace!(window = ?self.id, pointer = ?pointer, handle = ?handle, "resize session started");
        true
    }

    /// Route a movement sample to the active session, if any.
    ///
    /// The resulting rect is applied before this returns, preserving the
    /// single-writer ordering per captured pointer. Samples from foreign
    /// pointers leave geometry unchanged. Returns whether the sample
    /// advanced a session.
    pub fn pointer_moved(&mut self, pointer: PointerId, x: f64, y: f64) -> bool {
        if let Some(session) = &self.drag
            && let Some(rect) = session.moved(pointer, x, y)
        {
            self.rect = rect;
            return true;
        }
        if let Some(session) = &self.resize
            && let Some(rect) = session.moved(pointer, x, y)
        {
            self.rect = rect;
            return true;
        }
        false
    }

    /// Terminate the session owned by `pointer` and release capture.
    ///
    /// Idempotent: repeated calls and mismatched pointer ids are no-ops, and
    /// a release failure on an already-released pointer is swallowed.
    pub fn pointer_released(&mut self, pointer: PointerId, capture: &mut dyn PointerCapture) {
        let mut ended = false;
        if self.drag.as_ref().is_some_and(|session| session.matches(pointer)) {
            self.drag = None;
            ended = true;
        }
        if self
            .resize
            .as_ref()
            .is_some_and(|session| session.matches(pointer))
        {
            self.resize = None;
            ended = true;
        }
        if ended {
            if let Err(err) = capture.release(pointer) {
                tracing::trace!(window = ?self.id, %err, "pointer release ignored");
            }
            tracing::trace!(window = ?self.id, pointer = ?pointer, "session ended");
        }
    }

    /// Input cancellation (pointer lost, device disconnected) ends the
    /// session exactly like a normal release; geometry keeps its last
    /// applied value.
    pub fn pointer_cancelled(&mut self, pointer: PointerId, capture: &mut dyn PointerCapture) {
        self.pointer_released(pointer, capture);
    }

    pub fn dragging(&self) -> bool {
        self.drag.is_some()
    }

    pub fn resizing(&self) -> bool {
        self.resize.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn options_have_expected_defaults() {
        let options = WindowOptions::default();
        assert_eq!(options.title, "Window");
        assert!(options.minimizable && options.maximizable && options.closable);
        assert_eq!(options.rect, Rect::new(50.0, 50.0, 300.0, 200.0));
    }

    #[test]
    fn creation_registers_and_focuses() {
        let manager = WindowManager::shared();
        let window = PaneWindow::new(manager.clone(), WindowOptions::default());
        assert!(manager.borrow().is_registered(window.id()));
        assert!(window.is_active());
    }

    #[test]
    fn undersized_initial_rect_is_clamped() {
        let manager = WindowManager::shared();
        let options = WindowOptions::default().with_rect(Rect::new(0.0, 0.0, 10.0, 10.0));
        let window = PaneWindow::new(manager, options);
        assert_eq!(window.rect().width, crate::constants::MIN_WIDTH);
        assert_eq!(window.rect().height, crate::constants::MIN_HEIGHT);
    }
}
