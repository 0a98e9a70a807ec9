use std::cell::RefCell;
use std::rc::Rc;

use pane_wm::events::LifecycleEventKind;
use pane_wm::geometry::Rect;
use pane_wm::taskbar::Taskbar;
use pane_wm::window::{LifecycleState, PaneWindow, WindowManager, WindowOptions};

type EventLog = Rc<RefCell<Vec<LifecycleEventKind>>>;

fn window_with_log(title: &str) -> (PaneWindow, EventLog) {
    let manager = WindowManager::shared();
    let mut window = PaneWindow::new(manager, WindowOptions::titled(title));
    let events: EventLog = Rc::default();
    let sink = Rc::clone(&events);
    window.on_lifecycle(move |event| sink.borrow_mut().push(event.kind));
    (window, events)
}

#[test]
fn minimize_twice_emits_once() {
    let (mut window, events) = window_with_log("scratch");
    window.minimize();
    window.minimize();
    assert_eq!(window.state(), LifecycleState::Minimized);
    assert_eq!(*events.borrow(), [LifecycleEventKind::Minimize]);
}

#[test]
fn maximize_restore_round_trips_the_rect() {
    let (mut window, events) = window_with_log("editor");
    let original = Rect::new(120.0, 80.0, 420.0, 260.0);
    window.set_rect(original);

    window.maximize();
    assert_eq!(window.state(), LifecycleState::Maximized);
    // The host applies whatever bounds it likes; the snapshot must survive.
    window.set_rect(Rect::new(0.0, 0.0, 1920.0, 1080.0));

    window.restore();
    assert_eq!(window.state(), LifecycleState::Normal);
    assert_eq!(window.rect(), original);
    assert_eq!(
        *events.borrow(),
        [LifecycleEventKind::Maximize, LifecycleEventKind::Restore]
    );
}

#[test]
fn restore_in_normal_state_is_a_no_op() {
    let (mut window, events) = window_with_log("idle");
    window.restore();
    assert_eq!(window.state(), LifecycleState::Normal);
    assert!(events.borrow().is_empty());
}

#[test]
fn maximize_is_rejected_while_minimized() {
    let (mut window, events) = window_with_log("hidden");
    window.minimize();
    window.maximize();
    assert_eq!(window.state(), LifecycleState::Minimized);
    assert_eq!(*events.borrow(), [LifecycleEventKind::Minimize]);
}

#[test]
fn maximize_twice_emits_once() {
    let (mut window, events) = window_with_log("full");
    window.maximize();
    window.maximize();
    assert_eq!(*events.borrow(), [LifecycleEventKind::Maximize]);
}

#[test]
fn close_emits_then_unregisters() {
    let manager = WindowManager::shared();
    let mut window = PaneWindow::new(manager.clone(), WindowOptions::titled("doomed"));
    let events: EventLog = Rc::default();
    let sink = Rc::clone(&events);
    window.on_lifecycle(move |event| sink.borrow_mut().push(event.kind));

    window.close();
    assert!(window.is_closed());
    assert!(!manager.borrow().is_registered(window.id()));

    // A closed window accepts no further transitions and emits nothing.
    window.close();
    window.minimize();
    window.restore();
    assert_eq!(*events.borrow(), [LifecycleEventKind::Close]);
}

#[test]
fn minimizing_a_maximized_window_keeps_the_snapshot_rect() {
    let (mut window, _) = window_with_log("notes");
    let original = window.rect();
    window.maximize();
    window.set_rect(Rect::new(0.0, 0.0, 1280.0, 720.0));
    window.minimize();
    assert_eq!(window.state(), LifecycleState::Minimized);
    // Back to the pre-maximize rect; a later restore leaves it untouched.
    assert_eq!(window.rect(), original);
    window.restore();
    assert_eq!(window.rect(), original);
    assert_eq!(window.state(), LifecycleState::Normal);
}

#[test]
fn taskbar_follows_minimize_restore_close() {
    let manager = WindowManager::shared();
    let taskbar = Rc::new(RefCell::new(Taskbar::new()));

    let mut windows: Vec<PaneWindow> = ["mail", "chat"]
        .into_iter()
        .map(|title| {
            let mut window = PaneWindow::new(manager.clone(), WindowOptions::titled(title));
            let observer = Rc::clone(&taskbar);
            window.on_lifecycle(move |event| observer.borrow_mut().observe(event));
            window
        })
        .collect();

    windows[0].minimize();
    windows[1].minimize();
    {
        let taskbar = taskbar.borrow();
        let titles: Vec<&str> = taskbar
            .entries()
            .iter()
            .map(|entry| entry.title.as_str())
            .collect();
        assert_eq!(titles, ["mail", "chat"]);
    }
    assert_eq!(manager.borrow().minimized_windows().len(), 2);

    windows[0].restore();
    assert_eq!(taskbar.borrow().len(), 1);
    assert_eq!(taskbar.borrow().entries()[0].title, "chat");

    // Closing a minimized window drops its entry too.
    windows[1].close();
    assert!(taskbar.borrow().is_empty());
    assert!(manager.borrow().minimized_windows().is_empty());
}
