use std::cell::RefCell;
use std::io;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::sync::Arc;
use std::time::{Duration, Instant};

use clap::Parser;
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyModifiers, MouseButton,
    MouseEvent, MouseEventKind,
};
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{execute, terminal};
use indoc::indoc;
use ratatui::Frame;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Rect as ScreenRect;
use tracing::Level;

use pane_wm::chrome::{self, CELL_HEIGHT, CELL_WIDTH, CellRect, ChromeFlags, HitRegion};
use pane_wm::geometry::Rect;
use pane_wm::pointer::NullCapture;
use pane_wm::pointer::PointerId;
use pane_wm::taskbar::Taskbar;
use pane_wm::ui;
use pane_wm::window::{
    LifecycleState, PaneWindow, SharedWindowManager, WindowId, WindowManager, WindowOptions,
};

/// The terminal reports a single mouse stream, so the demo runs one
/// synthetic pointer.
const MOUSE_POINTER: PointerId = PointerId(0);

const DOUBLE_CLICK_WINDOW: Duration = Duration::from_millis(500);

#[derive(Debug, Parser)]
#[command(
    name = "pane-wm",
    about = "Floating pane windows on a terminal surface.",
    after_help = indoc! {"
        Mouse controls:
          title bar        drag to move, double-click to maximize/restore
          window border    drag to resize (eight directions)
          header buttons   minimize (–), maximize (□), close (✕)
          taskbar entry    click to restore a minimized window

        Ctrl+Q quits.
    "}
)]
struct Args {
    /// Number of demo windows to open.
    #[arg(long, default_value_t = 3)]
    windows: usize,

    /// Write tracing output to this file (the terminal owns stderr).
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> io::Result<()> {
    let args = Args::parse();
    if let Some(path) = &args.log_file {
        init_logging(path);
    }
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    terminal::enable_raw_mode()?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &args);

    terminal::disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture)?;
    result
}

fn init_logging(path: &Path) {
    let Ok(file) = std::fs::File::create(path) else {
        return;
    };
    let _ = tracing_subscriber::fmt()
        .with_max_level(Level::DEBUG)
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init();
}

fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, args: &Args) -> io::Result<()> {
    let mut app = DemoApp::new(args.windows);
    loop {
        let size = terminal.size()?;
        app.desktop = ScreenRect {
            x: 0,
            y: 0,
            width: size.width,
            height: size.height.saturating_sub(1),
        };
        app.sync_maximized();
        terminal.draw(|frame| app.draw(frame))?;
        app.prune_closed();
        if app.windows.is_empty() {
            return Ok(());
        }

        if !event::poll(Duration::from_millis(16))? {
            continue;
        }
        loop {
            match event::read()? {
                Event::Key(key)
                    if key.code == KeyCode::Char('q')
                        && key.modifiers.contains(KeyModifiers::CONTROL) =>
                {
                    return Ok(());
                }
                Event::Mouse(mouse) => app.handle_mouse(mouse),
                _ => {}
            }
            // Drain bursts (mouse drags) before redrawing.
            if !event::poll(Duration::ZERO)? {
                break;
            }
        }
    }
}

struct DemoApp {
    manager: SharedWindowManager,
    windows: Vec<PaneWindow>,
    taskbar: Rc<RefCell<Taskbar>>,
    capture: NullCapture,
    last_header_click: Option<(WindowId, Instant)>,
    taskbar_hits: Vec<(ScreenRect, WindowId)>,
    desktop: ScreenRect,
}

impl DemoApp {
    fn new(count: usize) -> Self {
        let manager = WindowManager::shared();
        let taskbar = Rc::new(RefCell::new(Taskbar::new()));
        let mut windows = Vec::new();
        for index in 0..count.max(1) {
            let offset = index as f64;
            let options = WindowOptions::titled(format!("Window {}", index + 1)).with_rect(
                Rect::new(60.0 + offset * 48.0, 40.0 + offset * 36.0, 300.0, 200.0),
            );
            let mut window = PaneWindow::new(manager.clone(), options);
            let observer = Rc::clone(&taskbar);
            window.on_lifecycle(move |event| observer.borrow_mut().observe(event));
            windows.push(window);
        }
        Self {
            manager,
            windows,
            taskbar,
            capture: NullCapture,
            last_header_click: None,
            taskbar_hits: Vec::new(),
            desktop: ScreenRect::default(),
        }
    }

    fn window_mut(&mut self, id: WindowId) -> Option<&mut PaneWindow> {
        self.windows.iter_mut().find(|window| window.id() == id)
    }

    fn desktop_bounds(&self) -> Rect {
        Rect::new(
            f64::from(self.desktop.x) * CELL_WIDTH,
            f64::from(self.desktop.y) * CELL_HEIGHT,
            f64::from(self.desktop.width) * CELL_WIDTH,
            f64::from(self.desktop.height) * CELL_HEIGHT,
        )
    }

    /// Maximized bounds are a host concern: keep maximized windows glued to
    /// the desktop area, including across terminal resizes.
    fn sync_maximized(&mut self) {
        let bounds = self.desktop_bounds();
        for window in &mut self.windows {
            if window.state() == LifecycleState::Maximized {
                window.set_rect(bounds);
            }
        }
    }

    fn prune_closed(&mut self) {
        self.windows.retain(|window| !window.is_closed());
    }

    fn draw(&mut self, frame: &mut Frame) {
        let area = frame.area();
        let desktop = ScreenRect {
            height: area.height.saturating_sub(1),
            ..area
        };
        let bar = ScreenRect {
            y: area.y.saturating_add(desktop.height),
            height: area.height - desktop.height,
            ..area
        };
        self.desktop = desktop;
        ui::render_desktop(frame, desktop);
        let order = self.manager.borrow().stacking_order();
        for id in order {
            let Some(window) = self.windows.iter().find(|window| window.id() == id) else {
                continue;
            };
            if window.state() == LifecycleState::Minimized {
                continue;
            }
            ui::render_window(frame, window, desktop);
        }
        self.taskbar_hits = ui::render_taskbar(frame, bar, &self.taskbar.borrow());
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => self.on_pointer_down(mouse.column, mouse.row),
            MouseEventKind::Drag(MouseButton::Left) => self.on_pointer_move(mouse.column, mouse.row),
            MouseEventKind::Up(MouseButton::Left) => self.on_pointer_up(),
            _ => {}
        }
    }

    fn on_pointer_down(&mut self, column: u16, row: u16) {
        if let Some(&(_, id)) = self
            .taskbar_hits
            .iter()
            .find(|(rect, _)| ui::rect_contains(*rect, column, row))
        {
            if let Some(window) = self.window_mut(id) {
                window.restore();
            }
            return;
        }

        let order = self.manager.borrow().stacking_order();
        let (px, py) = chrome::cell_to_point(column, row);
        // Topmost window under the pointer consumes the press.
        for id in order.into_iter().rev() {
            let Some(index) = self.windows.iter().position(|window| window.id() == id) else {
                continue;
            };
            if self.windows[index].state() == LifecycleState::Minimized {
                continue;
            }
            let window = &mut self.windows[index];
            let rect = CellRect::from_rect(window.rect());
            let flags = ChromeFlags {
                minimizable: window.minimizable(),
                maximizable: window.maximizable(),
                closable: window.closable(),
            };
            let Some(region) = chrome::hit_test(rect, flags, column, row) else {
                continue;
            };
            match region {
                HitRegion::Drag => {
                    let now = Instant::now();
                    let double = self
                        .last_header_click
                        .take()
                        .is_some_and(|(last, at)| {
                            last == id && now.duration_since(at) <= DOUBLE_CLICK_WINDOW
                        });
                    if double && window.maximizable() {
                        window.toggle_maximize();
                        self.sync_maximized();
                    } else {
                        window.begin_drag(MOUSE_POINTER, px, py, &mut self.capture);
                        self.last_header_click = Some((id, now));
                    }
                }
                HitRegion::MinimizeButton => {
                    window.focus();
                    window.minimize();
                }
                HitRegion::MaximizeButton => {
                    window.focus();
                    window.toggle_maximize();
                    self.sync_maximized();
                }
                HitRegion::CloseButton => window.close(),
                HitRegion::Resize(handle) => {
                    window.begin_resize(MOUSE_POINTER, px, py, handle, &mut self.capture);
                }
                HitRegion::Content => window.focus(),
            }
            break;
        }
    }

    fn on_pointer_move(&mut self, column: u16, row: u16) {
        let (px, py) = chrome::cell_to_point(column, row);
        for window in &mut self.windows {
            if window.pointer_moved(MOUSE_POINTER, px, py) {
                break;
            }
        }
    }

    fn on_pointer_up(&mut self) {
        for window in &mut self.windows {
            window.pointer_released(MOUSE_POINTER, &mut self.capture);
        }
    }
}
