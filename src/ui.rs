//! Demo-surface rendering: window chrome, desktop background and the
//! taskbar line. Kept separate from hit-testing (`chrome`) so the two share
//! the same geometry helpers without the renderer owning any input logic.

use ratatui::Frame;
use ratatui::layout::Rect as ScreenRect;
use ratatui::style::{Color, Modifier, Style};

use crate::chrome::{self, CellRect, ChromeFlags, HitRegion};
use crate::taskbar::Taskbar;
use crate::window::{PaneWindow, WindowId};

fn header_style(focused: bool) -> Style {
    if focused {
        Style::default()
            .bg(Color::Blue)
            .fg(Color::White)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().bg(Color::DarkGray).fg(Color::Gray)
    }
}

fn border_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

fn body_style() -> Style {
    Style::default().bg(Color::Black).fg(Color::Gray)
}

fn taskbar_style() -> Style {
    Style::default().bg(Color::DarkGray).fg(Color::White)
}

/// True when the cell coordinate lies inside the screen rect.
pub fn rect_contains(rect: ScreenRect, column: u16, row: u16) -> bool {
    column >= rect.x
        && column < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}

/// Write one symbol at a signed cell coordinate, clipped to `bounds`.
fn put(frame: &mut Frame, bounds: ScreenRect, x: i32, y: i32, symbol: &str, style: Style) {
    if x < i32::from(bounds.x)
        || x >= i32::from(bounds.x) + i32::from(bounds.width)
        || y < i32::from(bounds.y)
        || y >= i32::from(bounds.y) + i32::from(bounds.height)
    {
        return;
    }
    if let Some(cell) = frame.buffer_mut().cell_mut((x as u16, y as u16)) {
        cell.set_symbol(symbol);
        cell.set_style(style);
    }
}

pub fn render_desktop(frame: &mut Frame, area: ScreenRect) {
    frame
        .buffer_mut()
        .set_style(area, Style::default().bg(Color::Indexed(236)));
}

/// Paint one window's chrome and body, clipped to the desktop area.
/// Windows are painted back-to-front by the caller, so plain overdraw
/// yields the stacking order.
pub fn render_window(frame: &mut Frame, window: &PaneWindow, desktop: ScreenRect) {
    let rect = CellRect::from_rect(window.rect());
    let focused = window.is_active();
    let border = border_style(focused);
    let header = header_style(focused);
    let (left, top) = (rect.x, rect.y);
    let (right, bottom) = (rect.right(), rect.bottom());

    for y in top..=bottom {
        for x in left..=right {
            let symbol = if x == left && y == top {
                "┌"
            } else if x == right && y == top {
                "┐"
            } else if x == left && y == bottom {
                "└"
            } else if x == right && y == bottom {
                "┘"
            } else if y == top || y == bottom {
                "─"
            } else if x == left || x == right {
                "│"
            } else {
                " "
            };
            let style = if symbol == " " { body_style() } else { border };
            put(frame, desktop, x, y, symbol, style);
        }
    }

    // Header row: background, left-aligned title, right-aligned buttons at
    // the columns chrome::hit_test resolves.
    let header_y = top + 1;
    for x in left + 1..right {
        put(frame, desktop, x, header_y, " ", header);
    }
    let flags = ChromeFlags {
        minimizable: window.minimizable(),
        maximizable: window.maximizable(),
        closable: window.closable(),
    };
    let max_title = (right - left - 8).max(0) as usize;
    for (idx, ch) in window.title().chars().take(max_title).enumerate() {
        put(
            frame,
            desktop,
            left + 2 + idx as i32,
            header_y,
            &ch.to_string(),
            header,
        );
    }
    for (region, column) in chrome::button_columns(rect, flags).into_iter().flatten() {
        let symbol = match region {
            HitRegion::MinimizeButton => "–",
            HitRegion::MaximizeButton => "□",
            HitRegion::CloseButton => "✕",
            _ => continue,
        };
        put(frame, desktop, column, header_y, symbol, header);
    }
}

/// Draw the taskbar line and return each entry's hit rect for the caller's
/// click handling.
pub fn render_taskbar(
    frame: &mut Frame,
    area: ScreenRect,
    taskbar: &Taskbar,
) -> Vec<(ScreenRect, WindowId)> {
    frame.buffer_mut().set_style(area, taskbar_style());
    let mut hits = Vec::new();
    if area.height == 0 {
        return hits;
    }
    let mut x = area.x.saturating_add(1);
    for entry in taskbar.entries() {
        let label = format!(" {} ", entry.title);
        let width = label.chars().count() as u16;
        if x.saturating_add(width) > area.x.saturating_add(area.width) {
            break;
        }
        frame.buffer_mut().set_string(
            x,
            area.y,
            &label,
            taskbar_style().add_modifier(Modifier::REVERSED),
        );
        hits.push((
            ScreenRect {
                x,
                y: area.y,
                width,
                height: 1,
            },
            entry.window,
        ));
        x = x.saturating_add(width).saturating_add(1);
    }
    hits
}
