//! Input event translation and cursor tracking
//!
//! Raw GLFW window events are narrowed into [`ShellEvent`], the small set
//! of events the shell dispatches. Everything the shell does not handle is
//! dropped at translation time.

use glfw::{Action, Key, WindowEvent};

/// Events the shell dispatches to the application
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum ShellEvent {
    /// Window resized to (width, height)
    Resized(i32, i32),
    /// A key was released
    KeyReleased(Key),
    /// Vertical scroll offset
    Scroll(f64),
    /// Cursor moved to (x, y) in window coordinates
    CursorMoved(f64, f64),
    /// The user asked the window to close
    CloseRequested,
}

impl ShellEvent {
    /// Narrow a raw window event to a shell event, if the shell handles it
    pub(crate) fn translate(event: WindowEvent) -> Option<Self> {
        match event {
            WindowEvent::Size(width, height) => Some(Self::Resized(width, height)),
            // Key hooks fire on release only; press and repeat are ignored
            WindowEvent::Key(key, _, Action::Release, _) => Some(Self::KeyReleased(key)),
            // Most scrolling is vertical, so only the y offset is kept
            WindowEvent::Scroll(_, yoffset) => Some(Self::Scroll(yoffset)),
            WindowEvent::CursorPos(x, y) => Some(Self::CursorMoved(x, y)),
            WindowEvent::Close => Some(Self::CloseRequested),
            _ => None,
        }
    }
}

/// Last-known cursor position, shared across move events
///
/// Plain shell-owned state: the render loop and all callbacks run on one
/// thread, so no synchronization is involved. The position starts at the
/// origin and updates unconditionally on every move event.
#[derive(Debug, Default)]
pub(crate) struct CursorTracker {
    last_x: f64,
    last_y: f64,
}

impl CursorTracker {
    /// Record a cursor move and return the drag delta, if any
    ///
    /// Returns `Some((dx, dy))` relative to the previous position when the
    /// primary button is held, `None` otherwise. The stored position
    /// updates either way.
    pub(crate) fn motion(&mut self, x: f64, y: f64, primary_held: bool) -> Option<(f64, f64)> {
        let delta = primary_held.then(|| (x - self.last_x, y - self.last_y));
        self.last_x = x;
        self.last_y = y;
        delta
    }
}
