//! Application hook trait
//!
//! Input events reach the application through [`CanvasApp`], a strategy
//! object handed to the shell at construction. Every hook defaults to a
//! no-op, so an application only implements the events it cares about.

use glfw::Key;

/// Input hooks for an application running inside the window shell
///
/// The shell invokes these synchronously on the render-loop thread while
/// polling events. The viewport is kept in sync with the window size by
/// the shell itself, before `on_resized` is invoked.
pub trait CanvasApp {
    /// A key was released
    ///
    /// Fires exactly once per release; press and repeat actions are
    /// not forwarded.
    fn on_key_pressed(&mut self, _key: Key) {}

    /// The mouse wheel was scrolled
    ///
    /// `delta` is the vertical scroll offset; horizontal scrolling is
    /// not forwarded.
    fn on_mouse_scroll(&mut self, _delta: f64) {}

    /// The cursor moved while the primary mouse button was held
    ///
    /// `(dx, dy)` is the difference between the current and previous
    /// cursor position.
    fn on_mouse_drag(&mut self, _dx: f64, _dy: f64) {}

    /// The window was resized to `width` x `height`
    fn on_resized(&mut self, _width: i32, _height: i32) {}
}
