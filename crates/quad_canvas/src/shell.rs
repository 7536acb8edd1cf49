//! The window shell
//!
//! [`WindowShell`] owns the window, the graphics device and the quad
//! geometry, runs the blocking poll-render loop, and forwards input to
//! the application hooks. Its lifecycle is encoded in ownership: the
//! shell exists between [`WindowShell::init`] and
//! [`WindowShell::shutdown`], and `shutdown` consumes it, so misuse of
//! the teardown path is a compile error rather than a double free.

use crate::app::CanvasApp;
use crate::config::ShellConfig;
use crate::input::{CursorTracker, ShellEvent};
use crate::render::{opengl::GlDevice, GraphicsDevice, QuadBuffers, QUAD_VERTICES};
use crate::window::{ShellWindow, WindowError, WindowHandle};
use thiserror::Error;

/// Shell-level errors
///
/// Initialization is the only fallible operation; everything after it is
/// assumed to succeed.
#[derive(Error, Debug)]
pub enum ShellError {
    /// The windowing subsystem or window could not be initialized
    #[error("shell initialization failed: {0}")]
    Initialization(#[from] WindowError),
}

/// A window with a GL context that draws a single quad and dispatches
/// input events to application hooks
pub struct WindowShell {
    window: Box<dyn ShellWindow>,
    device: Box<dyn GraphicsDevice>,
    buffers: QuadBuffers,
    cursor: CursorTracker,
    app: Box<dyn CanvasApp>,
}

impl WindowShell {
    /// Create the window and GL context, register event polling, set the
    /// viewport and clear state, and upload the quad geometry
    ///
    /// The GL context becomes current process-wide; do not create a
    /// second shell while one is live.
    ///
    /// # Errors
    ///
    /// Returns [`ShellError::Initialization`] if GLFW or the window
    /// cannot be initialized. Callers are expected to treat this as
    /// fatal; there is no recovery path.
    pub fn init(config: &ShellConfig, app: Box<dyn CanvasApp>) -> Result<Self, ShellError> {
        log::info!("initializing window shell");
        let mut window = WindowHandle::new(
            &config.title,
            config.width,
            config.height,
            config.resizable,
            config.vsync,
        )?;
        let device = GlDevice::new(&mut window);
        Ok(Self::assemble(
            Box::new(window),
            Box::new(device),
            config,
            app,
        ))
    }

    /// Wire up an already-created window and device
    fn assemble(
        window: Box<dyn ShellWindow>,
        mut device: Box<dyn GraphicsDevice>,
        config: &ShellConfig,
        app: Box<dyn CanvasApp>,
    ) -> Self {
        let (width, height) = window.size();
        device.set_clear_state(config.clear_color, config.clear_depth);
        device.set_viewport(width, height);
        let buffers = device.upload_quad(&QUAD_VERTICES);

        Self {
            window,
            device,
            buffers,
            cursor: CursorTracker::default(),
            app,
        }
    }

    /// Run the blocking render loop until the window's close flag is set
    ///
    /// Each iteration polls pending events, dispatches them synchronously
    /// on the calling thread, clears the color and depth buffers, draws
    /// the quad, and presents the frame. If the close flag is already set
    /// on entry, returns without drawing anything.
    pub fn run(&mut self) {
        log::info!("entering render loop");
        while !self.window.should_close() {
            self.window.poll_events();
            for event in self.window.drain_events() {
                let primary_held = self.window.primary_button_held();
                self.dispatch(event, primary_held);
            }

            self.device.clear();
            self.device.draw_quad(&self.buffers);
            self.window.swap_buffers();
        }
        log::info!("close flag set, leaving render loop");
    }

    /// Release the two GPU handles, then destroy the window
    ///
    /// Consumes the shell: a second call or a call on an uninitialized
    /// shell cannot be expressed.
    pub fn shutdown(mut self) {
        log::info!("shutting down window shell");
        self.device.destroy_quad(self.buffers);
        // The window and context are destroyed when `self.window` drops
    }

    fn dispatch(&mut self, event: ShellEvent, primary_held: bool) {
        match event {
            ShellEvent::Resized(width, height) => {
                log::debug!("window resized to {width}x{height}");
                // The shell owns the viewport invariant; the hook only observes
                self.device.set_viewport(width, height);
                self.app.on_resized(width, height);
            }
            ShellEvent::KeyReleased(key) => self.app.on_key_pressed(key),
            ShellEvent::Scroll(delta) => self.app.on_mouse_scroll(delta),
            ShellEvent::CursorMoved(x, y) => {
                if let Some((dx, dy)) = self.cursor.motion(x, y, primary_held) {
                    self.app.on_mouse_drag(dx, dy);
                }
            }
            ShellEvent::CloseRequested => log::debug!("window close requested"),
        }
    }
}
