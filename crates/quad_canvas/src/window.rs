//! GLFW window management
//!
//! Owns the GLFW instance, the window, and its event receiver. The window
//! is created with an OpenGL 3.3 context, made current immediately, and
//! configured for vsync. Exactly one live window exists per shell.
//!
//! The crate-internal [`ShellWindow`] trait is the seam between the render
//! loop and the windowing backend; tests implement it with a scripted
//! fake so the loop can run without a display.

use crate::input::ShellEvent;
use glfw::Context;
use thiserror::Error;

/// Window management errors
#[derive(Error, Debug)]
pub enum WindowError {
    /// The windowing subsystem could not be initialized
    #[error("GLFW initialization failed")]
    InitializationFailed,

    /// The window or its GL context could not be created
    #[error("window creation failed")]
    CreationFailed,
}

/// Internal trait for window backend implementations
///
/// Covers exactly what the render loop needs: the close flag, event
/// polling and draining, the primary-button state for drag detection,
/// the window size, and buffer presentation.
pub(crate) trait ShellWindow {
    /// Whether the window's close flag is set
    fn should_close(&self) -> bool;

    /// Process pending window system events
    fn poll_events(&mut self);

    /// Drain polled events, translated to shell events in arrival order
    fn drain_events(&mut self) -> Vec<ShellEvent>;

    /// Whether the primary (left) mouse button is currently held
    fn primary_button_held(&self) -> bool;

    /// Current window size in pixels
    fn size(&self) -> (i32, i32);

    /// Present the back buffer
    fn swap_buffers(&mut self);
}

/// GLFW window wrapper with an OpenGL 3.3 context
pub(crate) struct WindowHandle {
    glfw: glfw::Glfw,
    window: glfw::PWindow,
    events: glfw::GlfwReceiver<(f64, glfw::WindowEvent)>,
}

impl WindowHandle {
    /// Initialize GLFW and create the window and context
    pub(crate) fn new(
        title: &str,
        width: u32,
        height: u32,
        resizable: bool,
        vsync: bool,
    ) -> Result<Self, WindowError> {
        let mut glfw =
            glfw::init(glfw::fail_on_errors).map_err(|_| WindowError::InitializationFailed)?;

        // Request GL 3.3
        glfw.window_hint(glfw::WindowHint::ContextVersion(3, 3));
        glfw.window_hint(glfw::WindowHint::Resizable(resizable));

        let (mut window, events) = glfw
            .create_window(width, height, title, glfw::WindowMode::Windowed)
            .ok_or(WindowError::CreationFailed)?;

        // The context becomes current process-wide
        window.make_current();
        glfw.set_swap_interval(if vsync {
            glfw::SwapInterval::Sync(1)
        } else {
            glfw::SwapInterval::None
        });

        // Event kinds the shell dispatches
        window.set_size_polling(true);
        window.set_key_polling(true);
        window.set_scroll_polling(true);
        window.set_cursor_pos_polling(true);
        window.set_close_polling(true);

        log::info!("created {width}x{height} window \"{title}\"");

        Ok(Self {
            glfw,
            window,
            events,
        })
    }

    /// Look up a GL function pointer in the current context
    pub(crate) fn get_proc_address(&mut self, procname: &str) -> glfw::GLProc {
        self.window.get_proc_address(procname)
    }
}

impl ShellWindow for WindowHandle {
    fn should_close(&self) -> bool {
        self.window.should_close()
    }

    fn poll_events(&mut self) {
        self.glfw.poll_events();
    }

    fn drain_events(&mut self) -> Vec<ShellEvent> {
        glfw::flush_messages(&self.events)
            .filter_map(|(_, event)| ShellEvent::translate(event))
            .collect()
    }

    fn primary_button_held(&self) -> bool {
        self.window.get_mouse_button(glfw::MouseButtonLeft) == glfw::Action::Press
    }

    fn size(&self) -> (i32, i32) {
        self.window.get_size()
    }

    fn swap_buffers(&mut self) {
        self.window.swap_buffers();
    }
}
