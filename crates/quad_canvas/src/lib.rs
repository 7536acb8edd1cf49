//! # Quad Canvas
//!
//! A minimal windowed OpenGL shell for teaching and experimentation.
//!
//! The shell opens a GLFW window with an OpenGL 3.3 context, draws a single
//! static quad every frame, and forwards raw input events (key release,
//! mouse scroll, mouse drag, resize) to an application-provided hook trait.
//! There is deliberately nothing else: no scene graph, no asset loading,
//! no shader management. Assignments build on top of the hooks.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use quad_canvas::prelude::*;
//!
//! #[derive(Default)]
//! struct Sketch;
//!
//! impl CanvasApp for Sketch {
//!     fn on_key_pressed(&mut self, key: Key) {
//!         println!("key released: {key:?}");
//!     }
//!
//!     fn on_mouse_drag(&mut self, dx: f64, dy: f64) {
//!         println!("dragged by ({dx}, {dy})");
//!     }
//! }
//!
//! fn main() -> Result<(), ShellError> {
//!     quad_canvas::logging::init();
//!     let config = ShellConfig::default();
//!     let mut shell = WindowShell::init(&config, Box::new(Sketch))?;
//!     shell.run();
//!     shell.shutdown();
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names)]

pub mod app;
pub mod config;
pub mod logging;
pub mod shell;

mod input;
mod render;
mod window;

pub use app::CanvasApp;
pub use config::{Config, ConfigError, ShellConfig};
pub use shell::{ShellError, WindowShell};
pub use window::WindowError;

/// Common imports for shell users
pub mod prelude {
    pub use crate::{
        app::CanvasApp,
        config::{Config, ConfigError, ShellConfig},
        shell::{ShellError, WindowShell},
    };
    pub use glfw::Key;
}
