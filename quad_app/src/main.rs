//! Demo application for the quad canvas shell
//!
//! Opens the window, draws the quad, and logs every input event the
//! shell forwards. Serves as the reference for assignment code built on
//! the hooks.

use quad_canvas::prelude::*;

const CONFIG_PATH: &str = "quad_app.toml";

/// Hook implementation that logs everything it receives
#[derive(Default)]
struct QuadApp {
    keys_seen: u32,
}

impl CanvasApp for QuadApp {
    fn on_key_pressed(&mut self, key: Key) {
        self.keys_seen += 1;
        log::info!("key released: {key:?} ({} so far)", self.keys_seen);
    }

    fn on_mouse_scroll(&mut self, delta: f64) {
        log::info!("scrolled by {delta:+.1}");
    }

    fn on_mouse_drag(&mut self, dx: f64, dy: f64) {
        log::info!("dragged by ({dx:.1}, {dy:.1})");
    }

    fn on_resized(&mut self, width: i32, height: i32) {
        log::info!("resized to {width}x{height}");
    }
}

/// Use `quad_app.toml` next to the working directory if present,
/// otherwise the built-in defaults
fn load_config() -> ShellConfig {
    if std::path::Path::new(CONFIG_PATH).exists() {
        match ShellConfig::load_from_file(CONFIG_PATH) {
            Ok(config) => return config,
            Err(e) => log::warn!("ignoring {CONFIG_PATH}: {e}"),
        }
    }
    ShellConfig::default()
}

fn main() {
    quad_canvas::logging::init();

    let config = load_config();
    let mut shell = match WindowShell::init(&config, Box::new(QuadApp::default())) {
        Ok(shell) => shell,
        Err(e) => {
            log::error!("failed to initialize window shell: {e}");
            std::process::exit(1);
        }
    };

    shell.run();
    shell.shutdown();
}
