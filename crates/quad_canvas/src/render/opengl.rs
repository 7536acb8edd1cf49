//! OpenGL 3.3 graphics backend
//!
//! Loads the GL function pointers through GLFW after the context is made
//! current, then implements [`GraphicsDevice`] with direct GL calls. The
//! context is process-wide state, which is why the shell forbids a second
//! concurrent instance.

use crate::render::device::{GraphicsDevice, QuadBuffers};
use crate::render::geometry::QUAD_VERTEX_COUNT;
use crate::window::WindowHandle;
use gl::types::GLsizeiptr;
use std::ffi::CStr;

/// OpenGL implementation of the graphics device
pub(crate) struct GlDevice;

impl GlDevice {
    /// Load GL function pointers from the window's current context
    ///
    /// The window's context must already be current on this thread.
    pub(crate) fn new(window: &mut WindowHandle) -> Self {
        gl::load_with(|symbol| window.get_proc_address(symbol) as *const _);

        // Querying the version also proves the context is live
        let version = unsafe {
            let raw = gl::GetString(gl::VERSION);
            if raw.is_null() {
                "unknown".to_string()
            } else {
                CStr::from_ptr(raw.cast()).to_string_lossy().into_owned()
            }
        };
        log::info!("OpenGL version: {version}");

        Self
    }
}

impl GraphicsDevice for GlDevice {
    fn set_clear_state(&mut self, color: [f32; 4], depth: f64) {
        unsafe {
            gl::ClearColor(color[0], color[1], color[2], color[3]);
            gl::ClearDepth(depth);
        }
    }

    fn set_viewport(&mut self, width: i32, height: i32) {
        unsafe {
            gl::Viewport(0, 0, width, height);
        }
    }

    fn upload_quad(&mut self, vertices: &[f32]) -> QuadBuffers {
        let bytes: &[u8] = bytemuck::cast_slice(vertices);
        let mut vbo = 0;
        let mut vao = 0;

        unsafe {
            // Store the vertex data in a buffer object
            gl::GenBuffers(1, &mut vbo);
            gl::BindBuffer(gl::ARRAY_BUFFER, vbo);
            gl::BufferData(
                gl::ARRAY_BUFFER,
                bytes.len() as GLsizeiptr,
                bytes.as_ptr().cast(),
                gl::STATIC_DRAW,
            );

            // Bind it to attribute 0 of a vertex array object
            gl::GenVertexArrays(1, &mut vao);
            gl::BindVertexArray(vao);
            gl::EnableVertexAttribArray(0);
            gl::VertexAttribPointer(0, 3, gl::FLOAT, gl::FALSE, 0, std::ptr::null());
        }

        log::debug!("uploaded quad geometry (vbo {vbo}, vao {vao})");
        QuadBuffers { vbo, vao }
    }

    fn clear(&mut self) {
        unsafe {
            gl::Clear(gl::COLOR_BUFFER_BIT | gl::DEPTH_BUFFER_BIT);
        }
    }

    fn draw_quad(&mut self, buffers: &QuadBuffers) {
        unsafe {
            gl::BindVertexArray(buffers.vao);
            gl::DrawArrays(gl::TRIANGLES, 0, QUAD_VERTEX_COUNT);
        }
    }

    fn destroy_quad(&mut self, buffers: QuadBuffers) {
        unsafe {
            gl::DeleteBuffers(1, &buffers.vbo);
            gl::DeleteVertexArrays(1, &buffers.vao);
        }
    }
}
