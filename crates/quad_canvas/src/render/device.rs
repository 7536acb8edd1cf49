//! Backend-agnostic graphics device trait
//!
//! Internal seam between the window shell and the GPU API. The trait
//! covers exactly the commands the shell needs: clear state, viewport,
//! one-time geometry upload, per-frame clear and draw, and teardown.
//! Applications never interact with this trait directly.

/// The two GPU-side handles backing the quad
///
/// Move-only on purpose: destroying the quad consumes the handles, so a
/// pair can never be deleted twice.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct QuadBuffers {
    /// Vertex buffer object name
    pub vbo: u32,
    /// Vertex array object name
    pub vao: u32,
}

/// Internal trait for graphics backend implementations
pub(crate) trait GraphicsDevice {
    /// Set the color and depth values used by [`clear`](Self::clear)
    fn set_clear_state(&mut self, color: [f32; 4], depth: f64);

    /// Set the viewport to cover (0, 0) to (width, height)
    fn set_viewport(&mut self, width: i32, height: i32);

    /// Upload the quad vertices and return the owning handles
    ///
    /// `vertices` is a flat x/y/z triple per vertex. Called once per
    /// shell; the buffer contents never change afterwards.
    fn upload_quad(&mut self, vertices: &[f32]) -> QuadBuffers;

    /// Clear the color and depth buffers
    fn clear(&mut self);

    /// Bind the vertex array and issue the triangle draw call
    fn draw_quad(&mut self, buffers: &QuadBuffers);

    /// Release both GPU handles
    fn destroy_quad(&mut self, buffers: QuadBuffers);
}
