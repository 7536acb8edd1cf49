//! Rendering layer
//!
//! The shell issues GPU commands through the [`GraphicsDevice`] trait so
//! the render loop stays independent of the concrete backend. The only
//! real backend is OpenGL 3.3 ([`opengl::GlDevice`]); unit tests
//! substitute a recording device.

pub(crate) mod device;
pub(crate) mod geometry;
pub(crate) mod opengl;

pub(crate) use device::{GraphicsDevice, QuadBuffers};
pub(crate) use geometry::QUAD_VERTICES;
