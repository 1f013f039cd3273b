//! Host rendering capability
//!
//! The mode assembles one batch of colored triangles per frame and hands it
//! to a `Renderer`, which owns whatever GPU resources it needs.

use crate::draw::Vertex;
use glam::{Mat4, UVec2};
use thiserror::Error;

/// Errors a renderer can report while acquiring resources or drawing
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("surface lost")]
    SurfaceLost,
    #[error("surface outdated")]
    SurfaceOutdated,
    #[error("out of graphics memory")]
    OutOfMemory,
    #[error("timed out acquiring the next frame")]
    Timeout,
    #[error("no suitable graphics adapter")]
    NoAdapter,
    #[error("failed to create device: {0}")]
    Device(String),
    #[error("failed to create surface: {0}")]
    Surface(String),
    #[error("{0}")]
    Other(String),
}

/// A single batched draw: clear, then one triangle list in court space
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    pub clear_color: [f32; 4],
    pub court_to_clip: Mat4,
    pub drawable_size: UVec2,
    pub vertices: &'a [Vertex],
}

/// Something that can put a `Frame` on screen
pub trait Renderer {
    fn submit(&mut self, frame: &Frame) -> Result<(), RenderError>;
}

/// Renderer that keeps the last submitted frame, for headless hosts and tests
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    pub frames_submitted: usize,
    pub last_vertices: Vec<Vertex>,
    pub last_court_to_clip: Mat4,
    pub last_clear_color: [f32; 4],
}

impl Renderer for RecordingRenderer {
    fn submit(&mut self, frame: &Frame) -> Result<(), RenderError> {
        self.frames_submitted += 1;
        self.last_vertices.clear();
        self.last_vertices.extend_from_slice(frame.vertices);
        self.last_court_to_clip = frame.court_to_clip;
        self.last_clear_color = frame.clear_color;
        Ok(())
    }
}
