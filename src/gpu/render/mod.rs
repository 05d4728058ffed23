// ============================================
// Render - Пайплайн, геометрия, рендерер
// ============================================

pub mod geometry;
pub mod pipeline;
pub mod renderer;

pub use geometry::{TriangleGeometry, TriangleVertex, TRIANGLE_VERTICES};
pub use pipeline::{ShaderBuildReport, ShaderSources, TrianglePipeline};
pub use renderer::{InitError, Renderer};
