// ============================================
// Core - Приложение, ресурсы, жизненный цикл
// ============================================

pub mod app;
pub mod lifecycle;
pub mod resources;

pub use lifecycle::{Lifecycle, Stage};
pub use resources::RenderResources;
