// ============================================
// GPU Module - Треугольник на wgpu
// ============================================
// Окно + контекст + шейдерная пара + один буфер вершин,
// цикл перерисовки до закрытия окна

pub mod core;
pub mod render;
pub mod systems;

pub use self::core::app::run;
