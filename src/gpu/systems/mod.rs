// ============================================
// Systems - Инициализация и рендеринг
// ============================================

pub mod init_system;
pub mod render_system;

pub use init_system::InitSystem;
pub use render_system::RenderSystem;
