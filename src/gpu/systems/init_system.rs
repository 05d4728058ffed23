// ============================================
// Init System - Инициализация рендеринга
// ============================================

use std::sync::Arc;
use winit::event_loop::ActiveEventLoop;
use winit::window::Window;

use crate::gpu::core::RenderResources;
use crate::gpu::render::Renderer;

/// Система инициализации
pub struct InitSystem;

impl InitSystem {
    /// Создать начальные ресурсы приложения
    pub fn create_resources() -> RenderResources {
        RenderResources::new()
    }

    /// Инициализация рендеринга (вызывается при resumed).
    /// Провал здесь фатален: лог + код выхода -1, цикл останавливается
    pub fn init_rendering(
        resources: &mut RenderResources,
        window: Arc<Window>,
        event_loop: &ActiveEventLoop,
    ) {
        match pollster::block_on(Renderer::new(window.clone(), &mut resources.lifecycle)) {
            Ok(renderer) => {
                window.request_redraw();
                resources.window = Some(window);
                resources.renderer = Some(renderer);
            }
            Err(e) => {
                log::error!("Failed to initialize GPU: {e}");
                resources.lifecycle.fail_init();
                event_loop.exit();
            }
        }
    }
}
