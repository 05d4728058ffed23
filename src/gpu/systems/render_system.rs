// ============================================
// Render System - Система рендеринга
// ============================================

use winit::event_loop::ActiveEventLoop;

use crate::gpu::core::RenderResources;

/// Система рендеринга
pub struct RenderSystem;

impl RenderSystem {
    /// Отрисовка одного кадра
    pub fn render(resources: &mut RenderResources, event_loop: &ActiveEventLoop) {
        // После запроса закрытия в очереди может остаться RedrawRequested
        if resources.lifecycle.should_exit() {
            return;
        }
        let Some(renderer) = &mut resources.renderer else { return };

        match renderer.render() {
            Ok(()) => {
                resources.lifecycle.frame_rendered();
            }
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                let size = renderer.size();
                renderer.resize(size);
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("GPU out of memory, exiting");
                resources.lifecycle.request_close();
                event_loop.exit();
            }
            Err(e) => log::warn!("Render error: {e:?}"),
        }
    }
}
