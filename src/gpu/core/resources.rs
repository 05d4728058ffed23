// ============================================
// Resources - Общие ресурсы приложения
// ============================================

use std::sync::Arc;
use winit::window::Window;

use crate::gpu::core::{Lifecycle, Stage};
use crate::gpu::render::Renderer;

/// Все ресурсы приложения в одном месте
pub struct RenderResources {
    // Window & Rendering
    pub window: Option<Arc<Window>>,
    pub renderer: Option<Renderer>,

    // Текущий этап + код выхода
    pub lifecycle: Lifecycle,
}

impl RenderResources {
    pub fn new() -> Self {
        Self {
            window: None,
            renderer: None,
            lifecycle: Lifecycle::new(),
        }
    }

    /// Явное освобождение в требуемом порядке: сначала GPU-объекты
    /// (внутри Renderer: буфер -> пайплайн -> устройство/surface),
    /// затем окно. Повторный вызов - no-op
    pub fn release(&mut self) {
        self.renderer.take();
        self.window.take();
        if self.lifecycle.stage() != Stage::Terminated {
            self.lifecycle.finish();
        }
    }
}
