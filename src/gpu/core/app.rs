// ============================================
// App - Главный обработчик приложения
// ============================================

use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowId},
};

use std::sync::Arc;

use crate::gpu::core::RenderResources;
use crate::gpu::systems::{InitSystem, RenderSystem};

/// Главное приложение
pub struct App {
    resources: RenderResources,
}

impl App {
    pub fn new() -> Self {
        Self {
            resources: InitSystem::create_resources(),
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.resources.window.is_some() {
            return;
        }

        let window_attrs = Window::default_attributes()
            .with_title("Triangle")
            .with_inner_size(winit::dpi::LogicalSize::new(800, 600));

        match event_loop.create_window(window_attrs) {
            Ok(window) => {
                InitSystem::init_rendering(&mut self.resources, Arc::new(window), event_loop);
            }
            Err(e) => {
                log::error!("Failed to create window: {e}");
                self.resources.lifecycle.fail_init();
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                self.resources.lifecycle.request_close();
                event_loop.exit();
            }

            WindowEvent::Resized(physical_size) => {
                if physical_size.width > 0 && physical_size.height > 0 {
                    if let Some(renderer) = &mut self.resources.renderer {
                        renderer.resize(physical_size);
                    }
                }
            }

            WindowEvent::RedrawRequested => {
                RenderSystem::render(&mut self.resources, event_loop);

                if let Some(window) = &self.resources.window {
                    window.request_redraw();
                }
            }

            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if self.resources.lifecycle.should_exit() {
            return;
        }
        if let Some(window) = &self.resources.window {
            window.request_redraw();
        }
    }
}

/// Запуск: логгер -> цикл событий -> освобождение ресурсов -> код выхода
pub fn run() -> i32 {
    // Диагностика шейдеров уходит в stdout
    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Stdout)
        .init();

    let event_loop = match EventLoop::new() {
        Ok(event_loop) => event_loop,
        Err(e) => {
            log::error!("Failed to start windowing: {e}");
            return -1;
        }
    };
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new();
    if let Err(e) = event_loop.run_app(&mut app) {
        log::error!("Event loop error: {e}");
        app.resources.release();
        return -1;
    }

    app.resources.release();
    log::info!(
        "Shutdown complete, rendered {} frames",
        app.resources.lifecycle.frames_rendered()
    );
    app.resources.lifecycle.exit_code()
}
