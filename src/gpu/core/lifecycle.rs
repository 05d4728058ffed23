// ============================================
// Lifecycle - Жизненный цикл рендерера
// ============================================
// Uninitialized -> ContextReady -> ProgramBuilt -> GeometryUploaded
//   -> Rendering (цикл по кадрам) -> ShuttingDown -> Terminated
// Ни один этап не пропускается; провал инициализации -
// единственный досрочный выход (код -1)

/// Этап жизненного цикла
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Stage {
    Uninitialized,
    ContextReady,
    ProgramBuilt,
    GeometryUploaded,
    Rendering,
    ShuttingDown,
    Terminated,
}

/// Текущее состояние приложения + код выхода процесса
pub struct Lifecycle {
    stage: Stage,
    exit_code: i32,
    frames_rendered: u64,
}

impl Lifecycle {
    pub fn new() -> Self {
        Self {
            stage: Stage::Uninitialized,
            exit_code: 0,
            frames_rendered: 0,
        }
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn exit_code(&self) -> i32 {
        self.exit_code
    }

    pub fn frames_rendered(&self) -> u64 {
        self.frames_rendered
    }

    /// Контекст создан и GPU-устройство получено
    pub fn context_ready(&mut self) {
        debug_assert_eq!(self.stage, Stage::Uninitialized);
        self.transition(Stage::ContextReady);
    }

    /// Шейдерная программа собрана (возможно с ошибками - это не фатально)
    pub fn program_built(&mut self) {
        debug_assert_eq!(self.stage, Stage::ContextReady);
        self.transition(Stage::ProgramBuilt);
    }

    /// Геометрия загружена в GPU-буфер
    pub fn geometry_uploaded(&mut self) {
        debug_assert_eq!(self.stage, Stage::ProgramBuilt);
        self.transition(Stage::GeometryUploaded);
    }

    /// Кадр отрисован; первый кадр переводит в Rendering
    pub fn frame_rendered(&mut self) {
        debug_assert!(matches!(
            self.stage,
            Stage::GeometryUploaded | Stage::Rendering
        ));
        if self.stage == Stage::GeometryUploaded {
            self.transition(Stage::Rendering);
        }
        self.frames_rendered += 1;
    }

    /// Пользователь закрыл окно
    pub fn request_close(&mut self) {
        if !self.should_exit() {
            self.transition(Stage::ShuttingDown);
        }
    }

    /// Провал инициализации: окно или GPU-устройство не создались.
    /// Единственный путь с ненулевым кодом выхода
    pub fn fail_init(&mut self) {
        self.exit_code = -1;
        self.transition(Stage::ShuttingDown);
    }

    /// Цикл рендеринга должен остановиться
    pub fn should_exit(&self) -> bool {
        matches!(self.stage, Stage::ShuttingDown | Stage::Terminated)
    }

    /// Все GPU-объекты освобождены, оконная библиотека остановлена
    pub fn finish(&mut self) {
        self.transition(Stage::Terminated);
    }

    fn transition(&mut self, next: Stage) {
        log::debug!("lifecycle: {:?} -> {:?}", self.stage, next);
        self.stage = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Мок GPU-слоя: считает вызовы, чтобы проверить что при провале
    // создания окна GPU не трогается вообще
    struct MockGpu {
        window_ok: bool,
        gpu_calls: u32,
        frames_before_close: u64,
    }

    // Повторяет порядок действий run(): init -> программа -> геометрия ->
    // цикл кадров -> закрытие -> освобождение
    fn run_mock(gpu: &mut MockGpu) -> (i32, Stage, u64) {
        let mut lifecycle = Lifecycle::new();

        if !gpu.window_ok {
            lifecycle.fail_init();
            lifecycle.finish();
            return (lifecycle.exit_code(), lifecycle.stage(), 0);
        }

        gpu.gpu_calls += 1; // устройство
        lifecycle.context_ready();
        gpu.gpu_calls += 1; // шейдерная программа
        lifecycle.program_built();
        gpu.gpu_calls += 1; // буфер вершин
        lifecycle.geometry_uploaded();

        while !lifecycle.should_exit() {
            gpu.gpu_calls += 1; // draw call
            lifecycle.frame_rendered();
            if lifecycle.frames_rendered() >= gpu.frames_before_close {
                lifecycle.request_close();
            }
        }

        lifecycle.finish();
        (
            lifecycle.exit_code(),
            lifecycle.stage(),
            lifecycle.frames_rendered(),
        )
    }

    #[test]
    fn test_stages_advance_in_order() {
        let mut lifecycle = Lifecycle::new();
        assert_eq!(lifecycle.stage(), Stage::Uninitialized);

        lifecycle.context_ready();
        assert_eq!(lifecycle.stage(), Stage::ContextReady);

        lifecycle.program_built();
        assert_eq!(lifecycle.stage(), Stage::ProgramBuilt);

        lifecycle.geometry_uploaded();
        assert_eq!(lifecycle.stage(), Stage::GeometryUploaded);

        lifecycle.frame_rendered();
        assert_eq!(lifecycle.stage(), Stage::Rendering);

        lifecycle.request_close();
        assert_eq!(lifecycle.stage(), Stage::ShuttingDown);

        lifecycle.finish();
        assert_eq!(lifecycle.stage(), Stage::Terminated);
        assert_eq!(lifecycle.exit_code(), 0);
    }

    #[test]
    fn test_close_stops_loop_within_one_iteration() {
        let mut lifecycle = Lifecycle::new();
        lifecycle.context_ready();
        lifecycle.program_built();
        lifecycle.geometry_uploaded();

        let mut iterations = 0u64;
        while !lifecycle.should_exit() {
            lifecycle.frame_rendered();
            iterations += 1;
            if iterations == 5 {
                lifecycle.request_close();
            }
        }

        // после request_close цикл не делает ни одной лишней итерации
        assert_eq!(iterations, 5);
        assert_eq!(lifecycle.frames_rendered(), 5);
        assert_eq!(lifecycle.exit_code(), 0);
    }

    #[test]
    fn test_mock_run_draws_one_frame_and_exits_cleanly() {
        let mut gpu = MockGpu {
            window_ok: true,
            gpu_calls: 0,
            frames_before_close: 1,
        };
        let (exit_code, stage, frames) = run_mock(&mut gpu);

        assert_eq!(exit_code, 0);
        assert_eq!(stage, Stage::Terminated);
        assert_eq!(frames, 1);
    }

    #[test]
    fn test_failed_window_creation_skips_gpu_entirely() {
        let mut gpu = MockGpu {
            window_ok: false,
            gpu_calls: 0,
            frames_before_close: 1,
        };
        let (exit_code, stage, frames) = run_mock(&mut gpu);

        assert_eq!(exit_code, -1);
        assert_eq!(stage, Stage::Terminated);
        assert_eq!(frames, 0);
        assert_eq!(gpu.gpu_calls, 0);
    }

    #[test]
    fn test_repeated_cycles_do_not_leak_state() {
        // Повторные старт/стоп циклы: каждый запуск независим
        for _ in 0..3 {
            let mut gpu = MockGpu {
                window_ok: true,
                gpu_calls: 0,
                frames_before_close: 10,
            };
            let (exit_code, stage, frames) = run_mock(&mut gpu);
            assert_eq!(exit_code, 0);
            assert_eq!(stage, Stage::Terminated);
            assert_eq!(frames, 10);
        }
    }
}
