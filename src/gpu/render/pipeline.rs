// ============================================
// Pipeline - Сборка шейдерной программы
// ============================================
// Ошибки компиляции/линковки не фатальны: диагностика пишется в лог
// (до 512 байт текста драйвера), выполнение продолжается

use std::fmt;

/// Предел текста диагностики драйвера
pub const MAX_DIAGNOSTIC_BYTES: usize = 512;

/// Исходники шейдеров, встроенные на этапе сборки
pub struct ShaderSources {
    pub vertex: &'static str,
    pub fragment: &'static str,
}

impl ShaderSources {
    pub fn embedded() -> Self {
        Self {
            vertex: include_str!("../shaders/triangle_vs.wgsl"),
            fragment: include_str!("../shaders/triangle_fs.wgsl"),
        }
    }
}

/// Этап сборки, на котором возникла ошибка
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BuildStep {
    VertexCompile,
    FragmentCompile,
    ProgramLink,
}

impl BuildStep {
    fn describe(self) -> &'static str {
        match self {
            BuildStep::VertexCompile => "compiling vertex shader",
            BuildStep::FragmentCompile => "compiling fragment shader",
            BuildStep::ProgramLink => "linking shader program",
        }
    }
}

/// Итог сборки программы. Пустой отчёт - успех; непустой
/// логируется и игнорируется (программа может молча не рисовать)
#[derive(Default)]
pub struct ShaderBuildReport {
    errors: Vec<(BuildStep, String)>,
}

impl ShaderBuildReport {
    pub fn record(&mut self, step: BuildStep, diagnostic: impl fmt::Display) {
        let message = truncate_diagnostic(&diagnostic.to_string());
        self.errors.push((step, message));
    }

    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn format_entries(&self) -> Vec<String> {
        self.errors
            .iter()
            .map(|(step, message)| format!("Error {}:\n{}", step.describe(), message))
            .collect()
    }

    pub fn log(&self) {
        for entry in self.format_entries() {
            log::error!("{entry}");
        }
    }
}

/// Обрезка диагностики до лимита по границе символа
fn truncate_diagnostic(message: &str) -> String {
    if message.len() <= MAX_DIAGNOSTIC_BYTES {
        return message.to_string();
    }
    let mut end = MAX_DIAGNOSTIC_BYTES;
    while !message.is_char_boundary(end) {
        end -= 1;
    }
    message[..end].to_string()
}

/// Шейдерная программа: пайплайн с захваченной раскладкой вершин
pub struct TrianglePipeline {
    pub pipeline: wgpu::RenderPipeline,
}

impl TrianglePipeline {
    /// Компилирует оба этапа и линкует их в пайплайн под validation-scope.
    /// Пайплайн возвращается всегда, даже если отчёт не пуст
    pub async fn new(
        device: &wgpu::Device,
        surface_format: wgpu::TextureFormat,
        sources: &ShaderSources,
    ) -> (Self, ShaderBuildReport) {
        let mut report = ShaderBuildReport::default();

        device.push_error_scope(wgpu::ErrorFilter::Validation);
        let vertex_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Triangle Vertex Shader"),
            source: wgpu::ShaderSource::Wgsl(sources.vertex.into()),
        });
        if let Some(error) = device.pop_error_scope().await {
            report.record(BuildStep::VertexCompile, error);
        }

        device.push_error_scope(wgpu::ErrorFilter::Validation);
        let fragment_shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Triangle Fragment Shader"),
            source: wgpu::ShaderSource::Wgsl(sources.fragment.into()),
        });
        if let Some(error) = device.pop_error_scope().await {
            report.record(BuildStep::FragmentCompile, error);
        }

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Triangle Pipeline Layout"),
            bind_group_layouts: &[],
            push_constant_ranges: &[],
        });

        device.push_error_scope(wgpu::ErrorFilter::Validation);
        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Triangle Pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &vertex_shader,
                entry_point: Some("vs_main"),
                buffers: &[super::geometry::TriangleVertex::desc()],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &fragment_shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: surface_format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                cull_mode: None,
                ..Default::default()
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
            cache: None,
        });
        if let Some(error) = device.pop_error_scope().await {
            report.record(BuildStep::ProgramLink, error);
        }

        // Модули этапов после линковки не нужны и освобождаются здесь
        (Self { pipeline }, report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compile_error_logged_not_fatal() {
        let mut report = ShaderBuildReport::default();
        report.record(BuildStep::VertexCompile, "expected ';', found '}'");

        assert!(!report.is_clean());

        let entries = report.format_entries();
        assert_eq!(entries.len(), 1);
        assert!(entries[0].contains("Error"));
        assert!(entries[0].starts_with("Error compiling vertex shader:\n"));

        // логирование отчёта не паникует и не прерывает выполнение
        report.log();
    }

    #[test]
    fn test_link_error_message() {
        let mut report = ShaderBuildReport::default();
        report.record(BuildStep::ProgramLink, "entry point not found");

        let entries = report.format_entries();
        assert!(entries[0].starts_with("Error linking shader program:\n"));
    }

    #[test]
    fn test_diagnostic_bounded_to_512_bytes() {
        let long = "x".repeat(4096);
        let mut report = ShaderBuildReport::default();
        report.record(BuildStep::FragmentCompile, &long);

        let entry = &report.format_entries()[0];
        let message = entry.split_once('\n').unwrap().1;
        assert_eq!(message.len(), MAX_DIAGNOSTIC_BYTES);
    }

    #[test]
    fn test_truncation_respects_char_boundary() {
        // 'я' занимает 2 байта; обрезка не должна резать символ пополам
        let long = "я".repeat(1024);
        let truncated = truncate_diagnostic(&long);
        assert!(truncated.len() <= MAX_DIAGNOSTIC_BYTES);
        assert!(truncated.chars().all(|c| c == 'я'));
    }

    #[test]
    fn test_clean_report_is_silent() {
        let report = ShaderBuildReport::default();
        assert!(report.is_clean());
        assert!(report.format_entries().is_empty());
    }

    #[test]
    fn test_embedded_sources_have_entry_points() {
        let sources = ShaderSources::embedded();
        assert!(sources.vertex.contains("vs_main"));
        assert!(sources.fragment.contains("fs_main"));
    }
}
