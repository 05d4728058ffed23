// ============================================
// Geometry - Вершины треугольника
// ============================================
// Один статический буфер: 3 вершины по xyz, загружается один раз

use bytemuck::{Pod, Zeroable};
use wgpu::util::DeviceExt;

/// Вершина треугольника (только позиция в clip space)
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct TriangleVertex {
    pub position: [f32; 3],
}

impl TriangleVertex {
    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<TriangleVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[wgpu::VertexAttribute {
                offset: 0,
                shader_location: 0,
                format: wgpu::VertexFormat::Float32x3,
            }],
        }
    }
}

/// Вершины треугольника, никогда не меняются
pub const TRIANGLE_VERTICES: [TriangleVertex; 3] = [
    TriangleVertex { position: [-0.5, -0.5, 0.0] },
    TriangleVertex { position: [0.5, -0.5, 0.0] },
    TriangleVertex { position: [0.0, 0.5, 0.0] },
];

/// Геометрия на GPU: буфер + число вершин
pub struct TriangleGeometry {
    vertex_buffer: wgpu::Buffer,
    vertex_count: u32,
}

impl TriangleGeometry {
    pub fn new(device: &wgpu::Device) -> Self {
        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Triangle Vertex Buffer"),
            contents: bytemuck::cast_slice(&TRIANGLE_VERTICES),
            usage: wgpu::BufferUsages::VERTEX,
        });

        Self {
            vertex_buffer,
            vertex_count: TRIANGLE_VERTICES.len() as u32,
        }
    }

    /// Привязка буфера ограничена временем жизни render pass,
    /// наружу состояние не утекает
    pub fn draw(&self, render_pass: &mut wgpu::RenderPass<'_>) {
        render_pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        render_pass.draw(0..self.vertex_count, 0..1);
    }
}
