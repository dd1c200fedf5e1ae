//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};
use glam::Vec2;

/// 2D vertex in screen pixels (y down) with color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    #[inline]
    pub fn at(pos: Vec2, color: [f32; 4]) -> Self {
        Self::new(pos.x, pos.y, color)
    }

    pub fn pos(&self) -> Vec2 {
        Vec2::from(self.position)
    }

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x2,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 2]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}

/// Colors for scene elements (matching the classic white-canvas look)
pub mod colors {
    pub const BACKGROUND: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
    pub const VEHICLE: [f32; 4] = [0.0, 0.0, 1.0, 1.0];
    pub const PIVOT: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
    pub const RADIUS_LINE: [f32; 4] = [0.0, 1.0, 0.0, 1.0];
    pub const SLIDER_TRACK: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
    pub const SLIDER_KNOB: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
    /// Buttons that increase a value
    pub const BUTTON_UP: [f32; 4] = [0.0, 1.0, 0.0, 1.0];
    /// Buttons that decrease a value
    pub const BUTTON_DOWN: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
    pub const WHEEL_INDICATOR: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
}
