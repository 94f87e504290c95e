use crate::config::SurfaceFormats;
use glam::{Mat4, Vec3};

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct GlobalUniforms {
    pub(crate) proj: [[f32; 4]; 4],
    pub(crate) view: [[f32; 4]; 4],
    pub(crate) fog: [f32; 4],
    pub(crate) point_scale: [f32; 4],
}

impl GlobalUniforms {
    pub(crate) fn new(proj: Mat4, view: Mat4, fog_color: Vec3, fog_density: f32, fovy: f32) -> Self {
        // a sprite of size s spans s * (height / 2) / depth pixels on screen
        let half_extent_per_size = (fovy * 0.5).tan() * 0.5;
        Self {
            proj: proj.to_cols_array_2d(),
            view: view.to_cols_array_2d(),
            fog: fog_color.extend(fog_density).to_array(),
            point_scale: [half_extent_per_size, 0.0, 0.0, 0.0],
        }
    }
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct ObjectUniforms {
    pub(crate) model: [[f32; 4]; 4],
    pub(crate) color: [f32; 4],
    pub(crate) params: [f32; 4],
    pub(crate) stop_offsets: [f32; 4],
    pub(crate) stops: [[f32; 4]; 4],
}

impl ObjectUniforms {
    pub(crate) fn mesh(model: Mat4, color: Vec3, opacity: f32) -> Self {
        Self {
            model: model.to_cols_array_2d(),
            color: color.extend(opacity).to_array(),
            params: [0.0; 4],
            stop_offsets: [0.0; 4],
            stops: [[0.0; 4]; 4],
        }
    }

    pub(crate) fn points(
        model: Mat4,
        color: Vec3,
        opacity: f32,
        size: f32,
        sprite: &SpriteGradient,
    ) -> Self {
        Self {
            model: model.to_cols_array_2d(),
            color: color.extend(opacity).to_array(),
            params: [size, 0.0, 0.0, 0.0],
            stop_offsets: sprite.offsets,
            stops: sprite.stops,
        }
    }
}

/// Radial colour/alpha ramp for a point sprite, centre (0) to rim (1).
#[derive(Clone, Copy, Debug)]
pub(crate) struct SpriteGradient {
    offsets: [f32; 4],
    stops: [[f32; 4]; 4],
}

impl SpriteGradient {
    /// Glow for the dots sitting on the outer shell's vertices.
    pub(crate) fn vertex_glow(formats: &SurfaceFormats) -> Self {
        let stop = |hex: u32, alpha: f32| formats.color(hex).extend(alpha).to_array();
        Self {
            offsets: [0.0, 0.2, 0.5, 1.0],
            stops: [
                stop(0xf97316, 0.9),
                stop(0xf97316, 0.4),
                stop(0xf97316, 0.1),
                stop(0xf97316, 0.0),
            ],
        }
    }

    /// Softer, warmer glow for the ambient particles.
    pub(crate) fn ember(formats: &SurfaceFormats) -> Self {
        let stop = |hex: u32, alpha: f32| formats.color(hex).extend(alpha).to_array();
        Self {
            offsets: [0.0, 0.4, 1.0, 1.0],
            stops: [
                stop(0xfb923c, 0.9),
                stop(0xf97316, 0.3),
                stop(0xf97316, 0.0),
                stop(0xf97316, 0.0),
            ],
        }
    }
}
