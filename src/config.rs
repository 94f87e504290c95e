// Runtime configuration sampled once at startup from the host page.
use crate::constants::*;
use glam::Vec3;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeviceClass {
    Mobile,
    Desktop,
}

impl DeviceClass {
    /// Classify by viewport CSS width; anything narrower than 768px is mobile.
    pub fn from_viewport_width(css_width: f64) -> Self {
        if css_width < MOBILE_MAX_WIDTH_PX {
            DeviceClass::Mobile
        } else {
            DeviceClass::Desktop
        }
    }

    pub fn particle_count(self) -> usize {
        match self {
            DeviceClass::Mobile => PARTICLE_COUNT_MOBILE,
            DeviceClass::Desktop => PARTICLE_COUNT_DESKTOP,
        }
    }

    pub fn antialias(self) -> bool {
        matches!(self, DeviceClass::Desktop)
    }
}

#[derive(Clone, Debug)]
pub struct SceneConfig {
    pub device: DeviceClass,
    pub reduced_motion: bool,
    pub particle_count: usize,
    pub antialias: bool,
    pub mouse_influence: f32,
    pub scroll_multiplier: f32,
    pub camera_z: f32,
    pub camera_fov_deg: f32,
    pub camera_near: f32,
    pub camera_far: f32,
    pub max_pixel_ratio: f64,
}

impl SceneConfig {
    pub fn detect(viewport_css_width: f64, reduced_motion: bool) -> Self {
        let device = DeviceClass::from_viewport_width(viewport_css_width);
        Self {
            device,
            reduced_motion,
            particle_count: device.particle_count(),
            antialias: device.antialias(),
            mouse_influence: MOUSE_INFLUENCE,
            scroll_multiplier: SCROLL_MULTIPLIER,
            camera_z: CAMERA_Z,
            camera_fov_deg: CAMERA_FOV_DEG,
            camera_near: CAMERA_NEAR,
            camera_far: CAMERA_FAR,
            max_pixel_ratio: MAX_PIXEL_RATIO,
        }
    }

    pub fn msaa_samples(&self) -> u32 {
        if self.antialias {
            MSAA_SAMPLES
        } else {
            1
        }
    }
}

/// Window size in CSS pixels plus the device pixel ratio reported alongside it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub css_width: f64,
    pub css_height: f64,
    pub device_pixel_ratio: f64,
}

impl Viewport {
    pub fn aspect(&self) -> f32 {
        if self.css_height > 0.0 && self.css_width > 0.0 {
            (self.css_width / self.css_height) as f32
        } else {
            1.0
        }
    }

    /// Drawing-buffer size in physical pixels, never smaller than 1x1.
    pub fn backing_size(&self, max_pixel_ratio: f64) -> (u32, u32) {
        let ratio = if self.device_pixel_ratio > 0.0 {
            self.device_pixel_ratio.min(max_pixel_ratio)
        } else {
            1.0
        };
        fit_surface_size(
            self.css_width * ratio,
            self.css_height * ratio,
            MAX_SURFACE_DIMENSION,
        )
    }
}

/// Scale a physical size down uniformly until both sides fit in `max_dimension`.
/// Each side is at least 1 pixel.
pub fn fit_surface_size(width: f64, height: f64, max_dimension: u32) -> (u32, u32) {
    let max_dimension = max_dimension.max(1);
    let (w, h) = (width.max(0.0), height.max(0.0));
    let largest = w.max(h);
    let scale = if largest > max_dimension as f64 {
        max_dimension as f64 / largest
    } else {
        1.0
    };
    let side = |v: f64| ((v * scale).round() as u32).clamp(1, max_dimension);
    (side(w), side(h))
}

/// Surface storage format plus the format render passes draw through.
///
/// WebGPU canvases only offer non-sRGB storage formats, so drawing goes through
/// an sRGB view of the same texture when one exists. Palette colours are then
/// written in linear space and the view encodes them on store.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SurfaceFormats {
    pub surface: wgpu::TextureFormat,
    pub view: wgpu::TextureFormat,
}

impl SurfaceFormats {
    pub fn choose(offered: &[wgpu::TextureFormat]) -> Option<Self> {
        let surface = offered
            .iter()
            .copied()
            .find(|f| f.add_srgb_suffix().is_srgb())
            .or_else(|| offered.first().copied())?;
        Some(Self {
            surface,
            view: surface.add_srgb_suffix(),
        })
    }

    /// Extra view formats the surface must be configured with.
    pub fn view_formats(&self) -> Vec<wgpu::TextureFormat> {
        if self.view == self.surface {
            Vec::new()
        } else {
            vec![self.view]
        }
    }

    pub fn encodes_srgb(&self) -> bool {
        self.view.is_srgb()
    }

    /// A palette colour as the shaders must output it for this target.
    pub fn color(&self, hex: u32) -> Vec3 {
        if self.encodes_srgb() {
            linear_rgb(hex)
        } else {
            srgb_rgb(hex)
        }
    }
}
