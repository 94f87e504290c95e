// Host-side tests for device detection, viewport sizing and colour constants.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod config {
    include!("../src/config.rs");
}

use crate::config::*;
use crate::constants::*;
use wgpu::TextureFormat;

#[test]
fn device_class_threshold() {
    assert_eq!(DeviceClass::from_viewport_width(767.9), DeviceClass::Mobile);
    assert_eq!(DeviceClass::from_viewport_width(768.0), DeviceClass::Desktop);
    assert_eq!(DeviceClass::from_viewport_width(0.0), DeviceClass::Mobile);
}

#[test]
fn mobile_drops_particles_and_antialiasing() {
    let mobile = SceneConfig::detect(390.0, false);
    assert_eq!(mobile.particle_count, 40);
    assert!(!mobile.antialias);
    assert_eq!(mobile.msaa_samples(), 1);

    let desktop = SceneConfig::detect(1280.0, true);
    assert_eq!(desktop.particle_count, 100);
    assert!(desktop.antialias);
    assert_eq!(desktop.msaa_samples(), 4);
    assert!(desktop.reduced_motion);
    assert_eq!(desktop.mouse_influence, 0.6);
    assert_eq!(desktop.scroll_multiplier, 0.0012);
}

#[test]
fn backing_size_caps_pixel_ratio() {
    let vp = Viewport {
        css_width: 1200.0,
        css_height: 800.0,
        device_pixel_ratio: 3.0,
    };
    assert_eq!(vp.backing_size(MAX_PIXEL_RATIO), (2400, 1600));
    assert!((vp.aspect() - 1.5).abs() < 1e-6);

    let vp = Viewport {
        device_pixel_ratio: 1.5,
        ..vp
    };
    assert_eq!(vp.backing_size(MAX_PIXEL_RATIO), (1800, 1200));
}

#[test]
fn degenerate_viewport_is_still_drawable() {
    let vp = Viewport {
        css_width: 0.0,
        css_height: 0.0,
        device_pixel_ratio: 0.0,
    };
    assert_eq!(vp.backing_size(MAX_PIXEL_RATIO), (1, 1));
    assert_eq!(vp.aspect(), 1.0);
}

#[test]
fn palette_converts_to_linear() {
    let bg = linear_rgb(COLOR_BACKGROUND);
    assert!(bg.max_element() < 0.02);
    let accent = linear_rgb(COLOR_ACCENT);
    assert!((accent.x - 0.947).abs() < 0.01);
    assert!(accent.x > accent.y && accent.y > accent.z);
    assert!(linear_rgb(0xffffff).abs_diff_eq(glam::Vec3::ONE, 1e-5));
}

fn encode_srgb(c: f32) -> f32 {
    if c <= 0.003_130_8 {
        c * 12.92
    } else {
        1.055 * c.powf(1.0 / 2.4) - 0.055
    }
}

/// The 8-bit value a canvas ends up holding for a colour the shader outputs.
fn stored_bytes(formats: &SurfaceFormats, hex: u32) -> [u8; 3] {
    let c = formats.color(hex);
    let store = |v: f32| {
        let v = if formats.encodes_srgb() {
            encode_srgb(v)
        } else {
            v
        };
        (v.clamp(0.0, 1.0) * 255.0).round() as u8
    };
    [store(c.x), store(c.y), store(c.z)]
}

fn hex_bytes(hex: u32) -> [u8; 3] {
    [(hex >> 16) as u8, (hex >> 8) as u8, hex as u8]
}

#[test]
fn webgpu_canvas_draws_through_srgb_view() {
    let offered = [
        TextureFormat::Bgra8Unorm,
        TextureFormat::Rgba8Unorm,
        TextureFormat::Rgba16Float,
    ];
    let formats = SurfaceFormats::choose(&offered).unwrap();
    assert_eq!(formats.surface, TextureFormat::Bgra8Unorm);
    assert_eq!(formats.view, TextureFormat::Bgra8UnormSrgb);
    assert_eq!(formats.view_formats(), vec![TextureFormat::Bgra8UnormSrgb]);
    assert!(formats.encodes_srgb());
}

#[test]
fn srgb_surface_needs_no_extra_view() {
    let formats = SurfaceFormats::choose(&[TextureFormat::Rgba8UnormSrgb]).unwrap();
    assert_eq!(formats.view, TextureFormat::Rgba8UnormSrgb);
    assert!(formats.view_formats().is_empty());
    assert!(SurfaceFormats::choose(&[]).is_none());
}

#[test]
fn palette_is_displayed_as_authored() {
    let targets = [
        vec![TextureFormat::Bgra8Unorm, TextureFormat::Rgba16Float],
        vec![TextureFormat::Rgba8UnormSrgb],
        vec![TextureFormat::Rgba16Float],
    ];
    for offered in &targets {
        let formats = SurfaceFormats::choose(offered).unwrap();
        for hex in [COLOR_BACKGROUND, COLOR_ACCENT, COLOR_COPPER, 0xfb923c] {
            assert_eq!(
                stored_bytes(&formats, hex),
                hex_bytes(hex),
                "{hex:06x} on {formats:?}"
            );
        }
    }
}

#[test]
fn float_only_surface_takes_encoded_colours() {
    let formats = SurfaceFormats::choose(&[TextureFormat::Rgba16Float]).unwrap();
    assert!(!formats.encodes_srgb());
    assert_eq!(formats.color(COLOR_ACCENT), srgb_rgb(COLOR_ACCENT));
}

#[test]
fn surface_size_fits_texture_limit() {
    assert_eq!(fit_surface_size(10_000.0, 5_000.0, 8192), (8192, 4096));
    assert_eq!(fit_surface_size(1920.0, 1080.0, 8192), (1920, 1080));
    assert_eq!(fit_surface_size(0.0, 0.0, 8192), (1, 1));
    assert_eq!(fit_surface_size(3000.0, 20_000.0, 4096), (614, 4096));

    let ultrawide = Viewport {
        css_width: 5120.0,
        css_height: 1440.0,
        device_pixel_ratio: 2.0,
    };
    let (w, h) = ultrawide.backing_size(MAX_PIXEL_RATIO);
    assert_eq!(w, MAX_SURFACE_DIMENSION);
    assert_eq!(h, 2304);
}
