// Visual tuning constants for the parallax background.
//
// Construction values and per-frame animation coefficients live here so the
// animator and the renderer read the same numbers.
use glam::Vec3;

// Mount point
pub const MOUNT_ELEMENT_ID: &str = "parallax-canvas";

// Device classes
pub const MOBILE_MAX_WIDTH_PX: f64 = 768.0; // strictly below => mobile
pub const PARTICLE_COUNT_MOBILE: usize = 40;
pub const PARTICLE_COUNT_DESKTOP: usize = 100;
pub const MSAA_SAMPLES: u32 = 4;
pub const MAX_PIXEL_RATIO: f64 = 2.0;
pub const MAX_SURFACE_DIMENSION: u32 = 8192; // WebGPU's guaranteed 2D texture limit

// Camera
pub const CAMERA_Z: f32 = 18.0;
pub const CAMERA_FOV_DEG: f32 = 50.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 200.0;
pub const MOUSE_INFLUENCE: f32 = 0.6;
pub const SCROLL_MULTIPLIER: f32 = 0.0012;
pub const CAMERA_Y_POINTER_FACTOR: f32 = 0.4;
pub const LOOK_AT_SCROLL_FACTOR: f32 = 0.4;

// Signal smoothing (fraction of the remaining gap closed per frame)
pub const POINTER_SMOOTHING: f32 = 0.03;
pub const SCROLL_SMOOTHING: f32 = 0.06;
pub const TILT_SMOOTHING: f32 = 0.03;

// Palette (sRGB)
pub const COLOR_ACCENT: u32 = 0xf97316;
pub const COLOR_COPPER: u32 = 0xd4845a;
pub const COLOR_BACKGROUND: u32 = 0x0c0e19;
pub const FOG_DENSITY: f32 = 0.025;

// Central object layout
pub const GROUP_REST_Y: f32 = 1.0;
pub const OUTER_RADIUS: f32 = 4.5;
pub const OUTER_DETAIL: u32 = 2;
pub const OUTER_OPACITY: f32 = 0.15;
pub const INNER_RADIUS: f32 = 3.2;
pub const INNER_DETAIL: u32 = 1;
pub const INNER_OPACITY: f32 = 0.1;
pub const CORE_RADIUS: f32 = 1.0;
pub const CORE_SEGMENTS: u32 = 32;
pub const CORE_OPACITY: f32 = 0.06;
pub const DOT_SIZE: f32 = 0.35;
pub const DOT_OPACITY: f32 = 0.8;
pub const VERTEX_DEDUP_SCALE: f32 = 1000.0; // 3 decimal places

// Orbital rings
pub const RING_RADIUS: f32 = 6.5;
pub const RING_TUBE: f32 = 0.015;
pub const RING_RADIAL_SEGMENTS: u32 = 8;
pub const RING_TUBULAR_SEGMENTS: u32 = 120;
pub const RING_BASE_Z: [f32; 2] = [0.3, -0.8]; // ring1, ring2
pub const RING3_BASE_Y: f32 = 0.5;
pub const RING_OPACITY: [f32; 3] = [0.08, 0.05, 0.04];
pub const RING_SCALE: [f32; 3] = [1.0, 1.15, 0.85];

// Base rotation rates (rad/s) and amplitudes
pub const OUTER_SPIN_Y: f32 = 0.15;
pub const OUTER_WOBBLE_FREQ: f32 = 0.08;
pub const OUTER_WOBBLE_AMP: f32 = 0.2;
pub const INNER_SPIN_Y: f32 = -0.1;
pub const INNER_SPIN_Z: f32 = 0.12;
pub const RING_SPIN: [f32; 3] = [0.08, -0.05, 0.06];

// Pointer tilt of the whole group
pub const TILT_X_PER_POINTER_Y: f32 = 0.15;
pub const TILT_Y_PER_POINTER_X: f32 = 0.2;

// Scroll response
pub const SCROLL_SCALE_GAIN: f32 = 0.3;
pub const SCROLL_DRIFT_FACTOR: f32 = 0.6;
pub const SCROLL_EXTRA_SPIN: f32 = std::f32::consts::FRAC_PI_2;
pub const OUTER_OPACITY_BASE: f32 = 0.12;
pub const OUTER_OPACITY_SCROLL: f32 = 0.08;
pub const INNER_OPACITY_BASE: f32 = 0.08;
pub const INNER_OPACITY_SCROLL: f32 = 0.06;

// Breathing displacement
pub const BREATH_AMPLITUDE: f32 = 0.12;
pub const BREATH_FREQ_X: f32 = 0.5;
pub const BREATH_FREQ_Y: f32 = 0.3;
pub const BREATH_SPATIAL: f32 = 2.0;

// Pulses: base + sin(t * freq) * amp
pub const CORE_OPACITY_PULSE: [f32; 3] = [0.04, 0.8, 0.03];
pub const CORE_SCALE_PULSE: [f32; 3] = [1.0, 0.5, 0.15];
pub const DOT_OPACITY_PULSE: [f32; 3] = [0.5, 1.2, 0.3];
pub const DOT_SIZE_PULSE: [f32; 3] = [0.3, 0.6, 0.1];

// Ambient particles
pub const PARTICLE_SPAN: f32 = 15.0; // x and y live in [-SPAN, SPAN]
pub const PARTICLE_DEPTH_MIN: f32 = -15.0;
pub const PARTICLE_DEPTH_MAX: f32 = 5.0;
pub const PARTICLE_SPEED_MIN: f32 = 0.003;
pub const PARTICLE_SPEED_RANGE: f32 = 0.01;
pub const PARTICLE_SIZE: f32 = 0.18;
pub const PARTICLE_OPACITY: f32 = 0.5;

/// Unpack a `0xRRGGBB` colour into sRGB-encoded channels in [0, 1].
pub fn srgb_rgb(hex: u32) -> Vec3 {
    let channel = |shift: u32| ((hex >> shift) & 0xff) as f32 / 255.0;
    Vec3::new(channel(16), channel(8), channel(0))
}

/// Convert a packed sRGB colour into linear RGB for an sRGB render target.
pub fn linear_rgb(hex: u32) -> Vec3 {
    let channel = |shift: u32| {
        let c = ((hex >> shift) & 0xff) as f32 / 255.0;
        if c <= 0.04045 {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        }
    };
    Vec3::new(channel(16), channel(8), channel(0))
}
