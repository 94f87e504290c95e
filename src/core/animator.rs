use super::displacement::VertexDisplacementField;
use super::scene::SceneGraph;
use super::signals::{ease_toward, InputSignals};
use crate::config::SceneConfig;
use crate::constants::*;
use glam::{Vec2, Vec3};

/// Everything one frame of animation depends on.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameInputs {
    pub t: f32,
    pub pointer: Vec2,
    pub scroll: f32,
    pub scroll_progress: f32,
}

impl FrameInputs {
    /// Snapshot the smoothed signals; call after `InputSignals::tick`.
    pub fn sample(t: f32, signals: &InputSignals) -> Self {
        Self {
            t,
            pointer: signals.pointer.value,
            scroll: signals.scroll.value,
            scroll_progress: signals.scroll_progress(),
        }
    }
}

#[inline]
fn oscillate([base, freq, amp]: [f32; 3], t: f32) -> f32 {
    base + (t * freq).sin() * amp
}

/// Sole writer of the scene graph and of the outer shell's displaced vertices.
pub struct SceneAnimator {
    scene: SceneGraph,
    field: VertexDisplacementField,
    mouse_influence: f32,
    scroll_multiplier: f32,
    reduced_motion: bool,
}

impl SceneAnimator {
    pub fn new(scene: SceneGraph, outer_vertices: Vec<Vec3>, config: &SceneConfig) -> Self {
        Self {
            scene,
            field: VertexDisplacementField::new(outer_vertices),
            mouse_influence: config.mouse_influence,
            scroll_multiplier: config.scroll_multiplier,
            reduced_motion: config.reduced_motion,
        }
    }

    pub fn scene(&self) -> &SceneGraph {
        &self.scene
    }

    pub fn displaced_vertices(&self) -> &[Vec3] {
        self.field.displaced()
    }

    pub fn field(&self) -> &VertexDisplacementField {
        &self.field
    }

    pub fn set_aspect(&mut self, aspect: f32) {
        self.scene.camera.aspect = aspect;
    }

    /// Write every animated property for one frame.
    pub fn animate(&mut self, input: &FrameInputs) {
        if !self.reduced_motion {
            self.follow_pointer(input);
        }
        self.rotate_shells(input.t);
        self.tilt_group(input.pointer);
        self.apply_scroll(input);
        self.ramp_opacity(input.scroll_progress);
        self.field.update(input.t);
        self.pulse_glow(input.t);
        self.spin_rings(input.t);
    }

    fn follow_pointer(&mut self, input: &FrameInputs) {
        let scroll_offset = input.scroll * self.scroll_multiplier;
        let camera = &mut self.scene.camera;
        camera.position.x = input.pointer.x * self.mouse_influence;
        camera.position.y =
            -input.pointer.y * self.mouse_influence * CAMERA_Y_POINTER_FACTOR - scroll_offset;
        camera.target = Vec3::new(0.0, -scroll_offset * LOOK_AT_SCROLL_FACTOR, 0.0);
    }

    fn rotate_shells(&mut self, t: f32) {
        let outer = &mut self.scene.outer_shell.transform.rotation;
        outer.y = t * OUTER_SPIN_Y;
        outer.x = (t * OUTER_WOBBLE_FREQ).sin() * OUTER_WOBBLE_AMP;

        let inner = &mut self.scene.inner_shell.transform.rotation;
        inner.y = t * INNER_SPIN_Y;
        inner.z = t * INNER_SPIN_Z;

        // the dot field has no rotation of its own
        self.scene.dots.transform.rotation = self.scene.outer_shell.transform.rotation;
    }

    fn tilt_group(&mut self, pointer: Vec2) {
        let rotation = &mut self.scene.group.rotation;
        rotation.x = ease_toward(rotation.x, pointer.y * TILT_X_PER_POINTER_Y, TILT_SMOOTHING);
        rotation.y = ease_toward(rotation.y, pointer.x * TILT_Y_PER_POINTER_X, TILT_SMOOTHING);
    }

    fn apply_scroll(&mut self, input: &FrameInputs) {
        let group = &mut self.scene.group;
        group.set_uniform_scale(1.0 + input.scroll_progress * SCROLL_SCALE_GAIN);
        group.position.y =
            GROUP_REST_Y - input.scroll * self.scroll_multiplier * SCROLL_DRIFT_FACTOR;
        // overwrites whatever z the shell had
        self.scene.outer_shell.transform.rotation.z = input.scroll_progress * SCROLL_EXTRA_SPIN;
    }

    fn ramp_opacity(&mut self, progress: f32) {
        self.scene.outer_shell.opacity = OUTER_OPACITY_BASE + progress * OUTER_OPACITY_SCROLL;
        self.scene.inner_shell.opacity = INNER_OPACITY_BASE + progress * INNER_OPACITY_SCROLL;
    }

    fn pulse_glow(&mut self, t: f32) {
        let core = &mut self.scene.core;
        core.opacity = oscillate(CORE_OPACITY_PULSE, t);
        core.transform.set_uniform_scale(oscillate(CORE_SCALE_PULSE, t));

        let dots = &mut self.scene.dots;
        dots.opacity = oscillate(DOT_OPACITY_PULSE, t);
        dots.size = oscillate(DOT_SIZE_PULSE, t);
    }

    fn spin_rings(&mut self, t: f32) {
        let [r1, r2, r3] = &mut self.scene.rings;
        r1.transform.rotation.z = RING_BASE_Z[0] + t * RING_SPIN[0];
        r2.transform.rotation.z = RING_BASE_Z[1] + t * RING_SPIN[1];
        r3.transform.rotation.y = RING3_BASE_Y + t * RING_SPIN[2];
    }
}
