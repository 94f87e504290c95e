use crate::constants::{BREATH_AMPLITUDE, BREATH_FREQ_X, BREATH_FREQ_Y, BREATH_SPATIAL};
use glam::Vec3;

/// Scalar "breathing" offset along the normal for a base vertex at time `t`.
/// Bounded by `BREATH_AMPLITUDE` in absolute value.
#[inline]
pub fn breathing_wave(t: f32, base: Vec3) -> f32 {
    (t * BREATH_FREQ_X + base.x * BREATH_SPATIAL).sin()
        * (t * BREATH_FREQ_Y + base.y * BREATH_SPATIAL).cos()
        * BREATH_AMPLITUDE
}

/// Immutable base vertices of the outer shell and their per-frame displaced copy.
///
/// Normals are derived once from the base set. A vertex at the origin gets a
/// zero normal and therefore never moves, instead of producing NaNs.
#[derive(Clone, Debug)]
pub struct VertexDisplacementField {
    base: Vec<Vec3>,
    normals: Vec<Vec3>,
    displaced: Vec<Vec3>,
}

impl VertexDisplacementField {
    pub fn new(base: Vec<Vec3>) -> Self {
        let normals = base.iter().map(|v| v.normalize_or_zero()).collect();
        let displaced = base.clone();
        Self {
            base,
            normals,
            displaced,
        }
    }

    /// Recompute every displaced vertex from the base set; nothing accumulates.
    pub fn update(&mut self, t: f32) {
        for ((out, base), normal) in self
            .displaced
            .iter_mut()
            .zip(&self.base)
            .zip(&self.normals)
        {
            *out = *base + *normal * breathing_wave(t, *base);
        }
    }

    pub fn base(&self) -> &[Vec3] {
        &self.base
    }

    pub fn displaced(&self) -> &[Vec3] {
        &self.displaced
    }
}
