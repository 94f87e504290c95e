// Scene graph state written by the animator and read by the renderer.
//
// Nothing here talks to the GPU; the renderer turns these transforms and
// material values into uniforms once per frame.
use crate::config::SceneConfig;
use crate::constants::*;
use glam::{EulerRot, Mat4, Quat, Vec3};
use std::f32::consts::PI;

/// Position, XYZ Euler rotation (radians) and scale. Matrix order is T * R * S.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Vec3,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform {
    pub const IDENTITY: Self = Self {
        position: Vec3::ZERO,
        rotation: Vec3::ZERO,
        scale: Vec3::ONE,
    };

    pub fn matrix(&self) -> Mat4 {
        let r = self.rotation;
        Mat4::from_scale_rotation_translation(
            self.scale,
            Quat::from_euler(EulerRot::XYZ, r.x, r.y, r.z),
            self.position,
        )
    }

    #[inline]
    pub fn set_uniform_scale(&mut self, s: f32) {
        self.scale = Vec3::splat(s);
    }
}

/// A mesh with its own transform and material opacity.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MeshNode {
    pub transform: Transform,
    pub opacity: f32,
}

impl MeshNode {
    pub fn new(opacity: f32) -> Self {
        Self {
            transform: Transform::IDENTITY,
            opacity,
        }
    }
}

/// A point cloud; `size` is in world units with perspective attenuation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointsNode {
    pub transform: Transform,
    pub opacity: f32,
    pub size: f32,
}

impl PointsNode {
    pub fn new(size: f32, opacity: f32) -> Self {
        Self {
            transform: Transform::IDENTITY,
            opacity,
            size,
        }
    }
}

/// Right-handed perspective camera looking at `target`.
#[derive(Clone, Debug, PartialEq)]
pub struct CameraRig {
    pub position: Vec3,
    pub target: Vec3,
    pub fovy_radians: f32,
    pub aspect: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl CameraRig {
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, Vec3::Y)
    }

    /// Projection with a 0..1 depth range, as WebGPU expects.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect.max(1e-3), self.znear, self.zfar)
    }
}

/// The full set of animated objects.
///
/// Everything except `camera` and `particles` hangs off `group`.
#[derive(Clone, Debug, PartialEq)]
pub struct SceneGraph {
    pub camera: CameraRig,
    pub group: Transform,
    pub outer_shell: MeshNode,
    pub inner_shell: MeshNode,
    pub core: MeshNode,
    pub dots: PointsNode,
    pub rings: [MeshNode; 3],
    pub particles: PointsNode,
}

impl SceneGraph {
    pub fn new(config: &SceneConfig, aspect: f32) -> Self {
        let camera = CameraRig {
            position: Vec3::new(0.0, 0.0, config.camera_z),
            target: Vec3::ZERO,
            fovy_radians: config.camera_fov_deg.to_radians(),
            aspect,
            znear: config.camera_near,
            zfar: config.camera_far,
        };

        let mut group = Transform::IDENTITY;
        group.position.y = GROUP_REST_Y;

        let mut rings = RING_OPACITY.map(MeshNode::new);
        rings[0].transform.rotation = Vec3::new(PI / 2.2, 0.0, RING_BASE_Z[0]);
        rings[1].transform.rotation = Vec3::new(PI / 3.0, 0.0, RING_BASE_Z[1]);
        rings[2].transform.rotation = Vec3::new(PI / 1.5, RING3_BASE_Y, 0.0);
        for (ring, scale) in rings.iter_mut().zip(RING_SCALE) {
            ring.transform.set_uniform_scale(scale);
        }

        Self {
            camera,
            group,
            outer_shell: MeshNode::new(OUTER_OPACITY),
            inner_shell: MeshNode::new(INNER_OPACITY),
            core: MeshNode::new(CORE_OPACITY),
            dots: PointsNode::new(DOT_SIZE, DOT_OPACITY),
            rings,
            particles: PointsNode::new(PARTICLE_SIZE, PARTICLE_OPACITY),
        }
    }

    /// World matrix of a child of the central group.
    #[inline]
    pub fn group_child_matrix(&self, local: &Transform) -> Mat4 {
        self.group.matrix() * local.matrix()
    }
}
