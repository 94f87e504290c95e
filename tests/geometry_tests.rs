// Host-side tests for the procedural meshes and the breathing displacement.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core {
    pub mod displacement {
        include!("../src/core/displacement.rs");
    }
    pub mod geometry {
        include!("../src/core/geometry.rs");
    }
}

use crate::core::displacement::*;
use crate::core::geometry::*;
use glam::Vec3;

#[test]
fn outer_shell_has_one_vertex_per_lattice_point() {
    let mesh = icosphere(4.5, 2);
    assert_eq!(mesh.positions.len(), 92);
    assert_eq!(mesh.triangle_count(), 180);
    assert_eq!(wireframe_edges(&mesh.indices).len() / 2, 270);
}

#[test]
fn inner_shell_counts() {
    let mesh = icosphere(3.2, 1);
    assert_eq!(mesh.positions.len(), 42);
    assert_eq!(mesh.triangle_count(), 80);
    assert_eq!(wireframe_edges(&mesh.indices).len() / 2, 120);
}

#[test]
fn base_icosahedron_is_unsubdivided() {
    let mesh = icosphere(1.0, 0);
    assert_eq!(mesh.positions.len(), 12);
    assert_eq!(mesh.triangle_count(), 20);
}

#[test]
fn icosphere_vertices_lie_on_the_sphere() {
    let mesh = icosphere(4.5, 2);
    for p in &mesh.positions {
        assert!((p.length() - 4.5).abs() < 1e-4, "{p:?}");
    }
    let max_index = mesh.indices.iter().copied().max().unwrap_or(0) as usize;
    assert!(max_index < mesh.positions.len());
}

#[test]
fn edges_are_unique() {
    let mesh = icosphere(1.0, 2);
    let edges = wireframe_edges(&mesh.indices);
    let mut keys: Vec<(u32, u32)> = edges
        .chunks_exact(2)
        .map(|e| (e[0].min(e[1]), e[0].max(e[1])))
        .collect();
    let total = keys.len();
    keys.sort_unstable();
    keys.dedup();
    assert_eq!(keys.len(), total);
}

#[test]
fn core_sphere_and_ring_counts() {
    let core = uv_sphere(1.0, 32, 32);
    assert_eq!(core.positions.len(), 33 * 33);
    assert_eq!(core.triangle_count(), 2 * 32 * 31);
    for p in &core.positions {
        assert!((p.length() - 1.0).abs() < 1e-4);
    }

    let ring = torus(6.5, 0.015, 8, 120);
    assert_eq!(ring.positions.len(), 9 * 121);
    assert_eq!(ring.triangle_count(), 8 * 120 * 2);
    for p in &ring.positions {
        let planar = (p.x * p.x + p.y * p.y).sqrt();
        assert!((planar - 6.5).abs() <= 0.015 + 1e-4);
        assert!(p.z.abs() <= 0.015 + 1e-6);
    }
}

#[test]
fn scene_meshes_share_outer_vertices_with_dots() {
    let meshes = SceneMeshes::build();
    assert_eq!(meshes.dot_positions().len(), 92);
    assert_eq!(meshes.dot_positions(), meshes.outer.positions.as_slice());
    assert_eq!(meshes.inner.positions.len(), 42);
}

#[test]
fn wave_is_bounded() {
    let points = icosphere(4.5, 2).positions;
    let mut t = 0.0;
    while t < 100.0 {
        for p in &points {
            assert!(breathing_wave(t, *p).abs() <= 0.12);
        }
        t += 0.5;
    }
}

#[test]
fn displacement_moves_along_normals() {
    let base = vec![Vec3::new(0.0, 0.0, 4.5), Vec3::new(3.0, 0.0, 0.0)];
    let mut field = VertexDisplacementField::new(base.clone());
    field.update(2.5);
    for (d, b) in field.displaced().iter().zip(&base) {
        let expected = *b + b.normalize() * breathing_wave(2.5, *b);
        assert!(d.abs_diff_eq(expected, 1e-6));
        // still radial
        assert!(d.normalize().abs_diff_eq(b.normalize(), 1e-5));
    }
    assert_eq!(field.base(), base.as_slice());
}

#[test]
fn vertex_at_origin_stays_put() {
    let mut field = VertexDisplacementField::new(vec![Vec3::ZERO, Vec3::X * 4.5]);
    for i in 0..50 {
        field.update(i as f32 * 0.3);
        assert_eq!(field.displaced()[0], Vec3::ZERO);
        assert!(field.displaced().iter().all(|v| v.is_finite()));
    }
}
