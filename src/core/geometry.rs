use crate::constants::{
    CORE_RADIUS, CORE_SEGMENTS, INNER_DETAIL, INNER_RADIUS, OUTER_DETAIL, OUTER_RADIUS,
    RING_RADIAL_SEGMENTS, RING_RADIUS, RING_TUBE, RING_TUBULAR_SEGMENTS, VERTEX_DEDUP_SCALE,
};
use fnv::{FnvHashMap, FnvHashSet};
use glam::Vec3;
use std::f32::consts::{PI, TAU};

/// Indexed triangle mesh in object space.
#[derive(Clone, Debug, Default)]
pub struct MeshData {
    pub positions: Vec<Vec3>,
    pub indices: Vec<u32>,
}

impl MeshData {
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

const ICOSAHEDRON_FACES: [[usize; 3]; 20] = [
    [0, 11, 5],
    [0, 5, 1],
    [0, 1, 7],
    [0, 7, 10],
    [0, 10, 11],
    [1, 5, 9],
    [5, 11, 4],
    [11, 10, 2],
    [10, 7, 6],
    [7, 1, 8],
    [3, 9, 4],
    [3, 4, 2],
    [3, 2, 6],
    [3, 6, 8],
    [3, 8, 9],
    [4, 9, 5],
    [2, 4, 11],
    [6, 2, 10],
    [8, 6, 7],
    [9, 8, 1],
];

fn icosahedron_corners() -> [Vec3; 12] {
    let t = (1.0 + 5.0_f32.sqrt()) / 2.0;
    [
        Vec3::new(-1.0, t, 0.0),
        Vec3::new(1.0, t, 0.0),
        Vec3::new(-1.0, -t, 0.0),
        Vec3::new(1.0, -t, 0.0),
        Vec3::new(0.0, -1.0, t),
        Vec3::new(0.0, 1.0, t),
        Vec3::new(0.0, -1.0, -t),
        Vec3::new(0.0, 1.0, -t),
        Vec3::new(t, 0.0, -1.0),
        Vec3::new(t, 0.0, 1.0),
        Vec3::new(-t, 0.0, -1.0),
        Vec3::new(-t, 0.0, 1.0),
    ]
}

/// Collapses vertices closer than `1 / VERTEX_DEDUP_SCALE`.
#[derive(Default)]
struct VertexWelder {
    lookup: FnvHashMap<(i32, i32, i32), u32>,
    positions: Vec<Vec3>,
}

impl VertexWelder {
    fn insert(&mut self, p: Vec3) -> u32 {
        let q = (p * VERTEX_DEDUP_SCALE).round();
        let key = (q.x as i32, q.y as i32, q.z as i32);
        // neighbouring cells too, so rounding at a cell boundary cannot split a vertex
        for dx in -1..=1 {
            for dy in -1..=1 {
                for dz in -1..=1 {
                    let probe = (key.0 + dx, key.1 + dy, key.2 + dz);
                    if let Some(&i) = self.lookup.get(&probe) {
                        if self.positions[i as usize].distance(p) * VERTEX_DEDUP_SCALE < 1.0 {
                            return i;
                        }
                    }
                }
            }
        }
        let index = self.positions.len() as u32;
        self.positions.push(p);
        self.lookup.insert(key, index);
        index
    }
}

/// Geodesic sphere: every icosahedron face is cut into `(detail + 1)^2`
/// triangles and the result is pushed out onto the sphere of `radius`.
pub fn icosphere(radius: f32, detail: u32) -> MeshData {
    let corners = icosahedron_corners();
    let cols = detail as usize + 1;
    let mut welder = VertexWelder::default();
    let mut indices = Vec::with_capacity(ICOSAHEDRON_FACES.len() * cols * cols * 3);

    for face in ICOSAHEDRON_FACES {
        let (a, b, c) = (corners[face[0]], corners[face[1]], corners[face[2]]);

        // grid[i][j]: row i runs from edge a->c, column j from that row's start toward b
        let mut grid: Vec<Vec<Vec3>> = Vec::with_capacity(cols + 1);
        for i in 0..=cols {
            let f = i as f32 / cols as f32;
            let aj = a.lerp(c, f);
            let bj = b.lerp(c, f);
            let rows = cols - i;
            let row = (0..=rows)
                .map(|j| {
                    if j == 0 && i == cols {
                        aj
                    } else {
                        aj.lerp(bj, j as f32 / rows as f32)
                    }
                })
                .collect();
            grid.push(row);
        }

        let mut emit = |p: Vec3| welder.insert(p.normalize() * radius);
        for i in 0..cols {
            for j in 0..(2 * (cols - i) - 1) {
                let k = j / 2;
                let tri = if j % 2 == 0 {
                    [grid[i][k + 1], grid[i + 1][k], grid[i][k]]
                } else {
                    [grid[i][k + 1], grid[i + 1][k + 1], grid[i + 1][k]]
                };
                for p in tri {
                    indices.push(emit(p));
                }
            }
        }
    }

    MeshData {
        positions: welder.positions,
        indices,
    }
}

/// Unique undirected edges of a triangle list, as a line list.
pub fn wireframe_edges(indices: &[u32]) -> Vec<u32> {
    let mut seen = FnvHashSet::default();
    let mut lines = Vec::with_capacity(indices.len() * 2);
    for tri in indices.chunks_exact(3) {
        for (a, b) in [(tri[0], tri[1]), (tri[1], tri[2]), (tri[2], tri[0])] {
            let key = (a.min(b), a.max(b));
            if seen.insert(key) {
                lines.push(a);
                lines.push(b);
            }
        }
    }
    lines
}

/// Latitude/longitude sphere with `width_segments` x `height_segments` quads.
pub fn uv_sphere(radius: f32, width_segments: u32, height_segments: u32) -> MeshData {
    let w = width_segments.max(3);
    let h = height_segments.max(2);
    let mut positions = Vec::with_capacity(((w + 1) * (h + 1)) as usize);
    for iy in 0..=h {
        let v = iy as f32 / h as f32;
        for ix in 0..=w {
            let u = ix as f32 / w as f32;
            positions.push(Vec3::new(
                -radius * (u * TAU).cos() * (v * PI).sin(),
                radius * (v * PI).cos(),
                radius * (u * TAU).sin() * (v * PI).sin(),
            ));
        }
    }

    let row = w + 1;
    let mut indices = Vec::new();
    for iy in 0..h {
        for ix in 0..w {
            let a = iy * row + ix + 1;
            let b = iy * row + ix;
            let c = (iy + 1) * row + ix;
            let d = (iy + 1) * row + ix + 1;
            // the pole rows collapse to a point, so only one triangle each
            if iy != 0 {
                indices.extend_from_slice(&[a, b, d]);
            }
            if iy != h - 1 {
                indices.extend_from_slice(&[b, c, d]);
            }
        }
    }
    MeshData { positions, indices }
}

/// Torus in the XY plane around the Z axis.
pub fn torus(radius: f32, tube: f32, radial_segments: u32, tubular_segments: u32) -> MeshData {
    let radial = radial_segments.max(3);
    let tubular = tubular_segments.max(3);
    let mut positions = Vec::with_capacity(((radial + 1) * (tubular + 1)) as usize);
    for j in 0..=radial {
        let v = j as f32 / radial as f32 * TAU;
        for i in 0..=tubular {
            let u = i as f32 / tubular as f32 * TAU;
            let ring = radius + tube * v.cos();
            positions.push(Vec3::new(ring * u.cos(), ring * u.sin(), tube * v.sin()));
        }
    }

    let row = tubular + 1;
    let mut indices = Vec::with_capacity((radial * tubular * 6) as usize);
    for j in 1..=radial {
        for i in 1..=tubular {
            let a = row * j + i - 1;
            let b = row * (j - 1) + i - 1;
            let c = row * (j - 1) + i;
            let d = row * j + i;
            indices.extend_from_slice(&[a, b, d, b, c, d]);
        }
    }
    MeshData { positions, indices }
}

/// CPU-side meshes for the central object, built once at startup.
#[derive(Clone, Debug)]
pub struct SceneMeshes {
    pub outer: MeshData,
    pub outer_edges: Vec<u32>,
    pub inner: MeshData,
    pub inner_edges: Vec<u32>,
    pub core: MeshData,
    pub ring: MeshData,
}

impl SceneMeshes {
    pub fn build() -> Self {
        let outer = icosphere(OUTER_RADIUS, OUTER_DETAIL);
        let outer_edges = wireframe_edges(&outer.indices);
        let inner = icosphere(INNER_RADIUS, INNER_DETAIL);
        let inner_edges = wireframe_edges(&inner.indices);
        Self {
            outer,
            outer_edges,
            inner,
            inner_edges,
            core: uv_sphere(CORE_RADIUS, CORE_SEGMENTS, CORE_SEGMENTS),
            ring: torus(
                RING_RADIUS,
                RING_TUBE,
                RING_RADIAL_SEGMENTS,
                RING_TUBULAR_SEGMENTS,
            ),
        }
    }

    /// One glow dot per unique outer-shell vertex.
    pub fn dot_positions(&self) -> &[Vec3] {
        &self.outer.positions
    }
}
