//! Indexed triangle mesh with ring-stitching helpers for revolved surfaces.

use std::f64::consts::PI;

/// Output triangle mesh for downstream export and validation.
///
/// Flat buffers in the usual interchange layout: positions as
/// `[x0, y0, z0, x1, y1, z1, ...]`, triangles as index triples.
#[derive(Debug, Clone, PartialEq)]
pub struct TriangleMesh {
    /// Flat array of vertex positions: `[x0, y0, z0, ...]` (f32).
    pub vertices: Vec<f32>,
    /// Flat array of triangle indices: `[i0, i1, i2, ...]` (u32).
    pub indices: Vec<u32>,
}

impl TriangleMesh {
    /// Create an empty mesh.
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            indices: Vec::new(),
        }
    }

    /// Number of triangles.
    pub fn num_triangles(&self) -> usize {
        self.indices.len() / 3
    }

    /// Number of vertices.
    pub fn num_vertices(&self) -> usize {
        self.vertices.len() / 3
    }

    /// Merge another mesh into this one, offsetting its indices.
    pub fn merge(&mut self, other: &TriangleMesh) {
        let offset = self.num_vertices() as u32;
        self.vertices.extend_from_slice(&other.vertices);
        self.indices.extend(other.indices.iter().map(|&i| i + offset));
    }

    /// Append a vertex and return its index.
    pub fn push_vertex(&mut self, x: f64, y: f64, z: f64) -> u32 {
        let idx = self.num_vertices() as u32;
        self.vertices.push(x as f32);
        self.vertices.push(y as f32);
        self.vertices.push(z as f32);
        idx
    }

    /// Append a triangle by vertex indices.
    pub fn push_triangle(&mut self, a: u32, b: u32, c: u32) {
        self.indices.push(a);
        self.indices.push(b);
        self.indices.push(c);
    }

    /// Position of vertex `i` as f64 components.
    pub fn vertex(&self, i: u32) -> [f64; 3] {
        let i = i as usize * 3;
        [
            self.vertices[i] as f64,
            self.vertices[i + 1] as f64,
            self.vertices[i + 2] as f64,
        ]
    }

    /// Enclosed volume via the divergence theorem over signed tetrahedra.
    ///
    /// Meaningful only for closed meshes; orientation-independent (absolute
    /// value is returned).
    pub fn volume(&self) -> f64 {
        let mut vol = 0.0;
        for tri in self.indices.chunks(3) {
            let v0 = self.vertex(tri[0]);
            let v1 = self.vertex(tri[1]);
            let v2 = self.vertex(tri[2]);
            vol += v0[0] * (v1[1] * v2[2] - v2[1] * v1[2])
                - v1[0] * (v0[1] * v2[2] - v2[1] * v0[2])
                + v2[0] * (v0[1] * v1[2] - v1[1] * v0[2]);
        }
        (vol / 6.0).abs()
    }

    /// Append a full ring of `facets` vertices at radius `r`, height `z`.
    ///
    /// Facet angles are `2π·j/facets` for `j = 0..facets`, so identical
    /// `(r, z, facets)` always produce byte-identical vertices.
    pub fn add_ring(&mut self, r: f64, z: f64, facets: u32) -> u32 {
        let start = self.num_vertices() as u32;
        for j in 0..facets {
            let phi = 2.0 * PI * j as f64 / facets as f64;
            self.push_vertex(r * phi.cos(), r * phi.sin(), z);
        }
        start
    }

    /// Stitch two rings of equal facet count into a closed band of quads
    /// (two triangles each).
    ///
    /// With `ring_a` below `ring_b` and the default winding the band faces
    /// outward; `flip` reverses the winding for inward-facing surfaces.
    pub fn stitch_rings(&mut self, ring_a: u32, ring_b: u32, facets: u32, flip: bool) {
        for j in 0..facets {
            let j1 = (j + 1) % facets;
            let (a0, a1) = (ring_a + j, ring_a + j1);
            let (b0, b1) = (ring_b + j, ring_b + j1);
            if flip {
                self.push_triangle(a0, b1, a1);
                self.push_triangle(a0, b0, b1);
            } else {
                self.push_triangle(a0, a1, b1);
                self.push_triangle(a0, b1, b0);
            }
        }
    }

    /// Close a ring with a triangle fan to a single center/apex vertex.
    ///
    /// Default winding faces +Z when the center sits above the ring plane
    /// center; `flip` reverses it.
    pub fn fan(&mut self, ring: u32, center: u32, facets: u32, flip: bool) {
        for j in 0..facets {
            let j1 = (j + 1) % facets;
            if flip {
                self.push_triangle(center, ring + j1, ring + j);
            } else {
                self.push_triangle(center, ring + j, ring + j1);
            }
        }
    }
}

impl Default for TriangleMesh {
    fn default() -> Self {
        Self::new()
    }
}
