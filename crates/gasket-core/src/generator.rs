//! Recursive volume subdivision of the base tetrahedron.

use glam::Vec3;

use crate::tetra::{base_vertices, Face, FaceColor, FACES};
use crate::SubdivisionLevel;

/// Number of vertices `generate(level)` emits: 12 × 4^level.
///
/// 4 triangles per leaf tetrahedron, 3 vertices per triangle, and each
/// recursion level multiplies the leaf count by 4.
pub fn vertex_count_for(level: SubdivisionLevel) -> usize {
    12 * 4_usize.pow(level)
}

/// Flat, upload-ready triangle buffer for one subdivision level.
///
/// `positions[i]` and `colors[i]` describe the same vertex; consecutive
/// triples form triangles. Shared corners are emitted redundantly on
/// purpose: the layout stays flat and every triangle keeps its own solid
/// color.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GasketBuffer {
    positions: Vec<[f32; 3]>,
    colors: Vec<[f32; 3]>,
}

impl GasketBuffer {
    fn with_capacity(vertices: usize) -> Self {
        Self {
            positions: Vec::with_capacity(vertices),
            colors: Vec::with_capacity(vertices),
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn positions(&self) -> &[[f32; 3]] {
        &self.positions
    }

    pub fn colors(&self) -> &[[f32; 3]] {
        &self.colors
    }

    fn push_triangle(&mut self, a: Vec3, b: Vec3, c: Vec3, color: FaceColor) {
        self.positions.push(a.to_array());
        self.positions.push(b.to_array());
        self.positions.push(c.to_array());
        for _ in 0..3 {
            self.colors.push(color);
        }
    }
}

/// Expands a base tetrahedron into the triangle mesh of its Sierpinski
/// subdivision at a given depth.
///
/// `generate` is a pure function of the level: same level, byte-identical
/// buffer. Buffer size grows as 4^level (level 3 = 768 vertices, level 6
/// ≈ 49k), so callers exposing the level to a UI should clamp the range —
/// the menu in this repo stops at 3.
#[derive(Debug, Clone)]
pub struct GasketGenerator {
    base: [Vec3; 4],
    faces: [Face; 4],
}

impl Default for GasketGenerator {
    fn default() -> Self {
        Self {
            base: base_vertices(),
            faces: FACES,
        }
    }
}

impl GasketGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Generator over a caller-supplied tetrahedron instead of the standard
    /// base. The face table still applies by corner role.
    pub fn with_base(base: [Vec3; 4]) -> Self {
        Self { base, faces: FACES }
    }

    /// Builds the full triangle buffer for `level`.
    ///
    /// Returns a fresh owned buffer on every call; nothing is retained or
    /// reused across calls. Emits exactly [`vertex_count_for`]`(level)`
    /// vertices.
    pub fn generate(&self, level: SubdivisionLevel) -> GasketBuffer {
        let mut out = GasketBuffer::with_capacity(vertex_count_for(level));
        self.divide(
            &mut out, self.base[0], self.base[1], self.base[2], self.base[3], level,
        );
        log::debug!(
            "generated level {level} gasket: {} vertices",
            out.vertex_count()
        );
        out
    }

    fn divide(&self, out: &mut GasketBuffer, v0: Vec3, v1: Vec3, v2: Vec3, v3: Vec3, level: u32) {
        if level == 0 {
            self.emit_leaf(out, [v0, v1, v2, v3]);
            return;
        }

        let m01 = midpoint(v0, v1);
        let m02 = midpoint(v0, v2);
        let m03 = midpoint(v0, v3);
        let m12 = midpoint(v1, v2);
        let m13 = midpoint(v1, v3);
        let m23 = midpoint(v2, v3);

        // Recurse into the 4 corner tetrahedra only; the central octahedron
        // is skipped, which is what hollows out the fractal.
        self.divide(out, v0, m01, m02, m03, level - 1);
        self.divide(out, m01, v1, m12, m13, level - 1);
        self.divide(out, m02, m12, v2, m23, level - 1);
        self.divide(out, m03, m13, m23, v3, level - 1);
    }

    fn emit_leaf(&self, out: &mut GasketBuffer, corners: [Vec3; 4]) {
        for face in &self.faces {
            out.push_triangle(
                corners[face.corners[0]],
                corners[face.corners[1]],
                corners[face.corners[2]],
                face.color,
            );
        }
    }
}

fn midpoint(a: Vec3, b: Vec3) -> Vec3 {
    (a + b) * 0.5
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Mat3;

    /// Barycentric coordinates of `p` with respect to tetrahedron `t`.
    fn barycentric(p: Vec3, t: [Vec3; 4]) -> [f32; 4] {
        let basis = Mat3::from_cols(t[0] - t[3], t[1] - t[3], t[2] - t[3]);
        let abc = basis.inverse() * (p - t[3]);
        [abc.x, abc.y, abc.z, 1.0 - abc.x - abc.y - abc.z]
    }

    fn inside(p: Vec3, t: [Vec3; 4], eps: f32) -> bool {
        barycentric(p, t).iter().all(|&w| w >= -eps && w <= 1.0 + eps)
    }

    #[test]
    fn vertex_count_law() {
        let r#gen = GasketGenerator::new();
        for level in 0..=4 {
            let buf = r#gen.generate(level);
            assert_eq!(buf.vertex_count(), vertex_count_for(level));
            assert_eq!(buf.positions().len(), buf.colors().len());
        }
    }

    #[test]
    fn generation_is_deterministic() {
        let r#gen = GasketGenerator::new();
        for level in [0, 1, 3] {
            assert_eq!(r#gen.generate(level), r#gen.generate(level));
        }
    }

    #[test]
    fn level_zero_reconstructs_the_base_faces() {
        let base = base_vertices();
        let buf = GasketGenerator::new().generate(0);
        assert_eq!(buf.vertex_count(), 12);

        let mut seen_triples: Vec<[usize; 3]> = Vec::new();
        let mut seen_colors: Vec<[f32; 3]> = Vec::new();

        for tri in 0..4 {
            let verts = &buf.positions()[tri * 3..tri * 3 + 3];
            let colors = &buf.colors()[tri * 3..tri * 3 + 3];

            // Flat shading: one color across the triangle.
            assert_eq!(colors[0], colors[1]);
            assert_eq!(colors[1], colors[2]);
            seen_colors.push(colors[0]);

            // At level 0 every emitted position is one of the base vertices,
            // bit-for-bit.
            let mut triple: Vec<usize> = verts
                .iter()
                .map(|v| {
                    base.iter()
                        .position(|b| b.to_array() == *v)
                        .expect("level-0 vertex is not a base vertex")
                })
                .collect();
            triple.sort_unstable();
            seen_triples.push([triple[0], triple[1], triple[2]]);
        }

        seen_triples.sort_unstable();
        assert_eq!(
            seen_triples,
            vec![[0, 1, 2], [0, 1, 3], [0, 2, 3], [1, 2, 3]],
            "the 4 triangles must be the 4 faces of the base tetrahedron"
        );

        for face in &FACES {
            assert_eq!(
                seen_colors.iter().filter(|&&c| c == face.color).count(),
                1,
                "each face color appears exactly once at level 0"
            );
        }
    }

    #[test]
    fn subdivision_never_leaves_the_base_hull() {
        let base = base_vertices();
        let r#gen = GasketGenerator::new();
        for level in 1..=3 {
            for v in r#gen.generate(level).positions() {
                assert!(
                    inside(Vec3::from_array(*v), base, 1e-4),
                    "level {level} vertex {v:?} escapes the base tetrahedron"
                );
            }
        }
    }

    #[test]
    fn level_one_hollows_out_the_centroid() {
        let base = base_vertices();
        let centroid = (base[0] + base[1] + base[2] + base[3]) / 4.0;

        let buf = GasketGenerator::new().generate(1);
        assert_eq!(buf.vertex_count(), 48);

        // Each run of 12 vertices is one corner sub-tetrahedron; its 4
        // distinct positions are the leaf's corners.
        for corner in 0..4 {
            let verts = &buf.positions()[corner * 12..(corner + 1) * 12];
            let mut unique: Vec<[f32; 3]> = Vec::new();
            for v in verts {
                if !unique.contains(v) {
                    unique.push(*v);
                }
            }
            assert_eq!(unique.len(), 4);

            let leaf = [
                Vec3::from_array(unique[0]),
                Vec3::from_array(unique[1]),
                Vec3::from_array(unique[2]),
                Vec3::from_array(unique[3]),
            ];
            assert!(
                !inside(centroid, leaf, 1e-4),
                "centroid must lie outside corner sub-tetrahedron {corner}"
            );
        }
    }

    #[test]
    fn custom_base_is_respected() {
        let skewed = [
            Vec3::ZERO,
            Vec3::new(2.0, 0.0, 0.0),
            Vec3::new(0.0, 2.0, 0.0),
            Vec3::new(0.0, 0.0, 2.0),
        ];
        let buf = GasketGenerator::with_base(skewed).generate(0);
        assert_eq!(buf.vertex_count(), 12);
        for v in buf.positions() {
            assert!(inside(Vec3::from_array(*v), skewed, 1e-6));
        }
    }
}
