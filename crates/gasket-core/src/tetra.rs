//! Base tetrahedron geometry and the face/color table.
//!
//! The vertex-role ordering in [`FACES`] fixes both the triangle emission
//! order and the flat color of every face, for every leaf tetrahedron of the
//! subdivision. Keeping it as one declared table (instead of an implicit
//! call-site sequence) makes the winding/coloring contract testable on its
//! own.

use glam::Vec3;

/// Flat RGB face color.
pub type FaceColor = [f32; 3];

pub const RED: FaceColor = [1.0, 0.0, 0.0];
pub const GREEN: FaceColor = [0.0, 1.0, 0.0];
pub const BLUE: FaceColor = [0.0, 0.0, 1.0];
pub const BLACK: FaceColor = [0.0, 0.0, 0.0];

/// One face of a tetrahedron: which of the 4 corner roles form the triangle,
/// and the color shared by its 3 vertices.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Face {
    pub corners: [usize; 3],
    pub color: FaceColor,
}

/// The 4 faces in emission order.
///
/// Corner indices refer to the `[v0, v1, v2, v3]` argument order of the
/// recursion, not to any winding convention; the renderer draws with
/// backface culling disabled, so the only contract is that this table is
/// applied identically at every leaf.
pub const FACES: [Face; 4] = [
    Face { corners: [0, 1, 2], color: RED },
    Face { corners: [3, 2, 1], color: BLACK },
    Face { corners: [0, 3, 1], color: BLUE },
    Face { corners: [0, 2, 3], color: GREEN },
];

/// Vertices of the regular base tetrahedron, centered near the origin with
/// unit edge length: apex on +Z, base triangle in the z = √6/12 plane.
pub fn base_vertices() -> [Vec3; 4] {
    let sqrt3 = 3.0_f32.sqrt();
    let sqrt6 = 6.0_f32.sqrt();
    [
        Vec3::new(0.0, 0.0, sqrt6 / 4.0),
        Vec3::new(0.0, sqrt3 / 3.0, sqrt6 / 12.0),
        Vec3::new(-0.5, -sqrt3 / 6.0, sqrt6 / 12.0),
        Vec3::new(0.5, -sqrt3 / 6.0, sqrt6 / 12.0),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_tetrahedron_is_regular() {
        let v = base_vertices();
        for i in 0..4 {
            for j in (i + 1)..4 {
                let edge = (v[i] - v[j]).length();
                assert!(
                    (edge - 1.0).abs() < 1e-6,
                    "edge {i}-{j} has length {edge}, expected 1"
                );
            }
        }
    }

    #[test]
    fn face_table_covers_all_corner_triples() {
        // Every unordered triple of {0,1,2,3} appears exactly once.
        let mut seen: Vec<[usize; 3]> = FACES
            .iter()
            .map(|f| {
                let mut c = f.corners;
                c.sort_unstable();
                c
            })
            .collect();
        seen.sort_unstable();
        assert_eq!(seen, vec![[0, 1, 2], [0, 1, 3], [0, 2, 3], [1, 2, 3]]);
    }

    #[test]
    fn face_colors_are_distinct() {
        for i in 0..4 {
            for j in (i + 1)..4 {
                assert_ne!(FACES[i].color, FACES[j].color);
            }
        }
    }
}
