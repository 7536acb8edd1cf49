//! The fixed quad geometry
//!
//! Two triangles covering [-1, 1] x [-1, 1] at z = 1, wound
//! counter-clockwise. This is the only geometry the shell ever draws.

/// Number of vertices in the quad
pub(crate) const QUAD_VERTEX_COUNT: i32 = 6;

/// Flat x/y/z coordinates for the two quad triangles
#[rustfmt::skip]
pub(crate) const QUAD_VERTICES: [f32; 18] = [
    -1.0, -1.0, 1.0,
     1.0, -1.0, 1.0,
    -1.0,  1.0, 1.0,

     1.0, -1.0, 1.0,
     1.0,  1.0, 1.0,
    -1.0,  1.0, 1.0,
];

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn vertices() -> Vec<(f32, f32, f32)> {
        QUAD_VERTICES
            .chunks_exact(3)
            .map(|v| (v[0], v[1], v[2]))
            .collect()
    }

    #[test]
    fn test_quad_has_six_vertices() {
        assert_eq!(QUAD_VERTICES.len(), 18);
        assert_eq!(vertices().len(), QUAD_VERTEX_COUNT as usize);
    }

    #[test]
    fn test_quad_lies_at_z_one_within_unit_square() {
        for (x, y, z) in vertices() {
            assert_relative_eq!(z, 1.0);
            assert!((-1.0..=1.0).contains(&x));
            assert!((-1.0..=1.0).contains(&y));
        }
    }

    #[test]
    fn test_quad_triangles_cover_the_square() {
        // Each triangle spans half the 2x2 square, so the signed areas
        // must both be +2 (counter-clockwise) and sum to the full 4.
        let verts = vertices();
        let mut total = 0.0_f32;
        for tri in verts.chunks_exact(3) {
            let (ax, ay, _) = tri[0];
            let (bx, by, _) = tri[1];
            let (cx, cy, _) = tri[2];
            let signed_area = 0.5 * ((bx - ax) * (cy - ay) - (cx - ax) * (by - ay));
            assert_relative_eq!(signed_area, 2.0);
            total += signed_area;
        }
        assert_relative_eq!(total, 4.0);
    }

    #[test]
    fn test_quad_touches_all_four_corners() {
        let verts = vertices();
        for corner in [(-1.0, -1.0), (1.0, -1.0), (-1.0, 1.0), (1.0, 1.0)] {
            assert!(
                verts.iter().any(|&(x, y, _)| (x, y) == corner),
                "missing corner {corner:?}"
            );
        }
    }
}
