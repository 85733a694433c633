//! Generators for the convex solids the scene assembler builds from.
//!
//! The n-sided prism is the one parametrized, algorithmic shape; cube, wedge
//! and frustum are fixed vertex tables following the same flat-shaded,
//! unshared-vertex convention. Every generator returns geometry that passes
//! [`GeometryData::validate`].

use super::GeometryData;
use crate::error::{Error, Result};
use std::f32::consts::{FRAC_1_SQRT_2, PI};

/// Generate a regular n-sided prism spanning z = -1 to z = +1.
///
/// The cross-section is the convex polygon whose corners sit on the unit
/// circle at angles `i * 2π/n`. Both caps are fan-triangulated; the back cap
/// ring is reversed so its triangles wind counter-clockwise when seen from
/// -z. Each of the `n` side quads carries its own four vertices with the
/// flat outward normal bisecting its arc, at angle `(i + 0.5) * 2π/n`.
///
/// Totals: `6n` vertices and `4n - 4` triangles.
///
/// # Errors
///
/// Returns [`Error::DegeneratePolygon`] when `sides < 3`.
pub fn generate_prism(sides: u32) -> Result<GeometryData> {
    if sides < 3 {
        return Err(Error::DegeneratePolygon { sides });
    }

    let n = sides as usize;
    let theta = 2.0 * PI / sides as f32;
    let ring: Vec<[f32; 2]> = (0..n)
        .map(|i| {
            let angle = i as f32 * theta;
            [angle.cos(), angle.sin()]
        })
        .collect();

    let mut data = GeometryData::new();

    let front: Vec<[f32; 3]> = ring.iter().map(|p| [p[0], p[1], 1.0]).collect();
    let back: Vec<[f32; 3]> = ring.iter().rev().map(|p| [p[0], p[1], -1.0]).collect();
    data.push_convex_face(&front, [0.0, 0.0, 1.0]);
    data.push_convex_face(&back, [0.0, 0.0, -1.0]);

    for i in 0..n {
        let j = (i + 1) % n;
        let bisector = (i as f32 + 0.5) * theta;
        data.push_convex_face(
            &[
                [ring[i][0], ring[i][1], -1.0],
                [ring[j][0], ring[j][1], -1.0],
                [ring[j][0], ring[j][1], 1.0],
                [ring[i][0], ring[i][1], 1.0],
            ],
            [bisector.cos(), bisector.sin(), 0.0],
        );
    }

    Ok(data)
}

/// Generate a unit cube centered at the origin.
///
/// Extent is -0.5 to 0.5 on all axes; each face has its own four vertices
/// and outward normal. 24 vertices, 12 triangles.
pub fn generate_cube() -> GeometryData {
    let mut data = GeometryData::new();

    // Front (+Z)
    data.push_convex_face(
        &[
            [-0.5, -0.5, 0.5],
            [0.5, -0.5, 0.5],
            [0.5, 0.5, 0.5],
            [-0.5, 0.5, 0.5],
        ],
        [0.0, 0.0, 1.0],
    );
    // Back (-Z)
    data.push_convex_face(
        &[
            [-0.5, -0.5, -0.5],
            [-0.5, 0.5, -0.5],
            [0.5, 0.5, -0.5],
            [0.5, -0.5, -0.5],
        ],
        [0.0, 0.0, -1.0],
    );
    // Left (-X)
    data.push_convex_face(
        &[
            [-0.5, -0.5, -0.5],
            [-0.5, -0.5, 0.5],
            [-0.5, 0.5, 0.5],
            [-0.5, 0.5, -0.5],
        ],
        [-1.0, 0.0, 0.0],
    );
    // Right (+X)
    data.push_convex_face(
        &[
            [0.5, -0.5, 0.5],
            [0.5, -0.5, -0.5],
            [0.5, 0.5, -0.5],
            [0.5, 0.5, 0.5],
        ],
        [1.0, 0.0, 0.0],
    );
    // Top (+Y)
    data.push_convex_face(
        &[
            [-0.5, 0.5, 0.5],
            [0.5, 0.5, 0.5],
            [0.5, 0.5, -0.5],
            [-0.5, 0.5, -0.5],
        ],
        [0.0, 1.0, 0.0],
    );
    // Bottom (-Y)
    data.push_convex_face(
        &[
            [-0.5, -0.5, -0.5],
            [0.5, -0.5, -0.5],
            [0.5, -0.5, 0.5],
            [-0.5, -0.5, 0.5],
        ],
        [0.0, -1.0, 0.0],
    );

    data
}

/// Generate a right triangular prism (a wedge) spanning z = -1 to z = +1.
///
/// The cross-section is the right triangle with corners (0,1), (0,0) and
/// (1,0); the sloped face carries the exact normal `(1/√2, 1/√2, 0)`.
/// 18 vertices, 8 triangles.
pub fn generate_wedge() -> GeometryData {
    let mut data = GeometryData::new();

    // Front triangle (+Z)
    data.push_convex_face(
        &[[0.0, 1.0, 1.0], [0.0, 0.0, 1.0], [1.0, 0.0, 1.0]],
        [0.0, 0.0, 1.0],
    );
    // Back triangle (-Z)
    data.push_convex_face(
        &[[0.0, 1.0, -1.0], [1.0, 0.0, -1.0], [0.0, 0.0, -1.0]],
        [0.0, 0.0, -1.0],
    );
    // Slope
    data.push_convex_face(
        &[
            [0.0, 1.0, 1.0],
            [1.0, 0.0, 1.0],
            [1.0, 0.0, -1.0],
            [0.0, 1.0, -1.0],
        ],
        [FRAC_1_SQRT_2, FRAC_1_SQRT_2, 0.0],
    );
    // Base (-Y)
    data.push_convex_face(
        &[
            [1.0, 0.0, 1.0],
            [0.0, 0.0, 1.0],
            [0.0, 0.0, -1.0],
            [1.0, 0.0, -1.0],
        ],
        [0.0, -1.0, 0.0],
    );
    // Upright side (-X)
    data.push_convex_face(
        &[
            [0.0, 1.0, 1.0],
            [0.0, 1.0, -1.0],
            [0.0, 0.0, -1.0],
            [0.0, 0.0, 1.0],
        ],
        [-1.0, 0.0, 0.0],
    );

    data
}

/// Generate a truncated four-sided pyramid.
///
/// The base is a 3x3 square at y = 0, the top a 2x2 square at y = 1. The
/// four slant faces carry the exact outward normals `(0, 1, ±2)/√5` and
/// `(±2, 1, 0)/√5`. 24 vertices, 12 triangles.
pub fn generate_frustum() -> GeometryData {
    // 1/sqrt(5) and 2/sqrt(5)
    let a = 1.0 / 5.0_f32.sqrt();
    let b = 2.0 * a;

    let mut data = GeometryData::new();

    // Front slant (+Z)
    data.push_convex_face(
        &[
            [1.0, 1.0, 1.0],
            [-1.0, 1.0, 1.0],
            [-1.5, 0.0, 1.5],
            [1.5, 0.0, 1.5],
        ],
        [0.0, a, b],
    );
    // Right slant (+X)
    data.push_convex_face(
        &[
            [1.0, 1.0, 1.0],
            [1.5, 0.0, 1.5],
            [1.5, 0.0, -1.5],
            [1.0, 1.0, -1.0],
        ],
        [b, a, 0.0],
    );
    // Top (+Y)
    data.push_convex_face(
        &[
            [1.0, 1.0, 1.0],
            [1.0, 1.0, -1.0],
            [-1.0, 1.0, -1.0],
            [-1.0, 1.0, 1.0],
        ],
        [0.0, 1.0, 0.0],
    );
    // Left slant (-X)
    data.push_convex_face(
        &[
            [-1.0, 1.0, 1.0],
            [-1.0, 1.0, -1.0],
            [-1.5, 0.0, -1.5],
            [-1.5, 0.0, 1.5],
        ],
        [-b, a, 0.0],
    );
    // Bottom (-Y)
    data.push_convex_face(
        &[
            [-1.5, 0.0, -1.5],
            [1.5, 0.0, -1.5],
            [1.5, 0.0, 1.5],
            [-1.5, 0.0, 1.5],
        ],
        [0.0, -1.0, 0.0],
    );
    // Back slant (-Z)
    data.push_convex_face(
        &[
            [1.5, 0.0, -1.5],
            [-1.5, 0.0, -1.5],
            [-1.0, 1.0, -1.0],
            [1.0, 1.0, -1.0],
        ],
        [0.0, a, -b],
    );

    data
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn length(v: [f32; 3]) -> f32 {
        (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt()
    }

    /// Every triangle's geometric face normal must agree with the normal
    /// stored on its vertices, i.e. winding is counter-clockwise from
    /// outside.
    fn assert_winding_matches_normals(data: &GeometryData) {
        for triangle in data.indices.chunks(3) {
            let [i0, i1, i2] = [
                triangle[0] as usize,
                triangle[1] as usize,
                triangle[2] as usize,
            ];
            let (v0, v1, v2) = (data.positions[i0], data.positions[i1], data.positions[i2]);
            let e1 = [v1[0] - v0[0], v1[1] - v0[1], v1[2] - v0[2]];
            let e2 = [v2[0] - v0[0], v2[1] - v0[1], v2[2] - v0[2]];
            let cross = [
                e1[1] * e2[2] - e1[2] * e2[1],
                e1[2] * e2[0] - e1[0] * e2[2],
                e1[0] * e2[1] - e1[1] * e2[0],
            ];
            let n = data.normals[i0];
            let dot = cross[0] * n[0] + cross[1] * n[1] + cross[2] * n[2];
            assert!(
                dot > 0.0,
                "triangle {:?} winds against its normal {:?}",
                triangle,
                n
            );
        }
    }

    #[test]
    fn prism_vertex_and_triangle_counts() {
        for n in [3u32, 4, 5, 8, 20, 64] {
            let prism = generate_prism(n).unwrap();
            assert_eq!(prism.vertex_count(), 6 * n as usize, "vertices for n={n}");
            assert_eq!(
                prism.triangle_count(),
                4 * n as usize - 4,
                "triangles for n={n}"
            );
            assert!(prism.validate().is_ok());
        }
    }

    #[test]
    fn prism_spot_checks_from_small_sizes() {
        let tri = generate_prism(3).unwrap();
        assert_eq!(tri.vertex_count(), 18);
        assert_eq!(tri.triangle_count(), 8);
        assert_eq!(tri.indices.len(), 24);

        let square = generate_prism(4).unwrap();
        assert_eq!(square.vertex_count(), 24);
        assert_eq!(square.triangle_count(), 12);

        let wheel = generate_prism(20).unwrap();
        assert_eq!(wheel.vertex_count(), 120);
        assert_eq!(wheel.triangle_count(), 76);
    }

    #[test]
    fn prism_rejects_degenerate_polygons() {
        assert_eq!(generate_prism(0), Err(Error::DegeneratePolygon { sides: 0 }));
        assert_eq!(generate_prism(2), Err(Error::DegeneratePolygon { sides: 2 }));
    }

    #[test]
    fn prism_cap_normals_point_along_z() {
        let n = 7usize;
        let prism = generate_prism(n as u32).unwrap();
        // First n vertices are the front cap, next n the back cap.
        for i in 0..n {
            assert_eq!(prism.normals[i], [0.0, 0.0, 1.0]);
            assert_eq!(prism.normals[n + i], [0.0, 0.0, -1.0]);
        }
    }

    #[test]
    fn prism_side_normals_bisect_their_arc() {
        let prism = generate_prism(4).unwrap();
        let theta = 2.0 * PI / 4.0;
        // Side face i occupies 4 vertices starting at 2n + 4i.
        for i in 0..4 {
            let expected = ((i as f32 + 0.5) * theta).cos();
            let normal = prism.normals[8 + 4 * i];
            assert_relative_eq!(normal[0], expected, epsilon = 1e-6);
            assert_relative_eq!(normal[2], 0.0);
        }
    }

    #[test]
    fn prism_is_deterministic() {
        let a = generate_prism(9).unwrap();
        let b = generate_prism(9).unwrap();
        assert_eq!(a.positions, b.positions);
        assert_eq!(a.normals, b.normals);
        assert_eq!(a.indices, b.indices);
    }

    #[test]
    fn all_solids_have_unit_normals_and_consistent_winding() {
        let solids = [
            generate_prism(3).unwrap(),
            generate_prism(20).unwrap(),
            generate_cube(),
            generate_wedge(),
            generate_frustum(),
        ];
        for data in &solids {
            assert!(data.validate().is_ok());
            for &normal in &data.normals {
                assert_relative_eq!(length(normal), 1.0, epsilon = 1e-6);
            }
            assert_winding_matches_normals(data);
        }
    }

    #[test]
    fn cube_counts() {
        let cube = generate_cube();
        assert_eq!(cube.vertex_count(), 24);
        assert_eq!(cube.triangle_count(), 12);
    }

    #[test]
    fn wedge_counts_match_a_three_sided_prism() {
        let wedge = generate_wedge();
        assert_eq!(wedge.vertex_count(), 18);
        assert_eq!(wedge.triangle_count(), 8);
    }

    #[test]
    fn frustum_counts() {
        let frustum = generate_frustum();
        assert_eq!(frustum.vertex_count(), 24);
        assert_eq!(frustum.triangle_count(), 12);
    }
}
