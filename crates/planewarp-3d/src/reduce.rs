use crate::error::GeometryError;
use crate::homography::get_perspective_transform;
use crate::plane::LocalFrame;
use crate::projection::{project_point3, Mat4};
use crate::transform2d::Mat3;

/// Axis-aligned reference rectangle in the z = 0 plane.
///
/// Corners are ordered counter-clockwise starting at the origin, so the
/// first corner is the local frame origin and the last corner fixes the
/// local Y axis.
pub fn reference_quad(width: f64, height: f64) -> [[f64; 3]; 4] {
    [
        [0.0, 0.0, 0.0],
        [width, 0.0, 0.0],
        [width, height, 0.0],
        [0.0, height, 0.0],
    ]
}

/// Reduce a 4x4 plane-projection matrix to the equivalent 3x3 homography.
///
/// Projects the four corners of `quad` through `m` (with perspective
/// division), flattens the original and the projected quad to local 2d
/// coordinates with independently derived [`LocalFrame`]s, and solves the
/// 4-point homography between the two flat quads.
///
/// The projected corners are treated as coplanar even though a general
/// projective matrix need not keep them exactly planar; this is a
/// deliberate approximation that holds for projections onto a plane, the
/// intended use of this reduction.
///
/// # Errors
///
/// Any geometric degeneracy aborts the reduction: a quad corner mapped to
/// infinity, a degenerate plane frame on either quad, or an unsolvable
/// 4-point correspondence.
pub fn reduce_projection(m: &Mat4, quad: &[[f64; 3]; 4]) -> Result<Mat3, GeometryError> {
    let mut projected = [[0.0; 3]; 4];
    for (dst, src) in projected.iter_mut().zip(quad.iter()) {
        *dst = project_point3(src, m)?;
    }

    let src_frame = LocalFrame::from_points(quad)?;
    let dst_frame = LocalFrame::from_points(&projected)?;

    let mut src_2d = [[0.0; 2]; 4];
    let mut dst_2d = [[0.0; 2]; 4];
    for i in 0..4 {
        src_2d[i] = src_frame.project(&quad[i]);
        dst_2d[i] = dst_frame.project(&projected[i]);
    }

    get_perspective_transform(&src_2d, &dst_2d)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::projection_matrix;
    use approx::assert_relative_eq;

    fn identity4() -> Mat4 {
        let mut m = [[0.0; 4]; 4];
        for (i, row) in m.iter_mut().enumerate() {
            row[i] = 1.0;
        }
        m
    }

    #[test]
    fn identity_reduces_to_identity() -> Result<(), GeometryError> {
        let quad = reference_quad(200.0, 100.0);
        let homo = reduce_projection(&identity4(), &quad)?;

        let expected = [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]];
        for i in 0..3 {
            for j in 0..3 {
                assert_relative_eq!(homo[i][j], expected[i][j], epsilon = 1e-9);
            }
        }
        Ok(())
    }

    #[test]
    fn in_plane_translation_is_absorbed() -> Result<(), GeometryError> {
        // each quad derives its own local frame, so a rigid in-plane motion
        // reduces to the identity homography
        let mut m = identity4();
        m[0][3] = 5.0;
        m[1][3] = 7.0;

        let quad = reference_quad(200.0, 100.0);
        let homo = reduce_projection(&m, &quad)?;

        for i in 0..3 {
            for j in 0..3 {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert_relative_eq!(homo[i][j], expected, epsilon = 1e-9);
            }
        }
        Ok(())
    }

    #[test]
    fn perspective_scene_matrix() -> Result<(), GeometryError> {
        let m = projection_matrix(
            &[-300.0, 200.0, 300.0],
            &[-2.0, 0.0, 1.0],
            None,
            Some(&[-600.0, 200.0, 600.0]),
        )?;
        let quad = reference_quad(200.0, 100.0);
        let homo = reduce_projection(&m, &quad)?;

        // pinned regression values for the demo scene
        let expected = [
            [0.37267799624996506, 0.0, 0.0],
            [0.11111111111111115, 0.5, 0.0],
            [0.0011111111111111115, 0.0, 1.0],
        ];
        for i in 0..3 {
            for j in 0..3 {
                assert_relative_eq!(homo[i][j], expected[i][j], epsilon = 1e-9);
            }
        }
        Ok(())
    }

    #[test]
    fn reduction_is_deterministic() -> Result<(), GeometryError> {
        let m = projection_matrix(
            &[-300.0, 200.0, 300.0],
            &[-2.0, 0.0, 1.0],
            None,
            Some(&[-600.0, 200.0, 600.0]),
        )?;
        let quad = reference_quad(200.0, 100.0);

        let first = reduce_projection(&m, &quad)?;
        let second = reduce_projection(&m, &quad)?;
        assert_eq!(first, second);
        Ok(())
    }

    #[test]
    fn degenerate_quad_is_rejected() {
        // all corners on one line
        let quad = [
            [0.0, 0.0, 0.0],
            [1.0, 0.0, 0.0],
            [2.0, 0.0, 0.0],
            [3.0, 0.0, 0.0],
        ];
        assert!(matches!(
            reduce_projection(&identity4(), &quad),
            Err(GeometryError::DegeneratePlane(_))
        ));
    }
}
