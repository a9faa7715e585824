use faer::prelude::SpSolver;

use crate::error::GeometryError;
use crate::transform2d::Mat3;

fn det_mat3(m: &Mat3) -> f64 {
    m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1])
        - m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0])
        + m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0])
}

/// Compute the homography matrix from four 2d point correspondences.
///
/// Builds the direct linear system from the correspondences, fixes the
/// bottom-right entry to 1 and solves the remaining 8x8 system.
///
/// * `src` - The source 2d points with shape (4, 2).
/// * `dst` - The destination 2d points with shape (4, 2).
///
/// # Errors
///
/// Returns [`GeometryError::DegenerateHomography`] when any 3 points of
/// either set are collinear or the correspondences otherwise fail to
/// determine an invertible transform.
pub fn get_perspective_transform(
    src: &[[f64; 2]; 4],
    dst: &[[f64; 2]; 4],
) -> Result<Mat3, GeometryError> {
    // construct matrix A
    let mut mat_a = faer::Mat::<f64>::zeros(8, 9);
    for i in 0..4 {
        let (s, d) = (src[i], dst[i]);

        mat_a.write(2 * i, 0, s[0]);
        mat_a.write(2 * i, 1, s[1]);
        mat_a.write(2 * i, 2, 1.0);
        mat_a.write(2 * i, 6, -d[0] * s[0]);
        mat_a.write(2 * i, 7, -d[0] * s[1]);
        mat_a.write(2 * i, 8, -d[0]);

        mat_a.write(2 * i + 1, 3, s[0]);
        mat_a.write(2 * i + 1, 4, s[1]);
        mat_a.write(2 * i + 1, 5, 1.0);
        mat_a.write(2 * i + 1, 6, -d[1] * s[0]);
        mat_a.write(2 * i + 1, 7, -d[1] * s[1]);
        mat_a.write(2 * i + 1, 8, -d[1]);
    }

    // solve for the first 8 entries of h, with h[8] fixed to 1
    let h = mat_a
        .submatrix(0, 0, 8, 8)
        .partial_piv_lu()
        .solve(-mat_a.submatrix(0, 8, 8, 1));

    let homo: Mat3 = [
        [h.read(0, 0), h.read(1, 0), h.read(2, 0)],
        [h.read(3, 0), h.read(4, 0), h.read(5, 0)],
        [h.read(6, 0), h.read(7, 0), 1.0],
    ];

    // a singular system surfaces as non-finite entries after the LU solve
    if !homo.iter().flatten().all(|v| v.is_finite()) {
        return Err(GeometryError::DegenerateHomography(
            "correspondences do not span a plane",
        ));
    }

    if det_mat3(&homo).abs() < 1e-8 {
        return Err(GeometryError::DegenerateHomography("determinant too small"));
    }

    Ok(homo)
}
