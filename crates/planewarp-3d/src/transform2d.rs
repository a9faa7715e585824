//! 2d homogeneous transforms over column vectors.
//!
//! Convention used across the whole crate: points are column vectors and
//! matrices post-multiply, `p' = M * [x, y, 1]^T`. Combined transforms
//! therefore read right to left: `M3 * M2 * M1` applies `M1` first.

use crate::error::GeometryError;

/// Dense row-major 3x3 matrix for 2d projective transforms.
pub type Mat3 = [[f64; 3]; 3];

/// Lift a 2d point to homogeneous coordinates `[x, y, 1]`.
pub fn to_homogeneous(p: &[f64; 2]) -> [f64; 3] {
    [p[0], p[1], 1.0]
}

/// Perspective division back to integer pixel coordinates.
///
/// Coordinates are truncated toward zero.
///
/// # Errors
///
/// Returns [`GeometryError::DegenerateProjection`] when the point lies on
/// the line at infinity (`w == 0`).
pub fn from_homogeneous(v: &[f64; 3]) -> Result<[i64; 2], GeometryError> {
    if v[2] == 0.0 {
        return Err(GeometryError::DegenerateProjection);
    }
    Ok([(v[0] / v[2]) as i64, (v[1] / v[2]) as i64])
}

/// Apply a 3x3 transform to a 2d point, with perspective division.
pub fn transform_point2(p: &[f64; 2], m: &Mat3) -> Result<[i64; 2], GeometryError> {
    from_homogeneous(&mat3_mul_vec3(m, &to_homogeneous(p)))
}

/// Homogeneous translation matrix.
#[rustfmt::skip]
pub fn translation(dx: f64, dy: f64) -> Mat3 {
    [
        [1.0, 0.0, dx ],
        [0.0, 1.0, dy ],
        [0.0, 0.0, 1.0],
    ]
}

/// Rotation about the origin by an angle in degrees.
///
/// The sign placement `[[cos, sin], [-sin, cos]]` rotates points
/// counter-clockwise on screen in y-down image coordinates.
#[rustfmt::skip]
pub fn rotation_deg(angle: f64) -> Mat3 {
    let a = angle.to_radians();
    [
        [ a.cos(), a.sin(), 0.0],
        [-a.sin(), a.cos(), 0.0],
        [   0.0  ,   0.0  , 1.0],
    ]
}

/// Diagonal scale about the origin.
#[rustfmt::skip]
pub fn axis_scale(sx: f64, sy: f64) -> Mat3 {
    [
        [sx , 0.0, 0.0],
        [0.0, sy , 0.0],
        [0.0, 0.0, 1.0],
    ]
}

/// Product of two 3x3 matrices.
pub fn mat3_mul(a: &Mat3, b: &Mat3) -> Mat3 {
    let mut out = [[0.0; 3]; 3];
    for (i, row) in out.iter_mut().enumerate() {
        for (j, val) in row.iter_mut().enumerate() {
            *val = a[i][0] * b[0][j] + a[i][1] * b[1][j] + a[i][2] * b[2][j];
        }
    }
    out
}

/// Product of a 3x3 matrix with a homogeneous 3-vector.
pub fn mat3_mul_vec3(m: &Mat3, v: &[f64; 3]) -> [f64; 3] {
    [
        m[0][0] * v[0] + m[0][1] * v[1] + m[0][2] * v[2],
        m[1][0] * v[0] + m[1][1] * v[1] + m[1][2] * v[2],
        m[2][0] * v[0] + m[2][1] * v[1] + m[2][2] * v[2],
    ]
}

/// Flatten a 3x3 matrix to the row-major single precision layout used by the
/// image warping operators.
pub fn mat3_as_row_major_f32(m: &Mat3) -> [f32; 9] {
    [
        m[0][0] as f32,
        m[0][1] as f32,
        m[0][2] as f32,
        m[1][0] as f32,
        m[1][1] as f32,
        m[1][2] as f32,
        m[2][0] as f32,
        m[2][1] as f32,
        m[2][2] as f32,
    ]
}
