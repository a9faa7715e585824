use crate::error::GeometryError;
use crate::ops::{dot3, normalized3, sub3, EPS};

/// Dense row-major 4x4 matrix for 3d homogeneous transforms.
pub type Mat4 = [[f64; 4]; 4];

fn identity4() -> Mat4 {
    let mut m = [[0.0; 4]; 4];
    for (i, row) in m.iter_mut().enumerate() {
        row[i] = 1.0;
    }
    m
}

/// Build a 4x4 matrix projecting onto the plane through `point` with `normal`.
///
/// The projection kind depends on the optional arguments:
///
/// * `perspective` - rays converge at the given eye point (a true
///   perspective projection; the result has a non-trivial bottom row).
/// * `direction` - parallel projection along the given direction.
/// * neither - orthogonal projection onto the plane.
///
/// # Errors
///
/// * [`GeometryError::DegeneratePlane`] for a zero-length normal.
/// * [`GeometryError::DegenerateProjection`] when `direction` is parallel to
///   the plane.
pub fn projection_matrix(
    point: &[f64; 3],
    normal: &[f64; 3],
    direction: Option<&[f64; 3]>,
    perspective: Option<&[f64; 3]>,
) -> Result<Mat4, GeometryError> {
    let n = normalized3(normal)?;
    let point_dot_n = dot3(point, &n);

    let m = if let Some(eye) = perspective {
        let mut m = [[0.0; 4]; 4];
        let depth = dot3(&sub3(eye, point), &n);
        for i in 0..3 {
            for j in 0..3 {
                m[i][j] = if i == j { depth } else { 0.0 } - eye[i] * n[j];
            }
            m[i][3] = point_dot_n * eye[i];
            m[3][i] = -n[i];
        }
        m[3][3] = dot3(eye, &n);
        m
    } else if let Some(dir) = direction {
        let scale = dot3(dir, &n);
        if scale.abs() <= EPS {
            return Err(GeometryError::DegenerateProjection);
        }
        let mut m = identity4();
        for i in 0..3 {
            for j in 0..3 {
                m[i][j] -= dir[i] * n[j] / scale;
            }
            m[i][3] = dir[i] * (point_dot_n / scale);
        }
        m
    } else {
        let mut m = identity4();
        for i in 0..3 {
            for j in 0..3 {
                m[i][j] -= n[i] * n[j];
            }
            m[i][3] = point_dot_n * n[i];
        }
        m
    };

    Ok(m)
}

/// Apply a 4x4 matrix to a 3d point in homogeneous form, with perspective
/// division.
///
/// # Errors
///
/// Returns [`GeometryError::DegenerateProjection`] when the point maps to
/// the plane at infinity (`w == 0`).
pub fn project_point3(p: &[f64; 3], m: &Mat4) -> Result<[f64; 3], GeometryError> {
    let h = [p[0], p[1], p[2], 1.0];
    let mut out = [0.0; 4];
    for (i, val) in out.iter_mut().enumerate() {
        *val = m[i][0] * h[0] + m[i][1] * h[1] + m[i][2] * h[2] + m[i][3] * h[3];
    }

    if out[3] == 0.0 {
        return Err(GeometryError::DegenerateProjection);
    }

    Ok([out[0] / out[3], out[1] / out[3], out[2] / out[3]])
}
