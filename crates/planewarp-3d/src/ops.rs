use crate::error::GeometryError;

/// Tolerance below which a vector norm is treated as zero.
pub(crate) const EPS: f64 = 1e-12;

/// Dot product of two 3d vectors.
pub fn dot3(a: &[f64; 3], b: &[f64; 3]) -> f64 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

/// Cross product of two 3d vectors.
pub fn cross3(a: &[f64; 3], b: &[f64; 3]) -> [f64; 3] {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}

/// Difference of two 3d vectors.
pub fn sub3(a: &[f64; 3], b: &[f64; 3]) -> [f64; 3] {
    [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
}

/// Euclidean norm of a 3d vector.
pub fn norm3(a: &[f64; 3]) -> f64 {
    dot3(a, a).sqrt()
}

/// Unit vector in the direction of `a`.
///
/// # Errors
///
/// Returns [`GeometryError::DegeneratePlane`] for a zero-length vector
/// instead of dividing by zero.
pub fn normalized3(a: &[f64; 3]) -> Result<[f64; 3], GeometryError> {
    let n = norm3(a);
    if n <= EPS {
        return Err(GeometryError::DegeneratePlane("zero-length vector"));
    }
    Ok([a[0] / n, a[1] / n, a[2] / n])
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_cross3_basis() {
        let x = [1.0, 0.0, 0.0];
        let y = [0.0, 1.0, 0.0];
        assert_eq!(cross3(&x, &y), [0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_dot3_orthogonal() {
        let a = [1.0, 2.0, 3.0];
        let b = [3.0, 0.0, -1.0];
        assert_relative_eq!(dot3(&a, &b), 0.0);
    }

    #[test]
    fn test_normalized3() -> Result<(), GeometryError> {
        let v = normalized3(&[3.0, 0.0, 4.0])?;
        assert_relative_eq!(norm3(&v), 1.0);
        assert_relative_eq!(v[0], 0.6);
        assert_relative_eq!(v[2], 0.8);
        Ok(())
    }

    #[test]
    fn test_normalized3_zero() {
        assert_eq!(
            normalized3(&[0.0, 0.0, 0.0]),
            Err(GeometryError::DegeneratePlane("zero-length vector"))
        );
    }
}
