use crate::error::GeometryError;
use crate::ops::{cross3, dot3, norm3, normalized3, sub3, EPS};

/// Orthonormal 2d coordinate frame embedded in a 3d plane.
///
/// Derived from an ordered set of coplanar points: the first point becomes
/// the local origin, the last point fixes the local Y axis direction and the
/// second point disambiguates the plane normal.
#[derive(Debug, Clone, PartialEq)]
pub struct LocalFrame {
    /// Local origin of the frame.
    pub origin: [f64; 3],
    /// In-plane unit vector of the local X axis.
    pub x_axis: [f64; 3],
    /// In-plane unit vector of the local Y axis.
    pub y_axis: [f64; 3],
}

impl LocalFrame {
    /// Derive the frame from an ordered set of at least 3 coplanar points.
    ///
    /// # Errors
    ///
    /// * [`GeometryError::NotEnoughPoints`] for fewer than 3 points.
    /// * [`GeometryError::DegeneratePlane`] when an axis vector has zero
    ///   length or the points are collinear.
    pub fn from_points(points: &[[f64; 3]]) -> Result<Self, GeometryError> {
        if points.len() < 3 {
            return Err(GeometryError::NotEnoughPoints(points.len()));
        }

        let origin = points[0];
        let y_axis = normalized3(&sub3(&points[points.len() - 1], &origin))?;

        // orthogonal to the polygon plane, only used as an intermediate
        let normal = cross3(&y_axis, &sub3(&points[1], &origin));
        if norm3(&normal) <= EPS {
            return Err(GeometryError::DegeneratePlane("collinear points"));
        }

        let x_axis = normalized3(&cross3(&normal, &y_axis))?;

        Ok(Self {
            origin,
            x_axis,
            y_axis,
        })
    }

    /// Local 2d coordinates of a point lying on the plane.
    pub fn project(&self, p: &[f64; 3]) -> [f64; 2] {
        let d = sub3(p, &self.origin);
        [dot3(&d, &self.x_axis), dot3(&d, &self.y_axis)]
    }
}

/// Local 2d coordinates of each point of a coplanar 3d point set.
///
/// For exactly coplanar, non-collinear input this is an isometric 2d
/// parameterization of the plane: pairwise distances and angles within the
/// plane are preserved.
pub fn local_coords(points: &[[f64; 3]]) -> Result<Vec<[f64; 2]>, GeometryError> {
    let frame = LocalFrame::from_points(points)?;
    Ok(points.iter().map(|p| frame.project(p)).collect())
}
