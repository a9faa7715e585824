use thiserror::Error;

/// Errors produced by the geometric derivation routines.
///
/// All of these are unrecoverable for the current derivation; no partial
/// matrix is ever returned.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GeometryError {
    /// A planar frame needs at least three points.
    #[error("expected at least 3 coplanar points, got {0}")]
    NotEnoughPoints(usize),

    /// The point set does not span a plane.
    #[error("degenerate plane: {0}")]
    DegeneratePlane(&'static str),

    /// A point was mapped to the line at infinity.
    #[error("degenerate projection: point maps to infinity")]
    DegenerateProjection,

    /// The correspondences do not determine a homography.
    #[error("degenerate homography: {0}")]
    DegenerateHomography(&'static str),
}
