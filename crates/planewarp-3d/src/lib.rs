#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Error types for the geometric routines.
pub mod error;

/// Vector operations on 3d points.
pub mod ops;

/// 2d homogeneous transforms and matrix builders.
pub mod transform2d;

/// Local 2d coordinate frames on 3d planes.
pub mod plane;

/// 3d plane-projection matrix construction.
pub mod projection;

/// Homography estimation from point correspondences.
pub mod homography;

/// Reduction of 4x4 plane projections to 3x3 homographies.
pub mod reduce;

pub use crate::error::GeometryError;
pub use crate::projection::Mat4;
pub use crate::transform2d::Mat3;
