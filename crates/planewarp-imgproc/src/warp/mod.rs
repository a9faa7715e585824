//! Geometric image warping under a projective transform.

mod perspective;

pub use perspective::warp_perspective;
