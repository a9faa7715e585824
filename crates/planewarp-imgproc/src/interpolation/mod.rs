//! Pixel interpolation methods for image transformations.
//!
//! Provides the resampling kernels used when warping images under a
//! geometric transform.

mod bilinear;
mod nearest;

pub(crate) mod grid;

mod interpolate;

pub use interpolate::{interpolate_pixel, InterpolationMode};
