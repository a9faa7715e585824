use planewarp_3d::GeometryError;
use planewarp_image::ImageError;
use thiserror::Error;

/// An error type for the render pipeline.
#[derive(Debug, Error, PartialEq)]
pub enum RenderError {
    /// A matrix derivation failed on degenerate geometry.
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    /// An image operation failed.
    #[error(transparent)]
    Image(#[from] ImageError),
}
