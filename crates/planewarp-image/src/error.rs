/// An error type for the image module.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ImageError {
    /// Error when channel and shape are not valid.
    #[error("Data length ({0}) does not match the image size ({1})")]
    InvalidChannelShape(usize, usize),

    /// Error when the pixel data cannot be cast to the requested type.
    #[error("Failed to cast the pixel data")]
    CastError,

    /// Error when the pixel index is out of bounds.
    #[error("Pixel index ({0}, {1}) out of bounds for image of size ({2}, {3})")]
    PixelIndexOutOfBounds(usize, usize, usize, usize),

    /// Error when the channel index is out of bounds.
    #[error("Channel index {0} out of bounds for image with {1} channels")]
    ChannelIndexOutOfBounds(usize, usize),

    /// Error when a transform matrix is not invertible.
    #[error("Cannot compute the determinant of the transform matrix")]
    CannotComputeDeterminant,
}
