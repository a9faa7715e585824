#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Scene configuration.
pub mod config;

/// Error types for the render pipeline.
pub mod error;

/// The warp pipeline itself.
pub mod pipeline;

pub use crate::config::{ProjectionParams, RenderConfig};
pub use crate::error::RenderError;
pub use crate::pipeline::{
    border_corner_track, draw_canvas, render_combined, render_sequential, scene_matrices,
    SceneMatrices,
};
