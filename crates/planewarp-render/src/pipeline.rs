use planewarp_3d::projection::projection_matrix;
use planewarp_3d::reduce::{reduce_projection, reference_quad};
use planewarp_3d::transform2d::{
    mat3_as_row_major_f32, mat3_mul, rotation_deg, transform_point2, translation, Mat3,
};
use planewarp_image::Image;
use planewarp_imgproc::draw::draw_rect;
use planewarp_imgproc::interpolation::InterpolationMode;
use planewarp_imgproc::warp::warp_perspective;

use crate::config::RenderConfig;
use crate::error::RenderError;

/// The three 3x3 matrices of the scene, in application order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneMatrices {
    /// The reduced plane-projection homography, applied first.
    pub projective: Mat3,
    /// The translation, applied second.
    pub translation: Mat3,
    /// The rotation, applied last.
    pub rotation: Mat3,
}

impl SceneMatrices {
    /// Single matrix equivalent of the chain, in right-to-left column-vector
    /// order: `rotation * translation * projective`.
    ///
    /// Warping once with this product is NOT equivalent to warping three
    /// times in sequence: each intermediate warp clips to the fixed canvas
    /// bounds and resamples, so content discarded by one stage never reaches
    /// the next. The product is exposed for comparison, not as a shortcut.
    pub fn combined(&self) -> Mat3 {
        mat3_mul(&self.rotation, &mat3_mul(&self.translation, &self.projective))
    }
}

/// Derive the three scene matrices from the configuration.
pub fn scene_matrices(config: &RenderConfig) -> Result<SceneMatrices, RenderError> {
    let projection = projection_matrix(
        &config.projection.point,
        &config.projection.normal,
        None,
        Some(&config.projection.perspective),
    )?;

    let quad = reference_quad(config.quad_size[0], config.quad_size[1]);
    let projective = reduce_projection(&projection, &quad)?;
    log::debug!("reduced projective matrix: {projective:?}");

    Ok(SceneMatrices {
        projective,
        translation: translation(config.translation[0], config.translation[1]),
        rotation: rotation_deg(config.rotation_deg),
    })
}

/// Draw the scene canvas: a solid background with a border rectangle.
pub fn draw_canvas(config: &RenderConfig) -> Result<Image<f32, 3>, RenderError> {
    let size = config.canvas_size;
    let data = config
        .background
        .iter()
        .copied()
        .cycle()
        .take(size.width * size.height * 3)
        .collect();
    let mut canvas = Image::<u8, 3>::new(size, data)?;

    let offset = config.border_offset as i64;
    draw_rect(
        &mut canvas,
        (offset, offset),
        (size.width as i64 - offset, size.height as i64 - offset),
        config.border_color,
        config.border_thickness,
    );

    Ok(canvas.cast()?)
}

/// Render the scene by warping the canvas once per matrix, in sequence.
///
/// Every intermediate image is clipped to the canvas size, matching the
/// behavior of chaining warp calls with a fixed output size.
pub fn render_sequential(config: &RenderConfig) -> Result<Image<f32, 3>, RenderError> {
    let matrices = scene_matrices(config)?;
    let mut image = draw_canvas(config)?;

    for m in [
        &matrices.projective,
        &matrices.translation,
        &matrices.rotation,
    ] {
        let mut warped = Image::from_size_val(config.canvas_size, 0.0)?;
        warp_perspective(
            &image,
            &mut warped,
            &mat3_as_row_major_f32(m),
            InterpolationMode::Bilinear,
        )?;
        image = warped;
    }

    Ok(image)
}

/// Render the scene with a single warp of the combined matrix product.
///
/// Yields a visibly different image than [`render_sequential`], see
/// [`SceneMatrices::combined`].
pub fn render_combined(config: &RenderConfig) -> Result<Image<f32, 3>, RenderError> {
    let matrices = scene_matrices(config)?;
    let canvas = draw_canvas(config)?;

    let mut warped = Image::from_size_val(config.canvas_size, 0.0)?;
    warp_perspective(
        &canvas,
        &mut warped,
        &mat3_as_row_major_f32(&matrices.combined()),
        InterpolationMode::Bilinear,
    )?;

    Ok(warped)
}

/// Track the border rectangle corners through the sequential matrix chain.
///
/// Each corner is pushed through the projective, translation and rotation
/// matrices one at a time, re-quantized to pixel coordinates between steps
/// exactly as the sequential warps quantize the image.
pub fn border_corner_track(config: &RenderConfig) -> Result<[[i64; 2]; 4], RenderError> {
    let matrices = scene_matrices(config)?;

    let mut tracked = [[0i64; 2]; 4];
    for (out, corner) in tracked.iter_mut().zip(config.border_corners().iter()) {
        let mut p = *corner;
        for m in [
            &matrices.projective,
            &matrices.translation,
            &matrices.rotation,
        ] {
            let q = transform_point2(&p, m)?;
            p = [q[0] as f64, q[1] as f64];
        }
        *out = [p[0] as i64, p[1] as i64];
        log::debug!("border corner {corner:?} -> {out:?}");
    }

    Ok(tracked)
}
