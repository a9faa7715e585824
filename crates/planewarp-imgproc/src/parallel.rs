use rayon::prelude::*;

use planewarp_image::Image;

/// Apply a resampling function to each destination pixel, in parallel by rows.
///
/// # Arguments
///
/// * `dst` - The destination image to fill.
/// * `map_x` - Row-major buffer with the source x coordinate for each pixel.
/// * `map_y` - Row-major buffer with the source y coordinate for each pixel.
/// * `f` - The resampling function receiving (x, y, dst_pixel).
///
/// PRECONDITION: `map_x` and `map_y` have one entry per destination pixel.
pub fn par_iter_rows_resample<const C: usize>(
    dst: &mut Image<f32, C>,
    map_x: &[f32],
    map_y: &[f32],
    f: impl Fn(&f32, &f32, &mut [f32]) + Send + Sync,
) {
    let cols = dst.cols();

    dst.as_slice_mut()
        .par_chunks_exact_mut(C * cols)
        .zip(map_x.par_chunks_exact(cols))
        .zip(map_y.par_chunks_exact(cols))
        .for_each(|((dst_chunk, map_x_chunk), map_y_chunk)| {
            dst_chunk
                .chunks_exact_mut(C)
                .zip(map_x_chunk.iter().zip(map_y_chunk.iter()))
                .for_each(|(dst_pixel, (x, y))| {
                    f(x, y, dst_pixel);
                });
        });
}
