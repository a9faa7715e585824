use planewarp_image::ImageSize;

/// Parameters of the 3d plane projection, as fed to
/// [`planewarp_3d::projection::projection_matrix`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectionParams {
    /// A point on the projection plane.
    pub point: [f64; 3],
    /// Normal of the projection plane.
    pub normal: [f64; 3],
    /// Eye point the projection rays converge at.
    pub perspective: [f64; 3],
}

/// Configuration for the planar warp scene.
///
/// Groups everything the pipeline needs so that it can be driven without
/// global state: the canvas, the border rectangle drawn on it, the 2d
/// transform parameters and the 3d projection.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    /// Size of the canvas, which is also the fixed output size of every warp.
    pub canvas_size: ImageSize,
    /// Background gray level of the canvas.
    pub background: [u8; 3],
    /// Inset of the border rectangle from the canvas edges, in pixels.
    pub border_offset: usize,
    /// Color of the border rectangle.
    pub border_color: [u8; 3],
    /// Line thickness of the border rectangle.
    pub border_thickness: usize,
    /// Translation (dx, dy) applied after the projective warp.
    pub translation: [f64; 2],
    /// Rotation in degrees applied last.
    pub rotation_deg: f64,
    /// The 3d plane projection to reduce to a 2d homography.
    pub projection: ProjectionParams,
    /// Size (width, height) of the planar reference quadrilateral used for
    /// the reduction.
    pub quad_size: [f64; 2],
}

impl Default for RenderConfig {
    /// The demo scene: a 600x400 gray canvas with a blue border rectangle,
    /// projected from a viewpoint left of the plane, then translated by
    /// (100, 100) and rotated by 30 degrees.
    fn default() -> Self {
        Self {
            canvas_size: ImageSize {
                width: 600,
                height: 400,
            },
            background: [150, 150, 150],
            border_offset: 50,
            border_color: [0, 0, 255],
            border_thickness: 3,
            translation: [100.0, 100.0],
            rotation_deg: 30.0,
            projection: ProjectionParams {
                point: [-300.0, 200.0, 300.0],
                normal: [-2.0, 0.0, 1.0],
                perspective: [-600.0, 200.0, 600.0],
            },
            quad_size: [200.0, 100.0],
        }
    }
}

impl RenderConfig {
    /// Corners of the border rectangle, counter-clockwise from the top left
    /// in y-down coordinates.
    pub fn border_corners(&self) -> [[f64; 2]; 4] {
        let (w, h) = (self.canvas_size.width as f64, self.canvas_size.height as f64);
        let o = self.border_offset as f64;
        [[o, o], [w - o, o], [w - o, h - o], [o, h - o]]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_scene() {
        let config = RenderConfig::default();
        assert_eq!(config.canvas_size.width, 600);
        assert_eq!(config.canvas_size.height, 400);
        assert_eq!(
            config.border_corners(),
            [
                [50.0, 50.0],
                [550.0, 50.0],
                [550.0, 350.0],
                [50.0, 350.0]
            ]
        );
    }
}
