use std::path::{Path, PathBuf};

use argh::FromArgs;

use planewarp_image::Image;
use planewarp_render::{border_corner_track, render_combined, render_sequential, RenderConfig};

/// Render the planar perspective warp scene.
#[derive(FromArgs)]
struct Args {
    /// directory the rendered images are written to
    #[argh(option, default = "PathBuf::from(\".\")")]
    output_dir: PathBuf,
}

fn save_png(img: &Image<f32, 3>, path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let data = img
        .as_slice()
        .iter()
        .map(|&v| v.round().clamp(0.0, 255.0) as u8)
        .collect();

    let buffer = image::RgbImage::from_raw(img.width() as u32, img.height() as u32, data)
        .ok_or("failed to build the output image buffer")?;
    buffer.save(path)?;

    log::info!("wrote {}", path.display());
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args: Args = argh::from_env();

    let config = RenderConfig::default();

    let sequential = render_sequential(&config)?;
    save_png(&sequential, &args.output_dir.join("sequential.png"))?;

    // one warp of the matrix product, for comparison with the chain above
    let combined = render_combined(&config)?;
    save_png(&combined, &args.output_dir.join("combined.png"))?;

    let corners = border_corner_track(&config)?;
    println!("warped border corners: {corners:?}");

    Ok(())
}
