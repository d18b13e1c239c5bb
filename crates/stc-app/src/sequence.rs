//! Image-sequence frame source.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use stc_core::{FrameBuffer, PixelFormat};

const EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "bmp", "pgm", "ppm", "tif", "tiff"];

/// Image files in `dir`, sorted by file name.
pub fn list_frames(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut paths: Vec<PathBuf> = std::fs::read_dir(dir)
        .with_context(|| format!("reading frame directory {}", dir.display()))?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|p| {
            p.extension()
                .and_then(|e| e.to_str())
                .is_some_and(|e| EXTENSIONS.contains(&e.to_ascii_lowercase().as_str()))
        })
        .collect();
    paths.sort();
    if paths.is_empty() {
        bail!("no image frames found in {}", dir.display());
    }
    Ok(paths)
}

/// Decode one frame as packed RGB.
pub fn load_frame(path: &Path) -> Result<FrameBuffer> {
    let rgb = image::open(path)
        .with_context(|| format!("decoding {}", path.display()))?
        .to_rgb8();
    let (width, height) = rgb.dimensions();
    Ok(FrameBuffer::from_raw(
        width,
        height,
        PixelFormat::Rgb8,
        rgb.into_raw(),
    )?)
}
