//! Square and round launcher icons for every mipmap density.

use anyhow::{Context, Result};
use image::imageops::FilterType;
use image::RgbaImage;
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::mipmap::{Density, DENSITIES, ROUND_ICON_NAME, SQUARE_ICON_NAME};
use crate::mask;

/// Files written for one density
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconPair {
    pub folder: &'static str,
    pub size: u32,
    pub square: PathBuf,
    pub round: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResizeOutcome {
    /// One pair per density, in table order
    Generated(Vec<IconPair>),
    /// Source did not exist; nothing was written
    SourceMissing(PathBuf),
}

/// Load `source_path` and write the launcher icons under `res_dir`.
///
/// A missing source is reported and returned as
/// [`ResizeOutcome::SourceMissing`] before anything touches the disk.
pub fn create_icons(source_path: &Path, res_dir: &Path) -> Result<ResizeOutcome> {
    if !source_path.exists() {
        eprintln!("⚠️  Source image not found: {}", source_path.display());
        return Ok(ResizeOutcome::SourceMissing(source_path.to_path_buf()));
    }

    let img = image::open(source_path)
        .with_context(|| format!("Failed to open source image {}", source_path.display()))?
        .to_rgba8();
    log::info!(
        "Loaded {} ({}x{})",
        source_path.display(),
        img.width(),
        img.height()
    );

    let pairs = create_icons_from_image(&img, res_dir)?;
    Ok(ResizeOutcome::Generated(pairs))
}

/// Write the launcher icons for an image that is already in memory.
pub fn create_icons_from_image(img: &RgbaImage, res_dir: &Path) -> Result<Vec<IconPair>> {
    let mut pairs = Vec::with_capacity(DENSITIES.len());

    for density in DENSITIES {
        let pair = write_density(img, res_dir, density)?;
        println!(
            "Generated icons for {} ({}x{})",
            density.folder, density.size, density.size
        );
        pairs.push(pair);
    }

    Ok(pairs)
}

fn write_density(img: &RgbaImage, res_dir: &Path, density: &Density) -> Result<IconPair> {
    let folder_path = res_dir.join(density.folder);
    fs::create_dir_all(&folder_path)
        .with_context(|| format!("Failed to create {}", folder_path.display()))?;

    let square_path = folder_path.join(SQUARE_ICON_NAME);
    square_icon(img, density.size)
        .save(&square_path)
        .with_context(|| format!("Failed to write {}", square_path.display()))?;
    log::debug!("wrote {}", square_path.display());

    let round_path = folder_path.join(ROUND_ICON_NAME);
    round_icon(img, density.size)?
        .save(&round_path)
        .with_context(|| format!("Failed to write {}", round_path.display()))?;
    log::debug!("wrote {}", round_path.display());

    Ok(IconPair {
        folder: density.folder,
        size: density.size,
        square: square_path,
        round: round_path,
    })
}

/// Stretch to `size`x`size`; aspect ratio is not preserved.
pub fn square_icon(img: &RgbaImage, size: u32) -> RgbaImage {
    mask::resize_premultiplied(img, size, size, FilterType::Lanczos3)
}

/// Centered fit with the alpha channel replaced by a circular mask.
pub fn round_icon(img: &RgbaImage, size: u32) -> Result<RgbaImage> {
    let mut icon = mask::fit_square(img, size);
    mask::apply_alpha_mask(&mut icon, &mask::circle_mask(size))?;
    Ok(icon)
}
