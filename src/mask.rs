//! Masking helpers for the round launcher icon

use anyhow::{Result, bail};
use image::imageops::{self, FilterType};
use image::{GrayImage, Luma, Rgba, Rgba32FImage, RgbaImage};

/// Opaque disk inscribed in a `size`x`size` square, transparent outside.
///
/// A pixel is inside when its center lies within `size / 2` of the
/// square's center.
pub fn circle_mask(size: u32) -> GrayImage {
    let radius = size as f32 / 2.0;
    let r2 = radius * radius;

    GrayImage::from_fn(size, size, |x, y| {
        let dx = x as f32 + 0.5 - radius;
        let dy = y as f32 + 0.5 - radius;
        if dx * dx + dy * dy <= r2 {
            Luma([255])
        } else {
            Luma([0])
        }
    })
}

/// Crop the largest centered square out of `img` and resample it to
/// `size`x`size`.
pub fn fit_square(img: &RgbaImage, size: u32) -> RgbaImage {
    let (w, h) = img.dimensions();
    let side = w.min(h);
    let x = (w - side) / 2;
    let y = (h - side) / 2;

    let cropped = imageops::crop_imm(img, x, y, side, side).to_image();
    resize_premultiplied(&cropped, size, size, FilterType::CatmullRom)
}

/// Resample with color premultiplied by alpha, so the RGB of transparent
/// pixels does not bleed into opaque edges.
pub fn resize_premultiplied(img: &RgbaImage, width: u32, height: u32, filter: FilterType) -> RgbaImage {
    let premultiplied = Rgba32FImage::from_fn(img.width(), img.height(), |x, y| {
        let [r, g, b, a] = img.get_pixel(x, y).0.map(|c| c as f32 / 255.0);
        Rgba([r * a, g * a, b * a, a])
    });

    let resized = imageops::resize(&premultiplied, width, height, filter);

    RgbaImage::from_fn(width, height, |x, y| {
        let [r, g, b, a] = resized.get_pixel(x, y).0;
        if a <= 0.0 {
            return Rgba([0, 0, 0, 0]);
        }
        let channel = |c: f32| ((c / a).clamp(0.0, 1.0) * 255.0).round() as u8;
        Rgba([channel(r), channel(g), channel(b), (a.clamp(0.0, 1.0) * 255.0).round() as u8])
    })
}

/// Replace every pixel's alpha with the matching mask value.
pub fn apply_alpha_mask(img: &mut RgbaImage, mask: &GrayImage) -> Result<()> {
    if img.dimensions() != mask.dimensions() {
        bail!(
            "mask is {:?} but image is {:?}",
            mask.dimensions(),
            img.dimensions()
        );
    }

    for (pixel, alpha) in img.pixels_mut().zip(mask.pixels()) {
        pixel[3] = alpha[0];
    }
    Ok(())
}
