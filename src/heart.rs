//! Procedural gradient heart logo.
//!
//! The logo is a white rounded square with a heart cut from a diagonal
//! green/blue/yellow gradient composited on top.

use anyhow::{Context, Result};
use image::imageops;
use image::{GrayImage, Luma, Rgba, RgbaImage};
use std::f32::consts::PI;
use std::path::Path;

use crate::constants::heart::*;
use crate::mask;
use crate::resize::{self, IconPair};

/// Draw the full logo at `size`x`size`.
pub fn generate_heart_logo(size: u32) -> Result<RgbaImage> {
    let mut logo = rounded_background(size);

    let heart_mask = fill_polygon(size, &heart_polygon(size));
    let mut layer = diagonal_gradient(size);
    mask::apply_alpha_mask(&mut layer, &heart_mask)?;

    imageops::overlay(&mut logo, &layer, 0, 0);
    Ok(logo)
}

/// Generate the master logo, save it, then derive the launcher icons from it.
pub fn run(master_path: &Path, res_dir: &Path, size: u32) -> Result<Vec<IconPair>> {
    log::info!("Drawing {}x{} heart logo", size, size);
    let logo = generate_heart_logo(size)?;

    if let Some(parent) = master_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    logo.save(master_path)
        .with_context(|| format!("Failed to write {}", master_path.display()))?;
    println!("Saved master logo to {}", master_path.display());

    resize::create_icons_from_image(&logo, res_dir)
}

fn rounded_background(size: u32) -> RgbaImage {
    let s = size as f32;
    let r = s * CORNER_RADIUS_FRACTION;

    RgbaImage::from_fn(size, size, |x, y| {
        let px = x as f32 + 0.5;
        let py = y as f32 + 0.5;
        // Distance from the inner rectangle whose corners are the arc centers
        let dx = (r - px).max(px - (s - r)).max(0.0);
        let dy = (r - py).max(py - (s - r)).max(0.0);
        if dx * dx + dy * dy <= r * r {
            BACKGROUND
        } else {
            Rgba([0, 0, 0, 0])
        }
    })
}

/// Closed heart curve in image coordinates, scaled and centered.
pub fn heart_polygon(size: u32) -> Vec<(f32, f32)> {
    let raw: Vec<(f32, f32)> = (0..CURVE_SAMPLES)
        .map(|i| {
            let t = 2.0 * PI * i as f32 / CURVE_SAMPLES as f32;
            let x = 16.0 * t.sin().powi(3);
            let y = 13.0 * t.cos() - 5.0 * (2.0 * t).cos() - 2.0 * (3.0 * t).cos() - (4.0 * t).cos();
            // Curve y grows upward, image y grows downward
            (x, -y)
        })
        .collect();

    let (min_x, max_x, min_y, max_y) = raw.iter().fold(
        (f32::MAX, f32::MIN, f32::MAX, f32::MIN),
        |(a, b, c, d), &(x, y)| (a.min(x), b.max(x), c.min(y), d.max(y)),
    );

    let s = size as f32;
    let scale = s * WIDTH_FRACTION / (max_x - min_x);
    let mid_x = (min_x + max_x) / 2.0;
    let mid_y = (min_y + max_y) / 2.0;

    raw.into_iter()
        .map(|(x, y)| ((x - mid_x) * scale + s / 2.0, (y - mid_y) * scale + s / 2.0))
        .collect()
}

/// Even-odd scanline fill sampled at pixel centers.
pub fn fill_polygon(size: u32, polygon: &[(f32, f32)]) -> GrayImage {
    let mut mask = GrayImage::new(size, size);
    if polygon.len() < 3 {
        return mask;
    }

    let mut crossings = Vec::new();
    for y in 0..size {
        let sy = y as f32 + 0.5;
        crossings.clear();

        for i in 0..polygon.len() {
            let (x0, y0) = polygon[i];
            let (x1, y1) = polygon[(i + 1) % polygon.len()];
            if (y0 <= sy) != (y1 <= sy) {
                crossings.push(x0 + (sy - y0) / (y1 - y0) * (x1 - x0));
            }
        }
        crossings.sort_by(|a, b| a.total_cmp(b));

        for span in crossings.chunks_exact(2) {
            let start = (span[0] - 0.5).ceil().max(0.0) as u32;
            let end = ((span[1] - 0.5).floor() + 1.0).clamp(0.0, size as f32) as u32;
            for x in start..end {
                mask.put_pixel(x, y, Luma([255]));
            }
        }
    }

    mask
}

/// Green to blue to yellow, as two linear segments along an axis rotated 45°.
pub fn diagonal_gradient(size: u32) -> RgbaImage {
    let s = size as f32;
    let c = s / 2.0;
    let (sin, cos) = GRADIENT_ANGLE_DEG.to_radians().sin_cos();

    RgbaImage::from_fn(size, size, |x, y| {
        let dx = x as f32 + 0.5 - c;
        let dy = y as f32 + 0.5 - c;
        // Vertical coordinate in the unrotated gradient frame
        let v = -dx * sin + dy * cos;
        let t = (v / s + 0.5).clamp(0.0, 1.0);

        let rgb = if t < 0.5 {
            lerp(GREEN, BLUE, t * 2.0)
        } else {
            lerp(BLUE, YELLOW, (t - 0.5) * 2.0)
        };
        Rgba([rgb[0], rgb[1], rgb[2], 255])
    })
}

fn lerp(a: [u8; 3], b: [u8; 3], t: f32) -> [u8; 3] {
    let mix = |i: usize| (a[i] as f32 + (b[i] as f32 - a[i] as f32) * t).round() as u8;
    [mix(0), mix(1), mix(2)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_polygon_is_centered_and_scaled() {
        let polygon = heart_polygon(1000);
        assert_eq!(polygon.len(), CURVE_SAMPLES);

        let min_x = polygon.iter().map(|p| p.0).fold(f32::MAX, f32::min);
        let max_x = polygon.iter().map(|p| p.0).fold(f32::MIN, f32::max);
        assert!((max_x - min_x - 600.0).abs() < 0.5);
        assert!(((min_x + max_x) / 2.0 - 500.0).abs() < 0.5);
    }

    #[test]
    fn test_polygon_points_down() {
        // The tip (t = pi) is the lowest point in image coordinates
        let polygon = heart_polygon(1000);
        let tip = polygon[CURVE_SAMPLES / 2];
        let max_y = polygon.iter().map(|p| p.1).fold(f32::MIN, f32::max);
        assert_eq!(tip.1, max_y);
    }

    #[test]
    fn test_fill_square_polygon() {
        let square = [(2.0, 2.0), (6.0, 2.0), (6.0, 6.0), (2.0, 6.0)];
        let mask = fill_polygon(8, &square);
        assert_eq!(mask.get_pixel(2, 2)[0], 255);
        assert_eq!(mask.get_pixel(5, 5)[0], 255);
        assert_eq!(mask.get_pixel(6, 6)[0], 0);
        assert_eq!(mask.get_pixel(1, 3)[0], 0);
        let filled = mask.pixels().filter(|p| p[0] == 255).count();
        assert_eq!(filled, 16);
    }

    #[test]
    fn test_heart_mask_covers_center_not_corners() {
        let mask = fill_polygon(256, &heart_polygon(256));
        assert_eq!(mask.get_pixel(128, 128)[0], 255);
        assert_eq!(mask.get_pixel(0, 0)[0], 0);
        assert_eq!(mask.get_pixel(255, 0)[0], 0);
    }

    #[test]
    fn test_gradient_runs_diagonally() {
        let g = diagonal_gradient(512);
        // Along the rotated axis, the top-right corner is the green end
        // and the bottom-left corner is the yellow end
        assert_eq!(*g.get_pixel(511, 0), Rgba([GREEN[0], GREEN[1], GREEN[2], 255]));
        assert_eq!(*g.get_pixel(0, 511), Rgba([YELLOW[0], YELLOW[1], YELLOW[2], 255]));
        // Constant along the perpendicular diagonal through the center
        assert_eq!(g.get_pixel(100, 100), g.get_pixel(400, 400));
    }

    #[test]
    fn test_logo_is_opaque_center_transparent_corner() {
        let logo = generate_heart_logo(256).unwrap();
        assert_eq!(logo.dimensions(), (256, 256));
        assert_eq!(logo.get_pixel(128, 128)[3], 255);
        assert_eq!(logo.get_pixel(0, 0)[3], 0);
        // Edge midpoint sits on the white background
        assert_eq!(*logo.get_pixel(128, 2), BACKGROUND);
    }
}
