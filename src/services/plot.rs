use std::path::Path;

use image::{Rgb, RgbImage};

use crate::error::AppError;

pub const WIDTH: u32 = 640;
pub const HEIGHT: u32 = 480;

const LINE_WIDTH: i32 = 5;
const MARKER_RADIUS: i32 = 10;

const WHITE: Rgb<u8> = Rgb([255, 255, 255]);
const BLACK: Rgb<u8> = Rgb([0, 0, 0]);
const BLUE: Rgb<u8> = Rgb([0, 0, 255]);
const RED: Rgb<u8> = Rgb([255, 0, 0]);

// Sample series in data space [0,1] x [0,1].
const LINE1: [(f64, f64); 3] = [(0.1, 0.1), (0.5, 0.9), (0.9, 0.5)];
const LINE2: [(f64, f64); 3] = [(0.1, 0.5), (0.5, 0.2), (0.9, 0.7)];

#[derive(Clone, Copy)]
enum Marker {
    Circle,
    Square,
}

/// Renders the sample two-line plot and writes it as a PNG at `path`,
/// replacing any existing file. Render and filesystem errors propagate to
/// the caller and are fatal there.
pub fn generate_sample_image(path: &Path) -> Result<(), AppError> {
    let mut img = RgbImage::from_pixel(WIDTH, HEIGHT, WHITE);

    draw_axes_frame(&mut img);
    draw_series(&mut img, &LINE1, BLUE, Marker::Circle);
    draw_series(&mut img, &LINE2, RED, Marker::Square);

    img.save(path)?;
    Ok(())
}

// Axes rectangle inset 10% from every edge of the canvas.
fn axes_bounds() -> (i32, i32, i32, i32) {
    let left = (WIDTH as f64 * 0.1) as i32;
    let right = (WIDTH as f64 * 0.9) as i32;
    let top = (HEIGHT as f64 * 0.1) as i32;
    let bottom = (HEIGHT as f64 * 0.9) as i32;
    (left, right, top, bottom)
}

/// Maps a data-space point to pixel coordinates. The y axis grows upward in
/// data space and downward in image space.
fn to_pixel(x: f64, y: f64) -> (i32, i32) {
    let (left, right, top, bottom) = axes_bounds();
    let px = left as f64 + x * (right - left) as f64;
    let py = bottom as f64 - y * (bottom - top) as f64;
    (px.round() as i32, py.round() as i32)
}

fn draw_axes_frame(img: &mut RgbImage) {
    let (left, right, top, bottom) = axes_bounds();
    for x in left..=right {
        put_pixel(img, x, top, BLACK);
        put_pixel(img, x, bottom, BLACK);
    }
    for y in top..=bottom {
        put_pixel(img, left, y, BLACK);
        put_pixel(img, right, y, BLACK);
    }
}

fn draw_series(img: &mut RgbImage, points: &[(f64, f64)], color: Rgb<u8>, marker: Marker) {
    let pixels: Vec<(i32, i32)> = points.iter().map(|&(x, y)| to_pixel(x, y)).collect();

    for pair in pixels.windows(2) {
        draw_segment(img, pair[0], pair[1], color);
    }
    for &(x, y) in &pixels {
        match marker {
            Marker::Circle => stamp_disc(img, x, y, MARKER_RADIUS, color),
            Marker::Square => stamp_square(img, x, y, MARKER_RADIUS, color),
        }
    }
}

/// Draws a thick segment by stamping a disc of half the stroke width at each
/// step along the line.
fn draw_segment(img: &mut RgbImage, (x0, y0): (i32, i32), (x1, y1): (i32, i32), color: Rgb<u8>) {
    let steps = (x1 - x0).abs().max((y1 - y0).abs()).max(1);
    for i in 0..=steps {
        let t = i as f64 / steps as f64;
        let x = x0 as f64 + t * (x1 - x0) as f64;
        let y = y0 as f64 + t * (y1 - y0) as f64;
        stamp_disc(img, x.round() as i32, y.round() as i32, LINE_WIDTH / 2, color);
    }
}

fn stamp_disc(img: &mut RgbImage, cx: i32, cy: i32, r: i32, color: Rgb<u8>) {
    for dy in -r..=r {
        for dx in -r..=r {
            if dx * dx + dy * dy <= r * r {
                put_pixel(img, cx + dx, cy + dy, color);
            }
        }
    }
}

fn stamp_square(img: &mut RgbImage, cx: i32, cy: i32, half: i32, color: Rgb<u8>) {
    for dy in -half..=half {
        for dx in -half..=half {
            put_pixel(img, cx + dx, cy + dy, color);
        }
    }
}

fn put_pixel(img: &mut RgbImage, x: i32, y: i32, color: Rgb<u8>) {
    if x >= 0 && y >= 0 && (x as u32) < WIDTH && (y as u32) < HEIGHT {
        img.put_pixel(x as u32, y as u32, color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generates_decodable_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plot.png");

        generate_sample_image(&path).unwrap();

        let img = image::open(&path).unwrap().to_rgb8();
        assert_eq!(img.width(), WIDTH);
        assert_eq!(img.height(), HEIGHT);
    }

    #[test]
    fn test_contains_both_series_colors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plot.png");

        generate_sample_image(&path).unwrap();

        let img = image::open(&path).unwrap().to_rgb8();
        let has_blue = img.pixels().any(|p| *p == BLUE);
        let has_red = img.pixels().any(|p| *p == RED);
        assert!(has_blue, "blue series missing from plot");
        assert!(has_red, "red series missing from plot");
    }

    #[test]
    fn test_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plot.png");

        std::fs::write(&path, b"not a png").unwrap();
        generate_sample_image(&path).unwrap();

        let img = image::open(&path).unwrap().to_rgb8();
        assert_eq!((img.width(), img.height()), (WIDTH, HEIGHT));

        // A second run over the fresh output must also succeed.
        generate_sample_image(&path).unwrap();
    }

    #[test]
    fn test_markers_sit_at_data_points() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plot.png");

        generate_sample_image(&path).unwrap();
        let img = image::open(&path).unwrap().to_rgb8();

        for &(x, y) in &LINE1 {
            let (px, py) = to_pixel(x, y);
            assert_eq!(*img.get_pixel(px as u32, py as u32), BLUE);
        }
        for &(x, y) in &LINE2 {
            let (px, py) = to_pixel(x, y);
            assert_eq!(*img.get_pixel(px as u32, py as u32), RED);
        }
    }
}
