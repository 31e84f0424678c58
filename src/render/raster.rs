//! Raster rendering of polar-coordinate traces

use image::{Rgb, RgbImage};

use crate::geom::Point;

const BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);
const TRACE: Rgb<u8> = Rgb([0, 0, 0]);

/// Pixels left free between the largest radius and the image edge.
const EDGE_MARGIN: f64 = 20.0;

/// Plot a set of polar traces onto a bitmap. Each trace is a sequence of
/// `(angle, radius)` points; consecutive points are joined by straight
/// lines. All traces share one radial scale, chosen so the largest radius
/// fits inside the image with a small margin. Angle zero points right and
/// angles grow counter-clockwise.
pub fn plot_polar(traces: &[Vec<Point>], width: u32, height: u32) -> RgbImage {
    let mut img = RgbImage::from_pixel(width, height, BACKGROUND);

    let max_radius = traces
        .iter()
        .flatten()
        .map(|p| p.y.abs())
        .fold(0.0, f64::max);
    if max_radius == 0.0 {
        return img;
    }

    let cx = f64::from(width) / 2.0;
    let cy = f64::from(height) / 2.0;
    let scale = (cx.min(cy) - EDGE_MARGIN) / max_radius;

    for trace in traces {
        let pixels: Vec<(f64, f64)> = trace
            .iter()
            .map(|p| {
                let (theta, r) = (p.x, p.y * scale);
                (cx + r * theta.cos(), cy - r * theta.sin())
            })
            .collect();
        for pair in pixels.windows(2) {
            draw_line(&mut img, pair[0], pair[1]);
        }
    }

    img
}

/// Draw a straight line by sampling one step per pixel of the longer axis.
fn draw_line(img: &mut RgbImage, from: (f64, f64), to: (f64, f64)) {
    let dx = to.0 - from.0;
    let dy = to.1 - from.1;
    let steps = dx.abs().max(dy.abs()).ceil().max(1.0);
    for i in 0..=steps as u32 {
        let t = f64::from(i) / steps;
        put_pixel_clipped(img, from.0 + dx * t, from.1 + dy * t);
    }
}

fn put_pixel_clipped(img: &mut RgbImage, x: f64, y: f64) {
    let (x, y) = (x.round(), y.round());
    if x >= 0.0 && y >= 0.0 && (x as u32) < img.width() && (y as u32) < img.height() {
        img.put_pixel(x as u32, y as u32, TRACE);
    }
}
