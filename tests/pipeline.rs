//! Integration tests for the figure-to-SVG pipeline

use pretty_assertions::assert_eq;
use rosette::{lissajous_svg, parse_segments, polar_plot, segments_svg, wedge_svg};

#[test]
fn lissajous_document_has_one_closed_path_of_256_points() {
    let svg = lissajous_svg(3, 4, 100, 45);
    assert_eq!(svg.matches("<path").count(), 1);
    // 256 points: one M command and 255 L commands, closed with Z
    assert_eq!(svg.matches(" L").count(), 255);
    assert!(svg.contains(" Z\""));
    assert!(svg.contains(r#"width="100mm""#));
    assert!(svg.contains(r#"height="100mm""#));
}

#[test]
fn lissajous_viewbox_hugs_the_amplitude_plus_padding() {
    // Cycle counts 1/1 with zero phase reach the full amplitude on both
    // axes: diameter * 0.4 * 0.7071 = 28.284 for diameter 100. The padded
    // viewBox must span that extent plus 10 units on each side.
    let svg = lissajous_svg(1, 1, 100, 0);
    let viewbox = svg
        .split("viewBox=\"")
        .nth(1)
        .and_then(|s| s.split('"').next())
        .expect("viewBox attribute");
    let parts: Vec<f64> = viewbox
        .split_whitespace()
        .map(|v| v.parse().unwrap())
        .collect();
    let width = parts[2];
    assert!((width - (2.0 * 28.284 + 20.0)).abs() < 0.5, "width {width}");
}

#[test]
fn wedge_document_uses_the_deterministic_red_gradient() {
    let svg = wedge_svg(-6, 6, 100);
    assert!(svg.contains(r##"fill="#000000""##));
    assert!(svg.contains(r#"stroke="none""#));

    let svg = wedge_svg(3, 4, 100);
    assert!(svg.contains(r##"fill="#900000""##));
}

#[test]
fn degenerate_wedge_is_two_spokes() {
    // start == end collapses the rim arc: 271 + 271 points.
    let svg = wedge_svg(2, 2, 100);
    assert_eq!(svg.matches(" L").count(), 541);
}

#[test]
fn segment_file_renders_one_wedge_per_line_in_order() {
    let source = "-6 -3 red 1 green\n-3 0 - 0 blue\n";
    let svg = segments_svg(source, 100);
    assert_eq!(svg.matches("<path").count(), 2);

    let green = svg.find("green").expect("first segment fill");
    let blue = svg.find("blue").expect("second segment fill");
    assert!(green < blue, "segments must draw in file order");
}

#[test]
fn segment_scan_stops_at_first_bad_line() {
    let source = "0 1 red 1 green\n1 2 oops notanumber blue\n2 3 red 1 blue\n";
    assert_eq!(parse_segments(source).len(), 1);
    assert_eq!(segments_svg(source, 100).matches("<path").count(), 1);
}

#[test]
fn empty_segment_file_yields_an_empty_document() {
    let svg = segments_svg("", 100);
    assert_eq!(svg.matches("<path").count(), 0);
    // No points: the viewBox degenerates to the padding alone.
    assert!(svg.contains(r#"viewBox="-10.00 -10.00 20.00 20.00""#));
}

#[test]
fn segment_stroke_width_passes_through() {
    let svg = segments_svg("0 3 black 4 -", 100);
    assert!(svg.contains(r#"stroke-width="4""#));
    assert!(svg.contains(r#"fill="none""#));
}

#[test]
fn polar_plot_is_square_and_non_blank() {
    let img = polar_plot();
    assert_eq!(img.dimensions(), (1080, 1080));
    // The spokes must have left some dark pixels on the white background.
    assert!(img.pixels().any(|p| p.0 == [0, 0, 0]));
}
