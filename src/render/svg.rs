//! SVG document generation from styled paths

use crate::figure::{PathStyle, StyledPath};
use crate::geom::{bounds_of, BoundingBox, Point};

use super::SvgConfig;

/// Build an SVG document incrementally. Paths are accumulated together with
/// their bounds; the viewBox is derived once over everything when the
/// document is built.
pub struct SvgBuilder {
    config: SvgConfig,
    paths: Vec<String>,
    bounds: Option<BoundingBox>,
}

impl SvgBuilder {
    /// Create a new SVG builder
    pub fn new(config: SvgConfig) -> Self {
        Self {
            config,
            paths: vec![],
            bounds: None,
        }
    }

    /// Add a path element. Point order becomes draw order; `closed` appends
    /// the SVG `Z` command so the renderer joins the last point to the first.
    pub fn add_path(&mut self, points: &[Point], closed: bool, style: &PathStyle) {
        self.bounds = match self.bounds {
            None => bounds_of(points.iter().copied()),
            Some(b) => Some(points.iter().fold(b, |b, p| b.expand_to_include(*p))),
        };

        self.paths.push(format!(
            r#"  <path d="{}" stroke="{}" stroke-width="{}" fill="{}"/>"#,
            path_to_d(points, closed),
            style.stroke.as_deref().unwrap_or("none"),
            style.stroke_width,
            style.fill.as_deref().unwrap_or("none"),
        ));
    }

    /// Build the final SVG string. The viewBox is the bounding box of every
    /// added point, padded per the configuration.
    pub fn build(self) -> String {
        let viewbox = self
            .bounds
            .unwrap_or(BoundingBox::new(0.0, 0.0, 0.0, 0.0))
            .padded(self.config.viewbox_padding);

        let mut svg = String::new();
        svg.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        svg.push_str(&format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}{}" height="{}{}" viewBox="{:.2} {:.2} {:.2} {:.2}">"#,
            self.config.document_size,
            self.config.document_units,
            self.config.document_size,
            self.config.document_units,
            viewbox.x,
            viewbox.y,
            viewbox.width,
            viewbox.height
        ));
        svg.push('\n');

        for path in &self.paths {
            svg.push_str(path);
            svg.push('\n');
        }

        svg.push_str("</svg>\n");
        svg
    }
}

/// Render a set of styled paths to a complete SVG document
pub fn render_svg(paths: &[StyledPath], config: &SvgConfig) -> String {
    let mut builder = SvgBuilder::new(config.clone());
    for path in paths {
        builder.add_path(&path.points, path.closed, &path.style);
    }
    builder.build()
}

/// Convert a point sequence to an SVG path `d` attribute string
fn path_to_d(points: &[Point], closed: bool) -> String {
    let mut d = String::new();
    for (i, p) in points.iter().enumerate() {
        if i == 0 {
            d.push_str(&format!("M{:.2} {:.2}", p.x, p.y));
        } else {
            d.push_str(&format!(" L{:.2} {:.2}", p.x, p.y));
        }
    }
    if closed && !points.is_empty() {
        d.push_str(" Z");
    }
    d
}
