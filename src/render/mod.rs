//! Output rendering: SVG documents and raster polar plots
//!
//! This module consumes the styled point sequences produced by the figure
//! assembler; it knows nothing about how the curves were generated.

pub mod config;
pub mod raster;
pub mod svg;

pub use config::SvgConfig;
pub use raster::plot_polar;
pub use svg::{render_svg, SvgBuilder};
