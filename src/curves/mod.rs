//! Pure curve generators
//!
//! Every generator maps a handful of integer parameters to a finite, ordered
//! sequence of points. No state is shared between invocations and no input is
//! validated; degenerate parameters produce degenerate geometry, not errors.

pub mod lissajous;
pub mod rosette;

pub use lissajous::lissajous;
pub use rosette::{latitude_circle, polar_spoke, rim_arc, spoke, wedge_outline};
