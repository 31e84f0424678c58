//! Lissajous figure generator

use std::f64::consts::PI;

use crate::geom::Point;

/// Samples per figure. One full period of the slower axis is covered by the
/// discretization regardless of cycle counts.
const SAMPLES: u32 = 256;

/// Generate a Lissajous figure: cosine oscillations on both axes with an
/// integer cycle ratio and a phase offset on x.
///
/// The amplitude is `diameter * 0.4 / sqrt(2)` so the figure stays inside the
/// requested diameter even when its corners sit at 45 degrees.
pub fn lissajous(
    x_cycles: i32,
    y_cycles: i32,
    diameter: i32,
    phase_degrees: i32,
) -> impl Iterator<Item = Point> {
    let x_limit = 2.0 * PI * f64::from(x_cycles);
    let y_limit = 2.0 * PI * f64::from(y_cycles);
    let amplitude = f64::from(diameter) * 0.4 * 0.7071;
    let phi = f64::from(phase_degrees) * PI / 180.0;

    (0..SAMPLES).map(move |i| {
        let t = f64::from(i) / f64::from(SAMPLES);
        Point::new(
            amplitude * (x_limit * t + phi).cos(),
            amplitude * (y_limit * t).cos(),
        )
    })
}
