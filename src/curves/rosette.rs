//! Foucault-pendulum rosette generators
//!
//! A rosette wedge is bounded by two "spokes" (latitude sweeps from the
//! center out to the rim) and the rim arc between them. Spoke directions are
//! given in hours units: 1 unit = 30 degrees (pi/6 radians), conventionally
//! ranging -6..+6.

use std::f64::consts::PI;

use crate::geom::Point;

/// Latitude samples per spoke; i/3 sweeps latitude 0..90 degrees.
const LAT_STEPS: i32 = 270;

/// Angular step of the rim arc, in radians.
const RIM_STEP: f64 = PI / 1080.0;

/// One spoke of the rosette: a latitude sweep at the given hours direction.
///
/// The radius grows linearly from the center to `diameter / 2` while the
/// angle swings toward `hours * 30` degrees with the sine of the latitude.
pub fn spoke(diameter: i32, hours: i32) -> impl DoubleEndedIterator<Item = Point> {
    let outer = f64::from(diameter) / 2.0;
    (0..=LAT_STEPS).map(move |i| {
        let sin_lat = (PI / 180.0 * f64::from(i) / 3.0).sin();
        let theta = PI / 6.0 * f64::from(hours) * sin_lat;
        let r = f64::from(i) / f64::from(LAT_STEPS) * outer;
        Point::new(r * theta.cos(), r * theta.sin())
    })
}

/// Circular arc along the rim at radius `diameter / 2`, from `start_hours`
/// up to (exclusive) `end_hours`, in fixed steps of pi/1080.
///
/// When `end_hours < start_hours` the arc is empty; angles do not wrap
/// through 360 degrees.
pub fn rim_arc(
    diameter: i32,
    start_hours: i32,
    end_hours: i32,
) -> impl Iterator<Item = Point> {
    let radius = f64::from(diameter) / 2.0;
    // One hours unit is 180 rim steps, so the sweep is exact over integer
    // step indices rather than an accumulated floating-point angle.
    (start_hours * 180..end_hours * 180).map(move |i| {
        let angle = f64::from(i) * RIM_STEP;
        Point::new(radius * angle.cos(), radius * angle.sin())
    })
}

/// The closed outline of one rosette wedge: out along the start spoke,
/// around the rim, and back along the end spoke in reverse. Reversing the
/// second spoke keeps the outline from crossing itself.
pub fn wedge_outline(
    diameter: i32,
    start_hours: i32,
    end_hours: i32,
) -> impl Iterator<Item = Point> {
    spoke(diameter, start_hours)
        .chain(rim_arc(diameter, start_hours, end_hours))
        .chain(spoke(diameter, end_hours).rev())
}

/// A spoke projected into polar coordinates: points are `(angle, radius)`
/// rather than Cartesian. Used by the diagnostic polar plot.
pub fn polar_spoke(diameter: i32, hours: i32) -> impl Iterator<Item = Point> {
    let outer = f64::from(diameter) / 2.0;
    (0..=LAT_STEPS).map(move |i| {
        let sin_lat = (PI / 180.0 * f64::from(i) / 3.0).sin();
        let theta = PI / 6.0 * f64::from(hours) * sin_lat;
        let r = f64::from(i) / f64::from(LAT_STEPS) * outer;
        Point::new(theta, r)
    })
}

/// A reference circle of constant latitude in polar coordinates: the radius
/// is the latitude itself, and the angular extent shrinks with its sine.
pub fn latitude_circle(latitude_degrees: f64) -> impl Iterator<Item = Point> {
    let sin_lat = (latitude_degrees * PI / 180.0).sin();
    (-180..=180).map(move |i| Point::new(PI / 180.0 * f64::from(i) * sin_lat, latitude_degrees))
}
