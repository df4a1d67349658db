//! Offset waypoints so the drawn path passes near markers without covering them.

use rayon::prelude::*;

use crate::geo::Point;

/// Default offset radius in degrees (roughly 150-200 m).
pub const DEFAULT_OFFSET_DEGREES: f64 = 0.0015;

/// Angular step between consecutive waypoints, in degrees.
pub const GOLDEN_ANGLE_DEGREES: f64 = 137.5;

/// Offset `position` by `distance` degrees in a direction fixed by `index`.
///
/// The direction is `index * GOLDEN_ANGLE_DEGREES` (mod 360), measured
/// from north towards east. No metric correction is applied.
pub fn offset_waypoint(position: Point, index: usize, distance: f64) -> Point {
    let angle = (index as f64 * GOLDEN_ANGLE_DEGREES) % 360.0;
    let rad = angle.to_radians();
    Point::new(
        position.lat + distance * rad.cos(),
        position.lng + distance * rad.sin(),
    )
}

/// Offsets every position by its own index. Output order matches input.
pub fn offset_waypoints(positions: &[Point], distance: f64) -> Vec<Point> {
    positions
        .par_iter()
        .enumerate()
        .map(|(index, &position)| offset_waypoint(position, index, distance))
        .collect()
}
