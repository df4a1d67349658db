//! Core domain traits for the route planner.
//!
//! These are intentionally minimal. Host applications implement them for
//! their own marker models; the planner only ever reads a position.

use crate::geo::{DistanceMatrix, Point};

/// Something that can be visited on the map.
///
/// The planner borrows stops for the duration of one planning call and
/// hands the same references back in visiting order, so whatever else the
/// implementor carries (marker ids, UI handles) is never touched.
pub trait Stop {
    /// Position in degrees.
    fn position(&self) -> Point;
}

impl Stop for Point {
    fn position(&self) -> Point {
        *self
    }
}

/// `(lat, lng)` tuple.
impl Stop for (f64, f64) {
    fn position(&self) -> Point {
        Point::new(self.0, self.1)
    }
}

impl<S: Stop + ?Sized> Stop for &S {
    fn position(&self) -> Point {
        (**self).position()
    }
}

/// Provides a distance matrix (kilometres) for a set of locations.
///
/// The matrix is indexed by the provided location order.
pub trait DistanceMatrixProvider {
    fn matrix_for(&self, locations: &[Point]) -> DistanceMatrix;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tuple_stop_is_lat_lng() {
        let stop = (12.5, -40.25);
        assert_eq!(stop.position(), Point::new(12.5, -40.25));
    }

    #[test]
    fn test_reference_stop_delegates() {
        let point = Point::new(1.0, 2.0);
        let borrowed = &point;
        assert_eq!(borrowed.position(), point);
    }
}
