//! Geographic primitives and great-circle distances.
//!
//! Distances reported to users are Haversine kilometres. Curve geometry
//! works in plain degree-space, which is fine at map zoom levels.

use std::ops::{Add, Mul, Sub};

use serde::{Deserialize, Serialize};

use crate::traits::DistanceMatrixProvider;

/// Earth radius in kilometers.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// A latitude/longitude pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub lat: f64,
    pub lng: f64,
}

impl Point {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Euclidean distance in degree-space.
    pub fn planar_distance(self, other: Point) -> f64 {
        let d = other - self;
        (d.lat * d.lat + d.lng * d.lng).sqrt()
    }

    /// Midpoint in degree-space.
    pub fn midpoint(self, other: Point) -> Point {
        (self + other) * 0.5
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.lat + rhs.lat, self.lng + rhs.lng)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.lat - rhs.lat, self.lng - rhs.lng)
    }
}

impl Mul<f64> for Point {
    type Output = Point;

    fn mul(self, rhs: f64) -> Point {
        Point::new(self.lat * rhs, self.lng * rhs)
    }
}

impl From<(f64, f64)> for Point {
    fn from((lat, lng): (f64, f64)) -> Self {
        Point::new(lat, lng)
    }
}

/// Great-circle distance between two points in kilometers.
pub fn haversine_km(from: Point, to: Point) -> f64 {
    let lat1_rad = from.lat.to_radians();
    let lat2_rad = to.lat.to_radians();
    let delta_lat = (to.lat - from.lat).to_radians();
    let delta_lng = (to.lng - from.lng).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lng / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Dense, symmetric kilometre matrix indexed by location order.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    size: usize,
    cells: Vec<f64>,
}

impl DistanceMatrix {
    /// Builds a matrix by evaluating `distance` once per unordered pair.
    pub fn from_fn<F>(size: usize, mut distance: F) -> Self
    where
        F: FnMut(usize, usize) -> f64,
    {
        let mut cells = vec![0.0; size * size];
        for i in 0..size {
            for j in i + 1..size {
                let d = distance(i, j);
                cells[i * size + j] = d;
                cells[j * size + i] = d;
            }
        }
        Self { size, cells }
    }

    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    #[inline]
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.cells[from * self.size + to]
    }
}

/// Haversine-based distance matrix provider.
#[derive(Debug, Clone, Copy, Default)]
pub struct HaversineMatrix;

impl DistanceMatrixProvider for HaversineMatrix {
    fn matrix_for(&self, locations: &[Point]) -> DistanceMatrix {
        DistanceMatrix::from_fn(locations.len(), |i, j| {
            haversine_km(locations[i], locations[j])
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_haversine_same_point() {
        let p = Point::new(36.1, -115.1);
        assert_eq!(haversine_km(p, p), 0.0);
    }

    #[test]
    fn test_haversine_symmetric() {
        let a = Point::new(12.0, -100.5);
        let b = Point::new(-7.25, -60.0);
        assert_eq!(haversine_km(a, b), haversine_km(b, a));
    }

    #[test]
    fn test_haversine_one_degree_of_latitude() {
        // pi * 6371 / 180
        let dist = haversine_km(Point::new(0.0, 0.0), Point::new(1.0, 0.0));
        assert!((dist - 111.195).abs() < 0.01, "got {}", dist);
    }

    #[test]
    fn test_haversine_known_distance() {
        // Las Vegas to Los Angeles, ~370 km
        let dist = haversine_km(Point::new(36.17, -115.14), Point::new(34.05, -118.24));
        assert!(dist > 350.0 && dist < 400.0, "LV to LA should be ~370km, got {}", dist);
    }

    #[test]
    fn test_planar_distance() {
        let d = Point::new(0.0, 0.0).planar_distance(Point::new(3.0, 4.0));
        assert!((d - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_point_arithmetic() {
        let a = Point::new(1.0, 2.0);
        let b = Point::new(0.5, -1.0);
        assert_eq!(a + b, Point::new(1.5, 1.0));
        assert_eq!(a - b, Point::new(0.5, 3.0));
        assert_eq!(a * 2.0, Point::new(2.0, 4.0));
        assert_eq!(a.midpoint(b), Point::new(0.75, 0.5));
    }

    #[test]
    fn test_matrix_diagonal_is_zero() {
        let locations = vec![
            Point::new(36.1, -115.1),
            Point::new(36.2, -115.2),
            Point::new(36.3, -115.3),
        ];
        let matrix = HaversineMatrix.matrix_for(&locations);

        assert_eq!(matrix.len(), 3);
        for i in 0..locations.len() {
            assert_eq!(matrix.get(i, i), 0.0, "Diagonal should be zero");
        }
    }

    #[test]
    fn test_matrix_matches_direct_distance() {
        let locations = vec![Point::new(36.1, -115.1), Point::new(36.2, -115.2)];
        let matrix = HaversineMatrix.matrix_for(&locations);

        assert_eq!(matrix.get(0, 1), matrix.get(1, 0));
        assert_eq!(matrix.get(0, 1), haversine_km(locations[0], locations[1]));
    }

    #[test]
    fn test_empty_matrix() {
        let matrix = HaversineMatrix.matrix_for(&[]);
        assert!(matrix.is_empty());
    }
}
