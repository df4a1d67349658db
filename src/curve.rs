//! Smooth route curves for drawing.
//!
//! Waypoints are threaded with Catmull-Rom splines, each span converted to
//! a cubic Bezier and sampled at a fixed number of steps. Three or more
//! waypoints are treated as a closed loop so the ends of the curve bend
//! towards each other instead of stopping flat.

use serde::{Deserialize, Serialize};

use crate::geo::Point;

/// Default number of samples per span.
pub const DEFAULT_SEGMENTS_PER_SPAN: usize = 35;

/// Tension used for the two-waypoint arc.
const ARC_TENSION: f64 = 0.5;

/// How far the arc's synthetic end controls sit beyond each waypoint,
/// as a fraction of the chord.
const ARC_EXTRAPOLATION: f64 = 0.3;

/// Arc bow as a multiple of the base offset.
const ARC_BOW_FACTOR: f64 = 3.0;

const MIN_TENSION: f64 = 0.3;
const MAX_TENSION: f64 = 0.6;
const TENSION_EPSILON: f64 = 0.0001;

/// A dense point sequence approximating a smooth route.
///
/// Purely a rendering artifact: it is rebuilt from scratch on every
/// planning call.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Curve {
    points: Vec<Point>,
}

/// Axis-aligned lat/lng box, for fitting a viewport to a curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub south: f64,
    pub west: f64,
    pub north: f64,
    pub east: f64,
}

impl Curve {
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn into_points(self) -> Vec<Point> {
        self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Bounding box of all points, `None` for an empty curve.
    pub fn bounds(&self) -> Option<Bounds> {
        let first = self.points.first()?;
        let init = Bounds {
            south: first.lat,
            west: first.lng,
            north: first.lat,
            east: first.lng,
        };
        Some(self.points.iter().fold(init, |b, p| Bounds {
            south: b.south.min(p.lat),
            west: b.west.min(p.lng),
            north: b.north.max(p.lat),
            east: b.east.max(p.lng),
        }))
    }
}

/// Builds a smooth curve through `waypoints`.
///
/// - fewer than 2 waypoints are returned unchanged;
/// - exactly 2 produce one bowed arc, pushed sideways by
///   `3 * base_offset` at its control points;
/// - 3 or more are wrapped into a loop (last waypoint prepended, second
///   appended) and every consecutive pair becomes one span with adaptive
///   tension.
///
/// Each span is sampled at `segments_per_span + 1` parameter values; the
/// shared first sample of every span after the first is dropped.
pub fn build_curve(waypoints: &[Point], segments_per_span: usize, base_offset: f64) -> Curve {
    let segments = segments_per_span.max(1);

    match waypoints.len() {
        0 | 1 => Curve::new(waypoints.to_vec()),
        2 => Curve::new(arc(waypoints[0], waypoints[1], segments, base_offset)),
        n => {
            let mut closed = Vec::with_capacity(n + 2);
            closed.push(waypoints[n - 1]);
            closed.extend_from_slice(waypoints);
            closed.push(waypoints[1]);

            let mut points = Vec::with_capacity((n - 1) * segments + 1);
            for (span, window) in closed.windows(4).enumerate() {
                let (p0, p1, p2, p3) = (window[0], window[1], window[2], window[3]);
                let tension = adaptive_tension(p1, p2, p3);
                let samples = sample_span(p0, p1, p2, p3, segments, tension, Point::default());
                let skip = if span == 0 { 0 } else { 1 };
                points.extend(samples.into_iter().skip(skip));
            }
            Curve::new(points)
        }
    }
}

fn arc(start: Point, end: Point, segments: usize, base_offset: f64) -> Vec<Point> {
    let chord = end - start;
    let perpendicular = Point::new(-chord.lng, chord.lat);
    let length = start.planar_distance(end);
    let bow = if length > 0.0 {
        perpendicular * (ARC_BOW_FACTOR * base_offset / length)
    } else {
        Point::default()
    };

    let before = start - chord * ARC_EXTRAPOLATION;
    let after = end + chord * ARC_EXTRAPOLATION;
    sample_span(before, start, end, after, segments, ARC_TENSION, bow)
}

/// Tighter spacing pulls harder towards the waypoint; wide spacing falls
/// back to the floor.
fn adaptive_tension(p1: Point, p2: Point, p3: Point) -> f64 {
    let d1 = p1.planar_distance(p2);
    let d2 = p2.planar_distance(p3);
    let avg = (d1 + d2) / 2.0;
    MAX_TENSION.min(MIN_TENSION + 0.2 * d1.min(d2) / (avg + TENSION_EPSILON))
}

/// Samples the Bezier form of the Catmull-Rom span `p1 -> p2`.
///
/// `bow` shifts both inner control points.
fn sample_span(
    p0: Point,
    p1: Point,
    p2: Point,
    p3: Point,
    segments: usize,
    tension: f64,
    bow: Point,
) -> Vec<Point> {
    let m1 = (p2 - p0) * tension;
    let m2 = (p3 - p1) * tension;
    let cp1 = p1 + m1 * (1.0 / 3.0) + bow;
    let cp2 = p2 - m2 * (1.0 / 3.0) + bow;

    (0..=segments)
        .map(|i| {
            let t = i as f64 / segments as f64;
            let mt = 1.0 - t;
            p1 * (mt * mt * mt)
                + cp1 * (3.0 * mt * mt * t)
                + cp2 * (3.0 * mt * t * t)
                + p2 * (t * t * t)
        })
        .collect()
}
