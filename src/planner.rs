//! Route orchestration: order stops, refine, and build the drawable curve.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::builder::nearest_neighbor;
use crate::cancel::CancellationToken;
use crate::curve::{Curve, DEFAULT_SEGMENTS_PER_SPAN, build_curve};
use crate::error::RouteError;
use crate::geo::{HaversineMatrix, Point};
use crate::refine::{DEFAULT_MAX_ITERATIONS, tour_distance, two_opt};
use crate::traits::{DistanceMatrixProvider, Stop};
use crate::waypoint::{DEFAULT_OFFSET_DEGREES, offset_waypoints};

/// Minimum number of stops for a route.
const MIN_STOPS: usize = 2;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlanOptions {
    /// Waypoint offset from each stop, in degrees. Also the base for the
    /// two-stop arc's bow.
    pub waypoint_offset: f64,
    /// Curve samples per span between waypoints.
    pub segments_per_span: usize,
    /// Maximum full 2-opt scans.
    pub two_opt_max_iterations: usize,
    /// Routes with fewer stops skip 2-opt.
    pub two_opt_min_stops: usize,
}

impl Default for PlanOptions {
    fn default() -> Self {
        Self {
            waypoint_offset: DEFAULT_OFFSET_DEGREES,
            segments_per_span: DEFAULT_SEGMENTS_PER_SPAN,
            two_opt_max_iterations: DEFAULT_MAX_ITERATIONS,
            two_opt_min_stops: 4,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RouteResult<'a, S> {
    /// Stops in visiting order.
    pub ordered_stops: Vec<&'a S>,
    /// Same order as indices into the slice passed to the planner.
    pub stop_order: Vec<usize>,
    pub curve: Curve,
    /// Closed-tour distance over the actual stop positions.
    pub total_distance_km: f64,
}

impl<S> RouteResult<'_, S> {
    pub fn stop_count(&self) -> usize {
        self.ordered_stops.len()
    }
}

impl<S> fmt::Display for RouteResult<'_, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} markers, Total distance: {:.2} km",
            self.stop_count(),
            self.total_distance_km
        )
    }
}

/// Plans a route over `stops` with Haversine distances and default options.
pub fn plan_route<S: Stop>(stops: &[S]) -> Result<RouteResult<'_, S>, RouteError> {
    plan_route_with(stops, &HaversineMatrix, &PlanOptions::default(), None)
}

/// Plans a route over `stops`.
///
/// Fails with [`RouteError::InsufficientPoints`] before doing any work when
/// fewer than two stops are given, and with [`RouteError::Cancelled`] if
/// `cancel` fires while 2-opt is running.
pub fn plan_route_with<'a, S, M>(
    stops: &'a [S],
    matrix_provider: &M,
    options: &PlanOptions,
    cancel: Option<&CancellationToken>,
) -> Result<RouteResult<'a, S>, RouteError>
where
    S: Stop,
    M: DistanceMatrixProvider,
{
    let positions: Vec<Point> = stops.iter().map(|stop| stop.position()).collect();
    let plan = plan_positions(&positions, matrix_provider, options, cancel)?;

    Ok(RouteResult {
        ordered_stops: plan.order.iter().map(|&i| &stops[i]).collect(),
        stop_order: plan.order,
        curve: plan.curve,
        total_distance_km: plan.total_distance_km,
    })
}

/// Plans a route over the stops for which `is_visible` holds, with
/// Haversine distances.
///
/// `stop_order` in the result indexes into the full `stops` slice.
pub fn plan_visible_route<'a, S, F>(
    stops: &'a [S],
    is_visible: F,
    options: &PlanOptions,
) -> Result<RouteResult<'a, S>, RouteError>
where
    S: Stop,
    F: Fn(&S) -> bool,
{
    plan_visible_route_with(stops, is_visible, &HaversineMatrix, options, None)
}

/// [`plan_visible_route`] with a custom distance provider and cancellation.
pub fn plan_visible_route_with<'a, S, F, M>(
    stops: &'a [S],
    is_visible: F,
    matrix_provider: &M,
    options: &PlanOptions,
    cancel: Option<&CancellationToken>,
) -> Result<RouteResult<'a, S>, RouteError>
where
    S: Stop,
    F: Fn(&S) -> bool,
    M: DistanceMatrixProvider,
{
    let visible: Vec<usize> = stops
        .iter()
        .enumerate()
        .filter(|(_, stop)| is_visible(*stop))
        .map(|(i, _)| i)
        .collect();
    debug!(total = stops.len(), visible = visible.len(), "filtered stops");

    let positions: Vec<Point> = visible.iter().map(|&i| stops[i].position()).collect();
    let plan = plan_positions(&positions, matrix_provider, options, cancel)?;
    let stop_order: Vec<usize> = plan.order.iter().map(|&i| visible[i]).collect();

    Ok(RouteResult {
        ordered_stops: stop_order.iter().map(|&i| &stops[i]).collect(),
        stop_order,
        curve: plan.curve,
        total_distance_km: plan.total_distance_km,
    })
}

struct Plan {
    order: Vec<usize>,
    curve: Curve,
    total_distance_km: f64,
}

fn plan_positions<M>(
    positions: &[Point],
    matrix_provider: &M,
    options: &PlanOptions,
    cancel: Option<&CancellationToken>,
) -> Result<Plan, RouteError>
where
    M: DistanceMatrixProvider,
{
    if positions.len() < MIN_STOPS {
        return Err(RouteError::InsufficientPoints {
            found: positions.len(),
        });
    }
    debug!(stops = positions.len(), "planning route");

    let matrix = matrix_provider.matrix_for(positions);
    let mut order = nearest_neighbor(&matrix);

    if order.len() >= options.two_opt_min_stops {
        let outcome = two_opt(order, &matrix, options.two_opt_max_iterations, cancel)?;
        debug!(
            iterations = outcome.iterations,
            improvements = outcome.improvements,
            "2-opt finished"
        );
        order = outcome.order;
    }

    let ordered: Vec<Point> = order.iter().map(|&i| positions[i]).collect();
    let waypoints = offset_waypoints(&ordered, options.waypoint_offset);
    let curve = build_curve(&waypoints, options.segments_per_span, options.waypoint_offset);
    let total_distance_km = tour_distance(&order, &matrix);

    debug!(
        stops = order.len(),
        curve_points = curve.len(),
        total_distance_km,
        "route planned"
    );

    Ok(Plan {
        order,
        curve,
        total_distance_km,
    })
}
