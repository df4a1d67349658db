//! Initial route construction (nearest neighbor).

use crate::geo::DistanceMatrix;

/// Greedy nearest-neighbor order over every location in `matrix`.
///
/// Starts at index 0 and repeatedly steps to the closest unplaced location.
/// Ties go to whichever candidate comes first in the remaining list, which
/// keeps input order. Quality depends on where the input starts; there is
/// no multi-start.
pub fn nearest_neighbor(matrix: &DistanceMatrix) -> Vec<usize> {
    let n = matrix.len();
    if n <= 1 {
        return (0..n).collect();
    }

    let mut route = Vec::with_capacity(n);
    route.push(0);
    let mut remaining: Vec<usize> = (1..n).collect();

    while !remaining.is_empty() {
        let current = route[route.len() - 1];
        let mut nearest_index = 0;
        let mut nearest_distance = f64::INFINITY;

        for (i, &candidate) in remaining.iter().enumerate() {
            let distance = matrix.get(current, candidate);
            if distance < nearest_distance {
                nearest_distance = distance;
                nearest_index = i;
            }
        }

        route.push(remaining.remove(nearest_index));
    }

    route
}
