//! Nearest-neighbor constructive heuristic.
//!
//! Builds a tour greedily: starting from a given city, always move to the
//! nearest unvisited city, then close the cycle back to the start. The
//! multi-start variant runs this from every city and keeps the shortest tour.
//!
//! # Complexity
//!
//! O(n²) per start, O(n³) for the multi-start variant.
//!
//! # Reference
//!
//! Rosenkrantz, D.J., Stearns, R.E. & Lewis, P.M. (1977). "An Analysis of
//! Several Heuristics for the Traveling Salesman Problem", *SIAM Journal on
//! Computing* 6(3), 563-581.

use crate::distance::DistanceMatrix;
use crate::error::{TspError, TspResult};
use crate::models::{SolverResult, Tour};

/// Constructs a tour by nearest-neighbor search from a fixed start city.
///
/// Ties between equally near cities go to the lowest index. The reported
/// distance includes the closing edge back to `start`.
///
/// Returns `InvalidInput` if the matrix has fewer than 2 cities or `start`
/// is out of range.
///
/// # Examples
///
/// ```
/// use u_tsp::models::Point;
/// use u_tsp::distance::DistanceMatrix;
/// use u_tsp::constructive::nearest_neighbor_from;
///
/// let points = vec![
///     Point::new(0.0, 0.0),
///     Point::new(10.0, 0.0),
///     Point::new(1.0, 0.0),
/// ];
/// let dm = DistanceMatrix::from_points(&points).unwrap();
///
/// let result = nearest_neighbor_from(&dm, 0).unwrap();
/// assert_eq!(result.tour.cities(), &[0, 2, 1]);
/// assert_eq!(result.distance, 1 + 9 + 10);
/// ```
pub fn nearest_neighbor_from(distances: &DistanceMatrix, start: usize) -> TspResult<SolverResult> {
    let n = distances.size();
    ensure_min_cities(n)?;
    if start >= n {
        return Err(TspError::input(format!(
            "start city {start} out of range for {n} cities"
        )));
    }
    let (cities, total) = build_from(distances, start);
    Ok(SolverResult::new(Tour::from_permutation(cities), total))
}

/// Runs [`nearest_neighbor_from`] from every city and keeps the shortest tour.
///
/// Ties keep the first run found (lowest start index). The result is
/// deterministic.
///
/// Returns `InvalidInput` if the matrix has fewer than 2 cities.
///
/// # Examples
///
/// ```
/// use u_tsp::models::Point;
/// use u_tsp::distance::DistanceMatrix;
/// use u_tsp::constructive::{nearest_neighbor_from, nearest_neighbor_multistart};
///
/// let points = vec![
///     Point::new(0.0, 0.0),
///     Point::new(4.0, 0.0),
///     Point::new(5.0, 0.0),
///     Point::new(9.0, 3.0),
/// ];
/// let dm = DistanceMatrix::from_points(&points).unwrap();
///
/// let best = nearest_neighbor_multistart(&dm).unwrap();
/// for start in 0..4 {
///     assert!(best.distance <= nearest_neighbor_from(&dm, start).unwrap().distance);
/// }
/// ```
pub fn nearest_neighbor_multistart(distances: &DistanceMatrix) -> TspResult<SolverResult> {
    let n = distances.size();
    ensure_min_cities(n)?;

    let mut best: Option<(Vec<usize>, i64)> = None;
    for start in 0..n {
        let (cities, total) = build_from(distances, start);
        if best.as_ref().is_none_or(|(_, best_total)| total < *best_total) {
            best = Some((cities, total));
        }
    }

    let (cities, total) = best.ok_or_else(|| TspError::input("no start city available"))?;
    log::debug!("nearest_neighbor: multistart n={n} best_distance={total}");
    Ok(SolverResult::new(Tour::from_permutation(cities), total))
}

fn ensure_min_cities(n: usize) -> TspResult<()> {
    if n < 2 {
        return Err(TspError::input(format!(
            "tour construction needs at least 2 cities, got {n}"
        )));
    }
    Ok(())
}

/// Greedy walk from `start`; returns the order and its closed length.
fn build_from(distances: &DistanceMatrix, start: usize) -> (Vec<usize>, i64) {
    let n = distances.size();
    // Ascending, so the first-listed tie winner is the lowest index
    let mut unvisited: Vec<usize> = (0..n).filter(|&c| c != start).collect();
    let mut cities = Vec::with_capacity(n);
    cities.push(start);

    let mut total = 0;
    let mut current = start;

    while let Some(next) = distances.nearest_neighbor(current, &unvisited) {
        if let Some(pos) = unvisited.iter().position(|&c| c == next) {
            unvisited.remove(pos);
        }
        cities.push(next);
        total += distances.get(current, next);
        current = next;
    }

    total += distances.get(current, start);
    (cities, total)
}
