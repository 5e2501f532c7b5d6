//! 2-opt edge-exchange local search over a closed tour.
//!
//! # Algorithm
//!
//! For each pair of non-adjacent edges (t[i], t[i+1]) and (t[j], t[j+1 mod n]),
//! compute the change in length from reversing the segment between them:
//!
//! ```text
//! delta = d(t[i], t[j]) + d(t[i+1], t[j+1]) - d(t[i], t[i+1]) - d(t[j], t[j+1])
//! ```
//!
//! The first pair with delta < 0 is applied immediately by reversing
//! t[i+1..=j] in place, and the scan restarts from the top
//! (first-improvement). The search stops when a full scan finds nothing or
//! the iteration cap is reached.
//!
//! # Complexity
//!
//! O(n²) per scan, at most `max_iterations` scans.
//!
//! # Reference
//!
//! Croes, G.A. (1958). "A method for solving traveling salesman problems",
//! *Operations Research* 6(6), 791-812.

use crate::distance::DistanceMatrix;
use crate::error::{TspError, TspResult};
use crate::evaluation::TourEvaluator;
use crate::models::{SolverResult, Tour};

/// Improves a tour with first-improvement 2-opt.
///
/// Returns the improved tour, its length, and the number of scans performed.
/// The returned distance is never greater than the input tour's length.
///
/// # Arguments
///
/// * `tour` — Starting tour over all cities of `distances`
/// * `distances` — Distance matrix
/// * `max_iterations` — Maximum number of scans (at least 1)
///
/// # Errors
///
/// `InvalidInput` if the tour does not cover exactly the matrix's cities,
/// `InvalidParameters` if `max_iterations` is zero.
///
/// # Examples
///
/// ```
/// use u_tsp::models::{Point, Tour};
/// use u_tsp::distance::DistanceMatrix;
/// use u_tsp::local_search::two_opt_improve;
///
/// let points = vec![
///     Point::new(0.0, 0.0),
///     Point::new(10.0, 0.0),
///     Point::new(10.0, 10.0),
///     Point::new(0.0, 10.0),
/// ];
/// let dm = DistanceMatrix::from_points(&points).unwrap();
///
/// // Crossing order: 0 -> 2 -> 1 -> 3
/// let tour = Tour::new(vec![0, 2, 1, 3]).unwrap();
/// let result = two_opt_improve(&tour, &dm, 100).unwrap();
/// assert_eq!(result.distance, 40);
/// ```
pub fn two_opt_improve(
    tour: &Tour,
    distances: &DistanceMatrix,
    max_iterations: usize,
) -> TspResult<SolverResult> {
    let n = distances.size();
    if tour.len() != n {
        return Err(TspError::input(format!(
            "tour has {} cities but the distance matrix has {n}",
            tour.len()
        )));
    }
    if max_iterations == 0 {
        return Err(TspError::parameters("max_iterations must be at least 1"));
    }

    let evaluator = TourEvaluator::new(distances);
    let mut cities = tour.cities().to_vec();
    let mut distance = evaluator.tour_length(&cities);
    let initial = distance;
    let mut iterations = 0;
    let mut improved = true;

    while improved && iterations < max_iterations {
        improved = false;
        if let Some((i, j, delta)) = first_improvement(&evaluator, &cities) {
            cities[i + 1..=j].reverse();
            distance += delta;
            improved = true;
            log::trace!("two_opt: move i={i} j={j} delta={delta} distance={distance}");
        }
        iterations += 1;
    }

    log::debug!(
        "two_opt: done n={n} iterations={iterations} initial={initial} distance={distance} converged={}",
        !improved
    );

    Ok(SolverResult::new(Tour::from_permutation(cities), distance).with_iterations(iterations))
}

/// Scans pairs in order and returns the first improving move as `(i, j, delta)`.
fn first_improvement(
    evaluator: &TourEvaluator<'_>,
    cities: &[usize],
) -> Option<(usize, usize, i64)> {
    let n = cities.len();
    for i in 0..n.saturating_sub(1) {
        for j in (i + 2)..n {
            let delta = evaluator.two_opt_delta(cities, i, j);
            if delta < 0 {
                return Some((i, j, delta));
            }
        }
    }
    None
}
