//! Solver output.

use serde::{Deserialize, Serialize};

use super::Tour;

/// The outcome of one solver invocation.
///
/// `distance` always equals the closed-tour length of `tour` under the
/// distance matrix that produced it. `iterations` is reported only by the
/// 2-opt local search.
///
/// # Examples
///
/// ```
/// use u_tsp::models::{SolverResult, Tour};
///
/// let result = SolverResult::new(Tour::identity(3), 12);
/// assert_eq!(result.distance, 12);
/// assert_eq!(result.iterations, None);
///
/// let result = result.with_iterations(4);
/// assert_eq!(result.iterations, Some(4));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolverResult {
    /// The visiting order found.
    pub tour: Tour,
    /// Total closed-tour length.
    pub distance: i64,
    /// Number of 2-opt scans performed, if the strategy reports it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iterations: Option<usize>,
}

impl SolverResult {
    /// Creates a result without an iteration count.
    pub fn new(tour: Tour, distance: i64) -> Self {
        Self {
            tour,
            distance,
            iterations: None,
        }
    }

    /// Attaches an iteration count.
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = Some(iterations);
        self
    }

    /// Number of cities in the tour.
    pub fn num_cities(&self) -> usize {
        self.tour.len()
    }
}
