//! Caller-owned solve request.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::strategy::{Strategy, TspSolver};
use crate::error::TspResult;
use crate::models::{Point, SolverResult};

/// A complete solve request: the cities plus the strategy to run.
///
/// The request is owned by the caller and the engine keeps nothing after
/// returning, so any number of requests can be solved independently.
///
/// # Examples
///
/// ```
/// use u_tsp::models::Point;
/// use u_tsp::solver::{SolveRequest, Strategy};
///
/// let points = vec![
///     Point::new(0.0, 0.0),
///     Point::new(10.0, 0.0),
///     Point::new(10.0, 10.0),
///     Point::new(0.0, 10.0),
/// ];
/// let request = SolveRequest::new(points, Strategy::local_search());
/// let result = request.solve_seeded(42).unwrap();
/// assert_eq!(result.distance, 40);
/// assert!(result.iterations.is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolveRequest {
    /// Cities to visit, in index order.
    pub points: Vec<Point>,
    /// Strategy and its parameters.
    #[serde(default)]
    pub strategy: Strategy,
}

impl SolveRequest {
    /// Creates a request.
    pub fn new(points: Vec<Point>, strategy: Strategy) -> Self {
        Self { points, strategy }
    }

    /// Runs the request with the caller's random generator.
    pub fn solve<R: Rng + ?Sized>(&self, rng: &mut R) -> TspResult<SolverResult> {
        log::debug!(
            "solve: strategy={} n={}",
            self.strategy.name(),
            self.points.len()
        );
        let result = self.strategy.solve(&self.points, rng)?;
        log::debug!(
            "solve: strategy={} distance={} iterations={:?}",
            self.strategy.name(),
            result.distance,
            result.iterations
        );
        Ok(result)
    }

    /// Runs the request with a fresh generator seeded from `seed`.
    ///
    /// Identical requests with the same seed give identical results.
    pub fn solve_seeded(&self, seed: u64) -> TspResult<SolverResult> {
        let mut rng = u_numflow::random::create_rng(seed);
        self.solve(&mut rng)
    }
}
