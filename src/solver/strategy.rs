//! Solver strategies behind a common interface.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::annealing::{simulated_annealing, AnnealingConfig};
use crate::constructive::nearest_neighbor_multistart;
use crate::distance::DistanceMatrix;
use crate::error::{TspError, TspResult};
use crate::local_search::{two_opt_improve, TwoOptConfig};
use crate::models::{Point, SolverResult};

/// A TSP solving strategy.
///
/// Every implementation takes its own copy of the problem data, so separate
/// calls share nothing. Strategies that need randomness draw it only from
/// `rng`; deterministic strategies ignore it.
///
/// # Examples
///
/// ```
/// use u_tsp::models::Point;
/// use u_tsp::solver::{GreedyConstructor, TspSolver};
///
/// let points = vec![
///     Point::new(0.0, 0.0),
///     Point::new(3.0, 0.0),
///     Point::new(0.0, 4.0),
/// ];
/// let mut rng = u_numflow::random::create_rng(42);
/// let result = GreedyConstructor.solve(&points, &mut rng).unwrap();
/// assert_eq!(result.distance, 12);
/// ```
pub trait TspSolver {
    /// Short identifier for logs.
    fn name(&self) -> &'static str;

    /// Solves the instance given by `points`.
    fn solve<R: Rng + ?Sized>(&self, points: &[Point], rng: &mut R) -> TspResult<SolverResult>;
}

/// Multi-start nearest-neighbor construction.
#[derive(Debug, Clone, Copy, Default)]
pub struct GreedyConstructor;

impl TspSolver for GreedyConstructor {
    fn name(&self) -> &'static str {
        "constructive"
    }

    fn solve<R: Rng + ?Sized>(&self, points: &[Point], _rng: &mut R) -> TspResult<SolverResult> {
        let distances = build_matrix(points)?;
        nearest_neighbor_multistart(&distances)
    }
}

/// 2-opt local search seeded by the multi-start nearest-neighbor tour.
#[derive(Debug, Clone, Copy, Default)]
pub struct TwoOptOptimizer {
    config: TwoOptConfig,
}

impl TwoOptOptimizer {
    /// Creates an optimizer with the given configuration.
    pub fn new(config: TwoOptConfig) -> Self {
        Self { config }
    }
}

impl TspSolver for TwoOptOptimizer {
    fn name(&self) -> &'static str {
        "local_search"
    }

    fn solve<R: Rng + ?Sized>(&self, points: &[Point], _rng: &mut R) -> TspResult<SolverResult> {
        ensure_min_points(points)?;
        self.config.validate()?;
        let distances = DistanceMatrix::from_points(points)?;
        let seed = nearest_neighbor_multistart(&distances)?;
        two_opt_improve(&seed.tour, &distances, self.config.max_iterations)
    }
}

/// Simulated annealing seeded by the multi-start nearest-neighbor tour.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnnealingSolver {
    config: AnnealingConfig,
}

impl AnnealingSolver {
    /// Creates a solver with the given configuration.
    pub fn new(config: AnnealingConfig) -> Self {
        Self { config }
    }
}

impl TspSolver for AnnealingSolver {
    fn name(&self) -> &'static str {
        "annealing"
    }

    fn solve<R: Rng + ?Sized>(&self, points: &[Point], rng: &mut R) -> TspResult<SolverResult> {
        simulated_annealing(points, &self.config, rng)
    }
}

/// Strategy selector with its parameters.
///
/// Serialized with an internal `strategy` tag; parameters that are left out
/// take their defaults.
///
/// ```
/// use u_tsp::solver::{Strategy, TspSolver};
///
/// let s: Strategy = serde_json::from_str(r#"{"strategy": "local_search", "max_iterations": 50}"#).unwrap();
/// assert_eq!(s.name(), "local_search");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "strategy", rename_all = "snake_case")]
pub enum Strategy {
    /// Multi-start nearest neighbor only.
    #[default]
    Constructive,
    /// Nearest neighbor followed by 2-opt.
    LocalSearch(TwoOptConfig),
    /// Simulated annealing seeded by nearest neighbor.
    Annealing(AnnealingConfig),
}

impl Strategy {
    /// 2-opt local search with default parameters.
    pub fn local_search() -> Self {
        Strategy::LocalSearch(TwoOptConfig::default())
    }

    /// Simulated annealing with default parameters.
    pub fn annealing() -> Self {
        Strategy::Annealing(AnnealingConfig::default())
    }
}

impl TspSolver for Strategy {
    fn name(&self) -> &'static str {
        match self {
            Strategy::Constructive => GreedyConstructor.name(),
            Strategy::LocalSearch(config) => TwoOptOptimizer::new(*config).name(),
            Strategy::Annealing(config) => AnnealingSolver::new(*config).name(),
        }
    }

    fn solve<R: Rng + ?Sized>(&self, points: &[Point], rng: &mut R) -> TspResult<SolverResult> {
        match self {
            Strategy::Constructive => GreedyConstructor.solve(points, rng),
            Strategy::LocalSearch(config) => TwoOptOptimizer::new(*config).solve(points, rng),
            Strategy::Annealing(config) => AnnealingSolver::new(*config).solve(points, rng),
        }
    }
}

fn ensure_min_points(points: &[Point]) -> TspResult<()> {
    if points.len() < 2 {
        return Err(TspError::input(format!(
            "need at least 2 points, got {}",
            points.len()
        )));
    }
    Ok(())
}

fn build_matrix(points: &[Point]) -> TspResult<DistanceMatrix> {
    ensure_min_points(points)?;
    DistanceMatrix::from_points(points)
}
