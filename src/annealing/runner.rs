//! Annealing execution loop.

use rand::Rng;

use super::config::AnnealingConfig;
use crate::constructive::nearest_neighbor_multistart;
use crate::distance::DistanceMatrix;
use crate::error::{TspError, TspResult};
use crate::evaluation::TourEvaluator;
use crate::models::{Point, SolverResult};

/// Outcome of a full annealing run, with search statistics.
#[derive(Debug, Clone)]
pub struct AnnealingRun {
    /// Best tour found and its length. `iterations` is always `None`.
    pub result: SolverResult,

    /// Length of the nearest-neighbor seed tour.
    pub initial_distance: i64,

    /// Number of temperature levels visited.
    pub temperature_steps: usize,

    /// Total number of neighbor evaluations.
    pub evaluations: usize,

    /// Number of accepted moves (including improvements).
    pub accepted_moves: usize,

    /// Number of strictly improving moves.
    pub improving_moves: usize,

    /// Temperature when the run stopped.
    pub final_temperature: f64,

    /// Best length after each temperature level, starting with the seed.
    pub best_history: Vec<i64>,
}

/// Solves a point set with simulated annealing.
///
/// Builds the distance matrix, seeds with the multi-start nearest-neighbor
/// tour, and anneals over the 2-opt neighborhood. See [`anneal`].
///
/// # Errors
///
/// `InvalidInput` for fewer than 2 points or non-finite coordinates,
/// `InvalidParameters` if the configuration does not validate.
///
/// # Examples
///
/// ```
/// use u_tsp::models::Point;
/// use u_tsp::annealing::{simulated_annealing, AnnealingConfig};
///
/// let points: Vec<Point> = (0..12)
///     .map(|i| {
///         let t = i as f64 * std::f64::consts::TAU / 12.0;
///         Point::new(100.0 * t.cos(), 100.0 * t.sin())
///     })
///     .collect();
/// let config = AnnealingConfig::default()
///     .with_initial_temperature(100.0)
///     .with_final_temperature(1.0);
///
/// let mut rng = u_numflow::random::create_rng(42);
/// let result = simulated_annealing(&points, &config, &mut rng).unwrap();
/// assert_eq!(result.tour.len(), 12);
/// assert_eq!(result.iterations, None);
/// ```
pub fn simulated_annealing<R: Rng + ?Sized>(
    points: &[Point],
    config: &AnnealingConfig,
    rng: &mut R,
) -> TspResult<SolverResult> {
    if points.len() < 2 {
        return Err(TspError::input(format!(
            "annealing needs at least 2 points, got {}",
            points.len()
        )));
    }
    config.validate()?;
    let distances = DistanceMatrix::from_points(points)?;
    Ok(anneal(&distances, config, rng)?.result)
}

/// Runs simulated annealing over a prebuilt distance matrix.
///
/// Each neighbor reverses a random segment `tour[i+1..=j]` with
/// `j >= i + 2`. Improving moves are always accepted; others are accepted
/// with probability `exp(-delta / T)` (Metropolis criterion). The best tour
/// is tracked separately from the current one, so its length never
/// increases.
///
/// With only 2 cities no move exists and the seed tour is returned.
pub fn anneal<R: Rng + ?Sized>(
    distances: &DistanceMatrix,
    config: &AnnealingConfig,
    rng: &mut R,
) -> TspResult<AnnealingRun> {
    config.validate()?;
    let seed = nearest_neighbor_multistart(distances)?;

    let n = distances.size();
    let evaluator = TourEvaluator::new(distances);
    let initial_distance = seed.distance;

    let mut current = seed.tour;
    let mut current_distance = initial_distance;
    let mut best = current.clone();
    let mut best_distance = current_distance;

    let mut temperature = config.initial_temperature;
    let mut temperature_steps = 0usize;
    let mut evaluations = 0usize;
    let mut accepted_moves = 0usize;
    let mut improving_moves = 0usize;
    let mut best_history = vec![best_distance];

    log::debug!(
        "annealing: start n={n} seed_distance={initial_distance} t0={} t_final={} alpha={}",
        config.initial_temperature,
        config.final_temperature,
        config.cooling_rate
    );

    while temperature > config.final_temperature {
        for _ in 0..config.iterations_per_temperature {
            let Some((i, j)) = sample_move(n, rng) else {
                break;
            };
            evaluations += 1;

            let delta = evaluator.two_opt_delta(current.cities(), i, j);

            // Metropolis acceptance criterion
            let accept = if delta < 0 {
                improving_moves += 1;
                true
            } else {
                let probability = (-(delta as f64) / temperature).exp();
                rng.random_range(0.0..1.0) < probability
            };

            if accept {
                current.reverse_segment(i + 1, j);
                current_distance += delta;
                accepted_moves += 1;

                if current_distance < best_distance {
                    best = current.clone();
                    best_distance = current_distance;
                }
            }
        }

        best_history.push(best_distance);
        log::trace!(
            "annealing: step={temperature_steps} temperature={temperature:.4} current={current_distance} best={best_distance}"
        );

        temperature *= config.cooling_rate;
        temperature_steps += 1;
    }

    debug_assert_eq!(current_distance, evaluator.evaluate(&current));
    debug_assert_eq!(best_distance, evaluator.evaluate(&best));

    log::debug!(
        "annealing: done steps={temperature_steps} evaluations={evaluations} accepted={accepted_moves} improving={improving_moves} best={best_distance}"
    );

    Ok(AnnealingRun {
        result: SolverResult::new(best, best_distance),
        initial_distance,
        temperature_steps,
        evaluations,
        accepted_moves,
        improving_moves,
        final_temperature: temperature,
        best_history,
    })
}

/// Draws cut points `i` in `[0, n-3]` and `j` in `[i+2, n-1]`.
///
/// Returns `None` when the tour is too short for a 2-opt move.
fn sample_move<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Option<(usize, usize)> {
    if n < 3 {
        return None;
    }
    let i = rng.random_range(0..n - 2);
    let j = rng.random_range(i + 2..n);
    Some((i, j))
}

#[cfg(test)]
mod tests {
    use super::*;
    use u_numflow::random::create_rng;

    fn circle(n: usize) -> Vec<Point> {
        (0..n)
            .map(|i| {
                let t = i as f64 * std::f64::consts::TAU / n as f64;
                Point::new(500.0 + 400.0 * t.cos(), 500.0 + 400.0 * t.sin())
            })
            .collect()
    }

    fn scrambled(n: usize) -> Vec<Point> {
        (0..n)
            .map(|i| {
                let x = ((i * 37) % 101) as f64 * 9.0;
                let y = ((i * 53) % 97) as f64 * 7.0;
                Point::new(x, y)
            })
            .collect()
    }

    fn fast_config() -> AnnealingConfig {
        AnnealingConfig::default()
            .with_initial_temperature(200.0)
            .with_final_temperature(0.5)
            .with_cooling_rate(0.9)
            .with_iterations_per_temperature(200)
    }

    #[test]
    fn test_sample_move_bounds() {
        let mut rng = create_rng(7);
        for n in 3..12 {
            for _ in 0..200 {
                let (i, j) = sample_move(n, &mut rng).expect("move exists");
                assert!(i + 2 <= j, "i={i} j={j}");
                assert!(j < n);
            }
        }
        assert!(sample_move(2, &mut rng).is_none());
    }

    #[test]
    fn test_anneal_never_worse_than_seed() {
        let dm = DistanceMatrix::from_points(&scrambled(30)).expect("valid");
        let mut rng = create_rng(42);
        let run = anneal(&dm, &fast_config(), &mut rng).expect("valid");
        assert!(run.result.distance <= run.initial_distance);
        assert_eq!(run.initial_distance, run.best_history[0]);
    }

    #[test]
    fn test_anneal_best_history_non_increasing() {
        let dm = DistanceMatrix::from_points(&scrambled(30)).expect("valid");
        let mut rng = create_rng(3);
        let run = anneal(&dm, &fast_config(), &mut rng).expect("valid");
        for window in run.best_history.windows(2) {
            assert!(
                window[1] <= window[0],
                "best distance should be non-increasing: {} > {}",
                window[1],
                window[0]
            );
        }
        assert_eq!(run.best_history.len(), run.temperature_steps + 1);
        assert_eq!(run.best_history.last().copied(), Some(run.result.distance));
    }

    #[test]
    fn test_anneal_result_consistent() {
        let dm = DistanceMatrix::from_points(&scrambled(25)).expect("valid");
        let eval = TourEvaluator::new(&dm);
        let mut rng = create_rng(11);
        let run = anneal(&dm, &fast_config(), &mut rng).expect("valid");
        assert_eq!(run.result.tour.len(), 25);
        assert_eq!(run.result.distance, eval.evaluate(&run.result.tour));
        assert_eq!(run.result.iterations, None);
    }

    #[test]
    fn test_anneal_statistics() {
        let config = fast_config();
        let dm = DistanceMatrix::from_points(&scrambled(20)).expect("valid");
        let mut rng = create_rng(5);
        let run = anneal(&dm, &config, &mut rng).expect("valid");
        assert_eq!(run.temperature_steps, config.temperature_steps());
        assert_eq!(
            run.evaluations,
            run.temperature_steps * config.iterations_per_temperature
        );
        assert!(run.accepted_moves >= run.improving_moves);
        // At T=200 plenty of worsening moves get through
        assert!(run.accepted_moves > run.improving_moves);
        assert!(run.final_temperature <= config.final_temperature);
    }

    #[test]
    fn test_anneal_deterministic_with_seed() {
        let points = scrambled(25);
        let a = simulated_annealing(&points, &fast_config(), &mut create_rng(99)).expect("valid");
        let b = simulated_annealing(&points, &fast_config(), &mut create_rng(99)).expect("valid");
        assert_eq!(a, b);
    }

    #[test]
    fn test_anneal_circle_finds_perimeter() {
        // The convex polygon order is optimal; greedy already finds it
        let points = circle(16);
        let dm = DistanceMatrix::from_points(&points).expect("valid");
        let eval = TourEvaluator::new(&dm);
        let optimal = eval.tour_length(&(0..16).collect::<Vec<_>>());
        let mut rng = create_rng(1);
        let result = simulated_annealing(&points, &fast_config(), &mut rng).expect("valid");
        assert_eq!(result.distance, optimal);
    }

    #[test]
    fn test_anneal_two_points() {
        let points = vec![Point::new(0.0, 0.0), Point::new(6.0, 8.0)];
        let dm = DistanceMatrix::from_points(&points).expect("valid");
        let mut rng = create_rng(42);
        let run = anneal(&dm, &fast_config(), &mut rng).expect("valid");
        assert_eq!(run.result.distance, 20);
        assert_eq!(run.evaluations, 0);
    }

    #[test]
    fn test_anneal_three_points() {
        let points = vec![
            Point::new(0.0, 0.0),
            Point::new(3.0, 0.0),
            Point::new(0.0, 4.0),
        ];
        let mut rng = create_rng(42);
        let result = simulated_annealing(&points, &fast_config(), &mut rng).expect("valid");
        assert_eq!(result.distance, 12);
    }

    #[test]
    fn test_anneal_too_few_points() {
        let mut rng = create_rng(42);
        let err = simulated_annealing(&[Point::new(0.0, 0.0)], &fast_config(), &mut rng)
            .unwrap_err();
        assert!(matches!(err, TspError::InvalidInput { .. }));
    }

    #[test]
    fn test_anneal_invalid_parameters() {
        let points = scrambled(5);
        let mut rng = create_rng(42);
        let config = fast_config().with_cooling_rate(1.0);
        let err = simulated_annealing(&points, &config, &mut rng).unwrap_err();
        assert!(matches!(err, TspError::InvalidParameters { .. }));
    }
}
