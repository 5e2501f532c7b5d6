//! Tour evaluator: closed-tour length and 2-opt move deltas.

use crate::distance::DistanceMatrix;
use crate::models::Tour;

/// Scores tours against a distance matrix.
///
/// [`tour_length`](TourEvaluator::tour_length) is the ground truth every
/// strategy reports. [`two_opt_delta`](TourEvaluator::two_opt_delta) is the
/// incremental form used during search; applying a move and adding its delta
/// to a cached length always yields the same value as re-evaluating from
/// scratch.
///
/// # Examples
///
/// ```
/// use u_tsp::models::{Point, Tour};
/// use u_tsp::distance::DistanceMatrix;
/// use u_tsp::evaluation::TourEvaluator;
///
/// let points = vec![
///     Point::new(0.0, 0.0),
///     Point::new(3.0, 0.0),
///     Point::new(3.0, 4.0),
/// ];
/// let dm = DistanceMatrix::from_points(&points).unwrap();
/// let evaluator = TourEvaluator::new(&dm);
/// assert_eq!(evaluator.evaluate(&Tour::identity(3)), 12);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct TourEvaluator<'a> {
    distances: &'a DistanceMatrix,
}

impl<'a> TourEvaluator<'a> {
    /// Creates an evaluator over the given matrix.
    pub fn new(distances: &'a DistanceMatrix) -> Self {
        Self { distances }
    }

    /// The matrix this evaluator reads.
    pub fn distances(&self) -> &'a DistanceMatrix {
        self.distances
    }

    /// Total length of a tour, including the closing edge.
    pub fn evaluate(&self, tour: &Tour) -> i64 {
        self.tour_length(tour.cities())
    }

    /// Total length of a visiting order, including the edge from the last
    /// city back to the first. Empty and single-city orders have length 0.
    pub fn tour_length(&self, cities: &[usize]) -> i64 {
        let n = cities.len();
        if n < 2 {
            return 0;
        }
        let open: i64 = cities
            .windows(2)
            .map(|w| self.distances.get(w[0], w[1]))
            .sum();
        open + self.distances.get(cities[n - 1], cities[0])
    }

    /// Change in tour length from replacing edges `(c[i], c[i+1])` and
    /// `(c[j], c[(j+1) % n])` with `(c[i], c[j])` and `(c[i+1], c[(j+1) % n])`,
    /// which is what reversing the segment `c[i+1..=j]` does.
    ///
    /// ```text
    /// delta = d(c[i], c[j]) + d(c[i+1], c[j+1]) - d(c[i], c[i+1]) - d(c[j], c[j+1])
    /// ```
    ///
    /// Requires `i + 1 < n` and `j < n`.
    #[inline]
    pub fn two_opt_delta(&self, cities: &[usize], i: usize, j: usize) -> i64 {
        let n = cities.len();
        let a = cities[i];
        let b = cities[i + 1];
        let c = cities[j];
        let d = cities[(j + 1) % n];

        let removed = self.distances.get(a, b) + self.distances.get(c, d);
        let added = self.distances.get(a, c) + self.distances.get(b, d);
        added - removed
    }
}
