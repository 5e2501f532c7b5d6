//! Dense integer distance matrix.

use crate::error::{TspError, TspResult};
use crate::models::Point;

/// A dense n×n matrix of TSPLIB `EUC_2D` distances stored in row-major order.
///
/// Built once per point set and read-only afterwards. Entries are
/// non-negative, the diagonal is zero, and `get(i, j) == get(j, i)`.
///
/// # Examples
///
/// ```
/// use u_tsp::models::Point;
/// use u_tsp::distance::DistanceMatrix;
///
/// let points = vec![
///     Point::new(0.0, 0.0),
///     Point::new(3.0, 4.0),
///     Point::new(6.0, 8.0),
/// ];
/// let dm = DistanceMatrix::from_points(&points).unwrap();
/// assert_eq!(dm.get(0, 1), 5);
/// assert_eq!(dm.get(2, 0), 10);
/// assert_eq!(dm.size(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceMatrix {
    data: Vec<i64>,
    size: usize,
}

impl DistanceMatrix {
    /// Computes the `EUC_2D` distance matrix of a point set.
    ///
    /// Returns `InvalidInput` if `points` is empty, any coordinate is
    /// non-finite, or the distances are too large for every tour length to
    /// fit in an `i64`.
    pub fn from_points(points: &[Point]) -> TspResult<Self> {
        let n = points.len();
        if n < 1 {
            return Err(TspError::input("distance matrix needs at least 1 point"));
        }
        if let Some(idx) = points.iter().position(|p| !p.is_finite()) {
            return Err(TspError::input(format!(
                "point {idx} has a non-finite coordinate"
            )));
        }

        let mut data = vec![0; n * n];
        for i in 0..n {
            for j in (i + 1)..n {
                let d = points[i].checked_euc_2d(&points[j]).ok_or_else(|| {
                    TspError::input(format!("distance between points {i} and {j} is too large"))
                })?;
                data[i * n + j] = d;
                data[j * n + i] = d;
            }
        }
        let dm = Self { data, size: n };
        dm.ensure_tour_lengths_fit()?;
        Ok(dm)
    }

    /// Creates a distance matrix from an explicit n×n grid.
    ///
    /// Returns `InvalidInput` unless the grid is non-empty, has
    /// `size * size` entries, is symmetric, has a zero diagonal, and holds
    /// no negative entries.
    pub fn from_data(size: usize, data: Vec<i64>) -> TspResult<Self> {
        if size < 1 || data.len() != size * size {
            return Err(TspError::input(format!(
                "expected {} entries for a {size}x{size} matrix, got {}",
                size * size,
                data.len()
            )));
        }
        let dm = Self { data, size };
        if !dm.is_symmetric() {
            return Err(TspError::input("distance matrix must be symmetric"));
        }
        if (0..size).any(|i| dm.get(i, i) != 0) {
            return Err(TspError::input("distance matrix diagonal must be zero"));
        }
        if dm.data.iter().any(|&d| d < 0) {
            return Err(TspError::input("distances must be non-negative"));
        }
        dm.ensure_tour_lengths_fit()?;
        Ok(dm)
    }

    /// A closed tour has `size` edges, so `size * max` bounds every tour
    /// length and every partial sum along the way.
    fn ensure_tour_lengths_fit(&self) -> TspResult<()> {
        let max = self.data.iter().copied().max().unwrap_or(0);
        let edges = i64::try_from(self.size).ok();
        if edges.and_then(|e| e.checked_mul(max)).is_none() {
            return Err(TspError::input(format!(
                "distances up to {max} overflow tour lengths over {} cities",
                self.size
            )));
        }
        Ok(())
    }

    /// Returns the distance between cities `from` and `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    #[inline]
    pub fn get(&self, from: usize, to: usize) -> i64 {
        self.data[from * self.size + to]
    }

    /// Number of cities in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if `get(i, j) == get(j, i)` for every pair.
    pub fn is_symmetric(&self) -> bool {
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                if self.get(i, j) != self.get(j, i) {
                    return false;
                }
            }
        }
        true
    }

    /// Returns the nearest neighbor of `from` among the given candidates.
    ///
    /// Ties go to the candidate listed first. Returns `None` if
    /// `candidates` is empty.
    pub fn nearest_neighbor(&self, from: usize, candidates: &[usize]) -> Option<usize> {
        candidates
            .iter()
            .copied()
            .min_by_key(|&c| self.get(from, c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_points() -> Vec<Point> {
        vec![
            Point::new(0.0, 0.0),
            Point::new(3.0, 4.0),
            Point::new(0.0, 8.0),
        ]
    }

    #[test]
    fn test_from_points() {
        let dm = DistanceMatrix::from_points(&sample_points()).expect("valid");
        assert_eq!(dm.size(), 3);
        assert_eq!(dm.get(0, 1), 5);
        assert_eq!(dm.get(0, 2), 8);
        assert_eq!(dm.get(1, 2), 5);
        assert_eq!(dm.get(0, 0), 0);
    }

    #[test]
    fn test_from_points_rounding() {
        let points = vec![Point::new(0.0, 0.0), Point::new(1.0, 1.0), Point::new(2.0, 2.0)];
        let dm = DistanceMatrix::from_points(&points).expect("valid");
        // sqrt(2) = 1.41 -> 1, sqrt(8) = 2.83 -> 3
        assert_eq!(dm.get(0, 1), 1);
        assert_eq!(dm.get(0, 2), 3);
    }

    #[test]
    fn test_symmetric() {
        let dm = DistanceMatrix::from_points(&sample_points()).expect("valid");
        assert!(dm.is_symmetric());
    }

    #[test]
    fn test_single_point() {
        let dm = DistanceMatrix::from_points(&[Point::new(1.0, 2.0)]).expect("valid");
        assert_eq!(dm.size(), 1);
        assert_eq!(dm.get(0, 0), 0);
    }

    #[test]
    fn test_empty_points_rejected() {
        let err = DistanceMatrix::from_points(&[]).unwrap_err();
        assert!(matches!(err, TspError::InvalidInput { .. }));
    }

    #[test]
    fn test_non_finite_rejected() {
        let points = vec![Point::new(0.0, 0.0), Point::new(f64::NAN, 1.0)];
        assert!(DistanceMatrix::from_points(&points).is_err());
    }

    #[test]
    fn test_huge_distance_rejected() {
        // Each edge fits in an i64 but the closed tour would not
        let points = vec![
            Point::new(0.0, 0.0),
            Point::new(4e18, 0.0),
            Point::new(0.0, 4e18),
        ];
        let err = DistanceMatrix::from_points(&points).unwrap_err();
        assert!(matches!(err, TspError::InvalidInput { .. }));

        // The squared difference overflows to infinity
        let points = vec![Point::new(0.0, 0.0), Point::new(1e300, 0.0)];
        let err = DistanceMatrix::from_points(&points).unwrap_err();
        assert!(matches!(err, TspError::InvalidInput { .. }));
    }

    #[test]
    fn test_large_coordinates_accepted() {
        let points = vec![
            Point::new(0.0, 0.0),
            Point::new(1e9, 0.0),
            Point::new(0.0, 1e9),
        ];
        let dm = DistanceMatrix::from_points(&points).expect("valid");
        assert_eq!(dm.get(0, 1), 1_000_000_000);
    }

    #[test]
    fn test_from_data_overflowing_tour_rejected() {
        let big = i64::MAX / 2 + 1;
        assert!(DistanceMatrix::from_data(2, vec![0, big, big, 0]).is_err());
        let fits = i64::MAX / 2;
        assert!(DistanceMatrix::from_data(2, vec![0, fits, fits, 0]).is_ok());
    }

    #[test]
    fn test_from_data() {
        let dm = DistanceMatrix::from_data(2, vec![0, 5, 5, 0]).expect("valid");
        assert_eq!(dm.get(0, 1), 5);
        assert_eq!(dm.get(1, 0), 5);
    }

    #[test]
    fn test_from_data_invalid_size() {
        assert!(DistanceMatrix::from_data(2, vec![0, 1, 2]).is_err());
        assert!(DistanceMatrix::from_data(0, vec![]).is_err());
    }

    #[test]
    fn test_from_data_asymmetric_rejected() {
        assert!(DistanceMatrix::from_data(2, vec![0, 10, 15, 0]).is_err());
    }

    #[test]
    fn test_from_data_bad_diagonal_rejected() {
        assert!(DistanceMatrix::from_data(2, vec![1, 5, 5, 0]).is_err());
        assert!(DistanceMatrix::from_data(2, vec![0, -5, -5, 0]).is_err());
    }

    #[test]
    fn test_nearest_neighbor() {
        let dm = DistanceMatrix::from_points(&sample_points()).expect("valid");
        // From (0,0): point 1 at (3,4) is 5 away, point 2 at (0,8) is 8 away
        assert_eq!(dm.nearest_neighbor(0, &[1, 2]), Some(1));
        assert_eq!(dm.nearest_neighbor(0, &[2]), Some(2));
        assert_eq!(dm.nearest_neighbor(0, &[]), None);
    }

    #[test]
    fn test_nearest_neighbor_tie_keeps_first() {
        // From point 1, both 0 and 2 are 5 away
        let dm = DistanceMatrix::from_points(&sample_points()).expect("valid");
        assert_eq!(dm.nearest_neighbor(1, &[0, 2]), Some(0));
        assert_eq!(dm.nearest_neighbor(1, &[2, 0]), Some(2));
    }
}
