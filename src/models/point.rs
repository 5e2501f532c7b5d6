//! City coordinates.

use serde::{Deserialize, Serialize};

/// A city location in the plane.
///
/// # Examples
///
/// ```
/// use u_tsp::models::Point;
///
/// let a = Point::new(0.0, 0.0);
/// let b = Point::new(3.0, 4.0);
/// assert_eq!(a.euc_2d(&b), 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// X coordinate.
    pub x: f64,
    /// Y coordinate.
    pub y: f64,
}

impl Point {
    /// Creates a point at the given coordinates.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns `true` if both coordinates are finite.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Exact Euclidean distance to another point.
    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// TSPLIB `EUC_2D` distance: Euclidean distance rounded to the nearest
    /// integer, ties rounded up.
    ///
    /// Saturates at `i64::MAX` for distances too large to represent; see
    /// [`Point::checked_euc_2d`].
    pub fn euc_2d(&self, other: &Point) -> i64 {
        (self.distance_to(other) + 0.5).floor() as i64
    }

    /// Like [`Point::euc_2d`], but returns `None` when the rounded distance
    /// does not fit in an `i64`.
    pub fn checked_euc_2d(&self, other: &Point) -> Option<i64> {
        let rounded = (self.distance_to(other) + 0.5).floor();
        // i64::MAX as f64 rounds up to 2^63
        (rounded.is_finite() && rounded < i64::MAX as f64).then_some(rounded as i64)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<[f64; 2]> for Point {
    fn from([x, y]: [f64; 2]) -> Self {
        Self::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_to() {
        let a = Point::new(1.0, 1.0);
        let b = Point::new(4.0, 5.0);
        assert!((a.distance_to(&b) - 5.0).abs() < 1e-10);
    }

    #[test]
    fn test_euc_2d_rounds_half_up() {
        let a = Point::new(0.0, 0.0);
        // 2.5 exactly rounds up to 3
        assert_eq!(a.euc_2d(&Point::new(2.5, 0.0)), 3);
        // 1.4142.. rounds down to 1
        assert_eq!(a.euc_2d(&Point::new(1.0, 1.0)), 1);
        // 2.8284.. rounds up to 3
        assert_eq!(a.euc_2d(&Point::new(2.0, 2.0)), 3);
    }

    #[test]
    fn test_euc_2d_symmetric() {
        let a = Point::new(565.0, 575.0);
        let b = Point::new(25.0, 185.0);
        assert_eq!(a.euc_2d(&b), b.euc_2d(&a));
        assert_eq!(a.euc_2d(&a), 0);
    }

    #[test]
    fn test_checked_euc_2d() {
        let a = Point::new(0.0, 0.0);
        assert_eq!(a.checked_euc_2d(&Point::new(3.0, 4.0)), Some(5));
        assert_eq!(a.checked_euc_2d(&Point::new(4e18, 0.0)), Some(4_000_000_000_000_000_000));
        assert_eq!(a.checked_euc_2d(&Point::new(1e19, 0.0)), None);
        // dx * dx overflows to infinity
        assert_eq!(a.checked_euc_2d(&Point::new(1e300, 0.0)), None);
    }

    #[test]
    fn test_is_finite() {
        assert!(Point::new(1.0, 2.0).is_finite());
        assert!(!Point::new(f64::NAN, 2.0).is_finite());
        assert!(!Point::new(1.0, f64::INFINITY).is_finite());
    }

    #[test]
    fn test_from_pairs() {
        assert_eq!(Point::from((1.0, 2.0)), Point::new(1.0, 2.0));
        assert_eq!(Point::from([3.0, 4.0]), Point::new(3.0, 4.0));
    }
}
