//! Tour type: a closed visiting order over all cities.

use serde::{Deserialize, Serialize};

use crate::error::{TspError, TspResult};

/// A visiting order over cities `0..n`, implicitly closed back to the first city.
///
/// Every tour is a permutation: each city index appears exactly once.
///
/// # Examples
///
/// ```
/// use u_tsp::models::Tour;
///
/// let tour = Tour::new(vec![2, 0, 1]).unwrap();
/// assert_eq!(tour.len(), 3);
/// assert_eq!(tour.cities(), &[2, 0, 1]);
///
/// assert!(Tour::new(vec![0, 0, 1]).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<usize>", into = "Vec<usize>")]
pub struct Tour {
    cities: Vec<usize>,
}

impl Tour {
    /// Creates a tour from a visiting order.
    ///
    /// Returns `InvalidInput` unless `cities` is a permutation of `0..cities.len()`.
    pub fn new(cities: Vec<usize>) -> TspResult<Self> {
        if !is_permutation(&cities) {
            return Err(TspError::input(format!(
                "tour is not a permutation of 0..{}",
                cities.len()
            )));
        }
        Ok(Self { cities })
    }

    /// The identity tour `0, 1, ..., n-1`.
    pub fn identity(n: usize) -> Self {
        Self {
            cities: (0..n).collect(),
        }
    }

    /// Wraps an order already known to be a permutation.
    pub(crate) fn from_permutation(cities: Vec<usize>) -> Self {
        debug_assert!(is_permutation(&cities));
        Self { cities }
    }

    /// The visiting order.
    pub fn cities(&self) -> &[usize] {
        &self.cities
    }

    /// Number of cities in the tour.
    pub fn len(&self) -> usize {
        self.cities.len()
    }

    /// Returns `true` if the tour visits no cities.
    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    /// Reverses the segment `[from..=to]` in place (the 2-opt move).
    ///
    /// # Panics
    ///
    /// Panics if `to >= len()`.
    pub fn reverse_segment(&mut self, from: usize, to: usize) {
        if from < to {
            self.cities[from..=to].reverse();
        }
    }

    /// Returns the same cycle started at position `offset`.
    pub fn rotated(&self, offset: usize) -> Self {
        let mut cities = self.cities.clone();
        if !cities.is_empty() {
            let k = offset % cities.len();
            cities.rotate_left(k);
        }
        Self { cities }
    }

    /// Returns the same cycle traversed in the opposite direction.
    pub fn reversed(&self) -> Self {
        let mut cities = self.cities.clone();
        cities.reverse();
        Self { cities }
    }

    /// Consumes the tour, returning the visiting order.
    pub fn into_cities(self) -> Vec<usize> {
        self.cities
    }
}

impl TryFrom<Vec<usize>> for Tour {
    type Error = TspError;

    fn try_from(cities: Vec<usize>) -> TspResult<Self> {
        Tour::new(cities)
    }
}

impl From<Tour> for Vec<usize> {
    fn from(tour: Tour) -> Self {
        tour.cities
    }
}

/// Returns `true` if `cities` contains each index in `0..cities.len()` exactly once.
fn is_permutation(cities: &[usize]) -> bool {
    let n = cities.len();
    let mut seen = vec![false; n];
    for &c in cities {
        if c >= n || seen[c] {
            return false;
        }
        seen[c] = true;
    }
    true
}
