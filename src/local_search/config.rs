//! 2-opt configuration.

use serde::{Deserialize, Serialize};

use crate::error::{TspError, TspResult};

/// Configuration for the 2-opt local search.
///
/// # Examples
///
/// ```
/// use u_tsp::local_search::TwoOptConfig;
///
/// let config = TwoOptConfig::default().with_max_iterations(500);
/// assert_eq!(config.max_iterations, 500);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TwoOptConfig {
    /// Maximum number of scans. Each improving move restarts the scan and
    /// counts as one iteration; the final scan that finds nothing counts too.
    pub max_iterations: usize,
}

impl Default for TwoOptConfig {
    fn default() -> Self {
        Self {
            max_iterations: 100,
        }
    }
}

impl TwoOptConfig {
    /// Sets the scan limit.
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> TspResult<()> {
        if self.max_iterations == 0 {
            return Err(TspError::parameters("max_iterations must be at least 1"));
        }
        Ok(())
    }
}
