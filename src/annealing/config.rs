//! Annealing configuration.

use serde::{Deserialize, Serialize};

use crate::error::{TspError, TspResult};

/// Configuration for simulated annealing with geometric cooling.
///
/// The run starts at `initial_temperature`, performs
/// `iterations_per_temperature` neighbor evaluations at each level, then
/// multiplies the temperature by `cooling_rate`. It stops once the
/// temperature is no longer above `final_temperature`.
///
/// # Examples
///
/// ```
/// use u_tsp::annealing::AnnealingConfig;
///
/// let config = AnnealingConfig::default()
///     .with_initial_temperature(500.0)
///     .with_final_temperature(0.01)
///     .with_cooling_rate(0.98)
///     .with_iterations_per_temperature(200);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnnealingConfig {
    /// Starting temperature. Higher values accept more worsening moves early on.
    pub initial_temperature: f64,

    /// The run stops when the temperature drops to or below this value.
    pub final_temperature: f64,

    /// Geometric cooling factor in (0, 1). Higher = slower cooling.
    pub cooling_rate: f64,

    /// Number of neighbor evaluations at each temperature level.
    pub iterations_per_temperature: usize,
}

impl Default for AnnealingConfig {
    fn default() -> Self {
        Self {
            initial_temperature: 10_000.0,
            final_temperature: 0.1,
            cooling_rate: 0.95,
            iterations_per_temperature: 100,
        }
    }
}

impl AnnealingConfig {
    /// Sets the starting temperature.
    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    /// Sets the stopping temperature.
    pub fn with_final_temperature(mut self, t: f64) -> Self {
        self.final_temperature = t;
        self
    }

    /// Sets the geometric cooling factor.
    pub fn with_cooling_rate(mut self, alpha: f64) -> Self {
        self.cooling_rate = alpha;
        self
    }

    /// Sets the evaluations per temperature level.
    pub fn with_iterations_per_temperature(mut self, n: usize) -> Self {
        self.iterations_per_temperature = n;
        self
    }

    /// Number of temperature levels a run will visit, or 0 for an invalid
    /// configuration.
    pub fn temperature_steps(&self) -> usize {
        if self.validate().is_err() {
            return 0;
        }
        let mut steps = 0;
        let mut t = self.initial_temperature;
        while t > self.final_temperature {
            t *= self.cooling_rate;
            steps += 1;
        }
        steps
    }

    /// Validates the configuration.
    pub fn validate(&self) -> TspResult<()> {
        if !self.initial_temperature.is_finite() || !self.final_temperature.is_finite() {
            return Err(TspError::parameters("temperatures must be finite"));
        }
        if self.final_temperature <= 0.0 {
            return Err(TspError::parameters(format!(
                "final_temperature must be positive, got {}",
                self.final_temperature
            )));
        }
        if self.initial_temperature <= self.final_temperature {
            return Err(TspError::parameters(format!(
                "initial_temperature ({}) must exceed final_temperature ({})",
                self.initial_temperature, self.final_temperature
            )));
        }
        // Written so that NaN also fails
        if !(self.cooling_rate > 0.0 && self.cooling_rate < 1.0) {
            return Err(TspError::parameters(format!(
                "cooling_rate must be in (0, 1), got {}",
                self.cooling_rate
            )));
        }
        if self.iterations_per_temperature < 1 {
            return Err(TspError::parameters(
                "iterations_per_temperature must be at least 1",
            ));
        }
        Ok(())
    }
}
