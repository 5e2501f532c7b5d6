//! Simulated annealing over the 2-opt neighborhood.
//!
//! A single-tour trajectory search seeded by the multi-start nearest-neighbor
//! tour. Random segment reversals are accepted by the Metropolis criterion
//! under a geometrically cooled temperature, letting the search escape the
//! local optima plain 2-opt gets stuck in.
//!
//! All randomness comes from the caller's generator, so a fixed seed
//! reproduces a run exactly.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Cerny (1985), "Thermodynamical Approach to the Travelling Salesman Problem"

mod config;
mod runner;

pub use config::AnnealingConfig;
pub use runner::{anneal, simulated_annealing, AnnealingRun};
