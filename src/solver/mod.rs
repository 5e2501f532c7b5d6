//! Strategy dispatch.
//!
//! Three strategies share the [`TspSolver`] interface:
//!
//! - [`GreedyConstructor`] — Multi-start nearest neighbor
//! - [`TwoOptOptimizer`] — Nearest neighbor improved by 2-opt
//! - [`AnnealingSolver`] — Simulated annealing seeded by nearest neighbor
//!
//! [`Strategy`] selects one of them with its parameters, and
//! [`SolveRequest`] bundles a strategy with the points to solve.

mod request;
mod strategy;

pub use request::SolveRequest;
pub use strategy::{AnnealingSolver, GreedyConstructor, Strategy, TspSolver, TwoOptOptimizer};
