//! # u-tsp
//!
//! Heuristic solver for the symmetric Euclidean Traveling Salesman Problem,
//! with three escalating strategies: greedy construction, 2-opt local
//! search, and simulated annealing.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Point, Tour, SolverResult)
//! - [`distance`] — TSPLIB `EUC_2D` distance matrix
//! - [`evaluation`] — Closed-tour length and 2-opt move deltas
//! - [`constructive`] — Multi-start nearest-neighbor construction
//! - [`local_search`] — First-improvement 2-opt
//! - [`annealing`] — Simulated annealing over the 2-opt neighborhood
//! - [`solver`] — Strategy selection and the caller-owned solve request
//! - [`instances`] — TSPLIB benchmark instances (berlin52, eil101)
//! - [`error`] — Error type shared by all operations
//!
//! ## Example
//!
//! ```
//! use u_tsp::instances::berlin52;
//! use u_tsp::solver::{SolveRequest, Strategy};
//!
//! let instance = berlin52();
//! let request = SolveRequest::new(instance.points.clone(), Strategy::local_search());
//! let result = request.solve_seeded(42).unwrap();
//! assert!(result.distance >= instance.optimal);
//! ```

pub mod annealing;
pub mod constructive;
pub mod distance;
pub mod error;
pub mod evaluation;
pub mod instances;
pub mod local_search;
pub mod models;
pub mod solver;

pub use error::{TspError, TspResult};
