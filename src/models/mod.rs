//! Domain model types for the Euclidean TSP.
//!
//! Points are immutable city locations, a tour is a permutation of city
//! indices closed into a cycle, and a solver result pairs a tour with its length.

mod point;
mod result;
mod tour;

pub use point::Point;
pub use result::SolverResult;
pub use tour::Tour;
