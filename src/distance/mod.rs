//! Distance model.
//!
//! Converts city coordinates into a symmetric integer cost matrix using
//! TSPLIB `EUC_2D` rounding.

mod matrix;

pub use matrix::DistanceMatrix;
