//! Tour evaluation shared by every strategy.

mod evaluator;

pub use evaluator::TourEvaluator;
