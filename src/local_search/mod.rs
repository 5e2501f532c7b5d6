//! Local search operators for improving tours.
//!
//! - [`two_opt_improve`] — First-improvement 2-opt edge exchange

mod config;
mod two_opt;

pub use config::TwoOptConfig;
pub use two_opt::two_opt_improve;
