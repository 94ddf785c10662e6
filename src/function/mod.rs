//! Functions - the calculator function contract and small function adapters.

mod calculator;
mod utils;

pub use calculator::{Calculator, CalculatorError, LocalCalculator};
pub use utils::to_none_returning;
