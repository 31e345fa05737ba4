//! # matcalc-orchestration
//!
//! Parallel execution, multiplier selection, and result comparison.

pub mod interfaces;
pub mod multiplier_selection;
pub mod orchestrator;

pub use interfaces::{CalculationResult, ResultPresenter};
pub use orchestrator::{analyze_comparison_results, execute_multiplications};
