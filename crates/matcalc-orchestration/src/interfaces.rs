//! Orchestration interfaces.

use std::time::Duration;

use matcalc_core::{Dims, Matrix, MatrixError};

/// Trait for presenting results to the user.
pub trait ResultPresenter: Send + Sync {
    /// Present one multiplication result.
    fn present_result(
        &self,
        algorithm: &str,
        left: Dims,
        right: Dims,
        product: &Matrix,
        duration: Duration,
        details: bool,
    );

    /// Present a comparison of several results.
    fn present_comparison(&self, results: &[CalculationResult]);

    /// Present an error.
    fn present_error(&self, error: &str);
}

/// Result of a single multiplication.
#[derive(Debug, Clone)]
pub struct CalculationResult {
    /// Algorithm name.
    pub algorithm: String,
    /// The product or a structured error.
    pub outcome: Result<Matrix, MatrixError>,
    /// Computation duration.
    pub duration: Duration,
}

impl CalculationResult {
    /// The product, if the multiplication succeeded.
    #[must_use]
    pub fn product(&self) -> Option<&Matrix> {
        self.outcome.as_ref().ok()
    }
}
