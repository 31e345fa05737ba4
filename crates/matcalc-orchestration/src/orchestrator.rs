//! Core orchestration: parallel execution and result analysis.

use std::sync::Arc;
use std::time::Instant;

use rayon::iter::{IntoParallelRefIterator, ParallelIterator};
use tracing::{info, warn};

use matcalc_core::{Matrix, MatrixError, Multiplier, Options};

use crate::interfaces::CalculationResult;

fn run_one(mult: &dyn Multiplier, left: &Matrix, right: &Matrix, opts: &Options) -> CalculationResult {
    let start = Instant::now();
    let outcome = mult.multiply(left, right, opts);
    let duration = start.elapsed();

    match &outcome {
        Ok(_) => info!(algorithm = mult.name(), ?duration, "Multiplication complete"),
        Err(e) => warn!(algorithm = mult.name(), error = %e, "Multiplication failed"),
    }

    CalculationResult {
        algorithm: mult.name().to_string(),
        outcome,
        duration,
    }
}

/// Multiply `left * right` with every given multiplier.
///
/// A single multiplier runs on the calling thread; several run in
/// parallel. Results keep the order of `multipliers`.
pub fn execute_multiplications(
    multipliers: &[Arc<dyn Multiplier>],
    left: &Matrix,
    right: &Matrix,
    opts: &Options,
) -> Vec<CalculationResult> {
    if let [mult] = multipliers {
        return vec![run_one(mult.as_ref(), left, right, opts)];
    }

    multipliers
        .par_iter()
        .map(|mult| run_one(mult.as_ref(), left, right, opts))
        .collect()
}

/// Check that every strategy succeeded with the same product.
///
/// Differing products give [`MatrixError::Mismatch`]. Otherwise the first
/// failed strategy's error is returned, so a run where some strategies
/// fail never counts as agreement.
pub fn analyze_comparison_results(results: &[CalculationResult]) -> Result<(), MatrixError> {
    let mut products = results.iter().filter_map(|r| r.product().map(|p| (r, p)));

    if let Some((first, expected)) = products.next() {
        for (result, product) in products {
            if product != expected {
                warn!(
                    reference = %first.algorithm,
                    algorithm = %result.algorithm,
                    "Products differ"
                );
                return Err(MatrixError::Mismatch);
            }
        }
    }

    if let Some(failed) = results.iter().find(|r| r.outcome.is_err()) {
        warn!(algorithm = %failed.algorithm, "Strategy failed");
        return failed.outcome.clone().map(|_| ());
    }

    if results.is_empty() {
        return Err(MatrixError::Mismatch);
    }
    Ok(())
}
