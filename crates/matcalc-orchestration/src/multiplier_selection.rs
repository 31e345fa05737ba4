//! Multiplier selection logic.

use std::sync::Arc;

use matcalc_core::registry::MultiplierFactory;
use matcalc_core::{MatrixError, Multiplier};

/// Get multipliers to run based on algorithm selection.
///
/// `"all"` selects every algorithm the factory offers; a comma-separated
/// list selects each named algorithm in order.
pub fn get_multipliers_to_run(
    algo: &str,
    factory: &dyn MultiplierFactory,
) -> Result<Vec<Arc<dyn Multiplier>>, MatrixError> {
    match algo {
        "all" => factory
            .available()
            .into_iter()
            .map(|name| factory.get(name))
            .collect(),
        names => names
            .split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(|name| factory.get(name))
            .collect::<Result<Vec<_>, _>>()
            .and_then(|mults| {
                if mults.is_empty() {
                    Err(MatrixError::UnknownAlgorithm(algo.to_string()))
                } else {
                    Ok(mults)
                }
            }),
    }
}
