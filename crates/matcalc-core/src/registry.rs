//! Multiplier factory and registry.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::brute_force::BruteForce;
use crate::divide_conquer::DivideAndConquer;
use crate::multiplier::{CheckedMultiplier, MatrixError, Multiplier};
use crate::strassen::{PaddedStrassen, Strassen};

/// Factory trait for creating multipliers.
pub trait MultiplierFactory: Send + Sync {
    /// Get or create a multiplier by name.
    fn get(&self, name: &str) -> Result<Arc<dyn Multiplier>, MatrixError>;

    /// List all available multiplier names.
    fn available(&self) -> Vec<&str>;
}

/// Default factory with lazy creation and cache.
pub struct DefaultFactory {
    cache: RwLock<HashMap<String, Arc<dyn Multiplier>>>,
}

impl DefaultFactory {
    /// Create a new default factory.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cache: RwLock::new(HashMap::new()),
        }
    }

    fn create_multiplier(name: &str) -> Result<Arc<dyn Multiplier>, MatrixError> {
        match name {
            "bf" | "brute-force" => Ok(Arc::new(CheckedMultiplier::new(Arc::new(
                BruteForce::new(),
            )))),
            "dac" => Ok(Arc::new(CheckedMultiplier::new(Arc::new(
                DivideAndConquer::new(),
            )))),
            "strassen" => Ok(Arc::new(CheckedMultiplier::new(Arc::new(Strassen::new())))),
            "strassen-padded" => Ok(Arc::new(CheckedMultiplier::new(Arc::new(
                PaddedStrassen::new(),
            )))),
            _ => Err(MatrixError::UnknownAlgorithm(name.to_string())),
        }
    }
}

impl Default for DefaultFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl MultiplierFactory for DefaultFactory {
    fn get(&self, name: &str) -> Result<Arc<dyn Multiplier>, MatrixError> {
        if let Some(mult) = self.cache.read().get(name) {
            return Ok(Arc::clone(mult));
        }

        let mult = Self::create_multiplier(name)?;
        self.cache
            .write()
            .insert(name.to_string(), Arc::clone(&mult));
        Ok(mult)
    }

    fn available(&self) -> Vec<&str> {
        vec!["bf", "dac", "strassen", "strassen-padded"]
    }
}
