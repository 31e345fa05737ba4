//! Multiplication options and configuration.

use crate::constants::{DEFAULT_RANDOM_MAX, DEFAULT_RANDOM_MIN, DEFAULT_STRASSEN_THRESHOLD};
use crate::matrix_types::Element;

/// Options for matrix generation and multiplication.
#[derive(Debug, Clone)]
pub struct Options {
    /// Leaf size for padded Strassen: operands with any dimension at or
    /// below this go to brute force.
    pub strassen_threshold: usize,
    /// Inclusive lower bound for random entries.
    pub random_min: Element,
    /// Inclusive upper bound for random entries.
    pub random_max: Element,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            strassen_threshold: DEFAULT_STRASSEN_THRESHOLD,
            random_min: DEFAULT_RANDOM_MIN,
            random_max: DEFAULT_RANDOM_MAX,
        }
    }
}

impl Options {
    /// Normalize options: zero thresholds take the default and an
    /// inverted random range is swapped.
    #[must_use]
    pub fn normalize(mut self) -> Self {
        if self.strassen_threshold == 0 {
            self.strassen_threshold = DEFAULT_STRASSEN_THRESHOLD;
        }
        if self.random_min > self.random_max {
            std::mem::swap(&mut self.random_min, &mut self.random_max);
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options() {
        let opts = Options::default();
        assert_eq!(opts.strassen_threshold, DEFAULT_STRASSEN_THRESHOLD);
        assert_eq!(opts.random_min, DEFAULT_RANDOM_MIN);
        assert_eq!(opts.random_max, DEFAULT_RANDOM_MAX);
    }

    #[test]
    fn normalize_zero_threshold() {
        let opts = Options {
            strassen_threshold: 0,
            ..Default::default()
        };
        assert_eq!(opts.normalize().strassen_threshold, DEFAULT_STRASSEN_THRESHOLD);
    }

    #[test]
    fn normalize_swaps_inverted_range() {
        let opts = Options {
            random_min: 5,
            random_max: -5,
            ..Default::default()
        }
        .normalize();
        assert_eq!(opts.random_min, -5);
        assert_eq!(opts.random_max, 5);
    }

    #[test]
    fn normalize_keeps_explicit_values() {
        let opts = Options {
            strassen_threshold: 4,
            random_min: 0,
            random_max: 1,
        }
        .normalize();
        assert_eq!(opts.strassen_threshold, 4);
        assert_eq!((opts.random_min, opts.random_max), (0, 1));
    }
}
