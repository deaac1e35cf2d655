//! Mining parameters.

use crate::error::{MiningError, Result};

/// Parameters of a single mining run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MiningConfig {
    /// Minimum support as a fraction of the transaction count, in (0, 1].
    pub min_support: f64,
    /// Mine the top-level header items on the rayon thread pool.
    pub parallel: bool,
}

impl Default for MiningConfig {
    fn default() -> Self {
        Self {
            min_support: 0.5,
            parallel: false,
        }
    }
}

impl MiningConfig {
    pub fn new(min_support: f64) -> Self {
        Self {
            min_support,
            ..Self::default()
        }
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.min_support > 0.0 && self.min_support <= 1.0 {
            Ok(())
        } else {
            Err(MiningError::InvalidSupport(self.min_support))
        }
    }

    /// Resolves the fractional support against a concrete database size.
    pub fn threshold(&self, total_transactions: usize) -> Result<SupportThreshold> {
        self.validate()?;
        Ok(SupportThreshold::new(self.min_support, total_transactions))
    }
}

/// Absolute support threshold for one database.
///
/// The minimum count is kept as an unrounded float: a count qualifies when
/// `count >= fraction * total`, so at 0.25 over 10 transactions the
/// smallest qualifying count is 3.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SupportThreshold {
    min_count: f64,
    total_transactions: usize,
}

impl SupportThreshold {
    pub fn new(min_support: f64, total_transactions: usize) -> Self {
        Self {
            min_count: min_support * total_transactions as f64,
            total_transactions,
        }
    }

    #[inline]
    pub fn admits(&self, count: usize) -> bool {
        count as f64 >= self.min_count
    }

    pub fn min_count(&self) -> f64 {
        self.min_count
    }

    pub fn total_transactions(&self) -> usize {
        self.total_transactions
    }

    /// Support ratio of an absolute count; zero for an empty database.
    pub fn ratio(&self, count: usize) -> f64 {
        if self.total_transactions == 0 {
            0.0
        } else {
            count as f64 / self.total_transactions as f64
        }
    }
}
