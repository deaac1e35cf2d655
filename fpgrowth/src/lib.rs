//! Frequent itemset mining with FP-Growth.
//!
//! Transactions are compressed into an [`fp::FPTree`] and mined through
//! conditional pattern bases; see [`fp::fp_growth_algorithm`].

pub mod config;
pub mod error;
pub mod fp;
pub mod io;

#[cfg(feature = "python")]
mod python;

pub use config::{MiningConfig, SupportThreshold};
pub use error::{MiningError, Result};
pub use fp::{fp_growth_algorithm, FrequentItemsets, Item, MiningResult, TransactionSet};
