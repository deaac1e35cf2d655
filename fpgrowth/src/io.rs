//! File adapters around the miner: transaction input and result output.

use crate::error::{MiningError, Result};
use crate::fp::{MiningResult, TransactionSet};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Loads a comma-separated transaction file, one transaction per line.
pub fn read_transactions(path: impl AsRef<Path>) -> Result<TransactionSet> {
    let path = path.as_ref();
    let input = fs::read_to_string(path).map_err(|e| MiningError::io(path, e))?;
    let transactions = TransactionSet::parse(&input)?;
    debug!(path = %path.display(), transactions = transactions.len(), "loaded transactions");
    Ok(transactions)
}

/// Writes the formatted itemsets, newline separated, without a trailing newline.
pub fn write_itemsets(path: impl AsRef<Path>, result: &MiningResult) -> Result<()> {
    let path = path.as_ref();
    let output = result.lines().collect::<Vec<_>>().join("\n");
    fs::write(path, output).map_err(|e| MiningError::io(path, e))?;
    debug!(path = %path.display(), lines = result.len(), "wrote itemsets");
    Ok(())
}
