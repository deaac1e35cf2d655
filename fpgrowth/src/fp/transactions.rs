use crate::error::{MiningError, Result};
use ndarray::ArrayView2;
use std::collections::BTreeSet;

/// Opaque item identifier.
pub type Item = i64;

/// A database of item sets, indexed by transaction id (position).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionSet {
    transactions: Vec<Vec<Item>>,
}

impl TransactionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a database from raw item lists; duplicates inside a list collapse.
    pub fn from_transactions<I, T>(transactions: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: IntoIterator<Item = Item>,
    {
        let mut set = Self::new();
        for transaction in transactions {
            set.push(transaction);
        }
        set
    }

    /// Parses one transaction per line, items separated by commas.
    ///
    /// Blank lines are skipped. Any token that is not an integer aborts the
    /// whole parse.
    pub fn parse(input: &str) -> Result<Self> {
        let mut set = Self::new();

        for (line_idx, line) in input.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let mut items = Vec::new();
            for token in line.split(',') {
                let token = token.trim();
                let item = token.parse::<Item>().map_err(|_| MiningError::Parse {
                    line: line_idx + 1,
                    token: token.to_string(),
                })?;
                items.push(item);
            }
            set.push(items);
        }

        Ok(set)
    }

    /// Reads a dense 0/1 matrix: row = transaction, column index = item.
    pub fn from_dense(matrix: ArrayView2<i32>) -> Self {
        let transactions = matrix.rows().into_iter().map(|row| {
            row.iter()
                .enumerate()
                .filter(|&(_, &flag)| flag != 0)
                .map(|(item, _)| item as Item)
                .collect::<Vec<_>>()
        });
        Self::from_transactions(transactions)
    }

    pub fn push(&mut self, items: impl IntoIterator<Item = Item>) {
        let unique: BTreeSet<Item> = items.into_iter().collect();
        self.transactions.push(unique.into_iter().collect());
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    pub fn get(&self, id: usize) -> Option<&[Item]> {
        self.transactions.get(id).map(Vec::as_slice)
    }

    /// Transactions in id order, each with unit weight.
    pub fn iter(&self) -> impl Iterator<Item = &[Item]> {
        self.transactions.iter().map(Vec::as_slice)
    }
}
