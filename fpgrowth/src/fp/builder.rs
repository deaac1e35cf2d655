use super::transactions::{Item, TransactionSet};
use super::tree::{ConditionalPatternBase, FPTree};
use crate::config::SupportThreshold;
use std::collections::HashMap;
use tracing::trace;

/// Item -> occurrence count.
pub type ItemCounts = HashMap<Item, usize>;

pub fn count_items(transactions: &TransactionSet) -> ItemCounts {
    let mut counts = ItemCounts::new();
    for transaction in transactions.iter() {
        for &item in transaction {
            *counts.entry(item).or_insert(0) += 1;
        }
    }
    counts
}

/// Keeps the entries of `counts` that satisfy the threshold.
pub fn frequent_items(counts: &ItemCounts, threshold: &SupportThreshold) -> ItemCounts {
    counts
        .iter()
        .filter(|&(_, &count)| threshold.admits(count))
        .map(|(&item, &count)| (item, count))
        .collect()
}

/// Drops unknown items and sorts the rest by descending count, ascending id.
pub fn order_items(items: &[Item], frequencies: &ItemCounts) -> Vec<Item> {
    let mut ordered: Vec<(Item, usize)> = items
        .iter()
        .filter_map(|item| frequencies.get(item).map(|&count| (*item, count)))
        .collect();
    ordered.sort_unstable_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
    ordered.into_iter().map(|(item, _)| item).collect()
}

/// Builds a tree from weighted transactions restricted to `frequencies`.
///
/// Returns `None` when there is no frequent item to index.
pub fn build_fp_tree<'a, I>(frequencies: &ItemCounts, transactions: I) -> Option<FPTree>
where
    I: IntoIterator<Item = (&'a [Item], usize)>,
{
    if frequencies.is_empty() {
        return None;
    }

    let mut fp_tree = FPTree::new();
    for (items, weight) in transactions {
        let ordered = order_items(items, frequencies);
        if !ordered.is_empty() {
            fp_tree.insert_transaction(&ordered, weight);
        }
    }

    trace!(
        items = fp_tree.header_table.len(),
        nodes = fp_tree.node_count(),
        "built fp-tree"
    );
    Some(fp_tree)
}

/// Counts, filters and builds the tree of a whole database.
pub fn build_root_tree(
    transactions: &TransactionSet,
    threshold: &SupportThreshold,
) -> Option<FPTree> {
    let frequent = frequent_items(&count_items(transactions), threshold);
    build_fp_tree(&frequent, transactions.iter().map(|items| (items, 1)))
}

/// Builds the conditional tree of a pattern base, keeping only items whose
/// aggregated frequency satisfies the threshold.
pub fn build_conditional_fp_tree(
    base: &ConditionalPatternBase,
    threshold: &SupportThreshold,
) -> Option<FPTree> {
    if base.is_empty() {
        return None;
    }

    let frequent = frequent_items(&base.frequencies, threshold);
    build_fp_tree(
        &frequent,
        base.paths
            .iter()
            .map(|path| (path.items.as_slice(), path.count)),
    )
}
