use super::builder::{build_conditional_fp_tree, build_root_tree};
use super::format::format_itemset;
use super::storage::FrequentItemsets;
use super::transactions::{Item, TransactionSet};
use super::tree::FPTree;
use crate::config::{MiningConfig, SupportThreshold};
use crate::error::Result;
use rayon::prelude::*;
use std::rc::Rc;
use tracing::{debug, info};

/// Outcome of a mining run.
#[derive(Debug, Clone)]
pub struct MiningResult {
    pub itemsets: FrequentItemsets,
    pub threshold: SupportThreshold,
}

impl MiningResult {
    /// Formatted output lines, in mining order.
    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        self.itemsets
            .iter()
            .map(move |(items, support)| format_itemset(items, self.threshold.ratio(support)))
    }

    pub fn total_transactions(&self) -> usize {
        self.threshold.total_transactions()
    }

    pub fn len(&self) -> usize {
        self.itemsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.itemsets.is_empty()
    }
}

pub fn fp_growth_algorithm(
    transactions: &TransactionSet,
    config: &MiningConfig,
) -> Result<MiningResult> {
    let total_transactions = transactions.len();
    let threshold = config.threshold(total_transactions)?;

    let mut itemsets = FrequentItemsets::new();
    if let Some(fp_tree) = build_root_tree(transactions, &threshold) {
        info!(
            transactions = total_transactions,
            frequent_items = fp_tree.header_table.len(),
            nodes = fp_tree.node_count(),
            min_count = threshold.min_count(),
            "mining fp-tree"
        );
        if config.parallel {
            mine_parallel(fp_tree, &threshold, &mut itemsets);
        } else {
            mine(fp_tree, &threshold, &mut itemsets);
        }
    }

    info!(itemsets = itemsets.len(), "mining finished");
    Ok(MiningResult {
        itemsets,
        threshold,
    })
}

/// One pending header item of a tree still being mined.
struct Step {
    tree: Rc<FPTree>,
    prefix: Rc<Vec<Item>>,
    item: Item,
    support: usize,
}

/// Mines `fp_tree` depth first, appending every frequent itemset to `collector`.
///
/// Items are processed by ascending support and each item's conditional
/// tree is exhausted before the next item, but the descent runs on an
/// explicit stack rather than the call stack.
pub fn mine(fp_tree: FPTree, threshold: &SupportThreshold, collector: &mut FrequentItemsets) {
    mine_from(fp_tree, Vec::new(), threshold, collector);
}

/// Mines the top-level items on the rayon pool.
///
/// Produces the same itemsets in the same order as [`mine`].
pub fn mine_parallel(
    fp_tree: FPTree,
    threshold: &SupportThreshold,
    collector: &mut FrequentItemsets,
) {
    let items = fp_tree.items_by_support();

    let per_item: Vec<FrequentItemsets> = items
        .par_iter()
        .map(|&(item, support)| {
            let mut local = FrequentItemsets::new();
            if let Some((cond_tree, prefix)) =
                mine_item(&fp_tree, &[], item, support, threshold, &mut local)
            {
                mine_from(cond_tree, prefix, threshold, &mut local);
            }
            local
        })
        .collect();

    for local in per_item {
        collector.append(local);
    }
}

fn mine_from(
    fp_tree: FPTree,
    prefix: Vec<Item>,
    threshold: &SupportThreshold,
    collector: &mut FrequentItemsets,
) {
    let mut stack = Vec::new();
    push_steps(&mut stack, Rc::new(fp_tree), Rc::new(prefix));

    while let Some(step) = stack.pop() {
        if let Some((cond_tree, prefix)) = mine_item(
            &step.tree,
            &step.prefix,
            step.item,
            step.support,
            threshold,
            collector,
        ) {
            push_steps(&mut stack, Rc::new(cond_tree), Rc::new(prefix));
        }
    }
}

/// Pushes the header items of `tree` so the least frequent is popped first.
fn push_steps(stack: &mut Vec<Step>, tree: Rc<FPTree>, prefix: Rc<Vec<Item>>) {
    for (item, support) in tree.items_by_support().into_iter().rev() {
        stack.push(Step {
            tree: Rc::clone(&tree),
            prefix: Rc::clone(&prefix),
            item,
            support,
        });
    }
}

/// Records `prefix ∪ {item}` and builds its conditional tree, if any.
fn mine_item(
    fp_tree: &FPTree,
    prefix: &[Item],
    item: Item,
    support: usize,
    threshold: &SupportThreshold,
    collector: &mut FrequentItemsets,
) -> Option<(FPTree, Vec<Item>)> {
    let mut itemset = Vec::with_capacity(prefix.len() + 1);
    itemset.extend_from_slice(prefix);
    itemset.push(item);

    collector.add_itemset(&itemset, support);
    debug!(?itemset, support, "frequent itemset");

    let base = fp_tree.conditional_pattern_base(item);
    let cond_tree = build_conditional_fp_tree(&base, threshold)?;
    debug!(
        item,
        paths = base.paths.len(),
        items = cond_tree.header_table.len(),
        "conditional fp-tree"
    );
    Some((cond_tree, itemset))
}
