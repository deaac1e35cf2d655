use super::tree::FPTree;
use crate::fp::transactions::Item;
use std::collections::HashMap;

/// Ancestor path of one tree node, root-to-node order, with the node's count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixPath {
    pub items: Vec<Item>,
    pub count: usize,
}

/// Prefix paths leading to one item, plus item frequencies within them.
#[derive(Debug, Clone, Default)]
pub struct ConditionalPatternBase {
    pub paths: Vec<PrefixPath>,
    pub frequencies: HashMap<Item, usize>,
}

impl ConditionalPatternBase {
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Number of synthetic transactions the base stands for.
    pub fn transaction_count(&self) -> usize {
        self.paths.iter().map(|path| path.count).sum()
    }

    /// Expands every path into `count` synthetic transactions, ids from 0.
    pub fn transactions(&self) -> impl Iterator<Item = (usize, &[Item])> + '_ {
        self.paths
            .iter()
            .flat_map(|path| std::iter::repeat(path.items.as_slice()).take(path.count))
            .enumerate()
    }
}

impl FPTree {
    /// Collects the conditional pattern base of `item`.
    ///
    /// Nodes hanging directly off the root have no antecedents and
    /// contribute nothing. Unknown items give an empty base.
    pub fn conditional_pattern_base(&self, item: Item) -> ConditionalPatternBase {
        let mut base = ConditionalPatternBase::default();

        for (node_index, node) in self.node_chain(item) {
            let mut path: Vec<Item> = self.ancestors(node_index).collect();
            if path.is_empty() {
                continue;
            }

            for &ancestor in &path {
                *base.frequencies.entry(ancestor).or_insert(0) += node.count;
            }
            path.reverse();
            base.paths.push(PrefixPath {
                items: path,
                count: node.count,
            });
        }

        base
    }
}
