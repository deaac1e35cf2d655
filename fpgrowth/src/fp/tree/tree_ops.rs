use super::tree::{FPNode, FPTree};
use crate::fp::transactions::Item;

impl FPTree {
    /// Inserts one ordered item sequence with the given multiplicity.
    ///
    /// Inserting with `weight` n yields the same tree as n unit insertions.
    pub fn insert_transaction(&mut self, items: &[Item], weight: usize) {
        let mut current_index = self.root_index;

        for &item in items {
            let entry = self.header_table.entry(item).or_default();
            entry.support += weight;

            if let Some(&child_index) = self.nodes[current_index].children.get(&item) {
                self.nodes[child_index].count += weight;
                current_index = child_index;
                continue;
            }

            let new_index = self.nodes.len();
            self.nodes
                .push(FPNode::new_item(item, weight, current_index));
            self.nodes[current_index].children.insert(item, new_index);

            match entry.tail.replace(new_index) {
                Some(tail) => self.nodes[tail].link = Some(new_index),
                None => entry.head = Some(new_index),
            }
            current_index = new_index;
        }
    }

    /// Walks every node carrying `item`, in creation order.
    pub fn node_chain(&self, item: Item) -> NodeChain<'_> {
        NodeChain {
            tree: self,
            next: self.header_table.get(&item).and_then(|entry| entry.head),
        }
    }

    /// Header items in mining order: ascending support, then ascending id.
    pub fn items_by_support(&self) -> Vec<(Item, usize)> {
        let mut items: Vec<(Item, usize)> = self
            .header_table
            .iter()
            .map(|(&item, entry)| (item, entry.support))
            .collect();
        items.sort_unstable_by(|a, b| a.1.cmp(&b.1).then(a.0.cmp(&b.0)));
        items
    }

    /// Items of the ancestors of `node_index`, nearest first, root excluded.
    pub fn ancestors(&self, node_index: usize) -> impl Iterator<Item = Item> + '_ {
        let mut current = self.nodes[node_index].parent;
        std::iter::from_fn(move || {
            let node = &self.nodes[current?];
            current = node.parent;
            node.item
        })
    }
}

/// Iterator over the same-item link chain of a tree.
pub struct NodeChain<'a> {
    tree: &'a FPTree,
    next: Option<usize>,
}

impl<'a> Iterator for NodeChain<'a> {
    type Item = (usize, &'a FPNode);

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.next?;
        let node = &self.tree.nodes[index];
        self.next = node.link;
        Some((index, node))
    }
}
