use crate::fp::transactions::Item;
use std::collections::HashMap;

#[derive(Debug, Clone)]
pub struct FPNode {
    pub item: Option<Item>,
    pub count: usize,
    pub parent: Option<usize>,
    pub children: HashMap<Item, usize>,
    /// Next node in the arena carrying the same item.
    pub link: Option<usize>,
}

/// Header table entry: aggregate support plus both ends of the node chain.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeaderEntry {
    pub support: usize,
    pub head: Option<usize>,
    pub tail: Option<usize>,
}

#[derive(Debug, Clone)]
pub struct FPTree {
    pub nodes: Vec<FPNode>,
    pub header_table: HashMap<Item, HeaderEntry>,
    pub root_index: usize,
}

impl FPNode {
    pub fn new_root() -> Self {
        Self {
            item: None,
            count: 0,
            parent: None,
            children: HashMap::new(),
            link: None,
        }
    }

    pub fn new_item(item: Item, count: usize, parent: usize) -> Self {
        Self {
            item: Some(item),
            count,
            parent: Some(parent),
            children: HashMap::new(),
            link: None,
        }
    }
}

impl Default for FPTree {
    fn default() -> Self {
        Self::new()
    }
}

impl FPTree {
    pub fn new() -> Self {
        Self {
            nodes: vec![FPNode::new_root()],
            header_table: HashMap::new(),
            root_index: 0,
        }
    }

    /// True when no transaction has been inserted.
    pub fn is_empty(&self) -> bool {
        self.header_table.is_empty()
    }

    /// Number of item nodes, root excluded.
    pub fn node_count(&self) -> usize {
        self.nodes.len() - 1
    }

    pub fn support(&self, item: Item) -> Option<usize> {
        self.header_table.get(&item).map(|entry| entry.support)
    }
}
