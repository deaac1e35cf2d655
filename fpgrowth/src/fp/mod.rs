pub mod builder;
pub mod format;
pub mod mining;
pub mod storage;
pub mod transactions;
pub mod tree;


pub use builder::{build_fp_tree, count_items, frequent_items, ItemCounts};
pub use format::format_itemset;
pub use mining::{fp_growth_algorithm, mine, mine_parallel, MiningResult};
pub use storage::{FrequentItemsets, FrequentLevel};
pub use transactions::{Item, TransactionSet};
pub use tree::{ConditionalPatternBase, FPNode, FPTree, HeaderEntry, PrefixPath};
