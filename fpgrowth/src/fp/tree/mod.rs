// Tree module - FP-Tree arena, header table and conditional pattern bases

mod pattern_base;
mod tree;
mod tree_ops;

pub use pattern_base::{ConditionalPatternBase, PrefixPath};
pub use tree::{FPNode, FPTree, HeaderEntry};
pub use tree_ops::NodeChain;
