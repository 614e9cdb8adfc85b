//! `bintree` keeps a set of values in a binary search tree, ordered by a
//! comparator chosen when the tree is built.
//!
//! Every value lives in its own [`Node`], which owns up to two children. The
//! whole arrangement hangs off one rule: whatever sits below a node's left
//! link compares less than the node's value, and whatever sits below its right
//! link compares greater. Nothing in the tree ever compares equal to anything
//! else, so inserting a value the comparator can't tell apart from a stored one
//! leaves the stored one alone.
//!
//! The comparator defaults to the natural [`Ord`] order of `T`. Any other total
//! order, including one over a type that isn't `Ord` at all, goes in through
//! [`Tree::with_comparator`].
//!
//! Lookups walk a single root-to-leaf path, so they cost `O(height)`. Nothing
//! rotates or rebalances: feed the tree sorted input and it grows into a list
//! as tall as it is long. Every operation walks the tree with loops and
//! explicit stacks rather than recursion. Reading the left subtree, then the node, then the right subtree gives the
//! values back in comparator order.
//!
//! # Examples
//!
//! ```
//! use bintree::Tree;
//!
//! let mut tree: Tree<i32> = [5, 3, 8, 1, 4, 7, 9].iter().copied().collect();
//!
//! assert!(tree.search(&4));
//! assert_eq!(tree.min().map(|n| *n.value()), Some(1));
//! assert_eq!(tree.max().map(|n| *n.value()), Some(9));
//!
//! // Removing a node with two children promotes its in-order successor.
//! tree.remove(&5);
//! assert_eq!(tree.in_order_traverse(), vec![&1, &3, &4, &7, &8, &9]);
//! assert_eq!(tree.pre_order_traverse(), vec![&7, &3, &1, &4, &8, &9]);
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod node;
pub mod traverse;
pub mod tree;

pub use node::Node;
pub use traverse::Iter;
pub use tree::{Compare, Tree};
